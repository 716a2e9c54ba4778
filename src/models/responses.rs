use serde::{Deserialize, Serialize};
use crate::models::domain::RankedMatch;

/// Ranked candidates for one viewer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankResponse {
    pub viewer_id: String,
    pub matches: Vec<RankedMatch>,
    /// Candidates scored before the limit was applied
    pub total_candidates: usize,
}
