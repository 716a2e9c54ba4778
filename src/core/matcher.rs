use std::collections::HashSet;

use rayon::prelude::*;
use validator::Validate;

use crate::core::{
    error::MatchError,
    rarity::RarityIndex,
    scoring::{calculate_match_score, ensure_identified},
    similarity::shared_tags,
};
use crate::models::{MatchResult, Profile, RankRequest, RankResponse, RankedMatch, ScoringWeights};

/// Main ranking orchestrator
///
/// # Pipeline Stages
/// 1. Rarity index built once from the corpus
/// 2. Self and already-decided candidates filtered out
/// 3. Per-candidate weight allocation, dimension scoring and highlights,
///    spread across the rayon thread pool
/// 4. Stable sort by overall score
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    /// Create a matcher with custom base weights
    pub fn new(weights: ScoringWeights) -> Result<Self, MatchError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score one pair against a prebuilt rarity index
    pub fn score(
        &self,
        viewer: &Profile,
        candidate: &Profile,
        rarity: &RarityIndex,
    ) -> Result<MatchResult, MatchError> {
        ensure_identified(viewer, "viewer")?;
        ensure_identified(candidate, "candidate")?;
        Ok(calculate_match_score(viewer, candidate, rarity, &self.weights))
    }

    /// Rank candidates for a viewer
    ///
    /// # Arguments
    /// * `viewer` - The profile the ranking is computed for
    /// * `candidates` - Profiles to score, in caller order
    /// * `corpus` - Population used for interest rarity
    /// * `exclude` - Ids already decided by the viewer
    ///
    /// # Returns
    /// Candidates sorted by descending overall score; equal scores keep their
    /// input order.
    pub fn rank(
        &self,
        viewer: &Profile,
        candidates: &[Profile],
        corpus: &[Profile],
        exclude: &HashSet<String>,
    ) -> Result<Vec<RankedMatch>, MatchError> {
        ensure_identified(viewer, "viewer")?;

        tracing::debug!(
            "Ranking {} candidates for viewer {} ({} excluded, corpus of {})",
            candidates.len(),
            viewer.id,
            exclude.len(),
            corpus.len()
        );

        // Every candidate shares one index; it must be complete before scoring
        let rarity = RarityIndex::build(corpus);
        let viewer_interests = viewer.interest_tags();
        let viewer_values = viewer.value_tags();

        // rayon collects in candidate order
        let mut ranked = candidates
            .par_iter()
            .filter(|candidate| candidate.id != viewer.id && !exclude.contains(&candidate.id))
            .map(|candidate| -> Result<RankedMatch, MatchError> {
                ensure_identified(candidate, "candidate")?;

                let result = calculate_match_score(viewer, candidate, &rarity, &self.weights);
                tracing::trace!(
                    "Scored candidate {} for viewer {}: {}",
                    candidate.id,
                    viewer.id,
                    result.overall
                );

                Ok(RankedMatch {
                    profile: candidate.clone(),
                    result,
                    shared_interests: owned(shared_tags(&viewer_interests, &candidate.interest_tags())),
                    shared_values: owned(shared_tags(&viewer_values, &candidate.value_tags())),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // sort_by is stable: ties keep first-seen order
        ranked.sort_by(|a, b| b.result.overall.cmp(&a.result.overall));

        Ok(ranked)
    }

    /// Rank a whole roster for the viewer named in the request
    ///
    /// The roster serves as candidate set and rarity corpus alike.
    pub fn find_matches(
        &self,
        request: &RankRequest,
        roster: &[Profile],
    ) -> Result<RankResponse, MatchError> {
        request.validate().map_err(|errors| MatchError::InvalidInput {
            reason: format!("invalid rank request: {}", errors),
        })?;

        let viewer = roster
            .iter()
            .find(|profile| profile.id == request.viewer_id)
            .ok_or_else(|| MatchError::InvalidInput {
                reason: format!("viewer {} is not in the roster", request.viewer_id),
            })?;

        let exclude: HashSet<String> = request.exclude_ids.iter().cloned().collect();
        let mut matches = self.rank(viewer, roster, roster, &exclude)?;
        let total_candidates = matches.len();
        matches.truncate(usize::from(request.limit));

        tracing::info!(
            "Found {} matches for viewer {} (returning {})",
            total_candidates,
            viewer.id,
            matches.len()
        );

        Ok(RankResponse {
            viewer_id: viewer.id.clone(),
            matches,
            total_candidates,
        })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

fn owned(tags: Vec<&str>) -> Vec<String> {
    tags.into_iter().map(str::to_string).collect()
}

/// Rank candidates with the default weights
pub fn rank(
    viewer: &Profile,
    candidates: &[Profile],
    corpus: &[Profile],
    exclude: &HashSet<String>,
) -> Result<Vec<RankedMatch>, MatchError> {
    Matcher::with_default_weights().rank(viewer, candidates, corpus, exclude)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_candidate(id: &str, interests: &[&str]) -> Profile {
        Profile {
            id: id.to_string(),
            top_interests: interests.iter().map(|s| s.to_string()).collect(),
            ..Profile::default()
        }
    }

    fn create_viewer() -> Profile {
        create_candidate("viewer", &["coffee", "hiking", "reading"])
    }

    #[test]
    fn test_rank_sorted_by_score() {
        let viewer = create_viewer();
        let candidates = vec![
            create_candidate("1", &["gaming"]),
            create_candidate("2", &["coffee", "hiking", "reading"]),
            create_candidate("3", &["coffee"]),
        ];

        let ranked = rank(&viewer, &candidates, &candidates, &HashSet::new()).unwrap();

        let ids: Vec<&str> = ranked.iter().map(|m| m.profile.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
        assert_eq!(ranked[0].shared_interests, vec!["coffee", "hiking", "reading"]);
        assert!(ranked[0].shared_values.is_empty());
    }

    #[test]
    fn test_rank_reports_shared_values() {
        let mut viewer = create_viewer();
        viewer.top_values = vec!["kindness".to_string(), "growth".to_string()];
        viewer.extra_values = vec!["humor".to_string()];

        let mut candidate = create_candidate("1", &["coffee"]);
        candidate.top_values = vec!["growth".to_string()];
        candidate.extra_values = vec!["kindness".to_string(), "fun".to_string()];

        let ranked = rank(&viewer, &[candidate], &[], &HashSet::new()).unwrap();

        assert_eq!(ranked[0].shared_values, vec!["growth", "kindness"]);
        assert_eq!(ranked[0].shared_interests, vec!["coffee"]);
    }

    #[test]
    fn test_rank_keeps_input_order_across_many_ties() {
        let viewer = create_viewer();
        let candidates: Vec<Profile> = (0..200)
            .map(|i| create_candidate(&i.to_string(), &["coffee"]))
            .collect();

        let ranked = rank(&viewer, &candidates, &candidates, &HashSet::new()).unwrap();

        let ids: Vec<String> = ranked.into_iter().map(|m| m.profile.id).collect();
        let expected: Vec<String> = (0..200).map(|i| i.to_string()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let viewer = create_viewer();
        let candidates = vec![
            create_candidate("a", &["gaming"]),
            create_candidate("b", &["coffee"]),
            create_candidate("c", &["movies"]),
        ];

        let ranked = rank(&viewer, &candidates, &[], &HashSet::new()).unwrap();

        let ids: Vec<&str> = ranked.iter().map(|m| m.profile.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_rank_excludes_self_and_decided() {
        let viewer = create_viewer();
        let candidates = vec![
            viewer.clone(),
            create_candidate("1", &["coffee", "hiking", "reading"]),
            create_candidate("2", &["gaming"]),
        ];
        let exclude: HashSet<String> = ["1".to_string()].into_iter().collect();

        let ranked = rank(&viewer, &candidates, &candidates, &exclude).unwrap();

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].profile.id, "2");
    }

    #[test]
    fn test_rank_rejects_anonymous_candidate() {
        let viewer = create_viewer();
        let candidates = vec![create_candidate("", &["coffee"])];

        let err = rank(&viewer, &candidates, &[], &HashSet::new()).unwrap_err();
        assert!(matches!(err, MatchError::InvalidInput { .. }));
    }

    #[test]
    fn test_custom_weights_validated() {
        let weights = ScoringWeights {
            values: f64::NAN,
            ..ScoringWeights::default()
        };
        assert!(Matcher::new(weights).is_err());
        assert!(Matcher::new(ScoringWeights::default()).is_ok());
    }

    #[test]
    fn test_weights_overflowing_in_sum_rejected() {
        let weights = ScoringWeights {
            interests: 1e308,
            values: 1e308,
            personality: 1e308,
            astrology: 1e308,
            lifestyle: 1e308,
            goals: 1e308,
        };
        assert!(matches!(
            Matcher::new(weights),
            Err(MatchError::UnboundedWeights { .. })
        ));
    }

    #[test]
    fn test_find_matches_respects_limit() {
        let matcher = Matcher::default();
        let mut roster = vec![create_viewer()];
        roster.extend((0..10).map(|i| create_candidate(&i.to_string(), &["coffee"])));

        let request = RankRequest {
            viewer_id: "viewer".to_string(),
            limit: 3,
            exclude_ids: vec!["0".to_string()],
        };

        let response = matcher.find_matches(&request, &roster).unwrap();

        assert_eq!(response.viewer_id, "viewer");
        assert_eq!(response.total_candidates, 9);
        assert_eq!(response.matches.len(), 3);
        assert_eq!(response.matches[0].profile.id, "1");
    }

    #[test]
    fn test_find_matches_unknown_viewer() {
        let matcher = Matcher::default();
        let roster = vec![create_candidate("1", &["coffee"])];
        let request = RankRequest {
            viewer_id: "ghost".to_string(),
            limit: 5,
            exclude_ids: vec![],
        };

        assert!(matches!(
            matcher.find_matches(&request, &roster),
            Err(MatchError::InvalidInput { .. })
        ));
    }
}
