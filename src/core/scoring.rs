use validator::Validate;

use crate::core::{
    dimensions::score_dimension,
    error::MatchError,
    highlights::{generate_highlights, DimensionScores},
    rarity::RarityIndex,
    weights::allocate,
};
use crate::models::{Breakdown, MatchResult, Profile, ScoringWeights};

/// Calculate the compatibility (0-100) of a candidate for a viewer
///
/// Scoring formula, before redistribution over the active dimensions:
/// score = (
///     interests * 0.23 +      # rarity-weighted tiered overlap
///     values * 0.25 +         # rank-weighted overlap
///     personality * 0.20 +    # four-axis type compatibility
///     astrology * 0.10 +      # zodiac element table
///     lifestyle * 0.12 +      # availability, activity, group size
///     goals * 0.10            # friendship goal overlap
/// )
pub fn calculate_match_score(
    viewer: &Profile,
    candidate: &Profile,
    rarity: &RarityIndex,
    base: &ScoringWeights,
) -> MatchResult {
    let weights = allocate(base, viewer, candidate);

    let mut scores = DimensionScores::default();
    let mut breakdown = Breakdown::default();
    let mut total = 0.0;

    // Inactive dimensions are never computed
    for (dimension, weight) in weights.active() {
        let score = score_dimension(dimension, viewer, candidate, rarity);
        scores.set(dimension, score);
        breakdown.set(dimension, score.map(to_percent));
        total += weight * score.unwrap_or(0.0);
    }

    MatchResult {
        overall: to_percent(total),
        breakdown,
        highlights: generate_highlights(viewer, candidate, &scores),
    }
}

/// Score one pair against a corpus with the default weights
pub fn aggregate(
    viewer: &Profile,
    candidate: &Profile,
    corpus: &[Profile],
) -> Result<MatchResult, MatchError> {
    ensure_identified(viewer, "viewer")?;
    ensure_identified(candidate, "candidate")?;

    let rarity = RarityIndex::build(corpus);
    Ok(calculate_match_score(
        viewer,
        candidate,
        &rarity,
        &ScoringWeights::default(),
    ))
}

/// A profile without an id stands for an absent profile
pub(crate) fn ensure_identified(profile: &Profile, role: &str) -> Result<(), MatchError> {
    profile.validate().map_err(|errors| MatchError::InvalidInput {
        reason: format!("{} profile is missing its identity: {}", role, errors),
    })
}

/// Round a `[0, 1]` score to a whole percentage
#[inline]
fn to_percent(score: f64) -> u8 {
    (score * 100.0).round().clamp(0.0, 100.0) as u8
}
