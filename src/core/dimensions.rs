//! Per-dimension compatibility scorers
//!
//! Every scorer is a pure function returning a value in `[0, 1]`. Whether a
//! dimension applies to a pair at all is decided by [`is_available`];
//! [`score_dimension`] returns `None` for pairs where it does not.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::{rarity::RarityIndex, similarity::{intersection_count, jaccard}};
use crate::models::{Dimension, Element, Lifestyle, PersonalityType, Profile, ZodiacSign};

const TOP_TIER_WEIGHT: f64 = 3.0;
const EXTRA_TIER_WEIGHT: f64 = 1.0;

const VALUE_RANK_WEIGHTS: [f64; 5] = [5.0, 4.0, 3.0, 2.0, 1.0];
const VALUE_TAIL_WEIGHT: f64 = 0.5;
const EXTRA_VALUE_WEIGHT: f64 = 0.5;

const SAME_SIGN_BONUS: f64 = 0.10;

const AVAILABILITY_WEIGHT: f64 = 0.4;
const ACTIVITY_WEIGHT: f64 = 0.3;
const GROUP_SIZE_WEIGHT: f64 = 0.3;
const NEUTRAL_ACTIVITY: f64 = 0.5;

/// Activation precondition of a dimension for a pair
pub fn is_available(dimension: Dimension, viewer: &Profile, candidate: &Profile) -> bool {
    match dimension {
        Dimension::Interests | Dimension::Values => true,
        Dimension::Personality => viewer.personality().is_some() && candidate.personality().is_some(),
        Dimension::Astrology => viewer.zodiac_sign.is_some() && candidate.zodiac_sign.is_some(),
        Dimension::Lifestyle => {
            viewer.active_lifestyle().is_some() && candidate.active_lifestyle().is_some()
        }
        Dimension::Goals => viewer.has_goals() && candidate.has_goals(),
    }
}

/// Raw score of one dimension, `None` when it does not apply to the pair
pub fn score_dimension(
    dimension: Dimension,
    viewer: &Profile,
    candidate: &Profile,
    rarity: &RarityIndex,
) -> Option<f64> {
    match dimension {
        Dimension::Interests => Some(interest_score(viewer, candidate, rarity)),
        Dimension::Values => Some(values_score(viewer, candidate)),
        Dimension::Personality => Some(personality_score(viewer.personality()?, candidate.personality()?)),
        Dimension::Astrology => Some(astrology_score(viewer.zodiac_sign?, candidate.zodiac_sign?)),
        Dimension::Lifestyle => Some(lifestyle_score(
            viewer.active_lifestyle()?,
            candidate.active_lifestyle()?,
        )),
        Dimension::Goals => {
            if !(viewer.has_goals() && candidate.has_goals()) {
                return None;
            }
            Some(goals_score(&viewer.friendship_goals, &candidate.friendship_goals))
        }
    }
}

/// Top-tier tags weigh 3, extra-tier tags 1; the top tier wins on conflict
fn tiered_interests(profile: &Profile) -> BTreeMap<&str, f64> {
    let mut tiers = BTreeMap::new();
    for tag in &profile.top_interests {
        tiers.insert(tag.as_str(), TOP_TIER_WEIGHT);
    }
    for tag in &profile.extra_interests {
        tiers.entry(tag.as_str()).or_insert(EXTRA_TIER_WEIGHT);
    }
    tiers
}

/// Rarity-weighted, tiered Jaccard similarity of interests
pub fn interest_score(viewer: &Profile, candidate: &Profile, rarity: &RarityIndex) -> f64 {
    let viewer_tiers = tiered_interests(viewer);
    let candidate_tiers = tiered_interests(candidate);

    // Sorted iteration keeps float accumulation reproducible
    let tags: BTreeSet<&str> = viewer_tiers
        .keys()
        .chain(candidate_tiers.keys())
        .copied()
        .collect();

    let mut score = 0.0;
    let mut max_score = 0.0;

    for tag in tags {
        let weight_a = viewer_tiers.get(tag).copied().unwrap_or(0.0);
        let weight_b = candidate_tiers.get(tag).copied().unwrap_or(0.0);
        let bonus = rarity.weight(tag);

        if weight_a > 0.0 && weight_b > 0.0 {
            score += weight_a.min(weight_b) * bonus;
        }
        max_score += weight_a.max(weight_b) * bonus;
    }

    if max_score > 0.0 {
        score / max_score
    } else {
        0.0
    }
}

#[inline]
fn value_rank_weight(position: usize) -> f64 {
    VALUE_RANK_WEIGHTS
        .get(position)
        .copied()
        .unwrap_or(VALUE_TAIL_WEIGHT)
}

/// Position-weighted overlap of values
///
/// Not symmetric: the denominator only accumulates over the viewer's ranked
/// positions, so argument order matters.
pub fn values_score(viewer: &Profile, candidate: &Profile) -> f64 {
    let mut score = 0.0;
    let mut max_score = 0.0;

    for (i, value_a) in viewer.top_values.iter().enumerate() {
        let weight_a = value_rank_weight(i);
        for (j, value_b) in candidate.top_values.iter().enumerate() {
            if value_a == value_b {
                score += (weight_a + value_rank_weight(j)) / 2.0;
            }
        }
        max_score += weight_a;
    }

    let extra_overlap = intersection_count(&viewer.extra_values, &candidate.extra_values);
    score += extra_overlap as f64 * EXTRA_VALUE_WEIGHT;
    let extra_len = viewer.extra_values.len().max(candidate.extra_values.len());
    max_score += extra_len as f64 * EXTRA_VALUE_WEIGHT;

    if max_score > 0.0 {
        (score / max_score).min(1.0)
    } else {
        0.0
    }
}

/// Axis-weighted personality compatibility
///
/// S/N and T/F only reward agreement; E/I and J/P give partial credit to
/// opposites.
pub fn personality_score(a: PersonalityType, b: PersonalityType) -> f64 {
    let mut score = 0.0;

    if a.perception() == b.perception() {
        score += 0.35;
    }
    if a.judgment() == b.judgment() {
        score += 0.30;
    }
    score += if a.energy() == b.energy() { 0.20 } else { 0.10 };
    score += if a.structure() == b.structure() { 0.15 } else { 0.08 };

    score
}

/// Fixed element-pair table, symmetric under swap
pub fn element_compatibility(a: Element, b: Element) -> f64 {
    use Element::*;

    match (a, b) {
        (x, y) if x == y => 0.90,
        (Fire, Air) | (Air, Fire) | (Earth, Water) | (Water, Earth) => 0.80,
        (Fire, Earth) | (Earth, Fire) | (Air, Water) | (Water, Air) => 0.50,
        _ => 0.35,
    }
}

/// Element compatibility plus a capped bonus for identical signs
pub fn astrology_score(a: ZodiacSign, b: ZodiacSign) -> f64 {
    let base = element_compatibility(a.element(), b.element());
    if a == b {
        (base + SAME_SIGN_BONUS).min(1.0)
    } else {
        base
    }
}

/// Weighted blend of availability, activity level and group-size overlap
pub fn lifestyle_score(a: &Lifestyle, b: &Lifestyle) -> f64 {
    let availability = jaccard(&a.availability, &b.availability);

    let activity = match (a.activity(), b.activity()) {
        (Some(level_a), Some(level_b)) => (1.0 - (level_a - level_b).abs()).clamp(0.0, 1.0),
        _ => NEUTRAL_ACTIVITY,
    };

    let group_size = jaccard(&a.group_size_preference, &b.group_size_preference);

    availability * AVAILABILITY_WEIGHT + activity * ACTIVITY_WEIGHT + group_size * GROUP_SIZE_WEIGHT
}

/// Jaccard similarity of friendship goals
#[inline]
pub fn goals_score(a: &[String], b: &[String]) -> f64 {
    jaccard(a, b)
}
