use crate::core::dimensions::is_available;
use crate::models::{Dimension, Profile, ScoringWeights};

/// Effective per-dimension weights for one pair
///
/// Active weights sum to 1.0; inactive dimensions carry 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ActiveWeights {
    weights: [f64; 6],
}

impl ActiveWeights {
    #[inline]
    pub fn get(&self, dimension: Dimension) -> f64 {
        self.weights[dimension.index()]
    }

    #[inline]
    pub fn is_active(&self, dimension: Dimension) -> bool {
        self.get(dimension) > 0.0
    }

    pub fn active(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL
            .into_iter()
            .map(move |d| (d, self.get(d)))
            .filter(|(_, w)| *w > 0.0)
    }

    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }
}

/// Redistribute base weights over the dimensions active for a pair
///
/// A dimension is active when its data is present on both sides and its
/// base weight is positive. Active base weights are divided by their sum.
/// Non-finite base weights leave every dimension inactive.
pub fn allocate(base: &ScoringWeights, viewer: &Profile, candidate: &Profile) -> ActiveWeights {
    let mut weights = [0.0; 6];

    for dimension in Dimension::ALL {
        let weight = base.get(dimension);
        if weight > 0.0 && is_available(dimension, viewer, candidate) {
            weights[dimension.index()] = weight;
        }
    }

    // Scale by the largest weight first so the sum cannot overflow
    let largest = weights.iter().copied().fold(0.0, f64::max);
    if !(largest > 0.0 && largest.is_finite()) {
        return ActiveWeights::default();
    }

    for weight in weights.iter_mut() {
        *weight /= largest;
    }
    let total: f64 = weights.iter().sum();
    for weight in weights.iter_mut() {
        *weight /= total;
    }

    ActiveWeights { weights }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Lifestyle, ZodiacSign};

    fn bare(id: &str) -> Profile {
        Profile {
            id: id.to_string(),
            ..Profile::default()
        }
    }

    fn full(id: &str) -> Profile {
        Profile {
            id: id.to_string(),
            personality_type: Some("ENFP".to_string()),
            zodiac_sign: Some(ZodiacSign::Leo),
            lifestyle: Some(Lifestyle {
                availability: vec!["weekends".to_string()],
                activity_level: Some(0.5),
                group_size_preference: vec![],
            }),
            friendship_goals: vec!["foodie-friend".to_string()],
            ..Profile::default()
        }
    }

    #[test]
    fn test_all_active_keeps_base_weights() {
        let base = ScoringWeights::default();
        let weights = allocate(&base, &full("a"), &full("b"));

        for dimension in Dimension::ALL {
            assert!((weights.get(dimension) - base.get(dimension)).abs() < 1e-9);
        }
        assert_eq!(weights.active().count(), 6);
    }

    #[test]
    fn test_only_core_dimensions_active() {
        let weights = allocate(&ScoringWeights::default(), &bare("a"), &full("b"));

        assert!((weights.get(Dimension::Interests) - 0.23 / 0.48).abs() < 1e-12);
        assert!((weights.get(Dimension::Values) - 0.25 / 0.48).abs() < 1e-12);
        assert!(!weights.is_active(Dimension::Personality));
        assert!(!weights.is_active(Dimension::Astrology));
        assert!(!weights.is_active(Dimension::Lifestyle));
        assert!(!weights.is_active(Dimension::Goals));
        assert!((weights.total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_base_weight_is_inactive() {
        let base = ScoringWeights {
            astrology: 0.0,
            ..ScoringWeights::default()
        };
        let weights = allocate(&base, &full("a"), &full("b"));
        assert!(!weights.is_active(Dimension::Astrology));
        assert!((weights.total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_huge_weights_keep_core_dimensions_active() {
        let base = ScoringWeights {
            interests: 1e308,
            values: 1e308,
            personality: 1e308,
            astrology: 1e308,
            lifestyle: 1e308,
            goals: 1e308,
        };
        let weights = allocate(&base, &bare("a"), &bare("b"));

        assert!(weights.is_active(Dimension::Interests));
        assert!(weights.is_active(Dimension::Values));
        assert!((weights.get(Dimension::Interests) - 0.5).abs() < 1e-12);
        assert!((weights.total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_all_zero_weights() {
        let base = ScoringWeights {
            interests: 0.0,
            values: 0.0,
            personality: 0.0,
            astrology: 0.0,
            lifestyle: 0.0,
            goals: 0.0,
        };
        let weights = allocate(&base, &full("a"), &full("b"));
        assert_eq!(weights.total(), 0.0);
        assert_eq!(weights.active().count(), 0);
    }
}
