use crate::core::similarity::shared_tags;
use crate::models::{Dimension, Highlight, Profile};

/// Maximum number of badges attached to a match
pub const MAX_HIGHLIGHTS: usize = 3;

const ACTIVE_TAGS: &[&str] = &["hiking", "fitness", "sports", "yoga"];
const FOOD_TAGS: &[&str] = &["coffee", "food", "cooking"];
const ADVENTURE_TAGS: &[&str] = &["travel", "hiking", "nature"];
const CREATIVE_TAGS: &[&str] = &["art", "music", "writing", "photography", "dancing"];

/// Raw dimension scores of a pair; `None` for inactive dimensions
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DimensionScores {
    scores: [Option<f64>; 6],
}

impl DimensionScores {
    #[inline]
    pub fn get(&self, dimension: Dimension) -> Option<f64> {
        self.scores[dimension.index()]
    }

    pub fn set(&mut self, dimension: Dimension, score: Option<f64>) {
        self.scores[dimension.index()] = score;
    }
}

enum Trigger {
    /// Any shared interest from the theme list
    SharedTheme(&'static [&'static str]),
    /// Raw dimension score strictly above the threshold
    Above(Dimension, f64),
    IdenticalPersonality,
}

struct HighlightRule {
    trigger: Trigger,
    badge: Highlight,
}

/// Evaluated in order; earlier rules win the three slots
const RULES: [HighlightRule; 8] = [
    HighlightRule { trigger: Trigger::SharedTheme(ACTIVE_TAGS), badge: Highlight::ActiveBuddy },
    HighlightRule { trigger: Trigger::SharedTheme(FOOD_TAGS), badge: Highlight::FoodieFriend },
    HighlightRule { trigger: Trigger::SharedTheme(ADVENTURE_TAGS), badge: Highlight::AdventurePal },
    HighlightRule { trigger: Trigger::SharedTheme(CREATIVE_TAGS), badge: Highlight::CreativeSoul },
    HighlightRule { trigger: Trigger::Above(Dimension::Values, 0.7), badge: Highlight::KindredSpirit },
    HighlightRule { trigger: Trigger::Above(Dimension::Personality, 0.8), badge: Highlight::SameWavelength },
    HighlightRule { trigger: Trigger::Above(Dimension::Astrology, 0.8), badge: Highlight::CosmicConnection },
    HighlightRule { trigger: Trigger::IdenticalPersonality, badge: Highlight::MbtiTwin },
];

/// Rule-based badges for a pair, deduplicated and capped at [`MAX_HIGHLIGHTS`]
pub fn generate_highlights(
    viewer: &Profile,
    candidate: &Profile,
    scores: &DimensionScores,
) -> Vec<Highlight> {
    let viewer_tags = viewer.interest_tags();
    let candidate_tags = candidate.interest_tags();
    let shared = shared_tags(&viewer_tags, &candidate_tags);

    let mut highlights: Vec<Highlight> = Vec::with_capacity(MAX_HIGHLIGHTS);

    for rule in &RULES {
        let triggered = match rule.trigger {
            Trigger::SharedTheme(theme) => shared.iter().any(|tag| theme.contains(tag)),
            Trigger::Above(dimension, threshold) => {
                scores.get(dimension).is_some_and(|score| score > threshold)
            }
            Trigger::IdenticalPersonality => matches!(
                (viewer.personality(), candidate.personality()),
                (Some(a), Some(b)) if a == b
            ),
        };

        if triggered && !highlights.contains(&rule.badge) {
            highlights.push(rule.badge);
            if highlights.len() == MAX_HIGHLIGHTS {
                break;
            }
        }
    }

    highlights
}
