// Core algorithm exports
pub mod dimensions;
pub mod error;
pub mod highlights;
pub mod matcher;
pub mod rarity;
pub mod scoring;
pub mod similarity;
pub mod weights;

pub use dimensions::{
    astrology_score, goals_score, interest_score, lifestyle_score, personality_score,
    values_score,
};
pub use error::MatchError;
pub use highlights::{generate_highlights, DimensionScores};
pub use matcher::{rank, Matcher};
pub use rarity::{build_rarity, RarityIndex};
pub use scoring::{aggregate, calculate_match_score};
pub use weights::{allocate, ActiveWeights};
