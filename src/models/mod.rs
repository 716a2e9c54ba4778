// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Breakdown, Dimension, Element, Highlight, Lifestyle, MatchResult, PersonalityType, Profile,
    RankedMatch, ScoringWeights, ZodiacSign,
};
pub use requests::RankRequest;
pub use responses::RankResponse;
