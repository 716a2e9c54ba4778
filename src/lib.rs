//! Friender Match - compatibility scoring and ranking for the Friender app
//!
//! This library scores how well two friend-finding profiles fit together
//! across six dimensions (interests, values, personality type, astrology,
//! lifestyle and friendship goals), explains the score with a per-dimension
//! breakdown and highlight badges, and ranks a roster of candidates for a
//! viewer. Dimensions without data on either side are left out and their
//! weight is redistributed over the rest.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{aggregate, rank, MatchError, Matcher, RarityIndex};
pub use crate::models::{Breakdown, Dimension, Highlight, MatchResult, Profile, RankedMatch, ScoringWeights};
