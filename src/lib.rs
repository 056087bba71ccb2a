//! Evently Match - skill-based team matching for Evently events
//!
//! This library provides the team matching engine used by the Evently backend.
//! Participants' skill lists are weighted with TF-IDF, compared by cosine
//! similarity and greedily grouped into teams of two to four.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{TeamMatcher, MatchOutcome, TeamReport, SimilarityMatrix, TfIdfVectorizer};
pub use self::models::{Participant, Team, MatcherConfig, MatcherConfigError};
