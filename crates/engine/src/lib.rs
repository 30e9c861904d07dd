//! Career guidance engine.
//!
//! Turns questionnaire answers into an interest vector, self-ratings into a
//! skill profile, ranks a career catalog against both, and expands a start
//! date into a 90-day learning roadmap. The engine is pure: no I/O, no clock,
//! no randomness. Callers own persistence and pass the current date in.

pub mod config;
pub mod errors;
pub mod matching;
pub mod questionnaire;
pub mod roadmap;
pub mod skills;

pub use config::{EngineConfig, EngineConfigDocument};
pub use errors::{EngineError, Result};
pub use matching::{rank_careers, rank_careers_strict, CareerRanker, MatchTier, RuleBasedRanker};
pub use questionnaire::{compute_interests, questionnaire_progress, validate_answers};
pub use roadmap::{generate_roadmap, generate_track_roadmap, roadmap_progress};
pub use skills::aggregate_skills;
