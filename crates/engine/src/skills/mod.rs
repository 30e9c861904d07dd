pub mod aggregator;
pub mod models;

pub use aggregator::{aggregate_skills, parse_rating, parse_ratings};
pub use models::{RawRatings, SkillFields, SkillProfile, SkillVector, MAX_RATING, MIN_RATING};
