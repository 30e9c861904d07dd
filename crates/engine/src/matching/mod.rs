// Career Match Ranker: catalog validation, scoring, ranking and rationale text.

pub mod catalog;
pub mod ranker;
pub mod reasoning;
pub mod tier;

pub use catalog::{validate_catalog, CareerProfile};
pub use ranker::{
    rank_careers, rank_careers_strict, score_profile, CareerRanker, MatchBreakdown,
    RankedRecommendation, RuleBasedRanker,
};
pub use tier::MatchTier;
