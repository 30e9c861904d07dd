use chrono::NaiveDate;
use guidance_engine::matching::{MatchTier, RankedRecommendation};
use guidance_engine::questionnaire::{AnswerProgress, Answers, InterestVector};
use guidance_engine::roadmap::{Phase, PhaseOverview, RoadmapDay, RoadmapProgress};
use guidance_engine::skills::SkillProfile;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ──────────────────────────────────────────────
// Questionnaire
// ──────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct InterestAnalysisRequest {
    #[serde(default)]
    pub answers: Answers,
}

#[derive(Debug, Serialize)]
pub struct InterestAnalysisResponse {
    pub interests: InterestVector,
    pub progress: AnswerProgress,
}

// ──────────────────────────────────────────────
// Skills
// ──────────────────────────────────────────────

/// Ratings arrive as loose JSON (numbers or numeric strings) and are
/// coerced per field.
#[derive(Debug, Default, Deserialize)]
pub struct SkillAssessmentRequest {
    #[serde(default)]
    pub technical: Map<String, Value>,
    #[serde(default)]
    pub soft: Map<String, Value>,
    #[serde(default)]
    pub tools: Option<String>,
    #[serde(default)]
    pub technologies: Option<String>,
}

// ──────────────────────────────────────────────
// Recommendations
// ──────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CareerRecommendationsRequest {
    #[serde(default)]
    pub answers: Answers,
    #[serde(flatten)]
    pub skills: SkillAssessmentRequest,
}

/// A ranked record plus its display badge.
#[derive(Debug, Serialize)]
pub struct RecommendationView {
    #[serde(flatten)]
    pub recommendation: RankedRecommendation,
    pub match_tier: MatchTier,
    pub match_color: &'static str,
}

impl From<RankedRecommendation> for RecommendationView {
    fn from(recommendation: RankedRecommendation) -> Self {
        let tier = MatchTier::for_percentage(recommendation.match_percentage);
        Self {
            recommendation,
            match_tier: tier,
            match_color: tier.color(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CareerRecommendationsResponse {
    pub backend: &'static str,
    pub catalog_version: String,
    pub interests: InterestVector,
    pub skills: SkillProfile,
    pub recommendations: Vec<RecommendationView>,
}

// ──────────────────────────────────────────────
// Roadmap
// ──────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct TrackSummary {
    pub name: String,
    pub display_name: String,
    pub overview: Vec<PhaseOverview>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RoadmapRequest {
    pub start_date: Option<NaiveDate>,
    pub track: Option<String>,
    /// Restricts the returned days to one phase.
    pub phase: Option<Phase>,
}

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub track: String,
    pub start_date: NaiveDate,
    pub days: Vec<RoadmapDay>,
    pub overview: Vec<PhaseOverview>,
}

#[derive(Debug, Deserialize)]
pub struct RoadmapProgressRequest {
    pub days: Vec<RoadmapDay>,
}

#[derive(Debug, Serialize)]
pub struct RoadmapProgressResponse {
    #[serde(flatten)]
    pub progress: RoadmapProgress,
    pub message: String,
}
