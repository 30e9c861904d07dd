//! Career Match Ranker: scores every catalog profile against a user's
//! interest and skill vectors.
//!
//! match_percentage = round(100 × (0.6 × dimension_similarity + 0.4 × skill_fit))
//!
//! - dimension_similarity: cosine similarity between the interest vector and the
//!   profile's dimension weights, clipped to [0,1]. Zero when either side is all zeros.
//! - skill_fit: fraction of required skills rated at or above the minimum.
//!   A profile with no required skills fits fully.
//!
//! Sorted by match_percentage descending. The sort is stable, so equal scores
//! keep catalog declaration order.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{EngineError, Result};
use crate::matching::catalog::CareerProfile;
use crate::matching::reasoning::build_reasoning;
use crate::questionnaire::models::{InterestDimension, InterestVector};
use crate::skills::models::SkillVector;

const DIMENSION_WEIGHT: f64 = 0.6;
const SKILL_WEIGHT: f64 = 0.4;

/// One ranked catalog entry. Field names are the presentation contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedRecommendation {
    pub rank: u32,
    pub role: String,
    pub match_percentage: u32, // 0 – 100
    pub description: String,
    pub skills_required: Vec<String>,
    pub salary_range: String,
    pub growth_potential: String,
    pub reasoning: String,
}

/// The pieces a single match score is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchBreakdown {
    pub dimension_similarity: f64,
    pub skill_fit: f64,
    pub match_percentage: u32,
}

/// Ranking backend seam.
///
/// The rule-based ranker is the local source of truth; a remote ranking
/// service can be slotted in behind the same signature. Every backend sees
/// every request, including an empty catalog, and decides how to fail.
pub trait CareerRanker: Send + Sync {
    fn rank(
        &self,
        interests: &InterestVector,
        skills: &SkillVector,
        catalog: &[CareerProfile],
    ) -> Result<Vec<RankedRecommendation>>;

    /// Label surfaced to callers so they can tell which backend answered.
    fn backend(&self) -> &'static str;
}

/// Pure, deterministic ranker. Requires a non-empty catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedRanker;

impl CareerRanker for RuleBasedRanker {
    fn rank(
        &self,
        interests: &InterestVector,
        skills: &SkillVector,
        catalog: &[CareerProfile],
    ) -> Result<Vec<RankedRecommendation>> {
        rank_careers_strict(interests, skills, catalog)
    }

    fn backend(&self) -> &'static str {
        "rule_based"
    }
}

/// Ranks the whole catalog. An empty catalog yields an empty list.
pub fn rank_careers(
    interests: &InterestVector,
    skills: &SkillVector,
    catalog: &[CareerProfile],
) -> Vec<RankedRecommendation> {
    let mut scored: Vec<(u32, &CareerProfile)> = catalog
        .iter()
        .map(|profile| {
            let breakdown = score_profile(interests, skills, profile);
            debug!(
                role = %profile.role,
                similarity = breakdown.dimension_similarity,
                skill_fit = breakdown.skill_fit,
                score = breakdown.match_percentage,
                "scored career profile"
            );
            (breakdown.match_percentage, profile)
        })
        .collect();

    // sort_by is stable; ties keep catalog order
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .enumerate()
        .map(|(i, (match_percentage, profile))| RankedRecommendation {
            rank: i as u32 + 1,
            role: profile.role.clone(),
            match_percentage,
            description: profile.description.clone(),
            skills_required: profile.display_skills(),
            salary_range: profile.salary_range.clone(),
            growth_potential: profile.growth_potential.clone(),
            reasoning: build_reasoning(interests, skills, profile),
        })
        .collect()
}

/// Same as [`rank_careers`], for callers whose contract requires a non-empty
/// ranking: an empty catalog is a configuration problem, not "no good match".
pub fn rank_careers_strict(
    interests: &InterestVector,
    skills: &SkillVector,
    catalog: &[CareerProfile],
) -> Result<Vec<RankedRecommendation>> {
    if catalog.is_empty() {
        return Err(EngineError::configuration(
            "careers",
            "career catalog is empty; ranking requires at least one profile",
        ));
    }
    Ok(rank_careers(interests, skills, catalog))
}

pub fn score_profile(
    interests: &InterestVector,
    skills: &SkillVector,
    profile: &CareerProfile,
) -> MatchBreakdown {
    let dimension_similarity = dimension_similarity(interests, profile);
    let skill_fit = skill_fit(skills, profile);
    let blended = DIMENSION_WEIGHT * dimension_similarity + SKILL_WEIGHT * skill_fit;

    MatchBreakdown {
        dimension_similarity,
        skill_fit,
        match_percentage: (100.0 * blended).round().clamp(0.0, 100.0) as u32,
    }
}

/// Cosine similarity over the eight dimensions, clipped to [0,1].
///
/// Both vectors are scaled by their largest component first, so extreme
/// catalog weights neither underflow nor overflow the norms.
pub fn dimension_similarity(interests: &InterestVector, profile: &CareerProfile) -> f64 {
    let user_max = interests.iter().map(|(_, s)| s).max().unwrap_or(0) as f64;
    let profile_max = InterestDimension::ALL
        .iter()
        .map(|d| profile.weight(*d))
        .fold(0.0_f64, f64::max);

    if user_max == 0.0 || profile_max == 0.0 {
        return 0.0;
    }

    let mut dot = 0.0_f64;
    let mut user_norm = 0.0_f64;
    let mut profile_norm = 0.0_f64;

    for dimension in InterestDimension::ALL {
        let u = interests.get(dimension) as f64 / user_max;
        let p = profile.weight(dimension) / profile_max;
        dot += u * p;
        user_norm += u * u;
        profile_norm += p * p;
    }

    (dot / (user_norm.sqrt() * profile_norm.sqrt())).clamp(0.0, 1.0)
}

pub fn skill_fit(skills: &SkillVector, profile: &CareerProfile) -> f64 {
    if profile.required_skills.is_empty() {
        return 1.0;
    }

    let met = profile
        .required_skills
        .iter()
        .filter(|(skill, minimum)| skills.level(skill) >= **minimum)
        .count();

    met as f64 / profile.required_skills.len() as f64
}
