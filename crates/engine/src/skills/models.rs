use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Lowest and highest self-rating.
pub const MIN_RATING: u8 = 0;
pub const MAX_RATING: u8 = 10;

/// Raw, unclamped ratings keyed by skill name.
pub type RawRatings = BTreeMap<String, i64>;

/// The rated fields per group. Drives both which ratings are kept and the
/// denominator of the completion percentage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SkillFields {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

impl SkillFields {
    pub fn is_empty(&self) -> bool {
        self.technical.is_empty() && self.soft.is_empty()
    }
}

/// Aggregated self-assessment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillProfile {
    pub technical: BTreeMap<String, u8>,
    pub soft: BTreeMap<String, u8>,
    pub completion_percentage: u32,
    /// Free text, carried unscored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<String>,
}

impl SkillProfile {
    pub fn with_metadata(mut self, tools: Option<String>, technologies: Option<String>) -> Self {
        self.tools = tools.filter(|t| !t.trim().is_empty());
        self.technologies = technologies.filter(|t| !t.trim().is_empty());
        self
    }

    /// Both groups merged into the numeric vector the ranker consumes.
    /// A name rated in both groups keeps the higher level.
    pub fn skill_vector(&self) -> SkillVector {
        let mut levels: BTreeMap<String, u8> = BTreeMap::new();
        for (name, level) in self.technical.iter().chain(self.soft.iter()) {
            let entry = levels.entry(name.clone()).or_insert(0);
            *entry = (*entry).max(*level);
        }
        SkillVector(levels)
    }
}

/// Skill name → level in [0,10]. Missing skills read as 0.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillVector(BTreeMap<String, u8>);

impl SkillVector {
    pub fn level(&self, skill: &str) -> u8 {
        self.0.get(skill).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, u8)> for SkillVector {
    fn from_iter<I: IntoIterator<Item = (String, u8)>>(iter: I) -> Self {
        SkillVector(
            iter.into_iter()
                .map(|(k, v)| (k, v.min(MAX_RATING)))
                .collect(),
        )
    }
}
