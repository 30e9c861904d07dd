use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// One axis of a user's affinity profile.
///
/// Declaration order is the canonical order: it drives serialization order
/// and breaks ties wherever dimensions are ranked against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestDimension {
    Technology,
    Business,
    Science,
    Design,
    Collaborative,
    Independent,
    Creative,
    Analytical,
}

impl InterestDimension {
    pub const ALL: [InterestDimension; 8] = [
        InterestDimension::Technology,
        InterestDimension::Business,
        InterestDimension::Science,
        InterestDimension::Design,
        InterestDimension::Collaborative,
        InterestDimension::Independent,
        InterestDimension::Creative,
        InterestDimension::Analytical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InterestDimension::Technology => "technology",
            InterestDimension::Business => "business",
            InterestDimension::Science => "science",
            InterestDimension::Design => "design",
            InterestDimension::Collaborative => "collaborative",
            InterestDimension::Independent => "independent",
            InterestDimension::Creative => "creative",
            InterestDimension::Analytical => "analytical",
        }
    }
}

impl fmt::Display for InterestDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable questionnaire catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub category: String,
}

impl Question {
    pub fn allows(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

/// Question id → selected option text. Unanswered questions are absent.
pub type Answers = HashMap<String, String>;

/// Accumulated, non-negative score per interest dimension.
///
/// Always carries all eight dimensions, zero-filled, so consumers never have
/// to handle a missing key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<InterestDimension, u32>",
    into = "BTreeMap<InterestDimension, u32>"
)]
pub struct InterestVector(BTreeMap<InterestDimension, u32>);

impl InterestVector {
    pub fn new() -> Self {
        Self(InterestDimension::ALL.iter().map(|d| (*d, 0)).collect())
    }

    pub fn get(&self, dimension: InterestDimension) -> u32 {
        self.0.get(&dimension).copied().unwrap_or(0)
    }

    pub fn add(&mut self, dimension: InterestDimension, delta: u32) {
        let score = self.0.entry(dimension).or_insert(0);
        *score = score.saturating_add(delta);
    }

    /// Dimensions in canonical order with their scores.
    pub fn iter(&self) -> impl Iterator<Item = (InterestDimension, u32)> + '_ {
        InterestDimension::ALL.iter().map(move |d| (*d, self.get(*d)))
    }

    pub fn total(&self) -> u32 {
        self.iter().map(|(_, s)| s).sum()
    }
}

impl Default for InterestVector {
    fn default() -> Self {
        Self::new()
    }
}

impl From<BTreeMap<InterestDimension, u32>> for InterestVector {
    /// Fills in any dimension the map leaves out.
    fn from(scores: BTreeMap<InterestDimension, u32>) -> Self {
        let mut vector = InterestVector::new();
        for (dimension, score) in scores {
            vector.add(dimension, score);
        }
        vector
    }
}

impl From<InterestVector> for BTreeMap<InterestDimension, u32> {
    fn from(vector: InterestVector) -> Self {
        vector.0
    }
}

/// How far a respondent got through the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerProgress {
    pub answered: usize,
    pub total: usize,
    pub complete: bool,
    pub percent: u32,
}
