use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, Result};
use crate::questionnaire::models::InterestDimension;
use crate::skills::models::MAX_RATING;

/// Static, versioned description of a career archetype.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CareerProfile {
    pub role: String,
    /// Interest weight per dimension. Dimensions left out weigh 0.
    pub required_dimensions: BTreeMap<InterestDimension, f64>,
    /// Minimum self-rating per skill.
    #[serde(default)]
    pub required_skills: BTreeMap<String, u8>,
    /// Display labels; falls back to the `required_skills` names when empty.
    #[serde(default)]
    pub skills_required: Vec<String>,
    pub salary_range: String,
    pub growth_potential: String,
    pub description: String,
}

impl CareerProfile {
    pub fn display_skills(&self) -> Vec<String> {
        if self.skills_required.is_empty() {
            self.required_skills.keys().cloned().collect()
        } else {
            self.skills_required.clone()
        }
    }

    pub fn weight(&self, dimension: InterestDimension) -> f64 {
        self.required_dimensions.get(&dimension).copied().unwrap_or(0.0)
    }
}

/// Rejects catalog entries that cannot be scored or rendered.
pub fn validate_catalog(catalog: &[CareerProfile]) -> Result<()> {
    let mut roles = HashSet::new();

    for (i, profile) in catalog.iter().enumerate() {
        let required_text = [
            ("careers.role", &profile.role),
            ("careers.description", &profile.description),
            ("careers.salary_range", &profile.salary_range),
            ("careers.growth_potential", &profile.growth_potential),
        ];
        for (field, value) in required_text {
            if value.trim().is_empty() {
                return Err(EngineError::validation_at(field, i, "cannot be blank"));
            }
        }

        if !roles.insert(profile.role.as_str()) {
            return Err(EngineError::validation_at(
                "careers.role",
                i,
                format!("duplicate role '{}'", profile.role),
            ));
        }

        for (dimension, weight) in &profile.required_dimensions {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(EngineError::validation_at(
                    format!("careers.required_dimensions.{dimension}"),
                    i,
                    format!("weight must be a finite non-negative number, got {weight}"),
                ));
            }
        }

        for (skill, minimum) in &profile.required_skills {
            if *minimum > MAX_RATING {
                return Err(EngineError::validation_at(
                    format!("careers.required_skills.{skill}"),
                    i,
                    format!("minimum {minimum} exceeds the maximum rating of {MAX_RATING}"),
                ));
            }
        }
    }

    Ok(())
}
