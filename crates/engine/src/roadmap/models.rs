use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, Result};

pub const DAYS_PER_PHASE: u32 = 30;
pub const TOTAL_DAYS: u32 = DAYS_PER_PHASE * 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Foundation,
    Intermediate,
    Advanced,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Foundation, Phase::Intermediate, Phase::Advanced];

    /// Phase owning a 1-based roadmap day, or `None` outside 1..=90.
    pub fn for_day(day: u32) -> Option<Phase> {
        match day {
            1..=30 => Some(Phase::Foundation),
            31..=60 => Some(Phase::Intermediate),
            61..=90 => Some(Phase::Advanced),
            _ => None,
        }
    }

    pub fn start_day(&self) -> u32 {
        match self {
            Phase::Foundation => 1,
            Phase::Intermediate => DAYS_PER_PHASE + 1,
            Phase::Advanced => 2 * DAYS_PER_PHASE + 1,
        }
    }

    pub fn end_day(&self) -> u32 {
        self.start_day() + DAYS_PER_PHASE - 1
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Foundation => "foundation",
            Phase::Intermediate => "intermediate",
            Phase::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (title, description, tasks) content triple.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhaseTemplate {
    pub title: String,
    pub description: String,
    pub tasks: Vec<String>,
}

/// Ordered template pools, one per phase. Pool sizes are independent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PhaseTemplateSet {
    pub foundation: Vec<PhaseTemplate>,
    pub intermediate: Vec<PhaseTemplate>,
    pub advanced: Vec<PhaseTemplate>,
}

impl PhaseTemplateSet {
    pub fn pool(&self, phase: Phase) -> &[PhaseTemplate] {
        match phase {
            Phase::Foundation => &self.foundation,
            Phase::Intermediate => &self.intermediate,
            Phase::Advanced => &self.advanced,
        }
    }

    /// Empty pools are a configuration error (the cycling modulo would be
    /// undefined); a blank title is a malformed entry.
    pub fn validate(&self) -> Result<()> {
        for phase in Phase::ALL {
            let pool = self.pool(phase);
            if pool.is_empty() {
                return Err(EngineError::configuration(
                    format!("templates.{phase}"),
                    "template pool is empty",
                ));
            }
            for (i, template) in pool.iter().enumerate() {
                if template.title.trim().is_empty() {
                    return Err(EngineError::validation_at(
                        format!("templates.{phase}.title"),
                        i,
                        "cannot be blank",
                    ));
                }
            }
        }
        Ok(())
    }
}

/// A single day of the 90-day plan.
///
/// `completed` belongs to the caller; generation always emits `false`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadmapDay {
    pub day: u32, // 1 – 90
    pub phase: Phase,
    pub date: NaiveDate,
    pub title: String,
    pub description: String,
    pub tasks: Vec<String>,
    pub completed: bool,
}

/// Summary card for one phase of a track.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhaseOverview {
    pub phase: Phase,
    pub label: String,
    pub duration: String,
    pub skills: Vec<String>,
    pub tools: Vec<String>,
    pub projects: Vec<String>,
}

/// A named roadmap with its template pools.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadmapTrack {
    pub name: String,
    pub display_name: String,
    pub templates: PhaseTemplateSet,
    #[serde(default)]
    pub overview: Vec<PhaseOverview>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_partition_is_30_30_30() {
        assert_eq!(Phase::for_day(0), None);
        assert_eq!(Phase::for_day(1), Some(Phase::Foundation));
        assert_eq!(Phase::for_day(30), Some(Phase::Foundation));
        assert_eq!(Phase::for_day(31), Some(Phase::Intermediate));
        assert_eq!(Phase::for_day(60), Some(Phase::Intermediate));
        assert_eq!(Phase::for_day(61), Some(Phase::Advanced));
        assert_eq!(Phase::for_day(90), Some(Phase::Advanced));
        assert_eq!(Phase::for_day(91), None);
    }

    #[test]
    fn test_phase_bounds() {
        assert_eq!((Phase::Foundation.start_day(), Phase::Foundation.end_day()), (1, 30));
        assert_eq!((Phase::Intermediate.start_day(), Phase::Intermediate.end_day()), (31, 60));
        assert_eq!((Phase::Advanced.start_day(), Phase::Advanced.end_day()), (61, 90));
        assert_eq!(TOTAL_DAYS, 90);
    }

    #[test]
    fn test_empty_pool_is_configuration_error() {
        let set = PhaseTemplateSet {
            foundation: vec![PhaseTemplate {
                title: "Intro".to_string(),
                description: String::new(),
                tasks: vec![],
            }],
            intermediate: vec![],
            advanced: vec![],
        };
        let err = set.validate().unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(err.field(), "templates.intermediate");
    }

    #[test]
    fn test_day_serializes_date_as_iso() {
        let day = RoadmapDay {
            day: 1,
            phase: Phase::Foundation,
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            title: "Intro".to_string(),
            description: "Start".to_string(),
            tasks: vec!["Install tools".to_string()],
            completed: false,
        };
        let json = serde_json::to_value(&day).unwrap();
        assert_eq!(json["date"], "2025-01-01");
        assert_eq!(json["phase"], "foundation");
    }
}
