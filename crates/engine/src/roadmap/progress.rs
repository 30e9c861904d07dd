use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, Result};
use crate::roadmap::models::{Phase, RoadmapDay};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhaseProgress {
    pub phase: Phase,
    pub completed: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoadmapProgress {
    pub completed_days: usize,
    pub total_days: usize,
    pub percent: u32,
    pub per_phase: Vec<PhaseProgress>,
    /// First day not yet completed; `None` once everything is done.
    pub current_day: Option<u32>,
}

/// Days of one phase, or every day when `phase` is `None`. Order is preserved.
pub fn filter_phase(days: &[RoadmapDay], phase: Option<Phase>) -> Vec<RoadmapDay> {
    days.iter()
        .filter(|d| phase.map_or(true, |p| d.phase == p))
        .cloned()
        .collect()
}

/// Summarises the caller-owned `completed` flags. Never mutates them.
pub fn roadmap_progress(days: &[RoadmapDay]) -> RoadmapProgress {
    let total_days = days.len();
    let completed_days = days.iter().filter(|d| d.completed).count();

    let percent = if total_days > 0 {
        ((completed_days as f64 / total_days as f64) * 100.0).round() as u32
    } else {
        0
    };

    let per_phase = Phase::ALL
        .iter()
        .map(|phase| {
            let in_phase = days.iter().filter(|d| d.phase == *phase);
            PhaseProgress {
                phase: *phase,
                completed: in_phase.clone().filter(|d| d.completed).count(),
                total: in_phase.count(),
            }
        })
        .collect();

    let current_day = days
        .iter()
        .filter(|d| !d.completed)
        .map(|d| d.day)
        .min();

    RoadmapProgress {
        completed_days,
        total_days,
        percent,
        per_phase,
        current_day,
    }
}

/// Deterministic rotation: `pool[day mod pool.len()]`.
pub fn motivational_message(day: u32, pool: &[String]) -> Result<&str> {
    if pool.is_empty() {
        return Err(EngineError::configuration(
            "motivational_messages",
            "message pool is empty",
        ));
    }
    Ok(&pool[day as usize % pool.len()])
}
