// Roadmap Phase Generator: 90-day plan generation, named tracks and
// progress helpers over caller-owned completion flags.

pub mod generator;
pub mod models;
pub mod progress;

pub use generator::{find_track, generate_roadmap, generate_track_roadmap};
pub use models::{
    Phase, PhaseOverview, PhaseTemplate, PhaseTemplateSet, RoadmapDay, RoadmapTrack,
    DAYS_PER_PHASE, TOTAL_DAYS,
};
pub use progress::{
    filter_phase, motivational_message, roadmap_progress, PhaseProgress, RoadmapProgress,
};
