//! Roadmap Phase Generator: expands a start date and a template set into the
//! fixed 90-day plan.
//!
//! For day `d` in a phase starting at `s`, the template is
//! `pool[(d - s) mod pool.len()]`. Each phase cycles on its own period.

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::errors::{EngineError, Result};
use crate::roadmap::models::{
    Phase, PhaseTemplate, PhaseTemplateSet, RoadmapDay, RoadmapTrack, TOTAL_DAYS,
};

pub fn generate_roadmap(
    start_date: NaiveDate,
    templates: &PhaseTemplateSet,
) -> Result<Vec<RoadmapDay>> {
    templates.validate()?;

    let mut days = Vec::with_capacity(TOTAL_DAYS as usize);

    for phase in Phase::ALL {
        let pool = templates.pool(phase);
        for day in phase.start_day()..=phase.end_day() {
            let template = template_for_day(pool, phase, day);
            let date = start_date
                .checked_add_days(Days::new(u64::from(day - 1)))
                .ok_or_else(|| {
                    EngineError::validation(
                        "start_date",
                        format!("{start_date} + {} days is outside the supported calendar", day - 1),
                    )
                })?;

            days.push(RoadmapDay {
                day,
                phase,
                date,
                title: template.title.clone(),
                description: template.description.clone(),
                tasks: template.tasks.clone(),
                completed: false,
            });
        }
    }

    debug!(%start_date, days = days.len(), "roadmap generated");
    Ok(days)
}

/// Looks up a track by name and generates its roadmap.
pub fn generate_track_roadmap(
    start_date: NaiveDate,
    tracks: &[RoadmapTrack],
    track_name: &str,
) -> Result<Vec<RoadmapDay>> {
    let track = find_track(tracks, track_name)?;
    generate_roadmap(start_date, &track.templates)
}

pub fn find_track<'a>(tracks: &'a [RoadmapTrack], track_name: &str) -> Result<&'a RoadmapTrack> {
    tracks
        .iter()
        .find(|t| t.name == track_name)
        .ok_or_else(|| EngineError::validation("track", format!("unknown track '{track_name}'")))
}

/// Caller guarantees a non-empty pool and a day inside `phase`.
fn template_for_day(pool: &[PhaseTemplate], phase: Phase, day: u32) -> &PhaseTemplate {
    let offset = (day - phase.start_day()) as usize;
    &pool[offset % pool.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    fn templates(prefix: &str, n: usize) -> Vec<PhaseTemplate> {
        (0..n)
            .map(|i| PhaseTemplate {
                title: format!("{prefix} {i}"),
                description: format!("{prefix} description {i}"),
                tasks: vec![format!("{prefix} task {i}a"), format!("{prefix} task {i}b")],
            })
            .collect()
    }

    fn set(f: usize, i: usize, a: usize) -> PhaseTemplateSet {
        PhaseTemplateSet {
            foundation: templates("F", f),
            intermediate: templates("I", i),
            advanced: templates("A", a),
        }
    }

    fn jan_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn test_always_ninety_contiguous_days() {
        let days = generate_roadmap(jan_first(), &set(10, 10, 10)).unwrap();
        assert_eq!(days.len(), 90);
        for (i, d) in days.iter().enumerate() {
            assert_eq!(d.day, i as u32 + 1);
        }
    }

    #[test]
    fn test_phase_assignment_matches_partition() {
        let days = generate_roadmap(jan_first(), &set(3, 4, 5)).unwrap();
        for d in &days {
            assert_eq!(Some(d.phase), Phase::for_day(d.day), "day {}", d.day);
        }
        assert_eq!(days.iter().filter(|d| d.phase == Phase::Foundation).count(), 30);
        assert_eq!(days.iter().filter(|d| d.phase == Phase::Intermediate).count(), 30);
        assert_eq!(days.iter().filter(|d| d.phase == Phase::Advanced).count(), 30);
    }

    #[test]
    fn test_foundation_cycles_with_period_ten() {
        let days = generate_roadmap(jan_first(), &set(10, 7, 4)).unwrap();
        assert_eq!(days[10].title, days[0].title);
        assert_eq!(days[10].tasks, days[0].tasks);
        assert_ne!(days[9].title, days[0].title);
    }

    #[test]
    fn test_each_phase_cycles_independently() {
        let t = set(10, 7, 4);
        let days = generate_roadmap(jan_first(), &t).unwrap();
        for d in &days {
            let start = d.phase.start_day();
            let pool = t.pool(d.phase);
            let expected = &pool[((d.day - start) as usize) % pool.len()];
            assert_eq!(d.title, expected.title, "day {}", d.day);
            assert_eq!(d.description, expected.description, "day {}", d.day);
        }
        // day 31 restarts the intermediate pool; day 38 wraps after 7
        assert_eq!(days[30].title, "I 0");
        assert_eq!(days[37].title, "I 0");
        assert_eq!(days[60].title, "A 0");
        assert_eq!(days[64].title, "A 0");
    }

    #[test]
    fn test_dates_are_consecutive_calendar_days() {
        let days = generate_roadmap(jan_first(), &set(1, 1, 1)).unwrap();
        assert_eq!(days[0].date, jan_first());
        assert_eq!(days[30].date, NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
        assert_eq!(days[89].date, NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());
    }

    #[test]
    fn test_dates_cross_leap_day() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        let days = generate_roadmap(start, &set(1, 1, 1)).unwrap();
        assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(days[2].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_every_day_starts_incomplete() {
        let days = generate_roadmap(jan_first(), &set(2, 2, 2)).unwrap();
        assert!(days.iter().all(|d| !d.completed));
    }

    #[test]
    fn test_empty_phase_pool_rejected() {
        let err = generate_roadmap(jan_first(), &set(10, 0, 10)).unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(err.field(), "templates.intermediate");
    }

    #[test]
    fn test_date_overflow_is_validation_error() {
        let err = generate_roadmap(NaiveDate::MAX, &set(1, 1, 1)).unwrap_err();
        assert_eq!(err.field(), "start_date");
    }

    #[test]
    fn test_unknown_track_rejected() {
        let config = EngineConfig::embedded().unwrap();
        let err = generate_track_roadmap(jan_first(), config.tracks(), "astronaut").unwrap_err();
        assert_eq!(err.field(), "track");
    }

    #[test]
    fn test_software_track_titles_cycle_per_phase() {
        let config = EngineConfig::embedded().unwrap();
        let days =
            generate_track_roadmap(jan_first(), config.tracks(), "software_engineering").unwrap();
        assert_eq!(days[0].title, "Introduction to Programming");
        assert_eq!(days[10].title, "Introduction to Programming");
        assert_eq!(days[30].title, "Database Fundamentals");
        assert_eq!(days[89].title, "Career Development");
    }

    #[test]
    fn test_generation_is_deterministic() {
        let config = EngineConfig::embedded().unwrap();
        for track in config.tracks() {
            let a = generate_roadmap(jan_first(), &track.templates).unwrap();
            let b = generate_roadmap(jan_first(), &track.templates).unwrap();
            assert_eq!(
                serde_json::to_string(&a).unwrap(),
                serde_json::to_string(&b).unwrap(),
                "track {}",
                track.name
            );
        }
    }
}
