//! Skill Profile Aggregator: clamps self-ratings and measures how much of the
//! assessment was filled in.
//!
//! completion_percentage = non-zero ratings / distinct configured fields × 100,
//! rounded. With the default 4 + 4 fields this moves in 12.5% steps.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::{EngineError, Result};
use crate::skills::models::{RawRatings, SkillFields, SkillProfile, MAX_RATING, MIN_RATING};

pub fn aggregate_skills(
    technical: &RawRatings,
    soft: &RawRatings,
    fields: &SkillFields,
) -> SkillProfile {
    let (technical, soft) = if fields.is_empty() {
        (clamp_all("technical", technical), clamp_all("soft", soft))
    } else {
        (
            clamp_configured("technical", technical, &fields.technical),
            clamp_configured("soft", soft, &fields.soft),
        )
    };

    let distinct: BTreeSet<&String> = technical.keys().chain(soft.keys()).collect();
    let rated = technical
        .values()
        .chain(soft.values())
        .filter(|level| **level > 0)
        .count();

    let completion_percentage = if distinct.is_empty() {
        0
    } else {
        ((rated as f64 / distinct.len() as f64) * 100.0)
            .round()
            .min(100.0) as u32
    };

    SkillProfile {
        technical,
        soft,
        completion_percentage,
        tools: None,
        technologies: None,
    }
}

/// Keeps configured fields only (missing ones read as 0) and clamps each rating.
fn clamp_configured(
    group: &str,
    ratings: &RawRatings,
    fields: &[String],
) -> BTreeMap<String, u8> {
    for name in ratings.keys() {
        if !fields.contains(name) {
            warn!(group, skill = %name, "rating for unconfigured skill field dropped");
        }
    }

    fields
        .iter()
        .map(|name| {
            let raw = ratings.get(name).copied().unwrap_or(0);
            (name.clone(), clamp_rating(group, name, raw))
        })
        .collect()
}

fn clamp_all(group: &str, ratings: &RawRatings) -> BTreeMap<String, u8> {
    ratings
        .iter()
        .map(|(name, raw)| (name.clone(), clamp_rating(group, name, *raw)))
        .collect()
}

fn clamp_rating(group: &str, name: &str, raw: i64) -> u8 {
    let clamped = raw.clamp(MIN_RATING as i64, MAX_RATING as i64);
    if clamped != raw {
        debug!(group, skill = %name, raw, clamped, "rating clamped into range");
    }
    clamped as u8
}

/// Coerces a JSON rating into an integer.
///
/// Accepts integers, floats (rounded half away from zero) and numeric strings.
/// Range is not checked here; `aggregate_skills` clamps.
pub fn parse_rating(field: &str, value: &Value) -> Result<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if let Some(f) = n.as_f64() {
                Ok(f.round() as i64)
            } else {
                Err(EngineError::validation(field, "rating is not a representable number"))
            }
        }
        Value::String(s) => {
            let trimmed = s.trim();
            match trimmed.parse::<f64>() {
                Ok(f) if f.is_finite() => Ok(f.round() as i64),
                _ => Err(EngineError::validation(
                    field,
                    format!("'{s}' is not a number"),
                )),
            }
        }
        other => Err(EngineError::validation(
            field,
            format!("expected a number, got {}", json_kind(other)),
        )),
    }
}

/// Coerces every rating in a JSON object, prefixing field names with `group`.
pub fn parse_ratings(group: &str, values: &serde_json::Map<String, Value>) -> Result<RawRatings> {
    values
        .iter()
        .map(|(name, value)| {
            let rating = parse_rating(&format!("{group}.{name}"), value)?;
            Ok((name.clone(), rating))
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
