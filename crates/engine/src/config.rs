//! Catalog configuration: questions, the option contribution table, skill
//! fields, career profiles, roadmap tracks and motivational messages.
//!
//! Everything the engine scores against is data. The default catalog is
//! compiled into the crate; callers may supply their own JSON document with
//! the same shape.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{EngineError, Result};
use crate::matching::catalog::{validate_catalog, CareerProfile};
use crate::questionnaire::contributions::{ContributionTable, OptionContribution};
use crate::questionnaire::models::Question;
use crate::roadmap::models::RoadmapTrack;
use crate::skills::models::SkillFields;

const QUESTIONNAIRE_JSON: &str = include_str!("../data/questionnaire.json");
const SKILLS_JSON: &str = include_str!("../data/skills.json");
const CAREERS_JSON: &str = include_str!("../data/careers.json");
const ROADMAP_JSON: &str = include_str!("../data/roadmap.json");

/// Serialized form of a full catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfigDocument {
    pub catalog_version: String,
    pub questions: Vec<Question>,
    pub contributions: Vec<OptionContribution>,
    pub skill_fields: SkillFields,
    pub careers: Vec<CareerProfile>,
    pub tracks: Vec<RoadmapTrack>,
    pub motivational_messages: Vec<String>,
}

// ──────────────────────────────────────────────
// Embedded data file shapes
// ──────────────────────────────────────────────

#[derive(Deserialize)]
struct QuestionnaireFile {
    questions: Vec<Question>,
    contributions: Vec<OptionContribution>,
}

#[derive(Deserialize)]
struct CareersFile {
    version: String,
    careers: Vec<CareerProfile>,
}

#[derive(Deserialize)]
struct RoadmapFile {
    tracks: Vec<RoadmapTrack>,
    motivational_messages: Vec<String>,
}

/// Validated, immutable catalog shared by every request.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    catalog_version: String,
    questions: Vec<Question>,
    contributions: ContributionTable,
    skill_fields: SkillFields,
    careers: Vec<CareerProfile>,
    tracks: Vec<RoadmapTrack>,
    motivational_messages: Vec<String>,
}

impl EngineConfig {
    /// The catalog compiled into the crate.
    pub fn embedded() -> Result<Self> {
        let questionnaire: QuestionnaireFile = parse("questionnaire", QUESTIONNAIRE_JSON)?;
        let skill_fields: SkillFields = parse("skill_fields", SKILLS_JSON)?;
        let careers: CareersFile = parse("careers", CAREERS_JSON)?;
        let roadmap: RoadmapFile = parse("tracks", ROADMAP_JSON)?;

        Self::from_document(EngineConfigDocument {
            catalog_version: careers.version,
            questions: questionnaire.questions,
            contributions: questionnaire.contributions,
            skill_fields,
            careers: careers.careers,
            tracks: roadmap.tracks,
            motivational_messages: roadmap.motivational_messages,
        })
    }

    /// Parses and validates a single JSON document shaped like
    /// [`EngineConfigDocument`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: EngineConfigDocument = parse("config", json)?;
        Self::from_document(document)
    }

    pub fn from_document(document: EngineConfigDocument) -> Result<Self> {
        validate_questions(&document.questions)?;
        let contributions = ContributionTable::from_rows(&document.contributions)?;
        validate_skill_fields(&document.skill_fields)?;
        validate_catalog(&document.careers)?;
        validate_required_skills(&document.careers, &document.skill_fields)?;
        validate_tracks(&document.tracks)?;

        debug!(
            version = %document.catalog_version,
            questions = document.questions.len(),
            careers = document.careers.len(),
            tracks = document.tracks.len(),
            "engine catalog loaded"
        );

        Ok(Self {
            catalog_version: document.catalog_version,
            questions: document.questions,
            contributions,
            skill_fields: document.skill_fields,
            careers: document.careers,
            tracks: document.tracks,
            motivational_messages: document.motivational_messages,
        })
    }

    pub fn catalog_version(&self) -> &str {
        &self.catalog_version
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn contributions(&self) -> &ContributionTable {
        &self.contributions
    }

    pub fn skill_fields(&self) -> &SkillFields {
        &self.skill_fields
    }

    pub fn careers(&self) -> &[CareerProfile] {
        &self.careers
    }

    pub fn tracks(&self) -> &[RoadmapTrack] {
        &self.tracks
    }

    pub fn track(&self, name: &str) -> Option<&RoadmapTrack> {
        self.tracks.iter().find(|t| t.name == name)
    }

    pub fn motivational_messages(&self) -> &[String] {
        &self.motivational_messages
    }
}

fn parse<T: for<'de> Deserialize<'de>>(field: &str, json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| EngineError::validation(field, e.to_string()))
}

fn validate_questions(questions: &[Question]) -> Result<()> {
    let mut ids = HashSet::new();

    for (i, question) in questions.iter().enumerate() {
        if question.id.trim().is_empty() {
            return Err(EngineError::validation_at("questions.id", i, "cannot be blank"));
        }
        if !ids.insert(question.id.as_str()) {
            return Err(EngineError::validation_at(
                "questions.id",
                i,
                format!("duplicate question id '{}'", question.id),
            ));
        }
        if question.prompt.trim().is_empty() {
            return Err(EngineError::validation_at("questions.prompt", i, "cannot be blank"));
        }
        if question.options.is_empty() {
            return Err(EngineError::validation_at(
                "questions.options",
                i,
                "a question needs at least one option",
            ));
        }
    }
    Ok(())
}

/// Field names must be non-blank and unique across both groups: the ranker
/// merges the groups into one vector keyed by name.
fn validate_skill_fields(fields: &SkillFields) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();

    for (group, names) in [("technical", &fields.technical), ("soft", &fields.soft)] {
        for (i, name) in names.iter().enumerate() {
            let field = format!("skill_fields.{group}");
            if name.trim().is_empty() {
                return Err(EngineError::validation_at(field, i, "cannot be blank"));
            }
            if !seen.insert(name.as_str()) {
                return Err(EngineError::validation_at(
                    field,
                    i,
                    format!("duplicate skill field '{name}'"),
                ));
            }
        }
    }
    Ok(())
}

/// Every required skill must be a rated field, otherwise the minimum can
/// never be met. Skipped when no fields are configured.
fn validate_required_skills(careers: &[CareerProfile], fields: &SkillFields) -> Result<()> {
    if fields.is_empty() {
        return Ok(());
    }

    for (i, profile) in careers.iter().enumerate() {
        for skill in profile.required_skills.keys() {
            if !fields.technical.contains(skill) && !fields.soft.contains(skill) {
                return Err(EngineError::validation_at(
                    format!("careers.required_skills.{skill}"),
                    i,
                    "not a configured skill field",
                ));
            }
        }
    }
    Ok(())
}

fn validate_tracks(tracks: &[RoadmapTrack]) -> Result<()> {
    let mut names = HashSet::new();

    for (i, track) in tracks.iter().enumerate() {
        if track.name.trim().is_empty() {
            return Err(EngineError::validation_at("tracks.name", i, "cannot be blank"));
        }
        if !names.insert(track.name.as_str()) {
            return Err(EngineError::validation_at(
                "tracks.name",
                i,
                format!("duplicate track '{}'", track.name),
            ));
        }
        track.templates.validate().map_err(|e| e.nested("tracks", i))?;
    }
    Ok(())
}
