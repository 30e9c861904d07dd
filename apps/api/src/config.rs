use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use guidance_engine::EngineConfig;

pub const DEFAULT_TRACK: &str = "software_engineering";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON catalog overriding the embedded one.
    pub config_path: Option<PathBuf>,
    pub default_track: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            config_path: lookup("GUIDANCE_CONFIG_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            default_track: lookup("DEFAULT_TRACK").unwrap_or_else(|| DEFAULT_TRACK.to_string()),
        })
    }

    /// Loads the engine catalog and checks that the default track exists.
    pub fn load_engine_config(&self) -> Result<EngineConfig> {
        let engine = load_engine_config(self.config_path.as_deref())?;
        if engine.track(&self.default_track).is_none() {
            bail!(
                "DEFAULT_TRACK '{}' is not defined in the loaded catalog",
                self.default_track
            );
        }
        Ok(engine)
    }
}

fn load_engine_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read engine config '{}'", path.display()))?;
            EngineConfig::from_json_str(&text)
                .with_context(|| format!("Invalid engine config '{}'", path.display()))
        }
        None => EngineConfig::embedded().context("Embedded engine config is invalid"),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use guidance_engine::EngineConfigDocument;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    fn document_json(default_track_name: &str) -> String {
        let engine = EngineConfig::embedded().unwrap();
        let mut tracks = engine.tracks().to_vec();
        tracks.truncate(1);
        tracks[0].name = default_track_name.to_string();
        let doc = EngineConfigDocument {
            catalog_version: "test".to_string(),
            questions: engine.questions().to_vec(),
            contributions: vec![],
            skill_fields: engine.skill_fields().clone(),
            careers: engine.careers().to_vec(),
            tracks,
            motivational_messages: vec!["Keep going".to_string()],
        };
        serde_json::to_string(&doc).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(config.config_path.is_none());
        assert_eq!(config.default_track, DEFAULT_TRACK);
    }

    #[test]
    fn test_invalid_port_rejected() {
        let err = Config::from_lookup(lookup(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_embedded_catalog_has_default_track() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        let engine = config.load_engine_config().unwrap();
        assert!(engine.track(DEFAULT_TRACK).is_some());
    }

    #[test]
    fn test_unknown_default_track_rejected() {
        let config = Config::from_lookup(lookup(&[("DEFAULT_TRACK", "astronaut")])).unwrap();
        let err = config.load_engine_config().unwrap_err();
        assert!(err.to_string().contains("astronaut"));
    }

    #[test]
    fn test_loads_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(document_json("bootcamp").as_bytes()).unwrap();

        let path = file.path().to_string_lossy().to_string();
        let config = Config::from_lookup(lookup(&[
            ("GUIDANCE_CONFIG_PATH", path.as_str()),
            ("DEFAULT_TRACK", "bootcamp"),
        ]))
        .unwrap();

        let engine = config.load_engine_config().unwrap();
        assert_eq!(engine.catalog_version(), "test");
        assert_eq!(engine.tracks().len(), 1);
        assert!(engine.contributions().is_empty());
    }

    #[test]
    fn test_malformed_catalog_file_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"catalog_version\": 1}").unwrap();

        let err = load_engine_config(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Invalid engine config"));
    }

    #[test]
    fn test_missing_catalog_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_engine_config(Some(&dir.path().join("missing.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
