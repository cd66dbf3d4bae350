//! Runtime configuration.

use std::path::PathBuf;

use crate::domain::{Sport, ValidationError};

/// Default location of the JSON game store, relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = ".scorebook/scorebook.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorebookConfig {
    /// JSON game store
    pub store_path: PathBuf,
    pub sport: Sport,
    /// Emit JSON log lines
    pub json_logs: bool,
}

impl Default for ScorebookConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            sport: Sport::default(),
            json_logs: false,
        }
    }
}

impl ScorebookConfig {
    /// Create from environment variables
    ///
    /// Reads:
    /// - SCOREBOOK_STORE (optional, default: ".scorebook/scorebook.json")
    /// - SCOREBOOK_SPORT (optional, default: "baseball")
    /// - SCOREBOOK_LOG_FORMAT (optional) - set to "json" for JSON logs
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ValidationError> {
        let mut config = Self::default();
        if let Some(path) = lookup("SCOREBOOK_STORE").filter(|p| !p.is_empty()) {
            config.store_path = PathBuf::from(path);
        }
        if let Some(sport) = lookup("SCOREBOOK_SPORT") {
            config.sport = sport.parse()?;
        }
        config.json_logs = lookup("SCOREBOOK_LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        Ok(config)
    }

    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    pub fn with_sport(mut self, sport: Sport) -> Self {
        self.sport = sport;
        self
    }

    pub fn with_json_logs(mut self, json: bool) -> Self {
        self.json_logs = json;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ScorebookConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ScorebookConfig::default());
        assert_eq!(config.store_path, PathBuf::from(".scorebook/scorebook.json"));
        assert_eq!(config.sport, Sport::Baseball);
        assert!(!config.json_logs);
    }

    #[test]
    fn test_reads_all_variables() {
        let config = ScorebookConfig::from_lookup(lookup(&[
            ("SCOREBOOK_STORE", "/tmp/book.json"),
            ("SCOREBOOK_SPORT", "softball"),
            ("SCOREBOOK_LOG_FORMAT", "JSON"),
        ]))
        .unwrap();
        assert_eq!(config.store_path, PathBuf::from("/tmp/book.json"));
        assert_eq!(config.sport, Sport::Softball);
        assert!(config.json_logs);
    }

    #[test]
    fn test_bad_sport_rejected() {
        let err = ScorebookConfig::from_lookup(lookup(&[("SCOREBOOK_SPORT", "cricket")]))
            .unwrap_err();
        assert!(matches!(err, ValidationError::UnknownSport(_)));
    }

    #[test]
    fn test_builders_override() {
        let config = ScorebookConfig::default()
            .with_store_path("other.json")
            .with_sport(Sport::Softball)
            .with_json_logs(true);
        assert_eq!(config.store_path, PathBuf::from("other.json"));
        assert_eq!(config.sport.game_innings(), 7);
        assert!(config.json_logs);
    }
}
