//! Configuration loading for title suggestion.
//!
//! Layered config: defaults -> config file -> env vars -> CLI flags.
//! The default config file lives at ~/.config/title-suggest/config.toml.

use config::{Config, Environment, File, Map};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::SuggestError;

/// Tuning knobs for the suggestion pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggesterConfig {
    /// Maximum number of titles returned.
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,

    /// Titles longer than this (in characters) are dropped.
    #[serde(default = "default_max_title_length")]
    pub max_title_length: usize,

    /// Number of ranked key phrases kept after scoring.
    #[serde(default = "default_max_key_phrases")]
    pub max_key_phrases: usize,

    /// Leading sentences whose phrases get double weight.
    #[serde(default = "default_important_sentences")]
    pub important_sentences: usize,

    /// Plain words used when no phrase scored.
    #[serde(default = "default_fallback_phrases")]
    pub fallback_phrases: usize,

    /// Leading content words scanned for indicator words.
    #[serde(default = "default_classification_window")]
    pub classification_window: usize,

    /// Number of engaging prefixes applied to the main phrase.
    #[serde(default = "default_engaging_prefix_count")]
    pub engaging_prefix_count: usize,

    /// Original titles shorter than this are not rewritten.
    #[serde(default = "default_min_improvable_title_length")]
    pub min_improvable_title_length: usize,

    /// Cleaned titles longer than this are candidates for shortening.
    #[serde(default = "default_long_title_chars")]
    pub long_title_chars: usize,

    /// Word count a long title is cut down to.
    #[serde(default = "default_short_title_words")]
    pub short_title_words: usize,
}

fn default_max_suggestions() -> usize {
    5
}

fn default_max_title_length() -> usize {
    100
}

fn default_max_key_phrases() -> usize {
    15
}

fn default_important_sentences() -> usize {
    3
}

fn default_fallback_phrases() -> usize {
    5
}

fn default_classification_window() -> usize {
    200
}

fn default_engaging_prefix_count() -> usize {
    3
}

fn default_min_improvable_title_length() -> usize {
    5
}

fn default_long_title_chars() -> usize {
    50
}

fn default_short_title_words() -> usize {
    8
}

impl Default for SuggesterConfig {
    fn default() -> Self {
        Self {
            max_suggestions: default_max_suggestions(),
            max_title_length: default_max_title_length(),
            max_key_phrases: default_max_key_phrases(),
            important_sentences: default_important_sentences(),
            fallback_phrases: default_fallback_phrases(),
            classification_window: default_classification_window(),
            engaging_prefix_count: default_engaging_prefix_count(),
            min_improvable_title_length: default_min_improvable_title_length(),
            long_title_chars: default_long_title_chars(),
            short_title_words: default_short_title_words(),
        }
    }
}

impl SuggesterConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), SuggestError> {
        if self.max_suggestions == 0 {
            return Err(SuggestError::Config(
                "max_suggestions must be > 0".to_string(),
            ));
        }
        if self.max_title_length == 0 {
            return Err(SuggestError::Config(
                "max_title_length must be > 0".to_string(),
            ));
        }
        if self.max_key_phrases == 0 {
            return Err(SuggestError::Config(
                "max_key_phrases must be > 0".to_string(),
            ));
        }
        if self.short_title_words == 0 {
            return Err(SuggestError::Config(
                "short_title_words must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Seed for engaging-prefix selection. Unset means a fresh random pick per request.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Pipeline tuning
    #[serde(default)]
    pub suggester: SuggesterConfig,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            seed: None,
            suggester: SuggesterConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (~/.config/title-suggest/config.toml)
    /// 3. CLI-specified config file (optional)
    /// 4. Environment variables (TITLES_*)
    ///
    /// CLI flags should be applied by the caller after this returns.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, SuggestError> {
        let default_config_path = default_config_dir().join("config");
        Self::load_from(Some(&default_config_path), cli_config_path, None)
    }

    /// Load settings from explicit sources.
    ///
    /// `user_config` is the optional base config file. `env` replaces the
    /// process environment as the source of `TITLES_*` variables when set.
    pub fn load_from(
        user_config: Option<&Path>,
        cli_config_path: Option<&str>,
        env: Option<Map<String, String>>,
    ) -> Result<Self, SuggestError> {
        let mut builder = Config::builder()
            .set_default("log_level", default_log_level())
            .map_err(|e| SuggestError::Config(e.to_string()))?;

        if let Some(path) = user_config {
            builder =
                builder.add_source(File::with_name(&path.to_string_lossy()).required(false));
        }

        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // Format: TITLES_LOG_LEVEL, TITLES_SEED, TITLES_SUGGESTER__MAX_SUGGESTIONS, etc.
        builder = builder.add_source(
            Environment::with_prefix("TITLES")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config = builder
            .build()
            .map_err(|e| SuggestError::Config(e.to_string()))?;

        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| SuggestError::Config(e.to_string()))?;

        settings.suggester.validate()?;
        Ok(settings)
    }
}

/// Directory holding the default config file.
pub fn default_config_dir() -> PathBuf {
    ProjectDirs::from("", "", "title-suggest")
        .map(|p| p.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Load from `path` only, ignoring the user config file and the process environment.
    fn load_isolated(path: Option<&str>, env: &[(&str, &str)]) -> Result<Settings, SuggestError> {
        let env: Map<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::load_from(None, path, Some(env))
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.log_level, "warn");
        assert_eq!(settings.seed, None);
        assert_eq!(settings.suggester.max_suggestions, 5);
    }

    #[test]
    fn test_suggester_defaults() {
        let config = SuggesterConfig::default();
        assert_eq!(config.max_title_length, 100);
        assert_eq!(config.max_key_phrases, 15);
        assert_eq!(config.important_sentences, 3);
        assert_eq!(config.fallback_phrases, 5);
        assert_eq!(config.classification_window, 200);
        assert_eq!(config.engaging_prefix_count, 3);
        assert_eq!(config.min_improvable_title_length, 5);
        assert_eq!(config.long_title_chars, 50);
        assert_eq!(config.short_title_words, 8);
    }

    #[test]
    fn test_validation() {
        let mut config = SuggesterConfig::default();
        assert!(config.validate().is_ok());

        config.max_suggestions = 0;
        assert!(config.validate().is_err());

        config.max_suggestions = 5;
        config.max_title_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_explicit_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "log_level = \"debug\"\nseed = 42\n\n[suggester]\nmax_suggestions = 3"
        )
        .unwrap();

        let path = file.path().to_string_lossy().to_string();
        let settings = load_isolated(Some(&path), &[]).unwrap();
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.suggester.max_suggestions, 3);
        // Unspecified fields keep their defaults
        assert_eq!(settings.suggester.max_title_length, 100);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[suggester]\nmax_key_phrases = 0").unwrap();

        let path = file.path().to_string_lossy().to_string();
        let err = load_isolated(Some(&path), &[]).unwrap_err();
        assert!(matches!(err, SuggestError::Config(_)));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let result = load_isolated(Some("/nonexistent/title-suggest/config.toml"), &[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "log_level = \"info\"\nseed = 1\n\n\
             [suggester]\nmax_suggestions = 4\nmax_key_phrases = 7"
        )
        .unwrap();

        let path = file.path().to_string_lossy().to_string();
        let settings = load_isolated(
            Some(&path),
            &[
                ("TITLES_LOG_LEVEL", "debug"),
                ("TITLES_SEED", "9"),
                ("TITLES_SUGGESTER__MAX_SUGGESTIONS", "2"),
            ],
        )
        .unwrap();

        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.suggester.max_suggestions, 2);
        // Keys without an env var keep the file value
        assert_eq!(settings.suggester.max_key_phrases, 7);
    }

    #[test]
    fn test_env_only_without_files() {
        let settings =
            load_isolated(None, &[("TITLES_SUGGESTER__MAX_TITLE_LENGTH", "80")]).unwrap();
        assert_eq!(settings.log_level, "warn");
        assert_eq!(settings.seed, None);
        assert_eq!(settings.suggester.max_title_length, 80);
    }

    #[test]
    fn test_env_invalid_value_rejected() {
        let err = load_isolated(None, &[("TITLES_SUGGESTER__MAX_SUGGESTIONS", "0")]).unwrap_err();
        assert!(matches!(err, SuggestError::Config(_)));
    }

    #[test]
    fn test_config_serialization() {
        let config = SuggesterConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SuggesterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);

        let partial: SuggesterConfig = serde_json::from_str("{\"max_suggestions\": 2}").unwrap();
        assert_eq!(partial.max_suggestions, 2);
        assert_eq!(partial.max_key_phrases, 15);
    }
}
