//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`
//!
//! The small-kana table is not part of the settings; only the pipeline
//! around it is configurable.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::filter::{build_filter, FilterConfig};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Upper bound for `analyzer.max_token_len`.
pub const MAX_TOKEN_LEN_LIMIT: usize = 1 << 20;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub analyzer: AnalyzerSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnalyzerSettings {
    /// Tokens longer than this many chars are split by the tokenizer.
    pub max_token_len: usize,
    #[serde(default)]
    pub filters: Vec<FilterConfig>,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

pub fn load_settings_file(path: &Path) -> Result<Settings, SettingsError> {
    let content = fs::read_to_string(path)?;
    parse_settings_toml(&content)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    let len = s.analyzer.max_token_len;
    if len == 0 || len > MAX_TOKEN_LEN_LIMIT {
        return Err(SettingsError::InvalidValue {
            field: "analyzer.max_token_len".to_string(),
            reason: format!("must be in 1..={MAX_TOKEN_LEN_LIMIT}"),
        });
    }
    for (i, filter) in s.analyzer.filters.iter().enumerate() {
        build_filter(filter).map_err(|e| SettingsError::InvalidValue {
            field: format!("analyzer.filters[{i}]"),
            reason: e.to_string(),
        })?;
    }
    Ok(())
}
