//! Convenience layer over `kana_core` driven by the global settings.

mod trace_init;

use std::fs;
use std::path::Path;

use tracing::debug;

pub use kana_core;
pub use kana_core::filter::AnalysisError;
pub use kana_core::settings::{Settings, SettingsError};
pub use kana_core::{StreamError, TextAnalyzer, Token, TokenKind};
pub use trace_init::{init_tracing, TraceGuard};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    #[error(transparent)]
    Stream(#[from] StreamError),
}

/// Normalize a whole string, ignoring token boundaries.
pub fn normalize(text: &str) -> String {
    kana_core::filter::uppercase_katakana(text).into_owned()
}

/// Install settings from a TOML file. Must run before the first
/// [`analyze_text`] call.
pub fn load_custom_settings(path: &Path) -> Result<(), EngineError> {
    let content = fs::read_to_string(path).map_err(SettingsError::from)?;
    kana_core::settings::init_custom(content)?;
    debug!(path = %path.display(), "custom settings installed");
    Ok(())
}

pub fn analyzer_from_settings(settings: &Settings) -> Result<TextAnalyzer, EngineError> {
    Ok(TextAnalyzer::from_settings(&settings.analyzer)?)
}

/// Tokenize and filter `text` with the analyzer described by the global
/// settings.
pub fn analyze_text(text: &str) -> Result<Vec<Token>, EngineError> {
    let analyzer = analyzer_from_settings(kana_core::settings::settings())?;
    Ok(analyzer.analyze(text)?)
}
