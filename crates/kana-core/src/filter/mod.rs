//! Token filters and the name-based registry used by configuration.

pub mod katakana_uppercase;

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use crate::stream::TokenFilter;

pub use katakana_uppercase::{
    needs_uppercase, uppercase_katakana, uppercase_katakana_into, KatakanaUppercaseFilter,
    KatakanaUppercaseFilterStream,
};

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("unknown filter: {0}")]
    UnknownFilter(String),
    #[error("unknown parameters for {filter}: {params:?}")]
    UnknownParameters { filter: String, params: Vec<String> },
}

/// One entry of a filter chain as written in settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FilterConfig {
    pub name: String,
    #[serde(default)]
    pub args: BTreeMap<String, String>,
}

impl FilterConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: BTreeMap::new(),
        }
    }
}

pub fn available_filters() -> &'static [&'static str] {
    &[KatakanaUppercaseFilter::NAME]
}

/// Instantiate a filter from its configuration.
pub fn build_filter(config: &FilterConfig) -> Result<Box<dyn TokenFilter>, AnalysisError> {
    let filter: Box<dyn TokenFilter> = match config.name.as_str() {
        KatakanaUppercaseFilter::NAME => {
            reject_args(config)?;
            Box::new(KatakanaUppercaseFilter)
        }
        other => return Err(AnalysisError::UnknownFilter(other.to_string())),
    };
    debug!(name = filter.name(), "filter built");
    Ok(filter)
}

fn reject_args(config: &FilterConfig) -> Result<(), AnalysisError> {
    if config.args.is_empty() {
        return Ok(());
    }
    Err(AnalysisError::UnknownParameters {
        filter: config.name.clone(),
        params: config.args.keys().cloned().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_known_filter() {
        let filter = build_filter(&FilterConfig::named("japaneseKatakanaUppercase")).unwrap();
        assert_eq!(filter.name(), KatakanaUppercaseFilter::NAME);
    }

    #[test]
    fn test_name_is_case_sensitive() {
        let err = build_filter(&FilterConfig::named("JapaneseKatakanaUppercase")).err();
        assert!(matches!(err, Some(AnalysisError::UnknownFilter(_))));
    }

    #[test]
    fn test_unknown_filter() {
        let err = build_filter(&FilterConfig::named("lowercase")).err().unwrap();
        assert_eq!(err.to_string(), "unknown filter: lowercase");
    }

    #[test]
    fn test_rejects_parameters() {
        let mut config = FilterConfig::named(KatakanaUppercaseFilter::NAME);
        config.args.insert("mode".into(), "strict".into());
        config.args.insert("extra".into(), "1".into());
        match build_filter(&config).err() {
            Some(AnalysisError::UnknownParameters { filter, params }) => {
                assert_eq!(filter, KatakanaUppercaseFilter::NAME);
                assert_eq!(params, vec!["extra".to_string(), "mode".to_string()]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_available_filters_all_build() {
        for name in available_filters() {
            assert!(build_filter(&FilterConfig::named(*name)).is_ok(), "{name}");
        }
    }
}
