//! Process-wide model configuration.
//!
//! Builders validate against [`ModelConfig::current`] unless an explicit configuration
//! is passed to `build_with`. The current configuration can be replaced at any time;
//! readers always observe a complete snapshot.

use std::sync::Arc;

use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::ModelError;

const ENV_CHECK_REFERENCE_TYPES: &str = "ATRIUS_FHIR_CHECK_REFERENCE_TYPES";
const ENV_CHECK_PRIMITIVE_LEXICAL: &str = "ATRIUS_FHIR_CHECK_PRIMITIVE_LEXICAL";
const ENV_CHECK_EMPTY_ELEMENTS: &str = "ATRIUS_FHIR_CHECK_EMPTY_ELEMENTS";

static CURRENT: Lazy<ArcSwap<ModelConfig>> =
    Lazy::new(|| ArcSwap::from_pointee(ModelConfig::default()));

/// Switches for the optional validation checks.
///
/// Required-element and cardinality checks always run; they are what makes a built
/// value structurally valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModelConfig {
    /// Check `Reference.reference` / `Reference.type` against allowed target types.
    pub check_reference_types: bool,
    /// Apply lexical rules to primitive values (code, id, uri, string, ...).
    pub check_primitive_lexical: bool,
    /// Reject elements that have neither a value nor children (ele-1).
    pub check_empty_elements: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            check_reference_types: true,
            check_primitive_lexical: true,
            check_empty_elements: true,
        }
    }
}

impl ModelConfig {
    /// Configuration with every optional check disabled.
    pub fn lenient() -> Self {
        Self {
            check_reference_types: false,
            check_primitive_lexical: false,
            check_empty_elements: false,
        }
    }

    /// Parses a configuration from JSON; missing keys keep their defaults.
    ///
    /// ```rust
    /// use atrius_fhir_support::ModelConfig;
    ///
    /// let config = ModelConfig::from_json(r#"{ "checkReferenceTypes": false }"#).unwrap();
    /// assert!(!config.check_reference_types);
    /// assert!(config.check_primitive_lexical);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds a configuration from `ATRIUS_FHIR_*` environment variables.
    ///
    /// Unset variables keep their defaults; unparsable values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let flags: [(&str, &mut bool); 3] = [
            (ENV_CHECK_REFERENCE_TYPES, &mut config.check_reference_types),
            (ENV_CHECK_PRIMITIVE_LEXICAL, &mut config.check_primitive_lexical),
            (ENV_CHECK_EMPTY_ELEMENTS, &mut config.check_empty_elements),
        ];
        for (key, flag) in flags {
            let Some(raw) = lookup(key) else { continue };
            match parse_flag(&raw) {
                Some(value) => *flag = value,
                None => warn!("Ignoring {}={:?}: expected true/false", key, raw),
            }
        }
        config
    }

    /// Returns a snapshot of the process-wide configuration.
    pub fn current() -> Arc<ModelConfig> {
        CURRENT.load_full()
    }

    /// Replaces the process-wide configuration.
    pub fn set_current(config: ModelConfig) {
        info!("Model configuration updated: {:?}", config);
        CURRENT.store(Arc::new(config));
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
