//! Session configuration supplied by the host.

use querypad_core::{GrammarMode, QueryPadError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for one editing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Which grammar the surface edits
    pub mode: GrammarMode,
    /// Read-only surfaces render markup but reject every mutation
    #[serde(default)]
    pub read_only: bool,
}

impl EditorConfig {
    pub fn query() -> Self {
        Self {
            mode: GrammarMode::Query,
            read_only: false,
        }
    }

    pub fn structured_data() -> Self {
        Self {
            mode: GrammarMode::StructuredData,
            read_only: false,
        }
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Parse a configuration the host hands over as JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| QueryPadError::Configuration(format!("invalid editor config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_json() {
        let config = EditorConfig::from_json(r#"{"mode": "query"}"#).unwrap();
        assert_eq!(config, EditorConfig::query());

        let config =
            EditorConfig::from_json(r#"{"mode": "structured-data", "read_only": true}"#).unwrap();
        assert_eq!(config.mode, GrammarMode::StructuredData);
        assert!(config.read_only);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let err = EditorConfig::from_json(r#"{"mode": "markdown"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid editor config"));
    }
}
