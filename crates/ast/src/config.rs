// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Serializer Configuration
//!
//! Picks the reserved-word table identifiers are quoted against.
//!
//! ## Example
//!
//! ```rust
//! use shardsql_ast::{MySqlEncoder, Serializer, SerializerConfig};
//!
//! let config = SerializerConfig::from_json(r#"{"dialect": "mysql8.0", "extra_reserved": ["tenant"]}"#)?;
//! let keywords = config.keyword_set();
//! let serializer = Serializer::new(&keywords, &MySqlEncoder);
//! # let _ = serializer;
//! # Ok::<(), shardsql_ast::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use shardsql_keywords::{Dialect, KeywordSet};
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};

/// Serializer configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializerConfig {
    /// Server version whose reserved words are quoted
    pub dialect: Dialect,

    /// Additional words to quote, e.g. names a newer server reserves
    pub extra_reserved: Vec<String>,
}

impl SerializerConfig {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            extra_reserved: Vec::new(),
        }
    }

    /// Load and validate a configuration from JSON
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: SerializerConfig = serde_json::from_str(json)?;
        config.validate()?;
        debug!(
            "Loaded serializer config: dialect={}, extra_reserved={}",
            config.dialect,
            config.extra_reserved.len()
        );
        Ok(config)
    }

    /// Check that every extra reserved word is a single non-empty word
    pub fn validate(&self) -> ConfigResult<()> {
        for word in &self.extra_reserved {
            if word.is_empty() || word.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidKeyword(word.clone()));
            }
        }
        Ok(())
    }

    /// Owned keyword table for this configuration
    ///
    /// Extra words are stored in the same lower and upper spellings as the
    /// built-in ones.
    pub fn keyword_set(&self) -> KeywordSet {
        KeywordSet::for_dialect(self.dialect).extend(
            self.extra_reserved
                .iter()
                .flat_map(|w| [w.to_ascii_lowercase(), w.to_ascii_uppercase()]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SerializerConfig::from_json("{}").unwrap();
        assert_eq!(config.dialect, Dialect::MySQL57);
        assert!(config.extra_reserved.is_empty());
    }

    #[test]
    fn test_extra_reserved_words() {
        let config =
            SerializerConfig::from_json(r#"{"dialect": "mysql8.0", "extra_reserved": ["Tenant"]}"#)
                .unwrap();
        let keywords = config.keyword_set();

        assert!(keywords.is_reserved("tenant"));
        assert!(keywords.is_reserved("TENANT"));
        assert!(keywords.is_reserved("window"));
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(
            SerializerConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SerializerConfig::from_json(r#"{"extra_reserved": ["two words"]}"#),
            Err(ConfigError::InvalidKeyword(w)) if w == "two words"
        ));
        assert!(matches!(
            SerializerConfig::from_json(r#"{"dialect": "oracle"}"#),
            Err(ConfigError::Parse(_))
        ));
    }
}
