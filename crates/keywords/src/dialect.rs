// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Dialect Selection
//!
//! The router speaks one SQL family (MySQL), but the set of words the server
//! reserves grows between releases. [`Dialect`] picks which reserved-word
//! table the serializer consults when deciding whether an identifier must be
//! backtick-quoted.
//!
//! - **MySQL 5.7**: the base reserved-word list plus words the proxy grammar
//!   treats as keywords
//! - **MySQL 8.0**: everything in 5.7 plus the words 8.0 newly reserved for
//!   window functions, CTEs and `JSON_TABLE`

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported MySQL server versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// MySQL 5.7
    #[default]
    #[serde(rename = "mysql5.7", alias = "mysql")]
    MySQL57,
    /// MySQL 8.0+
    #[serde(rename = "mysql8.0")]
    MySQL80,
}

impl Dialect {
    /// Get all supported dialects
    pub fn all() -> &'static [Dialect] {
        &[Dialect::MySQL57, Dialect::MySQL80]
    }

    /// Get dialect name as string
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::MySQL57 => "mysql5.7",
            Dialect::MySQL80 => "mysql8.0",
        }
    }

    /// Parse dialect from string
    pub fn from_str(s: &str) -> Option<Dialect> {
        match s.to_lowercase().as_str() {
            "mysql" | "mysql5.7" | "mysql57" | "5.7" => Some(Dialect::MySQL57),
            "mysql8.0" | "mysql80" | "mysql8" | "8.0" => Some(Dialect::MySQL80),
            _ => None,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_from_str() {
        assert_eq!(Dialect::from_str("mysql"), Some(Dialect::MySQL57));
        assert_eq!(Dialect::from_str("MySQL5.7"), Some(Dialect::MySQL57));
        assert_eq!(Dialect::from_str("mysql8.0"), Some(Dialect::MySQL80));
        assert_eq!(Dialect::from_str("8.0"), Some(Dialect::MySQL80));
        assert_eq!(Dialect::from_str("postgresql"), None);
    }

    #[test]
    fn test_every_name_parses_back() {
        for &dialect in Dialect::all() {
            assert_eq!(Dialect::from_str(dialect.name()), Some(dialect));
        }
        assert_eq!(Dialect::all()[0], Dialect::default());
    }

    #[test]
    fn test_dialect_display() {
        assert_eq!(Dialect::MySQL57.to_string(), "mysql5.7");
        assert_eq!(Dialect::MySQL80.to_string(), "mysql8.0");
    }

    #[test]
    fn test_dialect_serde_names() {
        let d: Dialect = serde_json::from_str("\"mysql8.0\"").unwrap();
        assert_eq!(d, Dialect::MySQL80);

        let d: Dialect = serde_json::from_str("\"mysql\"").unwrap();
        assert_eq!(d, Dialect::MySQL57);

        assert_eq!(
            serde_json::to_string(&Dialect::MySQL57).unwrap(),
            "\"mysql5.7\""
        );
    }
}
