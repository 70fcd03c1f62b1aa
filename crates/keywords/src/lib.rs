// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # shardsql - Reserved Keywords
//!
//! This crate answers one question for the serializer: is this identifier
//! spelled like a keyword, so that it must be backtick-quoted?
//!
//! ## Lookup Semantics
//!
//! Lookup is an exact, case-sensitive match. Every built-in table stores each
//! word in both its all-lowercase and all-uppercase spelling, so `order` and
//! `ORDER` are both reserved.
//!
//! ## Shared Tables
//!
//! The built-in tables are assembled once on first use and never rebuilt.
//! Callers that need a different word list (tests, a newer server) build an
//! owned [`KeywordSet`] and hand it to the serializer instead of touching the
//! shared ones.
//!
//! ```rust
//! use shardsql_keywords::{Dialect, KeywordSet};
//!
//! assert!(KeywordSet::mysql().is_reserved("select"));
//! assert!(!KeywordSet::mysql().is_reserved("window"));
//! assert!(KeywordSet::shared(Dialect::MySQL80).is_reserved("window"));
//! ```

pub mod dialect;
pub mod mysql;

pub use dialect::Dialect;

use std::collections::HashSet;
use std::sync::OnceLock;

/// An immutable set of reserved words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    words: HashSet<String>,
}

impl KeywordSet {
    /// Create a keyword set holding exactly the given words
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Build an owned copy of the reserved-word table for a dialect
    pub fn for_dialect(dialect: Dialect) -> Self {
        let mut lists = vec![mysql::MYSQL57_RESERVED, mysql::GRAMMAR_KEYWORDS];
        if dialect == Dialect::MySQL80 {
            lists.push(mysql::MYSQL80_ADDITIONS);
        }

        let words = lists
            .into_iter()
            .flatten()
            .flat_map(|w| [w.to_ascii_lowercase(), w.to_ascii_uppercase()])
            .collect();

        Self { words }
    }

    /// The shared MySQL 5.7 table
    pub fn mysql() -> &'static KeywordSet {
        Self::shared(Dialect::MySQL57)
    }

    /// The shared table for a dialect, built on first use
    pub fn shared(dialect: Dialect) -> &'static KeywordSet {
        static MYSQL57: OnceLock<KeywordSet> = OnceLock::new();
        static MYSQL80: OnceLock<KeywordSet> = OnceLock::new();

        match dialect {
            Dialect::MySQL57 => MYSQL57.get_or_init(|| KeywordSet::for_dialect(dialect)),
            Dialect::MySQL80 => MYSQL80.get_or_init(|| KeywordSet::for_dialect(dialect)),
        }
    }

    /// Add words to this set
    pub fn extend<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Check whether `word` is reserved (exact match)
    pub fn is_reserved(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Check `word` against the shared MySQL 5.7 table
pub fn is_reserved(word: &str) -> bool {
    KeywordSet::mysql().is_reserved(word)
}
