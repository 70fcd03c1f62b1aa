// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Mock grammar for testing
//!
//! Knows a fixed set of SQL strings and the trees they parse to. Good enough
//! to drive round-trip tests without a real tokenizer.

use std::collections::HashMap;

use shardsql_ast::{Grammar, Statement, SyntaxError};

use crate::fixtures::SqlFixtures;

/// In-memory grammar keyed by exact SQL text
#[derive(Debug, Clone, Default)]
pub struct MockGrammar {
    statements: HashMap<String, Statement>,
}

impl MockGrammar {
    /// Create a grammar that knows nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grammar that knows every fixture
    pub fn with_fixtures() -> Self {
        SqlFixtures::all()
            .into_iter()
            .fold(Self::new(), |grammar, f| grammar.with(f.sql, f.statement))
    }

    /// Teach the grammar one statement
    pub fn with(mut self, sql: impl Into<String>, statement: impl Into<Statement>) -> Self {
        self.statements.insert(sql.into(), statement.into());
        self
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Grammar for MockGrammar {
    fn parse(&self, sql: &str) -> Result<Statement, SyntaxError> {
        self.statements
            .get(sql)
            .cloned()
            .ok_or_else(|| SyntaxError::at(format!("unknown statement: {sql}"), 0))
    }
}
