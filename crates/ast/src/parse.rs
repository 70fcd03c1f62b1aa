// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Producer Contract
//!
//! Text becomes a tree only through a [`Grammar`]. The tokenizer and grammar
//! live outside this crate; this module fixes the boundary they plug into.

use tracing::debug;

use crate::error::SyntaxError;
use crate::statement::Statement;

/// A SQL grammar that produces statement trees
pub trait Grammar {
    fn parse(&self, sql: &str) -> Result<Statement, SyntaxError>;
}

impl<G: Grammar + ?Sized> Grammar for &G {
    fn parse(&self, sql: &str) -> Result<Statement, SyntaxError> {
        (**self).parse(sql)
    }
}

/// Parse `sql` with `grammar`
///
/// Blank input is rejected without consulting the grammar. The text is
/// handed over unmodified.
pub fn parse<G: Grammar + ?Sized>(grammar: &G, sql: &str) -> Result<Statement, SyntaxError> {
    if sql.trim().is_empty() {
        debug!("rejected empty query");
        return Err(SyntaxError::new("empty query"));
    }

    grammar.parse(sql).inspect_err(|err| {
        debug!(%err, sql, "parse failed");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingGrammar {
        calls: Cell<usize>,
    }

    impl Grammar for CountingGrammar {
        fn parse(&self, sql: &str) -> Result<Statement, SyntaxError> {
            self.calls.set(self.calls.get() + 1);
            match sql {
                "begin" => Ok(Statement::Begin),
                _ => Err(SyntaxError::at("unexpected input", 0)),
            }
        }
    }

    #[test]
    fn test_empty_input_skips_grammar() {
        let grammar = CountingGrammar { calls: Cell::new(0) };
        assert_eq!(parse(&grammar, "  "), Err(SyntaxError::new("empty query")));
        assert_eq!(grammar.calls.get(), 0);
    }

    #[test]
    fn test_delegates_to_grammar() {
        let grammar = CountingGrammar { calls: Cell::new(0) };
        assert_eq!(parse(&grammar, "begin"), Ok(Statement::Begin));
        assert!(parse(&grammar, "bogus").is_err());
        assert_eq!(grammar.calls.get(), 2);
    }
}
