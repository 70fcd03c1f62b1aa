// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! SQL-specific test helpers and custom assertions

use shardsql_ast::{Grammar, SqlNode, Statement, parse, to_sql};

/// Assert that `node` renders exactly as `expected`
#[track_caller]
pub fn assert_renders<N: SqlNode + ?Sized>(node: &N, expected: &str) {
    let actual = to_sql(node);
    assert_eq!(actual, expected, "Rendered SQL mismatch");
}

/// Render, re-parse with `grammar`, render again; both renders must match
///
/// Returns the rendered text.
#[track_caller]
pub fn assert_round_trip<G: Grammar + ?Sized>(grammar: &G, statement: &Statement) -> String {
    let first = to_sql(statement);
    let reparsed = match parse(grammar, &first) {
        Ok(stmt) => stmt,
        Err(err) => panic!("Rendered SQL did not re-parse: {first}: {err}"),
    };
    let second = to_sql(&reparsed);
    assert_eq!(first, second, "Rendering is not stable across a round trip");
    first
}
