// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Testing utilities for shardsql
//!
//! This crate provides common testing components including:
//! - Terse builders for syntax trees
//! - Sample statements paired with their canonical SQL
//! - A mock grammar for round-trip tests
//! - Rendering assertions
//! - YAML test case files

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod mock_grammar;
pub mod test_case_parser;

// Re-exports for convenience
pub use assertions::{assert_renders, assert_round_trip};
pub use fixtures::{Fixture, SqlFixtures};
pub use mock_grammar::MockGrammar;
pub use test_case_parser::{
    CaseFile, CaseFileError, LimitCase, LimitOperand, RenderCase, load_case_file, parse_case_file,
    parse_limit_cases,
};
