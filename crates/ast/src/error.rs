// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error types for the AST layer
//!
//! One enum per concern. Rendering has no error type: every well-constructed
//! tree renders.

use std::num::ParseIntError;

use serde::Serialize;
use thiserror::Error;

/// Result type alias for node construction
pub type BuildResult<T> = Result<T, BuildError>;

/// Result type alias for tree rewrites
pub type RewriteResult<T> = Result<T, RewriteError>;

/// Result type alias for bind-variable substitution
pub type BindResult<T> = Result<T, BindError>;

/// Result type alias for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// A node was built with a shape it must never have
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
pub enum BuildError {
    /// CASE without any WHEN branch
    #[error("case expression requires at least one when clause")]
    EmptyCase,

    /// Identifier with no text
    #[error("identifier must not be empty")]
    EmptyIdentifier,
}

/// LIMIT normalization failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RewriteError {
    #[error("offset is not a number")]
    OffsetNotNumber,

    #[error("row count is not a number")]
    RowCountNotNumber,

    /// Numeric literal that does not fit a signed 64-bit integer
    #[error("invalid number '{text}': {source}")]
    InvalidNumber {
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("limit value must not be negative: {0}")]
    NegativeValue(i64),

    #[error("offset {offset} plus row count {rowcount} overflows")]
    Overflow { offset: i64, rowcount: i64 },
}

/// Failures while substituting bind values into a rendered query
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
pub enum BindError {
    #[error("missing bind variable: {0}")]
    Missing(String),

    #[error("empty list for bind variable: {0}")]
    EmptyList(String),

    /// A recorded location that is out of range, out of order or not on a
    /// placeholder in the query text
    #[error("invalid bind location at offset {offset} (length {length})")]
    InvalidLocation { offset: usize, length: usize },

    /// NaN and infinities have no SQL literal
    #[error("non-finite float for bind variable: {0}")]
    NonFiniteFloat(String),
}

/// The grammar rejected its input
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[error("syntax error{}: {message}", .position.map(|p| format!(" at position {p}")).unwrap_or_default())]
pub struct SyntaxError {
    pub message: String,
    pub position: Option<usize>,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            position: None,
        }
    }

    pub fn at(message: impl Into<String>, position: usize) -> Self {
        Self {
            message: message.into(),
            position: Some(position),
        }
    }
}

/// Invalid serializer configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid reserved word: {0:?}")]
    InvalidKeyword(String),
}
