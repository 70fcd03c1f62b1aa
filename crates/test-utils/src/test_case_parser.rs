// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! YAML test case files
//!
//! A case file is a named list of cases of one kind:
//!
//! ```yaml
//! name: limit normalization
//! cases:
//!   - name: offset folded
//!     offset: { num: "10" }
//!     rowcount: { num: "20" }
//!     expected: " limit 30"
//! ```
//!
//! Enum-valued fields are written as single-key maps (`{ num: "10" }`,
//! `Use: { db: app }`) rather than YAML tags.

use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use shardsql_ast::{ColName, Limit, NumVal, Statement, StrVal, ValArg, ValExpr};
use thiserror::Error;

/// A named list of test cases
#[derive(Debug, Clone, Deserialize)]
pub struct CaseFile<C> {
    pub name: String,
    pub cases: Vec<C>,
}

/// A statement tree and the SQL it must render to
#[derive(Debug, Clone, Deserialize)]
pub struct RenderCase {
    pub name: String,
    #[serde(with = "serde_yaml::with::singleton_map_recursive")]
    pub statement: Statement,
    pub sql: String,
}

/// A LIMIT clause and the outcome of normalizing it
///
/// Exactly one of `expected` (rendered result) and `error` (message) is set.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitCase {
    pub name: String,
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub offset: Option<LimitOperand>,
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub rowcount: LimitOperand,
    #[serde(default)]
    pub expected: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Operand of a LIMIT in a case file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitOperand {
    Num(String),
    Str(String),
    Column(String),
    Arg(String),
}

/// Errors while loading a case file
#[derive(Debug, Error)]
pub enum CaseFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Case file '{0}' has no cases")]
    Empty(String),

    #[error("Case '{0}' must set exactly one of expected and error")]
    AmbiguousOutcome(String),
}

impl From<LimitOperand> for ValExpr {
    fn from(operand: LimitOperand) -> Self {
        match operand {
            LimitOperand::Num(s) => NumVal::new(s).into(),
            LimitOperand::Str(s) => StrVal::new(s).into(),
            LimitOperand::Column(s) => ColName::new(s).into(),
            LimitOperand::Arg(s) => ValArg::new(s).into(),
        }
    }
}

impl LimitCase {
    pub fn limit(&self) -> Limit {
        Limit::new(
            self.offset.clone().map(Into::into),
            self.rowcount.clone(),
        )
    }

    fn check(&self) -> Result<(), CaseFileError> {
        if self.expected.is_some() == self.error.is_some() {
            return Err(CaseFileError::AmbiguousOutcome(self.name.clone()));
        }
        Ok(())
    }
}

/// Parse case file content
pub fn parse_case_file<C: DeserializeOwned>(yaml: &str) -> Result<CaseFile<C>, CaseFileError> {
    let file: CaseFile<C> = serde_yaml::from_str(yaml)?;
    if file.cases.is_empty() {
        return Err(CaseFileError::Empty(file.name));
    }
    Ok(file)
}

/// Load a case file from disk
pub fn load_case_file<C: DeserializeOwned>(path: &Path) -> Result<CaseFile<C>, CaseFileError> {
    let content = std::fs::read_to_string(path)?;
    parse_case_file(&content)
}

/// Parse a LIMIT case file, checking every case has one outcome
pub fn parse_limit_cases(yaml: &str) -> Result<CaseFile<LimitCase>, CaseFileError> {
    let file: CaseFile<LimitCase> = parse_case_file(yaml)?;
    for case in &file.cases {
        case.check()?;
    }
    Ok(file)
}
