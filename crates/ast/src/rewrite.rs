// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # LIMIT Normalization
//!
//! A query fanned out to several shards cannot apply `limit offset, count`
//! per shard: each shard is ordered independently. The router instead asks
//! every shard for the first `offset + count` rows and applies the real
//! bounds after merging.
//!
//! ```text
//! limit 10, 20   =>   limit 30
//! limit 5        =>   limit 5
//! ```
//!
//! The result is only meaningful to the merge step. Rewrites return new
//! nodes and leave their input untouched, including on error.

use tracing::debug;

use crate::error::{RewriteError, RewriteResult};
use crate::expr::{NumVal, ValExpr};
use crate::query::{Limit, Select};

impl Limit {
    /// Fold the offset into the row count
    pub fn normalize(&self) -> RewriteResult<Limit> {
        let offset = match &self.offset {
            None => 0,
            Some(ValExpr::Num(num)) => parse_bound(num)?,
            Some(_) => return Err(RewriteError::OffsetNotNumber),
        };
        let rowcount = match &self.rowcount {
            ValExpr::Num(num) => parse_bound(num)?,
            _ => return Err(RewriteError::RowCountNotNumber),
        };

        let total = offset
            .checked_add(rowcount)
            .ok_or(RewriteError::Overflow { offset, rowcount })?;

        debug!(offset, rowcount, total, "normalized limit for fan-out");
        Ok(Limit::new(None, NumVal::new(total.to_string())))
    }
}

/// Normalize an optional LIMIT; no clause stays no clause
pub fn normalize_limit(limit: Option<&Limit>) -> RewriteResult<Option<Limit>> {
    limit.map(Limit::normalize).transpose()
}

impl Select {
    /// Copy of this select with its LIMIT normalized for fan-out
    pub fn with_fanout_limit(&self) -> RewriteResult<Select> {
        let limit = normalize_limit(self.limit.as_ref())?;
        Ok(Select {
            limit,
            ..self.clone()
        })
    }
}

fn parse_bound(num: &NumVal) -> RewriteResult<i64> {
    let text = num.as_str();
    let value = text
        .parse::<i64>()
        .map_err(|source| RewriteError::InvalidNumber {
            text: text.to_string(),
            source,
        })?;
    if value < 0 {
        return Err(RewriteError::NegativeValue(value));
    }
    Ok(value)
}
