// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Short constructors for building trees in tests

use shardsql_ast::{
    BoolExpr, ColName, ComparisonExpr, ComparisonOp, NonStarExpr, NumVal, Select, SelectExpr,
    StarExpr, StrVal, TableExpr, TableName, ValArg, ValExpr,
};

pub fn col(name: &str) -> ColName {
    ColName::new(name)
}

pub fn num(digits: &str) -> NumVal {
    NumVal::new(digits)
}

pub fn string(value: &str) -> StrVal {
    StrVal::new(value)
}

pub fn arg(name: &str) -> ValArg {
    ValArg::new(name)
}

/// `left = right`
pub fn eq(left: impl Into<ValExpr>, right: impl Into<ValExpr>) -> BoolExpr {
    ComparisonExpr::new(left, ComparisonOp::Eq, right).into()
}

pub fn table(name: &str) -> TableExpr {
    TableName::new(name).into()
}

pub fn star() -> SelectExpr {
    StarExpr::default().into()
}

/// `select {columns} from {table_name}`
pub fn select(columns: &[&str], table_name: &str) -> Select {
    Select::new(
        columns
            .iter()
            .map(|c| SelectExpr::from(NonStarExpr::new(col(c)))),
    )
    .with_from([table(table_name)])
}
