// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # shardsql - Syntax Tree
//!
//! This crate provides the MySQL-dialect syntax tree the router works on:
//! - Closed node families (statements, table expressions, boolean and value
//!   expressions) checked exhaustively by the compiler
//! - A canonical serializer that renders any tree back to SQL text
//! - The LIMIT rewrite applied before a query is fanned out to shards
//! - Bind-variable tracking and substitution
//!
//! Turning text into a tree is the job of an external [`Grammar`].
//!
//! ```rust
//! use shardsql_ast::{
//!     ColName, ComparisonExpr, ComparisonOp, NumVal, Select, StarExpr, TableName, to_sql,
//! };
//!
//! let select = Select::new([StarExpr::default().into()])
//!     .with_from([TableName::new("order").into()])
//!     .with_where(Some(ComparisonExpr::new(ColName::new("id"), ComparisonOp::Eq, NumVal::new("1")).into()));
//!
//! assert_eq!(to_sql(&select), "select * from `order` where id = 1");
//! ```

pub mod bind;
pub mod condition;
pub mod config;
pub mod encode;
pub mod error;
pub mod expr;
pub mod format;
pub mod parse;
pub mod query;
pub mod rewrite;
pub mod statement;

// Re-export commonly used types
pub use bind::{BindLocation, BindValue, ParsedQuery};
pub use condition::{
    AndExpr, BoolExpr, ComparisonExpr, ComparisonOp, ExistsExpr, NotExpr, NullCheck, NullCheckOp,
    OrExpr, ParenBoolExpr, RangeCond, RangeOp,
};
pub use config::SerializerConfig;
pub use encode::{LiteralEncoder, MySqlEncoder, encode_sql};
pub use error::{
    BindError, BindResult, BuildError, BuildResult, ConfigError, ConfigResult, RewriteError,
    RewriteResult, SyntaxError,
};
pub use expr::{
    BinaryExpr, BinaryOp, CaseExpr, ColName, ColNames, Expr, FuncExpr, LikeExpr, NullVal, NumVal,
    StrVal, Subquery, Tuple, UnaryExpr, UnaryOp, ValArg, ValExpr, ValExprs, ValTuple, When,
    WhereExpr,
};
pub use format::{Serializer, SqlNode, TrackedBuffer, to_sql};
pub use parse::{Grammar, parse};
pub use query::{
    AliasedTableExpr, Columns, Comments, GroupBy, IndexHintKind, IndexHints, JoinKind,
    JoinTableExpr, Limit, LockMode, NonStarExpr, Order, OrderBy, ParenTableExpr, Select,
    SelectExpr, SelectExprs, SelectStatement, SimpleTableExpr, SortDirection, StarExpr, TableExpr,
    TableExprs, TableName, Union, UnionKind, Where, WhereKind,
};
pub use rewrite::normalize_limit;
pub use statement::{
    Delete, Insert, InsertRows, OnDup, Replace, Set, SetNames, Show, ShowFilter, ShowModifier,
    ShowSection, SpaceSplitExpr, SpaceSplitExprs, Statement, Update, UpdateExpr, UpdateExprs, Use,
    Values,
};

pub use shardsql_keywords::{Dialect, KeywordSet};
