// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Expressions
//!
//! Value expressions and the families that group them.
//!
//! ## Families
//!
//! Each family is a closed enum. A node belongs to a family exactly when the
//! family has a variant for it, so the compiler rejects a string literal
//! where a truth value is required.
//!
//! ```text
//! Expr
//! ├── Bool(BoolExpr)       and, or, not, ( ), comparisons, between, is null, exists
//! ├── Val(ValExpr)         literals, columns, arithmetic, functions, case
//! │   └── Tuple(Tuple)     (a, b, c) or a subquery
//! ├── Like(LikeExpr)       ` like ...` suffix used by SHOW
//! └── Where(WhereExpr)     ` where ...` suffix used by SHOW
//! ```
//!
//! `From` conversions lift a node into every family it belongs to:
//!
//! ```rust
//! use shardsql_ast::{ColName, Expr, ValExpr};
//!
//! let val: ValExpr = ColName::new("id").into();
//! let expr: Expr = ColName::new("id").into();
//! assert_eq!(expr, Expr::Val(val));
//! ```
//!
//! ## Literals
//!
//! [`NumVal`] keeps the digits exactly as written and [`StrVal`] keeps the
//! unescaped value; neither is interpreted. [`ValArg`] is a named bind
//! variable stored with its leading `:` marker.

use serde::{Deserialize, Serialize};

use crate::condition::BoolExpr;
use crate::error::{BuildError, BuildResult};
use crate::format::{SqlNode, TrackedBuffer};
use crate::query::SelectStatement;

/// Any value- or boolean-producing expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Bool(BoolExpr),
    Val(ValExpr),
    Like(LikeExpr),
    Where(WhereExpr),
}

/// An expression usable where a scalar or row value is required
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValExpr {
    Str(StrVal),
    Num(NumVal),
    Arg(ValArg),
    Null(NullVal),
    Column(ColName),
    Tuple(Tuple),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Func(FuncExpr),
    Case(CaseExpr),
}

/// A value that is itself a row or a set of rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Tuple {
    Values(ValTuple),
    Subquery(Subquery),
}

/// A string literal, stored unescaped
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrVal(pub String);

/// A numeric literal, stored as written
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumVal(pub String);

/// A named bind variable (`:name`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValArg(String);

/// The `null` literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct NullVal;

/// Column reference (`column` or `qualifier.column`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColName {
    pub name: String,
    pub qualifier: Option<String>,
}

/// Column names joined by a bare `,` (`a,b,t.c`)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColNames(pub Vec<ColName>);

/// Parenthesized list of values, e.g. the right side of `in`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValTuple(pub ValExprs);

/// Comma-separated value expressions without surrounding parentheses
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValExprs(pub Vec<ValExpr>);

/// A parenthesized SELECT used as a value or a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subquery {
    pub select: Box<SelectStatement>,
}

/// Binary arithmetic or bitwise operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    BitAnd,
    BitOr,
    BitXor,
    Plus,
    Minus,
    Mult,
    Div,
    Mod,
}

/// Unary value operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub expr: Box<Expr>,
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    Plus,
    Minus,
    Tilde,
}

/// Function call (e.g., `count(distinct id)`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncExpr {
    pub name: String,
    pub distinct: bool,
    pub args: ValExprs,
}

/// CASE expression
///
/// Fields are private so that a CASE without WHEN branches cannot be built,
/// including through deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CaseParts")]
pub struct CaseExpr {
    expr: Option<Box<ValExpr>>,
    whens: Vec<When>,
    else_expr: Option<Box<ValExpr>>,
}

#[derive(Deserialize)]
struct CaseParts {
    expr: Option<ValExpr>,
    whens: Vec<When>,
    else_expr: Option<ValExpr>,
}

impl TryFrom<CaseParts> for CaseExpr {
    type Error = BuildError;

    fn try_from(parts: CaseParts) -> BuildResult<Self> {
        CaseExpr::new(parts.expr, parts.whens, parts.else_expr)
    }
}

/// One `when cond then val` branch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct When {
    pub cond: BoolExpr,
    pub val: ValExpr,
}

/// ` like pattern` filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikeExpr {
    pub expr: ValExpr,
}

/// ` where cond` filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhereExpr {
    pub expr: BoolExpr,
}

impl StrVal {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl NumVal {
    pub fn new(digits: impl Into<String>) -> Self {
        Self(digits.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValArg {
    /// Create a bind variable; the `:` marker is added if missing
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.starts_with(':') {
            Self(name)
        } else {
            Self(format!(":{name}"))
        }
    }

    /// Name without the `:` marker
    pub fn name(&self) -> &str {
        self.0.strip_prefix(':').unwrap_or(&self.0)
    }

    /// Text as stored, marker included
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl ColName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qualifier: None,
        }
    }

    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }
}

impl ColNames {
    pub fn new(names: impl IntoIterator<Item = ColName>) -> Self {
        Self(names.into_iter().collect())
    }
}

impl ValTuple {
    pub fn new(values: impl IntoIterator<Item = ValExpr>) -> Self {
        Self(ValExprs(values.into_iter().collect()))
    }
}

impl Subquery {
    pub fn new(select: impl Into<SelectStatement>) -> Self {
        Self {
            select: Box::new(select.into()),
        }
    }
}

impl BinaryOp {
    pub fn as_char(self) -> char {
        match self {
            BinaryOp::BitAnd => '&',
            BinaryOp::BitOr => '|',
            BinaryOp::BitXor => '^',
            BinaryOp::Plus => '+',
            BinaryOp::Minus => '-',
            BinaryOp::Mult => '*',
            BinaryOp::Div => '/',
            BinaryOp::Mod => '%',
        }
    }
}

impl UnaryOp {
    pub fn as_char(self) -> char {
        match self {
            UnaryOp::Plus => '+',
            UnaryOp::Minus => '-',
            UnaryOp::Tilde => '~',
        }
    }
}

impl BinaryExpr {
    pub fn new(left: impl Into<Expr>, op: BinaryOp, right: impl Into<Expr>) -> Self {
        Self {
            op,
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }
}

impl UnaryExpr {
    pub fn new(op: UnaryOp, expr: impl Into<Expr>) -> Self {
        Self {
            op,
            expr: Box::new(expr.into()),
        }
    }
}

impl FuncExpr {
    pub fn new(name: impl Into<String>, args: impl IntoIterator<Item = ValExpr>) -> Self {
        Self {
            name: name.into(),
            distinct: false,
            args: ValExprs(args.into_iter().collect()),
        }
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }
}

impl CaseExpr {
    /// Build a CASE expression; `whens` must not be empty
    ///
    /// `expr` is the operand of a simple CASE and `None` for a searched CASE.
    pub fn new(
        expr: Option<ValExpr>,
        whens: Vec<When>,
        else_expr: Option<ValExpr>,
    ) -> BuildResult<Self> {
        if whens.is_empty() {
            return Err(BuildError::EmptyCase);
        }
        Ok(Self {
            expr: expr.map(Box::new),
            whens,
            else_expr: else_expr.map(Box::new),
        })
    }

    pub fn expr(&self) -> Option<&ValExpr> {
        self.expr.as_deref()
    }

    pub fn whens(&self) -> &[When] {
        &self.whens
    }

    pub fn else_expr(&self) -> Option<&ValExpr> {
        self.else_expr.as_deref()
    }
}

impl When {
    pub fn new(cond: impl Into<BoolExpr>, val: impl Into<ValExpr>) -> Self {
        Self {
            cond: cond.into(),
            val: val.into(),
        }
    }
}

impl SqlNode for Expr {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        match self {
            Expr::Bool(e) => e.format(buf),
            Expr::Val(e) => e.format(buf),
            Expr::Like(e) => e.format(buf),
            Expr::Where(e) => e.format(buf),
        }
    }
}

impl SqlNode for ValExpr {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        match self {
            ValExpr::Str(e) => e.format(buf),
            ValExpr::Num(e) => e.format(buf),
            ValExpr::Arg(e) => e.format(buf),
            ValExpr::Null(e) => e.format(buf),
            ValExpr::Column(e) => e.format(buf),
            ValExpr::Tuple(e) => e.format(buf),
            ValExpr::Binary(e) => e.format(buf),
            ValExpr::Unary(e) => e.format(buf),
            ValExpr::Func(e) => e.format(buf),
            ValExpr::Case(e) => e.format(buf),
        }
    }
}

impl SqlNode for Tuple {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        match self {
            Tuple::Values(t) => t.format(buf),
            Tuple::Subquery(s) => s.format(buf),
        }
    }
}

impl SqlNode for StrVal {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.write_literal(&self.0);
    }
}

impl SqlNode for NumVal {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.push_str(&self.0);
    }
}

impl SqlNode for ValArg {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.write_arg(self.name());
    }
}

impl SqlNode for NullVal {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.push_str("null");
    }
}

impl SqlNode for ColName {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        if let Some(qualifier) = &self.qualifier {
            buf.write_ident(qualifier);
            buf.push_char('.');
        }
        buf.write_ident(&self.name);
    }
}

impl SqlNode for ColNames {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.write_list(&self.0, ",");
    }
}

impl SqlNode for ValTuple {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.push_char('(');
        self.0.format(buf);
        buf.push_char(')');
    }
}

impl SqlNode for ValExprs {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.write_list(&self.0, ", ");
    }
}

impl SqlNode for Subquery {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.push_char('(');
        self.select.format(buf);
        buf.push_char(')');
    }
}

impl SqlNode for BinaryExpr {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        self.left.format(buf);
        buf.push_char(self.op.as_char());
        self.right.format(buf);
    }
}

impl SqlNode for UnaryExpr {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.push_char(self.op.as_char());
        self.expr.format(buf);
    }
}

impl SqlNode for FuncExpr {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.push_str(&self.name);
        buf.push_char('(');
        if self.distinct {
            buf.push_str("distinct ");
        }
        self.args.format(buf);
        buf.push_char(')');
    }
}

impl SqlNode for CaseExpr {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.push_str("case ");
        if let Some(expr) = &self.expr {
            expr.format(buf);
            buf.push_char(' ');
        }
        for when in &self.whens {
            when.format(buf);
            buf.push_char(' ');
        }
        if let Some(else_expr) = &self.else_expr {
            buf.push_str("else ");
            else_expr.format(buf);
            buf.push_char(' ');
        }
        buf.push_str("end");
    }
}

impl SqlNode for When {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.push_str("when ");
        self.cond.format(buf);
        buf.push_str(" then ");
        self.val.format(buf);
    }
}

impl SqlNode for LikeExpr {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.push_str(" like ");
        self.expr.format(buf);
    }
}

impl SqlNode for WhereExpr {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.push_str(" where ");
        self.expr.format(buf);
    }
}

macro_rules! into_family {
    ($family:ident :: $variant:ident <- $ty:ty) => {
        impl From<$ty> for $family {
            fn from(node: $ty) -> Self {
                $family::$variant(node)
            }
        }
    };
}

into_family!(Tuple::Values <- ValTuple);
into_family!(Tuple::Subquery <- Subquery);

into_family!(ValExpr::Str <- StrVal);
into_family!(ValExpr::Num <- NumVal);
into_family!(ValExpr::Arg <- ValArg);
into_family!(ValExpr::Null <- NullVal);
into_family!(ValExpr::Column <- ColName);
into_family!(ValExpr::Tuple <- Tuple);
into_family!(ValExpr::Binary <- BinaryExpr);
into_family!(ValExpr::Unary <- UnaryExpr);
into_family!(ValExpr::Func <- FuncExpr);
into_family!(ValExpr::Case <- CaseExpr);

into_family!(Expr::Bool <- BoolExpr);
into_family!(Expr::Val <- ValExpr);
into_family!(Expr::Like <- LikeExpr);
into_family!(Expr::Where <- WhereExpr);

impl From<ValTuple> for ValExpr {
    fn from(node: ValTuple) -> Self {
        ValExpr::Tuple(Tuple::Values(node))
    }
}

impl From<Subquery> for ValExpr {
    fn from(node: Subquery) -> Self {
        ValExpr::Tuple(Tuple::Subquery(node))
    }
}

macro_rules! val_into_expr {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Expr {
                fn from(node: $ty) -> Self {
                    Expr::Val(node.into())
                }
            }
        )*
    };
}

val_into_expr!(
    StrVal, NumVal, ValArg, NullVal, ColName, Tuple, ValTuple, Subquery, BinaryExpr, UnaryExpr,
    FuncExpr, CaseExpr,
);
