// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Boolean Expressions
//!
//! Nodes usable where a truth value is required: WHERE/HAVING conditions,
//! JOIN ... ON, and CASE branches. Operators are syntax carriers only; no
//! node here evaluates anything.
//!
//! `and`/`or` chains render flat (`a and b or c`). Grouping is whatever
//! [`ParenBoolExpr`] nodes the producer put in the tree.

use serde::{Deserialize, Serialize};

use crate::expr::{Subquery, ValExpr};
use crate::format::{SqlNode, TrackedBuffer};

/// A boolean expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BoolExpr {
    And(AndExpr),
    Or(OrExpr),
    Not(NotExpr),
    Paren(ParenBoolExpr),
    Comparison(ComparisonExpr),
    Range(RangeCond),
    NullCheck(NullCheck),
    Exists(ExistsExpr),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AndExpr {
    pub left: Box<BoolExpr>,
    pub right: Box<BoolExpr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrExpr {
    pub left: Box<BoolExpr>,
    pub right: Box<BoolExpr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotExpr {
    pub expr: Box<BoolExpr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParenBoolExpr {
    pub expr: Box<BoolExpr>,
}

/// Two-value comparison (`a = b`, `a in (...)`, `a like 'x%'`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonExpr {
    pub op: ComparisonOp,
    pub left: ValExpr,
    pub right: ValExpr,
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOp {
    Eq,
    Lt,
    Gt,
    Le,
    Ge,
    Ne,
    NullSafeEq,
    In,
    NotIn,
    Like,
    NotLike,
}

/// `left [not] between from and to`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeCond {
    pub op: RangeOp,
    pub left: ValExpr,
    pub from: ValExpr,
    pub to: ValExpr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeOp {
    Between,
    NotBetween,
}

/// `expr is [not] null`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NullCheck {
    pub op: NullCheckOp,
    pub expr: ValExpr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NullCheckOp {
    IsNull,
    IsNotNull,
}

/// `exists (select ...)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExistsExpr {
    pub subquery: Subquery,
}

impl ComparisonOp {
    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonOp::Eq => "=",
            ComparisonOp::Lt => "<",
            ComparisonOp::Gt => ">",
            ComparisonOp::Le => "<=",
            ComparisonOp::Ge => ">=",
            ComparisonOp::Ne => "!=",
            ComparisonOp::NullSafeEq => "<=>",
            ComparisonOp::In => "in",
            ComparisonOp::NotIn => "not in",
            ComparisonOp::Like => "like",
            ComparisonOp::NotLike => "not like",
        }
    }
}

impl RangeOp {
    pub fn as_str(self) -> &'static str {
        match self {
            RangeOp::Between => "between",
            RangeOp::NotBetween => "not between",
        }
    }
}

impl NullCheckOp {
    pub fn as_str(self) -> &'static str {
        match self {
            NullCheckOp::IsNull => "is null",
            NullCheckOp::IsNotNull => "is not null",
        }
    }
}

impl AndExpr {
    pub fn new(left: impl Into<BoolExpr>, right: impl Into<BoolExpr>) -> Self {
        Self {
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }
}

impl OrExpr {
    pub fn new(left: impl Into<BoolExpr>, right: impl Into<BoolExpr>) -> Self {
        Self {
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }
}

impl NotExpr {
    pub fn new(expr: impl Into<BoolExpr>) -> Self {
        Self {
            expr: Box::new(expr.into()),
        }
    }
}

impl ParenBoolExpr {
    pub fn new(expr: impl Into<BoolExpr>) -> Self {
        Self {
            expr: Box::new(expr.into()),
        }
    }
}

impl ComparisonExpr {
    pub fn new(left: impl Into<ValExpr>, op: ComparisonOp, right: impl Into<ValExpr>) -> Self {
        Self {
            op,
            left: left.into(),
            right: right.into(),
        }
    }
}

impl RangeCond {
    pub fn new(
        left: impl Into<ValExpr>,
        op: RangeOp,
        from: impl Into<ValExpr>,
        to: impl Into<ValExpr>,
    ) -> Self {
        Self {
            op,
            left: left.into(),
            from: from.into(),
            to: to.into(),
        }
    }
}

impl NullCheck {
    pub fn new(expr: impl Into<ValExpr>, op: NullCheckOp) -> Self {
        Self {
            op,
            expr: expr.into(),
        }
    }
}

impl SqlNode for BoolExpr {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        match self {
            BoolExpr::And(e) => e.format(buf),
            BoolExpr::Or(e) => e.format(buf),
            BoolExpr::Not(e) => e.format(buf),
            BoolExpr::Paren(e) => e.format(buf),
            BoolExpr::Comparison(e) => e.format(buf),
            BoolExpr::Range(e) => e.format(buf),
            BoolExpr::NullCheck(e) => e.format(buf),
            BoolExpr::Exists(e) => e.format(buf),
        }
    }
}

impl SqlNode for AndExpr {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        self.left.format(buf);
        buf.push_str(" and ");
        self.right.format(buf);
    }
}

impl SqlNode for OrExpr {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        self.left.format(buf);
        buf.push_str(" or ");
        self.right.format(buf);
    }
}

impl SqlNode for NotExpr {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.push_str("not ");
        self.expr.format(buf);
    }
}

impl SqlNode for ParenBoolExpr {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.push_char('(');
        self.expr.format(buf);
        buf.push_char(')');
    }
}

impl SqlNode for ComparisonExpr {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        self.left.format(buf);
        buf.push_char(' ');
        buf.push_str(self.op.as_str());
        buf.push_char(' ');
        self.right.format(buf);
    }
}

impl SqlNode for RangeCond {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        self.left.format(buf);
        buf.push_char(' ');
        buf.push_str(self.op.as_str());
        buf.push_char(' ');
        self.from.format(buf);
        buf.push_str(" and ");
        self.to.format(buf);
    }
}

impl SqlNode for NullCheck {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        self.expr.format(buf);
        buf.push_char(' ');
        buf.push_str(self.op.as_str());
    }
}

impl SqlNode for ExistsExpr {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.push_str("exists ");
        self.subquery.format(buf);
    }
}

macro_rules! into_bool_expr {
    ($($variant:ident <- $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for BoolExpr {
                fn from(node: $ty) -> Self {
                    BoolExpr::$variant(node)
                }
            }

            impl From<$ty> for crate::expr::Expr {
                fn from(node: $ty) -> Self {
                    crate::expr::Expr::Bool(BoolExpr::$variant(node))
                }
            }
        )*
    };
}

into_bool_expr!(
    And <- AndExpr,
    Or <- OrExpr,
    Not <- NotExpr,
    Paren <- ParenBoolExpr,
    Comparison <- ComparisonExpr,
    Range <- RangeCond,
    NullCheck <- NullCheck,
    Exists <- ExistsExpr,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{ColName, NumVal, StrVal, ValTuple};
    use crate::format::to_sql;

    fn col(name: &str) -> ColName {
        ColName::new(name)
    }

    #[test]
    fn test_comparison_operators() {
        let cases = [
            (ComparisonOp::Eq, "a = 1"),
            (ComparisonOp::Ne, "a != 1"),
            (ComparisonOp::NullSafeEq, "a <=> 1"),
            (ComparisonOp::Le, "a <= 1"),
            (ComparisonOp::Like, "a like 1"),
            (ComparisonOp::NotLike, "a not like 1"),
        ];
        for (op, expected) in cases {
            let cmp = ComparisonExpr::new(col("a"), op, NumVal::new("1"));
            assert_eq!(to_sql(&cmp), expected);
        }
    }

    #[test]
    fn test_in_tuple() {
        let cmp = ComparisonExpr::new(
            col("id"),
            ComparisonOp::NotIn,
            ValTuple::new([NumVal::new("1").into(), NumVal::new("2").into()]),
        );
        assert_eq!(to_sql(&cmp), "id not in (1, 2)");
    }

    #[test]
    fn test_and_or_render_flat() {
        let a = ComparisonExpr::new(col("a"), ComparisonOp::Eq, NumVal::new("1"));
        let b = ComparisonExpr::new(col("b"), ComparisonOp::Gt, NumVal::new("2"));
        let c = NullCheck::new(col("c"), NullCheckOp::IsNull);

        let expr = OrExpr::new(AndExpr::new(a.clone(), b.clone()), c.clone());
        assert_eq!(to_sql(&expr), "a = 1 and b > 2 or c is null");

        let grouped = AndExpr::new(a, ParenBoolExpr::new(OrExpr::new(b, c)));
        assert_eq!(to_sql(&grouped), "a = 1 and (b > 2 or c is null)");
    }

    #[test]
    fn test_not_and_range() {
        let range = RangeCond::new(col("age"), RangeOp::NotBetween, NumVal::new("18"), NumVal::new("65"));
        assert_eq!(to_sql(&range), "age not between 18 and 65");

        let not = NotExpr::new(NullCheck::new(col("name"), NullCheckOp::IsNotNull));
        assert_eq!(to_sql(&not), "not name is not null");
    }

    #[test]
    fn test_string_operand_encoded() {
        let cmp = ComparisonExpr::new(col("name"), ComparisonOp::Eq, StrVal::new("O'Brien"));
        assert_eq!(to_sql(&cmp), "name = 'O\\'Brien'");
    }
}
