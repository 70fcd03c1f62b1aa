// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Query Representation
//!
//! SELECT statements, set operations and the clauses they are built from.
//!
//! ## SELECT
//!
//! ```text
//! select {comments}{distinct }{select_exprs}[ from {tables}]{where}{group by}{having}{order by}{limit}{lock}
//! ```
//!
//! Every optional clause renders nothing when absent and carries its own
//! leading space when present, so no stray separators appear.
//!
//! ## FROM
//!
//! [`TableExpr`] is an aliased table or subquery, a parenthesized table
//! expression, or a join. Joins nest to the left the way the producer built
//! them:
//!
//! ```sql
//! t1 left join t2 on t1.id = t2.id join t3 on t2.k = t3.k
//! ```
//!
//! ## WHERE / HAVING
//!
//! [`Where::new`] is the only way to build a clause and returns `None` when
//! there is no condition, so "no clause" is always the absence of the node.

use serde::{Deserialize, Serialize};

use crate::condition::BoolExpr;
use crate::error::{BuildError, BuildResult};
use crate::expr::{Expr, Subquery, ValExpr};
use crate::format::{SqlNode, TrackedBuffer};

/// A SELECT or a set operation over SELECTs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectStatement {
    Select(Box<Select>),
    Union(Box<Union>),
}

/// SELECT statement
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Select {
    pub comments: Comments,
    pub distinct: bool,
    pub select_exprs: SelectExprs,
    pub from: TableExprs,
    pub where_clause: Option<Where>,
    pub group_by: GroupBy,
    pub having: Option<Where>,
    pub order_by: OrderBy,
    pub limit: Option<Limit>,
    pub lock: Option<LockMode>,
}

/// Set operation between two SELECTs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Union {
    pub kind: UnionKind,
    pub left: SelectStatement,
    pub right: SelectStatement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnionKind {
    Union,
    UnionAll,
    Minus,
    Except,
    Intersect,
}

/// Row locking suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LockMode {
    ForUpdate,
    ShareMode,
}

/// Leading comments, e.g. routing hints (`/* shard:1 */`)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Comments(pub Vec<String>);

/// SELECT list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectExprs(pub Vec<SelectExpr>);

/// One item in a SELECT list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectExpr {
    Star(StarExpr),
    NonStar(NonStarExpr),
}

/// `*` or `table.*`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StarExpr {
    pub table_name: Option<String>,
}

/// An expression with an optional alias
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NonStarExpr {
    pub expr: Expr,
    pub alias: Option<String>,
}

/// Parenthesized INSERT column list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Columns(pub SelectExprs);

/// FROM list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableExprs(pub Vec<TableExpr>);

/// One item in a FROM clause
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableExpr {
    Aliased(AliasedTableExpr),
    Paren(ParenTableExpr),
    Join(JoinTableExpr),
}

/// A table or subquery with an optional alias and index hint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasedTableExpr {
    pub expr: SimpleTableExpr,
    pub alias: Option<String>,
    pub hints: Option<IndexHints>,
}

/// The table-like operand of an alias
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimpleTableExpr {
    Table(TableName),
    Subquery(Subquery),
}

/// Table name with optional database qualifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableName {
    pub name: String,
    pub qualifier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParenTableExpr {
    pub expr: Box<TableExpr>,
}

/// `left {join} right[ on cond]`
///
/// `on` is expected to be `None` only for cross and natural joins; the
/// producer is responsible for that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinTableExpr {
    pub left: Box<TableExpr>,
    pub join: JoinKind,
    pub right: Box<TableExpr>,
    pub on: Option<BoolExpr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JoinKind {
    Inner,
    Straight,
    Left,
    Right,
    Cross,
    Natural,
}

/// ` use index (a, b)` and friends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexHints {
    pub kind: IndexHintKind,
    pub indexes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexHintKind {
    Use,
    Ignore,
    Force,
}

/// WHERE or HAVING clause
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Where {
    pub kind: WhereKind,
    pub expr: BoolExpr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WhereKind {
    Where,
    Having,
}

/// GROUP BY list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupBy(pub Vec<ValExpr>);

/// ORDER BY list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderBy(pub Vec<Order>);

/// ORDER BY item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub expr: ValExpr,
    pub direction: SortDirection,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// LIMIT clause (`limit [offset, ]rowcount`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Limit {
    pub offset: Option<ValExpr>,
    pub rowcount: ValExpr,
}

impl UnionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            UnionKind::Union => "union",
            UnionKind::UnionAll => "union all",
            UnionKind::Minus => "minus",
            UnionKind::Except => "except",
            UnionKind::Intersect => "intersect",
        }
    }
}

impl LockMode {
    pub fn as_str(self) -> &'static str {
        match self {
            LockMode::ForUpdate => " for update",
            LockMode::ShareMode => " lock in share mode",
        }
    }
}

impl JoinKind {
    pub fn as_str(self) -> &'static str {
        match self {
            JoinKind::Inner => "join",
            JoinKind::Straight => "straight_join",
            JoinKind::Left => "left join",
            JoinKind::Right => "right join",
            JoinKind::Cross => "cross join",
            JoinKind::Natural => "natural join",
        }
    }
}

impl IndexHintKind {
    pub fn as_str(self) -> &'static str {
        match self {
            IndexHintKind::Use => "use",
            IndexHintKind::Ignore => "ignore",
            IndexHintKind::Force => "force",
        }
    }
}

impl WhereKind {
    pub fn as_str(self) -> &'static str {
        match self {
            WhereKind::Where => "where",
            WhereKind::Having => "having",
        }
    }
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl Select {
    pub fn new(select_exprs: impl IntoIterator<Item = SelectExpr>) -> Self {
        Self {
            select_exprs: SelectExprs(select_exprs.into_iter().collect()),
            ..Default::default()
        }
    }

    pub fn with_from(mut self, from: impl IntoIterator<Item = TableExpr>) -> Self {
        self.from = TableExprs(from.into_iter().collect());
        self
    }

    pub fn with_where(mut self, expr: Option<BoolExpr>) -> Self {
        self.where_clause = Where::new(WhereKind::Where, expr);
        self
    }

    pub fn with_group_by(mut self, group_by: impl IntoIterator<Item = ValExpr>) -> Self {
        self.group_by = GroupBy(group_by.into_iter().collect());
        self
    }

    pub fn with_having(mut self, expr: Option<BoolExpr>) -> Self {
        self.having = Where::new(WhereKind::Having, expr);
        self
    }

    pub fn with_order_by(mut self, order_by: impl IntoIterator<Item = Order>) -> Self {
        self.order_by = OrderBy(order_by.into_iter().collect());
        self
    }

    pub fn with_limit(mut self, limit: Limit) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl Union {
    pub fn new(
        left: impl Into<SelectStatement>,
        kind: UnionKind,
        right: impl Into<SelectStatement>,
    ) -> Self {
        Self {
            kind,
            left: left.into(),
            right: right.into(),
        }
    }
}

impl StarExpr {
    pub fn qualified(table_name: impl Into<String>) -> Self {
        Self {
            table_name: Some(table_name.into()),
        }
    }
}

impl NonStarExpr {
    pub fn new(expr: impl Into<Expr>) -> Self {
        Self {
            expr: expr.into(),
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

impl TableName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qualifier: None,
        }
    }

    /// Like [`TableName::new`], rejecting an empty name
    pub fn try_new(name: impl Into<String>) -> BuildResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(BuildError::EmptyIdentifier);
        }
        Ok(Self::new(name))
    }

    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }
}

impl AliasedTableExpr {
    pub fn new(expr: impl Into<SimpleTableExpr>) -> Self {
        Self {
            expr: expr.into(),
            alias: None,
            hints: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_hints(mut self, hints: IndexHints) -> Self {
        self.hints = Some(hints);
        self
    }
}

impl ParenTableExpr {
    pub fn new(expr: impl Into<TableExpr>) -> Self {
        Self {
            expr: Box::new(expr.into()),
        }
    }
}

impl JoinTableExpr {
    pub fn new(
        left: impl Into<TableExpr>,
        join: JoinKind,
        right: impl Into<TableExpr>,
        on: Option<BoolExpr>,
    ) -> Self {
        Self {
            left: Box::new(left.into()),
            join,
            right: Box::new(right.into()),
            on,
        }
    }
}

impl IndexHints {
    pub fn new<I, S>(kind: IndexHintKind, indexes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            indexes: indexes.into_iter().map(Into::into).collect(),
        }
    }
}

impl Where {
    /// Build a WHERE or HAVING clause; no expression means no clause
    pub fn new(kind: WhereKind, expr: Option<BoolExpr>) -> Option<Where> {
        expr.map(|expr| Where { kind, expr })
    }
}

impl Order {
    pub fn new(expr: impl Into<ValExpr>, direction: SortDirection) -> Self {
        Self {
            expr: expr.into(),
            direction,
        }
    }
}

impl Limit {
    pub fn new(offset: Option<ValExpr>, rowcount: impl Into<ValExpr>) -> Self {
        Self {
            offset,
            rowcount: rowcount.into(),
        }
    }
}

impl SqlNode for SelectStatement {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        match self {
            SelectStatement::Select(s) => s.format(buf),
            SelectStatement::Union(u) => u.format(buf),
        }
    }
}

impl SqlNode for Select {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.push_str("select ");
        self.comments.format(buf);
        if self.distinct {
            buf.push_str("distinct ");
        }
        self.select_exprs.format(buf);
        if !self.from.0.is_empty() {
            buf.push_str(" from ");
            self.from.format(buf);
        }
        if let Some(w) = &self.where_clause {
            w.format(buf);
        }
        self.group_by.format(buf);
        if let Some(h) = &self.having {
            h.format(buf);
        }
        self.order_by.format(buf);
        if let Some(limit) = &self.limit {
            limit.format(buf);
        }
        if let Some(lock) = self.lock {
            buf.push_str(lock.as_str());
        }
    }
}

impl SqlNode for Union {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        self.left.format(buf);
        buf.push_char(' ');
        buf.push_str(self.kind.as_str());
        buf.push_char(' ');
        self.right.format(buf);
    }
}

impl SqlNode for Comments {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        for comment in &self.0 {
            buf.push_str(comment);
            buf.push_char(' ');
        }
    }
}

impl SqlNode for SelectExprs {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.write_list(&self.0, ", ");
    }
}

impl SqlNode for SelectExpr {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        match self {
            SelectExpr::Star(s) => s.format(buf),
            SelectExpr::NonStar(e) => e.format(buf),
        }
    }
}

impl SqlNode for StarExpr {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        if let Some(table) = &self.table_name {
            buf.write_ident(table);
            buf.push_char('.');
        }
        buf.push_char('*');
    }
}

impl SqlNode for NonStarExpr {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        self.expr.format(buf);
        if let Some(alias) = &self.alias {
            buf.push_str(" as ");
            buf.write_ident(alias);
        }
    }
}

impl SqlNode for Columns {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.push_char('(');
        self.0.format(buf);
        buf.push_char(')');
    }
}

impl SqlNode for TableExprs {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.write_list(&self.0, ", ");
    }
}

impl SqlNode for TableExpr {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        match self {
            TableExpr::Aliased(t) => t.format(buf),
            TableExpr::Paren(t) => t.format(buf),
            TableExpr::Join(t) => t.format(buf),
        }
    }
}

impl SqlNode for AliasedTableExpr {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        self.expr.format(buf);
        if let Some(alias) = &self.alias {
            buf.push_str(" as ");
            buf.write_ident(alias);
        }
        if let Some(hints) = &self.hints {
            hints.format(buf);
        }
    }
}

impl SqlNode for SimpleTableExpr {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        match self {
            SimpleTableExpr::Table(t) => t.format(buf),
            SimpleTableExpr::Subquery(s) => s.format(buf),
        }
    }
}

impl SqlNode for TableName {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        if let Some(qualifier) = &self.qualifier {
            buf.write_ident(qualifier);
            buf.push_char('.');
        }
        buf.write_ident(&self.name);
    }
}

impl SqlNode for ParenTableExpr {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.push_char('(');
        self.expr.format(buf);
        buf.push_char(')');
    }
}

impl SqlNode for JoinTableExpr {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        self.left.format(buf);
        buf.push_char(' ');
        buf.push_str(self.join.as_str());
        buf.push_char(' ');
        self.right.format(buf);
        if let Some(on) = &self.on {
            buf.push_str(" on ");
            on.format(buf);
        }
    }
}

impl SqlNode for IndexHints {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.push_char(' ');
        buf.push_str(self.kind.as_str());
        buf.push_str(" index (");
        for (i, index) in self.indexes.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            buf.write_ident(index);
        }
        buf.push_char(')');
    }
}

impl SqlNode for Where {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.push_char(' ');
        buf.push_str(self.kind.as_str());
        buf.push_char(' ');
        self.expr.format(buf);
    }
}

impl SqlNode for GroupBy {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.write_prefixed_list(" group by ", &self.0);
    }
}

impl SqlNode for OrderBy {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.write_prefixed_list(" order by ", &self.0);
    }
}

impl SqlNode for Order {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        self.expr.format(buf);
        buf.push_char(' ');
        buf.push_str(self.direction.as_str());
    }
}

impl SqlNode for Limit {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.push_str(" limit ");
        if let Some(offset) = &self.offset {
            offset.format(buf);
            buf.push_str(", ");
        }
        self.rowcount.format(buf);
    }
}

impl From<Select> for SelectStatement {
    fn from(select: Select) -> Self {
        SelectStatement::Select(Box::new(select))
    }
}

impl From<Union> for SelectStatement {
    fn from(union: Union) -> Self {
        SelectStatement::Union(Box::new(union))
    }
}

impl From<StarExpr> for SelectExpr {
    fn from(star: StarExpr) -> Self {
        SelectExpr::Star(star)
    }
}

impl From<NonStarExpr> for SelectExpr {
    fn from(expr: NonStarExpr) -> Self {
        SelectExpr::NonStar(expr)
    }
}

impl From<TableName> for SimpleTableExpr {
    fn from(table: TableName) -> Self {
        SimpleTableExpr::Table(table)
    }
}

impl From<Subquery> for SimpleTableExpr {
    fn from(subquery: Subquery) -> Self {
        SimpleTableExpr::Subquery(subquery)
    }
}

impl From<AliasedTableExpr> for TableExpr {
    fn from(table: AliasedTableExpr) -> Self {
        TableExpr::Aliased(table)
    }
}

impl From<ParenTableExpr> for TableExpr {
    fn from(table: ParenTableExpr) -> Self {
        TableExpr::Paren(table)
    }
}

impl From<JoinTableExpr> for TableExpr {
    fn from(join: JoinTableExpr) -> Self {
        TableExpr::Join(join)
    }
}

impl From<TableName> for TableExpr {
    fn from(table: TableName) -> Self {
        TableExpr::Aliased(AliasedTableExpr::new(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{ComparisonExpr, ComparisonOp};
    use crate::expr::{ColName, NumVal};
    use crate::format::to_sql;

    fn eq(left: &str, right: &str) -> BoolExpr {
        ComparisonExpr::new(ColName::new(left), ComparisonOp::Eq, ColName::new(right)).into()
    }

    fn column(name: &str) -> SelectExpr {
        NonStarExpr::new(ColName::new(name)).into()
    }

    #[test]
    fn test_where_factory() {
        assert!(Where::new(WhereKind::Where, None).is_none());

        let w = Where::new(WhereKind::Having, Some(eq("a", "b"))).unwrap();
        assert_eq!(w.kind, WhereKind::Having);
        assert_eq!(to_sql(&w), " having a = b");
    }

    #[test]
    fn test_select_list_separators() {
        let select = Select::new([column("a"), column("b"), column("c")]);
        assert_eq!(to_sql(&select.select_exprs), "a, b, c");
    }

    #[test]
    fn test_select_without_from() {
        let select = Select::new([NonStarExpr::new(NumVal::new("1")).into()]);
        assert_eq!(to_sql(&select), "select 1");
    }

    #[test]
    fn test_absent_where_omitted() {
        let select = Select::new([StarExpr::default().into()])
            .with_from([TableName::new("t").into()])
            .with_where(None);

        let sql = to_sql(&select);
        assert_eq!(sql, "select * from t");
        assert!(!sql.contains(" where "));
    }

    #[test]
    fn test_join_with_and_without_on() {
        let join = JoinTableExpr::new(
            TableName::new("t1"),
            JoinKind::Left,
            TableName::new("t2"),
            Some(eq("a", "b")),
        );
        assert_eq!(to_sql(&join), "t1 left join t2 on a = b");

        let join = JoinTableExpr::new(TableName::new("t1"), JoinKind::Left, TableName::new("t2"), None);
        assert_eq!(to_sql(&join), "t1 left join t2");
    }

    #[test]
    fn test_join_kinds() {
        let kinds = [
            (JoinKind::Inner, "a join b"),
            (JoinKind::Straight, "a straight_join b"),
            (JoinKind::Right, "a right join b"),
            (JoinKind::Cross, "a cross join b"),
            (JoinKind::Natural, "a natural join b"),
        ];
        for (kind, expected) in kinds {
            let join = JoinTableExpr::new(TableName::new("a"), kind, TableName::new("b"), None);
            assert_eq!(to_sql(&join), expected);
        }
    }

    #[test]
    fn test_aliased_table_with_hints() {
        let table = AliasedTableExpr::new(TableName::new("users").with_qualifier("db1"))
            .with_alias("u")
            .with_hints(IndexHints::new(IndexHintKind::Force, ["idx_a", "primary"]));
        assert_eq!(to_sql(&table), "db1.users as u force index (idx_a, `primary`)");
    }

    #[test]
    fn test_star_expr() {
        assert_eq!(to_sql(&StarExpr::default()), "*");
        assert_eq!(to_sql(&StarExpr::qualified("t")), "t.*");
    }

    #[test]
    fn test_table_name_try_new() {
        assert_eq!(TableName::try_new(""), Err(BuildError::EmptyIdentifier));
        assert_eq!(TableName::try_new("t").unwrap().name, "t");
    }

    #[test]
    fn test_limit_render() {
        let limit = Limit::new(None, NumVal::new("5"));
        assert_eq!(to_sql(&limit), " limit 5");

        let limit = Limit::new(Some(NumVal::new("10").into()), NumVal::new("20"));
        assert_eq!(to_sql(&limit), " limit 10, 20");
    }

    #[test]
    fn test_union() {
        let left = Select::new([column("id")]).with_from([TableName::new("a").into()]);
        let right = Select::new([column("id")]).with_from([TableName::new("b").into()]);
        let union = Union::new(left, UnionKind::UnionAll, right);
        assert_eq!(to_sql(&union), "select id from a union all select id from b");
    }

    #[test]
    fn test_order_and_group() {
        let select = Select::new([column("dept")])
            .with_from([TableName::new("emp").into()])
            .with_group_by([ColName::new("dept").into()])
            .with_order_by([
                Order::new(ColName::new("dept"), SortDirection::Desc),
                Order::new(ColName::new("id"), SortDirection::default()),
            ]);
        assert_eq!(
            to_sql(&select),
            "select dept from emp group by dept order by dept desc, id asc"
        );
    }
}
