// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Statements
//!
//! The root nodes the grammar produces. Besides queries the router needs to
//! see writes (to pick a shard), session statements (`set`, `use`) and the
//! handful of `show` forms it answers itself.
//!
//! ```text
//! insert {comments}[ignore ]into {table}{columns} {rows}{on_dup}
//! replace {comments}into {table}{columns} {rows}
//! update {comments}{table} set {update_exprs}{where}{order by}{limit}
//! delete {comments}from {table}{where}{order by}{limit}
//! set {comments}{update_exprs}
//! set {comments}{space_split_exprs}
//! show [{modifier} ]{section}[ from {db}]{filter}
//! ```

use serde::{Deserialize, Serialize};

use crate::expr::{ColName, LikeExpr, Tuple, ValExpr, WhereExpr};
use crate::format::{SqlNode, TrackedBuffer};
use crate::query::{
    Columns, Comments, Limit, OrderBy, Select, SelectStatement, TableName, Union, Where,
};

/// A complete SQL command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Select(Box<Select>),
    Union(Box<Union>),
    Insert(Box<Insert>),
    Replace(Box<Replace>),
    Update(Box<Update>),
    Delete(Box<Delete>),
    Set(Set),
    SetNames(SetNames),
    Show(Show),
    Use(Use),
    Begin,
    Commit,
    Rollback,
}

/// INSERT statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insert {
    pub comments: Comments,
    pub ignore: bool,
    pub table: TableName,
    pub columns: Option<Columns>,
    pub rows: InsertRows,
    pub on_dup: Option<OnDup>,
}

/// REPLACE statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Replace {
    pub comments: Comments,
    pub table: TableName,
    pub columns: Option<Columns>,
    pub rows: InsertRows,
}

/// UPDATE statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub comments: Comments,
    pub table: TableName,
    pub exprs: UpdateExprs,
    pub where_clause: Option<Where>,
    pub order_by: OrderBy,
    pub limit: Option<Limit>,
}

/// DELETE statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delete {
    pub comments: Comments,
    pub table: TableName,
    pub where_clause: Option<Where>,
    pub order_by: OrderBy,
    pub limit: Option<Limit>,
}

/// `set a = 1, b = 2`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Set {
    pub comments: Comments,
    pub exprs: UpdateExprs,
}

/// `set names utf8 collate utf8_bin`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetNames {
    pub comments: Comments,
    pub exprs: SpaceSplitExprs,
}

/// `show ...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub modifier: Option<ShowModifier>,
    pub section: ShowSection,
    pub from: Option<String>,
    pub filter: Option<ShowFilter>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShowModifier {
    Full,
    Global,
    Session,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShowSection {
    Databases,
    Tables,
    Variables,
    Status,
    Processlist,
}

/// Trailing ` like ...` or ` where ...` of a SHOW
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShowFilter {
    Like(LikeExpr),
    Where(WhereExpr),
}

/// `use db`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Use {
    pub db: String,
}

/// Row source of an INSERT or REPLACE
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InsertRows {
    Values(Values),
}

/// `values (..), (..)`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Values(pub Vec<Tuple>);

/// Comma-separated assignments
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateExprs(pub Vec<UpdateExpr>);

/// `col = expr`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateExpr {
    pub name: ColName,
    pub expr: ValExpr,
}

/// ON DUPLICATE KEY UPDATE assignments
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OnDup(pub UpdateExprs);

/// Space-separated `name expr` pairs
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpaceSplitExprs(pub Vec<SpaceSplitExpr>);

/// `name expr`, both emitted verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceSplitExpr {
    pub name: String,
    pub expr: String,
}

impl Statement {
    /// Whether this statement only reads
    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            Statement::Select(_) | Statement::Union(_) | Statement::Show(_)
        )
    }
}

impl Insert {
    pub fn new(table: TableName, rows: impl Into<InsertRows>) -> Self {
        Self {
            comments: Comments::default(),
            ignore: false,
            table,
            columns: None,
            rows: rows.into(),
            on_dup: None,
        }
    }

    pub fn with_columns(mut self, columns: Columns) -> Self {
        self.columns = Some(columns);
        self
    }

    pub fn with_on_dup(mut self, on_dup: OnDup) -> Self {
        self.on_dup = Some(on_dup);
        self
    }
}

impl Update {
    pub fn new(table: TableName, exprs: UpdateExprs) -> Self {
        Self {
            comments: Comments::default(),
            table,
            exprs,
            where_clause: None,
            order_by: OrderBy::default(),
            limit: None,
        }
    }
}

impl Delete {
    pub fn new(table: TableName) -> Self {
        Self {
            comments: Comments::default(),
            table,
            where_clause: None,
            order_by: OrderBy::default(),
            limit: None,
        }
    }
}

impl Show {
    pub fn new(section: ShowSection) -> Self {
        Self {
            modifier: None,
            section,
            from: None,
            filter: None,
        }
    }
}

impl ShowModifier {
    pub fn as_str(self) -> &'static str {
        match self {
            ShowModifier::Full => "full",
            ShowModifier::Global => "global",
            ShowModifier::Session => "session",
        }
    }
}

impl ShowSection {
    pub fn as_str(self) -> &'static str {
        match self {
            ShowSection::Databases => "databases",
            ShowSection::Tables => "tables",
            ShowSection::Variables => "variables",
            ShowSection::Status => "status",
            ShowSection::Processlist => "processlist",
        }
    }
}

impl Values {
    pub fn new(rows: impl IntoIterator<Item = Tuple>) -> Self {
        Self(rows.into_iter().collect())
    }
}

impl UpdateExpr {
    pub fn new(name: ColName, expr: impl Into<ValExpr>) -> Self {
        Self {
            name,
            expr: expr.into(),
        }
    }
}

impl SpaceSplitExpr {
    pub fn new(name: impl Into<String>, expr: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expr: expr.into(),
        }
    }
}

impl SqlNode for Statement {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        match self {
            Statement::Select(s) => s.format(buf),
            Statement::Union(s) => s.format(buf),
            Statement::Insert(s) => s.format(buf),
            Statement::Replace(s) => s.format(buf),
            Statement::Update(s) => s.format(buf),
            Statement::Delete(s) => s.format(buf),
            Statement::Set(s) => s.format(buf),
            Statement::SetNames(s) => s.format(buf),
            Statement::Show(s) => s.format(buf),
            Statement::Use(s) => s.format(buf),
            Statement::Begin => buf.push_str("begin"),
            Statement::Commit => buf.push_str("commit"),
            Statement::Rollback => buf.push_str("rollback"),
        }
    }
}

impl SqlNode for Insert {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.push_str("insert ");
        self.comments.format(buf);
        if self.ignore {
            buf.push_str("ignore ");
        }
        buf.push_str("into ");
        self.table.format(buf);
        if let Some(columns) = &self.columns {
            columns.format(buf);
        }
        buf.push_char(' ');
        self.rows.format(buf);
        if let Some(on_dup) = &self.on_dup {
            on_dup.format(buf);
        }
    }
}

impl SqlNode for Replace {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.push_str("replace ");
        self.comments.format(buf);
        buf.push_str("into ");
        self.table.format(buf);
        if let Some(columns) = &self.columns {
            columns.format(buf);
        }
        buf.push_char(' ');
        self.rows.format(buf);
    }
}

impl SqlNode for Update {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.push_str("update ");
        self.comments.format(buf);
        self.table.format(buf);
        buf.push_str(" set ");
        self.exprs.format(buf);
        if let Some(w) = &self.where_clause {
            w.format(buf);
        }
        self.order_by.format(buf);
        if let Some(limit) = &self.limit {
            limit.format(buf);
        }
    }
}

impl SqlNode for Delete {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.push_str("delete ");
        self.comments.format(buf);
        buf.push_str("from ");
        self.table.format(buf);
        if let Some(w) = &self.where_clause {
            w.format(buf);
        }
        self.order_by.format(buf);
        if let Some(limit) = &self.limit {
            limit.format(buf);
        }
    }
}

impl SqlNode for Set {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.push_str("set ");
        self.comments.format(buf);
        self.exprs.format(buf);
    }
}

impl SqlNode for SetNames {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.push_str("set ");
        self.comments.format(buf);
        self.exprs.format(buf);
    }
}

impl SqlNode for Show {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.push_str("show ");
        if let Some(modifier) = self.modifier {
            buf.push_str(modifier.as_str());
            buf.push_char(' ');
        }
        buf.push_str(self.section.as_str());
        if let Some(db) = &self.from {
            buf.push_str(" from ");
            buf.write_ident(db);
        }
        if let Some(filter) = &self.filter {
            filter.format(buf);
        }
    }
}

impl SqlNode for ShowFilter {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        match self {
            ShowFilter::Like(like) => like.format(buf),
            ShowFilter::Where(w) => w.format(buf),
        }
    }
}

impl SqlNode for Use {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.push_str("use ");
        buf.write_ident(&self.db);
    }
}

impl SqlNode for InsertRows {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        match self {
            InsertRows::Values(values) => values.format(buf),
        }
    }
}

impl SqlNode for Values {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.write_prefixed_list("values ", &self.0);
    }
}

impl SqlNode for UpdateExprs {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.write_list(&self.0, ", ");
    }
}

impl SqlNode for UpdateExpr {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        self.name.format(buf);
        buf.push_str(" = ");
        self.expr.format(buf);
    }
}

impl SqlNode for OnDup {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.push_str(" on duplicate key update ");
        self.0.format(buf);
    }
}

impl SqlNode for SpaceSplitExprs {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.write_list(&self.0, " ");
    }
}

impl SqlNode for SpaceSplitExpr {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        buf.push_str(&self.name);
        buf.push_char(' ');
        buf.push_str(&self.expr);
    }
}

impl From<Values> for InsertRows {
    fn from(values: Values) -> Self {
        InsertRows::Values(values)
    }
}

impl From<SelectStatement> for Statement {
    fn from(select: SelectStatement) -> Self {
        match select {
            SelectStatement::Select(s) => Statement::Select(s),
            SelectStatement::Union(u) => Statement::Union(u),
        }
    }
}

impl From<Select> for Statement {
    fn from(select: Select) -> Self {
        Statement::Select(Box::new(select))
    }
}

impl From<Insert> for Statement {
    fn from(insert: Insert) -> Self {
        Statement::Insert(Box::new(insert))
    }
}

impl From<Update> for Statement {
    fn from(update: Update) -> Self {
        Statement::Update(Box::new(update))
    }
}

impl From<Delete> for Statement {
    fn from(delete: Delete) -> Self {
        Statement::Delete(Box::new(delete))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{ComparisonExpr, ComparisonOp};
    use crate::expr::{NumVal, StrVal, ValArg, ValTuple};
    use crate::format::to_sql;
    use crate::query::{NonStarExpr, SelectExprs, WhereKind};

    fn row(values: &[&str]) -> Tuple {
        ValTuple::new(values.iter().map(|v| NumVal::new(*v).into())).into()
    }

    #[test]
    fn test_insert_with_on_dup() {
        let insert = Insert::new(TableName::new("t"), Values::new([row(&["1", "2"]), row(&["3", "4"])]))
            .with_columns(Columns(SelectExprs(vec![
                NonStarExpr::new(ColName::new("a")).into(),
                NonStarExpr::new(ColName::new("b")).into(),
            ])))
            .with_on_dup(OnDup(UpdateExprs(vec![UpdateExpr::new(
                ColName::new("b"),
                NumVal::new("0"),
            )])));

        assert_eq!(
            to_sql(&insert),
            "insert into t(a, b) values (1, 2), (3, 4) on duplicate key update b = 0"
        );
    }

    #[test]
    fn test_insert_ignore_without_columns() {
        let mut insert = Insert::new(TableName::new("t"), Values::new([row(&["1"])]));
        insert.ignore = true;
        insert.comments = Comments(vec!["/* shard:2 */".to_string()]);
        assert_eq!(to_sql(&insert), "insert /* shard:2 */ ignore into t values (1)");
    }

    #[test]
    fn test_replace() {
        let replace = Replace {
            comments: Comments::default(),
            table: TableName::new("t"),
            columns: None,
            rows: Values::new([row(&["1"])]).into(),
        };
        assert_eq!(to_sql(&replace), "replace into t values (1)");
    }

    #[test]
    fn test_update_and_delete() {
        let cond = ComparisonExpr::new(ColName::new("id"), ComparisonOp::Eq, ValArg::new("id"));

        let mut update = Update::new(
            TableName::new("users"),
            UpdateExprs(vec![UpdateExpr::new(ColName::new("name"), StrVal::new("x"))]),
        );
        update.where_clause = Where::new(WhereKind::Where, Some(cond.clone().into()));
        update.limit = Some(Limit::new(None, NumVal::new("1")));
        assert_eq!(
            to_sql(&update),
            "update users set name = 'x' where id = :id limit 1"
        );

        let mut delete = Delete::new(TableName::new("users"));
        delete.where_clause = Where::new(WhereKind::Where, Some(cond.into()));
        assert_eq!(to_sql(&delete), "delete from users where id = :id");
    }

    #[test]
    fn test_set_forms() {
        let set = Set {
            comments: Comments::default(),
            exprs: UpdateExprs(vec![UpdateExpr::new(ColName::new("autocommit"), NumVal::new("1"))]),
        };
        assert_eq!(to_sql(&set), "set autocommit = 1");

        let names = SetNames {
            comments: Comments::default(),
            exprs: SpaceSplitExprs(vec![
                SpaceSplitExpr::new("names", "utf8"),
                SpaceSplitExpr::new("collate", "utf8_bin"),
            ]),
        };
        assert_eq!(to_sql(&names), "set names utf8 collate utf8_bin");
    }

    #[test]
    fn test_show_forms() {
        let mut show = Show::new(ShowSection::Tables);
        show.modifier = Some(ShowModifier::Full);
        show.from = Some("shop".to_string());
        show.filter = Some(ShowFilter::Like(LikeExpr {
            expr: StrVal::new("order%").into(),
        }));
        assert_eq!(to_sql(&show), "show full tables from shop like 'order%'");

        let mut show = Show::new(ShowSection::Variables);
        show.filter = Some(ShowFilter::Where(WhereExpr {
            expr: ComparisonExpr::new(ColName::new("variable_name"), ComparisonOp::Eq, StrVal::new("x"))
                .into(),
        }));
        assert_eq!(to_sql(&show), "show variables where variable_name = 'x'");
    }

    #[test]
    fn test_session_statements() {
        assert_eq!(to_sql(&Statement::Begin), "begin");
        assert_eq!(to_sql(&Statement::Commit), "commit");
        assert_eq!(to_sql(&Statement::Rollback), "rollback");
        assert_eq!(
            to_sql(&Statement::Use(Use { db: "order".to_string() })),
            "use `order`"
        );
    }

    #[test]
    fn test_read_only() {
        assert!(Statement::Show(Show::new(ShowSection::Databases)).is_read_only());
        assert!(!Statement::Begin.is_read_only());
    }
}
