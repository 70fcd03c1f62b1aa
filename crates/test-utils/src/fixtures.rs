// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Sample statements paired with their canonical SQL

use shardsql_ast::{
    AliasedTableExpr, CaseExpr, Columns, ComparisonExpr, ComparisonOp, Delete, FuncExpr, Insert,
    JoinKind, JoinTableExpr, LikeExpr, Limit, LockMode, NonStarExpr, OnDup, Order, Select,
    SelectExprs, SetNames, Show, ShowFilter, ShowModifier, ShowSection, SortDirection,
    SpaceSplitExpr, SpaceSplitExprs, Statement, Subquery, TableName, Union, UnionKind, Update,
    UpdateExpr, UpdateExprs, Use, ValTuple, Values, When, Where, WhereKind,
};

use crate::builders::{arg, col, eq, num, select, star, string, table};

/// A statement tree and the text it renders to
#[derive(Debug, Clone)]
pub struct Fixture {
    pub name: &'static str,
    pub sql: &'static str,
    pub statement: Statement,
}

impl Fixture {
    fn new(name: &'static str, sql: &'static str, statement: impl Into<Statement>) -> Self {
        Self {
            name,
            sql,
            statement: statement.into(),
        }
    }
}

/// Sample statements for testing
pub struct SqlFixtures;

impl SqlFixtures {
    /// Every fixture below
    pub fn all() -> Vec<Fixture> {
        vec![
            Self::simple_select(),
            Self::select_with_where_and_limit(),
            Self::left_join(),
            Self::aggregate(),
            Self::union_all(),
            Self::subquery_for_update(),
            Self::searched_case(),
            Self::insert_on_dup(),
            Self::update_reserved_table(),
            Self::delete_with_function(),
            Self::set_names(),
            Self::show_tables(),
            Self::use_db(),
            Self::begin(),
        ]
    }

    // ===== SELECT =====

    pub fn simple_select() -> Fixture {
        Fixture::new(
            "simple_select",
            "select id, email, name from users",
            select(&["id", "email", "name"], "users"),
        )
    }

    pub fn select_with_where_and_limit() -> Fixture {
        let s = Select::new([star()])
            .with_from([table("users")])
            .with_where(Some(
                ComparisonExpr::new(col("email"), ComparisonOp::Like, string("%@example.com"))
                    .into(),
            ))
            .with_limit(Limit::new(Some(num("10").into()), num("20")));
        Fixture::new(
            "select_with_where_and_limit",
            "select * from users where email like '%@example.com' limit 10, 20",
            s,
        )
    }

    pub fn left_join() -> Fixture {
        let join = JoinTableExpr::new(
            AliasedTableExpr::new(TableName::new("users")).with_alias("u"),
            JoinKind::Left,
            AliasedTableExpr::new(TableName::new("orders")).with_alias("o"),
            Some(eq(
                col("id").with_qualifier("u"),
                col("user_id").with_qualifier("o"),
            )),
        );
        let s = Select::new([
            NonStarExpr::new(col("name").with_qualifier("u")).into(),
            NonStarExpr::new(col("total").with_qualifier("o")).into(),
        ])
        .with_from([join.into()]);
        Fixture::new(
            "left_join",
            "select u.name, o.total from users as u left join orders as o on u.id = o.user_id",
            s,
        )
    }

    pub fn aggregate() -> Fixture {
        let count = FuncExpr::new("count", [col("id").into()]).distinct();
        let s = Select::new([
            NonStarExpr::new(col("dept")).into(),
            NonStarExpr::new(count.clone()).with_alias("n").into(),
        ])
        .with_from([table("emp")])
        .with_group_by([col("dept").into()])
        .with_having(Some(
            ComparisonExpr::new(count, ComparisonOp::Gt, num("1")).into(),
        ))
        .with_order_by([Order::new(col("dept"), SortDirection::Desc)]);
        Fixture::new(
            "aggregate",
            "select dept, count(distinct id) as n from emp group by dept having count(distinct id) > 1 order by dept desc",
            s,
        )
    }

    pub fn union_all() -> Fixture {
        Fixture::new(
            "union_all",
            "select id from a union all select id from b",
            Statement::Union(Box::new(Union::new(
                select(&["id"], "a"),
                UnionKind::UnionAll,
                select(&["id"], "b"),
            ))),
        )
    }

    pub fn subquery_for_update() -> Fixture {
        let mut s = Select::new([star()])
            .with_from([table("t1")])
            .with_where(Some(
                ComparisonExpr::new(
                    col("id"),
                    ComparisonOp::In,
                    Subquery::new(select(&["id"], "t2")),
                )
                .into(),
            ));
        s.lock = Some(LockMode::ForUpdate);
        Fixture::new(
            "subquery_for_update",
            "select * from t1 where id in (select id from t2) for update",
            s,
        )
    }

    pub fn searched_case() -> Fixture {
        let whens = vec![
            When::new(eq(col("a"), num("1")), string("one")),
            When::new(eq(col("a"), num("2")), string("two")),
        ];
        let case = match CaseExpr::new(None, whens, Some(string("many").into())) {
            Ok(case) => case,
            Err(err) => panic!("fixture case expression: {err}"),
        };
        let s = Select::new([NonStarExpr::new(case).into()]).with_from([table("t")]);
        Fixture::new(
            "searched_case",
            "select case when a = 1 then 'one' when a = 2 then 'two' else 'many' end from t",
            s,
        )
    }

    // ===== Writes =====

    pub fn insert_on_dup() -> Fixture {
        let row = ValTuple::new([arg("id").into(), arg("name").into()]);
        let insert = Insert::new(TableName::new("users"), Values::new([row.into()]))
            .with_columns(Columns(SelectExprs(vec![
                NonStarExpr::new(col("id")).into(),
                NonStarExpr::new(col("name")).into(),
            ])))
            .with_on_dup(OnDup(UpdateExprs(vec![UpdateExpr::new(
                col("name"),
                arg("name"),
            )])));
        Fixture::new(
            "insert_on_dup",
            "insert into users(id, name) values (:id, :name) on duplicate key update name = :name",
            insert,
        )
    }

    pub fn update_reserved_table() -> Fixture {
        let mut update = Update::new(
            TableName::new("order"),
            UpdateExprs(vec![UpdateExpr::new(col("state"), string("paid"))]),
        );
        update.where_clause = Where::new(WhereKind::Where, Some(eq(col("id"), num("7"))));
        update.limit = Some(Limit::new(None, num("1")));
        Fixture::new(
            "update_reserved_table",
            "update `order` set state = 'paid' where id = 7 limit 1",
            update,
        )
    }

    pub fn delete_with_function() -> Fixture {
        let mut delete = Delete::new(TableName::new("sessions"));
        delete.where_clause = Where::new(
            WhereKind::Where,
            Some(
                ComparisonExpr::new(col("expires"), ComparisonOp::Lt, FuncExpr::new("now", Vec::new()))
                    .into(),
            ),
        );
        Fixture::new(
            "delete_with_function",
            "delete from sessions where expires < now()",
            delete,
        )
    }

    // ===== Session =====

    pub fn set_names() -> Fixture {
        Fixture::new(
            "set_names",
            "set names utf8mb4",
            Statement::SetNames(SetNames {
                exprs: SpaceSplitExprs(vec![SpaceSplitExpr::new("names", "utf8mb4")]),
                ..Default::default()
            }),
        )
    }

    pub fn show_tables() -> Fixture {
        let mut show = Show::new(ShowSection::Tables);
        show.modifier = Some(ShowModifier::Full);
        show.from = Some("shop".to_string());
        show.filter = Some(ShowFilter::Like(LikeExpr {
            expr: string("o%").into(),
        }));
        Fixture::new(
            "show_tables",
            "show full tables from shop like 'o%'",
            Statement::Show(show),
        )
    }

    pub fn use_db() -> Fixture {
        Fixture::new(
            "use_db",
            "use shop",
            Statement::Use(Use {
                db: "shop".to_string(),
            }),
        )
    }

    pub fn begin() -> Fixture {
        Fixture::new("begin", "begin", Statement::Begin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixture_names_unique() {
        let all = SqlFixtures::all();
        let names: HashSet<_> = all.iter().map(|f| f.name).collect();
        assert_eq!(names.len(), all.len());
    }
}
