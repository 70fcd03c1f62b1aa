// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Integration tests for canonical rendering

use shardsql_ast::{
    CaseExpr, ColName, ComparisonOp, Dialect, IndexHintKind, JoinKind, JoinTableExpr, KeywordSet,
    LockMode, MySqlEncoder, NonStarExpr, NullCheckOp, RangeOp, Select, SelectExprs, Serializer,
    SerializerConfig, ShowModifier, ShowSection, SortDirection, StarExpr, Statement, TableName,
    UnionKind, When, WhereKind, to_sql,
};
use shardsql_test_utils::builders::{col, eq, num, select, string, table};
use shardsql_test_utils::{RenderCase, SqlFixtures, assert_renders, parse_case_file};

#[test]
fn test_identifier_quoting() {
    assert_renders(&col("order"), "`order`");
    assert_renders(&col("SELECT"), "`SELECT`");
    assert_renders(&col("my-col"), "`my-col`");
    assert_renders(&col("plain_col1"), "plain_col1");
}

#[test]
fn test_qualified_names_quote_each_part() {
    assert_renders(&ColName::new("key").with_qualifier("t"), "t.`key`");
    assert_renders(
        &TableName::new("user-data").with_qualifier("group"),
        "`group`.`user-data`",
    );
}

#[test]
fn test_select_list_has_no_stray_separators() {
    let exprs = SelectExprs(vec![
        NonStarExpr::new(col("a")).into(),
        NonStarExpr::new(col("b")).into(),
        NonStarExpr::new(col("c")).into(),
    ]);
    assert_renders(&exprs, "a, b, c");
}

#[test]
fn test_absent_where_renders_nothing() {
    let s = select(&["id"], "users").with_where(None);
    let sql = to_sql(&s);
    assert_eq!(sql, "select id from users");
    assert!(!sql.contains(" where "));
}

#[test]
fn test_join_on_is_optional() {
    let on = JoinTableExpr::new(
        TableName::new("t1"),
        JoinKind::Left,
        TableName::new("t2"),
        Some(eq(col("x"), col("y"))),
    );
    assert_renders(&on, "t1 left join t2 on x = y");

    let bare = JoinTableExpr::new(TableName::new("t1"), JoinKind::Left, TableName::new("t2"), None);
    assert_renders(&bare, "t1 left join t2");
}

#[test]
fn test_case_branch_order_preserved() {
    let whens = vec![
        When::new(eq(col("x"), num("3")), string("c")),
        When::new(eq(col("x"), num("1")), string("a")),
        When::new(eq(col("x"), num("2")), string("b")),
    ];
    let case = CaseExpr::new(None, whens, None).unwrap();
    let expected = "case when x = 3 then 'c' when x = 1 then 'a' when x = 2 then 'b' end";

    assert_renders(&case, expected);
    assert_renders(&case.clone(), expected);
}

#[test]
fn test_fixtures_render_canonically() {
    for fixture in SqlFixtures::all() {
        assert_eq!(to_sql(&fixture.statement), fixture.sql, "fixture {}", fixture.name);
    }
}

#[test]
fn test_display_matches_render() {
    let stmt: Statement = select(&["id"], "users").into();
    assert_eq!(stmt.to_string(), to_sql(&stmt));
    assert_eq!(table("order").to_string(), "`order`");
}

#[test]
fn test_substituted_keywords_do_not_leak() {
    let custom = KeywordSet::new(["users"]);
    let serializer = Serializer::new(&custom, &MySqlEncoder);
    let s = Select::new([StarExpr::default().into()]).with_from([table("users")]);

    assert_eq!(serializer.render(&s), "select * from `users`");
    assert_eq!(to_sql(&s), "select * from users");
}

#[test]
fn test_dialect_from_config() {
    let s = select(&["rank"], "scores");

    let config = SerializerConfig::new(Dialect::MySQL80);
    let keywords = config.keyword_set();
    let mysql80 = Serializer::new(&keywords, &MySqlEncoder);

    assert_eq!(mysql80.render(&s), "select `rank` from scores");
    assert_eq!(Serializer::mysql().render(&s), "select rank from scores");
}

#[test]
fn test_render_case_file() {
    let file: shardsql_test_utils::CaseFile<RenderCase> =
        parse_case_file(include_str!("cases/render.yaml")).unwrap();

    for case in &file.cases {
        assert_eq!(to_sql(&case.statement), case.sql, "case '{}'", case.name);
    }
}

fn emitted_keywords() -> Vec<&'static str> {
    let mut texts = Vec::new();
    texts.extend(
        [
            UnionKind::Union,
            UnionKind::UnionAll,
            UnionKind::Minus,
            UnionKind::Except,
            UnionKind::Intersect,
        ]
        .map(UnionKind::as_str),
    );
    texts.extend([LockMode::ForUpdate, LockMode::ShareMode].map(LockMode::as_str));
    texts.extend(
        [
            JoinKind::Inner,
            JoinKind::Straight,
            JoinKind::Left,
            JoinKind::Right,
            JoinKind::Cross,
            JoinKind::Natural,
        ]
        .map(JoinKind::as_str),
    );
    texts.extend(
        [IndexHintKind::Use, IndexHintKind::Ignore, IndexHintKind::Force].map(IndexHintKind::as_str),
    );
    texts.extend([WhereKind::Where, WhereKind::Having].map(WhereKind::as_str));
    texts.extend([SortDirection::Asc, SortDirection::Desc].map(SortDirection::as_str));
    texts.extend(
        [
            ComparisonOp::In,
            ComparisonOp::NotIn,
            ComparisonOp::Like,
            ComparisonOp::NotLike,
        ]
        .map(ComparisonOp::as_str),
    );
    texts.extend([RangeOp::Between, RangeOp::NotBetween].map(RangeOp::as_str));
    texts.extend([NullCheckOp::IsNull, NullCheckOp::IsNotNull].map(NullCheckOp::as_str));
    texts.extend(
        [ShowModifier::Full, ShowModifier::Global, ShowModifier::Session]
            .map(ShowModifier::as_str),
    );
    texts.extend(
        [
            ShowSection::Databases,
            ShowSection::Tables,
            ShowSection::Variables,
            ShowSection::Status,
            ShowSection::Processlist,
        ]
        .map(ShowSection::as_str),
    );

    texts
        .into_iter()
        .flat_map(str::split_whitespace)
        .filter(|word| word.chars().any(|c| c.is_ascii_alphabetic()))
        .collect()
}

#[test]
fn test_emitted_keywords_are_reserved() {
    for &dialect in Dialect::all() {
        let keywords = KeywordSet::shared(dialect);
        for word in emitted_keywords() {
            assert!(keywords.is_reserved(word), "{word} is emitted but not reserved in {dialect}");
        }
    }
}

#[test]
fn test_set_operation_words_quoted_as_names() {
    assert_renders(&TableName::new("intersect"), "`intersect`");
    assert_renders(&TableName::new("except"), "`except`");
    assert_renders(&col("share"), "`share`");
    assert_renders(&col("mode"), "`mode`");
}
