//! Rendering performance benchmarks
//!
//! Measures the serializer across:
//! - Every fixture statement
//! - A wide SELECT with many columns and predicates
//! - LIMIT normalization

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use shardsql_ast::{
    AndExpr, BoolExpr, ComparisonExpr, ComparisonOp, Limit, NonStarExpr, Select, SelectExpr,
    Serializer, Statement,
};
use shardsql_test_utils::SqlFixtures;
use shardsql_test_utils::builders::{arg, col, num, table};

fn wide_select(columns: usize) -> Statement {
    let exprs = (0..columns).map(|i| SelectExpr::from(NonStarExpr::new(col(&format!("c{i}")))));
    let cond = (0..columns)
        .map(|i| -> BoolExpr {
            ComparisonExpr::new(col(&format!("c{i}")), ComparisonOp::Eq, arg(&format!("v{i}"))).into()
        })
        .reduce(|acc, next| AndExpr::new(acc, next).into());

    Select::new(exprs)
        .with_from([table("wide")])
        .with_where(cond)
        .with_limit(Limit::new(Some(num("100").into()), num("50")))
        .into()
}

fn bench_fixtures(c: &mut Criterion) {
    let serializer = Serializer::mysql();
    let mut group = c.benchmark_group("render/fixtures");

    for fixture in SqlFixtures::all() {
        group.throughput(Throughput::Bytes(fixture.sql.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(fixture.name),
            &fixture.statement,
            |b, stmt| b.iter(|| black_box(serializer.render(black_box(stmt)))),
        );
    }

    group.finish();
}

fn bench_wide_select(c: &mut Criterion) {
    let serializer = Serializer::mysql();
    let mut group = c.benchmark_group("render/wide_select");

    for columns in [8, 64, 256] {
        let stmt = wide_select(columns);
        group.bench_with_input(BenchmarkId::from_parameter(columns), &stmt, |b, stmt| {
            b.iter(|| black_box(serializer.parse_query(black_box(stmt))))
        });
    }

    group.finish();
}

fn bench_limit_normalize(c: &mut Criterion) {
    let limit = Limit::new(Some(num("1000").into()), num("20"));
    c.bench_function("rewrite/limit_normalize", |b| {
        b.iter(|| black_box(black_box(&limit).normalize()))
    });
}

criterion_group!(benches, bench_fixtures, bench_wide_select, bench_limit_normalize);
criterion_main!(benches);
