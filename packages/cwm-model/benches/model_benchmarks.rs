/// Performance benchmarks for model construction and validation
///
/// Measures:
/// - Building relational warehouses through the package factories
/// - Full-model validation, sequential vs parallel
/// - Qualified-name lookup
/// - JSON serialization
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cwm_model::packages::{RelationalPackage, StandardRelationalPackage};
use cwm_model::shared::models::{ClassRef, NullableType, UniqueKeyId};
use cwm_model::{ModelConfig, ModelGraph, ModelValidator};

// ============================================================================
// Fixture
// ============================================================================

/// Catalog with one schema; each table has keyed, indexed, typed columns
fn build_warehouse(tables: usize, columns: usize) -> ModelGraph {
    let rel = StandardRelationalPackage;
    let mut g = ModelGraph::new();

    let catalog = rel.create_catalog(&mut g, "dw").unwrap();
    let schema = rel.create_schema(&mut g, "sales").unwrap();
    g.add_owned_element(catalog, schema).unwrap();
    let integer = rel.create_sql_simple_type(&mut g, "INTEGER").unwrap();
    g.add_owned_element(schema, integer).unwrap();

    let mut previous_pk: Option<UniqueKeyId> = None;
    for t in 0..tables {
        let table = rel.create_table(&mut g, &format!("t{}", t)).unwrap();
        g.add_owned_element(schema, table).unwrap();

        let mut cols = Vec::with_capacity(columns);
        for c in 0..columns {
            let column = rel.create_column(&mut g, &format!("c{}", c)).unwrap();
            g.add_feature(table, column).unwrap();
            g.set_type(column, Some(integer.into())).unwrap();
            cols.push(column);
        }
        g.set_column_nullability(cols[0], NullableType::ColumnNoNulls)
            .unwrap();

        let pk = rel.create_primary_key(&mut g, &format!("t{}_pk", t)).unwrap();
        g.add_owned_element(table, pk).unwrap();
        g.add_key_feature(pk, cols[0]).unwrap();

        let index = rel.create_sql_index(&mut g, &format!("t{}_idx", t)).unwrap();
        g.add_owned_element(table, index).unwrap();
        g.set_spanned_class(index, Some(table.as_class())).unwrap();
        rel.create_sql_index_column(&mut g, index, cols[0]).unwrap();

        if let Some(referenced) = previous_pk {
            let fk = rel.create_foreign_key(&mut g, &format!("t{}_fk", t)).unwrap();
            g.add_owned_element(table, fk).unwrap();
            g.add_relationship_feature(fk, cols[1]).unwrap();
            g.set_referenced_key(fk, Some(referenced)).unwrap();
        }
        previous_pk = Some(pk.into());
    }
    g
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_warehouse");
    for tables in [10, 100, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(tables), &tables, |b, &tables| {
            b.iter(|| black_box(build_warehouse(tables, 8)))
        });
    }
    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    for tables in [100, 500] {
        let graph = build_warehouse(tables, 8);
        for parallel in [false, true] {
            let config = ModelConfig::default().validation(|v| v.parallel(parallel));
            let validator = ModelValidator::new(&config);
            let label = if parallel { "parallel" } else { "sequential" };
            group.bench_with_input(BenchmarkId::new(label, tables), &graph, |b, graph| {
                b.iter(|| black_box(validator.validate(graph).unwrap()))
            });
        }
    }
    group.finish();
}

fn bench_qualified_name_lookup(c: &mut Criterion) {
    let graph = build_warehouse(500, 8);
    c.bench_function("find_by_qualified_name", |b| {
        b.iter(|| {
            let query = graph.query();
            black_box(query.find_by_qualified_name(black_box("dw::sales::t499::c7")))
        })
    });
}

fn bench_serialize(c: &mut Criterion) {
    let graph = build_warehouse(100, 8);
    c.bench_function("to_json/100_tables", |b| {
        b.iter(|| black_box(graph.to_json().unwrap()))
    });
    let json = graph.to_json().unwrap();
    c.bench_function("from_json/100_tables", |b| {
        b.iter(|| black_box(ModelGraph::from_json(black_box(&json)).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_build,
    bench_validate,
    bench_qualified_name_lookup,
    bench_serialize
);
criterion_main!(benches);
