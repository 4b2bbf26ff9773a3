//! Test data builders
//!
//! Builder patterns for relational warehouse models.

use cwm_model::packages::{RelationalPackage, StandardRelationalPackage};
use cwm_model::shared::models::{
    CatalogId, ClassRef, ColumnId, ConstraintPolicy, ForeignKeyId, NullableType, PrimaryKeyId,
    SchemaId, SqlIndexId, SqlSimpleTypeId, TableId,
};
use cwm_model::ModelGraph;

/// One generated table
#[derive(Debug, Clone)]
pub struct TableFixture {
    pub table: TableId,
    pub columns: Vec<ColumnId>,
    pub primary_key: PrimaryKeyId,
    pub index: SqlIndexId,
    /// Reference to the previous table's key
    pub foreign_key: Option<ForeignKeyId>,
}

/// A generated warehouse
#[derive(Debug)]
pub struct Warehouse {
    pub graph: ModelGraph,
    pub catalog: CatalogId,
    pub schema: SchemaId,
    pub integer: SqlSimpleTypeId,
    pub tables: Vec<TableFixture>,
}

/// Builder for a catalog with one schema of chained tables
///
/// Every table `t{i}` has columns `c0..c{n}` of type INTEGER, a primary key
/// on `c0` (NOT NULL), a sorted ascending index on `c0`, and (when enabled)
/// a foreign key on `c1` referencing the previous table's primary key.
#[derive(Debug, Clone)]
pub struct WarehouseBuilder {
    tables: usize,
    columns: usize,
    foreign_keys: bool,
    policy: ConstraintPolicy,
}

impl Default for WarehouseBuilder {
    fn default() -> Self {
        Self {
            tables: 3,
            columns: 4,
            foreign_keys: true,
            policy: ConstraintPolicy::strict(),
        }
    }
}

impl WarehouseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tables(mut self, tables: usize) -> Self {
        self.tables = tables;
        self
    }

    /// At least two columns are always generated
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(2);
        self
    }

    pub fn foreign_keys(mut self, enabled: bool) -> Self {
        self.foreign_keys = enabled;
        self
    }

    pub fn lenient(mut self) -> Self {
        self.policy = ConstraintPolicy::lenient();
        self
    }

    pub fn build(self) -> Warehouse {
        let rel = StandardRelationalPackage;
        let mut g = ModelGraph::with_policy(self.policy);

        let catalog = rel.create_catalog(&mut g, "dw").unwrap();
        let schema = rel.create_schema(&mut g, "sales").unwrap();
        g.add_owned_element(catalog, schema).unwrap();
        let integer = rel.create_sql_simple_type(&mut g, "INTEGER").unwrap();
        g.add_owned_element(schema, integer).unwrap();

        let mut tables: Vec<TableFixture> = Vec::with_capacity(self.tables);
        for t in 0..self.tables {
            let table = rel.create_table(&mut g, &format!("t{}", t)).unwrap();
            g.add_owned_element(schema, table).unwrap();

            let mut columns = Vec::with_capacity(self.columns);
            for c in 0..self.columns {
                let column = rel.create_column(&mut g, &format!("c{}", c)).unwrap();
                g.add_feature(table, column).unwrap();
                g.set_type(column, Some(integer.into())).unwrap();
                columns.push(column);
            }
            g.set_column_nullability(columns[0], NullableType::ColumnNoNulls)
                .unwrap();

            let primary_key = rel.create_primary_key(&mut g, &format!("t{}_pk", t)).unwrap();
            g.add_owned_element(table, primary_key).unwrap();
            g.add_key_feature(primary_key, columns[0]).unwrap();

            let index = rel.create_sql_index(&mut g, &format!("t{}_idx", t)).unwrap();
            g.add_owned_element(table, index).unwrap();
            g.set_spanned_class(index, Some(table.as_class())).unwrap();
            g.set_is_sorted(index, true).unwrap();
            let entry = rel.create_sql_index_column(&mut g, index, columns[0]).unwrap();
            g.set_is_ascending(entry, Some(true)).unwrap();

            let foreign_key = match tables.last() {
                Some(previous) if self.foreign_keys => {
                    let fk = rel.create_foreign_key(&mut g, &format!("t{}_fk", t)).unwrap();
                    g.add_owned_element(table, fk).unwrap();
                    g.add_relationship_feature(fk, columns[1]).unwrap();
                    g.set_referenced_key(fk, Some(previous.primary_key.into()))
                        .unwrap();
                    Some(fk)
                }
                _ => None,
            };

            tables.push(TableFixture {
                table,
                columns,
                primary_key,
                index,
                foreign_key,
            });
        }

        Warehouse {
            graph: g,
            catalog,
            schema,
            integer,
            tables,
        }
    }
}
