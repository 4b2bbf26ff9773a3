//! Relational factory port

use crate::errors::Result;
use crate::graph::ModelGraph;
use crate::shared::models::{
    CatalogId, CheckConstraintId, ColumnId, ForeignKeyId, PrimaryKeyId, SchemaId,
    SqlDistinctTypeId, SqlIndexColumnId, SqlIndexId, SqlSimpleTypeId, TableId,
    UniqueConstraintId, ViewId,
};

/// Factory for Resource::Relational meta-classes
pub trait RelationalPackage: Send + Sync {
    fn class_path(&self) -> &'static str;

    fn create_catalog(&self, graph: &mut ModelGraph, name: &str) -> Result<CatalogId>;

    fn create_schema(&self, graph: &mut ModelGraph, name: &str) -> Result<SchemaId>;

    fn create_table(&self, graph: &mut ModelGraph, name: &str) -> Result<TableId>;

    fn create_view(&self, graph: &mut ModelGraph, name: &str) -> Result<ViewId>;

    fn create_column(&self, graph: &mut ModelGraph, name: &str) -> Result<ColumnId>;

    fn create_sql_simple_type(&self, graph: &mut ModelGraph, name: &str)
        -> Result<SqlSimpleTypeId>;

    /// Distinct type based on `simple_type`
    fn create_sql_distinct_type(
        &self,
        graph: &mut ModelGraph,
        name: &str,
        simple_type: SqlSimpleTypeId,
    ) -> Result<SqlDistinctTypeId>;

    fn create_unique_constraint(
        &self,
        graph: &mut ModelGraph,
        name: &str,
    ) -> Result<UniqueConstraintId>;

    fn create_primary_key(&self, graph: &mut ModelGraph, name: &str) -> Result<PrimaryKeyId>;

    fn create_foreign_key(&self, graph: &mut ModelGraph, name: &str) -> Result<ForeignKeyId>;

    fn create_sql_index(&self, graph: &mut ModelGraph, name: &str) -> Result<SqlIndexId>;

    /// Index entry for `column`, appended to `index`
    fn create_sql_index_column(
        &self,
        graph: &mut ModelGraph,
        index: SqlIndexId,
        column: ColumnId,
    ) -> Result<SqlIndexColumnId>;

    fn create_check_constraint(
        &self,
        graph: &mut ModelGraph,
        name: &str,
    ) -> Result<CheckConstraintId>;
}
