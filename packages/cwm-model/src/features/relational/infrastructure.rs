use super::ports::RelationalPackage;
use crate::errors::Result;
use crate::graph::ModelGraph;
use crate::shared::models::{
    CatalogId, CheckConstraintId, ColumnId, ForeignKeyId, Link, PrimaryKeyId, SchemaId,
    SqlDistinctTypeId, SqlIndexColumnId, SqlIndexId, SqlSimpleTypeId, TableId,
    UniqueConstraintId, ViewId,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRelationalPackage;

impl StandardRelationalPackage {
    pub const CLASS_PATH: &'static str = "cwm_model::features::relational::StandardRelationalPackage";
}

impl RelationalPackage for StandardRelationalPackage {
    fn class_path(&self) -> &'static str {
        Self::CLASS_PATH
    }

    fn create_catalog(&self, graph: &mut ModelGraph, name: &str) -> Result<CatalogId> {
        graph.instantiate(Some(name))
    }

    fn create_schema(&self, graph: &mut ModelGraph, name: &str) -> Result<SchemaId> {
        graph.instantiate(Some(name))
    }

    fn create_table(&self, graph: &mut ModelGraph, name: &str) -> Result<TableId> {
        graph.instantiate(Some(name))
    }

    fn create_view(&self, graph: &mut ModelGraph, name: &str) -> Result<ViewId> {
        graph.instantiate(Some(name))
    }

    fn create_column(&self, graph: &mut ModelGraph, name: &str) -> Result<ColumnId> {
        graph.instantiate(Some(name))
    }

    fn create_sql_simple_type(
        &self,
        graph: &mut ModelGraph,
        name: &str,
    ) -> Result<SqlSimpleTypeId> {
        graph.instantiate(Some(name))
    }

    fn create_sql_distinct_type(
        &self,
        graph: &mut ModelGraph,
        name: &str,
        simple_type: SqlSimpleTypeId,
    ) -> Result<SqlDistinctTypeId> {
        graph.instantiate_with(Some(name), |g, distinct: SqlDistinctTypeId| {
            g.link(Link::DistinctTypeSimpleType, distinct, simple_type)
                .map(drop)
        })
    }

    fn create_unique_constraint(
        &self,
        graph: &mut ModelGraph,
        name: &str,
    ) -> Result<UniqueConstraintId> {
        graph.instantiate(Some(name))
    }

    fn create_primary_key(&self, graph: &mut ModelGraph, name: &str) -> Result<PrimaryKeyId> {
        graph.instantiate(Some(name))
    }

    fn create_foreign_key(&self, graph: &mut ModelGraph, name: &str) -> Result<ForeignKeyId> {
        graph.instantiate(Some(name))
    }

    fn create_sql_index(&self, graph: &mut ModelGraph, name: &str) -> Result<SqlIndexId> {
        graph.instantiate(Some(name))
    }

    fn create_sql_index_column(
        &self,
        graph: &mut ModelGraph,
        index: SqlIndexId,
        column: ColumnId,
    ) -> Result<SqlIndexColumnId> {
        graph.instantiate_with(None, |g, entry: SqlIndexColumnId| {
            g.link(Link::IndexedFeatures, index, entry)?;
            g.link(Link::IndexedFeatureInfo, entry, column)?;
            Ok(())
        })
    }

    fn create_check_constraint(
        &self,
        graph: &mut ModelGraph,
        name: &str,
    ) -> Result<CheckConstraintId> {
        graph.instantiate(Some(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{CwmConstraint, MetaClass};

    #[test]
    fn test_sql_index_column_wires_both_ends() {
        let mut g = ModelGraph::new();
        let rel = StandardRelationalPackage;
        let index = rel.create_sql_index(&mut g, "idx_name").unwrap();
        let column = rel.create_column(&mut g, "name").unwrap();
        let entry = rel.create_sql_index_column(&mut g, index, column).unwrap();
        assert_eq!(g.meta_class_of(entry).unwrap(), MetaClass::SqlIndexColumn);
        assert_eq!(g.index_of(entry).unwrap(), Some(index.into()));
        assert_eq!(g.indexed_target(entry).unwrap(), Some(column.into()));
    }

    #[test]
    fn test_distinct_type_requires_existing_simple_type() {
        let mut g = ModelGraph::new();
        let rel = StandardRelationalPackage;
        let varchar = rel.create_sql_simple_type(&mut g, "VARCHAR").unwrap();
        g.delete(varchar).unwrap();
        assert!(rel.create_sql_distinct_type(&mut g, "EMAIL", varchar).is_err());
        assert_eq!(g.len(), 0);
    }

    #[test]
    fn test_second_primary_key_rejected() {
        let mut g = ModelGraph::new();
        let rel = StandardRelationalPackage;
        let table = rel.create_table(&mut g, "customer").unwrap();
        let pk = rel.create_primary_key(&mut g, "pk_customer").unwrap();
        let other = rel.create_primary_key(&mut g, "pk_other").unwrap();
        g.add_owned_element(table, pk).unwrap();
        let err = g.add_owned_element(table, other).unwrap_err();
        assert_eq!(err.violated_constraint(), Some(CwmConstraint::MultiplePrimaryKeys));
    }
}
