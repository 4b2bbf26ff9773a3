//! Resource::Relational typed API
//!
//! Property accessors for the relational extensions plus the catalog /
//! schema / table navigation most callers want instead of raw ownership
//! lists.

use crate::errors::Result;
use crate::graph::ModelGraph;
use crate::shared::models::{
    CatalogId, CatalogProps, CheckConstraintId, CheckConstraintProps, ColumnId, ColumnProps,
    ColumnSetRef, CwmConstraint, DeferrabilityType, ElementId, ForeignKeyId, ForeignKeyProps,
    Link, LinkEnd, MetaClass, ModelElementRef, NamespaceRef, NullableType, PrimaryKeyId,
    QueryExpression, ReferentialRuleType, SchemaId, SqlDistinctTypeId, SqlDistinctTypeProps,
    SqlIndexId, SqlIndexProps, SqlSimpleTypeId, SqlSimpleTypeProps, TableId, TableProps,
    UniqueConstraintId, UniqueConstraintProps, ViewId, ViewProps,
};

impl ModelGraph {
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Catalog / Schema
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    facet_accessors! {
        CatalogProps, CatalogId {
            default_character_set_name, set_default_character_set_name
                => default_character_set_name: Option<String>;
            default_collation_name, set_default_collation_name
                => default_collation_name: Option<String>;
        }
    }

    pub fn schemas(&self, catalog: CatalogId) -> Result<Vec<SchemaId>> {
        self.owned_as(catalog.id(), MetaClass::Schema)
    }

    pub fn tables(&self, schema: impl NamespaceRef) -> Result<Vec<TableId>> {
        self.owned_as(schema.element_id(), MetaClass::Table)
    }

    pub fn views(&self, schema: impl NamespaceRef) -> Result<Vec<ViewId>> {
        self.owned_as(schema.element_id(), MetaClass::View)
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Table / View
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    facet_accessors! {
        TableProps, TableId {
            is_temporary, set_is_temporary => is_temporary: bool;
            /// `LOCAL` or `GLOBAL`
            temporary_scope, set_temporary_scope => temporary_scope: Option<String>;
            is_system, set_is_system => is_system: bool;
        }
    }

    facet_accessors! {
        ViewProps, ViewId {
            view_is_read_only, set_view_is_read_only => is_read_only: bool;
            check_option, set_check_option => check_option: bool;
            query_expression, set_query_expression => query_expression: Option<QueryExpression>;
        }
    }

    /// Columns of a table or view, in declaration order
    pub fn columns(&self, column_set: impl ColumnSetRef) -> Result<Vec<ColumnId>> {
        let mut columns = Vec::new();
        for feature in self.related(column_set.element_id(), LinkEnd::source(Link::ClassifierFeature))? {
            if self.meta_class_of(*feature)?.is_kind_of(MetaClass::Column) {
                columns.push(ColumnId::from_element_id(*feature));
            }
        }
        Ok(columns)
    }

    pub fn primary_key(&self, table: TableId) -> Result<Option<PrimaryKeyId>> {
        Ok(self
            .primary_key_of(table.id())?
            .map(PrimaryKeyId::from_element_id))
    }

    pub fn unique_constraints(&self, table: TableId) -> Result<Vec<UniqueConstraintId>> {
        self.owned_as(table.id(), MetaClass::UniqueConstraint)
    }

    pub fn foreign_keys(&self, table: TableId) -> Result<Vec<ForeignKeyId>> {
        self.owned_as(table.id(), MetaClass::ForeignKey)
    }

    pub fn check_constraints(&self, table: TableId) -> Result<Vec<CheckConstraintId>> {
        self.owned_as(table.id(), MetaClass::CheckConstraint)
    }

    /// SQL indexes spanning a table
    pub fn sql_indexes(&self, table: TableId) -> Result<Vec<SqlIndexId>> {
        let mut indexes = Vec::new();
        for index in self.related(table, LinkEnd::target(Link::IndexSpansClass))? {
            if self.meta_class_of(*index)?.is_kind_of(MetaClass::SqlIndex) {
                indexes.push(SqlIndexId::from_element_id(*index));
            }
        }
        Ok(indexes)
    }

    fn owned_as<H: ModelElementRef>(&self, namespace: ElementId, kind: MetaClass) -> Result<Vec<H>> {
        let mut owned = Vec::new();
        for element in self.related(namespace, LinkEnd::source(Link::ElementOwnership))? {
            if self.meta_class_of(*element)?.is_kind_of(kind) {
                owned.push(H::from_element_id(*element));
            }
        }
        Ok(owned)
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Column
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    facet_accessors! {
        ColumnProps, ColumnId {
            column_nullability, set_column_nullability => is_nullable: NullableType;
            length, set_length => length: Option<i64>;
            collation_name, set_collation_name => collation_name: Option<String>;
            character_set_name, set_character_set_name => character_set_name: Option<String>;
        }
    }

    pub fn precision(&self, column: ColumnId) -> Result<Option<i64>> {
        Ok(self.facet::<ColumnProps>(column)?.precision)
    }

    pub fn set_precision(&mut self, column: ColumnId, precision: Option<i64>) -> Result<Option<i64>> {
        let scale = self.facet::<ColumnProps>(column)?.scale;
        self.check_scale(column.id(), precision, scale)?;
        self.update::<ColumnProps, _>(column, |p| std::mem::replace(&mut p.precision, precision))
    }

    pub fn scale(&self, column: ColumnId) -> Result<Option<i64>> {
        Ok(self.facet::<ColumnProps>(column)?.scale)
    }

    pub fn set_scale(&mut self, column: ColumnId, scale: Option<i64>) -> Result<Option<i64>> {
        let precision = self.facet::<ColumnProps>(column)?.precision;
        self.check_scale(column.id(), precision, scale)?;
        self.update::<ColumnProps, _>(column, |p| std::mem::replace(&mut p.scale, scale))
    }

    fn check_scale(&self, column: ElementId, precision: Option<i64>, scale: Option<i64>) -> Result<()> {
        let ok = match (precision, scale) {
            (Some(precision), Some(scale)) => scale <= precision,
            _ => true,
        };
        self.check(CwmConstraint::ScaleExceedsPrecision, ok, column)
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // SQL data types
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    facet_accessors! {
        SqlSimpleTypeProps, SqlSimpleTypeId {
            /// Vendor type code
            type_number, set_type_number => type_number: Option<i64>;
            character_maximum_length, set_character_maximum_length
                => character_maximum_length: Option<i64>;
            character_octet_length, set_character_octet_length
                => character_octet_length: Option<i64>;
            numeric_precision, set_numeric_precision => numeric_precision: Option<i64>;
            numeric_precision_radix, set_numeric_precision_radix
                => numeric_precision_radix: Option<i64>;
            numeric_scale, set_numeric_scale => numeric_scale: Option<i64>;
            date_time_precision, set_date_time_precision => date_time_precision: Option<i64>;
        }
    }

    facet_accessors! {
        SqlDistinctTypeProps, SqlDistinctTypeId {
            distinct_length, set_distinct_length => length: Option<i64>;
            distinct_precision, set_distinct_precision => precision: Option<i64>;
            distinct_scale, set_distinct_scale => scale: Option<i64>;
            distinct_character_set_name, set_distinct_character_set_name
                => character_set_name: Option<String>;
            distinct_collation_name, set_distinct_collation_name
                => collation_name: Option<String>;
        }
    }

    pub fn sql_simple_type(&self, distinct: SqlDistinctTypeId) -> Result<Option<SqlSimpleTypeId>> {
        self.single_as(distinct, LinkEnd::source(Link::DistinctTypeSimpleType))
    }

    pub fn set_sql_simple_type(
        &mut self,
        distinct: SqlDistinctTypeId,
        simple_type: Option<SqlSimpleTypeId>,
    ) -> Result<Option<SqlSimpleTypeId>> {
        let prior = self.set_single(
            distinct,
            LinkEnd::source(Link::DistinctTypeSimpleType),
            simple_type.map(ElementId::from),
        )?;
        Ok(prior.map(SqlSimpleTypeId::from_element_id))
    }

    pub fn distinct_types(&self, simple_type: SqlSimpleTypeId) -> Result<Vec<SqlDistinctTypeId>> {
        self.related_as(simple_type, LinkEnd::target(Link::DistinctTypeSimpleType))
    }

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // Keys, checks and indexes
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    facet_accessors! {
        UniqueConstraintProps, UniqueConstraintId {
            /// Also covers primary keys (`pk.into()`)
            unique_deferrability, set_unique_deferrability => deferrability: DeferrabilityType;
        }
    }

    facet_accessors! {
        ForeignKeyProps, ForeignKeyId {
            delete_rule, set_delete_rule => delete_rule: ReferentialRuleType;
            update_rule, set_update_rule => update_rule: ReferentialRuleType;
            foreign_key_deferrability, set_foreign_key_deferrability
                => deferrability: DeferrabilityType;
        }
    }

    facet_accessors! {
        CheckConstraintProps, CheckConstraintId {
            check_deferrability, set_check_deferrability => deferrability: DeferrabilityType;
        }
    }

    facet_accessors! {
        SqlIndexProps, SqlIndexId {
            filter_condition, set_filter_condition => filter_condition: Option<String>;
            index_is_nullable, set_index_is_nullable => is_nullable: bool;
            auto_update, set_auto_update => auto_update: bool;
        }
    }
}
