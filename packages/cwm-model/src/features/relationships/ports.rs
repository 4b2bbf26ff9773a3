//! Relationships factory port

use crate::errors::Result;
use crate::graph::ModelGraph;
use crate::shared::models::{AssociationEndId, AssociationId, ClassifierId, GeneralizationId};

/// Factory for ObjectModel::Relationships meta-classes
pub trait RelationshipsPackage: Send + Sync {
    fn class_path(&self) -> &'static str;

    fn create_association(&self, graph: &mut ModelGraph, name: &str) -> Result<AssociationId>;

    fn create_association_end(&self, graph: &mut ModelGraph, name: &str)
        -> Result<AssociationEndId>;

    /// `child` specializes `parent`; cycles are rejected
    fn create_generalization(
        &self,
        graph: &mut ModelGraph,
        child: ClassifierId,
        parent: ClassifierId,
    ) -> Result<GeneralizationId>;
}
