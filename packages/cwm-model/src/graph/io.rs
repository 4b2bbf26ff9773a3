//! JSON / YAML persistence of a model graph
//!
//! The on-disk form is the arena itself (tombstones included, so ids stay
//! stable). Everything read back is integrity-checked.

use std::path::Path;

use tracing::debug;

use super::ModelGraph;
use crate::errors::Result;

impl ModelGraph {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let graph: ModelGraph = serde_json::from_str(json)?;
        graph.check_integrity()?;
        Ok(graph)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let graph: ModelGraph = serde_yaml::from_str(yaml)?;
        graph.check_integrity()?;
        Ok(graph)
    }

    /// Write to `path`; `.yaml`/`.yml` selects YAML, anything else JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_yaml(path) {
            self.to_yaml()?
        } else {
            self.to_json_pretty()?
        };
        std::fs::write(path, content)?;
        debug!(path = %path.display(), elements = self.len(), "saved model");
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let graph = if is_yaml(path) {
            Self::from_yaml(&content)?
        } else {
            Self::from_json(&content)?
        };
        debug!(path = %path.display(), elements = graph.len(), "loaded model");
        Ok(graph)
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CwmError;
    use crate::shared::models::{AttributeId, ClassId, Link, LinkEnd, PackageId};
    use pretty_assertions::assert_eq;

    fn sample() -> ModelGraph {
        let mut graph = ModelGraph::new();
        let package: PackageId = graph.instantiate(Some("sales")).unwrap();
        let class: ClassId = graph.instantiate(Some("Order")).unwrap();
        let attr: AttributeId = graph.instantiate(Some("total")).unwrap();
        let scratch: ClassId = graph.instantiate(Some("scratch")).unwrap();
        graph.link(Link::ElementOwnership, package, class).unwrap();
        graph.link(Link::ClassifierFeature, class, attr).unwrap();
        graph.set_tagged_value(class, "table", "orders").unwrap();
        graph.delete(scratch).unwrap();
        graph
    }

    #[test]
    fn test_json_preserves_ids_and_links() {
        let graph = sample();
        let back = ModelGraph::from_json(&graph.to_json().unwrap()).unwrap();
        assert_eq!(back.len(), 3);
        let order = back.iter().find(|e| e.name() == Some("Order")).unwrap();
        assert_eq!(order.tagged_value("table"), Some("orders"));
        assert_eq!(order.related(LinkEnd::source(Link::ClassifierFeature)).len(), 1);
        assert_eq!(back.to_json().unwrap(), graph.to_json().unwrap());
    }

    #[test]
    fn test_yaml_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.yaml");
        let graph = sample();
        graph.save(&path).unwrap();
        let back = ModelGraph::load(&path).unwrap();
        assert_eq!(back.to_yaml().unwrap(), graph.to_yaml().unwrap());
    }

    #[test]
    fn test_corrupt_json_rejected() {
        let json = r#"{"slots":[{"id":0,"meta_class":"Class","props":{"class":"none"},
            "links":[{"link":"ClassifierFeature","side":"source","ids":[7]}]}]}"#;
        let err = ModelGraph::from_json(json).unwrap_err();
        assert!(matches!(err, CwmError::Integrity(_)));
    }
}
