//! Constraints checked when a link is added
//!
//! Rules that only need the two endpoints (and their current neighbours)
//! run inside [`ModelGraph::link`], so typed setters and raw links enforce
//! them the same way. Structural rules apply under every policy; the rest
//! only under an eager policy.

use std::collections::HashSet;

use super::ModelGraph;
use crate::errors::Result;
use crate::shared::models::{
    AggregationKind, AssociationEndProps, CwmConstraint, ElementId, Facet, IndexProps,
    IndexedFeatureProps, Link, LinkEnd,
    MetaClass, ParameterDirectionKind, ParameterProps, StereotypeProps, UnionMemberProps,
};

impl ModelGraph {
    pub(crate) fn check_link_rules(
        &self,
        link: Link,
        source: ElementId,
        target: ElementId,
    ) -> Result<()> {
        match link {
            Link::ElementConstraint => {
                self.check(CwmConstraint::SelfConstraint, source != target, source)
            }
            Link::StereotypedElement => {
                let ok = self.stereotype_accepts(source, target)?;
                self.check(CwmConstraint::StereotypeBaseClass, ok, source)
            }
            Link::ClassifierFeature => self.check_feature_owner(source, target),
            Link::BehavioralFeatureParameter => {
                let adds_return = self.facet::<ParameterProps>(target)?.kind
                    == ParameterDirectionKind::Return;
                let ok = !adds_return || self.return_parameter(source, Some(target))?.is_none();
                self.check(CwmConstraint::MultipleReturnParameters, ok, source)
            }
            Link::GeneralizationChild | Link::GeneralizationParent => {
                self.check_generalization(link, source, target)
            }
            Link::InstanceClassifier => {
                let instance = self.meta_class_of(source)?;
                let is_data_type = self.meta_class_of(target)?.is_kind_of(MetaClass::DataType);
                if instance.is_kind_of(MetaClass::DataValue) {
                    self.check(CwmConstraint::DataValueClassifier, is_data_type, source)
                } else if instance.is_kind_of(MetaClass::Object) {
                    self.check(CwmConstraint::ObjectClassifier, !is_data_type, source)
                } else {
                    Ok(())
                }
            }
            Link::ClassifierAlias => {
                self.check(CwmConstraint::TypeAliasSelf, source != target, source)
            }
            Link::MappingSource | Link::MappingTarget => {
                let other = if link == Link::MappingSource {
                    Link::MappingTarget
                } else {
                    Link::MappingSource
                };
                let opposite = self.single(source, LinkEnd::source(other))?;
                self.check(
                    CwmConstraint::MappingSourceEqualsTarget,
                    opposite != Some(target),
                    source,
                )
            }
            Link::IndexedFeatures => {
                let has_direction = self.facet::<IndexedFeatureProps>(target)?.is_ascending.is_some();
                let ok = !has_direction || self.facet::<IndexProps>(source)?.is_sorted;
                self.check(CwmConstraint::AscendingRequiresSorted, ok, target)
            }
            Link::ElementOwnership => {
                let adds_primary_key = self.meta_class_of(source)?.is_kind_of(MetaClass::Table)
                    && self.meta_class_of(target)?.is_kind_of(MetaClass::PrimaryKey);
                let ok = !adds_primary_key || self.primary_key_of(source)?.is_none();
                self.check(CwmConstraint::MultiplePrimaryKeys, ok, source)
            }
            _ => Ok(()),
        }
    }

    fn check_feature_owner(&self, owner: ElementId, feature: ElementId) -> Result<()> {
        let feature_class = self.meta_class_of(feature)?;
        if feature_class.is_kind_of(MetaClass::AssociationEnd) {
            let owner_is_association = self.meta_class_of(owner)?.is_kind_of(MetaClass::Association);
            self.check(CwmConstraint::AssociationEndOwner, owner_is_association, feature)?;
            if self.facet::<AssociationEndProps>(feature)?.aggregation.is_aggregate() {
                let ok = self.aggregate_end(owner, Some(feature))?.is_none();
                self.check(CwmConstraint::MultipleAggregateEnds, ok, owner)?;
            }
        }
        if feature_class.is_kind_of(MetaClass::UnionMember)
            && self.facet::<UnionMemberProps>(feature)?.is_default
        {
            let ok = self.default_member(owner, Some(feature))?.is_none();
            self.check(CwmConstraint::MultipleDefaultMembers, ok, owner)?;
        }
        Ok(())
    }

    fn check_generalization(
        &self,
        link: Link,
        generalization: ElementId,
        classifier: ElementId,
    ) -> Result<()> {
        let (child, parent) = if link == Link::GeneralizationChild {
            let parent = self.single(generalization, LinkEnd::source(Link::GeneralizationParent))?;
            (Some(classifier), parent)
        } else {
            let child = self.single(generalization, LinkEnd::source(Link::GeneralizationChild))?;
            (child, Some(classifier))
        };
        let (Some(child), Some(parent)) = (child, parent) else {
            return Ok(());
        };
        let cyclic = child == parent || self.inherits_from(parent, child);
        self.check(CwmConstraint::GeneralizationCycle, !cyclic, generalization)
    }

    pub(crate) fn stereotype_accepts(&self, stereotype: ElementId, element: ElementId) -> Result<bool> {
        let Some(base) = self.facet::<StereotypeProps>(stereotype)?.base_class.as_deref() else {
            return Ok(true);
        };
        let actual = self.meta_class_of(element)?;
        Ok(MetaClass::from_name(base).is_some_and(|mc| actual.is_kind_of(mc)))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Lookups shared with property setters
    // ═══════════════════════════════════════════════════════════════════════

    /// Direct parents through generalizations
    pub(crate) fn generalization_parents(&self, classifier: ElementId) -> Vec<ElementId> {
        let Ok(element) = self.element(classifier) else {
            return Vec::new();
        };
        element
            .related(LinkEnd::target(Link::GeneralizationChild))
            .iter()
            .filter_map(|g| {
                self.single(*g, LinkEnd::source(Link::GeneralizationParent))
                    .ok()
                    .flatten()
            })
            .collect()
    }

    /// `true` when `sub` reaches `sup` through generalizations (not reflexive)
    pub(crate) fn inherits_from(&self, sub: ElementId, sup: ElementId) -> bool {
        let mut seen = HashSet::new();
        let mut stack = self.generalization_parents(sub);
        while let Some(next) = stack.pop() {
            if next == sup {
                return true;
            }
            if seen.insert(next) {
                stack.extend(self.generalization_parents(next));
            }
        }
        false
    }

    pub(crate) fn return_parameter(
        &self,
        feature: ElementId,
        except: Option<ElementId>,
    ) -> Result<Option<ElementId>> {
        self.find_part(feature, Link::BehavioralFeatureParameter, except, |g, p| {
            Ok(g.facet::<ParameterProps>(p)?.kind == ParameterDirectionKind::Return)
        })
    }

    pub(crate) fn aggregate_end(
        &self,
        association: ElementId,
        except: Option<ElementId>,
    ) -> Result<Option<ElementId>> {
        self.find_part(association, Link::ClassifierFeature, except, |g, f| {
            Ok(AssociationEndProps::of(g.element(f)?)
                .is_some_and(|p| p.aggregation != AggregationKind::None))
        })
    }

    pub(crate) fn default_member(
        &self,
        union: ElementId,
        except: Option<ElementId>,
    ) -> Result<Option<ElementId>> {
        self.find_part(union, Link::ClassifierFeature, except, |g, f| {
            Ok(UnionMemberProps::of(g.element(f)?).is_some_and(|p| p.is_default))
        })
    }

    pub(crate) fn primary_key_of(&self, table: ElementId) -> Result<Option<ElementId>> {
        self.find_part(table, Link::ElementOwnership, None, |g, e| {
            Ok(g.meta_class_of(e)?.is_kind_of(MetaClass::PrimaryKey))
        })
    }

    fn find_part(
        &self,
        container: ElementId,
        link: Link,
        except: Option<ElementId>,
        mut matches: impl FnMut(&Self, ElementId) -> Result<bool>,
    ) -> Result<Option<ElementId>> {
        for part in self.related(container, LinkEnd::source(link))? {
            if Some(*part) != except && matches(self, *part)? {
                return Ok(Some(*part));
            }
        }
        Ok(None)
    }
}
