//! Link engine
//!
//! One implementation of bidirectional bookkeeping for every CWM
//! association. Adding a link updates both ends; single-valued ends replace
//! (and detach) their previous partner; composite links enforce a single
//! owner and reject ownership cycles.

use tracing::debug;

use super::ModelGraph;
use crate::errors::{CwmError, Result};
use crate::shared::models::{
    CwmConstraint, ElementId, Link, LinkEnd, ModelElementRef, Side,
};

impl ModelGraph {
    /// Link `source` to `target`. Returns `false` when the pair was already
    /// linked.
    pub fn link(
        &mut self,
        link: Link,
        source: impl Into<ElementId>,
        target: impl Into<ElementId>,
    ) -> Result<bool> {
        let (source, target) = (source.into(), target.into());
        let spec = link.spec();
        self.expect_kind(source, spec.source.holder)?;
        self.expect_kind(target, spec.target.holder)?;

        if self
            .element(source)?
            .related(LinkEnd::source(link))
            .contains(&target)
        {
            return Ok(false);
        }
        if spec.composite {
            self.check_composite(link, source, target)?;
        }
        self.check_link_rules(link, source, target)?;
        let name = self.element(target)?.name().map(str::to_string);
        self.check_sibling_name(link, source, target, name.as_deref())?;

        if spec.source.is_single() {
            if let Some(&previous) = self.element(source)?.related(LinkEnd::source(link)).first() {
                debug!(%link, %source, %previous, "replacing single-valued reference");
                self.detach(link, source, previous);
            }
        }
        if spec.target.is_single() {
            if let Some(&previous) = self.element(target)?.related(LinkEnd::target(link)).first() {
                debug!(%link, %target, from = %previous, to = %source, "moving element");
                self.detach(link, previous, target);
            }
        }

        self.element_mut(source)?
            .links_mut(LinkEnd::source(link))
            .push(target);
        self.element_mut(target)?
            .links_mut(LinkEnd::target(link))
            .push(source);
        debug!(%link, %source, %target, "linked");
        Ok(true)
    }

    /// Remove a link; returns whether it existed
    pub fn unlink(
        &mut self,
        link: Link,
        source: impl Into<ElementId>,
        target: impl Into<ElementId>,
    ) -> Result<bool> {
        let (source, target) = (source.into(), target.into());
        self.element(target)?;
        if !self
            .element(source)?
            .related(LinkEnd::source(link))
            .contains(&target)
        {
            return Ok(false);
        }
        self.detach(link, source, target);
        debug!(%link, %source, %target, "unlinked");
        Ok(true)
    }

    /// Link (or move) `target` to `position` of an ordered source end
    pub fn insert_at(
        &mut self,
        link: Link,
        source: impl Into<ElementId>,
        target: impl Into<ElementId>,
        position: usize,
    ) -> Result<()> {
        let (source, target) = (source.into(), target.into());
        if !link.spec().source.ordered {
            return Err(CwmError::invalid_link(link, "source end is not ordered"));
        }
        let end = LinkEnd::source(link);
        let existing = self.element(source)?.related(end);
        let already_linked = existing.contains(&target);
        let len = if already_linked {
            existing.len() - 1
        } else {
            existing.len()
        };
        if position > len {
            return Err(CwmError::PositionOutOfBounds { position, len });
        }

        if !already_linked {
            self.link(link, source, target)?;
        }
        let list = self.element_mut(source)?.links_mut(end);
        list.retain(|id| *id != target);
        list.insert(position, target);
        Ok(())
    }

    /// Partners of `id` on one link end, in link order
    pub fn related(&self, id: impl Into<ElementId>, end: LinkEnd) -> Result<&[ElementId]> {
        Ok(self.element(id)?.related(end))
    }

    /// Partner on a single-valued end
    pub fn single(&self, id: impl Into<ElementId>, end: LinkEnd) -> Result<Option<ElementId>> {
        Ok(self.element(id)?.related(end).first().copied())
    }

    /// Set (or clear) a single-valued end; returns the prior partner
    pub fn set_single(
        &mut self,
        id: impl Into<ElementId>,
        end: LinkEnd,
        value: Option<ElementId>,
    ) -> Result<Option<ElementId>> {
        let id = id.into();
        if !end.spec().is_single() {
            return Err(CwmError::invalid_link(
                end.link,
                format!("{} is multi-valued", end),
            ));
        }
        let prior = self.single(id, end)?;
        if prior == value {
            return Ok(prior);
        }
        match (value, end.side) {
            (Some(v), Side::Source) => {
                self.link(end.link, id, v)?;
            }
            (Some(v), Side::Target) => {
                self.link(end.link, v, id)?;
            }
            (None, side) => {
                if let Some(p) = prior {
                    match side {
                        Side::Source => self.unlink(end.link, id, p)?,
                        Side::Target => self.unlink(end.link, p, id)?,
                    };
                }
            }
        }
        Ok(prior)
    }

    /// Typed view of a link end
    pub(crate) fn related_as<H: ModelElementRef>(
        &self,
        id: impl Into<ElementId>,
        end: LinkEnd,
    ) -> Result<Vec<H>> {
        Ok(self
            .related(id, end)?
            .iter()
            .map(|id| H::from_element_id(*id))
            .collect())
    }

    pub(crate) fn single_as<H: ModelElementRef>(
        &self,
        id: impl Into<ElementId>,
        end: LinkEnd,
    ) -> Result<Option<H>> {
        Ok(self.single(id, end)?.map(H::from_element_id))
    }

    /// Owner through a composite link, with the link
    pub fn composite_owner(&self, id: impl Into<ElementId>) -> Option<(Link, ElementId)> {
        let element = self.element(id).ok()?;
        Link::composites().find_map(|link| {
            element
                .related(LinkEnd::target(link))
                .first()
                .map(|owner| (link, *owner))
        })
    }

    fn check_composite(&self, link: Link, owner: ElementId, part: ElementId) -> Result<()> {
        if owner == part {
            return Err(CwmError::constraint(CwmConstraint::OwnershipCycle, owner));
        }
        if let Some((current, _)) = self.composite_owner(part) {
            if current != link {
                return Err(CwmError::constraint(
                    CwmConstraint::SingleCompositeOwner,
                    part,
                ));
            }
        }
        let mut cursor = self.composite_owner(owner);
        let mut steps = 0;
        while let Some((_, ancestor)) = cursor {
            if ancestor == part {
                return Err(CwmError::constraint(CwmConstraint::OwnershipCycle, owner));
            }
            steps += 1;
            if steps > self.slots.len() {
                return Err(CwmError::integrity("composite ownership chain does not terminate"));
            }
            cursor = self.composite_owner(ancestor);
        }
        Ok(())
    }

    /// Remove a pair from both ends, ignoring missing elements
    pub(crate) fn detach(&mut self, link: Link, source: ElementId, target: ElementId) {
        let source_end = LinkEnd::source(link);
        let target_end = LinkEnd::target(link);
        if let Ok(element) = self.element_mut(source) {
            element.links_mut(source_end).retain(|id| *id != target);
            element.prune_links(source_end);
        }
        if let Ok(element) = self.element_mut(target) {
            element.links_mut(target_end).retain(|id| *id != source);
            element.prune_links(target_end);
        }
    }

    /// Write both ends with no rule checks (corrupt fixtures for validator tests)
    #[cfg(test)]
    pub(crate) fn force_link(
        &mut self,
        link: Link,
        source: impl Into<ElementId>,
        target: impl Into<ElementId>,
    ) -> Result<()> {
        let (source, target) = (source.into(), target.into());
        self.element_mut(source)?
            .links_mut(LinkEnd::source(link))
            .push(target);
        self.element_mut(target)?
            .links_mut(LinkEnd::target(link))
            .push(source);
        Ok(())
    }
}
