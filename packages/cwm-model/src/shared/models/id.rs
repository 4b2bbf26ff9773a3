//! Element identity
//!
//! Every element of a [`ModelGraph`](crate::graph::ModelGraph) is addressed by
//! an [`ElementId`]: a dense arena index that is never reused, even after the
//! element is deleted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Arena index of a model element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(u32);

impl ElementId {
    /// Build an id from its raw arena index
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// Raw arena index
    pub fn raw(self) -> u32 {
        self.0
    }

    /// Arena slot
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
