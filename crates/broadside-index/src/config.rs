//! Quad-tree configuration.
//!
//! `max_objects` and `max_levels` are properties of the whole tree, not
//! of individual nodes; they are validated once at construction and then
//! copied down to every child node.

use serde::{Deserialize, Serialize};

use broadside_types::{constants, BroadsideError, BroadsideResult};

/// Configuration for a [`Quadtree`](crate::Quadtree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadtreeConfig {
    /// Number of objects a node holds before it splits into quadrants.
    pub max_objects: usize,

    /// Hard recursion ceiling. A node at this level never splits; its
    /// bag grows and is scanned linearly instead.
    pub max_levels: u32,
}

impl Default for QuadtreeConfig {
    fn default() -> Self {
        Self {
            max_objects: constants::DEFAULT_MAX_OBJECTS,
            max_levels: constants::DEFAULT_MAX_LEVELS,
        }
    }
}

impl QuadtreeConfig {
    /// Checks that the thresholds are usable.
    pub fn validate(&self) -> BroadsideResult<()> {
        if self.max_objects == 0 {
            return Err(BroadsideError::InvalidConfig(
                "max_objects must be >= 1".into(),
            ));
        }
        if self.max_levels == 0 {
            return Err(BroadsideError::InvalidConfig(
                "max_levels must be >= 1".into(),
            ));
        }
        Ok(())
    }
}
