//! Per-frame collision pipeline: index build → retrieve → classify.
//!
//! Convenience orchestrator over the public surface for the common
//! frame loop: rebuild the index from the live colliders, then classify
//! every collider against its broad-phase candidates. Hosts with more
//! exotic needs (mixed collider types, the point-probe method, per-type
//! sweeps) drive `Quadtree` and `CollisionGroup` directly.

use tracing::debug;

use broadside_geom::Rect;
use broadside_index::{Collidable, Quadtree, QuadtreeConfig};
use broadside_types::{BroadsideResult, Scalar};

use crate::group::CollisionGroup;
use crate::result::CollisionResult;

/// Reusable frame-loop orchestrator.
///
/// Holds only configuration; the index itself is rebuilt on every call,
/// which is the intended usage pattern (the tree is cheap to rebuild and
/// never outlives a frame's validity).
#[derive(Debug, Clone)]
pub struct CollisionPipeline {
    region: Rect,
    config: QuadtreeConfig,
    offset: Scalar,
}

impl CollisionPipeline {
    /// Creates a pipeline over the given world region.
    pub fn new(region: Rect, config: QuadtreeConfig) -> BroadsideResult<Self> {
        region.validate()?;
        config.validate()?;
        Ok(Self {
            region,
            config,
            offset: 0.0,
        })
    }

    /// Sets the classifier's detection margin.
    pub fn with_offset(mut self, offset: Scalar) -> Self {
        self.offset = offset;
        self
    }

    /// Classifies every collider in `colliders` against the others.
    ///
    /// Builds a fresh index, inserts all colliders, then runs the
    /// bounds-overlap classifier per collider. The output is parallel to
    /// the input: `results[i]` is the classification for `colliders[i]`.
    pub fn classify_frame<'a, T: Collidable>(
        &self,
        colliders: &'a [T],
    ) -> BroadsideResult<Vec<CollisionResult<'a, T>>> {
        let mut index = Quadtree::new(self.region, self.config)?;
        for collider in colliders {
            index.insert(collider);
        }

        let results: Vec<CollisionResult<'a, T>> = colliders
            .iter()
            .map(|collider| {
                CollisionGroup::from_index(&index, collider).check_by_bounds::<T>(self.offset)
            })
            .collect();

        let contacts: usize = results.iter().map(|r| r.all().len()).sum();
        debug!(
            colliders = colliders.len(),
            indexed = index.len(),
            nodes = index.node_count(),
            contacts,
            "collision frame"
        );
        Ok(results)
    }
}
