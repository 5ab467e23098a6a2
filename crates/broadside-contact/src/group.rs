//! The target/candidates pairing the classifier operates on.
//!
//! A `CollisionGroup` is transient: one target collider plus the
//! candidate list the broad phase produced for it. It holds no state
//! beyond the current call; classification methods can be invoked any
//! number of times with different type parameters or offsets.

use tracing::trace;

use broadside_index::{same_collider, Collidable, Quadtree};
use broadside_types::Scalar;

use crate::result::CollisionResult;
use crate::side::{classify_by_bounds, Side};

/// One target collider paired with its broad-phase candidates.
pub struct CollisionGroup<'a> {
    target: &'a dyn Collidable,
    candidates: Vec<&'a dyn Collidable>,
}

impl<'a> CollisionGroup<'a> {
    /// Pairs a target with an already-retrieved candidate list.
    pub fn new(target: &'a dyn Collidable, candidates: Vec<&'a dyn Collidable>) -> Self {
        Self { target, candidates }
    }

    /// Retrieves the target's candidates from `index` and wraps them.
    pub fn from_index(index: &Quadtree<'a>, target: &'a dyn Collidable) -> Self {
        Self::new(target, index.retrieve(target))
    }

    /// Type-narrowed retrieval: only candidates of exact concrete type
    /// `T` enter the group.
    pub fn from_index_by_type<T: Collidable>(
        index: &Quadtree<'a>,
        target: &'a dyn Collidable,
    ) -> Self {
        Self::new(target, index.retrieve_by_type::<T>(target))
    }

    /// The target collider.
    pub fn target(&self) -> &'a dyn Collidable {
        self.target
    }

    /// The raw broad-phase candidates (may contain duplicates and the
    /// target itself).
    pub fn candidates(&self) -> &[&'a dyn Collidable] {
        &self.candidates
    }

    /// Bounds-overlap classification: buckets each contacting candidate
    /// of type `T` by the side carrying the bulk of the overlap.
    ///
    /// `offset` inflates the combined half-extents, widening what counts
    /// as contact. Each candidate lands in at most one bucket; the target
    /// itself is excluded by identity. Non-overlapping candidates (broad
    /// phase false positives) are dropped here.
    pub fn check_by_bounds<T: Collidable>(&self, offset: Scalar) -> CollisionResult<'a, T> {
        let target_bounds = self.target.collision_bounds();
        let mut result = CollisionResult::new();

        for candidate in self.typed_candidates::<T>() {
            if let Some(side) = classify_by_bounds(&target_bounds, &candidate.collision_bounds(), offset) {
                result.push(side, candidate);
            }
        }

        trace!(
            candidates = self.candidates.len(),
            result = ?result,
            "bounds classification"
        );
        result
    }

    /// Point-probe classification: tests which of the target's four edge
    /// probes each candidate of type `T` contains.
    ///
    /// Probes sit at the edge midpoints, pushed outward by `offset` along
    /// the edge normal. The tests are independent, so a candidate can
    /// land in zero buckets or up to all four (a large candidate
    /// enclosing the target contains every probe).
    pub fn check_by_points<T: Collidable>(&self, offset: Scalar) -> CollisionResult<'a, T> {
        let target_bounds = self.target.collision_bounds();

        let mut top_probe = target_bounds.top_center();
        top_probe.y -= offset;
        let mut bottom_probe = target_bounds.bottom_center();
        bottom_probe.y += offset;
        let mut left_probe = target_bounds.left_center();
        left_probe.x -= offset;
        let mut right_probe = target_bounds.right_center();
        right_probe.x += offset;

        let mut result = CollisionResult::new();
        for candidate in self.typed_candidates::<T>() {
            let bounds = candidate.collision_bounds();
            if bounds.contains_point(top_probe) {
                result.push(Side::Top, candidate);
            }
            if bounds.contains_point(bottom_probe) {
                result.push(Side::Bottom, candidate);
            }
            if bounds.contains_point(left_probe) {
                result.push(Side::Left, candidate);
            }
            if bounds.contains_point(right_probe) {
                result.push(Side::Right, candidate);
            }
        }

        trace!(
            candidates = self.candidates.len(),
            result = ?result,
            "point-probe classification"
        );
        result
    }

    /// Candidates downcast to `T`, with the target removed by identity.
    fn typed_candidates<T: Collidable>(&self) -> impl Iterator<Item = &'a T> + '_ {
        let target = self.target;
        self.candidates.iter().filter_map(move |&candidate| {
            if same_collider(candidate, target) {
                return None;
            }
            let any: &dyn std::any::Any = candidate;
            any.downcast_ref::<T>()
        })
    }
}
