//! The capability every indexed object must provide.
//!
//! Anything with an axis-aligned bounding box can participate in
//! collision detection; no identity, layer, or ownership semantics are
//! imposed here. The `Any` supertrait exists so type-narrowed retrieval
//! and classification can perform a checked downcast per candidate
//! (exact concrete type, not subtype).

use std::any::Any;

use broadside_geom::Rect;

/// Capability trait for objects that participate in collision detection.
///
/// The bounds returned must stay valid (unchanged) for as long as the
/// object is inserted in a [`Quadtree`](crate::Quadtree); re-insert after
/// mutating. Degenerate (zero-size) bounds are accepted and sink to the
/// coarsest applicable node.
pub trait Collidable: Any {
    /// The object's current axis-aligned bounding box.
    fn collision_bounds(&self) -> Rect;
}

/// Identity comparison for collidables: same object, not equal bounds.
///
/// Compares data-pointer addresses only, so two `&dyn Collidable` created
/// from the same object through different trait-object coercions still
/// compare equal.
#[inline]
pub fn same_collider(a: &dyn Collidable, b: &dyn Collidable) -> bool {
    std::ptr::addr_eq(a as *const dyn Collidable, b as *const dyn Collidable)
}
