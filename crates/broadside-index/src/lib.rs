//! # broadside-index
//!
//! Broad-phase spatial indexing for the Broadside collision engine.
//!
//! The index is a quad-tree over axis-aligned bounding boxes: a bounded
//! region is recursively subdivided into four quadrants once a node's
//! occupancy exceeds a threshold, and retrieval walks only the quadrants
//! a query box touches. Results are a *superset* of true overlaps —
//! false positives (and duplicates, for boxes straddling a split line)
//! are expected and filtered by the narrow phase in `broadside-contact`.
//!
//! The index owns nothing: it stores non-owning `&dyn Collidable`
//! references, and the borrow checker keeps the colliders immutable for
//! as long as they are indexed.

pub mod collidable;
pub mod config;
pub mod quadtree;

pub use collidable::{same_collider, Collidable};
pub use config::QuadtreeConfig;
pub use quadtree::Quadtree;
