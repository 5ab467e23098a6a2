//! # broadside-geom
//!
//! 2D geometry primitives for the Broadside collision engine.
//!
//! Provides:
//! - Re-exports of `glam` 2D types (`Vec2`) as the canonical vector type
//! - `Rect`, the axis-aligned rectangle every collider exposes
//! - Overlap/containment predicates with the exact semantics the index
//!   and classifier rely on (positive-area overlap, half-open containment)
//!
//! Coordinate convention: top-left origin, +x right, +y down (screen
//! space). "Top" therefore means smaller y.

pub mod rect;

// Re-export glam types as the canonical math types for Broadside.
pub use glam::Vec2;
pub use rect::Rect;
