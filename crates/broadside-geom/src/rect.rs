//! Axis-aligned rectangle type.
//!
//! `Rect` is the bounding-box currency of the whole engine: colliders
//! expose one, the quad-tree partitions with them, and the classifier
//! compares them. Two predicates carry load-bearing semantics:
//!
//! - [`Rect::overlaps`] requires *positive* overlap area, so zero-size
//!   rectangles overlap nothing. The quad-tree depends on this to sink
//!   degenerate bounds into a node's local bag instead of a quadrant.
//! - [`Rect::contains_point`] is half-open (`[x, x+w) × [y, y+h)`), the
//!   containment convention the point-probe classifier expects.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use broadside_types::{BroadsideError, BroadsideResult, Scalar};

/// An axis-aligned rectangle: top-left corner plus size.
///
/// Width and height are expected to be non-negative; negative or
/// non-finite values are the caller's bug and are only rejected where a
/// rectangle crosses a validated boundary (index construction, scene
/// loading).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of the left edge.
    pub x: Scalar,
    /// Y coordinate of the top edge.
    pub y: Scalar,
    /// Width (>= 0).
    pub width: Scalar,
    /// Height (>= 0).
    pub height: Scalar,
}

impl Rect {
    /// Creates a new rectangle from its top-left corner and size.
    pub const fn new(x: Scalar, y: Scalar, width: Scalar, height: Scalar) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the right edge x coordinate.
    #[inline]
    pub fn right(&self) -> Scalar {
        self.x + self.width
    }

    /// Returns the bottom edge y coordinate.
    #[inline]
    pub fn bottom(&self) -> Scalar {
        self.y + self.height
    }

    /// Returns the center point.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Midpoint of the top edge.
    #[inline]
    pub fn top_center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y)
    }

    /// Midpoint of the bottom edge.
    #[inline]
    pub fn bottom_center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.bottom())
    }

    /// Midpoint of the left edge.
    #[inline]
    pub fn left_center(&self) -> Vec2 {
        Vec2::new(self.x, self.y + self.height * 0.5)
    }

    /// Midpoint of the right edge.
    #[inline]
    pub fn right_center(&self) -> Vec2 {
        Vec2::new(self.right(), self.y + self.height * 0.5)
    }

    /// Tests for positive-area overlap with another rectangle.
    ///
    /// Edge-touching rectangles do *not* overlap, and a zero-width or
    /// zero-height rectangle overlaps nothing — including rectangles
    /// that strictly contain it.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right().min(other.right()) > self.x.max(other.x)
            && self.bottom().min(other.bottom()) > self.y.max(other.y)
    }

    /// Half-open point containment: `[x, x+w) × [y, y+h)`.
    #[inline]
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Validates that this rectangle is a usable region: finite
    /// coordinates and non-negative size.
    pub fn validate(&self) -> BroadsideResult<()> {
        if !(self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()) {
            return Err(BroadsideError::InvalidRegion(format!(
                "Non-finite coordinate in {:?}",
                self
            )));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(BroadsideError::InvalidRegion(format!(
                "Negative size: {} x {}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}
