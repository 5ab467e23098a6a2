//! Classified collision results.
//!
//! A `CollisionResult` holds four ordered buckets of collider references,
//! one per contact side. Results are built by the classifier and are
//! read-only afterwards; the only way to merge results from separate
//! classification calls is [`CollisionResult::combine`].

use std::fmt;

use broadside_index::Collidable;

use crate::side::Side;

/// Colliders bucketed by the side of the target they contact.
///
/// `T` is the concrete collider type the classification was narrowed to;
/// the default `dyn Collidable` is the capability-typed form used for
/// aggregation across types.
pub struct CollisionResult<'a, T: ?Sized = dyn Collidable> {
    top: Vec<&'a T>,
    bottom: Vec<&'a T>,
    left: Vec<&'a T>,
    right: Vec<&'a T>,
}

impl<'a, T: ?Sized> CollisionResult<'a, T> {
    /// Creates a result with all four buckets pre-allocated empty.
    pub fn new() -> Self {
        Self {
            top: Vec::new(),
            bottom: Vec::new(),
            left: Vec::new(),
            right: Vec::new(),
        }
    }

    /// Appends a collider to one bucket, preserving insertion order.
    pub(crate) fn push(&mut self, side: Side, collider: &'a T) {
        match side {
            Side::Top => self.top.push(collider),
            Side::Bottom => self.bottom.push(collider),
            Side::Left => self.left.push(collider),
            Side::Right => self.right.push(collider),
        }
    }

    /// Colliders contacting from above.
    pub fn top(&self) -> &[&'a T] {
        &self.top
    }

    /// Colliders contacting from below.
    pub fn bottom(&self) -> &[&'a T] {
        &self.bottom
    }

    /// Colliders contacting from the left.
    pub fn left(&self) -> &[&'a T] {
        &self.left
    }

    /// Colliders contacting from the right.
    pub fn right(&self) -> &[&'a T] {
        &self.right
    }

    /// One bucket, selected by side.
    pub fn side(&self, side: Side) -> &[&'a T] {
        match side {
            Side::Top => &self.top,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// All four buckets concatenated, Top → Bottom → Left → Right.
    pub fn all(&self) -> Vec<&'a T> {
        let mut out =
            Vec::with_capacity(self.top.len() + self.bottom.len() + self.left.len() + self.right.len());
        out.extend_from_slice(&self.top);
        out.extend_from_slice(&self.bottom);
        out.extend_from_slice(&self.left);
        out.extend_from_slice(&self.right);
        out
    }

    /// Whether anything contacts from above.
    pub fn top_exists(&self) -> bool {
        !self.top.is_empty()
    }

    /// Whether anything contacts from below.
    pub fn bottom_exists(&self) -> bool {
        !self.bottom.is_empty()
    }

    /// Whether anything contacts from the left.
    pub fn left_exists(&self) -> bool {
        !self.left.is_empty()
    }

    /// Whether anything contacts from the right.
    pub fn right_exists(&self) -> bool {
        !self.right.is_empty()
    }

    /// Whether any bucket is non-empty.
    pub fn any_exists(&self) -> bool {
        self.top_exists() || self.bottom_exists() || self.left_exists() || self.right_exists()
    }

    /// Whether every bucket is non-empty (contact on all four sides).
    pub fn all_exists(&self) -> bool {
        self.top_exists() && self.bottom_exists() && self.left_exists() && self.right_exists()
    }
}

impl<'a, T: ?Sized> Default for CollisionResult<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: ?Sized> fmt::Debug for CollisionResult<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollisionResult")
            .field("top", &self.top.len())
            .field("bottom", &self.bottom.len())
            .field("left", &self.left.len())
            .field("right", &self.right.len())
            .finish()
    }
}

impl<'a, T: Collidable> CollisionResult<'a, T> {
    /// Widens a typed result into the capability-typed form.
    ///
    /// Identity- and order-preserving: each bucket's references are
    /// re-wrapped as `&dyn Collidable`, nothing is copied or filtered.
    pub fn to_generic(&self) -> CollisionResult<'a, dyn Collidable> {
        fn widen<'a, T: Collidable>(bucket: &[&'a T]) -> Vec<&'a dyn Collidable> {
            bucket.iter().map(|&c| c as &dyn Collidable).collect()
        }
        CollisionResult {
            top: widen(&self.top),
            bottom: widen(&self.bottom),
            left: widen(&self.left),
            right: widen(&self.right),
        }
    }
}

impl<'a> CollisionResult<'a, dyn Collidable> {
    /// Concatenates bucket-wise across any number of generic results.
    ///
    /// Input order is preserved within each bucket and no de-duplication
    /// is performed; a collider classified in several inputs appears once
    /// per input.
    pub fn combine<I>(results: I) -> Self
    where
        I: IntoIterator<Item = CollisionResult<'a, dyn Collidable>>,
    {
        let mut merged = Self::new();
        for result in results {
            merged.top.extend(result.top);
            merged.bottom.extend(result.bottom);
            merged.left.extend(result.left);
            merged.right.extend(result.right);
        }
        merged
    }
}
