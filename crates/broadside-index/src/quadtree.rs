//! Recursive quad-tree over axis-aligned bounding boxes.
//!
//! Each node owns a rectangular region and an unordered bag of collider
//! references. Once the bag exceeds `max_objects` (and the recursion
//! ceiling allows), the node splits into four quadrants and redistributes
//! what it can. A collider straddling a split line is inserted into
//! *every* quadrant it touches, so retrieval may return the same collider
//! more than once; callers needing a strict set must de-duplicate by
//! identity. Downstream classification is idempotent per candidate, so
//! the engine deliberately leaves the duplicates in.
//!
//! Objects that match no quadrant — zero-size bounds, bounds lying
//! outside the node, or any box once a split has degenerated to
//! zero-size quadrants — stay in the node's bag permanently and are
//! appended to every retrieval that reaches the node. Correct, not
//! depth-optimal.

use tracing::{debug, trace};

use broadside_geom::Rect;
use broadside_types::BroadsideResult;

use crate::collidable::Collidable;
use crate::config::QuadtreeConfig;

/// Fixed quadrant ordering within a split node.
///
/// Index 0 = top-right, 1 = top-left, 2 = bottom-left, 3 = bottom-right.
const QUADRANT_COUNT: usize = 4;

/// A quad-tree node; the root doubles as the public index handle.
///
/// Holds non-owning references: `Quadtree<'a>` borrows every inserted
/// collider for `'a`, which statically prevents mutating a collider's
/// bounds while it is indexed.
pub struct Quadtree<'a> {
    region: Rect,
    level: u32,
    config: QuadtreeConfig,
    /// Objects stored directly at this node.
    objects: Vec<&'a dyn Collidable>,
    /// Zero or exactly four children; `None` until the node splits.
    children: Option<Box<[Quadtree<'a>; QUADRANT_COUNT]>>,
}

impl<'a> Quadtree<'a> {
    /// Creates an empty index over `region`.
    ///
    /// The region must be finite with non-negative size and the config
    /// thresholds must be at least 1; after construction every index
    /// operation is infallible.
    pub fn new(region: Rect, config: QuadtreeConfig) -> BroadsideResult<Self> {
        region.validate()?;
        config.validate()?;
        Ok(Self::node(region, 0, config))
    }

    /// Internal constructor for child nodes (already-validated inputs).
    fn node(region: Rect, level: u32, config: QuadtreeConfig) -> Self {
        Self {
            region,
            level,
            config,
            objects: Vec::new(),
            children: None,
        }
    }

    /// The rectangular region this node covers.
    pub fn region(&self) -> Rect {
        self.region
    }

    /// Recursion depth of this node (root = 0).
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Whether this node has split into quadrants.
    pub fn is_split(&self) -> bool {
        self.children.is_some()
    }

    /// Regions of the four children, if split. Order: top-right,
    /// top-left, bottom-left, bottom-right.
    pub fn child_regions(&self) -> Option<[Rect; QUADRANT_COUNT]> {
        self.children
            .as_deref()
            .map(|children| [children[0].region, children[1].region, children[2].region, children[3].region])
    }

    /// Total stored references in this subtree.
    ///
    /// A collider inserted into several quadrants counts once per
    /// quadrant, so this can exceed the number of distinct colliders.
    pub fn len(&self) -> usize {
        let local = self.objects.len();
        match self.children.as_deref() {
            Some(children) => local + children.iter().map(Quadtree::len).sum::<usize>(),
            None => local,
        }
    }

    /// True when no references are stored anywhere in the subtree.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of nodes in this subtree (including this one).
    pub fn node_count(&self) -> usize {
        match self.children.as_deref() {
            Some(children) => 1 + children.iter().map(Quadtree::node_count).sum::<usize>(),
            None => 1,
        }
    }

    /// Deepest level present in this subtree.
    pub fn depth(&self) -> u32 {
        match self.children.as_deref() {
            Some(children) => children.iter().map(Quadtree::depth).max().unwrap_or(self.level),
            None => self.level,
        }
    }

    /// Empties every bag and discards all child nodes.
    ///
    /// Safe on an empty tree; the intended per-frame pattern is
    /// `clear()` → `insert()` for every live collider → queries.
    pub fn clear(&mut self) {
        self.objects.clear();
        self.children = None;
    }

    /// Inserts a collider reference.
    ///
    /// Splits this node when its bag exceeds `max_objects` and the
    /// recursion ceiling has not been reached. Colliders whose bounds
    /// touch several quadrants are inserted into each of them.
    pub fn insert(&mut self, collider: &'a dyn Collidable) {
        let bounds = collider.collision_bounds();

        if let Some(children) = self.children.as_deref_mut() {
            let mut matched = false;
            for child in children.iter_mut() {
                if child.region.overlaps(&bounds) {
                    child.insert(collider);
                    matched = true;
                }
            }
            // No quadrant has positive overlap (zero-size or out-of-region
            // bounds): keep it here.
            if !matched {
                self.objects.push(collider);
            }
            return;
        }

        self.objects.push(collider);
        if self.objects.len() > self.config.max_objects && self.level < self.config.max_levels {
            self.split();
        }
    }

    /// Splits into four quadrants and redistributes the bag.
    ///
    /// Objects matching no quadrant stay in this node's bag permanently.
    fn split(&mut self) {
        debug!(
            level = self.level,
            objects = self.objects.len(),
            region = ?self.region,
            "splitting quad-tree node"
        );

        let mut children = self
            .quadrant_regions()
            .map(|region| Quadtree::node(region, self.level + 1, self.config));

        let bag = std::mem::take(&mut self.objects);
        for object in bag {
            let bounds = object.collision_bounds();
            let mut matched = false;
            for child in children.iter_mut() {
                if child.region.overlaps(&bounds) {
                    child.insert(object);
                    matched = true;
                }
            }
            if !matched {
                self.objects.push(object);
            }
        }

        self.children = Some(Box::new(children));
    }

    /// The four quadrant regions this node would split into.
    ///
    /// Widths/heights are halved with truncation toward zero; the right
    /// and bottom quadrants absorb the remainder so the four regions tile
    /// the parent exactly.
    fn quadrant_regions(&self) -> [Rect; QUADRANT_COUNT] {
        let sub_w = (self.region.width * 0.5).floor();
        let sub_h = (self.region.height * 0.5).floor();
        let rem_w = self.region.width - sub_w;
        let rem_h = self.region.height - sub_h;
        let mid_x = self.region.x + sub_w;
        let mid_y = self.region.y + sub_h;

        [
            Rect::new(mid_x, self.region.y, rem_w, sub_h), // 0: top-right
            Rect::new(self.region.x, self.region.y, sub_w, sub_h), // 1: top-left
            Rect::new(self.region.x, mid_y, sub_w, rem_h), // 2: bottom-left
            Rect::new(mid_x, mid_y, rem_w, rem_h),         // 3: bottom-right
        ]
    }

    /// Collects every collider whose bounds *could* overlap the target's.
    ///
    /// Broad phase: the returned list is a superset of the true overlaps
    /// (never a false negative for same-geometry insertions) and may
    /// contain duplicates for straddling colliders. The list includes the
    /// target itself if it was inserted; classification removes it by
    /// identity.
    pub fn retrieve(&self, target: &dyn Collidable) -> Vec<&'a dyn Collidable> {
        let bounds = target.collision_bounds();
        let mut candidates = Vec::new();
        self.collect(&bounds, &mut candidates);
        trace!(candidates = candidates.len(), query = ?bounds, "broad-phase retrieval");
        candidates
    }

    /// Same traversal as [`retrieve`](Self::retrieve), keeping only
    /// candidates of the exact concrete type `T`.
    pub fn retrieve_by_type<T: Collidable>(&self, target: &dyn Collidable) -> Vec<&'a dyn Collidable> {
        self.retrieve(target)
            .into_iter()
            .filter(|candidate| {
                let any: &dyn std::any::Any = *candidate;
                any.is::<T>()
            })
            .collect()
    }

    fn collect(&self, bounds: &Rect, out: &mut Vec<&'a dyn Collidable>) {
        if let Some(children) = self.children.as_deref() {
            for child in children.iter() {
                if child.region.overlaps(bounds) {
                    child.collect(bounds, out);
                }
            }
        }
        // The local bag holds objects that straddle quadrants (or never
        // redistributed), so it is appended unconditionally.
        out.extend(self.objects.iter().copied());
    }
}
