//! Integration tests for broadside-contact.

use broadside_contact::{CollisionGroup, CollisionPipeline, CollisionResult, Side};
use broadside_geom::Rect;
use broadside_index::{Collidable, Quadtree, QuadtreeConfig};

struct Block {
    bounds: Rect,
}

impl Block {
    fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            bounds: Rect::new(x, y, w, h),
        }
    }
}

impl Collidable for Block {
    fn collision_bounds(&self) -> Rect {
        self.bounds
    }
}

struct Spike {
    bounds: Rect,
}

impl Collidable for Spike {
    fn collision_bounds(&self) -> Rect {
        self.bounds
    }
}

/// Builds a group for `target` against `others` without an index.
fn group<'a>(target: &'a Block, others: &[&'a Block]) -> CollisionGroup<'a> {
    let candidates: Vec<&'a dyn Collidable> = others.iter().map(|&b| b as &dyn Collidable).collect();
    CollisionGroup::new(target, candidates)
}

// ─── Bounds Method: Side Classification ───────────────────────

#[test]
fn bounds_classifies_candidate_above_as_top() {
    // Candidate overlapping from above: dy > 0, wy > hx and wy > -hx.
    let target = Block::new(0.0, 0.0, 10.0, 10.0);
    let above = Block::new(0.0, -8.0, 10.0, 10.0);
    let result = group(&target, &[&above]).check_by_bounds::<Block>(0.0);
    assert_eq!(result.top().len(), 1);
    assert!(!result.bottom_exists() && !result.left_exists() && !result.right_exists());
}

#[test]
fn bounds_classifies_candidate_below_as_bottom() {
    let target = Block::new(0.0, 0.0, 10.0, 10.0);
    let below = Block::new(0.0, 8.0, 10.0, 10.0);
    let result = group(&target, &[&below]).check_by_bounds::<Block>(0.0);
    assert_eq!(result.bottom().len(), 1);
}

#[test]
fn bounds_classifies_candidate_left_as_left() {
    let target = Block::new(0.0, 0.0, 10.0, 10.0);
    let left = Block::new(-8.0, 0.0, 10.0, 10.0);
    let result = group(&target, &[&left]).check_by_bounds::<Block>(0.0);
    assert_eq!(result.left().len(), 1);
}

#[test]
fn bounds_classifies_candidate_right_as_right() {
    let target = Block::new(0.0, 0.0, 10.0, 10.0);
    let right = Block::new(8.0, 0.0, 10.0, 10.0);
    let result = group(&target, &[&right]).check_by_bounds::<Block>(0.0);
    assert_eq!(result.right().len(), 1);
}

#[test]
fn bounds_skips_non_overlapping_candidate() {
    let target = Block::new(0.0, 0.0, 10.0, 10.0);
    let far = Block::new(30.0, 30.0, 10.0, 10.0);
    let result = group(&target, &[&far]).check_by_bounds::<Block>(0.0);
    assert!(!result.any_exists());
}

#[test]
fn bounds_buckets_are_mutually_exclusive() {
    // Whatever the relative position, a classified candidate appears in
    // exactly one bucket.
    let target = Block::new(0.0, 0.0, 10.0, 10.0);
    let positions = [
        (3.0, -7.0),
        (-7.0, 3.0),
        (7.0, -3.0),
        (-3.0, 7.0),
        (6.0, 6.0),
        (-6.0, -6.0),
    ];
    for (x, y) in positions {
        let candidate = Block::new(x, y, 10.0, 10.0);
        let result = group(&target, &[&candidate]).check_by_bounds::<Block>(0.0);
        let buckets = [
            result.top().len(),
            result.bottom().len(),
            result.left().len(),
            result.right().len(),
        ];
        assert_eq!(
            buckets.iter().sum::<usize>(),
            1,
            "candidate at ({x},{y}) landed in {buckets:?}"
        );
    }
}

// ─── Bounds Method: Tie-Breaks (frozen contract) ──────────────

#[test]
fn exact_diagonal_ties_never_classify_top() {
    // Corner-to-corner contact gives wy == ±hx exactly; every strict
    // comparison ties and falls to its else branch.
    let target = Block::new(0.0, 0.0, 10.0, 10.0);

    // Top-left corner: wy == hx → else of the first comparison → Left.
    let tl = Block::new(-10.0, -10.0, 10.0, 10.0);
    let result = group(&target, &[&tl]).check_by_bounds::<Block>(0.0);
    assert_eq!(result.left().len(), 1);

    // Top-right corner: wy == -hx → else of the nested comparison → Right.
    let tr = Block::new(10.0, -10.0, 10.0, 10.0);
    let result = group(&target, &[&tr]).check_by_bounds::<Block>(0.0);
    assert_eq!(result.right().len(), 1);

    // Bottom corners both resolve to Bottom.
    let bl = Block::new(-10.0, 10.0, 10.0, 10.0);
    let result = group(&target, &[&bl]).check_by_bounds::<Block>(0.0);
    assert_eq!(result.bottom().len(), 1);

    let br = Block::new(10.0, 10.0, 10.0, 10.0);
    let result = group(&target, &[&br]).check_by_bounds::<Block>(0.0);
    assert_eq!(result.bottom().len(), 1);
}

#[test]
fn concentric_boxes_classify_bottom() {
    // dx == dy == 0: both comparisons tie, falling through to Bottom.
    let target = Block::new(0.0, 0.0, 10.0, 10.0);
    let cover = Block::new(0.0, 0.0, 10.0, 10.0);
    let result = group(&target, &[&cover]).check_by_bounds::<Block>(0.0);
    assert_eq!(result.bottom().len(), 1);
}

// ─── Bounds Method: Offsets, Identity, Types ──────────────────

#[test]
fn offset_widens_bounds_detection() {
    // Separated by 2 world units: invisible at offset 0, Top at offset 2.
    let target = Block::new(0.0, 0.0, 10.0, 10.0);
    let above = Block::new(0.0, -12.0, 10.0, 10.0);

    let result = group(&target, &[&above]).check_by_bounds::<Block>(0.0);
    assert!(!result.any_exists());

    let result = group(&target, &[&above]).check_by_bounds::<Block>(2.0);
    assert_eq!(result.top().len(), 1);
}

#[test]
fn target_is_excluded_by_identity() {
    let target = Block::new(0.0, 0.0, 10.0, 10.0);
    let candidates: Vec<&dyn Collidable> = vec![&target];
    let result = CollisionGroup::new(&target, candidates).check_by_bounds::<Block>(0.0);
    assert!(!result.any_exists());
}

#[test]
fn duplicate_candidates_are_not_deduplicated() {
    // The broad phase can hand back the same straddling collider twice;
    // classification preserves that.
    let target = Block::new(0.0, 0.0, 10.0, 10.0);
    let above = Block::new(0.0, -8.0, 10.0, 10.0);
    let candidates: Vec<&dyn Collidable> = vec![&above, &above];
    let result = CollisionGroup::new(&target, candidates).check_by_bounds::<Block>(0.0);
    assert_eq!(result.top().len(), 2);
    assert!(std::ptr::eq(result.top()[0], result.top()[1]));
}

#[test]
fn classification_filters_by_exact_type() {
    let target = Block::new(0.0, 0.0, 10.0, 10.0);
    let block = Block::new(0.0, -8.0, 10.0, 10.0);
    let spike = Spike {
        bounds: Rect::new(8.0, 0.0, 10.0, 10.0),
    };
    let candidates: Vec<&dyn Collidable> = vec![&block, &spike];
    let g = CollisionGroup::new(&target, candidates);

    let blocks = g.check_by_bounds::<Block>(0.0);
    assert_eq!(blocks.top().len(), 1);
    assert!(!blocks.right_exists());

    let spikes = g.check_by_bounds::<Spike>(0.0);
    assert_eq!(spikes.right().len(), 1);
    assert!(!spikes.top_exists());
}

// ─── Point-Probe Method ───────────────────────────────────────

#[test]
fn point_probe_detects_top_edge_contact() {
    // Candidate covering (0,-5,10,10) contains the top probe (5,0) and
    // nothing else (left probe (0,5) misses under half-open containment).
    let target = Block::new(0.0, 0.0, 10.0, 10.0);
    let above = Block::new(0.0, -5.0, 10.0, 10.0);
    let result = group(&target, &[&above]).check_by_points::<Block>(0.0);
    assert_eq!(result.top().len(), 1);
    assert!(!result.bottom_exists() && !result.left_exists() && !result.right_exists());
}

#[test]
fn point_probe_enclosing_candidate_hits_all_four() {
    let target = Block::new(0.0, 0.0, 10.0, 10.0);
    let room = Block::new(-10.0, -10.0, 30.0, 30.0);
    let result = group(&target, &[&room]).check_by_points::<Block>(0.0);
    assert!(result.all_exists());
    assert_eq!(result.all().len(), 4);
}

#[test]
fn point_probe_offset_reaches_across_gaps() {
    // Edge-touching neighbor: the zero-offset probe sits exactly on the
    // shared edge and lands outside the half-open candidate box.
    let target = Block::new(0.0, 0.0, 10.0, 10.0);
    let above = Block::new(0.0, -10.0, 10.0, 10.0);

    let result = group(&target, &[&above]).check_by_points::<Block>(0.0);
    assert!(!result.top_exists());

    let result = group(&target, &[&above]).check_by_points::<Block>(2.0);
    assert_eq!(result.top().len(), 1);
}

#[test]
fn point_probe_misses_bulk_overlap_off_axis() {
    // Corner overlap touches no edge midpoint: the two methods are
    // expected to disagree here (bounds method would classify it).
    let target = Block::new(0.0, 0.0, 10.0, 10.0);
    let corner = Block::new(7.0, -7.0, 10.0, 10.0);
    let by_points = group(&target, &[&corner]).check_by_points::<Block>(0.0);
    assert!(!by_points.any_exists());

    let by_bounds = group(&target, &[&corner]).check_by_bounds::<Block>(0.0);
    assert!(by_bounds.any_exists());
}

// ─── Result Views ─────────────────────────────────────────────

#[test]
fn all_concatenates_in_side_order() {
    let target = Block::new(0.0, 0.0, 10.0, 10.0);
    let above = Block::new(0.0, -8.0, 10.0, 10.0);
    let below = Block::new(0.0, 8.0, 10.0, 10.0);
    let left = Block::new(-8.0, 0.0, 10.0, 10.0);
    let right = Block::new(8.0, 0.0, 10.0, 10.0);
    let result = group(&target, &[&above, &below, &left, &right]).check_by_bounds::<Block>(0.0);

    let all = result.all();
    assert_eq!(all.len(), 4);
    // Top → Bottom → Left → Right.
    assert!(std::ptr::eq(all[0], &above));
    assert!(std::ptr::eq(all[1], &below));
    assert!(std::ptr::eq(all[2], &left));
    assert!(std::ptr::eq(all[3], &right));
}

#[test]
fn all_exists_requires_every_bucket() {
    let target = Block::new(0.0, 0.0, 10.0, 10.0);
    let above = Block::new(0.0, -8.0, 10.0, 10.0);
    let below = Block::new(0.0, 8.0, 10.0, 10.0);
    let left = Block::new(-8.0, 0.0, 10.0, 10.0);
    let right = Block::new(8.0, 0.0, 10.0, 10.0);

    let full = group(&target, &[&above, &below, &left, &right]).check_by_bounds::<Block>(0.0);
    assert!(full.all_exists());

    // Dropping any single side flips it to false.
    let missing_right = group(&target, &[&above, &below, &left]).check_by_bounds::<Block>(0.0);
    assert!(missing_right.any_exists());
    assert!(!missing_right.all_exists());
}

#[test]
fn empty_result_has_all_buckets_preallocated() {
    let result: CollisionResult<Block> = CollisionResult::new();
    assert!(result.top().is_empty());
    assert!(result.bottom().is_empty());
    assert!(result.left().is_empty());
    assert!(result.right().is_empty());
    assert!(!result.any_exists());
    assert!(!result.all_exists());
}

// ─── Aggregation ──────────────────────────────────────────────

#[test]
fn to_generic_preserves_identity_and_order() {
    let target = Block::new(0.0, 0.0, 10.0, 10.0);
    let a = Block::new(0.0, -8.0, 10.0, 10.0);
    let b = Block::new(3.0, -8.5, 10.0, 10.0);
    let typed = group(&target, &[&a, &b]).check_by_bounds::<Block>(0.0);
    assert_eq!(typed.top().len(), 2);

    let generic = typed.to_generic();
    assert_eq!(generic.top().len(), 2);
    assert!(std::ptr::addr_eq(
        generic.top()[0] as *const dyn Collidable,
        typed.top()[0] as *const Block
    ));
    assert!(std::ptr::addr_eq(
        generic.top()[1] as *const dyn Collidable,
        typed.top()[1] as *const Block
    ));
}

#[test]
fn combine_single_result_is_identity() {
    let target = Block::new(0.0, 0.0, 10.0, 10.0);
    let above = Block::new(0.0, -8.0, 10.0, 10.0);
    let left = Block::new(-8.0, 0.0, 10.0, 10.0);

    let make = || group(&target, &[&above, &left]).check_by_bounds::<Block>(0.0).to_generic();
    let combined = CollisionResult::combine([make()]);
    let original = make();

    assert_eq!(combined.top().len(), original.top().len());
    assert_eq!(combined.left().len(), original.left().len());
    assert!(std::ptr::addr_eq(
        combined.top()[0] as *const dyn Collidable,
        original.top()[0] as *const dyn Collidable
    ));
}

#[test]
fn combine_concatenates_in_input_order() {
    let target = Block::new(0.0, 0.0, 10.0, 10.0);
    let block = Block::new(0.0, -8.0, 10.0, 10.0);
    let spike = Spike {
        bounds: Rect::new(1.0, -8.0, 10.0, 10.0),
    };
    let candidates: Vec<&dyn Collidable> = vec![&block, &spike];
    let g = CollisionGroup::new(&target, candidates);

    // Per-type sweep, merged back into one generic result.
    let blocks = g.check_by_bounds::<Block>(0.0).to_generic();
    let spikes = g.check_by_bounds::<Spike>(0.0).to_generic();
    let merged = CollisionResult::combine([blocks, spikes]);

    assert_eq!(merged.top().len(), 2);
    assert!(std::ptr::addr_eq(
        merged.top()[0] as *const dyn Collidable,
        &block as *const Block
    ));
    assert!(std::ptr::addr_eq(
        merged.top()[1] as *const dyn Collidable,
        &spike as *const Spike
    ));
}

// ─── Index Integration ────────────────────────────────────────

#[test]
fn group_from_index_classifies_neighbors() {
    let mut tree = Quadtree::new(Rect::new(-50.0, -50.0, 100.0, 100.0), QuadtreeConfig::default())
        .unwrap();
    let target = Block::new(0.0, 0.0, 10.0, 10.0);
    let above = Block::new(0.0, -8.0, 10.0, 10.0);
    let far = Block::new(40.0, 40.0, 5.0, 5.0);
    tree.insert(&target);
    tree.insert(&above);
    tree.insert(&far);

    let result = CollisionGroup::from_index(&tree, &target).check_by_bounds::<Block>(0.0);
    assert_eq!(result.top().len(), 1);
    assert!(std::ptr::eq(result.top()[0], &above));
    assert_eq!(result.all().len(), 1);
}

#[test]
fn group_from_index_by_type_narrows_candidates() {
    let mut tree = Quadtree::new(Rect::new(-50.0, -50.0, 100.0, 100.0), QuadtreeConfig::default())
        .unwrap();
    let target = Block::new(0.0, 0.0, 10.0, 10.0);
    let spike = Spike {
        bounds: Rect::new(8.0, 0.0, 10.0, 10.0),
    };
    let block = Block::new(0.0, -8.0, 10.0, 10.0);
    tree.insert(&target);
    tree.insert(&spike);
    tree.insert(&block);

    let g = CollisionGroup::from_index_by_type::<Spike>(&tree, &target);
    assert_eq!(g.candidates().len(), 1);
    let result = g.check_by_bounds::<Spike>(0.0);
    assert_eq!(result.right().len(), 1);
}

// ─── Pipeline ─────────────────────────────────────────────────

#[test]
fn pipeline_classifies_a_frame() {
    let pipeline = CollisionPipeline::new(
        Rect::new(-50.0, -50.0, 100.0, 100.0),
        QuadtreeConfig::default(),
    )
    .unwrap();

    // Three blocks in a row, each overlapping its neighbor.
    let row = [
        Block::new(0.0, 0.0, 10.0, 10.0),
        Block::new(8.0, 0.0, 10.0, 10.0),
        Block::new(16.0, 0.0, 10.0, 10.0),
    ];
    let results = pipeline.classify_frame(&row).unwrap();
    assert_eq!(results.len(), 3);

    // Middle block touches one on each horizontal side.
    assert!(results[1].left_exists());
    assert!(results[1].right_exists());
    assert!(!results[1].top_exists());
    assert_eq!(results[0].right().len(), 1);
    assert_eq!(results[2].left().len(), 1);
}

#[test]
fn pipeline_rejects_bad_region() {
    let result = CollisionPipeline::new(Rect::new(0.0, 0.0, f32::INFINITY, 10.0), QuadtreeConfig::default());
    assert!(result.is_err());
}

// ─── Side Serde ───────────────────────────────────────────────

#[test]
fn side_roundtrips_through_json() {
    let json = serde_json::to_string(&Side::Top).unwrap();
    let back: Side = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Side::Top);
}
