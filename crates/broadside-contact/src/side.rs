//! Contact side classification.

use serde::{Deserialize, Serialize};

use broadside_geom::Rect;
use broadside_types::Scalar;

/// The side of the target a candidate is contacting from.
///
/// Screen-space convention: "Top" means the candidate sits toward
/// smaller y relative to the target's center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

/// Classifies the contact side of `candidate` relative to `target` using
/// the combined-half-extent overlap test, or `None` when the two boxes
/// (inflated by `offset`) do not overlap.
///
/// All comparisons are strict; an exact tie (`wy == hx` or `wy == -hx`)
/// falls to the else branch of its comparison. This asymmetry is a frozen
/// contract: gameplay code has been tuned against it, so it must not be
/// "corrected" to inclusive comparisons.
pub fn classify_by_bounds(target: &Rect, candidate: &Rect, offset: Scalar) -> Option<Side> {
    // Combined half-extents, inflated by the detection margin.
    let w = 0.5 * (target.width + candidate.width) + offset;
    let h = 0.5 * (target.height + candidate.height) + offset;

    let delta = target.center() - candidate.center();
    if delta.x.abs() > w || delta.y.abs() > h {
        return None;
    }

    let wy = w * delta.y;
    let hx = h * delta.x;

    let side = if wy > hx {
        if wy > -hx {
            Side::Top
        } else {
            Side::Right
        }
    } else if wy > -hx {
        Side::Left
    } else {
        Side::Bottom
    };
    Some(side)
}
