//! # broadside-contact
//!
//! Narrow phase of the Broadside collision engine: takes the candidate
//! list the broad-phase index produced for one target collider and
//! classifies which *side* (top/bottom/left/right) each touching
//! candidate contacts the target from.
//!
//! Two classification methods are offered, and they intentionally do not
//! agree in general:
//! - bounds-overlap ([`CollisionGroup::check_by_bounds`]) answers "which
//!   side carries the bulk of the overlap" — one bucket per candidate;
//! - point-probe ([`CollisionGroup::check_by_points`]) answers "is
//!   something touching this edge" — zero to four buckets per candidate.

pub mod group;
pub mod pipeline;
pub mod result;
pub mod side;

pub use group::CollisionGroup;
pub use pipeline::CollisionPipeline;
pub use result::CollisionResult;
pub use side::Side;
