//! Engine defaults and tuning constants.

/// Default number of objects a quad-tree node holds before splitting.
pub const DEFAULT_MAX_OBJECTS: usize = 10;

/// Default recursion ceiling for the quad-tree. Nodes at this level stop
/// splitting and grow their bags instead.
pub const DEFAULT_MAX_LEVELS: u32 = 5;

/// Epsilon for floating-point comparisons in tests and validation.
pub const EPSILON: f32 = 1.0e-6;
