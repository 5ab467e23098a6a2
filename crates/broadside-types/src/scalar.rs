//! Scalar type alias for the engine.
//!
//! Using `f32` throughout: collider bounds come from screen/world-space
//! game coordinates where single precision is plenty. The alias makes it
//! easy to experiment with `f64` if a host application needs it.

/// The floating-point type used throughout the engine.
pub type Scalar = f32;
