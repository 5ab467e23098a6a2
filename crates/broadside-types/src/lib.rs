//! # broadside-types
//!
//! Shared types, error types, and tuning constants for the Broadside
//! 2D collision detection engine.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Broadside crates share.

pub mod constants;
pub mod error;
pub mod scalar;

pub use error::{BroadsideError, BroadsideResult};
pub use scalar::Scalar;
