//! Prelude for math3d::numerics
//!
//! Re-exports the value types, the `FixedVector` trait (needed to call
//! methods on `Vec2`/`Vec3`/`Vec4`) and the error and config types.

pub use super::config::ToleranceConfig;
pub use super::error::MathError;
pub use super::types::fixed::{Vec2, Vec3, Vec4};
pub use super::types::point::Point;
pub use super::types::traits::FixedVector;
pub use super::types::vector::{standard_basis, unit_vector, zero_vector, Vector};
