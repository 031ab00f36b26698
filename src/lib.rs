//! # math3d - points and vectors over f64
//!
//! Small vector-math toolkit:
//!
//! - [`Vector`]: variable-length vector with arithmetic and norms
//! - [`Vec2`], [`Vec3`], [`Vec4`]: named-field vectors sharing the same
//!   operation set through [`FixedVector`]
//! - [`Point`]: 3D coordinate with distance, slope and line generation
//!
//! ## Quick Start
//!
//! ```rust
//! use math3d::prelude::*;
//!
//! let v = math3d::vector![3.0, 0.0, 4.0];
//! assert_eq!(v.length(), 5.0);
//! assert!(v.normalize().is_normalized(&ToleranceConfig::default()));
//!
//! let a = Vec2::new(1.0, 2.0);
//! assert_eq!(a.add(&Vec2::new(2.0, 2.0)), Vec2::new(3.0, 4.0));
//!
//! let line = Point::ORIGIN.point_slope(&Point::new(2.0, 2.0, 2.0));
//! assert_eq!(line(0.5), Point::new(1.0, 1.0, 1.0));
//! ```
//!
//! A few names keep their historical behavior: [`Vector::dot`] is the
//! element-wise product (see [`Vector::inner_product`] for the scalar),
//! [`unit_vector`] returns zeros, and [`Point::slope`] returns its ratios in
//! z, y, x order.

pub mod numerics;

pub use numerics::config::ToleranceConfig;
pub use numerics::error::MathError;
pub use numerics::prelude;
pub use numerics::types::fixed::{Vec2, Vec3, Vec4};
pub use numerics::types::point::Point;
pub use numerics::types::traits::FixedVector;
pub use numerics::types::vector::{standard_basis, unit_vector, zero_vector, Vector};

/// Creates a [`Vector`] from a list of components, like `vec!`.
///
/// ```
/// let v = math3d::vector![1.0, 2.0];
/// assert_eq!(v.len(), 2);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::Vector::default()
    };
    ($($component:expr),+ $(,)?) => {
        $crate::Vector::from(::std::vec![$($component),+])
    };
}
