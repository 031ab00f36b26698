// src/numerics/types/traits.rs
// FixedVector: the shared operation surface of Vec2, Vec3 and Vec4.

use super::vector::{self, Vector};

/// FixedVector is implemented by the named-field vector types.
///
/// An implementor only supplies the conversion to and from [`Vector`]
/// (`to_vector` / `from_vector`). Every other method lifts its operands to a
/// `Vector`, runs the variable-length algorithm and lowers the result back, so
/// the fixed types behave exactly like a `Vector` of the same dimension.
pub trait FixedVector: Copy + Sized {
    /// Number of components.
    const DIMENSION: usize;

    /// Lift to the variable-length representation, in field order.
    fn to_vector(&self) -> Vector;

    /// Lower from the variable-length representation.
    ///
    /// Components past `DIMENSION` are ignored.
    ///
    /// # Panics
    /// If `v` has fewer than `DIMENSION` components. Use `TryFrom<&Vector>`
    /// for a checked conversion.
    fn from_vector(v: &Vector) -> Self;

    fn add(&self, w: &Self) -> Self {
        Self::from_vector(&self.to_vector().add(&w.to_vector()))
    }

    fn sub(&self, w: &Self) -> Self {
        Self::from_vector(&self.to_vector().sub(&w.to_vector()))
    }

    /// Element-wise product, as [`Vector::dot`].
    fn dot(&self, w: &Self) -> Self {
        Self::from_vector(&self.to_vector().dot(&w.to_vector()))
    }

    /// Scalar dot product.
    fn inner_product(&self, w: &Self) -> f64 {
        self.to_vector().inner_product(&w.to_vector())
    }

    fn mul(&self, scalar: f64) -> Self {
        Self::from_vector(&self.to_vector().mul(scalar))
    }

    fn div(&self, scalar: f64) -> Self {
        Self::from_vector(&self.to_vector().div(scalar))
    }

    /// Euclidean norm of the vector.
    fn length(&self) -> f64 {
        self.to_vector().length()
    }

    /// Square of the Euclidean norm of the vector.
    fn length_squared(&self) -> f64 {
        self.to_vector().length_squared()
    }

    /// Step-wise total distance of the vector.
    fn manhattan_distance(&self) -> f64 {
        self.to_vector().manhattan_distance()
    }

    fn is_zero(&self) -> bool {
        self.to_vector().is_zero()
    }

    fn normalize(&self) -> Self {
        Self::from_vector(&self.to_vector().normalize())
    }

    /// Standard basis of this dimension, in field order.
    fn standard_basis() -> Vec<Self> {
        vector::standard_basis(Self::DIMENSION)
            .iter()
            .map(Self::from_vector)
            .collect()
    }

    fn zero_vector() -> Self {
        Self::from_vector(&vector::zero_vector(Self::DIMENSION))
    }

    /// All zeros, as [`vector::unit_vector`].
    fn unit_vector() -> Self {
        Self::from_vector(&vector::unit_vector(Self::DIMENSION))
    }
}
