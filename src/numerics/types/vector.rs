// src/numerics/types/vector.rs
// Variable-length Vector over f64. The fixed-size types delegate here.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::numerics::config::ToleranceConfig;
use crate::numerics::error::MathError;

/// Vector is an ordered sequence of `f64` components with length (magnitude)
/// and direction.
///
/// The dimension is the number of components given at construction. Every
/// operation returns a new vector; operands are never modified.
///
/// Binary operations require both operands to have the same dimension. The
/// plain forms (`add`, `sub`, `dot`, `inner_product` and the operators) panic
/// on a mismatch; the `checked_*` forms return [`MathError::DimensionMismatch`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector(Vec<f64>);

/// Returns the `n` standard basis vectors of dimension `n`.
///
/// Vector `i` has `1.0` at index `i` and `0.0` everywhere else.
pub fn standard_basis(n: usize) -> Vec<Vector> {
    (0..n)
        .map(|i| Vector((0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect()))
        .collect()
}

/// Returns a vector of dimension `n` filled with zeros.
///
/// Despite its name this is not a unit-length vector: it is identical to
/// [`zero_vector`]. For the unit vector along axis `i` use
/// `standard_basis(n)[i]`.
pub fn unit_vector(n: usize) -> Vector {
    Vector(vec![0.0; n])
}

/// Returns the all-zero vector of dimension `n`.
pub fn zero_vector(n: usize) -> Vector {
    Vector(vec![0.0; n])
}

#[allow(clippy::should_implement_trait)]
impl Vector {
    /// Construct a vector from the given components.
    pub fn new(components: impl IntoIterator<Item = f64>) -> Self {
        Self(components.into_iter().collect())
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> core::slice::Iter<'_, f64> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    /// Element-wise sum.
    ///
    /// # Panics
    /// If `w` has a different dimension.
    pub fn add(&self, w: &Vector) -> Vector {
        self.zip_with(w, "Vector::add", |a, b| a + b)
    }

    /// Element-wise difference.
    ///
    /// # Panics
    /// If `w` has a different dimension.
    pub fn sub(&self, w: &Vector) -> Vector {
        self.zip_with(w, "Vector::sub", |a, b| a - b)
    }

    /// Element-wise product.
    ///
    /// Despite the name this does not sum the products; use
    /// [`Vector::inner_product`] for the scalar dot product.
    ///
    /// # Panics
    /// If `w` has a different dimension.
    pub fn dot(&self, w: &Vector) -> Vector {
        self.zip_with(w, "Vector::dot", |a, b| a * b)
    }

    /// Scalar dot product: the sum of the element-wise products.
    ///
    /// # Panics
    /// If `w` has a different dimension.
    pub fn inner_product(&self, w: &Vector) -> f64 {
        self.dot(w).iter().sum()
    }

    pub fn checked_add(&self, w: &Vector) -> Result<Vector, MathError> {
        self.try_zip_with(w, "Vector::add", |a, b| a + b)
    }

    pub fn checked_sub(&self, w: &Vector) -> Result<Vector, MathError> {
        self.try_zip_with(w, "Vector::sub", |a, b| a - b)
    }

    pub fn checked_dot(&self, w: &Vector) -> Result<Vector, MathError> {
        self.try_zip_with(w, "Vector::dot", |a, b| a * b)
    }

    pub fn checked_inner_product(&self, w: &Vector) -> Result<f64, MathError> {
        Ok(self
            .try_zip_with(w, "Vector::inner_product", |a, b| a * b)?
            .iter()
            .sum())
    }

    /// Multiply every component by `scalar`.
    pub fn mul(&self, scalar: f64) -> Vector {
        self.map(|s| s * scalar)
    }

    /// Divide every component by `scalar`. Dividing by zero yields
    /// infinities or NaN.
    pub fn div(&self, scalar: f64) -> Vector {
        self.map(|s| s / scalar)
    }

    /// Euclidean norm of the vector.
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Square of the Euclidean norm (avoids the sqrt).
    pub fn length_squared(&self) -> f64 {
        self.0.iter().map(|s| s * s).sum()
    }

    /// Step-wise total distance of the vector (L1 norm).
    pub fn manhattan_distance(&self) -> f64 {
        self.0.iter().map(|s| s.abs()).sum()
    }

    /// True when every component is exactly `0.0`. No epsilon is applied.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&s| s == 0.0)
    }

    /// Scale to unit length. A zero vector normalizes to a zero vector of
    /// the same dimension.
    pub fn normalize(&self) -> Vector {
        if self.is_zero() {
            trace!(dimension = self.len(), "normalize: zero vector, returning zero");
            return self.zero_vector();
        }
        let reciprocal = 1.0 / self.length();
        self.mul(reciprocal)
    }

    /// Standard basis of this vector's dimension.
    pub fn standard_basis(&self) -> Vec<Vector> {
        standard_basis(self.len())
    }

    /// Same as [`unit_vector`] with this vector's dimension (all zeros).
    pub fn unit_vector(&self) -> Vector {
        unit_vector(self.len())
    }

    pub fn zero_vector(&self) -> Vector {
        zero_vector(self.len())
    }

    /// Component-wise comparison under `tolerance`. Vectors of different
    /// dimension are never equal.
    pub fn approx_eq(&self, other: &Vector, tolerance: &ToleranceConfig) -> bool {
        self.len() == other.len()
            && self
                .0
                .iter()
                .zip(&other.0)
                .all(|(&a, &b)| tolerance.approx_eq(a, b))
    }

    /// True when the length is 1.0 under `tolerance`.
    pub fn is_normalized(&self, tolerance: &ToleranceConfig) -> bool {
        tolerance.approx_eq(self.length(), 1.0)
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Vector {
        Vector(self.0.iter().map(|&s| f(s)).collect())
    }

    fn try_zip_with(
        &self,
        w: &Vector,
        operation: &'static str,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<Vector, MathError> {
        if self.len() != w.len() {
            debug!(operation, expected = self.len(), found = w.len(), "dimension mismatch");
            return Err(MathError::DimensionMismatch {
                operation,
                expected: self.len(),
                found: w.len(),
            });
        }
        Ok(Vector(
            self.0.iter().zip(&w.0).map(|(&a, &b)| f(a, b)).collect(),
        ))
    }

    fn zip_with(&self, w: &Vector, operation: &'static str, f: impl Fn(f64, f64) -> f64) -> Vector {
        match self.try_zip_with(w, operation, f) {
            Ok(u) => u,
            Err(err) => panic!("{err}"),
        }
    }
}

// Operators. Paths are spelled out so the inherent `add`/`sub`/`mul`/`div`
// stay the ones picked by method-call syntax inside this module.

impl core::ops::Add<&Vector> for &Vector {
    type Output = Vector;

    fn add(self, rhs: &Vector) -> Vector {
        self.zip_with(rhs, "Vector::add", |a, b| a + b)
    }
}

impl core::ops::Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        &self + &rhs
    }
}

impl core::ops::Sub<&Vector> for &Vector {
    type Output = Vector;

    fn sub(self, rhs: &Vector) -> Vector {
        self.zip_with(rhs, "Vector::sub", |a, b| a - b)
    }
}

impl core::ops::Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        &self - &rhs
    }
}

impl core::ops::Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.map(|s| s * rhs)
    }
}

impl core::ops::Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        &self * rhs
    }
}

impl core::ops::Div<f64> for &Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        self.map(|s| s / rhs)
    }
}

impl core::ops::Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        &self / rhs
    }
}

impl core::ops::Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.map(|s| -s)
    }
}

impl core::ops::Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        -&self
    }
}

impl core::ops::Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

// Conversions

impl From<Vec<f64>> for Vector {
    fn from(components: Vec<f64>) -> Self {
        Self(components)
    }
}

impl From<&[f64]> for Vector {
    fn from(components: &[f64]) -> Self {
        Self(components.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(components: [f64; N]) -> Self {
        Self(components.to_vec())
    }
}

impl From<Vector> for Vec<f64> {
    fn from(v: Vector) -> Self {
        v.0
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Vector {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = core::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
