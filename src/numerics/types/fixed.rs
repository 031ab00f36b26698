// src/numerics/types/fixed.rs
// Vec2, Vec3 and Vec4: named-field views over Vector.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::FixedVector;
use super::vector::Vector;
use crate::numerics::error::MathError;

/// Vec2 implements a vector with length (magnitude) and direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

/// Vec3 implements a vector with length (magnitude) and direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Vec4 implements a vector with length (magnitude) and direction.
///
/// The `w` component comes first: it is component 0 when lifted to a
/// [`Vector`] and the first vector of the standard basis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec4 {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl Vec4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.w, self.x, self.y, self.z]
    }
}

impl FixedVector for Vec2 {
    const DIMENSION: usize = 2;

    fn to_vector(&self) -> Vector {
        Vector::from(self.to_array())
    }

    fn from_vector(v: &Vector) -> Self {
        Self::new(v[0], v[1])
    }
}

impl FixedVector for Vec3 {
    const DIMENSION: usize = 3;

    fn to_vector(&self) -> Vector {
        Vector::from(self.to_array())
    }

    fn from_vector(v: &Vector) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl FixedVector for Vec4 {
    const DIMENSION: usize = 4;

    fn to_vector(&self) -> Vector {
        Vector::from(self.to_array())
    }

    fn from_vector(v: &Vector) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from(array: [f64; 2]) -> Self {
        Self::new(array[0], array[1])
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(array: [f64; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

impl From<[f64; 4]> for Vec4 {
    fn from(array: [f64; 4]) -> Self {
        Self::new(array[0], array[1], array[2], array[3])
    }
}

/// Conversions and operators shared by every fixed-size type. The operators
/// route through `FixedVector` so they lift and lower like the named methods.
macro_rules! impl_fixed_common {
    ($ty:ident, $n:literal) => {
        impl From<$ty> for [f64; $n] {
            fn from(v: $ty) -> Self {
                v.to_array()
            }
        }

        impl From<$ty> for Vector {
            fn from(v: $ty) -> Self {
                v.to_vector()
            }
        }

        impl TryFrom<&Vector> for $ty {
            type Error = MathError;

            fn try_from(v: &Vector) -> Result<Self, MathError> {
                if v.len() != $n {
                    debug!(
                        target_type = stringify!($ty),
                        expected = $n,
                        found = v.len(),
                        "cannot lower Vector to fixed-size type"
                    );
                    return Err(MathError::DimensionMismatch {
                        operation: concat!(stringify!($ty), "::try_from"),
                        expected: $n,
                        found: v.len(),
                    });
                }
                Ok(<$ty as FixedVector>::from_vector(v))
            }
        }

        impl TryFrom<Vector> for $ty {
            type Error = MathError;

            fn try_from(v: Vector) -> Result<Self, MathError> {
                $ty::try_from(&v)
            }
        }

        impl core::ops::Add for $ty {
            type Output = $ty;

            fn add(self, rhs: $ty) -> $ty {
                <$ty as FixedVector>::add(&self, &rhs)
            }
        }

        impl core::ops::Sub for $ty {
            type Output = $ty;

            fn sub(self, rhs: $ty) -> $ty {
                <$ty as FixedVector>::sub(&self, &rhs)
            }
        }

        impl core::ops::Mul<f64> for $ty {
            type Output = $ty;

            fn mul(self, rhs: f64) -> $ty {
                <$ty as FixedVector>::mul(&self, rhs)
            }
        }

        impl core::ops::Div<f64> for $ty {
            type Output = $ty;

            fn div(self, rhs: f64) -> $ty {
                <$ty as FixedVector>::div(&self, rhs)
            }
        }

        impl core::ops::Neg for $ty {
            type Output = $ty;

            fn neg(self) -> $ty {
                <$ty as FixedVector>::mul(&self, -1.0)
            }
        }
    };
}

impl_fixed_common!(Vec2, 2);
impl_fixed_common!(Vec3, 3);
impl_fixed_common!(Vec4, 4);
