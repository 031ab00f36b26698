// src/numerics/types/point.rs
// Point is a 3D coordinate. It shares its shape with Vec3 but not its
// operations: everything here is coordinate geometry between two points.

use serde::{Deserialize, Serialize};

/// Point is a three-dimensional coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns the changes in x, y and z going from `self` to `p2`.
    pub fn delta_xyz(&self, p2: &Point) -> (f64, f64, f64) {
        (p2.x - self.x, p2.y - self.y, p2.z - self.z)
    }

    /// Euclidean distance between two points.
    pub fn distance(&self, p2: &Point) -> f64 {
        let (dx, dy, dz) = self.delta_xyz(p2);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Slope of the line connecting two points, returned as `(xy, xz, yz)`.
    ///
    /// The values are direction cosines in reverse axis order:
    /// `(dz / d, dy / d, dx / d)` where `d` is the distance. The labels do
    /// not describe the values; [`Point::direction_cosines`] returns the same
    /// ratios in x, y, z order. Coincident points give NaN.
    pub fn slope(&self, p2: &Point) -> (f64, f64, f64) {
        let (dx, dy, dz) = self.delta_xyz(p2);
        let d = self.distance(p2);
        (dz / d, dy / d, dx / d)
    }

    /// Direction cosines `(dx / d, dy / d, dz / d)` of the line from `self`
    /// to `p2`. Coincident points give NaN.
    pub fn direction_cosines(&self, p2: &Point) -> (f64, f64, f64) {
        let (dx, dy, dz) = self.delta_xyz(p2);
        let d = self.distance(p2);
        (dx / d, dy / d, dz / d)
    }

    /// Returns a function producing points on the line through `self` and
    /// `p2`:
    ///
    /// ```text
    /// ⟨mx,my,mz⟩ = ⟨x1,y1,z1⟩ − ⟨x0,y0,z0⟩
    /// ⟨x ,y ,z ⟩ = ⟨x0,y0,z0⟩ + t⟨mx,my,mz⟩
    /// ```
    ///
    /// Each axis is evaluated as `(1 - t) * a0 + t * a1`, so `t = 0` gives
    /// `self` and `t = 1` gives `p2` exactly.
    ///
    /// ```
    /// use math3d::Point;
    ///
    /// let line = Point::new(0.0, 0.0, 0.0).point_slope(&Point::new(2.0, 4.0, 6.0));
    /// assert_eq!(line(0.5), Point::new(1.0, 2.0, 3.0));
    /// ```
    pub fn point_slope(&self, p2: &Point) -> impl Fn(f64) -> Point + Copy + Send + Sync {
        let (p0, p1) = (*self, *p2);
        move |t| {
            let s = 1.0 - t;
            Point::new(s * p0.x + t * p1.x, s * p0.y + t * p1.y, s * p0.z + t * p1.z)
        }
    }
}

impl From<[f64; 3]> for Point {
    fn from(array: [f64; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from(tuple: (f64, f64, f64)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }
}

impl From<Point> for (f64, f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y, p.z)
    }
}

impl From<Point> for [f64; 3] {
    fn from(p: Point) -> Self {
        p.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_delta_xyz() {
        let p1 = Point::ORIGIN;
        let p2 = Point::new(1.0, 1.0, 1.0);
        assert_eq!(p1.delta_xyz(&p2), (1.0, 1.0, 1.0));
        assert_eq!(p2.delta_xyz(&p1), (-1.0, -1.0, -1.0));
    }

    #[test]
    fn test_distance_to_axis_points() {
        let p1 = Point::ORIGIN;
        for (p, expect) in [
            (p1, 0.0),
            (Point::new(1.0, 0.0, 0.0), 1.0),
            (Point::new(0.0, 1.0, 0.0), 1.0),
            (Point::new(0.0, 0.0, 1.0), 1.0),
        ] {
            assert_eq!(p1.distance(&p), expect, "distance to {:?}", p);
        }
        assert_relative_eq!(p1.distance(&Point::new(1.0, 1.0, 1.0)), 3.0_f64.sqrt());
    }

    #[test]
    fn test_slope_returns_reversed_cosines() {
        let p1 = Point::ORIGIN;
        let p2 = Point::new(1.0, 2.0, 2.0);
        let (xy, xz, yz) = p1.slope(&p2);
        assert_relative_eq!(xy, 2.0 / 3.0);
        assert_relative_eq!(xz, 2.0 / 3.0);
        assert_relative_eq!(yz, 1.0 / 3.0);

        let (cx, cy, cz) = p1.direction_cosines(&p2);
        assert_eq!((cx, cy, cz), (yz, xz, xy));
    }

    #[test]
    fn test_slope_of_coincident_points_is_nan() {
        let p = Point::new(1.0, 2.0, 3.0);
        let (xy, xz, yz) = p.slope(&p);
        assert!(xy.is_nan() && xz.is_nan() && yz.is_nan());
    }

    #[test]
    fn test_point_slope_endpoints_and_midpoint() {
        let p1 = Point::new(1.0, -2.0, 3.0);
        let p2 = Point::new(4.0, 2.0, -3.0);
        let line = p1.point_slope(&p2);

        assert_eq!(line(0.0), p1);
        assert_eq!(line(1.0), p2);
        assert_eq!(line(0.5), Point::new(2.5, 0.0, 0.0));
        assert_eq!(line(-1.0), Point::new(-2.0, -6.0, 9.0));
    }

    #[test]
    fn test_point_slope_end_is_exact_for_inexact_deltas() {
        let p1 = Point::new(1.0, 1.0, 1.0);
        let p2 = Point::new(0.1, 0.7, -0.3);

        assert_eq!(p1.point_slope(&p2)(1.0), p2);
        assert_eq!(p2.point_slope(&p1)(1.0), p1);
        assert_eq!(p2.point_slope(&p1)(0.0), p2);
    }

    #[test]
    fn test_conversions() {
        let p: Point = (1.0, 2.0, 3.0).into();
        assert_eq!(p, Point::from([1.0, 2.0, 3.0]));

        let tup: (f64, f64, f64) = p.into();
        assert_eq!(tup, (1.0, 2.0, 3.0));

        let arr: [f64; 3] = p.into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_point_bincode_roundtrip() {
        let config = bincode::config::standard();
        let p = Point::new(1.1, 2.2, 3.3);

        let encoded = bincode::serde::encode_to_vec(p, config).unwrap();
        let (decoded, _len): (Point, _) = bincode::serde::decode_from_slice(&encoded, config).unwrap();

        assert_eq!(p, decoded);
    }
}
