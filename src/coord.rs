//! This module contains a struct, `Coord`, that models a point in 3D space and supports the little
//! bit of arithmetic needed to walk in a straight line between two colors. HSL values are embedded
//! with hue on the x-axis, saturation on the y-axis, and lightness on the z-axis.

use std::ops::{Add, Div, Mul, Sub};

/// A point in 3D space. The axes `x`, `y`, and `z` aren't treated any differently by any method, so
/// the distinction between them is completely conventional.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

// Scalar multiplication and division: (a, b, c) * s = (sa, sb, sc). Not commutative, but it'll do.
impl Mul<f64> for Coord {
    type Output = Coord;
    fn mul(self, rhs: f64) -> Coord {
        Coord {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Div<f64> for Coord {
    type Output = Coord;
    fn div(self, rhs: f64) -> Coord {
        Coord {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

impl Coord {
    /// The point `i` steps along from `self` towards `other`, where `segments` steps reach `other`
    /// exactly. Zero segments means there is nowhere to go, so this stays at `self`.
    ///
    /// The result is a weighted average of the two ends, so it's finite whenever both ends are.
    pub fn step_towards(&self, other: &Coord, i: usize, segments: usize) -> Coord {
        if segments == 0 {
            return *self;
        }
        let t = i as f64 / segments as f64;
        *self * (1.0 - t) + *other * t
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_arithmetic() {
        let point_1 = Coord { x: 1., y: 8., z: 7. };
        let point_2 = Coord { x: 7., y: 2., z: 3. };
        assert_eq!(point_1 + point_2, Coord { x: 8., y: 10., z: 10. });
        assert_eq!(point_1 - point_2, Coord { x: -6., y: 6., z: 4. });
        assert_eq!(point_1 * 2., Coord { x: 2., y: 16., z: 14. });
        assert_eq!(point_1 / 2., Coord { x: 0.5, y: 4., z: 3.5 });
    }

    #[test]
    fn test_step_towards() {
        let start = Coord { x: 0., y: 1., z: 0.5 };
        let end = Coord { x: 1., y: 1., z: 0.5 };
        assert_eq!(start.step_towards(&end, 0, 4), start);
        assert_eq!(start.step_towards(&end, 4, 4), end);
        assert_eq!(start.step_towards(&end, 2, 4), Coord { x: 0.5, y: 1., z: 0.5 });
        assert_eq!(start.step_towards(&end, 3, 0), start);
    }

    #[test]
    fn test_step_towards_far_apart() {
        let start = Coord { x: 1e308, y: 1., z: 0.5 };
        let end = Coord { x: -1e308, y: 1., z: 0.5 };
        for i in 0..=4 {
            let point = start.step_towards(&end, i, 4);
            assert!(point.x.is_finite(), "step {}: {:?}", i, point);
        }
        assert_eq!(start.step_towards(&end, 0, 4), start);
        assert_eq!(start.step_towards(&end, 2, 4).x, 0.);
        assert_eq!(start.step_towards(&end, 4, 4), end);
    }
}
