use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Below this length a vector is treated as zero when normalizing.
const NORMALIZE_EPSILON: f64 = 1e-10;

/// A point or direction in the physics frame.
///
/// Axes: `x` lateral (positive = right of the aim line), `y` downfield,
/// `z` height above the ground.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Length of the ground-plane (x/y) projection.
    pub fn planar_length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector in the same direction, or `ZERO` for a near-zero vector.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len < NORMALIZE_EPSILON {
            return Self::ZERO;
        }
        *self * (1.0 / len)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_is_componentwise() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(0.5, -1.0, 4.0);
        assert_eq!(a + b, Vector3::new(1.5, 1.0, 7.0));
        assert_eq!(a - b, Vector3::new(0.5, 3.0, -1.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
    }

    #[test]
    fn length_and_planar_length() {
        let v = Vector3::new(3.0, 4.0, 12.0);
        assert!((v.length() - 13.0).abs() < 1e-12);
        assert!((v.planar_length() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn normalized_has_unit_length() {
        let v = Vector3::new(0.0, 3.0, 4.0).normalized();
        assert!((v.length() - 1.0).abs() < 1e-12);
        assert!((v.y - 0.6).abs() < 1e-12);
        assert!((v.z - 0.8).abs() < 1e-12);
    }

    #[test]
    fn normalizing_zero_yields_zero() {
        assert_eq!(Vector3::ZERO.normalized(), Vector3::ZERO);
        let tiny = Vector3::new(1e-12, 0.0, -1e-12);
        assert_eq!(tiny.normalized(), Vector3::ZERO);
    }

    #[test]
    fn non_finite_components_detected() {
        assert!(Vector3::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Vector3::new(f64::NAN, 0.0, 0.0).is_finite());
        assert!(!Vector3::new(0.0, f64::INFINITY, 0.0).is_finite());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn component() -> impl Strategy<Value = f64> {
            -1.0e6f64..1.0e6
        }

        proptest! {
            #[test]
            fn normalized_is_unit_or_zero(x in component(), y in component(), z in component()) {
                let n = Vector3::new(x, y, z).normalized();
                let len = n.length();
                prop_assert!(n == Vector3::ZERO || (len - 1.0).abs() < 1e-9);
            }

            #[test]
            fn planar_length_never_exceeds_length(x in component(), y in component(), z in component()) {
                let v = Vector3::new(x, y, z);
                prop_assert!(v.planar_length() <= v.length() + 1e-9);
            }
        }
    }
}
