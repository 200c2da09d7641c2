use serde::Serialize;
use std::ops::Mul;

/// Scene-space position. `y` is the renderer's "up" axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3D { x, y, z }
    }

    pub fn magnitude(&self) -> f64 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Mul<f64> for Vector3D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Vector3D::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_magnitude() {
        let v = Vector3D::new(2.0, 3.0, 6.0);
        assert_relative_eq!(v.magnitude(), 7.0);
    }

    #[test]
    fn test_scaling() {
        let a = Vector3D::new(1.0, -1.0, 2.0);
        assert_eq!(a * 2.0, Vector3D::new(2.0, -2.0, 4.0));
        assert!(a.is_finite());
        assert!(!Vector3D::new(f64::NAN, 0.0, 0.0).is_finite());
    }
}
