// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use kinema_math::{MathError, Vec3};

/// Infinite plane `normal · P + d = 0`.
///
/// Invariant: `normal` is unit length. [`Plane::new`] normalizes whatever it
/// is given (rescaling `d` so the described plane is unchanged), so every
/// formula here can rely on it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane {
    normal: Vec3,
    d: f32,
}

impl Plane {
    /// Creates a plane from a (possibly non-unit) normal and offset.
    ///
    /// Fails with [`MathError::DivideByNearZero`] for a near-zero normal.
    pub fn new(normal: Vec3, d: f32) -> Result<Self, MathError> {
        let len = normal.length();
        let unit = normal.normalize()?;
        Ok(Self { normal: unit, d: d / len })
    }

    /// Plane through `point` facing `normal`.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Result<Self, MathError> {
        let unit = normal.normalize()?;
        Ok(Self {
            normal: unit,
            d: -unit.dot(&point),
        })
    }

    /// Builds a plane from a normal already known to be unit length.
    pub(crate) const fn from_unit(normal: Vec3, d: f32) -> Self {
        Self { normal, d }
    }

    /// Unit normal.
    pub const fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Signed offset `d`.
    pub const fn d(&self) -> f32 {
        self.d
    }

    /// Signed distance `normal · point + d`; positive on the side the normal
    /// points to.
    pub fn signed_distance(&self, point: &Vec3) -> f32 {
        self.normal.dot(point) + self.d
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_normalises_and_rescales_offset() {
        let plane = Plane::new(Vec3::new(0.0, 2.0, 0.0), -4.0);
        let plane = plane.unwrap();
        assert_eq!(plane.normal(), Vec3::UNIT_Y);
        assert_eq!(plane.d(), -2.0);
        assert_eq!(plane.signed_distance(&Vec3::new(5.0, 2.0, 1.0)), 0.0);
    }

    #[test]
    fn zero_normal_is_rejected() {
        assert!(matches!(
            Plane::new(Vec3::ZERO, 1.0),
            Err(MathError::DivideByNearZero { .. })
        ));
    }

    #[test]
    fn from_point_normal_passes_through_point() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let plane = Plane::from_point_normal(p, Vec3::new(1.0, 1.0, 0.0));
        assert!(plane.is_ok_and(|pl| pl.signed_distance(&p).abs() < 1e-6));
    }
}
