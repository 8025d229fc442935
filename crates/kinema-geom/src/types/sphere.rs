// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use kinema_math::{MathError, Vec3};

/// Solid sphere with a strictly positive radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Creates a sphere; a non-positive or non-finite radius is degenerate.
    pub fn new(center: Vec3, radius: f32) -> Result<Self, MathError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(MathError::DegenerateInput("sphere radius must be positive"));
        }
        Ok(Self { center, radius })
    }

    /// Centre point.
    pub const fn center(&self) -> Vec3 {
        self.center
    }

    /// Radius in metres.
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Returns `true` if `point` lies inside or on the surface.
    pub fn contains(&self, point: &Vec3) -> bool {
        point.sub(&self.center).length_squared() <= self.radius * self.radius
    }
}
