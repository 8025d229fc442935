// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use kinema_math::{Vec3, EPSILON};

/// Half-line `origin + direction · t` for `t ≥ 0`.
///
/// `direction` is not required to be unit length, so `t` is measured in
/// multiples of the direction vector. Queries that need a unit direction say
/// so and normalize internally.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
}

impl Ray {
    /// Creates a ray. A zero direction is accepted here and rejected by the
    /// queries that cannot handle it.
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Start point.
    pub const fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Direction vector (possibly non-unit).
    pub const fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Point at parameter `t`: `origin + direction · t`.
    pub fn position_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Returns `true` when the direction is too short to parameterise a line.
    pub fn is_degenerate(&self) -> bool {
        self.direction.length_squared() < EPSILON * EPSILON
    }
}
