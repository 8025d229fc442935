// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::{MathError, Vec3, EPSILON};

/// Homogeneous 4D vector `(x, y, z, w)`.
///
/// Points carry `w = 1`, directions `w = 0`; see [`Vec4::point`] and
/// [`Vec4::direction`].
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f32; 4]", into = "[f32; 4]")
)]
pub struct Vec4 {
    data: [f32; 4],
}

impl Vec4 {
    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self {
            data: [x, y, z, w],
        }
    }

    /// Lifts a point into homogeneous space (`w = 1`).
    pub const fn point(p: Vec3) -> Self {
        Self::new(p.x(), p.y(), p.z(), 1.0)
    }

    /// Lifts a direction into homogeneous space (`w = 0`).
    pub const fn direction(d: Vec3) -> Self {
        Self::new(d.x(), d.y(), d.z(), 0.0)
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// Drops `w` without a perspective divide.
    pub const fn xyz(&self) -> Vec3 {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }

    /// Component by index (`0..4`).
    ///
    /// # Panics
    /// Panics if `idx > 3`.
    pub const fn component(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Scales every component.
    pub fn scale(&self, scalar: f32) -> Self {
        let [x, y, z, w] = self.data;
        Self::new(x * scalar, y * scalar, z * scalar, w * scalar)
    }

    /// Returns the unit vector; fails on a near-zero length.
    pub fn normalize(&self) -> Result<Self, MathError> {
        let len = self.length();
        if len < EPSILON {
            return Err(MathError::DivideByNearZero { magnitude: len });
        }
        Ok(self.scale(1.0 / len))
    }

    /// Component-wise linear interpolation; `t` is not clamped.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let a = self.data;
        let b = other.data;
        Self::new(
            a[0] + (b[0] - a[0]) * t,
            a[1] + (b[1] - a[1]) * t,
            a[2] + (b[2] - a[2]) * t,
            a[3] + (b[3] - a[3]) * t,
        )
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl From<Vec4> for [f32; 4] {
    fn from(value: Vec4) -> Self {
        value.data
    }
}
