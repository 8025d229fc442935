// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use kinema_math::{Mat4, Quat, Vec3};

/// Rigid transform with non-uniform scale, used to hand a body's pose to the
/// rendering side.
///
/// Conventions:
/// - `translation` in meters (world space).
/// - `rotation` as a unit quaternion (normalized internally when converting).
/// - `scale` is non-uniform and applied before rotation/translation.
///
/// `to_mat4` constructs `M = T * R * S` in column-major order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    translation: Vec3,
    rotation: Quat,
    scale: Vec3,
}

impl Transform {
    /// Identity transform (no translation, no rotation, unit scale).
    pub const fn identity() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }

    /// Creates a transform from components.
    pub const fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Translation component.
    pub const fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Rotation component.
    pub const fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Scale component.
    pub const fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Returns the column-major `Mat4` corresponding to this transform.
    pub fn to_mat4(&self) -> Mat4 {
        let [sx, sy, sz] = self.scale.to_array();
        let [tx, ty, tz] = self.translation.to_array();
        let s = Mat4::scale(sx, sy, sz);
        let r = self.rotation.to_mat4();
        let t = Mat4::translation(tx, ty, tz);
        t.multiply(&r).multiply(&s)
    }

    /// Maps a local-space point into world space.
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        self.to_mat4().transform_point(point)
    }

    /// Maps a local-space direction into world space: scaled, then rotated,
    /// never translated.
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        let [sx, sy, sz] = self.scale.to_array();
        let [x, y, z] = direction.to_array();
        self.rotation.rotate(&Vec3::new(x * sx, y * sy, z * sz))
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
