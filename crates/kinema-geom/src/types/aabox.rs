// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use kinema_math::{MathError, Vec3};

use crate::types::plane::Plane;

/// Axis-aligned box spanning `corner` to `corner + extents`.
///
/// Invariants:
/// - every extent is strictly positive and finite;
/// - in its local frame (`corner` at the origin) the box spans
///   `(0, 0, 0)..=(rx, ry, rz)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AxisAlignedBox {
    corner: Vec3,
    extents: Vec3,
}

impl AxisAlignedBox {
    /// Box at the origin with extents `(rx, ry, rz)`.
    pub fn new(rx: f32, ry: f32, rz: f32) -> Result<Self, MathError> {
        Self::at(Vec3::ZERO, Vec3::new(rx, ry, rz))
    }

    /// Box whose minimum corner sits at `corner`.
    ///
    /// Fails with [`MathError::DegenerateInput`] for any non-positive extent.
    pub fn at(corner: Vec3, extents: Vec3) -> Result<Self, MathError> {
        let [rx, ry, rz] = extents.to_array();
        let ok = |r: f32| r.is_finite() && r > 0.0;
        if !(ok(rx) && ok(ry) && ok(rz)) {
            return Err(MathError::DegenerateInput("box extents must be positive"));
        }
        Ok(Self { corner, extents })
    }

    /// Minimum corner (world space).
    pub const fn min(&self) -> Vec3 {
        self.corner
    }

    /// Maximum corner (world space).
    pub fn max(&self) -> Vec3 {
        self.corner + self.extents
    }

    /// Extents `(rx, ry, rz)`.
    pub const fn extents(&self) -> Vec3 {
        self.extents
    }

    /// Converts a world-space point into the box's local frame.
    pub fn to_local(&self, point: &Vec3) -> Vec3 {
        point.sub(&self.corner)
    }

    /// Returns `true` if `point` lies inside or on the boundary.
    pub fn contains(&self, point: &Vec3) -> bool {
        let local = self.to_local(point).to_array();
        let ext = self.extents.to_array();
        local
            .iter()
            .zip(ext.iter())
            .all(|(p, r)| (0.0..=*r).contains(p))
    }

    /// The six face planes with outward normals, ordered
    /// `-X, +X, -Y, +Y, -Z, +Z`.
    ///
    /// Each plane passes through the matching face implied by
    /// [`AxisAlignedBox::min`] / [`AxisAlignedBox::max`].
    pub fn planes(&self) -> [Plane; 6] {
        let lo = self.min();
        let hi = self.max();
        [
            Plane::from_unit(-Vec3::UNIT_X, lo.x()),
            Plane::from_unit(Vec3::UNIT_X, -hi.x()),
            Plane::from_unit(-Vec3::UNIT_Y, lo.y()),
            Plane::from_unit(Vec3::UNIT_Y, -hi.y()),
            Plane::from_unit(-Vec3::UNIT_Z, lo.z()),
            Plane::from_unit(Vec3::UNIT_Z, -hi.z()),
        ]
    }
}
