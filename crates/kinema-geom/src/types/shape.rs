// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::types::{aabox::AxisAlignedBox, plane::Plane, ray::Ray, sphere::Sphere};

/// Discriminant of a [`Shape`], handy for diagnostics and dispatch tables.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// [`Shape::Sphere`].
    Sphere,
    /// [`Shape::Plane`].
    Plane,
    /// [`Shape::Box`].
    Box,
    /// [`Shape::Ray`].
    Ray,
}

/// Any narrow-phase primitive.
///
/// Each variant owns its own fields; collision routines match on the variant
/// instead of reinterpreting one shape as another.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape {
    /// A solid sphere.
    Sphere(Sphere),
    /// An infinite plane.
    Plane(Plane),
    /// An axis-aligned box.
    Box(AxisAlignedBox),
    /// A half-line.
    Ray(Ray),
}

impl Shape {
    /// Which primitive this is.
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Sphere(_) => ShapeKind::Sphere,
            Self::Plane(_) => ShapeKind::Plane,
            Self::Box(_) => ShapeKind::Box,
            Self::Ray(_) => ShapeKind::Ray,
        }
    }
}

impl From<Sphere> for Shape {
    fn from(value: Sphere) -> Self {
        Self::Sphere(value)
    }
}

impl From<Plane> for Shape {
    fn from(value: Plane) -> Self {
        Self::Plane(value)
    }
}

impl From<AxisAlignedBox> for Shape {
    fn from(value: AxisAlignedBox) -> Self {
        Self::Box(value)
    }
}

impl From<Ray> for Shape {
    fn from(value: Ray) -> Self {
        Self::Ray(value)
    }
}
