// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![forbid(unsafe_code)]
#![doc = r"Shape primitives for Kinema.

This crate provides:
- Rays (`Ray`) with parametric evaluation.
- Spheres (`Sphere`), planes (`Plane`) and axis-aligned boxes (`AxisAlignedBox`).
- A `Shape` sum type so narrow-phase routines can dispatch on shape kind.
- Rigid transforms (`Transform`) for handing body poses to a renderer.

Design notes:
- Constructors validate their invariants and report `MathError` instead of
  panicking; a constructed shape is always usable by the collision routines.
- Float32 throughout.
"]

/// Foundational geometric types.
pub mod types;

pub use kinema_math::MathError;
pub use types::aabox::AxisAlignedBox;
pub use types::plane::Plane;
pub use types::ray::Ray;
pub use types::shape::{Shape, ShapeKind};
pub use types::sphere::Sphere;
pub use types::transform::Transform;
