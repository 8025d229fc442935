// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! kinema-math: float32 linear algebra for the Kinema rigid-body core.
//!
//! Covers scalar utilities, vectors, quaternions, column-major matrices, and
//! the quadratic solver used by ray queries. Every fallible operation reports
//! a [`MathError`] instead of producing a garbage value.
#![forbid(unsafe_code)]

use std::f32::consts::TAU;

mod error;
mod mat4;
mod quadratic;
mod quat;
mod vec3;
mod vec4;

pub use error::MathError;
pub use mat4::Mat4;
pub use quadratic::{
    quadratic_roots, solve_quadratic, QuadraticRoots, Root, DISCRIMINANT_TOLERANCE,
};
pub use quat::Quat;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Global epsilon used by math routines when detecting degenerate values.
pub const EPSILON: f32 = 1e-6;

/// Clamps `value` to the inclusive `[min, max]` range.
///
/// A reversed range is swapped rather than rejected.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    value.max(lo).min(hi)
}

/// Linear interpolation between two scalars; `t` is not clamped.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}
