// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core geometry types used by the narrow phase.
//!
//! Conventions:
//! - Plane normals are stored unit length; `normal · P + d = 0` on the plane.
//! - Box containment is inclusive on faces.
//! - Ray directions are not required to be unit length.

#[doc = "Axis-aligned boxes spanning a corner to corner + extents."]
pub mod aabox;
#[doc = "Infinite planes in Hessian normal form."]
pub mod plane;
#[doc = "Parametric rays."]
pub mod ray;
#[doc = "Tagged union over every primitive."]
pub mod shape;
#[doc = "Spheres."]
pub mod sphere;
#[doc = "Rigid transforms with non-uniform scale."]
pub mod transform;
