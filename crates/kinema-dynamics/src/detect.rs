// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Every query is pure over its inputs. Results are tri-state:
//! `Ok(Some(point))` / `Ok(true)` for a hit, `Ok(None)` / `Ok(false)` for a
//! miss (a negative discriminant included, after it has been reported), and
//! `Err` for malformed input.

use kinema_geom::{AxisAlignedBox, Plane, Ray, Shape, Sphere};
use kinema_math::{
    quadratic_roots, MathError, QuadraticRoots, Vec3, DISCRIMINANT_TOLERANCE, EPSILON,
};

use crate::body::{BodyType, RigidBody};
use crate::config::RayBoxMode;
use crate::context::PhysicsContext;
use crate::diag::Query;

/// Solves the ray–sphere quadratic.
///
/// With `o = origin − center` and `d = direction`:
/// `a = d·d`, `b = 2·(o·d)`, `c = o·o − r²`. `c` is rebuilt from the ray's
/// closest approach `l = o − (o·d / a)·d` as `(o·d)² / a − (r² − l·l)`, which
/// is the same value but keeps the tangent term `r² − l·l` out of the
/// cancellation in `b² − 4ac`. A closest approach within rounding of the
/// radius counts as tangent. `Ok(None)` means the discriminant was negative.
fn ray_sphere_roots(
    ray: &Ray,
    sphere: &Sphere,
    ctx: &PhysicsContext<'_>,
) -> Result<Option<QuadraticRoots>, MathError> {
    if ray.is_degenerate() {
        return Err(ctx.report(
            Query::RaySphere,
            MathError::DegenerateInput("zero-length ray direction"),
        ));
    }
    let o = ray.origin().sub(&sphere.center());
    let d = ray.direction();
    let a = d.dot(&d);
    let half_b = o.dot(&d);
    let closest = o - d * (half_b / a);
    let r = sphere.radius();
    let mut depth = r * r - closest.dot(&closest);
    if depth < 0.0 && -depth <= DISCRIMINANT_TOLERANCE * r * (r + o.length()) {
        depth = 0.0;
    }
    let b = 2.0 * half_b;
    let c = half_b * half_b / a - depth;
    match quadratic_roots(a, b, c) {
        Ok(roots) => Ok(Some(roots)),
        Err(err) if err.is_no_real_root() => {
            ctx.report(Query::RaySphere, err);
            Ok(None)
        }
        Err(err) => Err(ctx.report(Query::RaySphere, err)),
    }
}

/// Returns `true` unless the ray's line misses the sphere or the sphere lies
/// entirely behind the ray origin. A tangent ray counts when its single root
/// is non-negative.
pub fn ray_sphere_collision_detected(
    ray: &Ray,
    sphere: &Sphere,
    ctx: &PhysicsContext<'_>,
) -> Result<bool, MathError> {
    Ok(ray_sphere_roots(ray, sphere, ctx)?.is_some_and(|roots| roots.larger >= 0.0))
}

/// Point where the ray meets the sphere surface.
///
/// Root selection:
/// - roots of opposite sign: the origin is inside, return the exit point
///   (larger root);
/// - both roots non-negative: approaching from outside, return the entry
///   point (smaller root);
/// - a single tangent root: the tangent point, unless it lies behind;
/// - both negative: no hit.
pub fn ray_sphere_collision_point(
    ray: &Ray,
    sphere: &Sphere,
    ctx: &PhysicsContext<'_>,
) -> Result<Option<Vec3>, MathError> {
    let Some(roots) = ray_sphere_roots(ray, sphere, ctx)? else {
        return Ok(None);
    };
    let t = if roots.is_tangent() {
        roots.smaller
    } else if roots.straddles_zero() {
        roots.larger
    } else {
        roots.smaller
    };
    Ok((t >= 0.0).then(|| ray.position_at(t)))
}

/// One-sided ray–box parameter in the box's local frame.
///
/// Each axis with a non-zero direction component proposes the single face the
/// ray travels toward: the minimum face (`0`) for a positive component, the
/// maximum face (`r`) for a negative one. A candidate survives when `t ≥ 0`
/// and its point lies within the extents on the other two axes.
fn one_sided_parameter(origin: [f32; 3], dir: [f32; 3], ext: [f32; 3]) -> Option<f32> {
    let mut best: Option<f32> = None;
    for (axis, &d) in dir.iter().enumerate() {
        if d == 0.0 {
            continue;
        }
        let face = if d > 0.0 { 0.0 } else { ext[axis] };
        let t = (face - origin[axis]) / d;
        if t < 0.0 {
            continue;
        }
        let within = (0..3)
            .filter(|&other| other != axis)
            .all(|other| (0.0..=ext[other]).contains(&(origin[other] + dir[other] * t)));
        if within && best.is_none_or(|b| t < b) {
            best = Some(t);
        }
    }
    best
}

/// Canonical slab test in the box's local frame. A ray starting inside
/// reports its exit parameter.
fn slab_parameter(origin: [f32; 3], dir: [f32; 3], ext: [f32; 3]) -> Option<f32> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    for (axis, &d) in dir.iter().enumerate() {
        if d == 0.0 {
            if !(0.0..=ext[axis]).contains(&origin[axis]) {
                return None;
            }
            continue;
        }
        let t0 = -origin[axis] / d;
        let t1 = (ext[axis] - origin[axis]) / d;
        t_near = t_near.max(t0.min(t1));
        t_far = t_far.min(t0.max(t1));
        if t_near > t_far {
            return None;
        }
    }
    if t_far < 0.0 {
        return None;
    }
    Some(if t_near >= 0.0 { t_near } else { t_far })
}

/// Point where the ray meets the box, using the algorithm selected by
/// [`crate::PhysicsConfig::ray_box`].
///
/// The default [`RayBoxMode::OneSided`] test can miss rays that start inside
/// the box or graze certain corners; [`RayBoxMode::Slab`] does not. An origin
/// lying exactly on a face the ray travels into (`t == 0`) counts as a hit.
pub fn ray_box_collision_point(
    ray: &Ray,
    aabox: &AxisAlignedBox,
    ctx: &PhysicsContext<'_>,
) -> Result<Option<Vec3>, MathError> {
    if ray.is_degenerate() {
        return Err(ctx.report(
            Query::RayBox,
            MathError::DegenerateInput("zero-length ray direction"),
        ));
    }
    let origin = aabox.to_local(&ray.origin()).to_array();
    let dir = ray.direction().to_array();
    let ext = aabox.extents().to_array();
    let t = match ctx.config().ray_box {
        RayBoxMode::OneSided => one_sided_parameter(origin, dir, ext),
        RayBoxMode::Slab => slab_parameter(origin, dir, ext),
    };
    Ok(t.map(|t| ray.position_at(t)))
}

/// Returns `true` when [`ray_box_collision_point`] finds a point.
pub fn ray_box_collision_detected(
    ray: &Ray,
    aabox: &AxisAlignedBox,
    ctx: &PhysicsContext<'_>,
) -> Result<bool, MathError> {
    Ok(ray_box_collision_point(ray, aabox, ctx)?.is_some())
}

/// Point where the ray crosses the plane.
///
/// A ray parallel to the plane (`|normal·direction| < EPSILON`) never hits,
/// even when it lies in the plane.
pub fn ray_plane_collision_point(
    ray: &Ray,
    plane: &Plane,
    ctx: &PhysicsContext<'_>,
) -> Result<Option<Vec3>, MathError> {
    if ray.is_degenerate() {
        return Err(ctx.report(
            Query::RayPlane,
            MathError::DegenerateInput("zero-length ray direction"),
        ));
    }
    let denom = plane.normal().dot(&ray.direction());
    if denom.abs() < EPSILON {
        return Ok(None);
    }
    let t = -plane.signed_distance(&ray.origin()) / denom;
    Ok((t >= 0.0).then(|| ray.position_at(t)))
}

/// Casts a ray against any shape.
///
/// Ray against ray has no meaningful intersection and always misses.
pub fn ray_cast(
    ray: &Ray,
    shape: &Shape,
    ctx: &PhysicsContext<'_>,
) -> Result<Option<Vec3>, MathError> {
    match shape {
        Shape::Sphere(sphere) => ray_sphere_collision_point(ray, sphere, ctx),
        Shape::Plane(plane) => ray_plane_collision_point(ray, plane, ctx),
        Shape::Box(aabox) => ray_box_collision_point(ray, aabox, ctx),
        Shape::Ray(_) => Ok(None),
    }
}

/// Returns `true` when a Dynamic body's sphere touches or penetrates the
/// plane: `signed_distance(position) − radius ≤ 0`.
///
/// Static and Kinematic bodies never register a plane collision.
pub fn sphere_plane_collision_detected(body: &RigidBody, plane: &Plane) -> bool {
    body.body_type() == BodyType::Dynamic
        && plane.signed_distance(&body.position()) - body.radius() <= 0.0
}

/// Returns `true` when the bodies' spheres touch or overlap
/// (`distance ≤ r1 + r2`). Two Static bodies are never tested.
pub fn bodies_collide(a: &RigidBody, b: &RigidBody) -> bool {
    if a.body_type() == BodyType::Static && b.body_type() == BodyType::Static {
        return false;
    }
    a.position().distance(&b.position()) <= a.radius() + b.radius()
}
