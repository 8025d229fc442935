// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Responses only ever mutate Dynamic bodies. Static and Kinematic bodies act
//! as immovable obstacles. On error the diagnostic is reported, the error is
//! returned, and no velocity is touched.

use kinema_geom::Plane;
use kinema_math::{MathError, Vec3};

use crate::body::{BodyType, RigidBody};
use crate::context::PhysicsContext;
use crate::diag::Query;

/// Reflects `velocity` about `axis` with restitution `e`:
/// `velocity + (1 + e) · project(−velocity, axis)`.
///
/// `axis` need not be unit length. With `e = 1` the normal component is
/// reversed and the tangential component kept; with `e = 0` the normal
/// component is removed.
pub fn reflect(velocity: Vec3, axis: Vec3, restitution: f32) -> Result<Vec3, MathError> {
    let normal_part = (-velocity).project_onto(&axis)?;
    Ok(velocity + normal_part * (1.0 + restitution))
}

/// Bounces a Dynamic body off an immovable plane.
///
/// No mass or momentum terms are involved. Non-dynamic bodies are left alone.
pub fn resolve_sphere_plane(
    body: &mut RigidBody,
    plane: &Plane,
    ctx: &PhysicsContext<'_>,
) -> Result<(), MathError> {
    if body.body_type() != BodyType::Dynamic {
        return Ok(());
    }
    let e = ctx.config().restitution;
    let v = reflect(body.velocity(), plane.normal(), e)
        .map_err(|err| ctx.report(Query::SpherePlaneResponse, err))?;
    body.set_velocity(v)
        .map_err(|err| ctx.report(Query::SpherePlaneResponse, err))
}

/// Adjusts velocities of two colliding bodies.
///
/// - Both Dynamic: momentum-conserving exchange with restitution `e`,
///   `vc = (p1 + p2) / (m1 + m2)`,
///   `v1' = vc − e·m2/(m1+m2)·(v1 − v2)`, `v2' = vc + e·m1/(m1+m2)·(v1 − v2)`.
///   With `e = 0` both leave with the shared velocity `vc`.
/// - One Dynamic, the other Static or Kinematic: the dynamic body's velocity
///   is reflected about the line joining the centres.
/// - Otherwise nothing happens.
pub fn resolve_bodies(
    a: &mut RigidBody,
    b: &mut RigidBody,
    ctx: &PhysicsContext<'_>,
) -> Result<(), MathError> {
    let e = ctx.config().restitution;
    match (a.is_dynamic(), b.is_dynamic()) {
        (true, true) => exchange_momentum(a, b, e),
        (true, false) => bounce_off(a, b.position(), e),
        (false, true) => bounce_off(b, a.position(), e),
        (false, false) => Ok(()),
    }
    .map_err(|err| ctx.report(Query::BodyBodyResponse, err))
}

fn exchange_momentum(a: &mut RigidBody, b: &mut RigidBody, e: f32) -> Result<(), MathError> {
    let total_mass = a.mass() + b.mass();
    let collision_velocity = (a.momentum() + b.momentum()) * (1.0 / total_mass);
    let relative = a.velocity() - b.velocity();
    let v1 = collision_velocity - relative * (e * b.mass() / total_mass);
    let v2 = collision_velocity + relative * (e * a.mass() / total_mass);
    if !(v1.is_finite() && v2.is_finite()) {
        return Err(MathError::DegenerateInput("collision produced a non-finite velocity"));
    }
    a.set_velocity(v1)?;
    b.set_velocity(v2)
}

fn bounce_off(body: &mut RigidBody, obstacle: Vec3, e: f32) -> Result<(), MathError> {
    let axis = body.position() - obstacle;
    let v = reflect(body.velocity(), axis, e)?;
    body.set_velocity(v)
}
