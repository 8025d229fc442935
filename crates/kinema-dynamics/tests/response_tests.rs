// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
//! Collision response scenarios.

use kinema_dynamics::detect::{bodies_collide, sphere_plane_collision_detected};
use kinema_dynamics::resolve::{resolve_bodies, resolve_sphere_plane};
use kinema_dynamics::{
    BodyDesc, BodyType, CaptureSink, MathError, PhysicsConfig, PhysicsContext, Query, RigidBody,
};
use kinema_geom::Plane;
use kinema_math::Vec3;
use proptest::prelude::*;

fn body(body_type: BodyType, mass: f32, position: Vec3, velocity: Vec3) -> RigidBody {
    RigidBody::new(BodyDesc {
        body_type,
        mass,
        position,
        velocity,
        ..BodyDesc::default()
    })
    .unwrap()
}

fn ground() -> Plane {
    Plane::new(Vec3::UNIT_Y, 0.0).unwrap()
}

#[test]
fn head_on_inelastic_collision_stops_both_bodies() {
    let ctx = PhysicsContext::silent(PhysicsConfig::with_restitution(0.0));
    let mut a = body(BodyType::Dynamic, 1.0, Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
    let mut b = body(
        BodyType::Dynamic,
        1.0,
        Vec3::new(3.0, 0.0, 0.0),
        Vec3::new(-1.0, 0.0, 0.0),
    );
    assert!(!bodies_collide(&a, &b));
    assert_eq!(a.update(0.5), Ok(()));
    assert_eq!(b.update(0.5), Ok(()));
    assert!(bodies_collide(&a, &b));
    assert_eq!(resolve_bodies(&mut a, &mut b, &ctx), Ok(()));
    assert_eq!(a.velocity(), Vec3::ZERO);
    assert_eq!(b.velocity(), Vec3::ZERO);
    assert_eq!(a.momentum() + b.momentum(), Vec3::ZERO);
}

#[test]
fn elastic_equal_masses_swap_velocities() {
    let ctx = PhysicsContext::silent(PhysicsConfig::with_restitution(1.0));
    let mut a = body(BodyType::Dynamic, 1.0, Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
    let mut b = body(
        BodyType::Dynamic,
        1.0,
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(-1.0, 0.0, 0.0),
    );
    assert_eq!(resolve_bodies(&mut a, &mut b, &ctx), Ok(()));
    assert_eq!(a.velocity(), Vec3::new(-1.0, 0.0, 0.0));
    assert_eq!(b.velocity(), Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn falling_body_bounces_off_ground() {
    let ctx = PhysicsContext::silent(PhysicsConfig::default());
    let mut ball = body(
        BodyType::Dynamic,
        1.0,
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, -5.0, 0.0),
    );
    assert!(sphere_plane_collision_detected(&ball, &ground()));
    assert_eq!(resolve_sphere_plane(&mut ball, &ground(), &ctx), Ok(()));
    assert_eq!(ball.velocity(), Vec3::new(0.0, 5.0, 0.0));
}

#[test]
fn plane_response_ignores_non_dynamic_bodies() {
    let ctx = PhysicsContext::silent(PhysicsConfig::default());
    let mut k = body(
        BodyType::Kinematic,
        1.0,
        Vec3::ZERO,
        Vec3::new(0.0, -5.0, 0.0),
    );
    assert_eq!(resolve_sphere_plane(&mut k, &ground(), &ctx), Ok(()));
    assert_eq!(k.velocity(), Vec3::new(0.0, -5.0, 0.0));
}

#[test]
fn dynamic_body_reflects_off_static_body() {
    let ctx = PhysicsContext::silent(PhysicsConfig::default());
    let mut wall = body(BodyType::Static, 1.0, Vec3::ZERO, Vec3::ZERO);
    let mut ball = body(
        BodyType::Dynamic,
        1.0,
        Vec3::new(0.0, 2.0, 0.0),
        Vec3::new(1.0, -3.0, 0.0),
    );
    assert_eq!(resolve_bodies(&mut wall, &mut ball, &ctx), Ok(()));
    assert_eq!(ball.velocity(), Vec3::new(1.0, 3.0, 0.0));
    assert_eq!(wall.velocity(), Vec3::ZERO);
}

#[test]
fn kinematic_obstacle_keeps_its_velocity() {
    let ctx = PhysicsContext::silent(PhysicsConfig::default());
    let mut paddle = body(
        BodyType::Kinematic,
        1.0,
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    );
    let mut ball = body(BodyType::Dynamic, 1.0, Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0));
    assert_eq!(resolve_bodies(&mut ball, &mut paddle, &ctx), Ok(()));
    assert_eq!(ball.velocity(), Vec3::new(-4.0, 0.0, 0.0));
    assert_eq!(paddle.velocity(), Vec3::new(0.0, 1.0, 0.0));
}

#[test]
fn coincident_centres_are_reported_and_leave_velocity_alone() {
    let sink = CaptureSink::new();
    let ctx = PhysicsContext::new(PhysicsConfig::default(), &sink);
    let mut wall = body(BodyType::Static, 1.0, Vec3::ZERO, Vec3::ZERO);
    let mut ball = body(BodyType::Dynamic, 1.0, Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
    let res = resolve_bodies(&mut ball, &mut wall, &ctx);
    assert!(matches!(res, Err(MathError::DivideByNearZero { .. })));
    assert_eq!(ball.velocity(), Vec3::new(1.0, 0.0, 0.0));
    let events = sink.take();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].query, Query::BodyBodyResponse);
}

proptest! {
    #[test]
    fn elastic_plane_reflection_preserves_speed(
        vx in -20.0f32..20.0, vy in -20.0f32..20.0, vz in -20.0f32..20.0,
        nx in -1.0f32..1.0, ny in -1.0f32..1.0, nz in -1.0f32..1.0,
    ) {
        let n = Vec3::new(nx, ny, nz);
        prop_assume!(n.length() > 0.1);
        let plane = Plane::new(n, 0.0);
        prop_assert!(plane.is_ok());
        let Ok(plane) = plane else { return Ok(()); };
        let v = Vec3::new(vx, vy, vz);
        let mut b = body(BodyType::Dynamic, 1.0, Vec3::ZERO, v);
        let ctx = PhysicsContext::silent(PhysicsConfig::with_restitution(1.0));
        prop_assert!(resolve_sphere_plane(&mut b, &plane, &ctx).is_ok());

        let unit = plane.normal();
        let after = b.velocity();
        let tol = 1e-3 * (1.0 + v.length());
        prop_assert!((after.length() - v.length()).abs() <= tol);
        prop_assert!((after.dot(&unit) + v.dot(&unit)).abs() <= tol);
        let tangent_before = v - unit.scale(v.dot(&unit));
        let tangent_after = after - unit.scale(after.dot(&unit));
        prop_assert!(tangent_before.distance(&tangent_after) <= tol);
    }

    #[test]
    fn dynamic_pair_conserves_momentum(
        m1 in 0.1f32..10.0, m2 in 0.1f32..10.0,
        v1 in -10.0f32..10.0, v2 in -10.0f32..10.0,
        e in 0.0f32..1.0,
    ) {
        let ctx = PhysicsContext::silent(PhysicsConfig::with_restitution(e));
        let mut a = body(BodyType::Dynamic, m1, Vec3::ZERO, Vec3::new(v1, 0.0, 0.0));
        let mut b = body(BodyType::Dynamic, m2, Vec3::new(1.0, 0.0, 0.0), Vec3::new(v2, 0.0, 0.0));
        let before = a.momentum() + b.momentum();
        prop_assert!(resolve_bodies(&mut a, &mut b, &ctx).is_ok());
        let after = a.momentum() + b.momentum();
        prop_assert!((after.x() - before.x()).abs() <= 1e-3 * (1.0 + before.x().abs()));
        // Separation speed scales the approach speed by e.
        let approach = v1 - v2;
        let separation = b.velocity().x() - a.velocity().x();
        prop_assert!((separation - e * approach).abs() <= 1e-3 * (1.0 + approach.abs()));
    }
}
