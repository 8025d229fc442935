// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
//! Rigid-body integration properties.

use kinema_dynamics::{BodyDesc, BodyType, PhysicsConfig, RigidBody};
use kinema_math::Vec3;
use proptest::prelude::*;

fn dynamic_body(mass: f32, position: Vec3, velocity: Vec3) -> RigidBody {
    let desc = BodyDesc {
        body_type: BodyType::Dynamic,
        mass,
        position,
        velocity,
        ..BodyDesc::default()
    };
    RigidBody::new(desc).unwrap()
}

#[test]
fn body_desc_deserializes_with_defaults() {
    let json = r#"{ "body_type": "kinematic", "position": [1.0, 2.0, 3.0], "mass": 5.0 }"#;
    let desc: BodyDesc = serde_json::from_str(json).unwrap();
    assert_eq!(desc.body_type, BodyType::Kinematic);
    assert_eq!(desc.position, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(desc.radius, 1.0);
    let body = RigidBody::with_config(desc, &PhysicsConfig::default());
    assert!(body.is_ok_and(|b| b.mass() == 5.0));
}

#[test]
fn transform_tracks_position_and_orientation() {
    let mut body = dynamic_body(1.0, Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO);
    assert_eq!(
        body.set_angular_velocity(Vec3::new(0.0, 0.0, core::f32::consts::FRAC_PI_2)),
        Ok(())
    );
    assert_eq!(body.update(1.0), Ok(()));
    let m = body.transform().to_mat4();
    let p = m.transform_point(&Vec3::UNIT_X);
    // Quarter turn about Z, then translate by (1, 0, 0).
    assert!((p.x() - 1.0).abs() < 1e-5, "{p:?}");
    assert!((p.y() - 1.0).abs() < 1e-5, "{p:?}");
}

#[test]
fn bounding_sphere_follows_body() {
    let body = dynamic_body(1.0, Vec3::new(0.0, 4.0, 0.0), Vec3::ZERO);
    let sphere = body.bounding_sphere();
    assert!(sphere.is_ok_and(|s| s.center() == Vec3::new(0.0, 4.0, 0.0) && s.radius() == 1.0));
}

#[derive(Debug, Clone)]
enum Op {
    Force(Vec3),
    Torque(Vec3),
    Velocity(Vec3),
    Update(f32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let v = (-100.0f32..100.0, -100.0f32..100.0, -100.0f32..100.0)
        .prop_map(|(x, y, z)| Vec3::new(x, y, z));
    prop_oneof![
        v.clone().prop_map(Op::Force),
        v.clone().prop_map(Op::Torque),
        v.prop_map(Op::Velocity),
        (0.0f32..0.5).prop_map(Op::Update),
    ]
}

proptest! {
    #[test]
    fn constant_acceleration_matches_closed_form(
        ax in -10.0f32..10.0,
        ay in -10.0f32..10.0,
        vx in -5.0f32..5.0,
        dt in 0.001f32..0.1,
        steps in 1usize..200,
    ) {
        let mass = 2.0;
        let mut body = dynamic_body(mass, Vec3::ZERO, Vec3::new(vx, 0.0, 0.0));
        prop_assert!(body.apply_force(Vec3::new(ax * mass, ay * mass, 0.0)).is_ok());
        for _ in 0..steps {
            prop_assert!(body.update(dt).is_ok());
        }
        #[allow(clippy::cast_precision_loss)]
        let t = dt * steps as f32;
        let expected_x = vx * t + 0.5 * ax * t * t;
        let expected_y = 0.5 * ay * t * t;
        let p = body.position();
        prop_assert!((p.x() - expected_x).abs() <= 1e-3 * (1.0 + expected_x.abs()),
            "x: got {}, expected {}", p.x(), expected_x);
        prop_assert!((p.y() - expected_y).abs() <= 1e-3 * (1.0 + expected_y.abs()),
            "y: got {}, expected {}", p.y(), expected_y);
        let v = body.velocity();
        prop_assert!((v.x() - (vx + ax * t)).abs() <= 1e-3 * (1.0 + (vx + ax * t).abs()));
        prop_assert_eq!(body.momentum(), v.scale(mass));
    }

    #[test]
    fn static_body_never_moves(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let desc = BodyDesc {
            body_type: BodyType::Static,
            velocity: Vec3::new(3.0, 1.0, 0.0),
            angular_velocity: Vec3::new(0.0, 2.0, 0.0),
            position: Vec3::new(0.0, 1.0, 0.0),
            ..BodyDesc::default()
        };
        let mut body = RigidBody::new(desc).unwrap();
        for op in ops {
            let res = match op {
                Op::Force(f) => body.apply_force(f),
                Op::Torque(t) => body.apply_torque(t),
                Op::Velocity(v) => body.set_velocity(v),
                Op::Update(dt) => body.update(dt),
            };
            prop_assert!(res.is_ok());
            prop_assert_eq!(body.velocity(), Vec3::ZERO);
            prop_assert_eq!(body.angular_velocity(), Vec3::ZERO);
            prop_assert_eq!(body.position(), Vec3::new(0.0, 1.0, 0.0));
        }
    }
}
