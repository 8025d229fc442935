// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Rigid bodies and their per-frame integration step.

use kinema_geom::{Sphere, Transform};
use kinema_math::{MathError, Quat, Vec3, EPSILON};
use serde::{Deserialize, Serialize};

use crate::config::PhysicsConfig;

/// How a body participates in the simulation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyType {
    /// Immovable. Velocity and angular velocity are forced to zero on every
    /// update; forces and torques are ignored.
    Static,
    /// Velocity is set externally via [`RigidBody::set_velocity`]; forces and
    /// torques are ignored.
    Kinematic,
    /// Force-driven: acceleration is `force / mass`.
    #[default]
    Dynamic,
}

/// Construction aggregate supplied by the owning game object.
///
/// Orientation and angular velocity are Euler-angle vectors
/// `(pitch about X, yaw about Y, roll about Z)` in radians.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyDesc {
    /// Simulation role.
    pub body_type: BodyType,
    /// Mass in kilograms. Must be positive for [`BodyType::Dynamic`].
    pub mass: f32,
    /// Bounding-sphere radius in metres. Must be positive.
    pub radius: f32,
    /// Initial position.
    pub position: Vec3,
    /// Initial velocity. Ignored for [`BodyType::Static`].
    pub velocity: Vec3,
    /// Scalar rotational inertia. Must be positive for [`BodyType::Dynamic`].
    pub rotational_inertia: f32,
    /// Initial orientation (Euler angles).
    pub orientation: Vec3,
    /// Initial angular velocity. Ignored for [`BodyType::Static`].
    pub angular_velocity: Vec3,
}

impl Default for BodyDesc {
    fn default() -> Self {
        Self {
            body_type: BodyType::Dynamic,
            mass: 1.0,
            radius: 1.0,
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            rotational_inertia: 1.0,
            orientation: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
        }
    }
}

/// Simulated sphere-bounded body with linear and angular kinematic state.
///
/// Momentum is never stored: [`RigidBody::momentum`] derives it from the
/// current velocity and mass, so it always reflects the latest update.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    body_type: BodyType,
    mass: f32,
    radius: f32,
    position: Vec3,
    velocity: Vec3,
    acceleration: Vec3,
    orientation: Vec3,
    angular_velocity: Vec3,
    angular_acceleration: Vec3,
    inverse_rotational_inertia: f32,
}

impl RigidBody {
    /// Builds a body using the default [`PhysicsConfig`].
    pub fn new(desc: BodyDesc) -> Result<Self, MathError> {
        Self::with_config(desc, &PhysicsConfig::default())
    }

    /// Builds a body, clamping non-dynamic masses to `config.min_mass`.
    ///
    /// Fails with:
    /// - [`MathError::DivideByNearZero`] for a Dynamic body whose mass or
    ///   rotational inertia is below [`EPSILON`];
    /// - [`MathError::DegenerateInput`] for a non-positive radius or any
    ///   non-finite vector.
    pub fn with_config(desc: BodyDesc, config: &PhysicsConfig) -> Result<Self, MathError> {
        if !(desc.radius.is_finite() && desc.radius > 0.0) {
            return Err(MathError::DegenerateInput("body radius must be positive"));
        }
        let vectors = [
            desc.position,
            desc.velocity,
            desc.orientation,
            desc.angular_velocity,
        ];
        if !vectors.iter().all(Vec3::is_finite) {
            return Err(MathError::DegenerateInput("body state must be finite"));
        }

        let dynamic = desc.body_type == BodyType::Dynamic;
        let (mass, inverse_rotational_inertia) = if dynamic {
            if !(desc.mass.is_finite() && desc.mass >= EPSILON) {
                return Err(MathError::DivideByNearZero {
                    magnitude: desc.mass,
                });
            }
            let inertia = desc.rotational_inertia;
            if !(inertia.is_finite() && inertia >= EPSILON) {
                return Err(MathError::DivideByNearZero { magnitude: inertia });
            }
            (desc.mass, 1.0 / inertia)
        } else {
            let mass = if desc.mass.is_finite() {
                desc.mass.max(config.min_mass)
            } else {
                config.min_mass
            };
            (mass, 0.0)
        };

        let (velocity, angular_velocity) = if desc.body_type == BodyType::Static {
            (Vec3::ZERO, Vec3::ZERO)
        } else {
            (desc.velocity, desc.angular_velocity)
        };

        Ok(Self {
            body_type: desc.body_type,
            mass,
            radius: desc.radius,
            position: desc.position,
            velocity,
            acceleration: Vec3::ZERO,
            orientation: desc.orientation,
            angular_velocity,
            angular_acceleration: Vec3::ZERO,
            inverse_rotational_inertia,
        })
    }

    /// Advances the body by `dt` seconds.
    ///
    /// ```text
    /// position        += velocity·dt + ½·acceleration·dt²
    /// velocity        += acceleration·dt
    /// orientation     += angularVelocity·dt + ½·angularAcceleration·dt²
    /// angularVelocity += angularAcceleration·dt
    /// ```
    ///
    /// Static bodies have velocity, angular velocity and both accelerations
    /// forced to exactly zero instead. A negative or non-finite `dt`, or a
    /// step that would produce a non-finite state, is rejected with
    /// [`MathError::DegenerateInput`] and leaves the body untouched.
    pub fn update(&mut self, dt: f32) -> Result<(), MathError> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(MathError::DegenerateInput(
                "time step must be finite and non-negative",
            ));
        }
        if self.body_type == BodyType::Static {
            self.velocity = Vec3::ZERO;
            self.angular_velocity = Vec3::ZERO;
            self.acceleration = Vec3::ZERO;
            self.angular_acceleration = Vec3::ZERO;
            return Ok(());
        }

        let half_dt_sq = 0.5 * dt * dt;
        let position = self.position + self.velocity * dt + self.acceleration * half_dt_sq;
        let velocity = self.velocity + self.acceleration * dt;
        let orientation =
            self.orientation + self.angular_velocity * dt + self.angular_acceleration * half_dt_sq;
        let angular_velocity = self.angular_velocity + self.angular_acceleration * dt;

        let next = [position, velocity, orientation, angular_velocity];
        if !next.iter().all(Vec3::is_finite) {
            return Err(MathError::DegenerateInput(
                "integration produced a non-finite state",
            ));
        }
        self.position = position;
        self.velocity = velocity;
        self.orientation = orientation;
        self.angular_velocity = angular_velocity;
        Ok(())
    }

    /// Sets this frame's linear acceleration from an applied force.
    ///
    /// Dynamic: `acceleration = force / mass`. Static and Kinematic bodies
    /// get zero acceleration whatever the input.
    pub fn apply_force(&mut self, force: Vec3) -> Result<(), MathError> {
        if !force.is_finite() {
            return Err(MathError::DegenerateInput("force must be finite"));
        }
        self.acceleration = match self.body_type {
            BodyType::Dynamic => force.scale(1.0 / self.mass),
            BodyType::Static | BodyType::Kinematic => Vec3::ZERO,
        };
        Ok(())
    }

    /// Sets this frame's angular acceleration from an applied torque.
    ///
    /// Dynamic: `angularAcceleration = inverseRotationalInertia · torque`.
    /// Static and Kinematic bodies get zero.
    pub fn apply_torque(&mut self, torque: Vec3) -> Result<(), MathError> {
        if !torque.is_finite() {
            return Err(MathError::DegenerateInput("torque must be finite"));
        }
        self.angular_acceleration = match self.body_type {
            BodyType::Dynamic => torque.scale(self.inverse_rotational_inertia),
            BodyType::Static | BodyType::Kinematic => Vec3::ZERO,
        };
        Ok(())
    }

    /// Overrides the linear velocity. Static bodies keep zero velocity.
    pub fn set_velocity(&mut self, velocity: Vec3) -> Result<(), MathError> {
        if !velocity.is_finite() {
            return Err(MathError::DegenerateInput("velocity must be finite"));
        }
        if self.body_type != BodyType::Static {
            self.velocity = velocity;
        }
        Ok(())
    }

    /// Overrides the angular velocity. Static bodies keep zero.
    pub fn set_angular_velocity(&mut self, angular_velocity: Vec3) -> Result<(), MathError> {
        if !angular_velocity.is_finite() {
            return Err(MathError::DegenerateInput("angular velocity must be finite"));
        }
        if self.body_type != BodyType::Static {
            self.angular_velocity = angular_velocity;
        }
        Ok(())
    }

    /// Simulation role.
    pub const fn body_type(&self) -> BodyType {
        self.body_type
    }

    /// Returns `true` for [`BodyType::Dynamic`].
    pub fn is_dynamic(&self) -> bool {
        self.body_type == BodyType::Dynamic
    }

    /// Mass in kilograms (clamped for non-dynamic bodies).
    pub const fn mass(&self) -> f32 {
        self.mass
    }

    /// Bounding-sphere radius.
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Current position.
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Current linear velocity.
    pub const fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Linear momentum `velocity · mass`.
    pub fn momentum(&self) -> Vec3 {
        self.velocity.scale(self.mass)
    }

    /// Linear acceleration set by the last [`RigidBody::apply_force`].
    pub const fn acceleration(&self) -> Vec3 {
        self.acceleration
    }

    /// Orientation as Euler angles.
    pub const fn orientation(&self) -> Vec3 {
        self.orientation
    }

    /// Angular velocity.
    pub const fn angular_velocity(&self) -> Vec3 {
        self.angular_velocity
    }

    /// Angular acceleration set by the last [`RigidBody::apply_torque`].
    pub const fn angular_acceleration(&self) -> Vec3 {
        self.angular_acceleration
    }

    /// Reciprocal of the rotational inertia; zero for non-dynamic bodies.
    pub const fn inverse_rotational_inertia(&self) -> f32 {
        self.inverse_rotational_inertia
    }

    /// Pose for the rendering side: translation plus Euler orientation, unit
    /// scale.
    pub fn transform(&self) -> Transform {
        Transform::new(
            self.position,
            Quat::from_euler(self.orientation),
            Vec3::new(1.0, 1.0, 1.0),
        )
    }

    /// The body's collision sphere at its current position.
    pub fn bounding_sphere(&self) -> Result<Sphere, MathError> {
        Sphere::new(self.position, self.radius)
    }
}
