// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! kinema-dynamics: rigid-body integration and narrow-phase collisions.
//!
//! Per frame the caller applies forces, calls [`RigidBody::update`] on every
//! body, picks candidate pairs, runs the [`detect`] queries on them, and hands
//! confirmed collisions to [`resolve`]. Every body must finish its update
//! before any pair involving it is tested; nothing here enforces that order.
//!
//! Detectors and resolvers take a [`PhysicsContext`] carrying the tunable
//! [`PhysicsConfig`] and an injectable [`DiagnosticSink`]. There is no global
//! logger and no shared state between bodies.
#![forbid(unsafe_code)]

mod body;
mod config;
mod context;
mod diag;

/// Narrow-phase intersection queries.
pub mod detect;
/// Velocity responses for confirmed collisions.
pub mod resolve;

pub use body::{BodyDesc, BodyType, RigidBody};
pub use config::{ConfigError, PhysicsConfig, RayBoxMode};
pub use context::PhysicsContext;
pub use diag::{CaptureSink, Diagnostic, DiagnosticSink, NullSink, Query, TracingSink};
pub use kinema_math::MathError;
