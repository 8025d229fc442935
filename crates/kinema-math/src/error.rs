// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use thiserror::Error;

/// Numeric failure conditions shared by every Kinema crate.
///
/// None of these are fatal: callers resolve them within the current frame,
/// usually by treating the query as "no collision" and leaving body state
/// untouched.
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum MathError {
    /// The quadratic discriminant was negative; no real root exists.
    #[error("no real root (discriminant {discriminant})")]
    NumericDomain {
        /// The offending `b² − 4ac` value.
        discriminant: f32,
    },
    /// A normalization or division would divide by a near-zero magnitude.
    #[error("divide by near-zero magnitude {magnitude}")]
    DivideByNearZero {
        /// Magnitude that fell under [`crate::EPSILON`].
        magnitude: f32,
    },
    /// Input cannot describe a meaningful query (zero-length ray direction,
    /// zero-extent box, non-finite time step, ...).
    #[error("degenerate input: {0}")]
    DegenerateInput(&'static str),
}

impl MathError {
    /// Returns `true` for the "no real intersection" condition, which
    /// detectors treat as an ordinary miss.
    pub const fn is_no_real_root(&self) -> bool {
        matches!(self, Self::NumericDomain { .. })
    }
}
