// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Closed-form solver for `a·t² + b·t + c = 0`.

use crate::{MathError, EPSILON};

/// Which root [`solve_quadratic`] should return.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Root {
    /// The numerically smaller root (`(-b - √Δ) / 2a` for `a > 0`).
    Smallest,
    /// The numerically larger root.
    Largest,
}

/// Both real roots of a quadratic, ordered so `smaller <= larger`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadraticRoots {
    /// Lesser root.
    pub smaller: f32,
    /// Greater root.
    pub larger: f32,
    /// The discriminant `b² − 4ac` the roots were derived from.
    pub discriminant: f32,
}

impl QuadraticRoots {
    /// Returns `true` when the discriminant is exactly zero (tangent case).
    pub fn is_tangent(&self) -> bool {
        self.discriminant == 0.0
    }

    /// Returns `true` when one root is negative and the other non-negative.
    pub fn straddles_zero(&self) -> bool {
        self.smaller < 0.0 && self.larger >= 0.0
    }
}

/// Relative tolerance under which a discriminant counts as zero.
///
/// `b² − 4ac` cancels catastrophically near tangency, so an exact tangent
/// evaluated in `f32` routinely lands a few ulps below zero. Any discriminant
/// within `DISCRIMINANT_TOLERANCE · max(b², |4ac|)` of zero is snapped to it.
pub const DISCRIMINANT_TOLERANCE: f32 = 4.0 * EPSILON;

/// Solves `a·t² + b·t + c = 0` for both real roots.
///
/// * `|a| < EPSILON²` is reported as [`MathError::DegenerateInput`]; the
///   two-root formula would divide by zero. The threshold is squared because
///   `a` is usually a squared length (`d·d` for a ray direction `d`).
/// * A negative discriminant beyond [`DISCRIMINANT_TOLERANCE`] is reported as
///   [`MathError::NumericDomain`].
/// * A discriminant within tolerance of zero yields two equal roots and
///   [`QuadraticRoots::is_tangent`] holds.
///
/// # Examples
/// ```
/// use kinema_math::quadratic_roots;
/// // t² - 3t + 2 = (t - 1)(t - 2)
/// let roots = quadratic_roots(1.0, -3.0, 2.0).unwrap();
/// assert_eq!((roots.smaller, roots.larger), (1.0, 2.0));
/// ```
pub fn quadratic_roots(a: f32, b: f32, c: f32) -> Result<QuadraticRoots, MathError> {
    if a.abs() < EPSILON * EPSILON {
        return Err(MathError::DegenerateInput("quadratic leading coefficient is zero"));
    }
    let bb = b * b;
    let four_ac = 4.0 * a * c;
    let mut discriminant = bb - four_ac;
    if discriminant.abs() <= DISCRIMINANT_TOLERANCE * bb.max(four_ac.abs()) {
        discriminant = 0.0;
    }
    if discriminant < 0.0 {
        return Err(MathError::NumericDomain { discriminant });
    }
    let sqrt_d = discriminant.sqrt();
    let inv_2a = 1.0 / (2.0 * a);
    let r0 = (-b - sqrt_d) * inv_2a;
    let r1 = (-b + sqrt_d) * inv_2a;
    let (smaller, larger) = if r0 <= r1 { (r0, r1) } else { (r1, r0) };
    Ok(QuadraticRoots {
        smaller,
        larger,
        discriminant,
    })
}

/// Solves `a·t² + b·t + c = 0` and returns the root selected by `pick`.
///
/// Error conditions are those of [`quadratic_roots`].
pub fn solve_quadratic(a: f32, b: f32, c: f32, pick: Root) -> Result<f32, MathError> {
    let roots = quadratic_roots(a, b, c)?;
    Ok(match pick {
        Root::Smallest => roots.smaller,
        Root::Largest => roots.larger,
    })
}
