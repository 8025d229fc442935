// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Tunable physics parameters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Json(#[from] serde_json::Error),
    /// A value parsed but violates its documented range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Ray–box algorithm selection.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RayBoxMode {
    /// One face per axis, chosen by the sign of the direction component.
    /// Misses rays that start inside the box.
    #[default]
    OneSided,
    /// Canonical two-plane-per-axis slab test.
    Slab,
}

/// Parameters shared by every detector and resolver.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Restitution coefficient in `[0, 1]` used by every response path:
    /// `0` is perfectly inelastic, `1` perfectly elastic.
    pub restitution: f32,
    /// Ray–box algorithm.
    pub ray_box: RayBoxMode,
    /// Mass assigned to Static/Kinematic bodies whose declared mass is
    /// smaller, so no division ever sees zero.
    pub min_mass: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            restitution: 1.0,
            ray_box: RayBoxMode::OneSided,
            min_mass: 1e-6,
        }
    }
}

impl PhysicsConfig {
    /// Default config with the given restitution, clamped to `[0, 1]`.
    pub fn with_restitution(restitution: f32) -> Self {
        Self {
            restitution: kinema_math::clamp(restitution, 0.0, 1.0),
            ..Self::default()
        }
    }

    /// Parses a JSON document; missing keys take their defaults.
    ///
    /// # Examples
    /// ```
    /// use kinema_dynamics::{PhysicsConfig, RayBoxMode};
    /// let cfg = PhysicsConfig::from_json(r#"{ "restitution": 0.0, "ray_box": "slab" }"#);
    /// assert!(cfg.is_ok_and(|c| c.restitution == 0.0 && c.ray_box == RayBoxMode::Slab));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigError::Invalid(format!(
                "restitution {} outside [0, 1]",
                self.restitution
            )));
        }
        if !(self.min_mass.is_finite() && self.min_mass > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "min_mass {} must be positive",
                self.min_mass
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = PhysicsConfig::from_json("{}");
        assert!(cfg.is_ok_and(|c| c == PhysicsConfig::default()));
    }

    #[test]
    fn out_of_range_restitution_is_rejected() {
        let cfg = PhysicsConfig::from_json(r#"{ "restitution": 1.5 }"#);
        assert!(matches!(cfg, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn malformed_json_is_a_serde_error() {
        assert!(matches!(
            PhysicsConfig::from_json("{ restitution"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn json_roundtrip_preserves_mode() {
        let cfg = PhysicsConfig {
            ray_box: RayBoxMode::Slab,
            ..PhysicsConfig::with_restitution(0.25)
        };
        let back = cfg.to_json().and_then(|s| PhysicsConfig::from_json(&s));
        assert!(back.is_ok_and(|c| c == cfg));
    }
}
