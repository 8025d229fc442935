// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use kinema_math::MathError;

use crate::config::PhysicsConfig;
use crate::diag::{Diagnostic, DiagnosticSink, NullSink, Query, TracingSink};

/// Call-site context for detectors and resolvers: the active
/// [`PhysicsConfig`] plus the sink that receives diagnostics.
#[derive(Clone, Copy)]
pub struct PhysicsContext<'a> {
    config: PhysicsConfig,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> PhysicsContext<'a> {
    /// Builds a context reporting into `sink`.
    pub fn new(config: PhysicsConfig, sink: &'a dyn DiagnosticSink) -> Self {
        Self { config, sink }
    }

    /// Active configuration.
    pub const fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Reports `error` for `query` and hands it back for propagation.
    pub(crate) fn report(&self, query: Query, error: MathError) -> MathError {
        self.sink.record(&Diagnostic { query, error });
        error
    }
}

impl PhysicsContext<'static> {
    /// Context that logs through `tracing`.
    pub fn traced(config: PhysicsConfig) -> Self {
        Self::new(config, &TracingSink)
    }

    /// Context that discards diagnostics.
    pub fn silent(config: PhysicsConfig) -> Self {
        Self::new(config, &NullSink)
    }
}

impl core::fmt::Debug for PhysicsContext<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PhysicsContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
