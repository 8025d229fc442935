// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Injectable diagnostics for swallowed or rejected numeric conditions.

use std::cell::RefCell;

use kinema_math::MathError;

/// Which query or response raised a [`Diagnostic`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Query {
    /// Ray against sphere.
    RaySphere,
    /// Ray against axis-aligned box.
    RayBox,
    /// Ray against plane.
    RayPlane,
    /// Sphere-plane velocity response.
    SpherePlaneResponse,
    /// Body-body velocity response.
    BodyBodyResponse,
}

/// One reported condition.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Diagnostic {
    /// Origin of the report.
    pub query: Query,
    /// The condition itself.
    pub error: MathError,
}

/// Receiver for diagnostics raised by detectors and resolvers.
pub trait DiagnosticSink {
    /// Records one diagnostic. Must not panic.
    fn record(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to `tracing`.
///
/// A negative discriminant is an ordinary miss and goes out at `debug`;
/// everything else is a caller bug and goes out at `warn`.
#[derive(Debug, Copy, Clone, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, diagnostic: &Diagnostic) {
        let Diagnostic { query, error } = diagnostic;
        if error.is_no_real_root() {
            tracing::debug!(?query, %error, "no real intersection");
        } else {
            tracing::warn!(?query, %error, "rejected collision input");
        }
    }
}

/// Drops every diagnostic.
#[derive(Debug, Copy, Clone, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&self, _diagnostic: &Diagnostic) {}
}

/// Keeps diagnostics in memory so tests can assert on them.
#[derive(Debug, Default)]
pub struct CaptureSink {
    events: RefCell<Vec<Diagnostic>>,
}

impl CaptureSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies of everything recorded so far.
    pub fn events(&self) -> Vec<Diagnostic> {
        self.events.borrow().clone()
    }

    /// Drains the recorded diagnostics.
    pub fn take(&self) -> Vec<Diagnostic> {
        self.events.take()
    }

    /// Number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Returns `true` when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl DiagnosticSink for CaptureSink {
    fn record(&self, diagnostic: &Diagnostic) {
        self.events.borrow_mut().push(*diagnostic);
    }
}
