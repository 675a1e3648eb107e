// Copyright 2026 the Subduction Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the view lifecycle.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! [`BorderEffectView`](crate::view::BorderEffectView) calls at each stage of
//! its life. All method bodies default to no-ops, so implementing only the
//! events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.

use kurbo::Size;

use crate::geometry::GradientPlane;
use crate::time::{Duration, HostTime};

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted for every size report fed to a view.
#[derive(Clone, Copy, Debug)]
pub struct LayoutEvent {
    /// Layout pass that produced the report.
    pub pass: u64,
    /// Reported size, after clamping.
    pub size: Size,
    /// Whether the report was accepted (not stale).
    pub accepted: bool,
}

/// Emitted when the rotation starts on first appearance.
#[derive(Clone, Copy, Debug)]
pub struct AppearEvent {
    /// Host time the rotation started.
    pub at: HostTime,
    /// Time for one full turn.
    pub period: Duration,
}

/// Emitted when the view re-renders its geometry for a new measured size.
#[derive(Clone, Copy, Debug)]
pub struct RenderEvent {
    /// Measured size the geometry was derived from.
    pub measured: Size,
    /// Derived gradient plane.
    pub plane: GradientPlane,
}

/// Emitted when a tick changes the rotation angle.
#[derive(Clone, Copy, Debug)]
pub struct RotationEvent {
    /// Host time of the tick.
    pub at: HostTime,
    /// New angle in degrees.
    pub degrees: f64,
    /// Number of completed turns.
    pub cycle: u64,
}

/// Emitted when a view is unmounted.
#[derive(Clone, Copy, Debug)]
pub struct TeardownEvent {
    /// Number of layers destroyed, content layers included.
    pub layers_destroyed: usize,
    /// Whether a running rotation was cancelled.
    pub cancelled_animation: bool,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from a view.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called for every size report.
    fn on_layout(&mut self, e: &LayoutEvent) {
        _ = e;
    }

    /// Called when the rotation starts.
    fn on_appear(&mut self, e: &AppearEvent) {
        _ = e;
    }

    /// Called when geometry is re-rendered.
    fn on_render(&mut self, e: &RenderEvent) {
        _ = e;
    }

    /// Called when the rotation angle changes.
    fn on_rotation(&mut self, e: &RotationEvent) {
        _ = e;
    }

    /// Called when the view is unmounted.
    fn on_teardown(&mut self, e: &TeardownEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`LayoutEvent`].
    #[inline]
    pub fn layout(&mut self, e: &LayoutEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layout(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`AppearEvent`].
    #[inline]
    pub fn appear(&mut self, e: &AppearEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_appear(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RenderEvent`].
    #[inline]
    pub fn render(&mut self, e: &RenderEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_render(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RotationEvent`].
    #[inline]
    pub fn rotation(&mut self, e: &RotationEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_rotation(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TeardownEvent`].
    #[inline]
    pub fn teardown(&mut self, e: &TeardownEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_teardown(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}
