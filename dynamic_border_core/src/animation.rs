// Copyright 2026 the Subduction Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Repeat-forever linear rotation.
//!
//! [`RotationAnimation`] maps host time to an angle that sweeps linearly from
//! 0° to 360° once per period and wraps back to 0°, forever, with no reverse
//! phase. It is an explicit task: it does nothing until [`start`] and stops
//! for good on [`cancel`].
//!
//! The angle is derived from elapsed ticks rather than accumulated per frame,
//! so dropped or irregular ticks never make the rotation drift.
//!
//! [`start`]: RotationAnimation::start
//! [`cancel`]: RotationAnimation::cancel

use crate::time::{Duration, HostTime, Timebase};

/// Degrees in one full turn.
pub const FULL_TURN: f64 = 360.0;

/// Lifecycle of a [`RotationAnimation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationState {
    /// Not started yet.
    Idle,
    /// Running since `started_at`.
    Running {
        /// Host time of the first frame of the first cycle.
        started_at: HostTime,
    },
    /// Cancelled; never runs again.
    Cancelled,
}

/// A linear, indefinitely repeating 0°→360° rotation.
#[derive(Clone, Copy, Debug)]
pub struct RotationAnimation {
    period: Duration,
    state: AnimationState,
}

impl RotationAnimation {
    /// Creates an idle animation completing one turn per `period`.
    ///
    /// A zero period holds the angle at 0°.
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            state: AnimationState::Idle,
        }
    }

    /// Creates an idle animation completing one turn every `secs` seconds.
    #[must_use]
    pub fn from_secs(secs: f64, timebase: Timebase) -> Self {
        Self::new(Duration::from_secs_f64(secs, timebase))
    }

    /// Time for one full turn.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> AnimationState {
        self.state
    }

    /// Returns whether the animation is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, AnimationState::Running { .. })
    }

    /// Starts the animation at `now`.
    ///
    /// Only an idle animation starts; returns whether this call started it.
    pub fn start(&mut self, now: HostTime) -> bool {
        if self.state != AnimationState::Idle {
            return false;
        }
        self.state = AnimationState::Running { started_at: now };
        true
    }

    /// Cancels the animation. Returns whether it was running.
    pub fn cancel(&mut self) -> bool {
        let was_running = self.is_running();
        self.state = AnimationState::Cancelled;
        was_running
    }

    /// Returns the angle in degrees (`0.0..360.0`) at `now`, or `None` if the
    /// animation is not running.
    ///
    /// Times before the start sample as 0°.
    #[must_use]
    pub fn sample(&self, now: HostTime) -> Option<f64> {
        let AnimationState::Running { started_at } = self.state else {
            return None;
        };
        let period = self.period.ticks();
        if period == 0 {
            return Some(0.0);
        }
        let phase = now.saturating_duration_since(started_at).ticks() % period;
        Some(phase as f64 / period as f64 * FULL_TURN)
    }

    /// Returns how many full turns have completed at `now`.
    #[must_use]
    pub fn cycle(&self, now: HostTime) -> u64 {
        match self.state {
            AnimationState::Running { started_at } if self.period.ticks() > 0 => {
                now.saturating_duration_since(started_at).ticks() / self.period.ticks()
            }
            _ => 0,
        }
    }
}
