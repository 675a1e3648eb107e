// Copyright 2026 the Subduction Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout size probe.
//!
//! The host's layout system emits a [`SizeReport`] for the probed node on
//! every layout pass. [`SizeObserver`] keeps the most recent one and hands it
//! to its owner on [`take`](SizeObserver::take). Reports are ordered by their
//! pass number, so a late-arriving report from an older pass never replaces a
//! newer measurement.

use kurbo::Size;

/// The size of a node as measured by one layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeReport {
    /// Monotonically increasing layout pass number.
    pub pass: u64,
    /// Measured size. Negative or NaN dimensions are treated as zero.
    pub size: Size,
}

impl SizeReport {
    /// Creates a report.
    #[must_use]
    pub const fn new(pass: u64, size: Size) -> Self {
        Self { pass, size }
    }
}

/// Last-write-wins holder for layout size reports.
#[derive(Clone, Copy, Debug, Default)]
pub struct SizeObserver {
    latest: Option<SizeReport>,
    unread: bool,
}

impl SizeObserver {
    /// Creates an observer that has seen no layout pass.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latest: None,
            unread: false,
        }
    }

    /// Records a report. Returns `false` (and keeps the current value) if the
    /// report comes from an older pass than the latest accepted one.
    pub fn report(&mut self, report: SizeReport) -> bool {
        if self.latest.is_some_and(|latest| report.pass < latest.pass) {
            return false;
        }
        self.latest = Some(SizeReport {
            pass: report.pass,
            size: sanitize(report.size),
        });
        self.unread = true;
        true
    }

    /// Returns the latest size if it has not been read yet.
    pub fn take(&mut self) -> Option<Size> {
        if !self.unread {
            return None;
        }
        self.unread = false;
        self.latest.map(|r| r.size)
    }

    /// Latest accepted size, or zero before the first layout pass.
    #[must_use]
    pub fn latest(&self) -> Size {
        self.latest.map_or(Size::ZERO, |r| r.size)
    }

    /// Pass number of the latest accepted report.
    #[must_use]
    pub fn latest_pass(&self) -> Option<u64> {
        self.latest.map(|r| r.pass)
    }
}

fn sanitize(size: Size) -> Size {
    // `f64::max` returns the non-NaN operand.
    Size::new(size.width.max(0.0), size.height.max(0.0))
}
