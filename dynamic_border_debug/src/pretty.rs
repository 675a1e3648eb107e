// Copyright 2026 the Subduction Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Timestamps
//! are converted to microseconds using a [`Timebase`].

use std::io::Write;

use dynamic_border_core::geometry::GradientDirection;
use dynamic_border_core::time::{HostTime, Timebase};
use dynamic_border_core::trace::{
    AppearEvent, LayoutEvent, RenderEvent, RotationEvent, TeardownEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    timebase: Timebase,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("timebase", &self.timebase)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr(timebase: Timebase) -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
            timebase,
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W, timebase: Timebase) -> Self {
        Self { writer, timebase }
    }

    /// Consumes the sink and returns its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn host_us(&self, t: HostTime) -> f64 {
        self.timebase.ticks_to_nanos(t.ticks()) as f64 / 1000.0
    }
}

fn direction_name(direction: GradientDirection) -> &'static str {
    match direction {
        GradientDirection::TopToBottom => "top-bottom",
        GradientDirection::LeadingToTrailing => "leading-trailing",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_layout(&mut self, e: &LayoutEvent) {
        let status = if e.accepted { "ok" } else { "STALE" };
        let _ = writeln!(
            self.writer,
            "[layout] pass={} size={}x{} {status}",
            e.pass, e.size.width, e.size.height,
        );
    }

    fn on_appear(&mut self, e: &AppearEvent) {
        let _ = writeln!(
            self.writer,
            "[appear] at {:.1}µs period={:.3}s",
            self.host_us(e.at),
            e.period.as_secs_f64(self.timebase),
        );
    }

    fn on_render(&mut self, e: &RenderEvent) {
        let _ = writeln!(
            self.writer,
            "[render] measured={}x{} plane={}x{} {}",
            e.measured.width,
            e.measured.height,
            e.plane.size.width,
            e.plane.size.height,
            direction_name(e.plane.direction),
        );
    }

    fn on_rotation(&mut self, e: &RotationEvent) {
        let _ = writeln!(
            self.writer,
            "[rotation] at {:.1}µs angle={:.2}° cycle={}",
            self.host_us(e.at),
            e.degrees,
            e.cycle,
        );
    }

    fn on_teardown(&mut self, e: &TeardownEvent) {
        let animation = if e.cancelled_animation {
            "cancelled"
        } else {
            "idle"
        };
        let _ = writeln!(
            self.writer,
            "[teardown] layers={} animation={animation}",
            e.layers_destroyed,
        );
    }
}

#[cfg(test)]
mod tests {
    use dynamic_border_core::color::Color;
    use dynamic_border_core::config::BorderConfig;
    use dynamic_border_core::layer::LayerStore;
    use dynamic_border_core::observer::SizeReport;
    use dynamic_border_core::trace::Tracer;
    use dynamic_border_core::view::BorderEffectView;
    use kurbo::Size;

    use super::*;

    #[test]
    fn pretty_print_layout() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new(), Timebase::NANOS);
        sink.on_layout(&LayoutEvent {
            pass: 3,
            size: Size::new(340.0, 80.0),
            accepted: false,
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "[layout] pass=3 size=340x80 STALE\n");
    }

    #[test]
    fn pretty_print_view_lifecycle() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new(), Timebase::NANOS);
        let mut store = LayerStore::new();
        let mut view = BorderEffectView::empty(BorderConfig::new(Color::BLUE));
        {
            let mut tracer = Tracer::new(&mut sink);
            view.mount(&mut store, None, &mut tracer);
            view.on_layout(
                &mut store,
                SizeReport::new(1, Size::new(340.0, 80.0)),
                &mut tracer,
            );
            view.on_appear(HostTime(0), &mut tracer);
            view.tick(&mut store, HostTime(2_000_000_000), &mut tracer);
            view.unmount(&mut store, &mut tracer);
        }
        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 6, "got: {output}");
        assert_eq!(lines[0], "[render] measured=0x0 plane=140x0 leading-trailing");
        assert_eq!(lines[1], "[layout] pass=1 size=340x80 ok");
        assert_eq!(lines[2], "[render] measured=340x80 plane=680x140 top-bottom");
        assert_eq!(lines[3], "[appear] at 0.0µs period=4.000s");
        assert_eq!(
            lines[4],
            "[rotation] at 2000000.0µs angle=180.00° cycle=0"
        );
        assert_eq!(lines[5], "[teardown] layers=5 animation=cancelled");
    }
}
