// Copyright 2026 the Subduction Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fill descriptions attached to layers.

use alloc::vec::Vec;

use kurbo::{Point, RoundedRect};

use crate::color::Color;

/// A linear gradient between two points, with stops evenly distributed from
/// `start` (first stop) to `end` (last stop).
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    /// Where the first stop sits.
    pub start: Point,
    /// Where the last stop sits.
    pub end: Point,
    /// Stop colors, in order.
    pub stops: Vec<Color>,
}

impl LinearGradient {
    /// Returns the offsets (`0.0..=1.0`) of each stop along the gradient axis.
    ///
    /// A single stop sits at `0.0`.
    #[must_use]
    pub fn offsets(&self) -> Vec<f32> {
        let n = self.stops.len();
        if n <= 1 {
            return self.stops.iter().map(|_| 0.0).collect();
        }
        let last = (n - 1) as f32;
        (0..n).map(|i| i as f32 / last).collect()
    }
}

/// How a fill shape is painted.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    /// A single color.
    Solid(Color),
    /// A linear gradient.
    Linear(LinearGradient),
}

/// A rounded rectangle filled with a [`Paint`], in layer-local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Fill {
    /// The filled shape.
    pub shape: RoundedRect,
    /// How the shape is painted.
    pub paint: Paint,
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn gradient(stops: Vec<Color>) -> LinearGradient {
        LinearGradient {
            start: Point::new(0.0, 0.0),
            end: Point::new(0.0, 100.0),
            stops,
        }
    }

    #[test]
    fn offsets_are_evenly_spaced() {
        let g = gradient(vec![Color::RED, Color::GREEN, Color::BLUE]);
        assert_eq!(g.offsets(), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn single_stop_offset() {
        let g = gradient(vec![Color::RED]);
        assert_eq!(g.offsets(), vec![0.0]);
    }
}
