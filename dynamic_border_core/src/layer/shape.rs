// Copyright 2026 the Subduction Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clip and mask shapes.

use kurbo::{Point, Rect, RoundedRect, Shape as _, Vec2};

/// A shape used to clip a layer's content and descendants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClipShape {
    /// An axis-aligned rectangle.
    Rect(Rect),
    /// A rectangle with rounded corners.
    RoundedRect(RoundedRect),
}

/// A mask restricting a layer's visible pixels to the coverage of a shape.
///
/// A layer may carry several masks; a pixel is visible only where every mask
/// covers it. Masks live in the layer's local coordinate space but are not
/// affected by the transforms of its descendants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mask {
    /// The outline of a rounded rectangle stroked with `width`, centered on
    /// the outline.
    Stroke {
        /// The stroked outline.
        shape: RoundedRect,
        /// Total stroke width; half falls on each side of the outline.
        width: f64,
    },
    /// The filled interior of a rounded rectangle.
    Fill(RoundedRect),
}

impl Mask {
    /// Returns the axis-aligned bounds of the covered area.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        match *self {
            Self::Stroke { shape, width } => {
                let half = (width * 0.5).max(0.0);
                shape.rect().inflate(half, half)
            }
            Self::Fill(shape) => shape.rect(),
        }
    }

    /// Returns whether `point` is covered by this mask.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        match *self {
            Self::Stroke { shape, width } => {
                signed_distance(&shape, point).abs() <= width * 0.5
            }
            Self::Fill(shape) => shape.contains(point),
        }
    }
}

/// Signed distance from `point` to the outline of `shape`: negative inside,
/// positive outside.
///
/// Uses the top-left radius for every corner.
fn signed_distance(shape: &RoundedRect, point: Point) -> f64 {
    let rect = shape.rect();
    let radius = shape.radii().top_left;
    let center = rect.center();
    let qx = (point.x - center.x).abs() - rect.width() * 0.5 + radius;
    let qy = (point.y - center.y).abs() - rect.height() * 0.5 + radius;
    let outside = Vec2::new(qx.max(0.0), qy.max(0.0)).hypot();
    let inside = qx.max(qy).min(0.0);
    outside + inside - radius
}
