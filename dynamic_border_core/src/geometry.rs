// Copyright 2026 the Subduction Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry of the border composite.
//!
//! Everything here is a pure function of a [`BorderConfig`], the measured
//! size, and the current rotation angle.
//!
//! # Coordinate spaces
//!
//! - **Bounds space**: origin at the top-left of the measured rectangle. The
//!   backdrop, content clip and the overlay's placement are expressed here.
//! - **Overlay space**: origin at the top-left of the oversized gradient
//!   plane, which is centred on the measured rectangle. The plane, its
//!   rotation and both masks are expressed here, so the masks stay put while
//!   the plane turns underneath them.

use kurbo::{Affine, Point, Rect, RoundedRect, Size, Vec2};

use crate::config::{BorderConfig, BorderVariant};
use crate::layer::Mask;
use crate::paint::LinearGradient;

/// Writing direction used to resolve leading and trailing edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutDirection {
    /// Leading is the left edge.
    #[default]
    LeftToRight,
    /// Leading is the right edge.
    RightToLeft,
}

/// Axis along which the gradient stops are laid out on the plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GradientDirection {
    /// First stop at the top edge, last at the bottom edge.
    TopToBottom,
    /// First stop at the leading edge, last at the trailing edge.
    LeadingToTrailing,
}

impl GradientDirection {
    /// Returns the start and end points of the gradient axis across `rect`.
    #[must_use]
    pub fn endpoints(self, rect: Rect, layout: LayoutDirection) -> (Point, Point) {
        let center = rect.center();
        match (self, layout) {
            (Self::TopToBottom, _) => (Point::new(center.x, rect.y0), Point::new(center.x, rect.y1)),
            (Self::LeadingToTrailing, LayoutDirection::LeftToRight) => {
                (Point::new(rect.x0, center.y), Point::new(rect.x1, center.y))
            }
            (Self::LeadingToTrailing, LayoutDirection::RightToLeft) => {
                (Point::new(rect.x1, center.y), Point::new(rect.x0, center.y))
            }
        }
    }
}

/// Size and gradient direction of the oversized plane behind the stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientPlane {
    /// Plane size.
    pub size: Size,
    /// Gradient axis.
    pub direction: GradientDirection,
}

impl GradientPlane {
    /// Derives the plane for a measured size.
    ///
    /// Landscape sizes (`width > height`) get a `2 × width` by `line_length`
    /// plane; everything else gets `line_length` by `2 × height`. Twice the
    /// long side keeps the plane covering the stroke at every angle. The
    /// [`Inset`](BorderVariant::Inset) variant always runs leading to
    /// trailing.
    #[must_use]
    pub fn derive(measured: Size, line_length: f64, variant: BorderVariant) -> Self {
        let landscape = measured.width > measured.height;
        let size = if landscape {
            Size::new(measured.width * 2.0, line_length)
        } else {
            Size::new(line_length, measured.height * 2.0)
        };
        let direction = match variant {
            BorderVariant::Adaptive if landscape => GradientDirection::TopToBottom,
            BorderVariant::Adaptive | BorderVariant::Inset => GradientDirection::LeadingToTrailing,
        };
        Self { size, direction }
    }

    /// Rotation by `degrees` about the plane's centre, in plane coordinates.
    #[must_use]
    pub fn rotation(&self, degrees: f64) -> Affine {
        let pivot = self.size.to_rect().center().to_vec2();
        Affine::translate(pivot) * Affine::rotate(degrees.to_radians()) * Affine::translate(-pivot)
    }
}

/// A complete description of the composite for one state of the view.
#[derive(Clone, Debug, PartialEq)]
pub struct BorderScene {
    /// The measured rectangle, in bounds space.
    pub bounds: Rect,
    /// Opaque backdrop shape, in bounds space.
    pub backdrop: RoundedRect,
    /// Clip applied to the caller's content, in bounds space.
    pub content_clip: RoundedRect,
    /// Plane geometry.
    pub plane: GradientPlane,
    /// Translation placing overlay space inside bounds space.
    pub overlay_offset: Vec2,
    /// The gradient plane's shape, in overlay space.
    pub plane_shape: RoundedRect,
    /// Gradient painted on the plane, in overlay space.
    pub gradient: LinearGradient,
    /// Rotation of the plane about its centre, in overlay space.
    pub rotation: Affine,
    /// Stroke mask, in overlay space.
    pub stroke_mask: Mask,
    /// Bounds mask, in overlay space.
    pub bounds_mask: Mask,
}

impl BorderScene {
    /// Describes the composite for `measured` size and rotation `degrees`.
    #[must_use]
    pub fn describe(config: &BorderConfig, measured: Size, degrees: f64) -> Self {
        let bounds = measured.to_rect();
        let radius = config.radius().max(0.0);
        let plane = GradientPlane::derive(measured, config.length(), config.border_variant());

        let plane_rect = plane.size.to_rect();
        let overlay_offset = bounds.center() - plane_rect.center();
        // The measured rectangle, seen from overlay space.
        let inner = bounds - overlay_offset;
        let mask_shape = RoundedRect::from_rect(inner, config.mask_radius());

        let (start, end) = plane.direction.endpoints(plane_rect, config.direction());

        Self {
            bounds,
            backdrop: RoundedRect::from_rect(bounds, radius),
            content_clip: RoundedRect::from_rect(bounds, radius),
            plane,
            overlay_offset,
            plane_shape: RoundedRect::from_rect(plane_rect, radius),
            gradient: LinearGradient {
                start,
                end,
                stops: config.colors().to_vec(),
            },
            rotation: plane.rotation(degrees),
            stroke_mask: Mask::Stroke {
                shape: mask_shape,
                width: config.stroke_width(),
            },
            bounds_mask: Mask::Fill(mask_shape),
        }
    }

    /// Returns whether the ring may paint at `point` (bounds space): inside
    /// both masks and on the rotated plane.
    #[must_use]
    pub fn ring_covers(&self, point: Point) -> bool {
        let local = point - self.overlay_offset;
        if !self.stroke_mask.contains(local) || !self.bounds_mask.contains(local) {
            return false;
        }
        let on_plane = self.rotation.inverse() * local;
        self.plane_shape.rect().contains(on_plane)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::color::Color;

    fn blue() -> BorderConfig {
        BorderConfig::new(Color::BLUE)
            .line_length(140.0)
            .line_thickness(2.0)
            .corner_radius(24.0)
            .duration(4.0)
    }

    #[test]
    fn landscape_plane_is_wide_and_vertical() {
        let plane = GradientPlane::derive(Size::new(340.0, 80.0), 140.0, BorderVariant::Adaptive);
        assert_eq!(plane.size, Size::new(680.0, 140.0));
        assert_eq!(plane.direction, GradientDirection::TopToBottom);
    }

    #[test]
    fn portrait_plane_is_tall_and_horizontal() {
        let plane = GradientPlane::derive(Size::new(340.0, 460.0), 140.0, BorderVariant::Adaptive);
        assert_eq!(plane.size, Size::new(140.0, 920.0));
        assert_eq!(plane.direction, GradientDirection::LeadingToTrailing);
    }

    #[test]
    fn square_counts_as_portrait() {
        let plane = GradientPlane::derive(Size::new(200.0, 200.0), 50.0, BorderVariant::Adaptive);
        assert_eq!(plane.size, Size::new(50.0, 400.0));
        assert_eq!(plane.direction, GradientDirection::LeadingToTrailing);
    }

    #[test]
    fn plane_matches_aspect_for_many_sizes() {
        for (w, h) in [(1.0, 0.5), (10.0, 9.99), (500.0, 20.0), (0.0, 0.0), (3.0, 30.0)] {
            let plane = GradientPlane::derive(Size::new(w, h), 140.0, BorderVariant::Adaptive);
            if w > h {
                assert_eq!(plane.size, Size::new(2.0 * w, 140.0), "{w}x{h}");
                assert_eq!(plane.direction, GradientDirection::TopToBottom);
            } else {
                assert_eq!(plane.size, Size::new(140.0, 2.0 * h), "{w}x{h}");
                assert_eq!(plane.direction, GradientDirection::LeadingToTrailing);
            }
        }
    }

    #[test]
    fn inset_variant_always_runs_leading_to_trailing() {
        let plane = GradientPlane::derive(Size::new(340.0, 80.0), 140.0, BorderVariant::Inset);
        assert_eq!(plane.size, Size::new(680.0, 140.0));
        assert_eq!(plane.direction, GradientDirection::LeadingToTrailing);
    }

    #[test]
    fn endpoints_respect_writing_direction() {
        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
        assert_eq!(
            GradientDirection::TopToBottom.endpoints(rect, LayoutDirection::RightToLeft),
            (Point::new(50.0, 0.0), Point::new(50.0, 40.0))
        );
        assert_eq!(
            GradientDirection::LeadingToTrailing.endpoints(rect, LayoutDirection::LeftToRight),
            (Point::new(0.0, 20.0), Point::new(100.0, 20.0))
        );
        assert_eq!(
            GradientDirection::LeadingToTrailing.endpoints(rect, LayoutDirection::RightToLeft),
            (Point::new(100.0, 20.0), Point::new(0.0, 20.0))
        );
    }

    #[test]
    fn landscape_scene() {
        let scene = BorderScene::describe(&blue(), Size::new(340.0, 80.0), 0.0);
        assert_eq!(scene.plane.size, Size::new(680.0, 140.0));
        assert_eq!(scene.plane.direction, GradientDirection::TopToBottom);
        assert_eq!(scene.overlay_offset, Vec2::new(-170.0, -30.0));
        assert_eq!(scene.gradient.start, Point::new(340.0, 0.0));
        assert_eq!(scene.gradient.end, Point::new(340.0, 140.0));
        assert_eq!(scene.gradient.stops.len(), 8);

        let Mask::Stroke { shape, width } = scene.stroke_mask else {
            panic!("expected a stroke mask");
        };
        assert_eq!(width, 4.0);
        assert_eq!(shape.rect(), Rect::new(170.0, 30.0, 510.0, 110.0));
        assert_eq!(scene.bounds_mask, Mask::Fill(shape));
    }

    #[test]
    fn portrait_scene() {
        let scene = BorderScene::describe(&blue(), Size::new(340.0, 460.0), 0.0);
        assert_eq!(scene.plane.size, Size::new(140.0, 920.0));
        assert_eq!(scene.plane.direction, GradientDirection::LeadingToTrailing);
        assert_eq!(scene.overlay_offset, Vec2::new(100.0, -230.0));
        assert_eq!(scene.gradient.start, Point::new(0.0, 460.0));
        assert_eq!(scene.gradient.end, Point::new(140.0, 460.0));
    }

    #[test]
    fn explicit_stops_pass_through_unmodified() {
        let stops = vec![Color::RED, Color::new(0.1, 0.2, 0.3, 0.4), Color::BLUE];
        let config = BorderConfig::with_colors(stops.clone());
        let scene = BorderScene::describe(&config, Size::new(100.0, 100.0), 45.0);
        assert_eq!(scene.gradient.stops, stops);
    }

    #[test]
    fn rotation_pivots_on_plane_center() {
        let scene = BorderScene::describe(&blue(), Size::new(340.0, 80.0), 90.0);
        let center = Point::new(340.0, 70.0);
        let moved = scene.rotation * center;
        let eps = 1e-9;
        assert!((moved - center).hypot() < eps, "centre moved to {moved:?}");
        // A point right of centre swings below it (y grows downwards).
        let p = scene.rotation * Point::new(440.0, 70.0);
        assert!((p - Point::new(340.0, 170.0)).hypot() < eps, "got {p:?}");
    }

    #[test]
    fn inset_scene_shrinks_mask_radius_only() {
        let config = blue().variant(BorderVariant::Inset);
        let scene = BorderScene::describe(&config, Size::new(340.0, 80.0), 0.0);
        assert_eq!(scene.backdrop.radii().top_left, 24.0);
        assert_eq!(scene.content_clip.radii().top_left, 24.0);
        let Mask::Fill(shape) = scene.bounds_mask else {
            panic!("expected a fill mask");
        };
        assert_eq!(shape.radii().top_left, 19.0);
        assert_eq!(scene.plane.direction, GradientDirection::LeadingToTrailing);
    }

    #[test]
    fn visible_ring_has_requested_thickness() {
        // Landscape plane: at 0° it covers y in [-30, 110] of bounds space,
        // i.e. the whole height of an 80-high card.
        let scene = BorderScene::describe(&blue(), Size::new(340.0, 80.0), 0.0);
        // Top edge, horizontally centred.
        assert!(scene.ring_covers(Point::new(170.0, 0.5)));
        assert!(scene.ring_covers(Point::new(170.0, 1.9)));
        assert!(!scene.ring_covers(Point::new(170.0, 2.1)), "beyond thickness");
        assert!(!scene.ring_covers(Point::new(170.0, -0.5)), "outside bounds");
        assert!(!scene.ring_covers(Point::new(170.0, 40.0)), "interior");
    }

    #[test]
    fn rotated_plane_leaves_gaps_on_the_stroke() {
        // Rotated a quarter turn, the 140-wide landscape plane stands upright
        // over the centre, so the stroke is lit only near x = 170.
        let scene = BorderScene::describe(&blue(), Size::new(340.0, 80.0), 90.0);
        assert!(scene.ring_covers(Point::new(170.0, 1.0)));
        assert!(!scene.ring_covers(Point::new(30.0, 1.0)));
    }
}
