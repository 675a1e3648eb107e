// Copyright 2026 the Subduction Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Border configuration.
//!
//! A [`BorderConfig`] is built once when a view is created and never changes
//! afterwards. It is constructed either from a single base color, which
//! expands into the symmetric fade of [`symmetric_stops`], or from an explicit
//! list of gradient stops used verbatim. Geometry parameters are set with
//! chained setters:
//!
//! ```
//! use dynamic_border_core::color::Color;
//! use dynamic_border_core::config::BorderConfig;
//!
//! let config = BorderConfig::new(Color::BLUE)
//!     .line_length(210.0)
//!     .line_thickness(4.0)
//!     .corner_radius(40.0)
//!     .duration(8.0);
//! assert_eq!(config.stroke_width(), 8.0);
//! ```

use alloc::vec;
use alloc::vec::Vec;

use crate::color::{Color, symmetric_stops};
use crate::geometry::LayoutDirection;

/// Corner-radius reduction applied to both masks by [`BorderVariant::Inset`].
pub const MASK_INSET: f64 = 5.0;

/// Which flavor of the effect to render.
///
/// The two variants differ in mask rounding and gradient direction; neither
/// is a refinement of the other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BorderVariant {
    /// Gradient direction follows the aspect ratio of the measured size and
    /// both masks use the configured corner radius.
    #[default]
    Adaptive,
    /// Gradient always runs leading to trailing and both masks use the corner
    /// radius reduced by [`MASK_INSET`].
    Inset,
}

/// Immutable configuration of a border effect.
#[derive(Clone, Debug, PartialEq)]
pub struct BorderConfig {
    colors: Vec<Color>,
    line_length: f64,
    stroke_width: f64,
    corner_radius: f64,
    duration: f64,
    variant: BorderVariant,
    layout_direction: LayoutDirection,
}

impl BorderConfig {
    /// Default length of the traveling highlight.
    pub const DEFAULT_LINE_LENGTH: f64 = 140.0;
    /// Default requested line thickness.
    pub const DEFAULT_LINE_THICKNESS: f64 = 2.0;
    /// Default corner radius.
    pub const DEFAULT_CORNER_RADIUS: f64 = 24.0;
    /// Default time for one full rotation, in seconds.
    pub const DEFAULT_DURATION: f64 = 4.0;
    /// Default base color.
    pub const DEFAULT_COLOR: Color = Color::RED;

    /// Creates a configuration whose gradient is the symmetric fade of `color`.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self::from_stops(symmetric_stops(color))
    }

    /// Creates a configuration using `colors` as the gradient stops, in order.
    ///
    /// An empty list yields a single transparent stop, so the ring draws
    /// nothing.
    #[must_use]
    pub fn with_colors(colors: impl IntoIterator<Item = Color>) -> Self {
        let mut colors: Vec<Color> = colors.into_iter().collect();
        if colors.is_empty() {
            colors = vec![Color::TRANSPARENT];
        }
        Self::from_stops(colors)
    }

    fn from_stops(colors: Vec<Color>) -> Self {
        Self {
            colors,
            line_length: Self::DEFAULT_LINE_LENGTH,
            stroke_width: Self::DEFAULT_LINE_THICKNESS * 2.0,
            corner_radius: Self::DEFAULT_CORNER_RADIUS,
            duration: Self::DEFAULT_DURATION,
            variant: BorderVariant::Adaptive,
            layout_direction: LayoutDirection::LeftToRight,
        }
    }

    /// Sets the length of the traveling highlight.
    #[must_use]
    pub fn line_length(mut self, line_length: f64) -> Self {
        self.line_length = line_length;
        self
    }

    /// Sets the visible line thickness.
    ///
    /// The stroke mask is centered on the outline and its outer half is cut
    /// away by the bounds mask, so the stored stroke width is twice the
    /// requested thickness.
    #[must_use]
    pub fn line_thickness(mut self, thickness: f64) -> Self {
        self.stroke_width = thickness * 2.0;
        self
    }

    /// Sets the corner radius of the backdrop, content clip and masks.
    #[must_use]
    pub fn corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    /// Sets the time for one full rotation, in seconds.
    #[must_use]
    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    /// Selects the rendering variant.
    #[must_use]
    pub fn variant(mut self, variant: BorderVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the writing direction used to resolve leading and trailing edges.
    #[must_use]
    pub fn layout_direction(mut self, direction: LayoutDirection) -> Self {
        self.layout_direction = direction;
        self
    }

    /// The gradient stops, in order.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Length of the traveling highlight.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.line_length
    }

    /// Width of the stroke mask (twice the requested thickness).
    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Corner radius of the backdrop and content clip.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.corner_radius
    }

    /// Corner radius used by the stroke and bounds masks.
    ///
    /// Never negative.
    #[must_use]
    pub fn mask_radius(&self) -> f64 {
        let radius = match self.variant {
            BorderVariant::Adaptive => self.corner_radius,
            BorderVariant::Inset => self.corner_radius - MASK_INSET,
        };
        radius.max(0.0)
    }

    /// Time for one full rotation, in seconds.
    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        self.duration
    }

    /// The rendering variant.
    #[must_use]
    pub fn border_variant(&self) -> BorderVariant {
        self.variant
    }

    /// The writing direction.
    #[must_use]
    pub fn direction(&self) -> LayoutDirection {
        self.layout_direction
    }
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::FADE_PROFILE;

    #[test]
    fn defaults_match_table() {
        let config = BorderConfig::default();
        assert_eq!(config.length(), 140.0);
        assert_eq!(config.stroke_width(), 4.0);
        assert_eq!(config.radius(), 24.0);
        assert_eq!(config.duration_secs(), 4.0);
        assert_eq!(config.border_variant(), BorderVariant::Adaptive);
        assert_eq!(config.direction(), LayoutDirection::LeftToRight);
        assert_eq!(config.colors(), symmetric_stops(Color::RED).as_slice());
    }

    #[test]
    fn thickness_is_stored_doubled() {
        for t in [0.5, 1.0, 2.0, 3.25, 10.0] {
            let config = BorderConfig::new(Color::BLUE).line_thickness(t);
            assert_eq!(config.stroke_width(), 2.0 * t, "thickness {t}");
        }
    }

    #[test]
    fn base_color_yields_eight_faded_stops() {
        let config = BorderConfig::new(Color::GREEN);
        let alphas: Vec<f32> = config.colors().iter().map(|c| c.a).collect();
        assert_eq!(alphas, FADE_PROFILE.to_vec());
    }

    #[test]
    fn explicit_colors_are_used_verbatim() {
        let stops = [Color::RED, Color::GREEN, Color::BLUE];
        let config = BorderConfig::with_colors(stops);
        assert_eq!(config.colors(), &stops);
    }

    #[test]
    fn empty_colors_become_transparent() {
        let config = BorderConfig::with_colors(Vec::new());
        assert_eq!(config.colors(), &[Color::TRANSPARENT]);
    }

    #[test]
    fn inset_variant_reduces_mask_radius() {
        let adaptive = BorderConfig::default().corner_radius(40.0);
        assert_eq!(adaptive.mask_radius(), 40.0);

        let inset = adaptive.variant(BorderVariant::Inset);
        assert_eq!(inset.mask_radius(), 35.0);
        assert_eq!(inset.radius(), 40.0, "backdrop keeps the full radius");
    }

    #[test]
    fn inset_mask_radius_never_negative() {
        let config = BorderConfig::default()
            .corner_radius(3.0)
            .variant(BorderVariant::Inset);
        assert_eq!(config.mask_radius(), 0.0);
    }
}
