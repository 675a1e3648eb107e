// Copyright 2026 the Subduction Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON snapshots of the evaluated layer tree.
//!
//! [`SnapshotPresenter`] implements [`Presenter`] and, whenever a frame
//! carries changes, re-captures every live layer in compositing order. The
//! result is a plain [`serde_json::Value`] suitable for golden-file tests or
//! for dumping to a file while debugging a host integration.

use std::io::{self, Write};

use serde_json::{Value, json};

use dynamic_border_core::backend::Presenter;
use dynamic_border_core::color::Color;
use dynamic_border_core::layer::{ClipShape, FrameChanges, LayerStore, Mask};
use dynamic_border_core::paint::{Fill, Paint};
use kurbo::{Affine, Rect, RoundedRect};

/// A [`Presenter`] that records the evaluated layer tree as JSON.
#[derive(Clone, Debug, Default)]
pub struct SnapshotPresenter {
    frames: u64,
    last_changed: usize,
    layers: Vec<Value>,
}

impl SnapshotPresenter {
    /// Creates a presenter that has not seen a frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames applied so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Number of property and lifecycle changes in the last applied frame.
    #[must_use]
    pub fn last_changed(&self) -> usize {
        self.last_changed
    }

    /// The captured layers, back to front.
    #[must_use]
    pub fn layers(&self) -> &[Value] {
        &self.layers
    }

    /// Returns the full snapshot document.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "frames": self.frames,
            "last_changed": self.last_changed,
            "layers": self.layers,
        })
    }

    /// Writes the snapshot document as pretty-printed JSON.
    pub fn write_pretty(&self, writer: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, &self.to_json())?;
        writeln!(writer)
    }
}

impl Presenter for SnapshotPresenter {
    fn apply(&mut self, store: &LayerStore, changes: &FrameChanges) {
        self.frames += 1;
        self.last_changed = changes.transforms.len()
            + changes.fills.len()
            + changes.clips.len()
            + changes.masks.len()
            + changes.added.len()
            + changes.removed.len();
        if changes.is_empty() {
            return;
        }
        self.layers = store
            .traversal_order()
            .iter()
            .map(|&idx| layer_json(store, idx))
            .collect();
    }
}

fn layer_json(store: &LayerStore, idx: u32) -> Value {
    json!({
        "index": idx,
        "parent": store.parent_at(idx),
        "world": affine_json(store.world_transform_at(idx)),
        "fill": store.fill_at(idx).map(fill_json),
        "clip": store.clip_at(idx).map(clip_json),
        "masks": store.masks_at(idx).iter().map(mask_json).collect::<Vec<_>>(),
    })
}

fn affine_json(affine: Affine) -> Value {
    json!(affine.as_coeffs())
}

fn rect_json(rect: Rect) -> Value {
    json!([rect.x0, rect.y0, rect.x1, rect.y1])
}

fn rounded_rect_json(shape: RoundedRect) -> Value {
    json!({
        "rect": rect_json(shape.rect()),
        "radius": shape.radii().top_left,
    })
}

fn color_json(color: Color) -> Value {
    let [r, g, b, a] = color.to_rgba8();
    Value::String(format!("#{r:02x}{g:02x}{b:02x}{a:02x}"))
}

fn fill_json(fill: &Fill) -> Value {
    let paint = match &fill.paint {
        Paint::Solid(color) => json!({ "solid": color_json(*color) }),
        Paint::Linear(gradient) => json!({
            "linear": {
                "start": [gradient.start.x, gradient.start.y],
                "end": [gradient.end.x, gradient.end.y],
                "stops": gradient.stops.iter().copied().map(color_json).collect::<Vec<_>>(),
            }
        }),
    };
    json!({
        "shape": rounded_rect_json(fill.shape),
        "paint": paint,
    })
}

fn clip_json(clip: ClipShape) -> Value {
    match clip {
        ClipShape::Rect(rect) => json!({ "rect": rect_json(rect) }),
        ClipShape::RoundedRect(shape) => json!({ "rounded": rounded_rect_json(shape) }),
    }
}

fn mask_json(mask: &Mask) -> Value {
    match *mask {
        Mask::Stroke { shape, width } => json!({
            "stroke": rounded_rect_json(shape),
            "width": width,
        }),
        Mask::Fill(shape) => json!({ "fill": rounded_rect_json(shape) }),
    }
}
