// Copyright 2026 the Subduction Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The border effect view.
//!
//! [`BorderEffectView`] declares its composite into a [`LayerStore`] as a
//! small fixed subtree:
//!
//! ```text
//!   root
//!   ├── backdrop   opaque black rounded rect
//!   ├── content    clipped to the same rounded rect; ContentSlot builds here
//!   └── glow       offset to centre the plane; stroke mask + bounds mask
//!       └── plane  gradient-filled rounded rect, rotated about its centre
//! ```
//!
//! The host drives it: [`on_layout`](BorderEffectView::on_layout) with each
//! measured size, [`on_appear`](BorderEffectView::on_appear) once the view is
//! shown, [`tick`](BorderEffectView::tick) every frame, and
//! [`unmount`](BorderEffectView::unmount) on teardown. Each call writes only
//! the properties that actually changed, so a subsequent
//! [`LayerStore::evaluate`] reports exactly the affected layers: a rotation
//! step touches the plane's transform and nothing else.

use alloc::vec::Vec;

use kurbo::{Affine, Size};

use crate::animation::RotationAnimation;
use crate::color::Color;
use crate::config::BorderConfig;
use crate::geometry::{BorderScene, GradientPlane};
use crate::layer::{ClipShape, LayerId, LayerStore};
use crate::observer::{SizeObserver, SizeReport};
use crate::paint::{Fill, Paint};
use crate::time::{HostTime, Timebase};
use crate::trace::{AppearEvent, LayoutEvent, RenderEvent, RotationEvent, TeardownEvent, Tracer};

/// Caller-supplied content nested inside the border.
///
/// `build` runs once, at mount, and may create any number of layers under
/// `slot`. Those layers are clipped to the border's rounded rectangle and are
/// destroyed together with the view.
pub trait ContentSlot {
    /// Populates `slot` with content layers.
    fn build(&mut self, store: &mut LayerStore, slot: LayerId);
}

/// Content that declares nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyContent;

impl ContentSlot for EmptyContent {
    fn build(&mut self, _store: &mut LayerStore, _slot: LayerId) {}
}

impl<F> ContentSlot for F
where
    F: FnMut(&mut LayerStore, LayerId),
{
    fn build(&mut self, store: &mut LayerStore, slot: LayerId) {
        self(store, slot);
    }
}

#[derive(Clone, Copy, Debug)]
struct ViewLayers {
    root: LayerId,
    backdrop: LayerId,
    content: LayerId,
    glow: LayerId,
    plane: LayerId,
}

/// An animated rotating-gradient border around caller content.
#[derive(Debug)]
pub struct BorderEffectView<C = EmptyContent> {
    config: BorderConfig,
    content: C,
    observer: SizeObserver,
    measured: Size,
    animation: RotationAnimation,
    degrees: f64,
    layers: Option<ViewLayers>,
}

impl BorderEffectView<EmptyContent> {
    /// Creates a view with no nested content.
    #[must_use]
    pub fn empty(config: BorderConfig) -> Self {
        Self::new(config, EmptyContent)
    }
}

impl<C: ContentSlot> BorderEffectView<C> {
    /// Creates a view whose host clock ticks in nanoseconds.
    #[must_use]
    pub fn new(config: BorderConfig, content: C) -> Self {
        Self::with_timebase(config, content, Timebase::NANOS)
    }

    /// Creates a view for a host clock with the given timebase.
    #[must_use]
    pub fn with_timebase(config: BorderConfig, content: C, timebase: Timebase) -> Self {
        let animation = RotationAnimation::from_secs(config.duration_secs(), timebase);
        Self {
            config,
            content,
            observer: SizeObserver::new(),
            measured: Size::ZERO,
            animation,
            degrees: 0.0,
            layers: None,
        }
    }

    /// The view's configuration.
    #[must_use]
    pub fn config(&self) -> &BorderConfig {
        &self.config
    }

    /// The latest measured size; zero before the first layout pass.
    #[must_use]
    pub fn measured_size(&self) -> Size {
        self.measured
    }

    /// The current rotation angle in degrees.
    #[must_use]
    pub fn rotation_degrees(&self) -> f64 {
        self.degrees
    }

    /// The gradient plane for the current measured size.
    #[must_use]
    pub fn gradient_plane(&self) -> GradientPlane {
        GradientPlane::derive(
            self.measured,
            self.config.length(),
            self.config.border_variant(),
        )
    }

    /// Returns whether the view's layers exist in a store.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.layers.is_some()
    }

    /// Returns whether the rotation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    /// The root layer of the view, while mounted.
    #[must_use]
    pub fn root(&self) -> Option<LayerId> {
        self.layers.map(|l| l.root)
    }

    /// The layer content is built under, while mounted.
    #[must_use]
    pub fn content_slot(&self) -> Option<LayerId> {
        self.layers.map(|l| l.content)
    }

    /// Describes the composite for the current size and angle.
    #[must_use]
    pub fn scene(&self) -> BorderScene {
        BorderScene::describe(&self.config, self.measured, self.degrees)
    }

    /// Declares the view's layers under `parent` (or as a new tree root) and
    /// lets the content slot populate itself. Returns the view's root layer.
    ///
    /// # Panics
    ///
    /// Panics if the view is already mounted, or if `parent` is stale.
    pub fn mount(
        &mut self,
        store: &mut LayerStore,
        parent: Option<LayerId>,
        tracer: &mut Tracer<'_>,
    ) -> LayerId {
        assert!(self.layers.is_none(), "view is already mounted");

        let root = store.create_layer();
        let backdrop = store.create_layer();
        let content = store.create_layer();
        let glow = store.create_layer();
        let plane = store.create_layer();
        if let Some(parent) = parent {
            store.add_child(parent, root);
        }
        store.add_child(root, backdrop);
        store.add_child(root, content);
        store.add_child(root, glow);
        store.add_child(glow, plane);

        let layers = ViewLayers {
            root,
            backdrop,
            content,
            glow,
            plane,
        };
        self.layers = Some(layers);
        self.render(store, layers, tracer);
        self.content.build(store, content);
        root
    }

    /// Feeds a layout report to the size probe. Returns whether the measured
    /// size changed; if it did and the view is mounted, its geometry is
    /// re-rendered.
    pub fn on_layout(
        &mut self,
        store: &mut LayerStore,
        report: SizeReport,
        tracer: &mut Tracer<'_>,
    ) -> bool {
        let accepted = self.observer.report(report);
        tracer.layout(&LayoutEvent {
            pass: report.pass,
            size: if accepted {
                self.observer.latest()
            } else {
                report.size
            },
            accepted,
        });

        let Some(size) = self.observer.take() else {
            return false;
        };
        if size == self.measured {
            return false;
        }
        self.measured = size;
        if let Some(layers) = self.layers {
            self.render(store, layers, tracer);
        }
        true
    }

    /// Starts the rotation on first appearance. Returns whether it started;
    /// later appearances, and appearances after unmount, do nothing.
    pub fn on_appear(&mut self, now: HostTime, tracer: &mut Tracer<'_>) -> bool {
        if !self.animation.start(now) {
            return false;
        }
        tracer.appear(&AppearEvent {
            at: now,
            period: self.animation.period(),
        });
        true
    }

    /// Samples the rotation at `now`. Returns whether the angle changed; if it
    /// did and the view is mounted, the plane's transform is updated.
    pub fn tick(
        &mut self,
        store: &mut LayerStore,
        now: HostTime,
        tracer: &mut Tracer<'_>,
    ) -> bool {
        let Some(degrees) = self.animation.sample(now) else {
            return false;
        };
        if degrees == self.degrees {
            return false;
        }
        self.degrees = degrees;
        if let Some(layers) = self.layers {
            store.set_transform(layers.plane, self.gradient_plane().rotation(degrees));
        }
        tracer.rotation(&RotationEvent {
            at: now,
            degrees,
            cycle: self.animation.cycle(now),
        });
        true
    }

    /// Cancels the rotation and destroys every layer the view declared,
    /// including content layers. Returns the number of layers destroyed.
    ///
    /// The rotation never restarts afterwards.
    pub fn unmount(&mut self, store: &mut LayerStore, tracer: &mut Tracer<'_>) -> usize {
        let cancelled_animation = self.animation.cancel();
        let layers_destroyed = match self.layers.take() {
            Some(layers) => destroy_subtree(store, layers.root),
            None => 0,
        };
        tracer.teardown(&TeardownEvent {
            layers_destroyed,
            cancelled_animation,
        });
        layers_destroyed
    }

    fn render(&self, store: &mut LayerStore, layers: ViewLayers, tracer: &mut Tracer<'_>) {
        let scene = self.scene();

        store.set_fill(
            layers.backdrop,
            Some(Fill {
                shape: scene.backdrop,
                paint: Paint::Solid(Color::BLACK),
            }),
        );
        store.set_clip(
            layers.content,
            Some(ClipShape::RoundedRect(scene.content_clip)),
        );
        store.set_transform(layers.glow, Affine::translate(scene.overlay_offset));
        store.set_masks(layers.glow, &[scene.stroke_mask, scene.bounds_mask]);
        store.set_fill(
            layers.plane,
            Some(Fill {
                shape: scene.plane_shape,
                paint: Paint::Linear(scene.gradient),
            }),
        );
        store.set_transform(layers.plane, scene.rotation);

        tracer.render(&RenderEvent {
            measured: self.measured,
            plane: scene.plane,
        });
    }
}

/// Destroys `id` and all of its descendants, children first.
fn destroy_subtree(store: &mut LayerStore, id: LayerId) -> usize {
    let children: Vec<LayerId> = store.children(id).collect();
    let mut destroyed = 0;
    for child in children {
        destroyed += destroy_subtree(store, child);
    }
    store.destroy_layer(id);
    destroyed + 1
}
