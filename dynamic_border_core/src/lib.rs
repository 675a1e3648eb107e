// Copyright 2026 the Subduction Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated rotating-gradient border, declared into a retained layer tree.
//!
//! `dynamic_border_core` draws a thin glowing line that travels around the
//! rounded-rectangle outline of a card. It is `no_std` compatible (with
//! `alloc`) and knows nothing about pixels: it describes the composite as a
//! tree of layers with fills, clips, masks and transforms, and hands
//! incremental changes to a [`Presenter`](backend::Presenter).
//!
//! The effect is an oversized gradient plane rotating behind two masks: a
//! stroke of the card's outline and the card's filled interior. Where the
//! plane's bright band crosses the stroke the line lights up; everywhere else
//! the stroke shows nothing.
//!
//! # Architecture
//!
//! ```text
//!   host layout ──► SizeReport ──► BorderEffectView::on_layout()
//!   host frame  ──► HostTime   ──► BorderEffectView::tick()
//!                                        │
//!                 ┌──────────────────────┘
//!                 ▼
//!   LayerStore::evaluate() ──► FrameChanges ──► Presenter::apply()
//! ```
//!
//! **[`view`]**: [`BorderEffectView`](view::BorderEffectView), the component
//! itself, and the [`ContentSlot`](view::ContentSlot) trait for nested
//! content.
//!
//! **[`config`]**: immutable [`BorderConfig`](config::BorderConfig) with
//! chained setters and the two rendering variants.
//!
//! **[`geometry`]**: pure derivation of the gradient plane and the full
//! [`BorderScene`](geometry::BorderScene) from a measured size and angle.
//!
//! **[`layer`]**: struct-of-arrays layer tree with generational handles.
//!
//! **[`dirty`]**: multi-channel dirty tracking via `understory_dirty`.
//! TRANSFORM propagates to descendants; FILL, CLIP and MASK are local-only;
//! TOPOLOGY triggers a traversal rebuild.
//!
//! **[`observer`]** and **[`animation`]**: the layout size probe and the
//! repeat-forever rotation clock, both driven by the host.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and lifecycle
//! events, with zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Example
//!
//! ```
//! use dynamic_border_core::color::Color;
//! use dynamic_border_core::config::BorderConfig;
//! use dynamic_border_core::layer::LayerStore;
//! use dynamic_border_core::observer::SizeReport;
//! use dynamic_border_core::time::HostTime;
//! use dynamic_border_core::trace::Tracer;
//! use dynamic_border_core::view::BorderEffectView;
//! use kurbo::Size;
//!
//! let mut store = LayerStore::new();
//! let mut view = BorderEffectView::empty(BorderConfig::new(Color::BLUE));
//! let mut tracer = Tracer::none();
//!
//! view.mount(&mut store, None, &mut tracer);
//! view.on_layout(&mut store, SizeReport::new(1, Size::new(340.0, 80.0)), &mut tracer);
//! view.on_appear(HostTime(0), &mut tracer);
//! view.tick(&mut store, HostTime(1_000_000_000), &mut tracer);
//!
//! let changes = store.evaluate();
//! assert_eq!(changes.added.len(), 5);
//! assert_eq!(view.rotation_degrees(), 90.0);
//! ```
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod animation;
pub mod backend;
pub mod color;
pub mod config;
pub mod dirty;
pub mod geometry;
pub mod layer;
pub mod observer;
pub mod paint;
pub mod time;
pub mod trace;
pub mod view;
