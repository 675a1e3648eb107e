// Copyright 2026 the Subduction Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for rendering integrations.
//!
//! This crate owns the data model: configuration, geometry, the layer tree
//! and its evaluation, and the rotation clock. Turning evaluated layers into
//! pixels is the job of a *presenter* that lives outside it, typically inside
//! a host toolkit or a GPU renderer.
//!
//! Presenters read slot indices from [`FrameChanges`] and pull the current
//! property values (world transform, fill, clip, masks) from the
//! [`LayerStore`] through its `*_at` accessors. Layers composite back to
//! front in [`LayerStore::traversal_order`]; a layer's clip and masks apply to
//! it and to all of its descendants.

use crate::layer::{FrameChanges, LayerStore};

/// Applies evaluated frame changes to a presentation tree.
///
/// # Frame loop pseudocode
///
/// A host wires a view into its frame callback like this:
///
/// ```rust,ignore
/// fn on_frame(now: HostTime) {
///     // Layout: forward the measured size of the content slot
///     view.on_layout(&mut store, SizeReport::new(pass, size), tracer);
///
///     // Animate: sample the rotation for this frame
///     view.tick(&mut store, now, tracer);
///
///     // Evaluate: drain dirty channels, recompute world transforms
///     let changes = store.evaluate();
///
///     // Present: apply incremental changes to the native tree
///     presenter.apply(&store, &changes);
/// }
/// ```
pub trait Presenter {
    /// Applies the given [`FrameChanges`] to the backing presentation tree,
    /// reading current property values from `store` as needed.
    fn apply(&mut self, store: &LayerStore, changes: &FrameChanges);
}
