// Copyright 2026 the Subduction Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained layer tree the border view declares its composite into.
//!
//! A *layer* is a node in a compositing tree. Each layer has:
//!
//! - An identity ([`LayerId`]), a generational handle that goes stale when
//!   the layer is destroyed.
//! - Topology: parent, first-child, and sibling links forming an ordered
//!   tree. Later siblings composite above earlier ones.
//! - **Local properties** set by the caller:
//!   [`transform`](LayerStore::set_transform), [`fill`](LayerStore::set_fill),
//!   [`clip`](LayerStore::set_clip) and [`masks`](LayerStore::set_masks).
//! - A **computed** `world_transform` (product of ancestor local transforms)
//!   produced by [`evaluate`](LayerStore::evaluate).
//!
//! A clip bounds a layer *and* its descendants in the layer's own space. Masks
//! are applied to the layer's composited subtree, in order, after descendant
//! transforms; this is what lets a rotating child be cut to a fixed outline.
//!
//! Property mutations mark the channels described in [`dirty`](crate::dirty).

mod evaluate;
mod id;
mod shape;
mod store;
mod traverse;

pub use evaluate::FrameChanges;
pub use id::{INVALID, LayerId};
pub use shape::{ClipShape, Mask};
pub use store::LayerStore;
pub use traverse::Children;
