// Copyright 2026 the Subduction Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Invalidation channels for the layer tree.
//!
//! Layer property setters mark one of these channels through
//! [`understory_dirty`]; [`LayerStore::evaluate`](crate::layer::LayerStore::evaluate)
//! drains them and reports the affected layers in
//! [`FrameChanges`](crate::layer::FrameChanges). This is how a view's state
//! changes (a new measured size, a new rotation angle) reach the presenter
//! without any manual redraw bookkeeping.
//!
//! - [`TRANSFORM`] propagates to descendants, since world transforms are
//!   inherited. Rotating the gradient plane only touches this channel.
//! - [`FILL`], [`CLIP`] and [`MASK`] are local to the marked layer.
//! - [`TOPOLOGY`] marks structural changes and triggers a traversal rebuild.

use understory_dirty::Channel;

/// Local transform changed; descendants need new world transforms.
pub const TRANSFORM: Channel = Channel::new(0);

/// Fill shape or paint changed.
pub const FILL: Channel = Channel::new(1);

/// Clip shape changed.
pub const CLIP: Channel = Channel::new(2);

/// Mask list changed.
pub const MASK: Channel = Channel::new(3);

/// Tree topology changed.
pub const TOPOLOGY: Channel = Channel::new(4);
