// Copyright 2026 the Subduction Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays layer storage with allocation, topology, and property management.

use alloc::vec::Vec;

use kurbo::Affine;
use understory_dirty::{CycleHandling, DirtyTracker, EagerPolicy};

use super::id::{INVALID, LayerId};
use super::shape::{ClipShape, Mask};
use super::traverse::Children;
use crate::dirty;
use crate::paint::Fill;

/// Struct-of-arrays storage for all layers.
///
/// Layers are addressed by [`LayerId`] handles. Each layer occupies a slot in
/// parallel arrays; destroyed slots are recycled through a free list and a
/// per-slot generation counter invalidates old handles.
#[derive(Debug)]
pub struct LayerStore {
    // -- Topology --
    pub(crate) parent: Vec<u32>,
    pub(crate) first_child: Vec<u32>,
    pub(crate) next_sibling: Vec<u32>,
    pub(crate) prev_sibling: Vec<u32>,

    // -- Local properties (set by callers) --
    pub(crate) local_transform: Vec<Affine>,
    pub(crate) fill: Vec<Option<Fill>>,
    pub(crate) clip: Vec<Option<ClipShape>>,
    pub(crate) masks: Vec<Vec<Mask>>,

    // -- Computed properties (written by evaluate) --
    pub(crate) world_transform: Vec<Affine>,

    // -- Allocation --
    pub(crate) generation: Vec<u32>,
    pub(crate) free_list: Vec<u32>,
    pub(crate) len: u32,

    // -- Dirty tracking --
    pub(crate) dirty: DirtyTracker<u32>,

    // -- Traversal cache --
    pub(crate) traversal_order: Vec<u32>,
    pub(crate) traversal_dirty: bool,

    // -- Lifecycle tracking --
    pub(crate) pending_added: Vec<u32>,
    pub(crate) pending_removed: Vec<u32>,
}

impl Default for LayerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerStore {
    /// Creates an empty layer store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parent: Vec::new(),
            first_child: Vec::new(),
            next_sibling: Vec::new(),
            prev_sibling: Vec::new(),
            local_transform: Vec::new(),
            fill: Vec::new(),
            clip: Vec::new(),
            masks: Vec::new(),
            world_transform: Vec::new(),
            generation: Vec::new(),
            free_list: Vec::new(),
            len: 0,
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            traversal_order: Vec::new(),
            traversal_dirty: true,
            pending_added: Vec::new(),
            pending_removed: Vec::new(),
        }
    }

    // -- Allocation API --

    /// Creates a new layer and returns its handle.
    ///
    /// The layer starts with an identity transform, no fill, no clip, no
    /// masks, and no parent.
    pub fn create_layer(&mut self) -> LayerId {
        let idx = if let Some(idx) = self.free_list.pop() {
            let slot = idx as usize;
            self.generation[slot] += 1;
            self.parent[slot] = INVALID;
            self.first_child[slot] = INVALID;
            self.next_sibling[slot] = INVALID;
            self.prev_sibling[slot] = INVALID;
            self.local_transform[slot] = Affine::IDENTITY;
            self.fill[slot] = None;
            self.clip[slot] = None;
            self.masks[slot].clear();
            self.world_transform[slot] = Affine::IDENTITY;
            idx
        } else {
            let idx = self.len;
            self.len += 1;
            self.parent.push(INVALID);
            self.first_child.push(INVALID);
            self.next_sibling.push(INVALID);
            self.prev_sibling.push(INVALID);
            self.local_transform.push(Affine::IDENTITY);
            self.fill.push(None);
            self.clip.push(None);
            self.masks.push(Vec::new());
            self.world_transform.push(Affine::IDENTITY);
            self.generation.push(0);
            idx
        };

        self.traversal_dirty = true;
        self.pending_added.push(idx);
        self.dirty.mark(idx, dirty::TOPOLOGY);

        LayerId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Destroys a layer, freeing its slot for reuse.
    ///
    /// A layer that is still attached is unlinked from its parent first.
    ///
    /// # Panics
    ///
    /// Panics if the layer has children (destroy them first) or if the
    /// handle is stale.
    pub fn destroy_layer(&mut self, id: LayerId) {
        self.validate(id);
        let idx = id.idx;
        assert!(
            self.first_child[idx as usize] == INVALID,
            "cannot destroy layer with children"
        );

        let parent = self.parent[idx as usize];
        if parent != INVALID {
            self.unlink_from_parent(idx);
            self.dirty.mark(parent, dirty::TOPOLOGY);
        }

        self.dirty.remove_key(idx);
        self.generation[idx as usize] += 1;
        self.free_list.push(idx);
        self.traversal_dirty = true;
        self.pending_removed.push(idx);
    }

    /// Returns whether the given handle refers to a live layer.
    #[must_use]
    pub fn is_alive(&self, id: LayerId) -> bool {
        (id.idx < self.len)
            && self.generation[id.idx as usize] == id.generation
            && !self.free_list.contains(&id.idx)
    }

    /// Returns the number of live layers.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.len as usize - self.free_list.len()
    }

    // -- Topology API --

    /// Adds `child` as the last child of `parent`.
    ///
    /// Later children composite above earlier ones.
    ///
    /// # Panics
    ///
    /// Panics if either handle is stale, or if `child` already has a parent.
    pub fn add_child(&mut self, parent: LayerId, child: LayerId) {
        self.validate(parent);
        self.validate(child);
        let p = parent.idx;
        let c = child.idx;
        assert!(
            self.parent[c as usize] == INVALID,
            "child already has a parent"
        );

        self.parent[c as usize] = p;
        self.prev_sibling[c as usize] = INVALID;
        self.next_sibling[c as usize] = INVALID;

        if self.first_child[p as usize] == INVALID {
            self.first_child[p as usize] = c;
        } else {
            let mut last = self.first_child[p as usize];
            while self.next_sibling[last as usize] != INVALID {
                last = self.next_sibling[last as usize];
            }
            self.next_sibling[last as usize] = c;
            self.prev_sibling[c as usize] = last;
        }

        // Child world transform depends on the parent's.
        let _ = self.dirty.add_dependency(c, p, dirty::TRANSFORM);
        self.dirty.mark_with(c, dirty::TRANSFORM, &EagerPolicy);

        self.traversal_dirty = true;
        self.dirty.mark(p, dirty::TOPOLOGY);
    }

    /// Returns the parent of a layer, if any.
    #[must_use]
    pub fn parent(&self, id: LayerId) -> Option<LayerId> {
        self.validate(id);
        let p = self.parent[id.idx as usize];
        (p != INVALID).then(|| LayerId {
            idx: p,
            generation: self.generation[p as usize],
        })
    }

    /// Returns an iterator over the direct children of a layer, bottom-most
    /// first.
    #[must_use]
    pub fn children(&self, id: LayerId) -> Children<'_> {
        self.validate(id);
        Children::new(self, self.first_child[id.idx as usize])
    }

    // -- Property getters (read-only, no dirty marking) --

    /// Returns the local transform of a layer.
    #[must_use]
    pub fn local_transform(&self, id: LayerId) -> Affine {
        self.validate(id);
        self.local_transform[id.idx as usize]
    }

    /// Returns the fill of a layer.
    #[must_use]
    pub fn fill(&self, id: LayerId) -> Option<&Fill> {
        self.validate(id);
        self.fill[id.idx as usize].as_ref()
    }

    /// Returns the clip shape of a layer.
    #[must_use]
    pub fn clip(&self, id: LayerId) -> Option<ClipShape> {
        self.validate(id);
        self.clip[id.idx as usize]
    }

    /// Returns the masks of a layer, in application order.
    #[must_use]
    pub fn masks(&self, id: LayerId) -> &[Mask] {
        self.validate(id);
        &self.masks[id.idx as usize]
    }

    /// Returns the computed world transform of a layer.
    ///
    /// Only valid after [`evaluate`](Self::evaluate) has been called.
    #[must_use]
    pub fn world_transform(&self, id: LayerId) -> Affine {
        self.validate(id);
        self.world_transform[id.idx as usize]
    }

    // -- Mutation API (auto-marks dirty) --
    //
    // Writing a value equal to the current one is a no-op, so callers may
    // re-apply a whole scene description without producing spurious changes.

    /// Sets the local transform of a layer.
    ///
    /// Marks the TRANSFORM channel dirty with eager propagation to descendants.
    pub fn set_transform(&mut self, id: LayerId, transform: Affine) {
        self.validate(id);
        let slot = &mut self.local_transform[id.idx as usize];
        if *slot != transform {
            *slot = transform;
            self.dirty.mark_with(id.idx, dirty::TRANSFORM, &EagerPolicy);
        }
    }

    /// Sets the fill of a layer.
    pub fn set_fill(&mut self, id: LayerId, fill: Option<Fill>) {
        self.validate(id);
        let slot = &mut self.fill[id.idx as usize];
        if *slot != fill {
            *slot = fill;
            self.dirty.mark(id.idx, dirty::FILL);
        }
    }

    /// Sets the clip shape of a layer.
    pub fn set_clip(&mut self, id: LayerId, clip: Option<ClipShape>) {
        self.validate(id);
        let slot = &mut self.clip[id.idx as usize];
        if *slot != clip {
            *slot = clip;
            self.dirty.mark(id.idx, dirty::CLIP);
        }
    }

    /// Replaces the masks of a layer.
    pub fn set_masks(&mut self, id: LayerId, masks: &[Mask]) {
        self.validate(id);
        let slot = &mut self.masks[id.idx as usize];
        if slot.as_slice() != masks {
            slot.clear();
            slot.extend_from_slice(masks);
            self.dirty.mark(id.idx, dirty::MASK);
        }
    }

    // -- Raw-index accessors for presenters --
    //
    // These accept raw slot indices (as found in `FrameChanges`) rather than
    // `LayerId` handles, skipping generation validation.

    /// Returns the computed world transform at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn world_transform_at(&self, idx: u32) -> Affine {
        self.check_slot(idx);
        self.world_transform[idx as usize]
    }

    /// Returns the fill at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn fill_at(&self, idx: u32) -> Option<&Fill> {
        self.check_slot(idx);
        self.fill[idx as usize].as_ref()
    }

    /// Returns the clip shape at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn clip_at(&self, idx: u32) -> Option<ClipShape> {
        self.check_slot(idx);
        self.clip[idx as usize]
    }

    /// Returns the masks at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn masks_at(&self, idx: u32) -> &[Mask] {
        self.check_slot(idx);
        &self.masks[idx as usize]
    }

    /// Returns the parent slot of raw slot `idx`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn parent_at(&self, idx: u32) -> Option<u32> {
        self.check_slot(idx);
        let p = self.parent[idx as usize];
        (p != INVALID).then_some(p)
    }

    // -- Internal helpers --

    /// Panics if the handle is stale.
    fn validate(&self, id: LayerId) {
        assert!(
            id.idx < self.len && self.generation[id.idx as usize] == id.generation,
            "stale LayerId: {id:?} (current gen: {})",
            if id.idx < self.len {
                self.generation[id.idx as usize]
            } else {
                u32::MAX
            }
        );
    }

    fn check_slot(&self, idx: u32) {
        assert!(
            idx < self.len,
            "slot index {idx} out of range (len {})",
            self.len
        );
    }

    /// Removes `idx` from its parent's child list.
    fn unlink_from_parent(&mut self, idx: u32) {
        let p = self.parent[idx as usize];
        let prev = self.prev_sibling[idx as usize];
        let next = self.next_sibling[idx as usize];

        if prev != INVALID {
            self.next_sibling[prev as usize] = next;
        } else {
            self.first_child[p as usize] = next;
        }
        if next != INVALID {
            self.prev_sibling[next as usize] = prev;
        }

        self.dirty.remove_dependency(idx, p, dirty::TRANSFORM);
        self.parent[idx as usize] = INVALID;
        self.prev_sibling[idx as usize] = INVALID;
        self.next_sibling[idx as usize] = INVALID;
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::{Rect, RoundedRect};

    use super::*;
    use crate::color::Color;
    use crate::paint::Paint;

    fn solid(color: Color) -> Fill {
        Fill {
            shape: RoundedRect::from_rect(Rect::new(0.0, 0.0, 100.0, 50.0), 8.0),
            paint: Paint::Solid(color),
        }
    }

    #[test]
    fn create_and_destroy() {
        let mut store = LayerStore::new();
        let id = store.create_layer();
        assert!(store.is_alive(id));
        assert_eq!(store.live_count(), 1);
        store.destroy_layer(id);
        assert!(!store.is_alive(id));
        assert_eq!(store.live_count(), 0);
    }

    #[test]
    fn generation_prevents_stale_access() {
        let mut store = LayerStore::new();
        let id1 = store.create_layer();
        store.destroy_layer(id1);
        let id2 = store.create_layer();
        assert!(!store.is_alive(id1));
        assert!(store.is_alive(id2));
        assert_eq!(id1.index(), id2.index());
        assert_ne!(id1.generation(), id2.generation());
    }

    #[test]
    fn recycled_slot_starts_clean() {
        let mut store = LayerStore::new();
        let id = store.create_layer();
        store.set_fill(id, Some(solid(Color::RED)));
        store.set_masks(id, &[Mask::Fill(RoundedRect::new(0.0, 0.0, 1.0, 1.0, 0.0))]);
        store.destroy_layer(id);

        let fresh = store.create_layer();
        assert_eq!(fresh.index(), id.index());
        assert!(store.fill(fresh).is_none());
        assert!(store.masks(fresh).is_empty());
    }

    #[test]
    fn add_child_and_query() {
        let mut store = LayerStore::new();
        let parent = store.create_layer();
        let child1 = store.create_layer();
        let child2 = store.create_layer();

        store.add_child(parent, child1);
        store.add_child(parent, child2);

        assert_eq!(store.parent(child1), Some(parent));
        assert_eq!(store.parent(child2), Some(parent));
        assert_eq!(store.parent_at(child1.index()), Some(parent.index()));
        assert_eq!(store.parent_at(parent.index()), None);

        let kids: Vec<_> = store.children(parent).collect();
        assert_eq!(kids, vec![child1, child2]);
    }

    #[test]
    fn destroying_attached_child_unlinks_it() {
        let mut store = LayerStore::new();
        let parent = store.create_layer();
        let a = store.create_layer();
        let b = store.create_layer();
        let c = store.create_layer();
        store.add_child(parent, a);
        store.add_child(parent, b);
        store.add_child(parent, c);

        store.destroy_layer(b);
        let kids: Vec<_> = store.children(parent).collect();
        assert_eq!(kids, vec![a, c]);

        store.destroy_layer(a);
        store.destroy_layer(c);
        assert!(store.children(parent).next().is_none());
        store.destroy_layer(parent);
    }

    #[test]
    #[should_panic(expected = "cannot destroy layer with children")]
    fn destroy_with_children_panics() {
        let mut store = LayerStore::new();
        let parent = store.create_layer();
        let child = store.create_layer();
        store.add_child(parent, child);
        store.destroy_layer(parent);
    }

    #[test]
    #[should_panic(expected = "child already has a parent")]
    fn add_child_twice_panics() {
        let mut store = LayerStore::new();
        let a = store.create_layer();
        let b = store.create_layer();
        let child = store.create_layer();
        store.add_child(a, child);
        store.add_child(b, child);
    }

    #[test]
    #[should_panic(expected = "stale LayerId")]
    fn destroyed_handle_panics_on_get_transform() {
        let mut store = LayerStore::new();
        let id = store.create_layer();
        store.destroy_layer(id);
        let _ = store.world_transform(id);
    }

    #[test]
    #[should_panic(expected = "stale LayerId")]
    fn destroyed_handle_panics_on_set_fill() {
        let mut store = LayerStore::new();
        let id = store.create_layer();
        store.destroy_layer(id);
        store.set_fill(id, None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn raw_accessor_checks_range() {
        let store = LayerStore::new();
        let _ = store.clip_at(3);
    }

    #[test]
    fn setters_store_values() {
        let mut store = LayerStore::new();
        let id = store.create_layer();
        let xf = Affine::rotate(1.0).then_translate((5.0, 5.0).into());
        let clip = ClipShape::Rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        let masks = [
            Mask::Stroke {
                shape: RoundedRect::new(0.0, 0.0, 10.0, 10.0, 2.0),
                width: 4.0,
            },
            Mask::Fill(RoundedRect::new(0.0, 0.0, 10.0, 10.0, 2.0)),
        ];

        store.set_transform(id, xf);
        store.set_fill(id, Some(solid(Color::BLUE)));
        store.set_clip(id, Some(clip));
        store.set_masks(id, &masks);

        assert_eq!(store.local_transform(id), xf);
        assert_eq!(store.fill(id), Some(&solid(Color::BLUE)));
        assert_eq!(store.clip(id), Some(clip));
        assert_eq!(store.masks(id), &masks);
        assert_eq!(store.masks_at(id.index()), &masks);
        assert_eq!(store.fill_at(id.index()), Some(&solid(Color::BLUE)));
    }

    #[test]
    fn equal_writes_do_not_mark_dirty() {
        let mut store = LayerStore::new();
        let id = store.create_layer();
        store.set_fill(id, Some(solid(Color::RED)));
        store.set_transform(id, Affine::translate((3.0, 4.0)));
        let _ = store.evaluate();

        store.set_fill(id, Some(solid(Color::RED)));
        store.set_transform(id, Affine::translate((3.0, 4.0)));
        store.set_clip(id, None);
        store.set_masks(id, &[]);
        let changes = store.evaluate();
        assert!(changes.is_empty(), "no-op writes produced {changes:?}");
    }

    #[test]
    fn set_fill_marks_dirty() {
        let mut store = LayerStore::new();
        let id = store.create_layer();
        let _ = store.evaluate();

        store.set_fill(id, Some(solid(Color::GREEN)));
        let changes = store.evaluate();
        assert!(
            changes.fills.contains(&id.index()),
            "fill channel should contain the layer"
        );
    }

    #[test]
    fn set_masks_marks_dirty() {
        let mut store = LayerStore::new();
        let id = store.create_layer();
        let _ = store.evaluate();

        store.set_masks(id, &[Mask::Fill(RoundedRect::new(0.0, 0.0, 4.0, 4.0, 1.0))]);
        let changes = store.evaluate();
        assert!(
            changes.masks.contains(&id.index()),
            "mask channel should contain the layer"
        );
    }
}
