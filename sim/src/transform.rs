//! World-space pose storage.
//!
//! Every simulated entity owns one node in a [`TransformArena`], addressed by
//! a stable [`TransformId`]. Parent links are a navigation relationship
//! (camera node -> hull node -> boat node); the simulation reads and writes
//! world-space poses directly and flags what it touched as dirty so a
//! downstream consumer can propagate local spaces however it likes.

use bevy::prelude::*;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a pose node. Stays valid until the node is removed; a
    /// recycled slot carries a new generation, so stale handles never alias.
    pub struct TransformId;
}

#[derive(Debug, Clone)]
pub struct TransformNode {
    pub transform: Transform,
    pub parent: Option<TransformId>,
    /// Set when the simulation writes this pose, cleared by whoever consumes
    /// the change.
    pub dirty: bool,
}

#[derive(Debug, Default)]
pub struct TransformArena {
    nodes: SlotMap<TransformId, TransformNode>,
}

impl TransformArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, transform: Transform, parent: Option<TransformId>) -> TransformId {
        self.nodes.insert(TransformNode {
            transform,
            parent,
            dirty: false,
        })
    }

    pub fn remove(&mut self, id: TransformId) -> Option<TransformNode> {
        self.nodes.remove(id)
    }

    pub fn contains(&self, id: TransformId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Panics on a stale handle; handles are owned by the world that spawned
    /// them and outlive every tick that uses them.
    pub fn get(&self, id: TransformId) -> &Transform {
        &self.nodes[id].transform
    }

    pub fn get_mut(&mut self, id: TransformId) -> &mut Transform {
        &mut self.nodes[id].transform
    }

    pub fn node(&self, id: TransformId) -> &TransformNode {
        &self.nodes[id]
    }

    pub fn parent_of(&self, id: TransformId) -> Option<TransformId> {
        self.nodes[id].parent
    }

    pub fn parent_transform(&self, id: TransformId) -> Option<&Transform> {
        self.parent_of(id).map(|parent| self.get(parent))
    }

    pub fn parent_transform_mut(&mut self, id: TransformId) -> Option<&mut Transform> {
        self.parent_of(id).map(|parent| self.get_mut(parent))
    }

    pub fn mark_dirty(&mut self, id: TransformId) {
        self.nodes[id].dirty = true;
    }

    pub fn is_dirty(&self, id: TransformId) -> bool {
        self.nodes[id].dirty
    }

    /// Drain pass for the propagation step: clears every dirty flag and
    /// returns the ids that were set.
    pub fn take_dirty(&mut self) -> Vec<TransformId> {
        let mut dirty = Vec::new();
        for (id, node) in self.nodes.iter_mut() {
            if node.dirty {
                node.dirty = false;
                dirty.push(id);
            }
        }
        dirty
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
