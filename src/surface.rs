//! The rendering-surface capability the engine drives.
//!
//! The engine never holds node references. It names nodes by [`ObjectId`] and
//! resolves them through a [`SurfaceHandle`] at the moment of use. Hosts
//! implement the trait over their scene graph; [`MemorySurface`] is a plain
//! in-memory implementation for headless use and tests.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::doc::{ContentObject, ObjectId, PartialContentObject};

/// Live transform of a surface node, including the transient scale factors a
/// resize handle applies while it is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeTransform {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl NodeTransform {
    /// An unscaled node mirroring `obj`.
    #[must_use]
    pub fn of(obj: &ContentObject) -> Self {
        Self {
            x: obj.x,
            y: obj.y,
            width: obj.width(),
            height: obj.height(),
            rotation: obj.rotation,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

/// Read/write access to surface nodes plus the transformer widget.
pub trait SurfaceHandle {
    /// Current transform of the node for `id`, or `None` if no such node is mounted.
    fn get_transform(&self, id: &ObjectId) -> Option<NodeTransform>;

    /// Apply the present fields of `patch` to the node for `id`.
    fn set_transform(&mut self, id: &ObjectId, patch: &PartialContentObject);

    /// Reset the node's scale factors to `(1, 1)`.
    fn reset_scale(&mut self, id: &ObjectId);

    /// Attach the transformer to exactly these nodes.
    fn attach_transformer(&mut self, ids: &[ObjectId]);

    /// Detach the transformer from every node.
    fn detach_transformer(&mut self);
}

/// In-memory surface: a map of node transforms and the transformer's current
/// attachment list.
#[derive(Debug, Default)]
pub struct MemorySurface {
    nodes: HashMap<ObjectId, NodeTransform>,
    attached: Vec<ObjectId>,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create (or replace) the node for `obj`.
    pub fn mount(&mut self, obj: &ContentObject) {
        self.nodes.insert(obj.id, NodeTransform::of(obj));
    }

    /// Drop the node for `id`. The transformer forgets it too.
    pub fn unmount(&mut self, id: &ObjectId) {
        self.nodes.remove(id);
        self.attached.retain(|a| a != id);
    }

    #[must_use]
    pub fn node(&self, id: &ObjectId) -> Option<&NodeTransform> {
        self.nodes.get(id)
    }

    /// Mutable access, used to play back what a live gesture does to a node.
    pub fn node_mut(&mut self, id: &ObjectId) -> Option<&mut NodeTransform> {
        self.nodes.get_mut(id)
    }

    /// Ids the transformer is attached to, in attach order.
    #[must_use]
    pub fn attached(&self) -> &[ObjectId] {
        &self.attached
    }
}

impl SurfaceHandle for MemorySurface {
    fn get_transform(&self, id: &ObjectId) -> Option<NodeTransform> {
        self.nodes.get(id).copied()
    }

    fn set_transform(&mut self, id: &ObjectId, patch: &PartialContentObject) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        if let Some(x) = patch.x {
            node.x = x;
        }
        if let Some(y) = patch.y {
            node.y = y;
        }
        if let Some(w) = patch.width {
            node.width = w;
        }
        if let Some(h) = patch.height {
            node.height = h;
        }
        if let Some(r) = patch.rotation {
            node.rotation = r;
        }
    }

    fn reset_scale(&mut self, id: &ObjectId) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.scale_x = 1.0;
            node.scale_y = 1.0;
        }
    }

    fn attach_transformer(&mut self, ids: &[ObjectId]) {
        self.attached = ids
            .iter()
            .filter(|id| self.nodes.contains_key(*id))
            .copied()
            .collect();
    }

    fn detach_transformer(&mut self) {
        self.attached.clear();
    }
}
