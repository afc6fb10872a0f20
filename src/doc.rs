//! Document model: content objects, their style, and the in-memory store.
//!
//! A `ContentObject` is one selectable rectangle placed over the garment
//! backdrop. Its position is local to the backdrop group. Width and height
//! never drop below [`MIN_SIZE`]: the floor is applied on construction, on
//! deserialization, and by every mutation that goes through this module.
//!
//! `style` is an opaque JSON bag owned by the host (fill colour and the like).
//! Nothing in the geometry or transform path reads it, and transforms leave
//! it untouched. `Style` gives typed read access for renderers.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{DEFAULT_CONTENT_HEIGHT, DEFAULT_CONTENT_WIDTH, DEFAULT_FILL, MIN_SIZE};
use crate::geom::{Bounds, OrientedRect, axis_aligned_bounds};

/// Unique identifier for a content object.
pub type ObjectId = Uuid;

/// Clamp a candidate width or height to the size floor.
///
/// Non-finite values (from a NaN or infinite scale factor) collapse to the floor.
#[must_use]
pub fn clamp_size(value: f64) -> f64 {
    if value.is_finite() { value.max(MIN_SIZE) } else { MIN_SIZE }
}

/// A selectable, transformable rectangle on the design surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawContentObject")]
pub struct ContentObject {
    /// Unique identifier, assigned at creation and never reused.
    pub id: ObjectId,
    /// Left edge in group-local coordinates.
    pub x: f64,
    /// Top edge in group-local coordinates.
    pub y: f64,
    width: f64,
    height: f64,
    /// Clockwise rotation in degrees around the top-left corner. Any range.
    pub rotation: f64,
    /// Opaque presentation data (fill etc.).
    pub style: serde_json::Value,
}

/// Wire shape of a content object before the size floor is applied.
#[derive(Deserialize)]
struct RawContentObject {
    id: ObjectId,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    #[serde(default)]
    rotation: f64,
    #[serde(default)]
    style: serde_json::Value,
}

impl From<RawContentObject> for ContentObject {
    fn from(raw: RawContentObject) -> Self {
        Self {
            id: raw.id,
            x: raw.x,
            y: raw.y,
            width: clamp_size(raw.width),
            height: clamp_size(raw.height),
            rotation: raw.rotation,
            style: raw.style,
        }
    }
}

impl ContentObject {
    /// Create an unrotated object with a fresh id. Size is clamped to the floor.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            x,
            y,
            width: clamp_size(width),
            height: clamp_size(height),
            rotation: 0.0,
            style: serde_json::json!({ "fill": DEFAULT_FILL }),
        }
    }

    /// Create an object at `(x, y)` with the default content size.
    #[must_use]
    pub fn with_defaults(x: f64, y: f64) -> Self {
        Self::new(x, y, DEFAULT_CONTENT_WIDTH, DEFAULT_CONTENT_HEIGHT)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Set both dimensions, clamping each to the size floor.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = clamp_size(width);
        self.height = clamp_size(height);
    }

    /// The oriented rectangle this object occupies in group-local space.
    #[must_use]
    pub fn oriented(&self) -> OrientedRect {
        OrientedRect { x: self.x, y: self.y, width: self.width, height: self.height, rotation: self.rotation }
    }

    /// Axis-aligned envelope of the rotated object, in group-local space.
    #[must_use]
    pub fn local_bounds(&self) -> Bounds {
        axis_aligned_bounds(&self.oriented())
    }
}

/// Sparse update for a content object. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialContentObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// New width; clamped to the floor when applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// New height; clamped to the floor when applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

impl PartialContentObject {
    /// Returns `true` if no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.width.is_none() && self.height.is_none() && self.rotation.is_none()
    }
}

/// Typed access to common fields of a content object's `style` bag.
pub struct Style<'a> {
    value: &'a serde_json::Value,
}

impl<'a> Style<'a> {
    #[must_use]
    pub fn new(value: &'a serde_json::Value) -> Self {
        Self { value }
    }

    /// Fill colour as a CSS colour string. Defaults to [`DEFAULT_FILL`].
    #[must_use]
    pub fn fill(&self) -> &str {
        self.value
            .get("fill")
            .and_then(|v| v.as_str())
            .unwrap_or(DEFAULT_FILL)
    }

    /// Opacity in `[0, 1]`. Defaults to `1.0` when absent.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.value
            .get("opacity")
            .and_then(serde_json::Value::as_f64)
            .map_or(1.0, |o| o.clamp(0.0, 1.0))
    }
}

/// In-memory store of content objects.
#[derive(Debug, Default)]
pub struct ContentStore {
    objects: HashMap<ObjectId, ContentObject>,
}

impl ContentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { objects: HashMap::new() }
    }

    /// Insert or replace an object by id.
    pub fn insert(&mut self, obj: ContentObject) {
        self.objects.insert(obj.id, obj);
    }

    /// Remove an object by id, returning it if it was present.
    pub fn remove(&mut self, id: &ObjectId) -> Option<ContentObject> {
        self.objects.remove(id)
    }

    #[must_use]
    pub fn get(&self, id: &ObjectId) -> Option<&ContentObject> {
        self.objects.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    /// Apply a sparse update. Returns false if the object doesn't exist.
    ///
    /// Width and height pass through [`clamp_size`]; `style` is never touched.
    pub fn apply_partial(&mut self, id: &ObjectId, partial: &PartialContentObject) -> bool {
        let Some(obj) = self.objects.get_mut(id) else {
            return false;
        };
        if let Some(x) = partial.x {
            obj.x = x;
        }
        if let Some(y) = partial.y {
            obj.y = y;
        }
        if let Some(w) = partial.width {
            obj.width = clamp_size(w);
        }
        if let Some(h) = partial.height {
            obj.height = clamp_size(h);
        }
        if let Some(r) = partial.rotation {
            obj.rotation = r;
        }
        true
    }

    /// Replace all objects.
    pub fn load(&mut self, objects: Vec<ContentObject>) {
        self.objects.clear();
        for obj in objects {
            self.objects.insert(obj.id, obj);
        }
    }

    /// All objects ordered by id, for deterministic iteration.
    #[must_use]
    pub fn sorted_objects(&self) -> Vec<&ContentObject> {
        let mut objs: Vec<&ContentObject> = self.objects.values().collect();
        objs.sort_by_key(|o| o.id);
        objs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
