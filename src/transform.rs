//! Turning finished drag and transformer gestures into content updates.
//!
//! During a gesture the surface moves, scales, and rotates the node directly.
//! On release these functions read the live node and produce the sparse update
//! to commit. Scale is never committed: the resize commit folds it into width
//! and height (clamped to the size floor) and the caller resets the node's
//! scale to unity. Rotation is taken verbatim, with no range normalization.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use crate::doc::{ContentObject, PartialContentObject, clamp_size};
use crate::surface::NodeTransform;

/// Update for a plain drag: position only.
#[must_use]
pub fn drag_commit(live: &NodeTransform) -> PartialContentObject {
    PartialContentObject { x: Some(live.x), y: Some(live.y), ..Default::default() }
}

/// Update for a released resize/rotate handle.
///
/// `obj` supplies the pre-gesture size that the live scale factors multiply.
#[must_use]
pub fn resize_commit(obj: &ContentObject, live: &NodeTransform) -> PartialContentObject {
    PartialContentObject {
        x: Some(live.x),
        y: Some(live.y),
        width: Some(clamp_size(obj.width() * live.scale_x)),
        height: Some(clamp_size(obj.height() * live.scale_y)),
        rotation: Some(live.rotation),
    }
}
