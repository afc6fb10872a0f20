#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::{ContentObject, ObjectId};
use crate::garment::Backdrop;
use crate::geom::{Bounds, boxes_intersect};

/// Stage-space envelope of `obj`: its rotated extent, shifted by the group origin.
#[must_use]
pub fn stage_envelope(obj: &ContentObject, backdrop: &Backdrop) -> Bounds {
    backdrop.stage_bounds(&obj.local_bounds())
}

/// Ids of every candidate whose stage envelope intersects `band`.
///
/// `band` is a normalized stage-space box. Rotation is accounted for on the
/// candidate side only, so a rotated object can be hit through the empty
/// corners of its envelope.
pub fn band_hits<'a, I>(band: &Bounds, candidates: I, backdrop: &Backdrop) -> Vec<ObjectId>
where
    I: IntoIterator<Item = &'a ContentObject>,
{
    candidates
        .into_iter()
        .filter(|obj| boxes_intersect(band, &stage_envelope(obj, backdrop)))
        .map(|obj| obj.id)
        .collect()
}
