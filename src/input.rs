//! Input model: pointer payloads, modifier keys, and the gesture state machine.
//!
//! `PointerEvent` is what the rendering surface reports for every pointer
//! event. `InputState` is the gesture tracked between pointer-down and
//! pointer-up. `RubberBand` is the transient drag-select rectangle, and
//! `ClickSuppression` is the token a finished drag-select hands back so the
//! synthetic click that follows its release is swallowed exactly once.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::doc::ObjectId;
use crate::geom::{Bounds, Point};

/// Keyboard modifier keys held during a pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Whether a click with these modifiers toggles membership instead of
    /// replacing the selection.
    #[must_use]
    pub fn toggles(self) -> bool {
        self.shift || self.ctrl || self.meta
    }
}

/// Pointer event payload as reported by the rendering surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerEvent {
    /// Id of the content object under the pointer, if any.
    pub target: Option<ObjectId>,
    /// Whether the event landed on the bare stage rather than a node.
    pub is_background: bool,
    /// Pointer position in stage space; `None` when the pointer has left the surface.
    pub pointer: Option<Point>,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Event on the bare stage at `pointer`.
    #[must_use]
    pub fn background(pointer: Point) -> Self {
        Self { target: None, is_background: true, pointer: Some(pointer), modifiers: Modifiers::default() }
    }

    /// Event on the node for `id`.
    #[must_use]
    pub fn on_object(id: ObjectId, pointer: Point) -> Self {
        Self { target: Some(id), is_background: false, pointer: Some(pointer), modifiers: Modifiers::default() }
    }

    #[must_use]
    pub fn with_modifiers(self, modifiers: Modifiers) -> Self {
        Self { modifiers, ..self }
    }
}

/// The drag-select rectangle as the user drags it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RubberBand {
    /// Corner where the drag started.
    pub origin: Point,
    /// Live pointer corner.
    pub current: Point,
    /// Only meaningful while a drag-select gesture is active.
    pub visible: bool,
}

impl RubberBand {
    /// A visible band collapsed onto `origin`.
    #[must_use]
    pub fn start(origin: Point) -> Self {
        Self { origin, current: origin, visible: true }
    }

    /// The normalized box used for intersection.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::from_corners(self.origin, self.current)
    }

    /// Whether the live corner ever left the press point. A band that never
    /// moved is a plain click, not a drag-select.
    #[must_use]
    pub fn is_drag(&self) -> bool {
        self.origin != self.current
    }
}

/// What releasing a rubber band amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BandRelease {
    /// The pointer came up where it went down. Selection is left to the click.
    Click,
    /// A drag-select covering `hits`. `suppression` must swallow the next click.
    Select { hits: Vec<ObjectId>, suppression: ClickSuppression },
}

/// Issued when a rubber band is released. The dispatcher holds it and lets it
/// swallow exactly one following click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct ClickSuppression {
    _private: (),
}

impl ClickSuppression {
    pub(crate) fn issue() -> Self {
        Self { _private: () }
    }
}

/// Active gesture between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Drag-select over the background.
    RubberBanding { band: RubberBand },
    /// A content object is being dragged.
    DraggingObject { id: ObjectId },
    /// A transformer handle is resizing or rotating a content object.
    Transforming { id: ObjectId },
}

impl InputState {
    /// The live rubber band, if one is being dragged.
    #[must_use]
    pub fn rubber_band(&self) -> Option<&RubberBand> {
        match self {
            Self::RubberBanding { band } => Some(band),
            _ => None,
        }
    }
}
