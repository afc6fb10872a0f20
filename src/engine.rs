use std::collections::HashSet;

use tracing::{debug, trace};

use crate::doc::{ContentObject, ContentStore, ObjectId, PartialContentObject};
use crate::garment::Backdrop;
use crate::geom::Point;
use crate::hit::band_hits;
use crate::input::{BandRelease, ClickSuppression, InputState, PointerEvent, RubberBand};
use crate::selection::SelectionSet;
use crate::surface::{NodeTransform, SurfaceHandle};
use crate::transform::{drag_commit, resize_commit};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Commands returned from input handlers for the host (or [`Engine`]) to carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Attach the transformer to exactly these nodes.
    AttachTransformer(Vec<ObjectId>),
    /// Detach the transformer from every node.
    DetachTransformer,
    /// Reset the node's scale factors to `(1, 1)`.
    ResetScale { id: ObjectId },
    /// A content object changed; mirror `fields` onto its node.
    ObjectUpdated { id: ObjectId, fields: PartialContentObject },
    /// The rubber band changed and the overlay needs redrawing.
    RenderNeeded,
}

/// Core engine state: every rule that doesn't need a live surface.
///
/// Separated from `Engine` so it can be tested without a rendering surface.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub doc: ContentStore,
    pub backdrop: Backdrop,
    pub selection: SelectionSet,
    pub input: InputState,
    mounted: HashSet<ObjectId>,
    suppress_click: Option<ClickSuppression>,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_backdrop(backdrop: Backdrop) -> Self {
        Self { backdrop, ..Self::default() }
    }

    // --- Content ---

    /// Add or replace a content object. It becomes selectable once mounted.
    pub fn insert_object(&mut self, obj: ContentObject) {
        self.doc.insert(obj);
    }

    /// Replace every content object, dropping selected ids that vanished.
    pub fn load_objects(&mut self, objects: Vec<ContentObject>) -> Vec<Action> {
        self.doc.load(objects);
        self.prune_selection("load")
    }

    /// Remove a content object, deselecting it if needed.
    pub fn remove_object(&mut self, id: &ObjectId) -> Vec<Action> {
        if self.doc.remove(id).is_none() {
            return Vec::new();
        }
        self.prune_selection("remove")
    }

    /// Move the content group, e.g. after the garment image is re-centred.
    pub fn set_backdrop(&mut self, backdrop: Backdrop) {
        self.backdrop = backdrop;
    }

    // --- Surface lifecycle ---

    /// The surface created a node for `id`.
    pub fn on_object_mounted(&mut self, id: ObjectId) {
        self.mounted.insert(id);
    }

    /// The surface destroyed the node for `id`.
    pub fn on_object_unmounted(&mut self, id: &ObjectId) -> Vec<Action> {
        if !self.mounted.remove(id) {
            return Vec::new();
        }
        self.prune_selection("unmount")
    }

    /// Whether `id` names a content object with a live node.
    #[must_use]
    pub fn is_selectable(&self, id: &ObjectId) -> bool {
        self.doc.contains(id) && self.mounted.contains(id)
    }

    // --- Pointer events ---

    /// Pointer pressed. On the bare stage this starts a rubber band.
    pub fn on_pointer_down(&mut self, ev: &PointerEvent) -> Vec<Action> {
        if self.suppress_click.take().is_some() {
            trace!("discarding unused click suppression");
        }
        if !ev.is_background {
            return Vec::new();
        }
        let Some(origin) = ev.pointer else {
            return Vec::new();
        };
        debug!(x = origin.x, y = origin.y, "rubber band started");
        self.input = InputState::RubberBanding { band: RubberBand::start(origin) };
        vec![Action::RenderNeeded]
    }

    /// Pointer moved. Drags the rubber band's live corner.
    pub fn on_pointer_move(&mut self, ev: &PointerEvent) -> Vec<Action> {
        let InputState::RubberBanding { band } = &mut self.input else {
            return Vec::new();
        };
        let Some(current) = ev.pointer else {
            return Vec::new();
        };
        band.current = current;
        trace!(x = current.x, y = current.y, "rubber band moved");
        vec![Action::RenderNeeded]
    }

    /// Pointer released. Ends a rubber band and selects what it covers.
    ///
    /// A band that never moved was a plain click on the stage; the click that
    /// follows applies the background rule.
    pub fn on_pointer_up(&mut self, ev: &PointerEvent) -> Vec<Action> {
        let Some(release) = self.end_rubber_band(ev.pointer) else {
            return Vec::new();
        };
        let mut actions = vec![Action::RenderNeeded];
        let BandRelease::Select { hits, suppression } = release else {
            return actions;
        };
        self.suppress_click = Some(suppression);
        if self.selection.replace(hits) {
            actions.extend(self.transformer_actions("rubber band"));
        }
        actions
    }

    /// Finish the rubber band, if one is active.
    ///
    /// A dragged band returns the ids it intersects and a token that must
    /// swallow the next click. A band released on its press point is reported
    /// as [`BandRelease::Click`] and never hit-tested. A missing pointer
    /// position keeps the last known corner.
    pub fn end_rubber_band(&mut self, pointer: Option<Point>) -> Option<BandRelease> {
        let InputState::RubberBanding { mut band } = self.input else {
            return None;
        };
        self.input = InputState::Idle;
        if let Some(current) = pointer {
            band.current = current;
        }
        band.visible = false;
        if !band.is_drag() {
            debug!(x = band.origin.x, y = band.origin.y, "rubber band released without a drag");
            return Some(BandRelease::Click);
        }

        let bounds = band.bounds();
        let candidates = self
            .doc
            .sorted_objects()
            .into_iter()
            .filter(|obj| self.mounted.contains(&obj.id));
        let hits = band_hits(&bounds, candidates, &self.backdrop);
        debug!(hits = hits.len(), width = bounds.width, height = bounds.height, "rubber band ended");
        Some(BandRelease::Select { hits, suppression: ClickSuppression::issue() })
    }

    /// Click (press and release without a drag).
    pub fn on_click(&mut self, ev: &PointerEvent) -> Vec<Action> {
        if self.suppress_click.take().is_some() {
            debug!("click after rubber band swallowed");
            return Vec::new();
        }

        let target = if ev.is_background { None } else { ev.target };
        let Some(id) = target else {
            if self.selection.clear() {
                return self.transformer_actions("background click");
            }
            return Vec::new();
        };

        if !self.is_selectable(&id) {
            debug!(%id, "click on unknown object ignored");
            return Vec::new();
        }
        if self.selection.click(id, ev.modifiers.toggles()) {
            return self.transformer_actions("click");
        }
        Vec::new()
    }

    /// Drop the whole selection (Escape key).
    pub fn clear_selection(&mut self) -> Vec<Action> {
        if self.selection.clear() {
            return self.transformer_actions("clear");
        }
        Vec::new()
    }

    // --- Object gestures ---

    /// A drag began on `id`. The dragged object becomes the sole selection.
    pub fn on_drag_start(&mut self, id: ObjectId) -> Vec<Action> {
        if !self.is_selectable(&id) {
            debug!(%id, "drag on unknown object ignored");
            return Vec::new();
        }
        self.input = InputState::DraggingObject { id };
        if self.selection.replace([id]) {
            return self.transformer_actions("drag start");
        }
        Vec::new()
    }

    /// A drag on `id` ended with the node at `live`. Commits the position of
    /// a selected object.
    pub fn on_drag_end(&mut self, id: ObjectId, live: Option<NodeTransform>) -> Vec<Action> {
        if matches!(self.input, InputState::DraggingObject { id: active } if active == id) {
            self.input = InputState::Idle;
        }
        let Some(live) = live else {
            return Vec::new();
        };
        if !self.selection.contains(&id) || !self.doc.contains(&id) {
            debug!(%id, "drag end on unselected object ignored");
            return Vec::new();
        }
        let fields = drag_commit(&live);
        self.doc.apply_partial(&id, &fields);
        debug!(%id, x = live.x, y = live.y, "drag committed");
        vec![Action::ObjectUpdated { id, fields }]
    }

    /// A transformer handle grabbed `id`.
    pub fn on_transform_start(&mut self, id: ObjectId) {
        if self.is_selectable(&id) {
            self.input = InputState::Transforming { id };
        }
    }

    /// A resize/rotate on selected `id` ended with the node at `live`.
    ///
    /// Emits a scale reset for the node followed by the committed
    /// position, clamped size, and rotation.
    pub fn on_transform_end(&mut self, id: ObjectId, live: Option<NodeTransform>) -> Vec<Action> {
        if matches!(self.input, InputState::Transforming { id: active } if active == id) {
            self.input = InputState::Idle;
        }
        let Some(live) = live else {
            return Vec::new();
        };
        if !self.selection.contains(&id) {
            debug!(%id, "transform end on unselected object ignored");
            return Vec::new();
        }
        let Some(obj) = self.doc.get(&id) else {
            debug!(%id, "transform end on unknown object ignored");
            return Vec::new();
        };
        let fields = resize_commit(obj, &live);
        self.doc.apply_partial(&id, &fields);
        debug!(
            %id,
            scale_x = live.scale_x,
            scale_y = live.scale_y,
            width = ?fields.width,
            height = ?fields.height,
            rotation = live.rotation,
            "transform committed"
        );
        vec![Action::ResetScale { id }, Action::ObjectUpdated { id, fields }]
    }

    // --- Queries ---

    /// Currently selected ids, ascending.
    #[must_use]
    pub fn selection(&self) -> Vec<ObjectId> {
        self.selection.to_vec()
    }

    /// The live rubber band, if a drag-select is in progress.
    #[must_use]
    pub fn rubber_band(&self) -> Option<&RubberBand> {
        self.input.rubber_band()
    }

    /// Whether the next click will be swallowed.
    #[must_use]
    pub fn click_suppressed(&self) -> bool {
        self.suppress_click.is_some()
    }

    #[must_use]
    pub fn object(&self, id: &ObjectId) -> Option<&ContentObject> {
        self.doc.get(id)
    }

    // --- Internals ---

    fn prune_selection(&mut self, cause: &'static str) -> Vec<Action> {
        let doc = &self.doc;
        let mounted = &self.mounted;
        if self.selection.retain(|id| doc.contains(id) && mounted.contains(id)) {
            return self.transformer_actions(cause);
        }
        Vec::new()
    }

    /// Attach/detach command for the current selection, stale ids filtered.
    fn transformer_actions(&self, cause: &'static str) -> Vec<Action> {
        let ids: Vec<ObjectId> = self
            .selection
            .iter()
            .filter(|id| self.is_selectable(id))
            .copied()
            .collect();
        debug!(selected = ids.len(), cause, "selection changed");
        if ids.is_empty() {
            vec![Action::DetachTransformer]
        } else {
            vec![Action::AttachTransformer(ids)]
        }
    }
}

/// The full engine: `EngineCore` plus the surface its actions are applied to.
pub struct Engine<S: SurfaceHandle> {
    pub core: EngineCore,
    surface: S,
}

impl<S: SurfaceHandle> Engine<S> {
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self { core: EngineCore::new(), surface }
    }

    #[must_use]
    pub fn with_backdrop(surface: S, backdrop: Backdrop) -> Self {
        Self { core: EngineCore::with_backdrop(backdrop), surface }
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    // --- Delegated content and lifecycle ---

    pub fn insert_object(&mut self, obj: ContentObject) {
        self.core.insert_object(obj);
    }

    pub fn load_objects(&mut self, objects: Vec<ContentObject>) -> Vec<Action> {
        let actions = self.core.load_objects(objects);
        self.apply(actions)
    }

    pub fn remove_object(&mut self, id: &ObjectId) -> Vec<Action> {
        let actions = self.core.remove_object(id);
        self.apply(actions)
    }

    pub fn on_object_mounted(&mut self, id: ObjectId) {
        self.core.on_object_mounted(id);
    }

    pub fn on_object_unmounted(&mut self, id: &ObjectId) -> Vec<Action> {
        let actions = self.core.on_object_unmounted(id);
        self.apply(actions)
    }

    // --- Delegated input ---

    pub fn on_pointer_down(&mut self, ev: &PointerEvent) -> Vec<Action> {
        let actions = self.core.on_pointer_down(ev);
        self.apply(actions)
    }

    pub fn on_pointer_move(&mut self, ev: &PointerEvent) -> Vec<Action> {
        let actions = self.core.on_pointer_move(ev);
        self.apply(actions)
    }

    pub fn on_pointer_up(&mut self, ev: &PointerEvent) -> Vec<Action> {
        let actions = self.core.on_pointer_up(ev);
        self.apply(actions)
    }

    pub fn on_click(&mut self, ev: &PointerEvent) -> Vec<Action> {
        let actions = self.core.on_click(ev);
        self.apply(actions)
    }

    pub fn clear_selection(&mut self) -> Vec<Action> {
        let actions = self.core.clear_selection();
        self.apply(actions)
    }

    pub fn on_drag_start(&mut self, id: ObjectId) -> Vec<Action> {
        let actions = self.core.on_drag_start(id);
        self.apply(actions)
    }

    /// Commit the node's live position after a drag.
    pub fn on_drag_end(&mut self, id: ObjectId) -> Vec<Action> {
        let live = self.surface.get_transform(&id);
        let actions = self.core.on_drag_end(id, live);
        self.apply(actions)
    }

    pub fn on_transform_start(&mut self, id: ObjectId) {
        self.core.on_transform_start(id);
    }

    /// Commit the node's live transform after a resize/rotate handle is released.
    pub fn on_transform_end(&mut self, id: ObjectId) -> Vec<Action> {
        let live = self.surface.get_transform(&id);
        let actions = self.core.on_transform_end(id, live);
        self.apply(actions)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn selection(&self) -> Vec<ObjectId> {
        self.core.selection()
    }

    #[must_use]
    pub fn object(&self, id: &ObjectId) -> Option<&ContentObject> {
        self.core.object(id)
    }

    /// Carry out surface commands, then hand the actions back to the host.
    fn apply(&mut self, actions: Vec<Action>) -> Vec<Action> {
        for action in &actions {
            match action {
                Action::AttachTransformer(ids) => self.surface.attach_transformer(ids),
                Action::DetachTransformer => self.surface.detach_transformer(),
                Action::ResetScale { id } => self.surface.reset_scale(id),
                Action::ObjectUpdated { id, fields } => self.surface.set_transform(id, fields),
                Action::RenderNeeded => {}
            }
        }
        actions
    }
}
