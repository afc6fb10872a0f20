use uuid::Uuid;

use super::*;

// =============================================================
// Modifiers
// =============================================================

#[test]
fn modifiers_default_all_false() {
    let m = Modifiers::default();
    assert!(!m.shift);
    assert!(!m.ctrl);
    assert!(!m.meta);
    assert!(!m.toggles());
}

#[test]
fn any_modifier_toggles() {
    assert!(Modifiers { shift: true, ..Default::default() }.toggles());
    assert!(Modifiers { ctrl: true, ..Default::default() }.toggles());
    assert!(Modifiers { meta: true, ..Default::default() }.toggles());
}

#[test]
fn modifiers_deserialize_missing_fields_as_false() {
    let m: Modifiers = serde_json::from_str(r#"{"shift":true}"#).unwrap();
    assert_eq!(m, Modifiers { shift: true, ctrl: false, meta: false });
}

// =============================================================
// PointerEvent
// =============================================================

#[test]
fn background_event_has_no_target() {
    let ev = PointerEvent::background(Point::new(1.0, 2.0));
    assert!(ev.is_background);
    assert!(ev.target.is_none());
    assert_eq!(ev.pointer, Some(Point::new(1.0, 2.0)));
}

#[test]
fn object_event_carries_target() {
    let id = Uuid::new_v4();
    let ev = PointerEvent::on_object(id, Point::new(0.0, 0.0))
        .with_modifiers(Modifiers { meta: true, ..Default::default() });
    assert!(!ev.is_background);
    assert_eq!(ev.target, Some(id));
    assert!(ev.modifiers.meta);
}

#[test]
fn pointer_event_deserializes_with_defaults() {
    let ev: PointerEvent = serde_json::from_str(r#"{"is_background":true}"#).unwrap();
    assert!(ev.is_background);
    assert!(ev.pointer.is_none());
    assert!(!ev.modifiers.toggles());
}

// =============================================================
// RubberBand
// =============================================================

#[test]
fn band_starts_visible_and_collapsed() {
    let band = RubberBand::start(Point::new(4.0, 5.0));
    assert!(band.visible);
    assert_eq!(band.origin, band.current);
    assert_eq!(band.bounds(), Bounds::new(4.0, 5.0, 0.0, 0.0));
}

#[test]
fn band_bounds_normalize_reverse_drag() {
    let mut band = RubberBand::start(Point::new(160.0, 160.0));
    band.current = Point::new(40.0, 40.0);
    assert_eq!(band.bounds(), Bounds::new(40.0, 40.0, 120.0, 120.0));
}

#[test]
fn band_is_drag_only_once_corner_leaves_origin() {
    let mut band = RubberBand::start(Point::new(10.0, 10.0));
    assert!(!band.is_drag());
    band.current = Point::new(10.0, 11.0);
    assert!(band.is_drag());
    band.current = Point::new(10.0, 10.0);
    assert!(!band.is_drag());
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
    assert!(InputState::default().rubber_band().is_none());
}

#[test]
fn rubber_band_accessor() {
    let band = RubberBand::start(Point::new(0.0, 0.0));
    let state = InputState::RubberBanding { band };
    assert_eq!(state.rubber_band(), Some(&band));
    let dragging = InputState::DraggingObject { id: Uuid::new_v4() };
    assert!(dragging.rubber_band().is_none());
}

#[test]
fn suppression_tokens_compare_equal() {
    assert_eq!(ClickSuppression::issue(), ClickSuppression::issue());
}
