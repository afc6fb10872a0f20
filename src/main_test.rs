#![allow(clippy::float_cmp)]

use serde_json::json;
use uuid::Uuid;

use super::*;

fn script(value: serde_json::Value) -> Script {
    serde_json::from_value(value).unwrap()
}

#[test]
fn replay_rubber_band_then_swallowed_click() {
    let id = Uuid::new_v4();
    let s = script(json!({
        "objects": [{ "id": id, "x": 50, "y": 50, "width": 100, "height": 100 }],
        "events": [
            { "type": "pointer_down", "is_background": true, "pointer": { "x": 40, "y": 40 } },
            { "type": "pointer_move", "is_background": true, "pointer": { "x": 160, "y": 160 } },
            { "type": "pointer_up", "is_background": true, "pointer": { "x": 160, "y": 160 } },
            { "type": "click", "is_background": true, "pointer": { "x": 160, "y": 160 } },
        ],
    }));
    let report = replay(s, &EditorConfig::default());
    assert_eq!(report.selection, vec![id]);
    assert_eq!(report.attached, vec![id]);
    assert_eq!(report.side, GarmentSide::Front);
}

#[test]
fn replay_resize_commits_floored_size() {
    let id = Uuid::new_v4();
    let s = script(json!({
        "objects": [{ "id": id, "x": 0, "y": 0, "width": 100, "height": 100, "style": { "fill": "#fff" } }],
        "events": [
            { "type": "click", "target": id, "pointer": { "x": 1, "y": 1 } },
            { "type": "transform_start", "id": id },
            { "type": "live", "id": id, "scale_x": 0.01, "scale_y": 2.0, "rotation": 30 },
            { "type": "transform_end", "id": id },
        ],
    }));
    let report = replay(s, &EditorConfig::default());
    let obj = &report.objects[0];
    assert_eq!(obj.width(), 5.0);
    assert_eq!(obj.height(), 200.0);
    assert_eq!(obj.rotation, 30.0);
    assert_eq!(obj.style, json!({ "fill": "#fff" }));
}

#[test]
fn replay_centres_group_on_stage() {
    let id = Uuid::new_v4();
    let config = EditorConfig { stage_width: 1000.0, stage_height: 1000.0, ..EditorConfig::default() };
    let s = script(json!({
        "image": { "width": 400, "height": 400 },
        "objects": [{ "id": id, "x": 0, "y": 0, "width": 10, "height": 10 }],
        "events": [
            { "type": "pointer_down", "is_background": true, "pointer": { "x": 0, "y": 0 } },
            { "type": "pointer_up", "is_background": true, "pointer": { "x": 20, "y": 20 } },
            { "type": "pointer_down", "is_background": true, "pointer": { "x": 295, "y": 295 } },
            { "type": "pointer_up", "is_background": true, "pointer": { "x": 305, "y": 305 } },
        ],
    }));
    let report = replay(s, &config);
    assert_eq!(report.selection, vec![id]);
}

#[test]
fn replay_unmount_and_escape() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let s = script(json!({
        "objects": [
            { "id": a, "x": 0, "y": 0, "width": 10, "height": 10 },
            { "id": b, "x": 50, "y": 0, "width": 10, "height": 10 },
        ],
        "events": [
            { "type": "click", "target": a },
            { "type": "click", "target": b, "modifiers": { "shift": true } },
            { "type": "unmount", "id": a },
        ],
    }));
    let report = replay(s, &EditorConfig::default());
    assert_eq!(report.selection, vec![b]);
    assert_eq!(report.attached, vec![b]);

    let s = script(json!({
        "objects": [{ "id": a, "x": 0, "y": 0, "width": 10, "height": 10 }],
        "events": [{ "type": "click", "target": a }, { "type": "escape" }],
    }));
    let report = replay(s, &EditorConfig::default());
    assert!(report.selection.is_empty());
    assert!(report.attached.is_empty());
}

#[test]
fn replay_drag_moves_object() {
    let id = Uuid::new_v4();
    let s = script(json!({
        "objects": [{ "id": id, "x": 0, "y": 0, "width": 10, "height": 10 }],
        "events": [
            { "type": "drag_start", "id": id },
            { "type": "live", "id": id, "x": 25, "y": 35 },
            { "type": "drag_end", "id": id },
        ],
    }));
    let report = replay(s, &EditorConfig::default());
    assert_eq!((report.objects[0].x, report.objects[0].y), (25.0, 35.0));
    assert_eq!(report.selection, vec![id]);
}

#[test]
fn unknown_event_type_is_rejected() {
    let err = serde_json::from_value::<Script>(json!({ "events": [{ "type": "teleport" }] })).unwrap_err();
    assert!(err.to_string().contains("teleport"));
}
