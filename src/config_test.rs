#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults() {
    let cfg = EditorConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, EditorConfig::default());
    assert_eq!(cfg.side, GarmentSide::Front);
    assert_eq!(cfg.image_path(), DEFAULT_FRONT_IMAGE);
    assert_eq!(cfg.stage_width, DEFAULT_STAGE_WIDTH);
    assert_eq!(cfg.stage_height, DEFAULT_STAGE_HEIGHT);
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = EditorConfig::from_lookup(lookup_from(&[
        ("MOCKUP_SIDE", "back"),
        ("MOCKUP_FRONT_IMAGE", "/f.png"),
        ("MOCKUP_BACK_IMAGE", "/b.png"),
        ("MOCKUP_STAGE_WIDTH", "1920"),
        ("MOCKUP_STAGE_HEIGHT", " 1080.5 "),
    ]))
    .unwrap();
    assert_eq!(cfg.side, GarmentSide::Back);
    assert_eq!(cfg.image_path(), "/b.png");
    assert_eq!(cfg.front_image, "/f.png");
    assert_eq!(cfg.stage_width, 1920.0);
    assert_eq!(cfg.stage_height, 1080.5);
}

#[test]
fn from_lookup_rejects_unknown_side() {
    let err = EditorConfig::from_lookup(lookup_from(&[("MOCKUP_SIDE", "inside-out")])).unwrap_err();
    assert_eq!(err, ConfigError::UnknownSide("inside-out".into()));
}

#[test]
fn from_lookup_rejects_unparsable_dimension() {
    let err = EditorConfig::from_lookup(lookup_from(&[("MOCKUP_STAGE_WIDTH", "wide")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidNumber { var: "MOCKUP_STAGE_WIDTH", value: "wide".into() });
    assert!(err.to_string().contains("MOCKUP_STAGE_WIDTH"));
}

#[test]
fn from_lookup_rejects_non_positive_dimension() {
    for raw in ["0", "-5", "inf", "NaN"] {
        let err = EditorConfig::from_lookup(lookup_from(&[("MOCKUP_STAGE_HEIGHT", raw)])).unwrap_err();
        assert_eq!(err, ConfigError::NonPositive { var: "MOCKUP_STAGE_HEIGHT" });
    }
}

#[test]
fn from_env_falls_back_to_defaults_for_unset_vars() {
    const KEYS: [&str; 5] =
        ["MOCKUP_SIDE", "MOCKUP_FRONT_IMAGE", "MOCKUP_BACK_IMAGE", "MOCKUP_STAGE_WIDTH", "MOCKUP_STAGE_HEIGHT"];
    if KEYS.iter().any(|key| std::env::var_os(key).is_some()) {
        return;
    }
    assert_eq!(EditorConfig::from_env().unwrap(), EditorConfig::default());
}
