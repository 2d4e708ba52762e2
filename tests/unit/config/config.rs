use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = ViewerConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, ViewerConfig::default());
    assert_eq!(cfg.viewport.mobile_breakpoint_px, 768);
    assert_eq!(cfg.gesture.min_swipe_px, 50.0);
    assert_eq!(cfg.desktop.sheet_thickness_px, 4.0);
}

#[test]
fn partial_sections_keep_other_defaults() {
    let cfg = ViewerConfig::from_json_str(
        r#"{ "turn": { "commit_after_ms": 100 }, "images": { "base_url": "/OSEM-YearBook/" } }"#,
    )
    .unwrap();
    assert_eq!(cfg.turn.commit_after_ms, 100);
    assert_eq!(cfg.turn.settle_after_ms, 700);
    assert_eq!(cfg.images.base_url, "/OSEM-YearBook/");
    assert_eq!(cfg.images.placeholder_width, 600);
}

#[test]
fn settle_must_follow_commit() {
    let err = ViewerConfig::from_json_str(
        r#"{ "turn": { "commit_after_ms": 500, "settle_after_ms": 500 } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, YearbookError::Config(_)));
}

#[test]
fn non_positive_thresholds_are_rejected() {
    let mut cfg = ViewerConfig::default();
    cfg.gesture.min_velocity_px_per_ms = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = ViewerConfig::default();
    cfg.gesture.max_drag_px = f64::NAN;
    assert!(cfg.validate().is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = ViewerConfig::from_json_str("{ nope").unwrap_err();
    assert!(matches!(err, YearbookError::Serde(_)));
}
