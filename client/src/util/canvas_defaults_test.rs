#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn missing_override_uses_builtin_sizes() {
    assert_eq!(resolve_defaults(None).unwrap(), Defaults::default());
}

#[test]
fn blank_override_uses_builtin_sizes() {
    assert_eq!(resolve_defaults(Some("  ")).unwrap(), Defaults::default());
}

#[test]
fn partial_override_keeps_other_sizes() {
    let defaults = resolve_defaults(Some(r#"{"squareSize":60}"#)).unwrap();
    assert_eq!(defaults.square_size, 60.0);
    assert_eq!(defaults.circle_radius, Defaults::default().circle_radius);
}

#[test]
fn invalid_override_is_rejected() {
    let err = resolve_defaults(Some(r#"{"lineLength":0}"#)).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidLength { field: "lineLength", .. }));
    assert!(matches!(resolve_defaults(Some("{")), Err(ConfigError::Parse(_))));
}
