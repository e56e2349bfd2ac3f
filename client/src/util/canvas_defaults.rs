//! Placement defaults supplied by the page.
//!
//! The page may set `data-sketchpad-defaults` on `<html>` to a (partial) JSON
//! object such as `{"squareSize":60}`. Missing or rejected overrides fall back
//! to the built-in sizes.

#[cfg(test)]
#[path = "canvas_defaults_test.rs"]
mod canvas_defaults_test;

use canvas::config::{ConfigError, Defaults};

/// Attribute on the document element that carries the override.
pub const DEFAULTS_ATTR: &str = "data-sketchpad-defaults";

/// Resolve the raw attribute value into validated defaults.
///
/// # Errors
///
/// Returns the [`ConfigError`] from parsing or validating a present override.
pub fn resolve_defaults(raw: Option<&str>) -> Result<Defaults, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Defaults::default()),
        Some(json) => Defaults::from_json(json),
    }
}

/// Read the page's override, logging and ignoring an invalid one.
#[cfg(feature = "csr")]
pub fn load_defaults() -> Defaults {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|el| el.get_attribute(DEFAULTS_ATTR));
    match resolve_defaults(raw.as_deref()) {
        Ok(defaults) => defaults,
        Err(err) => {
            log::warn!("ignoring {DEFAULTS_ATTR}: {err}");
            Defaults::default()
        }
    }
}
