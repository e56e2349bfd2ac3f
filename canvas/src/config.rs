//! Placement defaults: the fixed sizes new shapes are created with.
//!
//! The record is read once per session. Hosts may override individual fields
//! from JSON; anything omitted falls back to the built-in value. Every field
//! must be a finite, strictly positive length.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CIRCLE_RADIUS, DEFAULT_LINE_LENGTH, DEFAULT_SQUARE_SIZE, DEFAULT_TRI_SIZE};

/// Errors produced while loading or validating [`Defaults`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be a finite positive length, got {value}")]
    InvalidLength { field: &'static str, value: f64 },
    #[error("malformed defaults: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Geometric parameters applied to every newly placed shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Defaults {
    /// Side of a square; the square is centered on the click.
    pub square_size: f64,
    /// Radius of a circle centered on the click.
    pub circle_radius: f64,
    /// Side of the equilateral triangle anchored at the click.
    pub tri_size: f64,
    /// Length of a horizontal line, split evenly about the click.
    pub line_length: f64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            square_size: DEFAULT_SQUARE_SIZE,
            circle_radius: DEFAULT_CIRCLE_RADIUS,
            tri_size: DEFAULT_TRI_SIZE,
            line_length: DEFAULT_LINE_LENGTH,
        }
    }
}

impl Defaults {
    /// Parse a (possibly partial) JSON override and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::InvalidLength`] when any length is not finite and positive.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let defaults: Self = serde_json::from_str(raw)?;
        defaults.validate()?;
        Ok(defaults)
    }

    /// Check that every length is finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLength`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("squareSize", self.square_size),
            ("circleRadius", self.circle_radius),
            ("triSize", self.tri_size),
            ("lineLength", self.line_length),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidLength { field, value });
            }
        }
        Ok(())
    }
}
