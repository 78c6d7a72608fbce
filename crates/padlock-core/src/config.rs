//! TOML description of a dial.
//!
//! Lets a dial (and optionally a fixed key) be written down once and turned
//! into a [`Rotator`] or [`KeyFunction`] later:
//!
//! ```toml
//! [dial]
//! bottom = 0
//! top = 39
//! rotate_by = 5
//! ```
//!
//! Every field is optional.  Missing bounds default to a 40-tick padlock,
//! `[0, 39]`, through `#[serde(default = "...")]`.  Omitting `rotate_by`
//! means no key function can be derived from the config.
//!
//! Unlike the factories in [`crate::factory`], parsing validates the range
//! immediately: a config file is read once, so an inverted range is reported
//! where it was written rather than at the first rotation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::range::DialRange;
use crate::error::RotateError;
use crate::factory::{KeyFunction, Rotator};

/// Error type for dial configuration parsing.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML content could not be parsed.
    #[error("failed to parse dial config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize dial config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The parsed range is not well-formed.
    #[error("invalid dial in config: {0}")]
    Range(#[from] RotateError),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level dial configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DialConfig {
    #[serde(default)]
    pub dial: DialSection,
}

/// The `[dial]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DialSection {
    /// Lowest position on the dial.
    #[serde(default = "default_bottom")]
    pub bottom: i64,
    /// Highest position on the dial.
    #[serde(default = "default_top")]
    pub top: i64,
    /// Fixed rotation amount for key functions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate_by: Option<i64>,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_bottom() -> i64 {
    0
}
fn default_top() -> i64 {
    39
}

impl Default for DialSection {
    fn default() -> Self {
        Self {
            bottom: default_bottom(),
            top: default_top(),
            rotate_by: None,
        }
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl DialConfig {
    /// Parses and validates a dial config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Range`] when `bottom > top`.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(content)?;
        cfg.range().check()?;
        Ok(cfg)
    }

    /// Serializes the config back to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The configured dial.
    pub const fn range(&self) -> DialRange {
        DialRange::new(self.dial.bottom, self.dial.top)
    }

    /// A rotator bound to the configured dial.
    pub const fn rotator(&self) -> Rotator {
        Rotator::new(self.range())
    }

    /// A key function for the configured dial and amount, if an amount is
    /// configured.
    pub fn key_function(&self) -> Option<KeyFunction> {
        self.dial
            .rotate_by
            .map(|by| KeyFunction::new(by, self.range()))
    }
}

impl From<DialRange> for DialConfig {
    fn from(range: DialRange) -> Self {
        Self {
            dial: DialSection {
                bottom: range.bottom(),
                top: range.top(),
                rotate_by: None,
            },
        }
    }
}

impl From<KeyFunction> for DialConfig {
    fn from(key: KeyFunction) -> Self {
        let mut cfg = Self::from(key.range());
        cfg.dial.rotate_by = Some(key.rotate_by());
        cfg
    }
}
