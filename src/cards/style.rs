//! Per-card style overrides.
//!
//! Cards carry visual overrides like "width", "transform", "z-index".
//! These are shell-specific - this crate doesn't interpret them, it only
//! stores them and hands them to the rendering shell.
//!
//! ## StyleValue Types
//!
//! - `Text`: keywords and compound values ("rotate(90deg)", "none")
//! - `Number`: plain magnitudes (offsets, z-indices, opacities)

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Key for accessing card style overrides.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleKey(pub String);

impl StyleKey {
    /// Create a new style key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl From<&str> for StyleKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for StyleKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Value of a single style override.
///
/// Two variants cover everything the shipped boards set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StyleValue {
    /// Textual value ("rotate(90deg)", "hidden", "#b71c1c").
    Text(String),
    /// Numeric value (offset, z-index, opacity).
    Number(f64),
}

impl StyleValue {
    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as number if this is a Number value.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(v) => Some(*v),
            _ => None,
        }
    }
}

impl std::fmt::Display for StyleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleValue::Text(s) => write!(f, "{}", s),
            StyleValue::Number(v) => write!(f, "{}", v),
        }
    }
}

// Convenient From implementations
impl From<&str> for StyleValue {
    fn from(v: &str) -> Self {
        StyleValue::Text(v.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(v: String) -> Self {
        StyleValue::Text(v)
    }
}

impl From<f64> for StyleValue {
    fn from(v: f64) -> Self {
        StyleValue::Number(v)
    }
}

impl From<i32> for StyleValue {
    fn from(v: i32) -> Self {
        StyleValue::Number(v as f64)
    }
}

/// Collection of style overrides for one card.
pub type Style = FxHashMap<StyleKey, StyleValue>;
