//! Card UI state: the `Card` value object and its style overrides.
//!
//! ## Key Types
//!
//! - `Card`: Renderable state for one card element
//! - `ClickHandler`: Optional-callback handle backing `Card::clickable`
//! - `Style`: Per-card visual overrides, keyed by `StyleKey`

pub mod card;
pub mod style;

pub use card::{Card, ClickHandler};
pub use style::{Style, StyleKey, StyleValue};
