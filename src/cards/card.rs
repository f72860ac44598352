//! Card UI state.
//!
//! `Card` holds what the rendering shell needs to draw one card-shaped
//! element: its display name, whether it is face-down, an optional click
//! handler, and per-card style overrides.
//!
//! Game state (which cards exist, whose turn it is) lives in the
//! surrounding application. A `Card` is rebuilt from that state on each
//! render and owned by exactly one rendering context.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::style::{Style, StyleKey, StyleValue};

/// Handle to a card's click callback.
///
/// `Rc` rather than `Arc`: cards live on the single UI thread.
/// A card is interactive exactly when it holds one of these - there is
/// no separate "clickable" flag to fall out of sync.
#[derive(Clone)]
pub struct ClickHandler(Rc<dyn Fn()>);

impl ClickHandler {
    /// Wrap a callback.
    pub fn new(callback: impl Fn() + 'static) -> Self {
        Self(Rc::new(callback))
    }

    /// Invoke the callback.
    pub fn invoke(&self) {
        (self.0)()
    }
}

impl<F: Fn() + 'static> From<F> for ClickHandler {
    fn from(callback: F) -> Self {
        Self::new(callback)
    }
}

impl std::fmt::Debug for ClickHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ClickHandler(..)")
    }
}

/// Renderable state for one card element.
///
/// Construction takes only the name; everything else defaults to a
/// plain face-up, non-interactive, unstyled card.
///
/// ## Example
///
/// ```
/// use lobby_view::cards::Card;
///
/// let card = Card::new("red_7")
///     .hidden()
///     .with_style("transform", "rotate(90deg)");
///
/// assert!(card.hidden);
/// assert!(!card.clickable());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    /// Display name. Not interpreted; any value the shell understands.
    pub name: String,

    /// Is this card face-down?
    pub hidden: bool,

    /// Click callback. Not serialized - a deserialized card is
    /// non-interactive until the owning view attaches a new handler.
    #[serde(skip)]
    pub on_click: Option<ClickHandler>,

    /// Per-card style overrides. Fresh map per card; never shared.
    #[serde(default)]
    pub style: Style,
}

impl Card {
    /// Create a face-up, non-interactive card with no style overrides.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hidden: false,
            on_click: None,
            style: Style::default(),
        }
    }

    /// Mark the card face-down (builder pattern).
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Attach a click handler (builder pattern).
    #[must_use]
    pub fn with_on_click(mut self, handler: impl Into<ClickHandler>) -> Self {
        self.on_click = Some(handler.into());
        self
    }

    /// Add a style override (builder pattern).
    #[must_use]
    pub fn with_style(
        mut self,
        key: impl Into<StyleKey>,
        value: impl Into<StyleValue>,
    ) -> Self {
        self.style.insert(key.into(), value.into());
        self
    }

    /// Replace all style overrides (builder pattern).
    #[must_use]
    pub fn with_styles(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Does this card respond to clicks?
    #[must_use]
    pub fn clickable(&self) -> bool {
        self.on_click.is_some()
    }

    /// Get a style override.
    #[must_use]
    pub fn get_style(&self, key: &str) -> Option<&StyleValue> {
        self.style.get(&StyleKey::new(key))
    }

    /// Fire the click handler if one is attached.
    ///
    /// Returns whether a handler ran. Clicking a non-interactive card
    /// is a no-op, not an error.
    pub fn click(&self) -> bool {
        match &self.on_click {
            Some(handler) => {
                handler.invoke();
                true
            }
            None => false,
        }
    }
}
