//! Screen configuration types.
//!
//! The application shell mounts one screen at a time: the lobby, or one
//! of the game boards. Each screen is registered under a stable name
//! (the value the server sends to select it) together with the display
//! metadata the shell needs before any game state arrives.

use serde::{Deserialize, Serialize};

/// Screen identifier. Assigned at registration.
///
/// Opaque to this crate; the registry hands them out and looks them up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewId(pub u16);

impl ViewId {
    /// Create a new view ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "View({})", self.0)
    }
}

/// What a screen is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewKind {
    /// The lobby screen: player list, game selection, invite link.
    Lobby,
    /// A game board.
    Board,
}

/// Configuration for a single screen.
///
/// ## Example
///
/// ```
/// use lobby_view::views::{ViewConfig, ViewId, ViewKind};
///
/// let uno = ViewConfig::new(ViewId::new(3), "uno")
///     .with_title("Uno")
///     .board(2, 4);
///
/// assert_eq!(uno.kind, ViewKind::Board);
/// assert_eq!(uno.max_seats, Some(4));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Unique identifier for this screen.
    pub id: ViewId,

    /// Registration name, as selected over the wire ("halli_galli").
    pub name: String,

    /// Human-readable title ("Halli Galli"). Defaults to the name.
    pub title: String,

    /// What this screen is for.
    pub kind: ViewKind,

    /// Fewest players the screen can seat. `None` for non-boards.
    pub min_seats: Option<usize>,

    /// Most players the screen can seat. `None` for non-boards.
    pub max_seats: Option<usize>,
}

impl ViewConfig {
    /// Create a new lobby-kind screen configuration.
    pub fn new(id: ViewId, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            title: name.clone(),
            name,
            kind: ViewKind::Lobby,
            min_seats: None,
            max_seats: None,
        }
    }

    /// Set the display title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Mark this screen as a game board seating `min..=max` players.
    #[must_use]
    pub fn board(mut self, min_seats: usize, max_seats: usize) -> Self {
        self.kind = ViewKind::Board;
        self.min_seats = Some(min_seats);
        self.max_seats = Some(max_seats);
        self
    }

    /// Can a board with this config seat `count` players?
    ///
    /// Always false for non-board screens.
    #[must_use]
    pub fn seats(&self, count: usize) -> bool {
        match (self.min_seats, self.max_seats) {
            (Some(min), Some(max)) => (min..=max).contains(&count),
            _ => false,
        }
    }
}
