//! Screen registry for the application shell.
//!
//! The `ViewRegistry` stores every screen the client can mount and
//! provides lookup by `ViewId` or by registration name. The shipped
//! catalog lives in [`ViewRegistry::builtin`].

use rustc_hash::FxHashMap;

use super::config::{ViewConfig, ViewId, ViewKind};

/// Registry of screen configurations.
///
/// ## Example
///
/// ```
/// use lobby_view::views::{ViewRegistry, ViewKind};
///
/// let registry = ViewRegistry::builtin();
///
/// let uno = registry.get_by_name("uno").unwrap();
/// assert_eq!(uno.kind, ViewKind::Board);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ViewRegistry {
    views: FxHashMap<ViewId, ViewConfig>,
    by_name: FxHashMap<String, ViewId>,
    next_id: u16,
}

impl ViewRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog the shipped client registers at bootstrap:
    /// the lobby plus the four game boards, each seating 2-4 players.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        registry.register_auto("lobby", |c| c.with_title("Lobby"));
        registry.register_auto("the_mind", |c| c.with_title("The Mind").board(2, 4));
        registry.register_auto("war", |c| c.with_title("War").board(2, 4));
        registry.register_auto("uno", |c| c.with_title("Uno").board(2, 4));
        registry.register_auto("halli_galli", |c| {
            c.with_title("Halli Galli").board(2, 4)
        });

        registry
    }

    /// Register a screen configuration.
    ///
    /// Panics if a screen with the same ID or name already exists.
    /// A duplicate registration is a bootstrap bug, not a runtime
    /// condition.
    pub fn register(&mut self, view: ViewConfig) {
        if self.views.contains_key(&view.id) {
            panic!("View with ID {} already registered", view.id);
        }
        if self.by_name.contains_key(&view.name) {
            panic!("View named {:?} already registered", view.name);
        }

        log::debug!("registering view {} as {:?}", view.id, view.name);
        self.by_name.insert(view.name.clone(), view.id);
        self.views.insert(view.id, view);
    }

    /// Register a screen with an auto-assigned ID, shaping the config
    /// with `build` before insertion.
    ///
    /// Returns the assigned ID.
    pub fn register_auto(
        &mut self,
        name: impl Into<String>,
        build: impl FnOnce(ViewConfig) -> ViewConfig,
    ) -> ViewId {
        let id = ViewId::new(self.next_id);
        self.next_id += 1;

        let view = build(ViewConfig::new(id, name));
        self.register(view);
        id
    }

    /// Get a screen configuration by ID.
    #[must_use]
    pub fn get(&self, id: ViewId) -> Option<&ViewConfig> {
        self.views.get(&id)
    }

    /// Get a screen configuration by registration name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&ViewConfig> {
        self.by_name.get(name).and_then(|id| self.views.get(id))
    }

    /// Check if a registration name is taken.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Get the number of registered screens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Iterate over all screen configurations.
    pub fn iter(&self) -> impl Iterator<Item = &ViewConfig> {
        self.views.values()
    }

    /// Find screens by kind.
    pub fn find_by_kind(&self, kind: ViewKind) -> impl Iterator<Item = &ViewConfig> {
        self.views.values().filter(move |v| v.kind == kind)
    }
}
