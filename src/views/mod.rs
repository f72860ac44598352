//! Screen catalog: which screens exist and what the shell knows about
//! them before any game state arrives.
//!
//! ## Key Types
//!
//! - `ViewId`: Identifier assigned at registration
//! - `ViewKind`: Lobby or game board
//! - `ViewConfig`: Registration name, display title, seat bounds
//! - `ViewRegistry`: Lookup by ID or name; `builtin()` for the shipped
//!   catalog

pub mod config;
pub mod registry;

pub use config::{ViewConfig, ViewId, ViewKind};
pub use registry::ViewRegistry;
