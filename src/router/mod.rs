//! # Client-Side Router
//!
//! A small router for single-page navigation: one live path, an ordered
//! route table, and a host environment that mirrors the path in its
//! address bar and history stack.
//!
//! ## Pieces
//!
//! | Type | Role |
//! |------|------|
//! | [`Router`] | Owns the current path; `navigate` and `sync_from_history` are the only mutators |
//! | [`History`] | Host environment (address bar + history stack) |
//! | [`Routes`] | Ordered `pattern -> payload` registrations, first match wins |
//! | [`RouterHandle`] | Shared handle installed with `provide` for `use_*` accessors |
//!
//! ## Patterns
//!
//! - `/contact` - literal, compared after normalization
//! - `/toy-space/:slug` - one dynamic segment
//! - `*` - anything not matched earlier (register it last)
//!
//! Everything here is synchronous and single-threaded.

mod context;
mod history;
mod navigation;
mod path;
mod routes;

pub use context::{use_is_active, use_location, use_navigate, Navigator, RouterHandle};
pub use history::{History, MemoryHistory};
pub use navigation::{ListenerId, NavigateOptions, Router};
pub use path::{is_active, normalize_path};
pub use routes::{match_route, Pattern, Route, RouteError, RouteMatch, Routes};
