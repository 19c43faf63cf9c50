//! Navigation state owner
//!
//! [`Router`] holds the one live path of the application. It changes only
//! through [`Router::navigate`] and [`Router::sync_from_history`]; every
//! change is delivered to subscribers before the call returns.

use std::fmt;

use super::history::History;
use super::path::normalize_path;

/// Options for [`Router::navigate`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Overwrite the current history entry instead of adding one
    pub replace: bool,
}

impl NavigateOptions {
    pub fn push() -> Self {
        Self { replace: false }
    }

    pub fn replace() -> Self {
        Self { replace: true }
    }
}

/// Identifies a subscription for [`Router::unsubscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&str)>;

/// Client-side router state
pub struct Router {
    location: String,
    history: Option<Box<dyn History>>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl Router {
    /// Creates a router, reading the initial path from the environment if
    /// there is one and defaulting to `/` otherwise
    pub fn new(history: Option<Box<dyn History>>) -> Self {
        let location = history
            .as_ref()
            .map(|h| normalize_path(&h.location()))
            .unwrap_or_else(|| "/".to_string());

        Self {
            location,
            history,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Creates a router with no environment behind it
    pub fn detached() -> Self {
        Self::new(None)
    }

    /// Creates a router backed by the given environment
    pub fn with_history(history: impl History + 'static) -> Self {
        Self::new(Some(Box::new(history)))
    }

    /// Current normalized path
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Navigates to `to`. Malformed input is normalized, never rejected.
    pub fn navigate(&mut self, to: &str, options: NavigateOptions) {
        let normalized = normalize_path(to);

        if let Some(history) = self.history.as_mut() {
            if options.replace {
                history.replace(&normalized);
            } else {
                history.push(&normalized);
            }
        }

        self.set_location(normalized);
    }

    /// Picks up a location change the environment made on its own
    /// (back/forward). Never writes to the history.
    ///
    /// Returns true if the location changed.
    pub fn sync_from_history(&mut self) -> bool {
        let Some(history) = self.history.as_ref() else {
            return false;
        };

        let normalized = normalize_path(&history.location());
        if normalized == self.location {
            return false;
        }

        self.set_location(normalized);
        true
    }

    /// Moves the environment back one entry and syncs.
    ///
    /// Returns true if the history moved, even onto an entry with the same
    /// path. Subscribers only hear about an actual path change.
    pub fn back(&mut self) -> bool {
        let moved = self.history.as_mut().is_some_and(|h| h.back());
        if moved {
            self.sync_from_history();
        }
        moved
    }

    /// Moves the environment forward one entry and syncs; see [`Router::back`]
    pub fn forward(&mut self) -> bool {
        let moved = self.history.as_mut().is_some_and(|h| h.forward());
        if moved {
            self.sync_from_history();
        }
        moved
    }

    /// Registers a listener called with the new path after every change.
    /// Listeners must not call back into the router.
    pub fn subscribe(&mut self, listener: impl FnMut(&str) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// The environment, if any
    pub fn history(&self) -> Option<&dyn History> {
        self.history.as_deref()
    }

    pub fn has_history(&self) -> bool {
        self.history.is_some()
    }

    fn set_location(&mut self, location: String) {
        self.location = location;
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.location);
        }
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("location", &self.location)
            .field("has_history", &self.history.is_some())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
