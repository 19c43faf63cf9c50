//! Router provider scope
//!
//! Views read the location and navigate through the router installed by
//! [`RouterHandle::provide`]. Reaching for it outside that scope is a
//! programming error and panics.

use std::cell::RefCell;
use std::rc::Rc;

use super::navigation::{NavigateOptions, Router};
use super::path;

thread_local! {
    static CURRENT: RefCell<Option<RouterHandle>> = const { RefCell::new(None) };
}

/// Shared single-threaded handle to a [`Router`]
#[derive(Debug, Clone)]
pub struct RouterHandle {
    inner: Rc<RefCell<Router>>,
}

impl RouterHandle {
    pub fn new(router: Router) -> Self {
        Self {
            inner: Rc::new(RefCell::new(router)),
        }
    }

    /// Runs `f` with this router installed as the current one
    pub fn provide<R>(&self, f: impl FnOnce() -> R) -> R {
        let previous = CURRENT.with(|current| current.replace(Some(self.clone())));
        let _restore = Restore(previous);
        f()
    }

    pub fn location(&self) -> String {
        self.inner.borrow().location().to_string()
    }

    pub fn navigate(&self, to: &str, options: NavigateOptions) {
        self.inner.borrow_mut().navigate(to, options);
    }

    /// Borrows the router mutably for host-side work (back/forward, subscriptions)
    pub fn with_router<R>(&self, f: impl FnOnce(&mut Router) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }
}

/// Puts the outer router back when a `provide` scope ends, including on unwind
struct Restore(Option<RouterHandle>);

impl Drop for Restore {
    fn drop(&mut self) {
        let previous = self.0.take();
        CURRENT.with(|current| *current.borrow_mut() = previous);
    }
}

fn use_router(name: &str) -> RouterHandle {
    CURRENT
        .with(|current| current.borrow().clone())
        .unwrap_or_else(|| panic!("{} must be used within a router context", name))
}

/// Current path of the provided router
pub fn use_location() -> String {
    use_router("use_location").location()
}

/// Navigation entry point of the provided router
pub fn use_navigate() -> Navigator {
    Navigator {
        handle: use_router("use_navigate"),
    }
}

/// Active-link state for `to` at the provided router's location
pub fn use_is_active(to: &str, exact: bool) -> bool {
    let location = use_router("use_is_active").location();
    path::is_active(to, &location, exact)
}

/// Navigation capability handed out by [`use_navigate`]
#[derive(Debug, Clone)]
pub struct Navigator {
    handle: RouterHandle,
}

impl Navigator {
    pub fn navigate(&self, to: &str, options: NavigateOptions) {
        self.handle.navigate(to, options);
    }
}
