//! Header navigation
//!
//! Links only report whether they are active; how an active link looks is
//! decided by [`nav_style`], not by the router.

use serde::Serialize;

use super::Role;
use crate::router::is_active;

/// Style decision for a navigation link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleToken {
    Active,
    Inactive,
}

impl StyleToken {
    /// CSS-style class name
    pub fn as_class(&self) -> &'static str {
        match self {
            StyleToken::Active => "active",
            StyleToken::Inactive => "",
        }
    }
}

/// Maps link state to its style
pub fn nav_style(active: bool) -> StyleToken {
    if active {
        StyleToken::Active
    } else {
        StyleToken::Inactive
    }
}

/// A header link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub to: &'static str,
    /// Only highlight on an exact match
    pub end: bool,
    pub admin_only: bool,
    /// Leaves the site; `to` is a full URL and never active
    pub external: bool,
}

impl NavItem {
    /// Active state of this link at `location`
    pub fn is_active(&self, location: &str) -> bool {
        !self.external && is_active(self.to, location, self.end)
    }
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Home",
        to: "/",
        end: true,
        admin_only: false,
        external: false,
    },
    NavItem {
        label: "Hue Are You?",
        to: "/hue-are-you",
        end: false,
        admin_only: false,
        external: false,
    },
    NavItem {
        label: "Toy Space",
        to: "/toy-space",
        end: false,
        admin_only: false,
        external: false,
    },
    NavItem {
        label: "Contact",
        to: "/contact",
        end: false,
        admin_only: false,
        external: false,
    },
    NavItem {
        label: "GitHub",
        to: "https://github.com/aruzen",
        end: false,
        admin_only: false,
        external: true,
    },
    NavItem {
        label: "Admin",
        to: "/admin",
        end: false,
        admin_only: true,
        external: false,
    },
];

/// Links visible to `role`, in header order
pub fn nav_items(role: Role) -> Vec<NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|item| !item.admin_only || role.is_admin())
        .copied()
        .collect()
}
