//! # Site
//!
//! The page table of the portfolio: which path shows which page, which
//! paths redirect, and what the header offers each visitor.
//!
//! | Path | Page |
//! |------|------|
//! | `/` | Home |
//! | `/hue-are-you` | Hue Are You? quiz |
//! | `/portfolio` | Portfolio |
//! | `/toy-space` | Toy Space listing |
//! | `/toy-space/:slug` | Toy Space entry (unknown slug redirects to the listing) |
//! | `/contact` | Contact |
//! | `/admin` | Admin panel (non-admins are sent home) |
//! | anything else | redirect to `/` |

pub mod nav;
pub mod pages;

use std::fmt;

use serde::Serialize;

use crate::domain::Catalog;
use crate::router::{NavigateOptions, RouteError, Router, Routes};

pub use nav::{nav_items, nav_style, NavItem, StyleToken};
pub use pages::PageCopy;

/// Redirect chains longer than this are treated as a cycle
const MAX_REDIRECTS: usize = 8;

/// Who is looking at the site
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Visitor,
    Admin,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Visitor => write!(f, "visitor"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// What a path renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    Home,
    HueAreYou,
    Portfolio,
    ToySpace,
    ToyDetail { slug: String },
    Contact,
    Admin,
    Redirect { to: String, replace: bool },
}

impl Page {
    fn redirect(to: &str) -> Self {
        Page::Redirect {
            to: to.to_string(),
            replace: true,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Page::Redirect { .. })
    }

    /// Static copy for the simple pages
    pub fn copy(&self) -> Option<&'static PageCopy> {
        match self {
            Page::Home => Some(&pages::HOME),
            Page::HueAreYou => Some(&pages::HUE_ARE_YOU),
            Page::Portfolio => Some(&pages::PORTFOLIO),
            Page::Contact => Some(&pages::CONTACT),
            Page::Admin => Some(&pages::ADMIN),
            Page::ToySpace | Page::ToyDetail { .. } | Page::Redirect { .. } => None,
        }
    }

    /// Heading shown for the page
    pub fn title(&self) -> &str {
        match self {
            Page::ToySpace => "Toy Space",
            Page::ToyDetail { slug } => slug.as_str(),
            Page::Redirect { .. } => "Redirecting",
            other => other.copy().map_or("", |copy| copy.title),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RouteKind {
    Home,
    HueAreYou,
    Portfolio,
    ToySpace,
    ToyDetail,
    Contact,
    Admin,
    Fallback,
}

/// Final page reached by [`Site::open`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub page: Page,
    /// Path the router ended on
    pub path: String,
    /// Paths that redirected, in the order they were left
    pub redirects: Vec<String>,
}

/// Route table plus the data pages need to decide on redirects
#[derive(Debug)]
pub struct Site {
    catalog: Catalog,
    role: Role,
    routes: Routes<RouteKind>,
}

impl Site {
    pub fn new(catalog: Catalog, role: Role) -> Result<Self, RouteError> {
        let routes = Routes::new()
            .route("/", RouteKind::Home)?
            .route("/hue-are-you", RouteKind::HueAreYou)?
            .route("/portfolio", RouteKind::Portfolio)?
            .route("/toy-space", RouteKind::ToySpace)?
            .route("/toy-space/:slug", RouteKind::ToyDetail)?
            .route("/contact", RouteKind::Contact)?
            .route("/admin", RouteKind::Admin)?
            .route("*", RouteKind::Fallback)?;

        Ok(Self {
            catalog,
            role,
            routes,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Header links for this visitor
    pub fn nav_items(&self) -> Vec<NavItem> {
        nav_items(self.role)
    }

    /// Decides what `path` shows. Pure; redirects are returned, not followed.
    pub fn resolve(&self, path: &str) -> Page {
        let Some(matched) = self.routes.match_path(path) else {
            return Page::redirect("/");
        };

        match matched.payload {
            RouteKind::Home => Page::Home,
            RouteKind::HueAreYou => Page::HueAreYou,
            RouteKind::Portfolio => Page::Portfolio,
            RouteKind::ToySpace => Page::ToySpace,
            RouteKind::ToyDetail => match matched.param("slug") {
                Some(slug) if self.catalog.find_by_slug(slug).is_some() => Page::ToyDetail {
                    slug: slug.to_string(),
                },
                _ => Page::redirect("/toy-space"),
            },
            RouteKind::Contact => Page::Contact,
            RouteKind::Admin if self.role.is_admin() => Page::Admin,
            RouteKind::Admin => Page::redirect("/"),
            RouteKind::Fallback => Page::redirect("/"),
        }
    }

    /// Resolves the router's current path, following redirects through the
    /// router so its history sees them.
    ///
    /// # Panics
    ///
    /// Panics if redirects do not settle, which means the route table
    /// itself is broken.
    pub fn open(&self, router: &mut Router) -> Resolution {
        let mut redirects = Vec::new();

        loop {
            let path = router.location().to_string();
            match self.resolve(&path) {
                Page::Redirect { to, replace } => {
                    assert!(
                        redirects.len() < MAX_REDIRECTS,
                        "redirect loop starting at {}",
                        redirects.first().unwrap_or(&path)
                    );
                    redirects.push(path);
                    let options = if replace {
                        NavigateOptions::replace()
                    } else {
                        NavigateOptions::push()
                    };
                    router.navigate(&to, options);
                }
                page => {
                    return Resolution {
                        page,
                        path,
                        redirects,
                    }
                }
            }
        }
    }
}
