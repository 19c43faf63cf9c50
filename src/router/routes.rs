//! Route table and path matching
//!
//! Registrations are evaluated in declaration order and the first match
//! wins. A `*` registration matches anything, so it belongs at the end;
//! placing it earlier shadows every later route and is not detected.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::path::{normalize_path, segments};

#[derive(Debug, Error, PartialEq)]
pub enum RouteError {
    #[error("Route pattern '{0}' has more than one dynamic segment")]
    MultipleParams(String),

    #[error("Route pattern '{0}' has an unnamed dynamic segment")]
    EmptyParamName(String),
}

/// A parsed route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// `*`: matches any path
    Wildcard,

    /// A normalized absolute path compared for equality
    Literal(String),

    /// A path with exactly one `:name` segment
    Param {
        pattern: String,
        index: usize,
        name: String,
    },
}

impl Pattern {
    /// Returns the captured parameter if this pattern matches `path`.
    ///
    /// `path` must already be normalized. The outer `Option` is the match,
    /// the inner one is the capture (only `Param` patterns capture).
    fn capture<'p>(&self, path: &'p str) -> Option<Option<&'p str>> {
        match self {
            Pattern::Wildcard => Some(None),
            Pattern::Literal(literal) => (literal == path).then_some(None),
            Pattern::Param { pattern, index, .. } => {
                let expected = segments(pattern);
                let actual = segments(path);
                if expected.len() != actual.len() {
                    return None;
                }

                for (i, (want, got)) in expected.iter().zip(&actual).enumerate() {
                    if i == *index {
                        if got.is_empty() {
                            return None;
                        }
                    } else if want != got {
                        return None;
                    }
                }

                Some(Some(actual[*index]))
            }
        }
    }

    /// Returns true if this pattern matches the (unnormalized) path
    pub fn matches(&self, path: &str) -> bool {
        self.capture(&normalize_path(path)).is_some()
    }

    /// Returns true for the catch-all pattern
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Pattern::Wildcard)
    }
}

impl FromStr for Pattern {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "*" {
            return Ok(Pattern::Wildcard);
        }

        let normalized = normalize_path(s);
        let mut params: Vec<(usize, String)> = segments(&normalized)
            .into_iter()
            .enumerate()
            .filter_map(|(i, seg)| seg.strip_prefix(':').map(|name| (i, name.to_string())))
            .collect();

        if params.len() > 1 {
            return Err(RouteError::MultipleParams(s.to_string()));
        }

        match params.pop() {
            None => Ok(Pattern::Literal(normalized)),
            Some((_, name)) if name.is_empty() => Err(RouteError::EmptyParamName(s.to_string())),
            Some((index, name)) => Ok(Pattern::Param {
                pattern: normalized,
                index,
                name,
            }),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Wildcard => write!(f, "*"),
            Pattern::Literal(path) => write!(f, "{}", path),
            Pattern::Param { pattern, .. } => write!(f, "{}", pattern),
        }
    }
}

/// A single route registration
#[derive(Debug, Clone)]
pub struct Route<P> {
    pub pattern: Pattern,
    pub payload: P,
}

impl<P> Route<P> {
    pub fn new(pattern: &str, payload: P) -> Result<Self, RouteError> {
        Ok(Self {
            pattern: pattern.parse()?,
            payload,
        })
    }
}

/// Result of a successful match
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch<'a, P> {
    pub payload: &'a P,
    pub pattern: &'a Pattern,
    /// Normalized path that was matched
    pub path: String,
    capture: Option<String>,
}

impl<P> RouteMatch<'_, P> {
    /// Returns the dynamic segment value if `name` is this route's parameter
    pub fn param(&self, name: &str) -> Option<&str> {
        match self.pattern {
            Pattern::Param { name: n, .. } if n == name => self.capture.as_deref(),
            _ => None,
        }
    }
}

/// Matches `path` against `routes` in order. Pure; no side effects.
pub fn match_route<'a, P>(routes: &'a [Route<P>], path: &str) -> Option<RouteMatch<'a, P>> {
    let path = normalize_path(path);

    routes.iter().find_map(|route| {
        route.pattern.capture(&path).map(|capture| RouteMatch {
            payload: &route.payload,
            pattern: &route.pattern,
            capture: capture.map(str::to_string),
            path: path.clone(),
        })
    })
}

/// Ordered route table
#[derive(Debug, Clone)]
pub struct Routes<P> {
    routes: Vec<Route<P>>,
}

impl<P> Default for Routes<P> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<P> Routes<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a registration
    pub fn route(mut self, pattern: &str, payload: P) -> Result<Self, RouteError> {
        self.routes.push(Route::new(pattern, payload)?);
        Ok(self)
    }

    /// Finds the first registration matching `path`
    pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_, P>> {
        match_route(&self.routes, path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route<P>> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
