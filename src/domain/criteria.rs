//! Toy Space search criteria
//!
//! A criteria value is always a complete, valid filter. Mutators replace
//! one field at a time; there is no intermediate state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::toy::{Category, Difficulty};

/// Either no constraint, or one specific value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Filter<T> {
    /// Returns true if `value` passes this filter
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }
}

impl<T: fmt::Display> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => write!(f, "all"),
            Filter::Only(value) => value.fmt(f),
        }
    }
}

impl<T: FromStr> FromStr for Filter<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Filter::All)
        } else {
            s.parse().map(Filter::Only)
        }
    }
}

impl<T: fmt::Display> Serialize for Filter<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de, T> Deserialize<'de> for Filter<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Ordering applied after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Most recently updated first
    #[default]
    Latest,
    /// Alphabetical by title
    Popular,
}

impl SortOrder {
    pub fn all() -> &'static [SortOrder] {
        &[SortOrder::Latest, SortOrder::Popular]
    }

    /// The other sort order
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Latest => SortOrder::Popular,
            SortOrder::Popular => SortOrder::Latest,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Latest => write!(f, "latest"),
            SortOrder::Popular => write!(f, "popular"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "latest" => Ok(SortOrder::Latest),
            "popular" => Ok(SortOrder::Popular),
            _ => Err(format!("Unknown sort order: {}", s)),
        }
    }
}

/// Active filter and sort choices for one listing view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCriteria {
    /// Free text, stored verbatim; trimmed only when querying
    pub query: String,
    /// Tags an entry must all carry; no duplicates
    #[serde(deserialize_with = "deserialize_unique_tags")]
    pub selected_tag_ids: Vec<String>,
    pub category: Filter<Category>,
    pub difficulty: Filter<Difficulty>,
    pub sort_order: SortOrder,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Adds the tag if absent, removes it if present
    pub fn toggle_tag(&mut self, tag_id: &str) {
        if let Some(pos) = self.selected_tag_ids.iter().position(|id| id == tag_id) {
            self.selected_tag_ids.remove(pos);
        } else {
            self.selected_tag_ids.push(tag_id.to_string());
        }
    }

    pub fn is_tag_selected(&self, tag_id: &str) -> bool {
        self.selected_tag_ids.iter().any(|id| id == tag_id)
    }

    pub fn set_category(&mut self, category: Filter<Category>) {
        self.category = category;
    }

    pub fn set_difficulty(&mut self, difficulty: Filter<Difficulty>) {
        self.difficulty = difficulty;
    }

    pub fn set_sort_order(&mut self, sort_order: SortOrder) {
        self.sort_order = sort_order;
    }

    /// Restores every field to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// The text filter as applied: trimmed and lower-cased, `None` when blank
    pub fn keyword(&self) -> Option<String> {
        let trimmed = self.query.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }
}

/// Keeps the first occurrence of each tag id
fn deserialize_unique_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    let mut unique: Vec<String> = Vec::with_capacity(raw.len());
    for id in raw {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    Ok(unique)
}
