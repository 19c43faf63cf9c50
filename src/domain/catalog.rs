//! Toy Space catalog and query engine
//!
//! The catalog is validated once when it is built and is read-only from
//! then on. Queries compute a fresh, ordered view on every call.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use thiserror::Error;

use super::criteria::{SearchCriteria, SortOrder};
use super::toy::{ToyEntry, ToyTag};

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Duplicate entry id: {0}")]
    DuplicateId(String),

    #[error("Duplicate entry slug: {0}")]
    DuplicateSlug(String),

    #[error("Duplicate tag id: {0}")]
    DuplicateTag(String),

    #[error("Entry '{entry}' uses unknown tag '{tag}'")]
    UnknownTag { entry: String, tag: String },
}

/// Immutable set of entries plus the tags they may use
#[derive(Debug, Clone)]
pub struct Catalog {
    tags: Vec<ToyTag>,
    entries: Vec<ToyEntry>,
}

impl Catalog {
    /// Builds a catalog, checking ids, slugs and tag references
    pub fn new(tags: Vec<ToyTag>, entries: Vec<ToyEntry>) -> Result<Self, CatalogError> {
        let mut tag_ids = HashSet::new();
        for tag in &tags {
            if !tag_ids.insert(tag.id.as_str()) {
                return Err(CatalogError::DuplicateTag(tag.id.clone()));
            }
        }

        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();
        for entry in &entries {
            if !ids.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
            if !slugs.insert(entry.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(entry.slug.clone()));
            }
            if let Some(tag) = entry.tags.iter().find(|t| !tag_ids.contains(t.as_str())) {
                return Err(CatalogError::UnknownTag {
                    entry: entry.id.clone(),
                    tag: tag.clone(),
                });
            }
        }

        Ok(Self { tags, entries })
    }

    /// Entries in catalog order
    pub fn entries(&self) -> &[ToyEntry] {
        &self.entries
    }

    pub fn tags(&self) -> &[ToyTag] {
        &self.tags
    }

    pub fn tag(&self, id: &str) -> Option<&ToyTag> {
        self.tags.iter().find(|t| t.id == id)
    }

    /// Display label for a tag id, falling back to the id itself
    pub fn tag_label<'a>(&'a self, id: &'a str) -> &'a str {
        self.tag(id).map(|t| t.label.as_str()).unwrap_or(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Filters and sorts the catalog for `criteria`
    pub fn query(&self, criteria: &SearchCriteria) -> Vec<&ToyEntry> {
        let keyword = criteria.keyword();

        let mut results: Vec<&ToyEntry> = self
            .entries
            .iter()
            .filter(|toy| criteria.category.admits(&toy.category))
            .filter(|toy| criteria.difficulty.admits(&toy.difficulty))
            .filter(|toy| toy.has_all_tags(&criteria.selected_tag_ids))
            .filter(|toy| keyword.as_deref().map_or(true, |k| toy.matches_text(k)))
            .collect();

        // sort_by is stable: ties keep catalog order
        match criteria.sort_order {
            SortOrder::Latest => results.sort_by(|a, b| b.last_updated.cmp(&a.last_updated)),
            SortOrder::Popular => results.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        }

        results
    }

    /// Looks up an entry by slug
    pub fn find_by_slug(&self, slug: &str) -> Option<&ToyEntry> {
        self.entries.iter().find(|e| e.slug == slug)
    }

    /// Other entries sharing at least one tag with `entry`, in catalog order
    pub fn related(&self, entry: &ToyEntry, limit: usize) -> Vec<&ToyEntry> {
        self.entries
            .iter()
            .filter(|other| other.id != entry.id && other.shares_tag_with(entry))
            .take(limit)
            .collect()
    }

    /// Number of entries carrying each known tag, in tag order
    pub fn tag_counts(&self) -> Vec<(&ToyTag, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for entry in &self.entries {
            for tag in &entry.tags {
                *counts.entry(tag.as_str()).or_default() += 1;
            }
        }

        self.tags
            .iter()
            .map(|tag| (tag, counts.get(tag.id.as_str()).copied().unwrap_or(0)))
            .collect()
    }
}

/// Title order: case-insensitive first, exact text to break ties
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
