//! Toy Space entry model
//!
//! Toys are the content items of the Toy Space catalog: short write-ups of
//! experiments with a category, difficulty, tags and a markdown body.
//! They are loaded once and never change afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of write-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Blog,
    Reference,
    Tutorial,
}

impl Category {
    /// Returns all valid categories
    pub fn all() -> &'static [Category] {
        &[Category::Blog, Category::Reference, Category::Tutorial]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Blog => write!(f, "blog"),
            Category::Reference => write!(f, "reference"),
            Category::Tutorial => write!(f, "tutorial"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "blog" => Ok(Category::Blog),
            "reference" | "ref" => Ok(Category::Reference),
            "tutorial" => Ok(Category::Tutorial),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

/// How much background a reader needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Returns all valid difficulties
    pub fn all() -> &'static [Difficulty] {
        &[
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ]
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "beginner"),
            Difficulty::Intermediate => write!(f, "intermediate"),
            Difficulty::Advanced => write!(f, "advanced"),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(format!("Unknown difficulty: {}", s)),
        }
    }
}

/// A tag that entries can carry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToyTag {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Chip accent as `#rrggbb`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToyEntry {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub difficulty: Difficulty,
    /// Serialized as `YYYY-MM-DD`; date order equals string order for that form
    pub last_updated: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
    pub slug: String,
    pub content: String,
}

impl ToyEntry {
    /// Returns true if every tag in `tag_ids` is on this entry
    pub fn has_all_tags(&self, tag_ids: &[String]) -> bool {
        tag_ids.iter().all(|id| self.tags.contains(id))
    }

    /// Returns true if this entry and `other` have a tag in common
    pub fn shares_tag_with(&self, other: &ToyEntry) -> bool {
        self.tags.iter().any(|tag| other.tags.contains(tag))
    }

    /// Case-insensitive substring match over title and summary.
    ///
    /// `keyword` must already be trimmed and lower-cased.
    pub fn matches_text(&self, keyword: &str) -> bool {
        let haystack = format!("{} {}", self.title, self.summary).to_lowercase();
        haystack.contains(keyword)
    }

    /// Path of this entry's detail page
    pub fn path(&self) -> String {
        format!("/toy-space/{}", self.slug)
    }
}

/// YAML frontmatter of an entry's markdown file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToyFrontmatter {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    pub difficulty: Difficulty,
    pub last_updated: NaiveDate,
    #[serde(default)]
    pub hero_image: Option<String>,
    #[serde(default)]
    pub repository_url: Option<String>,
    pub slug: String,
}

impl ToyFrontmatter {
    /// Combines the frontmatter with the markdown body
    pub fn into_entry(self, content: String) -> ToyEntry {
        ToyEntry {
            id: self.id,
            title: self.title,
            summary: self.summary,
            category: self.category,
            tags: self.tags,
            difficulty: self.difficulty,
            last_updated: self.last_updated,
            hero_image: self.hero_image,
            repository_url: self.repository_url,
            slug: self.slug,
            content,
        }
    }
}
