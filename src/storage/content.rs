//! Embedded Toy Space content
//!
//! The catalog ships inside the binary: `content/tags.yaml` plus one
//! markdown file per entry under `content/toys/`, each with a YAML
//! frontmatter block followed by the markdown body.

use thiserror::Error;

use crate::domain::{Catalog, CatalogError, ToyEntry, ToyFrontmatter, ToyTag};

const TAGS: &str = include_str!("../../content/tags.yaml");

const TOYS: &[(&str, &str)] = &[
    (
        "hue-visualizer.md",
        include_str!("../../content/toys/hue-visualizer.md"),
    ),
    (
        "rust-go-gateway.md",
        include_str!("../../content/toys/rust-go-gateway.md"),
    ),
    (
        "prompt-hub.md",
        include_str!("../../content/toys/prompt-hub.md"),
    ),
];

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("{file}: missing frontmatter (must start with ---)")]
    MissingFrontmatter { file: String },

    #[error("{file}: missing frontmatter end delimiter (---)")]
    UnterminatedFrontmatter { file: String },

    #[error("{file}: failed to parse frontmatter: {source}")]
    Frontmatter {
        file: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to parse tags: {0}")]
    Tags(#[source] serde_yaml::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Loads the catalog compiled into the binary
pub fn builtin_catalog() -> Result<Catalog, ContentError> {
    let tags = parse_tags(TAGS)?;
    let entries = TOYS
        .iter()
        .map(|(file, content)| parse_entry(file, content))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Catalog::new(tags, entries)?)
}

/// Parses the tag list
pub fn parse_tags(yaml: &str) -> Result<Vec<ToyTag>, ContentError> {
    serde_yaml::from_str(yaml).map_err(ContentError::Tags)
}

/// Parses one markdown file into an entry
pub fn parse_entry(file: &str, content: &str) -> Result<ToyEntry, ContentError> {
    let content = content.trim();

    let rest = content
        .strip_prefix("---")
        .ok_or_else(|| ContentError::MissingFrontmatter {
            file: file.to_string(),
        })?;

    // The closing delimiter sits on its own line; table rules in the body
    // also contain `---`, so match the line start.
    let end_pos = rest
        .find("\n---")
        .ok_or_else(|| ContentError::UnterminatedFrontmatter {
            file: file.to_string(),
        })?;

    let yaml = rest[..end_pos].trim();
    let body = rest[end_pos + 4..].trim();

    let fm: ToyFrontmatter =
        serde_yaml::from_str(yaml).map_err(|source| ContentError::Frontmatter {
            file: file.to_string(),
            source,
        })?;

    Ok(fm.into_entry(body.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Difficulty, SearchCriteria};

    #[test]
    fn builtin_catalog_loads() {
        let catalog = builtin_catalog().unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.tags().len(), 6);

        let gateway = catalog.find_by_slug("rust-go-gateway").unwrap();
        assert_eq!(gateway.id, "toy-2");
        assert_eq!(gateway.category, Category::Reference);
        assert_eq!(gateway.difficulty, Difficulty::Advanced);
        assert!(gateway.content.starts_with("## "));
    }

    #[test]
    fn builtin_default_order() {
        let catalog = builtin_catalog().unwrap();
        let ids: Vec<_> = catalog
            .query(&SearchCriteria::default())
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["toy-1", "toy-2", "toy-3"]);
    }

    #[test]
    fn tag_colors_are_optional() {
        let tags = parse_tags("- id: a\n  label: A\n  color: \"#112233\"\n- id: b\n  label: B\n").unwrap();
        assert_eq!(tags[0].color.as_deref(), Some("#112233"));
        assert_eq!(tags[1].color, None);

        let catalog = builtin_catalog().unwrap();
        assert!(catalog.tags().iter().all(|tag| tag.color.is_some()));
    }

    #[test]
    fn body_with_table_rule_is_kept() {
        let catalog = builtin_catalog().unwrap();
        let viz = catalog.find_by_slug("hue-visualizer").unwrap();
        assert!(viz.content.contains("| --- | --- |"));
    }

    #[test]
    fn missing_frontmatter() {
        let err = parse_entry("x.md", "# just markdown").unwrap_err();
        assert!(matches!(err, ContentError::MissingFrontmatter { .. }));
    }

    #[test]
    fn unterminated_frontmatter() {
        let err = parse_entry("x.md", "---\nid: x\n").unwrap_err();
        assert!(matches!(err, ContentError::UnterminatedFrontmatter { .. }));
    }

    #[test]
    fn bad_frontmatter_names_the_file() {
        let err = parse_entry("broken.md", "---\nid: [\n---\nbody").unwrap_err();
        assert!(err.to_string().starts_with("broken.md: failed to parse frontmatter"));
    }
}
