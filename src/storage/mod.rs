//! # Storage Layer
//!
//! Read-only inputs of the site: configuration and the embedded catalog.
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Config | TOML | `<config dir>/config.toml` or `--config` |
//! | Tags | YAML | `content/tags.yaml` (compiled in) |
//! | Toys | Markdown + YAML frontmatter | `content/toys/*.md` (compiled in) |
//!
//! Nothing here writes; the catalog cannot change after startup.

mod config;
mod content;

pub use config::{AdminConfig, BrowserConfig, ConfigError, OutputFormat, SiteConfig, ToySpaceConfig};
pub use content::{builtin_catalog, parse_entry, parse_tags, ContentError};
