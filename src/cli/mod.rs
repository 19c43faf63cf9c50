//! # Command-Line Interface
//!
//! Terminal front end of the site: resolve routes, query the Toy Space
//! catalog, prepare admin requests, or browse the whole site.
//!
//! ## Command Groups
//!
//! | Group | Purpose | Examples |
//! |-------|---------|----------|
//! | Routing | Page resolution and header state | `route /toy-space/x`, `nav /contact` |
//! | Toy Space | Catalog queries | `toys list --tag react`, `toys show prompt-hub`, `toys tags` |
//! | Admin | Results fetch contract | `admin range 0 24`, `admin inspect body.json` |
//! | Browse | Interactive site | `browse /portfolio` |
//!
//! ## Output Formats
//!
//! All commands except `browse` support `--format`:
//! - `text` (default, or `default_format` from the config file) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! ahaha --verbose toys list --sort popular
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod admin;
mod app;
mod output;
mod route_cmd;
mod toys;
mod tui;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
