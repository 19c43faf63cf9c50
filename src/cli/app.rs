//! Main CLI application structure

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{admin, route_cmd, toys, tui};
use crate::site::{Role, Site};
use crate::storage::{builtin_catalog, SiteConfig};

#[derive(Parser)]
#[command(name = "ahaha")]
#[command(author, version, about = "Portfolio site router and Toy Space catalog")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the config file's default_format)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "AHAHA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Starting path for commands that take an optional path
    #[arg(long, global = true, env = "AHAHA_PATH", default_value = "/")]
    pub path: String,

    /// Browse as an administrator
    #[arg(long, global = true, env = "AHAHA_ADMIN")]
    pub admin: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a path to the page it shows, following redirects
    Route {
        /// Path to resolve (defaults to --path)
        path: Option<String>,
    },

    /// Show header links and which one is active at a path
    Nav {
        /// Current path (defaults to --path)
        path: Option<String>,
    },

    /// Query the Toy Space catalog
    #[command(subcommand)]
    Toys(toys::ToyCommands),

    /// Admin panel helpers (requires --admin)
    #[command(subcommand)]
    Admin(admin::AdminCommands),

    /// Browse the site interactively
    Browse {
        /// Path to open first (defaults to --path)
        path: Option<String>,
    },
}

/// Everything a command needs besides its own arguments
pub struct Context {
    pub site: Site,
    pub config: SiteConfig,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = SiteConfig::load(cli.config.as_deref())?;
    let format = cli
        .format
        .unwrap_or_else(|| OutputFormat::from(config.default_format));
    let output = Output::new(format, cli.verbose);

    output.verbose("ahaha starting");
    output.verbose_ctx("config", &format!("Loaded config: {:?}", config));

    let role = if cli.admin { Role::Admin } else { Role::Visitor };
    let catalog = builtin_catalog().context("Failed to load the Toy Space catalog")?;
    output.verbose_ctx(
        "catalog",
        &format!("{} entries, {} tags", catalog.len(), catalog.tags().len()),
    );

    let site = Site::new(catalog, role).context("Failed to build the route table")?;
    let ctx = Context { site, config };

    match cli.command {
        Commands::Route { path } => {
            let path = path.unwrap_or(cli.path);
            output.verbose_ctx("route", &format!("Resolving {} as {}", path, role));
            route_cmd::route(&ctx, &output, &path)?
        }
        Commands::Nav { path } => {
            let path = path.unwrap_or(cli.path);
            route_cmd::nav(&ctx, &output, &path)?
        }
        Commands::Toys(cmd) => toys::run(cmd, &ctx, &output)?,
        Commands::Admin(cmd) => admin::run(cmd, &ctx, &output)?,
        Commands::Browse { path } => {
            let path = path.unwrap_or(cli.path);
            tui::run(&ctx, &output, &path)?
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}
