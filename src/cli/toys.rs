//! Toy Space CLI commands

use anyhow::{bail, Result};
use clap::Subcommand;

use super::app::Context;
use super::output::Output;
use crate::domain::{Catalog, Category, Difficulty, Filter, SearchCriteria, SortOrder, ToyEntry};
use crate::router::{NavigateOptions, Router};
use crate::site::Page;

#[derive(Subcommand)]
pub enum ToyCommands {
    /// List entries matching the given filters
    List {
        /// Free-text search over title and summary
        #[arg(long, short)]
        query: Option<String>,

        /// Require a tag (repeat to require several)
        #[arg(long = "tag", short = 't')]
        tags: Vec<String>,

        /// Category filter (all, blog, reference, tutorial)
        #[arg(long, short, default_value = "all")]
        category: Filter<Category>,

        /// Difficulty filter (all, beginner, intermediate, advanced)
        #[arg(long, short, default_value = "all")]
        difficulty: Filter<Difficulty>,

        /// Sort order (latest, popular)
        #[arg(long, short, default_value = "latest")]
        sort: SortOrder,
    },

    /// Show one entry with its related entries
    Show {
        /// Entry slug
        slug: String,
    },

    /// List tags with how many entries carry each
    Tags,
}

pub fn run(cmd: ToyCommands, ctx: &Context, output: &Output) -> Result<()> {
    match cmd {
        ToyCommands::List {
            query,
            tags,
            category,
            difficulty,
            sort,
        } => {
            let mut criteria = SearchCriteria::new();
            if let Some(query) = query {
                criteria.set_query(query);
            }
            for tag in &tags {
                if ctx.site.catalog().tag(tag).is_none() {
                    bail!("Unknown tag: {}", tag);
                }
                if !criteria.is_tag_selected(tag) {
                    criteria.toggle_tag(tag);
                }
            }
            criteria.set_category(category);
            criteria.set_difficulty(difficulty);
            criteria.set_sort_order(sort);

            list(ctx.site.catalog(), output, &criteria)
        }
        ToyCommands::Show { slug } => show(ctx, output, &slug),
        ToyCommands::Tags => tags(ctx.site.catalog(), output),
    }
}

fn list(catalog: &Catalog, output: &Output, criteria: &SearchCriteria) -> Result<()> {
    output.verbose_ctx("toys", &format!("Querying with {:?}", criteria));
    let results = catalog.query(criteria);
    output.verbose_ctx(
        "toys",
        &format!("{} of {} entries match", results.len(), catalog.len()),
    );

    if output.is_json() {
        output.data(&serde_json::json!({
            "criteria": criteria,
            "entries": results,
        }));
    } else if results.is_empty() {
        println!("No toys match the current filters.");
    } else {
        println!("{:<18} {:<10} {:<13} {:<11} TITLE", "SLUG", "CATEGORY", "DIFFICULTY", "UPDATED");
        println!("{}", "-".repeat(72));
        for toy in &results {
            println!(
                "{:<18} {:<10} {:<13} {:<11} {}",
                toy.slug,
                toy.category.to_string(),
                toy.difficulty.to_string(),
                toy.last_updated.to_string(),
                toy.title
            );
        }
        println!();
        println!("{} toy(s)", results.len());
    }

    Ok(())
}

fn show(ctx: &Context, output: &Output, slug: &str) -> Result<()> {
    let catalog = ctx.site.catalog();

    // Route through the site so an unknown slug redirects like the page does
    let mut router = Router::detached();
    router.navigate(&format!("/toy-space/{}", slug), NavigateOptions::push());
    let resolution = ctx.site.open(&mut router);

    let entry = match &resolution.page {
        Page::ToyDetail { slug } => catalog.find_by_slug(slug),
        _ => None,
    };

    let Some(entry) = entry else {
        output.warn(&format!(
            "No toy with slug '{}'; redirected to {}",
            slug, resolution.path
        ));
        return list(catalog, output, &SearchCriteria::default());
    };

    let related = catalog.related(entry, ctx.config.toy_space.related_limit);
    output.verbose_ctx("toys", &format!("{} related entries", related.len()));

    if output.is_json() {
        output.data(&serde_json::json!({
            "entry": entry,
            "tag_labels": tag_labels(catalog, entry),
            "related": related,
        }));
        return Ok(());
    }

    println!("{}", entry.title);
    println!("{}", "=".repeat(entry.title.chars().count().max(3)));
    println!("{}", entry.summary);
    println!();
    println!("Category:   {}", entry.category);
    println!("Difficulty: {}", entry.difficulty);
    println!("Updated:    {}", entry.last_updated);
    println!("Tags:       {}", tag_labels(catalog, entry).join(", "));
    if let Some(url) = &entry.repository_url {
        println!("Repository: {}", url);
    }
    println!();
    println!("{}", entry.content);

    if !related.is_empty() {
        println!();
        println!("Related:");
        for other in related {
            println!("  {:<18} {}", other.slug, other.title);
        }
    }

    Ok(())
}

fn tags(catalog: &Catalog, output: &Output) -> Result<()> {
    let counts = catalog.tag_counts();

    if output.is_json() {
        let items: Vec<_> = counts
            .iter()
            .map(|(tag, count)| {
                serde_json::json!({
                    "id": tag.id,
                    "label": tag.label,
                    "color": tag.color,
                    "count": count,
                })
            })
            .collect();
        output.data(&items);
    } else {
        println!("{:<14} {:<14} COUNT", "ID", "LABEL");
        for (tag, count) in counts {
            println!("{:<14} {:<14} {}", tag.id, tag.label, count);
        }
    }

    Ok(())
}

fn tag_labels<'a>(catalog: &'a Catalog, entry: &'a ToyEntry) -> Vec<&'a str> {
    entry.tags.iter().map(|id| catalog.tag_label(id)).collect()
}
