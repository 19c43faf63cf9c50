//! Routing commands (route, nav)

use anyhow::Result;
use serde::Serialize;

use super::app::Context;
use super::output::Output;
use crate::router::{NavigateOptions, Router};
use crate::site::{nav_style, Resolution};

/// Opens `path` in a fresh router and follows redirects
fn open(ctx: &Context, output: &Output, path: &str) -> Resolution {
    let mut router = Router::detached();
    router.navigate(path, NavigateOptions::push());
    let resolution = ctx.site.open(&mut router);

    for from in &resolution.redirects {
        output.verbose_ctx("route", &format!("Redirected away from {}", from));
    }
    resolution
}

/// Resolve a path to its page
pub fn route(ctx: &Context, output: &Output, path: &str) -> Result<()> {
    let resolution = open(ctx, output, path);

    if output.is_json() {
        output.data(&serde_json::json!({
            "requested": path,
            "path": resolution.path,
            "page": resolution.page,
            "redirects": resolution.redirects,
        }));
    } else {
        for from in &resolution.redirects {
            println!("redirect: {}", from);
        }
        println!("path:     {}", resolution.path);
        println!("page:     {}", resolution.page.title());
    }

    Ok(())
}

#[derive(Serialize)]
struct NavState<'a> {
    label: &'a str,
    to: &'a str,
    active: bool,
    class: &'static str,
}

/// Show header links with their active state
pub fn nav(ctx: &Context, output: &Output, path: &str) -> Result<()> {
    let resolution = open(ctx, output, path);
    let items = ctx.site.nav_items();

    let states: Vec<NavState> = items
        .iter()
        .map(|item| {
            let active = item.is_active(&resolution.path);
            NavState {
                label: item.label,
                to: item.to,
                active,
                class: nav_style(active).as_class(),
            }
        })
        .collect();

    if output.is_json() {
        output.data(&serde_json::json!({
            "path": resolution.path,
            "items": states,
        }));
    } else {
        println!("At {}", resolution.path);
        for state in &states {
            let marker = if state.active { "*" } else { " " };
            println!("{} {:<14} {}", marker, state.label, state.to);
        }
    }

    Ok(())
}
