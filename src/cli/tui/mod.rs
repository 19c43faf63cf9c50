//! Interactive site browser
//!
//! Renders the site in the terminal with ratatui. The browser owns an
//! in-memory history, so back and forward behave like a web browser's.

mod app;
mod event;
mod ui;
mod utils;
mod views;

use std::panic::{self, AssertUnwindSafe};

use anyhow::{anyhow, Result};

use super::app::Context;
use super::Output;
use app::App;
use event::EventHandler;

/// Launch the browser at `path`
pub fn run(ctx: &Context, output: &Output, path: &str) -> Result<()> {
    output.verbose_ctx("browse", &format!("Opening {} as {}", path, ctx.site.role()));

    let mut app = App::new(&ctx.site, &ctx.config, path);

    let mut terminal = ui::init_terminal()?;
    let event_handler = EventHandler::new(ctx.config.browser.tick_rate_ms);

    // Restore the terminal even if drawing panics
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        app.run(&mut terminal, event_handler)
    }));

    let restore_result = ui::restore_terminal();

    match result {
        Ok(inner_result) => {
            restore_result?;
            output.verbose_ctx("browse", &format!("Closed at {}", app.location()));
            inner_result
        }
        Err(panic_payload) => {
            let _ = restore_result;
            if let Some(s) = panic_payload.downcast_ref::<&str>() {
                Err(anyhow!("Browser panicked: {}", s))
            } else if let Some(s) = panic_payload.downcast_ref::<String>() {
                Err(anyhow!("Browser panicked: {}", s))
            } else {
                Err(anyhow!("Browser panicked with unknown error"))
            }
        }
    }
}
