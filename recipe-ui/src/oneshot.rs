//! Non-interactive mode: load once, filter once, print the list as HTML

use std::io::Write;

use anyhow::Result;
use recipe_common::{Controller, Phase, RecipeSource};
use tracing::info;

/// Load, apply `query`, and write the rendered container to `out`
///
/// Returns whether the load succeeded. On failure the failure notice is
/// still written.
pub async fn run<S, W>(controller: &mut Controller<S>, query: &str, out: &mut W) -> Result<bool>
where
    S: RecipeSource,
    W: Write,
{
    controller.on_page_ready().await;

    if !query.is_empty() {
        controller.on_input(query);
    }

    info!(
        query = %query,
        cards = controller.view().card_count(),
        "Writing recipe list"
    );
    writeln!(out, "{}", controller.view().to_html())?;

    Ok(controller.phase() == Phase::Ready)
}
