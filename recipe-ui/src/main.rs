//! recipe-ui - live recipe search in the terminal
//!
//! Loads every recipe from TheMealDB once, then filters the list on each
//! keystroke. `--query`/`--html` print the rendered list as HTML instead.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use recipe_common::config::Config;
use recipe_common::{Controller, MealDbClient};
use recipe_ui::logging::{init_tracing, report_config, OutputMode};
use recipe_ui::{app, oneshot, App, Args};
use tracing::{info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let mode = if args.is_one_shot() {
        OutputMode::OneShot
    } else {
        OutputMode::Interactive
    };

    // Config resolves the log settings, so its warnings are held until the
    // subscriber is installed
    let config = Config::load(args.overrides())?;
    init_tracing(&config.logging, mode)?;

    info!(
        "Starting recipe-ui v{} (endpoint {})",
        env!("CARGO_PKG_VERSION"),
        config.endpoint
    );
    report_config(&config);

    // Empty search term: the session holds every recipe and filters locally
    let endpoint = config.search_url("")?;
    let client = MealDbClient::new(config.timeout)?;
    let mut controller = Controller::new(client, endpoint);

    match mode {
        OutputMode::OneShot => {
            let query = args.query.as_deref().unwrap_or_default();
            let mut stdout = std::io::stdout().lock();

            if oneshot::run(&mut controller, query, &mut stdout).await? {
                Ok(ExitCode::SUCCESS)
            } else {
                warn!("Recipe load failed");
                Ok(ExitCode::FAILURE)
            }
        }
        OutputMode::Interactive => {
            let mut app = App::new(controller);
            let mut terminal = ratatui::init();
            let result = app::run(&mut app, &mut terminal).await;
            ratatui::restore();

            result?;
            info!("Session ended");
            Ok(ExitCode::SUCCESS)
        }
    }
}
