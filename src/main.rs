//! nhl-ticker: a terminal scoreboard for NHL games
//!
//! Polls the NHL scoreboard feed and redraws today's games with their
//! status, score and intermission countdown.

mod app;
mod calendar;
mod cli;
mod feed;
mod game;
mod logging;
mod ui;

use anyhow::Result;
use cli::{AppConfig, Cli};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();
    let config = AppConfig::from_cli(cli);

    logging::init(&config.log_filter);

    // Run the scoreboard
    app::run(config)
}
