//! Main application logic and the refresh loop.

use std::io;
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Local;
use ratatui::text::Line;
use tracing::{debug, error, info};

use crate::calendar::{self, DayContext};
use crate::cli::AppConfig;
use crate::feed::{FeedClient, FeedError, GameRecord};
use crate::game::{Game, IntermissionClocks};
use crate::ui::{Scoreboard, Screen, Theme};

/// Application state
pub struct App {
    config: AppConfig,
    theme: Theme,
    timezone: String,
    client: FeedClient,
    clocks: IntermissionClocks,
}

impl App {
    /// Create a new App instance
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = FeedClient::new(config.feed_url.clone(), config.timeout, config.retry)
            .context("Failed to set up the feed client")?;
        Ok(App {
            config,
            theme: Theme::default(),
            timezone: calendar::timezone_abbreviation(),
            client,
            clocks: IntermissionClocks::new(),
        })
    }

    /// Fetch one snapshot and lay out the full board
    fn cycle(&mut self) -> Result<Vec<Line<'static>>, FeedError> {
        let records = self.client.fetch()?;
        debug!("Received {} games from {}", records.len(), self.client.url());
        Ok(self.board(records, &DayContext::now(), Instant::now()))
    }

    /// Classify `records` and render them, advancing intermission countdowns
    fn board(
        &mut self,
        records: Vec<GameRecord>,
        day: &DayContext,
        now: Instant,
    ) -> Vec<Line<'static>> {
        let games: Vec<Game> = records
            .into_iter()
            .map(|record| Game::from_record(record, day))
            .collect();

        let cards: Vec<(&Game, Option<f64>)> = games
            .iter()
            .map(|game| {
                let left = game
                    .intermission()
                    .map(|kind| self.clocks.remaining(&game.id, kind, now));
                (game, left)
            })
            .collect();
        self.clocks.sweep();
        if !self.clocks.is_empty() {
            debug!("{} games in intermission", self.clocks.len());
        }

        let scoreboard = Scoreboard::new(&self.theme, &self.timezone);
        let mut lines = scoreboard.board_lines(cards);
        lines.push(scoreboard.footer(Local::now(), self.refresh_hint()));
        lines
    }

    fn error_board(&self, err: &FeedError) -> Vec<Line<'static>> {
        let scoreboard = Scoreboard::new(&self.theme, &self.timezone);
        let mut lines = scoreboard.error_lines(&err.to_string());
        lines.push(Line::default());
        lines.push(scoreboard.footer(Local::now(), self.refresh_hint()));
        lines
    }

    fn refresh_hint(&self) -> Option<std::time::Duration> {
        (!self.config.single_shot).then_some(self.config.refresh_interval)
    }
}

/// Run the scoreboard until interrupted, or for one cycle in single-shot mode
pub fn run(config: AppConfig) -> Result<()> {
    let mut app = App::new(config)?;
    let mut screen = Screen::stdout();

    if app.config.single_shot {
        info!("Running in single-shot mode against {}", app.client.url());
        let lines = app.cycle().context("Failed to load the scoreboard")?;
        return draw(&mut screen, &lines);
    }

    loop {
        let lines = match app.cycle() {
            Ok(lines) => lines,
            Err(e) => {
                // Keep polling; the next cycle may succeed
                error!("Scoreboard refresh failed: {e}");
                app.error_board(&e)
            }
        };
        draw(&mut screen, &lines)?;
        thread::sleep(app.config.refresh_interval);
    }
}

fn draw(screen: &mut Screen<io::Stdout>, lines: &[Line]) -> Result<()> {
    screen.draw(lines).context("Failed to write to the terminal")
}
