//! Scoreboard text layout.
//!
//! Everything here is a pure function from classified games to styled
//! [`Line`]s; writing them to the terminal is left to [`super::screen`].

use std::time::Duration;

use chrono::{DateTime, Local};
use ratatui::text::{Line, Span};

use crate::game::{DayLabel, Game, GamePhase};

use super::theme::Theme;

const NO_GAMES: &str = "There are no NHL games scheduled for today.";

/// Lays out games using a theme and the viewer's timezone label
pub struct Scoreboard<'a> {
    theme: &'a Theme,
    timezone: &'a str,
}

impl<'a> Scoreboard<'a> {
    pub fn new(theme: &'a Theme, timezone: &'a str) -> Self {
        Scoreboard { theme, timezone }
    }

    /// Lines for a whole board, in feed order.
    ///
    /// Each game comes with the minutes left in its intermission, if any. The
    /// "no games" notice appears at most once per board, however many
    /// records fall outside today.
    pub fn board_lines<'g, I>(&self, games: I) -> Vec<Line<'static>>
    where
        I: IntoIterator<Item = (&'g Game, Option<f64>)>,
    {
        let mut lines = Vec::new();
        let mut notice_shown = false;
        for (game, intermission_left) in games {
            if !game.phase.is_today() {
                if notice_shown {
                    continue;
                }
                notice_shown = true;
            }
            lines.extend(self.game_lines(game, intermission_left));
        }
        if lines.is_empty() {
            lines = self.no_games_lines();
        }
        lines
    }

    /// Lines for a single game: header, status, score and a blank separator
    pub fn game_lines(&self, game: &Game, intermission_left: Option<f64>) -> Vec<Line<'static>> {
        let Some(status) = self.status_line(game, intermission_left) else {
            return self.no_games_lines();
        };
        vec![
            Line::from(game.matchup()),
            status,
            self.score_line(game),
            Line::default(),
        ]
    }

    pub fn no_games_lines(&self) -> Vec<Line<'static>> {
        vec![Line::default(), Line::from(NO_GAMES), Line::default()]
    }

    fn status_line(&self, game: &Game, intermission_left: Option<f64>) -> Option<Line<'static>> {
        let line = match &game.phase {
            GamePhase::NotToday => return None,
            GamePhase::Final { day, status } => {
                let label = match day {
                    DayLabel::Yesterday => "YESTERDAY",
                    DayLabel::Today => "TODAY",
                    DayLabel::Other(clock) => clock.as_str(),
                };
                Line::styled(format!("{label} ({status})"), self.theme.normal_style())
            }
            GamePhase::Upcoming { start, time } => Line::styled(
                format!("({start}, {time} {})", self.timezone),
                self.theme.upcoming_style(),
            ),
            GamePhase::Warmup { clock } => {
                Line::styled(format!("({clock})"), self.theme.live_style(false))
            }
            GamePhase::Live { clock, critical } => {
                Line::styled(format!("({clock} PERIOD)"), self.theme.live_style(*critical))
            }
            GamePhase::Intermission {
                clock, critical, ..
            } => {
                let mut text = format!("({clock} PERIOD");
                if let Some(minutes) = intermission_left {
                    text.push_str(&format!(
                        ", {minutes:.1} minutes remaining in the intermission"
                    ));
                }
                text.push(')');
                Line::styled(text, self.theme.live_style(*critical))
            }
        };
        Some(line)
    }

    fn score_line(&self, game: &Game) -> Line<'static> {
        let (away, home) = (&game.away, &game.home);
        if away.winner {
            Line::from(vec![
                Span::styled(format!("{} {}", away.name, away.score), self.theme.winner_style()),
                Span::raw(format!(" - {} {}", home.score, home.name)),
            ])
        } else if home.winner {
            Line::from(vec![
                Span::raw(format!("{} {} - ", away.name, away.score)),
                Span::styled(format!("{} {}", home.score, home.name), self.theme.winner_style()),
            ])
        } else {
            let text = format!("{} {} - {} {}", away.name, away.score, home.score, home.name);
            if game.stage.is_underway() {
                Line::styled(text, self.theme.in_progress_style())
            } else {
                Line::from(text)
            }
        }
    }

    /// Time of the last update, plus the refresh period when looping
    pub fn footer(&self, updated: DateTime<Local>, refresh: Option<Duration>) -> Line<'static> {
        let mut text = format!("Updated {}", updated.format("%H:%M:%S"));
        if let Some(refresh) = refresh {
            text.push_str(&format!(" · refreshing every {}s", refresh.as_secs()));
        }
        Line::styled(text, self.theme.muted_style())
    }

    /// Shown in place of the board when a cycle could not fetch the feed
    pub fn error_lines(&self, message: &str) -> Vec<Line<'static>> {
        vec![
            Line::styled(format!("Scoreboard unavailable: {message}"), self.theme.error_style()),
            Line::styled("Trying again at the next refresh.", self.theme.muted_style()),
        ]
    }
}
