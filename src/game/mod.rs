//! Games as shown on the scoreboard.
//!
//! Raw feed records are normalized into [`Game`] values at the feed boundary:
//! names are cleaned up and the free-text clock/status fields are parsed into
//! a [`GamePhase`].

mod intermission;
mod names;
mod phase;

pub use intermission::IntermissionClocks;
use names::{fix_locale, fix_name};
pub use phase::{DayLabel, GamePhase, IntermissionKind, Stage};
use phase::classify;

use crate::calendar::DayContext;
use crate::feed::GameRecord;

/// Regular season ids look like 2023020500, playoff ids like 2023030047
const PLAYOFF_GAME_TYPE: &str = "03";

/// One team's side of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Side {
    pub locale: String,
    pub name: String,
    pub score: String,
    pub winner: bool,
}

impl Side {
    fn new(locale: &str, name: &str, score: String, result: &str) -> Self {
        Side {
            locale: fix_locale(locale),
            name: fix_name(name),
            score,
            winner: result.eq_ignore_ascii_case("winner"),
        }
    }

    /// "New York Islanders"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.locale, self.name)
    }
}

/// A classified game ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: String,
    pub phase: GamePhase,
    pub stage: Stage,
    pub away: Side,
    pub home: Side,
}

impl Game {
    pub fn from_record(record: GameRecord, day: &DayContext) -> Self {
        let phase = classify(&record.clock, &record.stage, &record.status, day);
        Game {
            phase,
            stage: Stage::parse(&record.stage),
            away: Side::new(
                &record.away_locale,
                &record.away_name,
                record.away_score,
                &record.away_result,
            ),
            home: Side::new(
                &record.home_locale,
                &record.home_name,
                record.home_score,
                &record.home_result,
            ),
            id: record.id,
        }
    }

    /// Position in a best-of-seven series, for playoff games only
    pub fn series_game(&self) -> Option<char> {
        if self.id.get(4..6) != Some(PLAYOFF_GAME_TYPE) {
            return None;
        }
        self.id.chars().last()
    }

    /// "Away Team @ Home Team", with the series game number in the playoffs
    pub fn matchup(&self) -> String {
        let mut text = format!("{} @ {}", self.away.full_name(), self.home.full_name());
        if let Some(n) = self.series_game() {
            text.push_str(&format!(" -- Game {n}"));
        }
        text
    }

    /// Intermission kind when the game is between periods
    pub fn intermission(&self) -> Option<IntermissionKind> {
        match self.phase {
            GamePhase::Intermission { kind, .. } => Some(kind),
            _ => None,
        }
    }
}
