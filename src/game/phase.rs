//! Game phase classification.
//!
//! The feed describes a game only through free-text fields. They are parsed
//! once here into a [`GamePhase`]; everything downstream matches on the enum.

use crate::calendar::DayContext;

use super::names::title_case;

/// Length of an intermission, which depends on the period that just ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntermissionKind {
    /// Between regulation periods
    Regulation,
    /// After the 3rd period or during overtime
    Overtime,
}

impl IntermissionKind {
    pub fn from_clock(clock: &str) -> Self {
        let clock = clock.to_uppercase();
        if clock.contains("END 3RD") || clock.contains("OT") {
            IntermissionKind::Overtime
        } else {
            IntermissionKind::Regulation
        }
    }

    pub fn minutes(self) -> f64 {
        match self {
            IntermissionKind::Regulation => 18.0,
            IntermissionKind::Overtime => 15.0,
        }
    }
}

/// Day label shown for finished games
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayLabel {
    Yesterday,
    Today,
    /// Clock text that matched neither day, title-cased
    Other(String),
}

/// What a game looks like from the viewer's point of view
#[derive(Debug, Clone, PartialEq)]
pub enum GamePhase {
    /// Not scheduled for today and not live
    NotToday,
    /// Scheduled start or pre-game warmup
    Upcoming { start: String, time: String },
    /// Marked live by the feed while the clock still reads pre-game
    Warmup { clock: String },
    /// Period in play; `critical` marks the final minutes or overtime
    Live { clock: String, critical: bool },
    /// A period has just ended
    Intermission {
        clock: String,
        critical: bool,
        kind: IntermissionKind,
    },
    Final { day: DayLabel, status: String },
}

impl GamePhase {
    pub fn is_today(&self) -> bool {
        !matches!(self, GamePhase::NotToday)
    }
}

/// Progress marker from the feed's stage code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Pre,
    InProgress,
    Critical,
    Final,
    Other,
}

impl Stage {
    pub fn parse(code: &str) -> Self {
        let code = code.to_lowercase();
        if code.contains("critical") {
            Stage::Critical
        } else if code.contains("progress") {
            Stage::InProgress
        } else if code.contains("final") {
            Stage::Final
        } else if code.contains("pre") {
            Stage::Pre
        } else {
            Stage::Other
        }
    }

    pub fn is_underway(self) -> bool {
        matches!(self, Stage::InProgress | Stage::Critical)
    }
}

/// Classify a game from its clock, stage and status text.
///
/// Rules are applied in priority order: not today, final, upcoming,
/// live in the critical window, then any other live state. A pre-game clock
/// is upcoming until the status turns live.
pub fn classify(clock: &str, stage: &str, status: &str, day: &DayContext) -> GamePhase {
    let clock_key = clock.to_uppercase();
    let status_key = status.to_uppercase();

    let mentions_today = clock_key.contains(day.today()) || clock_key.contains("TODAY");
    let pre_game = clock_key.contains("PRE GAME");
    let live = status_key.contains("LIVE");

    if !(mentions_today || pre_game || live) {
        return GamePhase::NotToday;
    }

    if status_key.contains("FINAL") {
        let day = if clock_key.contains(day.yesterday()) {
            DayLabel::Yesterday
        } else if mentions_today {
            DayLabel::Today
        } else {
            DayLabel::Other(title_case(clock))
        };
        return GamePhase::Final {
            day,
            status: status.to_string(),
        };
    }

    if (pre_game && !live) || names_weekday(&clock_key) {
        return GamePhase::Upcoming {
            start: clock.to_string(),
            time: status.to_string(),
        };
    }

    let critical = live && Stage::parse(stage) == Stage::Critical;
    if pre_game && !critical {
        return GamePhase::Warmup {
            clock: clock.to_string(),
        };
    }
    if clock_key.contains("END ") {
        GamePhase::Intermission {
            clock: clock.to_string(),
            critical,
            kind: IntermissionKind::from_clock(clock),
        }
    } else {
        GamePhase::Live {
            clock: clock.to_string(),
            critical,
        }
    }
}

/// "TUESDAY 4/21", "TODAY" and friends
fn names_weekday(clock_key: &str) -> bool {
    clock_key
        .split(|c: char| !c.is_alphabetic())
        .any(|word| word.ends_with("DAY"))
}
