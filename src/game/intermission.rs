//! Per-game intermission countdowns.

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use super::phase::IntermissionKind;

#[derive(Debug, Clone, Copy)]
struct Countdown {
    kind: IntermissionKind,
    started: Instant,
}

/// Intermission countdowns keyed by game id.
///
/// Each game is timed from the cycle its intermission was first seen. Games
/// that were not in intermission during a cycle are dropped by [`sweep`].
///
/// [`sweep`]: IntermissionClocks::sweep
#[derive(Debug, Default)]
pub struct IntermissionClocks {
    clocks: HashMap<String, Countdown>,
    seen: HashSet<String>,
}

impl IntermissionClocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Minutes left in `game_id`'s intermission as of `now`; never negative
    pub fn remaining(&mut self, game_id: &str, kind: IntermissionKind, now: Instant) -> f64 {
        self.seen.insert(game_id.to_string());
        let countdown = self
            .clocks
            .entry(game_id.to_string())
            .or_insert(Countdown { kind, started: now });
        if countdown.kind != kind {
            *countdown = Countdown { kind, started: now };
        }

        let elapsed = now.saturating_duration_since(countdown.started).as_secs_f64() / 60.0;
        let remaining = kind.minutes() - elapsed;
        if remaining < 0.0 {
            // Feed still reports the break; start over rather than count below zero
            countdown.started = now;
            return kind.minutes();
        }
        remaining
    }

    /// Forget games that did not report an intermission since the last sweep
    pub fn sweep(&mut self) {
        let seen = &self.seen;
        self.clocks.retain(|id, _| seen.contains(id));
        self.seen.clear();
    }

    pub fn len(&self) -> usize {
        self.clocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clocks.is_empty()
    }
}
