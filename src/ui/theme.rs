//! Color theme for the scoreboard.

use ratatui::style::{Color, Modifier, Style};

/// Colors for each kind of scoreboard text
#[derive(Debug, Clone)]
pub struct Theme {
    pub fg: Color,
    pub upcoming: Color,
    pub live: Color,
    pub critical: Color,
    pub winner: Color,
    pub in_progress: Color,
    pub muted: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            fg: Color::Reset,
            upcoming: Color::Yellow,
            live: Color::Yellow,
            critical: Color::Red,
            winner: Color::Blue,
            in_progress: Color::Green,
            muted: Color::DarkGray,
            error: Color::Red,
        }
    }
}

impl Theme {
    /// Unstyled text
    pub fn normal_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Scheduled start times
    pub fn upcoming_style(&self) -> Style {
        Style::default().fg(self.upcoming)
    }

    /// Clock of a live game; the final minutes and overtime get the attention color
    pub fn live_style(&self, critical: bool) -> Style {
        if critical {
            Style::default().fg(self.critical)
        } else {
            Style::default().fg(self.live)
        }
    }

    pub fn winner_style(&self) -> Style {
        Style::default()
            .fg(self.winner)
            .add_modifier(Modifier::BOLD)
    }

    pub fn in_progress_style(&self) -> Style {
        Style::default().fg(self.in_progress)
    }

    /// Footer and other secondary text
    pub fn muted_style(&self) -> Style {
        Style::default()
            .fg(self.muted)
            .add_modifier(Modifier::DIM)
    }

    pub fn error_style(&self) -> Style {
        Style::default()
            .fg(self.error)
            .add_modifier(Modifier::BOLD)
    }
}
