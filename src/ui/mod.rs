//! Terminal output for the scoreboard.

mod scoreboard;
mod screen;
mod theme;

pub use scoreboard::Scoreboard;
pub use screen::Screen;
pub use theme::Theme;
