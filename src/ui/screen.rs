//! Writes styled scoreboard lines to the terminal.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Line,
};

/// Full-screen redraw of plain (non-alternate) terminal output
pub struct Screen<W: Write> {
    out: W,
}

impl Screen<io::Stdout> {
    pub fn stdout() -> Self {
        Screen::new(io::stdout())
    }
}

impl<W: Write> Screen<W> {
    pub fn new(out: W) -> Self {
        Screen { out }
    }

    /// Clear the terminal and print `lines` from the top-left corner
    pub fn draw(&mut self, lines: &[Line]) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        for line in lines {
            self.write_line(line)?;
        }
        self.out.flush()
    }

    fn write_line(&mut self, line: &Line) -> io::Result<()> {
        for span in &line.spans {
            let style = line.style.patch(span.style);
            let styled = apply_style(&mut self.out, style)?;
            queue!(self.out, Print(span.content.as_ref()))?;
            if styled {
                queue!(self.out, SetAttribute(Attribute::Reset), ResetColor)?;
            }
        }
        queue!(self.out, Print("\n"))
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

/// Queue the escape codes for `style`; returns whether anything was set
fn apply_style<W: Write>(out: &mut W, style: Style) -> io::Result<bool> {
    let mut styled = false;
    if let Some(color) = style.fg.filter(|c| *c != Color::Reset) {
        queue!(out, SetForegroundColor(term_color(color)))?;
        styled = true;
    }
    for (modifier, attribute) in [
        (Modifier::BOLD, Attribute::Bold),
        (Modifier::DIM, Attribute::Dim),
        (Modifier::ITALIC, Attribute::Italic),
        (Modifier::UNDERLINED, Attribute::Underlined),
    ] {
        if style.add_modifier.contains(modifier) {
            queue!(out, SetAttribute(attribute))?;
            styled = true;
        }
    }
    Ok(styled)
}

fn term_color(color: Color) -> TermColor {
    match color {
        Color::Reset => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        Color::Indexed(i) => TermColor::AnsiValue(i),
    }
}
