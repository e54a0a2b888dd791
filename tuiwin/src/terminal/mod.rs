use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::{Buffer, Cell};
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};
use crate::window::WindowTree;

/// The real screen: raw mode, alternate screen, mouse capture, and
/// diff-based output of composed window trees.
pub struct Terminal {
    stdout: io::Stdout,
    previous: Buffer,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        crossterm::execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        Ok(Self {
            stdout,
            previous: Buffer::new(0, 0),
        })
    }

    /// Current screen size as `(lines, cols)`.
    pub fn size(&self) -> io::Result<(i32, i32)> {
        let (cols, lines) = terminal::size()?;
        Ok((i32::from(lines), i32::from(cols)))
    }

    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                // Block until event
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Compose the tree and write whatever changed since the last call.
    pub fn present(&mut self, tree: &WindowTree) -> io::Result<()> {
        let screen = tree.compose();
        if screen.lines() != self.previous.lines() || screen.cols() != self.previous.cols() {
            self.previous = unknown_screen(screen.lines(), screen.cols());
            queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        self.flush_diff(&screen)?;
        self.previous = screen;
        Ok(())
    }

    fn flush_diff(&mut self, screen: &Buffer) -> io::Result<()> {
        let mut last_line = i32::MIN;
        let mut last_col = i32::MIN;
        let mut last_char_width = 1;
        let mut last_fg: Option<Rgb> = None;
        let mut last_bg: Option<Rgb> = None;
        let mut last_style = TextStyle::new();

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (line, col, cell) in screen.diff(&self.previous) {
            // The wide char before it already covers this cell
            if cell.wide_continuation {
                continue;
            }

            if line != last_line || col != last_col + last_char_width {
                queue!(self.stdout, cursor::MoveTo(col as u16, line as u16))?;
            }

            let (fg, bg) = cell.effective_colors();
            if last_fg != Some(fg) {
                queue!(self.stdout, SetForegroundColor(to_crossterm(fg)))?;
                last_fg = Some(fg);
            }
            if last_bg != Some(bg) {
                queue!(self.stdout, SetBackgroundColor(to_crossterm(bg)))?;
                last_bg = Some(bg);
            }

            if cell.style.bold != last_style.bold || cell.style.dim != last_style.dim {
                queue!(self.stdout, SetAttribute(Attribute::NormalIntensity))?;
                if cell.style.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                if cell.style.dim {
                    queue!(self.stdout, SetAttribute(Attribute::Dim))?;
                }
            }
            if cell.style.italic != last_style.italic {
                let attr = if cell.style.italic {
                    Attribute::Italic
                } else {
                    Attribute::NoItalic
                };
                queue!(self.stdout, SetAttribute(attr))?;
            }
            if cell.style.underline != last_style.underline {
                let attr = if cell.style.underline {
                    Attribute::Underlined
                } else {
                    Attribute::NoUnderline
                };
                queue!(self.stdout, SetAttribute(attr))?;
            }
            last_style = cell.style;

            write!(self.stdout, "{}", cell.char)?;

            last_line = line;
            last_col = col;
            last_char_width = char_width(cell.char).max(1) as i32;
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

/// A buffer that differs from every real cell, forcing a full repaint.
fn unknown_screen(lines: i32, cols: i32) -> Buffer {
    let mut buffer = Buffer::new(lines, cols);
    for line in 0..lines {
        for col in 0..cols {
            buffer.set(line, col, Cell::new('\0'));
        }
    }
    buffer
}

fn to_crossterm(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = crossterm::execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
