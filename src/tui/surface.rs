//! Where screens draw: plain lines for static output, plus an inline
//! viewport for screens that redraw on every key

use crossterm::terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Position;
use ratatui::{Terminal, TerminalOptions, Viewport};
use std::io::{self, Stdout, Write};

use crate::error::DisplayError;

/// Width used for static tables when the terminal cannot be measured
pub const DEFAULT_WIDTH: u16 = 100;

/// An output stream that can also host a ratatui inline viewport
pub trait Surface: Write {
    type Backend: Backend;

    /// Open a viewport of `height` rows below the current output.
    /// Taller viewports are clamped to the terminal height.
    fn open(&mut self, height: u16) -> Result<Terminal<Self::Backend>, DisplayError>;

    /// Leave the last frame on screen and move output below it
    fn close(&mut self, terminal: Terminal<Self::Backend>) -> Result<(), DisplayError>;

    /// Columns available for static output
    fn width(&self) -> u16;
}

/// The process's stdout
pub struct StdoutSurface {
    out: Stdout,
}

impl StdoutSurface {
    pub fn new() -> Self {
        StdoutSurface { out: io::stdout() }
    }
}

impl Default for StdoutSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for StdoutSurface {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl Surface for StdoutSurface {
    type Backend = CrosstermBackend<Stdout>;

    fn open(&mut self, height: u16) -> Result<Terminal<Self::Backend>, DisplayError> {
        self.out.flush()?;
        let terminal = Terminal::with_options(
            CrosstermBackend::new(io::stdout()),
            TerminalOptions {
                viewport: Viewport::Inline(height),
            },
        )?;
        Ok(terminal)
    }

    fn close(&mut self, mut terminal: Terminal<Self::Backend>) -> Result<(), DisplayError> {
        let area = terminal.get_frame().area();
        terminal.set_cursor_position(Position::new(0, area.bottom().saturating_sub(1)))?;
        terminal.show_cursor()?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    fn width(&self) -> u16 {
        terminal::size().map(|(w, _)| w).unwrap_or(DEFAULT_WIDTH)
    }
}
