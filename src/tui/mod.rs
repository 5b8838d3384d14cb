//! Terminal presentation and keyboard navigation
//!
//! Every screen is a method on [`Ui`], which owns the output surface and
//! the key source for the lifetime of a CLI run. Static output is plain
//! lines; screens that follow the keyboard draw ratatui widgets into an
//! inline viewport that is repainted in place.
//!
//! Screens never fail. When the terminal misbehaves mid-loop they fall
//! back to a static rendering and a safe default return value.

mod agents;
mod cursor;
mod detail;
pub mod input;
mod installed;
mod progress;
pub mod render;
mod search;
mod status;
pub mod surface;

use colored::control::SHOULD_COLORIZE;
use log::warn;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType};
use ratatui::Terminal;
use std::io::Write;

use crate::config::DisplayConfig;
use crate::error::DisplayError;

pub use agents::agent_list;
pub use cursor::ListCursor;
pub use detail::{detail_panel, directory_tree, DetailAction};
pub use input::{classify, Key, KeySource, RawModeGuard, TerminalKeys};
pub use installed::installed_table;
pub use search::search_table;
pub use surface::{StdoutSurface, Surface};

/// The display layer: an output surface plus a key source
pub struct Ui<S: Surface, K: KeySource> {
    out: S,
    keys: K,
    config: DisplayConfig,
}

impl Ui<StdoutSurface, TerminalKeys> {
    /// Write to stdout and read keys from the process terminal
    pub fn terminal(config: DisplayConfig) -> Self {
        Ui::new(StdoutSurface::new(), TerminalKeys::new(), config)
    }
}

impl<S: Surface, K: KeySource> Ui<S, K> {
    pub fn new(out: S, keys: K, config: DisplayConfig) -> Self {
        Ui { out, keys, config }
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn output(&self) -> &S {
        &self.out
    }

    pub fn keys(&self) -> &K {
        &self.keys
    }

    /// Whether a screen asked to be interactive can actually be
    fn can_interact(&self, interactive: bool) -> bool {
        interactive && self.config.interactive && self.keys.is_terminal()
    }

    /// Hyperlinks only make sense on a styled terminal
    fn links_enabled(&self) -> bool {
        self.config.hyperlinks && SHOULD_COLORIZE.should_colorize()
    }

    /// Write `text` and a trailing newline. Write failures are logged, not
    /// raised: output is best effort.
    pub fn emit(&mut self, text: &str) {
        let result = writeln!(self.out, "{}", text).and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!("Failed to write to terminal: {}", e);
        }
    }

    /// Print a widget once, laid out to the surface width
    fn emit_widget(&mut self, height: u16, draw: impl FnOnce(Rect, &mut Buffer)) {
        for line in render::render_lines(self.out.width(), height, draw) {
            self.emit(&line);
        }
    }

    /// Run `screen` in an inline viewport of `height` rows. The viewport is
    /// closed whether or not the screen succeeds.
    fn with_viewport<T>(
        &mut self,
        height: u16,
        screen: impl FnOnce(&mut Terminal<S::Backend>, &mut K) -> Result<T, DisplayError>,
    ) -> Result<T, DisplayError> {
        let mut terminal = self.out.open(height)?;
        let result = screen(&mut terminal, &mut self.keys);
        let closed = self.out.close(terminal);
        let value = result?;
        closed?;
        Ok(value)
    }
}

/// Rounded border shared by every boxed screen
fn rounded_block<'a>() -> Block<'a> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
}

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn dim() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

/// Rows needed for `items` lines plus `chrome` lines of borders and headers
fn viewport_height(items: usize, chrome: usize) -> u16 {
    u16::try_from(items.saturating_add(chrome)).unwrap_or(u16::MAX)
}
