//! Key decoding: one blocking read, classified into a small vocabulary

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use crossterm::tty::IsTty;
use log::{debug, warn};
use std::io;

use crate::error::DisplayError;

/// Logical key presses the screens react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    /// `q` or `Q`
    Quit,
    CtrlC,
    Space,
    /// Any other printable key; ASCII letters are lowercased
    Char(char),
}

impl Key {
    /// `q`, Escape and Ctrl+C all back out of a screen
    pub fn is_cancel(self) -> bool {
        matches!(self, Key::Quit | Key::Escape | Key::CtrlC)
    }
}

/// Where screens read keys from
pub trait KeySource {
    /// Block until one key is available
    fn read_key(&mut self) -> Result<Key, DisplayError>;

    /// Whether input comes from an interactive terminal
    fn is_terminal(&self) -> bool;
}

/// Map a terminal key event onto [`Key`].
///
/// Returns `None` for releases and for keys with no meaning here.
pub fn classify(event: KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let key = match event.code {
        KeyCode::Char('c') | KeyCode::Char('C') if ctrl => Key::CtrlC,
        // Raw mode reports a bare LF as Ctrl+J and CR as Ctrl+M
        KeyCode::Char('j') | KeyCode::Char('m') if ctrl => Key::Enter,
        KeyCode::Char(_) if ctrl => return None,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Enter | KeyCode::Char('\r') | KeyCode::Char('\n') => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Char('q') | KeyCode::Char('Q') => Key::Quit,
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(c) => Key::Char(c.to_ascii_lowercase()),
        _ => return None,
    };
    Some(key)
}

/// Switches the terminal between raw and cooked mode
pub trait TerminalMode {
    fn is_raw(&self) -> io::Result<bool>;
    fn enable_raw(&mut self) -> io::Result<()>;
    fn disable_raw(&mut self) -> io::Result<()>;
}

/// The process terminal, via crossterm
#[derive(Debug, Default)]
pub struct CrosstermMode;

impl TerminalMode for CrosstermMode {
    fn is_raw(&self) -> io::Result<bool> {
        terminal::is_raw_mode_enabled()
    }

    fn enable_raw(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    fn disable_raw(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()
    }
}

/// Holds the terminal in raw mode; the previous mode comes back on drop
pub struct RawModeGuard<M: TerminalMode> {
    mode: M,
    was_raw: bool,
}

impl<M: TerminalMode> RawModeGuard<M> {
    pub fn acquire(mut mode: M) -> Result<Self, DisplayError> {
        let was_raw = mode.is_raw()?;
        if !was_raw {
            mode.enable_raw()?;
        }
        Ok(RawModeGuard { mode, was_raw })
    }
}

impl<M: TerminalMode> Drop for RawModeGuard<M> {
    fn drop(&mut self) {
        if self.was_raw {
            return;
        }
        if let Err(e) = self.mode.disable_raw() {
            warn!("Failed to restore terminal mode: {}", e);
        }
    }
}

/// Read events from `next` in raw mode until one classifies as a [`Key`].
///
/// Raw mode is held only for the duration of the read, never across
/// redraws, and is released on every return path.
pub fn read_with<M: TerminalMode>(
    mode: M,
    mut next: impl FnMut() -> io::Result<Event>,
) -> Result<Key, DisplayError> {
    let _raw = RawModeGuard::acquire(mode)?;
    loop {
        if let Event::Key(key_event) = next()? {
            match classify(key_event) {
                Some(key) => return Ok(key),
                None => debug!("Skipping key event: {:?}", key_event),
            }
        }
    }
}

/// Reads keys from the process's terminal
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl TerminalKeys {
    pub fn new() -> Self {
        TerminalKeys
    }
}

impl KeySource for TerminalKeys {
    fn read_key(&mut self) -> Result<Key, DisplayError> {
        read_with(CrosstermMode, event::read)
    }

    fn is_terminal(&self) -> bool {
        io::stdin().is_tty()
    }
}
