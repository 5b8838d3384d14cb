//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::{Terminal, TerminalOptions, Viewport};
use std::collections::VecDeque;
use std::io::{self, Write};

use crate::config::DisplayConfig;
use crate::error::DisplayError;
use crate::model::{Agent, Skill, Tag};
use crate::tui::render::buffer_lines;
use crate::tui::{Key, KeySource, Surface, Ui};

/// Wide enough that no search column is squeezed
pub const TEST_WIDTH: u16 = 132;
const TEST_ROWS: u16 = 40;

/// A key source that replays a fixed script.
///
/// Once the script runs out every read fails with
/// [`DisplayError::InputClosed`], which lets tests drive the failure paths.
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
    terminal: bool,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        ScriptedKeys {
            keys: keys.into_iter().collect(),
            terminal: true,
        }
    }

    /// A terminal that never delivers a key
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Input that is not a terminal, e.g. a pipe
    pub fn detached(keys: impl IntoIterator<Item = Key>) -> Self {
        ScriptedKeys {
            terminal: false,
            ..Self::new(keys)
        }
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self) -> Result<Key, DisplayError> {
        self.keys.pop_front().ok_or(DisplayError::InputClosed)
    }

    fn is_terminal(&self) -> bool {
        self.terminal
    }
}

/// An in-memory surface: static lines collect as text and every inline
/// viewport draws onto a [`TestBackend`] of `width` x 40 cells.
pub struct TestSurface {
    text: Vec<u8>,
    width: u16,
    last: Option<Terminal<TestBackend>>,
}

impl TestSurface {
    pub fn new(width: u16) -> Self {
        TestSurface {
            text: Vec::new(),
            width,
            last: None,
        }
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.text).into_owned()
    }

    /// Cells of the most recently closed viewport
    pub fn last_frame(&self) -> Option<&Buffer> {
        self.last.as_ref().map(|terminal| terminal.backend().buffer())
    }
}

impl Write for TestSurface {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.text.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Surface for TestSurface {
    type Backend = TestBackend;

    fn open(&mut self, height: u16) -> Result<Terminal<TestBackend>, DisplayError> {
        let terminal = Terminal::with_options(
            TestBackend::new(self.width, TEST_ROWS),
            TerminalOptions {
                viewport: Viewport::Inline(height),
            },
        )?;
        Ok(terminal)
    }

    fn close(&mut self, terminal: Terminal<TestBackend>) -> Result<(), DisplayError> {
        self.last = Some(terminal);
        Ok(())
    }

    fn width(&self) -> u16 {
        self.width
    }
}

/// A UI writing into memory with hyperlinks off
pub fn test_ui(keys: ScriptedKeys) -> Ui<TestSurface, ScriptedKeys> {
    test_ui_with_width(keys, TEST_WIDTH)
}

pub fn test_ui_with_width(keys: ScriptedKeys, width: u16) -> Ui<TestSurface, ScriptedKeys> {
    let config = DisplayConfig {
        hyperlinks: false,
        ..Default::default()
    };
    Ui::new(TestSurface::new(width), keys, config)
}

/// Everything the UI has printed as lines, with escape sequences removed
pub fn written(ui: &Ui<TestSurface, ScriptedKeys>) -> String {
    strip_ansi(&ui.output().text())
}

/// The last interactive frame; panics if no viewport was ever closed
pub fn last_frame(ui: &Ui<TestSurface, ScriptedKeys>) -> &Buffer {
    ui.output().last_frame().expect("no viewport was drawn")
}

/// The last interactive frame as plain text rows
pub fn frame_lines(ui: &Ui<TestSurface, ScriptedKeys>) -> Vec<String> {
    buffer_lines(last_frame(ui))
        .iter()
        .map(|line| strip_ansi(line))
        .collect()
}

/// Remove CSI and OSC escape sequences
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('[') => {
                for n in chars.by_ref() {
                    if n.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
            Some(']') => {
                while let Some(n) = chars.next() {
                    if n == '\x1b' && chars.peek() == Some(&'\\') {
                        chars.next();
                        break;
                    }
                }
            }
            _ => {}
        }
    }
    out
}

pub fn sample_skill(id: &str, name: &str) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("Does {} things", name),
        average_rating: 3.7,
        rating_count: 12,
        comment_count: 3,
        tutorial_count: 1,
        github_stars: 1234,
        file_size_mb: 0.5,
        tags: vec![Tag {
            name: "docs".to_string(),
        }],
        source_url: Some(format!("https://github.com/example/{}", name)),
        directory_structure: None,
    }
}

pub fn sample_skills(count: usize) -> Vec<Skill> {
    (0..count)
        .map(|i| sample_skill(&format!("{:08}-skill-id", i), &format!("skill-{}", i)))
        .collect()
}

pub fn sample_agents() -> Vec<Agent> {
    [("claude", "Claude", "~/.claude/skills"), ("codex", "Codex", "~/.codex/skills"), ("cursor", "Cursor", "~/.cursor/skills")]
        .into_iter()
        .map(|(id, name, path)| Agent {
            id: id.to_string(),
            name: name.to_string(),
            path: path.to_string(),
        })
        .collect()
}
