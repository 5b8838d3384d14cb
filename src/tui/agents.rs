//! Agent checklist: pick which agents receive a skill

use log::warn;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{HighlightSpacing, List, ListItem, ListState, StatefulWidget};
use ratatui::Frame;
use std::collections::HashSet;

use super::cursor::ListCursor;
use super::input::{Key, KeySource};
use super::surface::Surface;
use super::{bold, dim, rounded_block, viewport_height, Ui};
use crate::error::DisplayError;
use crate::model::Agent;

const TITLE: &str = " Select agents to install skills to ";
const HELP: &str = " ↑/↓: Move • Space: Toggle • Enter: Confirm ";

/// Top and bottom border
const LIST_CHROME: usize = 2;

/// Build the checklist with the cursor on row `cursor`
pub fn agent_list<'a>(agents: &'a [Agent], selected: &HashSet<String>, cursor: usize) -> List<'a> {
    let items = agents.iter().enumerate().map(|(i, agent)| {
        let is_selected = selected.contains(&agent.id);

        let checkbox = if is_selected {
            Span::styled("■", Style::default().fg(Color::Green))
        } else {
            Span::styled("□", Style::default().fg(Color::DarkGray))
        };
        let name_style = if i == cursor {
            bold().add_modifier(Modifier::REVERSED)
        } else if is_selected {
            bold()
        } else {
            dim()
        };

        ListItem::new(Line::from(vec![
            checkbox,
            Span::raw(" "),
            Span::styled(agent.name.as_str(), name_style),
            Span::raw(" "),
            Span::styled(
                format!("({})", agent.path),
                Style::default().fg(Color::DarkGray),
            ),
        ]))
    });

    List::new(items)
        .block(
            rounded_block()
                .title(Line::styled(TITLE, bold()))
                .title_bottom(Line::styled(HELP, dim())),
        )
        .highlight_symbol("→ ")
        .highlight_spacing(HighlightSpacing::Always)
}

fn draw_agents(frame: &mut Frame, agents: &[Agent], selected: &HashSet<String>, cursor: usize) {
    let list = agent_list(agents, selected, cursor);
    let mut state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(list, frame.area(), &mut state);
}

enum Outcome {
    Confirmed,
    Cancelled,
}

impl<S: Surface, K: KeySource> Ui<S, K> {
    /// Let the user choose agents.
    ///
    /// Starts from `selected_ids` (every agent when `None`). Initial ids
    /// that are not among `agents` are dropped, so the result only ever
    /// holds ids of agents shown.
    ///
    /// Returns the confirmed selection, or an empty set if the user
    /// cancelled. If the terminal fails mid-selection the selection at that
    /// moment is returned instead, so an empty result does not by itself
    /// mean the user cancelled.
    pub fn agent_selection(
        &mut self,
        agents: &[Agent],
        selected_ids: Option<&[String]>,
        interactive: bool,
    ) -> HashSet<String> {
        let mut selected: HashSet<String> = match selected_ids {
            Some(ids) => agents
                .iter()
                .filter(|a| ids.contains(&a.id))
                .map(|a| a.id.clone())
                .collect(),
            None => agents.iter().map(|a| a.id.clone()).collect(),
        };
        let mut cursor = ListCursor::new(0, agents.len());

        if agents.is_empty() || !self.can_interact(interactive) {
            self.print_agents(agents, &selected, cursor.index());
            return selected;
        }

        match self.run_agent_selection(agents, &mut selected, &mut cursor) {
            Ok(Outcome::Confirmed) => selected,
            Ok(Outcome::Cancelled) => HashSet::new(),
            Err(e) => {
                warn!("Agent selection input failed: {}", e);
                self.print_agents(agents, &selected, cursor.index());
                selected
            }
        }
    }

    fn run_agent_selection(
        &mut self,
        agents: &[Agent],
        selected: &mut HashSet<String>,
        cursor: &mut ListCursor,
    ) -> Result<Outcome, DisplayError> {
        let height = viewport_height(agents.len(), LIST_CHROME);

        self.with_viewport(height, |terminal, keys| loop {
            terminal.draw(|frame| draw_agents(frame, agents, &*selected, cursor.index()))?;
            match keys.read_key()? {
                Key::Up => cursor.previous(),
                Key::Down => cursor.next(),
                Key::Space => {
                    let id = &agents[cursor.index()].id;
                    if !selected.remove(id) {
                        selected.insert(id.clone());
                    }
                }
                // At least one agent must stay selected
                Key::Enter if selected.is_empty() => {}
                Key::Enter => return Ok(Outcome::Confirmed),
                key if key.is_cancel() => return Ok(Outcome::Cancelled),
                _ => {}
            }
        })
    }

    fn print_agents(&mut self, agents: &[Agent], selected: &HashSet<String>, cursor: usize) {
        let list = agent_list(agents, selected, cursor);
        let mut state = ListState::default().with_selected(Some(cursor));
        self.emit_widget(viewport_height(agents.len(), LIST_CHROME), |area, buf| {
            list.render(area, buf, &mut state)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        frame_lines, last_frame, sample_agents, strip_ansi, test_ui, written, ScriptedKeys,
    };
    use crate::tui::render::render_lines;

    fn ids(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn reversed(buffer: &ratatui::buffer::Buffer, x: u16, y: u16) -> bool {
        buffer[(x, y)].modifier.contains(Modifier::REVERSED)
    }

    #[test]
    fn should_render_checkboxes_and_cursor() {
        // Given
        let agents = sample_agents();
        let selected = ids(&["claude"]);
        let list = agent_list(&agents, &selected, 1);
        let mut state = ListState::default().with_selected(Some(1));

        // When
        let lines: Vec<String> = render_lines(60, 5, |area, buf| list.render(area, buf, &mut state))
            .iter()
            .map(|l| strip_ansi(l))
            .collect();

        // Then
        assert!(lines[0].contains("Select agents to install skills to"));
        assert!(lines[1].starts_with("│  ■ Claude (~/.claude/skills)"));
        assert!(lines[2].starts_with("│→ □ Codex (~/.codex/skills)"));
        assert!(lines[3].starts_with("│  □ Cursor (~/.cursor/skills)"));
        assert!(lines[4].contains("Space: Toggle"));
    }

    #[test]
    fn should_draw_cursor_name_in_reverse_video() {
        // Given
        let agents = sample_agents();
        let mut ui = test_ui(ScriptedKeys::new([Key::Down, Key::Enter]));

        // When
        let chosen = ui.agent_selection(&agents, None, true);

        // Then
        assert_eq!(chosen.len(), 3);
        let buffer = last_frame(&ui);
        assert_eq!(buffer[(1, 2)].symbol(), "→");
        assert_eq!(buffer[(1, 1)].symbol(), " ");
        assert!(reversed(buffer, 5, 2));
        assert!(!reversed(buffer, 5, 1));
        assert!(!reversed(buffer, 5, 3));
    }

    #[test]
    fn should_redraw_checkbox_after_toggle() {
        // Given
        let agents = sample_agents();
        let mut ui = test_ui(ScriptedKeys::new([Key::Down, Key::Space, Key::Enter]));

        // When
        let chosen = ui.agent_selection(&agents, None, true);

        // Then
        assert_eq!(chosen, ids(&["claude", "cursor"]));
        let lines = frame_lines(&ui);
        assert!(lines[1].starts_with("│  ■ Claude"));
        assert!(lines[2].starts_with("│→ □ Codex"));
        assert!(lines[3].starts_with("│  ■ Cursor"));
    }

    #[test]
    fn should_select_all_by_default_when_not_interactive() {
        // Given
        let agents = sample_agents();
        let mut ui = test_ui(ScriptedKeys::new([Key::Quit]));

        // When
        let chosen = ui.agent_selection(&agents, None, false);

        // Then
        assert_eq!(chosen, ids(&["claude", "codex", "cursor"]));
        assert_eq!(ui.keys().remaining(), 1);
        assert!(written(&ui).contains("Codex"));
    }

    #[test]
    fn should_keep_initial_selection_without_terminal() {
        // Given
        let agents = sample_agents();
        let initial = vec!["codex".to_string(), "unknown".to_string()];
        let mut ui = test_ui(ScriptedKeys::detached([Key::Enter]));

        // When
        let chosen = ui.agent_selection(&agents, Some(&initial), true);

        // Then
        assert_eq!(chosen, ids(&["codex"]));
    }

    #[test]
    fn should_drop_unknown_initial_ids_when_interactive() {
        // Given
        let agents = sample_agents();
        let initial = vec!["ghost".to_string(), "cursor".to_string()];
        let mut ui = test_ui(ScriptedKeys::new([Key::Enter]));

        // When
        let chosen = ui.agent_selection(&agents, Some(&initial), true);

        // Then
        assert_eq!(chosen, ids(&["cursor"]));
        let lines = frame_lines(&ui);
        assert!(lines[3].starts_with("│  ■ Cursor"));
        assert!(!lines.iter().any(|l| l.contains("ghost")));
    }

    #[test]
    fn should_toggle_and_confirm() {
        // Given
        let agents = sample_agents();
        let mut ui = test_ui(ScriptedKeys::new([
            Key::Space,
            Key::Down,
            Key::Down,
            Key::Space,
            Key::Enter,
        ]));

        // When
        let chosen = ui.agent_selection(&agents, None, true);

        // Then
        assert_eq!(chosen, ids(&["codex"]));
    }

    #[test]
    fn should_reject_enter_with_empty_selection() {
        // Given
        let agents = sample_agents();
        let none: Vec<String> = Vec::new();
        let mut ui = test_ui(ScriptedKeys::new([
            Key::Enter,
            Key::Enter,
            Key::Up,
            Key::Space,
            Key::Enter,
        ]));

        // When
        let chosen = ui.agent_selection(&agents, Some(&none), true);

        // Then
        assert_eq!(chosen, ids(&["cursor"]));
        assert_eq!(ui.keys().remaining(), 0);
    }

    #[test]
    fn should_return_empty_set_on_cancel() {
        for cancel in [Key::Quit, Key::Escape, Key::CtrlC] {
            // Given
            let agents = sample_agents();
            let mut ui = test_ui(ScriptedKeys::new([Key::Space, cancel]));

            // When
            let chosen = ui.agent_selection(&agents, None, true);

            // Then
            assert!(chosen.is_empty());
        }
    }

    #[test]
    fn should_return_current_selection_when_input_fails() {
        // Given
        let agents = sample_agents();
        let mut ui = test_ui(ScriptedKeys::new([Key::Space]));

        // When
        let chosen = ui.agent_selection(&agents, None, true);

        // Then
        assert_eq!(chosen, ids(&["codex", "cursor"]));
    }

    #[test]
    fn should_not_loop_over_empty_agent_list() {
        // Given
        let mut ui = test_ui(ScriptedKeys::new([Key::Enter]));

        // When
        let chosen = ui.agent_selection(&[], None, true);

        // Then
        assert!(chosen.is_empty());
        assert_eq!(ui.keys().remaining(), 1);
    }
}
