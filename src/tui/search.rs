//! Search results: a table with an optional movable highlight

use colored::Colorize;
use log::warn;
use ratatui::layout::Constraint;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Cell, Row, StatefulWidget, Table, TableState};
use ratatui::Frame;

use super::cursor::ListCursor;
use super::input::{Key, KeySource};
use super::surface::Surface;
use super::{bold, dim, rounded_block, viewport_height, Ui};
use crate::error::DisplayError;
use crate::format::{github_stars_display, rating_display, short_id, truncate};
use crate::model::Skill;

const DESCRIPTION_CHARS: usize = 70;

/// Border, header and bottom border around the rows
const TABLE_CHROME: usize = 3;

const WIDTHS: [Constraint; 5] = [
    Constraint::Max(25),
    Constraint::Max(60),
    Constraint::Length(10),
    Constraint::Length(12),
    Constraint::Length(11),
];

/// Build the results table. The row at `selected` is drawn in reverse video.
pub fn search_table(skills: &[Skill], selected: Option<usize>) -> Table<'static> {
    let header = Row::new(["Name", "Description", "⭐ GitHub", "Rating", "ID"]).style(bold());

    let rows = skills.iter().enumerate().map(|(i, skill)| {
        let row = Row::new([
            Cell::new(skill.name.clone()).style(bold().fg(Color::Cyan)),
            Cell::new(truncate(&skill.description, DESCRIPTION_CHARS)),
            Cell::new(Line::from(github_stars_display(skill.github_stars)).right_aligned())
                .style(Style::default().fg(Color::Yellow)),
            Cell::new(rating_display(skill.average_rating)),
            Cell::new(short_id(&skill.id)).style(Style::default().fg(Color::DarkGray)),
        ]);
        if selected == Some(i) {
            row.style(Style::default().add_modifier(Modifier::REVERSED))
        } else {
            row
        }
    });

    Table::new(rows, WIDTHS)
        .header(header)
        .column_spacing(1)
        .block(rounded_block())
}

fn draw_search(frame: &mut Frame, skills: &[Skill], cursor: usize) {
    let help = format!(
        " ↑/↓: Navigate • Enter: Details • q: Quit   ({} results) ",
        skills.len()
    );
    let table = search_table(skills, Some(cursor))
        .block(rounded_block().title(Line::styled(help, dim().add_modifier(Modifier::BOLD))));
    // The selection keeps the cursor row scrolled into view
    let mut state = TableState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(table, frame.area(), &mut state);
}

impl<S: Surface, K: KeySource> Ui<S, K> {
    /// Show search results and let the user pick one.
    ///
    /// Returns the chosen skill and its index, or `None` with the index the
    /// cursor was on when the user backed out. Static output always
    /// returns `(None, 0)`.
    pub fn search_results<'a>(
        &mut self,
        skills: &'a [Skill],
        query: &str,
        interactive: bool,
        initial_index: usize,
    ) -> (Option<&'a Skill>, usize) {
        if skills.is_empty() {
            self.print_no_results(query);
            return (None, 0);
        }

        if !self.can_interact(interactive) {
            self.print_search_table(skills);
            return (None, 0);
        }

        match self.run_search(skills, initial_index) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Interactive search unavailable: {}", e);
                self.emit(&format!(
                    "\n{}\n",
                    format!("Interactive mode unavailable: {}", e).dimmed()
                ));
                self.print_search_table(skills);
                (None, 0)
            }
        }
    }

    fn run_search<'a>(
        &mut self,
        skills: &'a [Skill],
        initial_index: usize,
    ) -> Result<(Option<&'a Skill>, usize), DisplayError> {
        let mut cursor = ListCursor::new(initial_index, skills.len());
        let height = viewport_height(skills.len(), TABLE_CHROME);

        self.with_viewport(height, |terminal, keys| loop {
            terminal.draw(|frame| draw_search(frame, skills, cursor.index()))?;
            match keys.read_key()? {
                Key::Up => cursor.previous(),
                Key::Down => cursor.next(),
                Key::Enter => return Ok((Some(&skills[cursor.index()]), cursor.index())),
                key if key.is_cancel() => return Ok((None, cursor.index())),
                _ => {}
            }
        })
    }

    fn print_no_results(&mut self, query: &str) {
        self.emit(&format!(
            "\n{}{}{}",
            "No skills found matching '".yellow(),
            query.yellow().bold(),
            "'".yellow()
        ));
        self.emit(&format!(
            "{}\n",
            "Try different keywords or check spelling.".dimmed()
        ));
    }

    fn print_search_table(&mut self, skills: &[Skill]) {
        self.emit("");
        let table = search_table(skills, None);
        let mut state = TableState::default();
        self.emit_widget(viewport_height(skills.len(), TABLE_CHROME), |area, buf| {
            table.render(area, buf, &mut state)
        });
        self.emit("");
        self.emit(&format!(
            "{}{}{}\n",
            format!("Found {} skill(s). Use ", skills.len()).dimmed(),
            "skill show <name>".dimmed().bold(),
            " for details.".dimmed()
        ));
    }
}
