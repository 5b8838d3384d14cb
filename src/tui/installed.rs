//! Installed skills table

use colored::Colorize;
use ratatui::layout::Constraint;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Cell, Row, Table, Widget};

use super::input::KeySource;
use super::surface::Surface;
use super::{bold, rounded_block, viewport_height, Ui};
use crate::format::{shorten_home, short_id};
use crate::model::InstalledSkill;

const WIDTHS: [Constraint; 4] = [
    Constraint::Max(30),
    Constraint::Length(12),
    Constraint::Fill(1),
    Constraint::Length(12),
];

/// Border, header and bottom border around the rows
const TABLE_CHROME: usize = 3;

/// Build the installed skills table
pub fn installed_table(skills: &[InstalledSkill]) -> Table<'static> {
    let header = Row::new(["Name", "Installed At", "Path", "ID (short)"]).style(bold());

    let rows = skills.iter().map(|skill| {
        let date = if skill.installed_at.is_empty() {
            "Unknown".to_string()
        } else {
            skill.installed_at.chars().take(10).collect()
        };
        let muted = Style::default().fg(Color::DarkGray);
        Row::new([
            Cell::new(skill.name.clone()).style(bold().fg(Color::Green)),
            Cell::new(date),
            Cell::new(shorten_home(&skill.path)).style(muted),
            Cell::new(short_id(&skill.id)).style(muted),
        ])
    });

    Table::new(rows, WIDTHS)
        .header(header)
        .column_spacing(1)
        .block(rounded_block().title(Line::styled(" 📦 Installed Skills ", bold()).centered()))
}

impl<S: Surface, K: KeySource> Ui<S, K> {
    pub fn installed_list(&mut self, skills: &[InstalledSkill]) {
        if skills.is_empty() {
            self.emit(&format!("\n{}", "No skills installed yet.".yellow()));
            self.emit(&format!(
                "{}{}{}\n",
                "Use ".dimmed(),
                "skill install <name>".dimmed().bold(),
                " to install a skill.".dimmed()
            ));
            return;
        }

        self.emit("");
        let table = installed_table(skills);
        self.emit_widget(viewport_height(skills.len(), TABLE_CHROME), |area, buf| {
            table.render(area, buf)
        });
        self.emit("");
        self.emit(&format!(
            "{}\n",
            format!("Total: {} skill(s) installed.", skills.len()).dimmed()
        ));
    }
}
