//! Search command: results list with drill-down into details

use anyhow::Result;
use log::info;
use std::path::Path;

use super::load_json;
use crate::model::Skill;
use crate::tui::{DetailAction, KeySource, Surface, Ui};

/// Browse search results; Back from a detail view reopens the list where
/// the user left it
pub fn search<S: Surface, K: KeySource>(
    ui: &mut Ui<S, K>,
    results: &Path,
    query: &str,
    interactive: bool,
) -> Result<()> {
    let skills: Vec<Skill> = load_json(results)?;
    info!("Showing {} result(s) for '{}'", skills.len(), query);

    let mut index = 0;
    loop {
        let (selected, at) = ui.search_results(&skills, query, interactive, index);
        let Some(skill) = selected else {
            return Ok(());
        };
        index = at;

        match ui.skill_detail(skill, interactive, true) {
            Some(DetailAction::Back) => continue,
            Some(DetailAction::Install) => {
                ui.print_info(&format!(
                    "Install {} with: skill install {}",
                    skill.name, skill.id
                ));
                return Ok(());
            }
            None => return Ok(()),
        }
    }
}
