//! Show command: details for a single skill

use anyhow::Result;
use std::path::Path;

use super::load_json;
use crate::model::Skill;
use crate::tui::{DetailAction, KeySource, Surface, Ui};

pub fn show<S: Surface, K: KeySource>(ui: &mut Ui<S, K>, file: &Path, interactive: bool) -> Result<()> {
    let skill: Skill = load_json(file)?;

    if ui.skill_detail(&skill, interactive, false) == Some(DetailAction::Install) {
        ui.print_info(&format!(
            "Install {} with: skill install {}",
            skill.name, skill.id
        ));
    }

    Ok(())
}
