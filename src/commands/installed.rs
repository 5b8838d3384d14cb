//! Installed command: table of skills on this machine

use anyhow::Result;
use std::path::Path;

use super::load_json;
use crate::model::InstalledSkill;
use crate::tui::{KeySource, Surface, Ui};

pub fn installed<S: Surface, K: KeySource>(ui: &mut Ui<S, K>, file: &Path) -> Result<()> {
    let skills: Vec<InstalledSkill> = load_json(file)?;
    ui.installed_list(&skills);
    Ok(())
}
