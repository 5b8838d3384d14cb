//! Agents command: choose install targets

use anyhow::Result;
use std::path::Path;

use super::load_json;
use crate::model::Agent;
use crate::tui::{KeySource, Surface, Ui};

/// Pick agents, starting from `preselect` (all agents when empty)
pub fn agents<S: Surface, K: KeySource>(
    ui: &mut Ui<S, K>,
    file: &Path,
    preselect: &[String],
    interactive: bool,
) -> Result<()> {
    let agents: Vec<Agent> = load_json(file)?;
    let initial = if preselect.is_empty() {
        None
    } else {
        Some(preselect)
    };

    let chosen = ui.agent_selection(&agents, initial, interactive);
    if chosen.is_empty() {
        ui.print_warning("No agents selected");
        return Ok(());
    }

    // Report in list order, not set order
    let names: Vec<&str> = agents
        .iter()
        .filter(|a| chosen.contains(&a.id))
        .map(|a| a.id.as_str())
        .collect();
    ui.print_success(&format!("Selected agents: {}", names.join(", ")));
    Ok(())
}
