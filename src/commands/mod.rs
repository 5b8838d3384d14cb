//! CLI command implementations
//!
//! Each command reads records produced elsewhere (catalog search, installer,
//! agent discovery) from a JSON file and hands them to the display layer.

pub mod agents;
pub mod installed;
pub mod search;
pub mod show;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub use agents::agents;
pub use installed::installed;
pub use search::search;
pub use show::show;

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).context(format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).context(format!("Failed to parse {}", path.display()))
}
