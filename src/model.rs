//! Records consumed by the display layer
//!
//! These are produced by the catalog, installer and agent discovery code.
//! The display layer only reads them.

use log::debug;
use serde::{Deserialize, Serialize};

/// A skill tag, shown as `#name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
}

/// A catalog skill
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub description: String,
    pub average_rating: f64,
    pub rating_count: u64,
    pub comment_count: u64,
    pub tutorial_count: u64,
    pub github_stars: u64,
    pub file_size_mb: f64,
    pub tags: Vec<Tag>,
    pub source_url: Option<String>,
    /// Either a serialized JSON string or an already-parsed object
    pub directory_structure: Option<serde_json::Value>,
}

impl Skill {
    /// Parse the directory structure payload.
    ///
    /// Returns `None` when it is absent, malformed or has no root.
    pub fn directory_tree(&self) -> Option<DirectoryTree> {
        let raw = self.directory_structure.as_ref()?;
        let parsed = match raw {
            serde_json::Value::Null => return None,
            serde_json::Value::String(s) => serde_json::from_str::<DirectoryTree>(s),
            other => serde_json::from_value::<DirectoryTree>(other.clone()),
        };
        match parsed {
            Ok(tree) => Some(tree),
            Err(e) => {
                debug!("Ignoring directory structure for {}: {}", self.id, e);
                None
            }
        }
    }
}

/// A skill already installed on this machine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InstalledSkill {
    pub id: String,
    pub name: String,
    /// ISO-8601 date-time
    pub installed_at: String,
    pub path: String,
}

/// An agent that skills can be installed into
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub path: String,
}

/// Outcome of installing a skill into one agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallResult {
    pub agent_name: String,
    pub path: String,
    pub success: bool,
}

/// Top of a skill's directory structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DirectoryTree {
    pub root: String,
    #[serde(default)]
    pub children: Vec<DirectoryNode>,
}

/// A file or directory inside a skill
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DirectoryNode {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub name: String,
    /// Size in bytes, files only
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(default)]
    pub children: Option<Vec<DirectoryNode>>,
}

impl DirectoryNode {
    /// Anything not tagged `directory` is drawn as a file
    pub fn is_directory(&self) -> bool {
        self.kind == "directory"
    }
}
