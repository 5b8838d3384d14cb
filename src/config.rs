//! Display configuration
//!
//! Defaults, then `~/.skillshelf/config.toml`, then CLI flags.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::DisplayError;

/// Promotional site root; skill pages live under `<site>/skill/<id>`
pub const DEFAULT_SITE_URL: &str = "https://skillmaster.cc";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Root URL used for the promotion line and skill detail links
    pub site_url: String,
    /// Allow keyboard navigation when stdin is a terminal
    pub interactive: bool,
    /// Emit OSC 8 hyperlinks when colors are enabled
    pub hyperlinks: bool,
    /// Write debug logs here
    pub log_file: Option<PathBuf>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            site_url: DEFAULT_SITE_URL.to_string(),
            interactive: true,
            hyperlinks: true,
            log_file: None,
        }
    }
}

impl DisplayConfig {
    /// Load from `path`, falling back to defaults when the file is missing
    pub fn load(path: &Path) -> Result<Self, DisplayError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        toml::from_str(&content).map_err(|source| DisplayError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from the default location, if the home directory is known
    pub fn load_default() -> Result<Self, DisplayError> {
        match default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Link to a skill's page on the site
    pub fn skill_url(&self, skill_id: &str) -> String {
        format!("{}/skill/{}", self.site_url.trim_end_matches('/'), skill_id)
    }
}

/// `~/.skillshelf/config.toml`
pub fn default_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".skillshelf").join("config.toml"))
}
