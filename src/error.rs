//! Error types for the display layer

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised below the screen level.
///
/// Screens never hand these to their callers: a failing interactive loop
/// degrades to static output instead. They surface from key sources,
/// config loading and JSON decoding.
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("input stream closed")]
    InputClosed,

    #[error("invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
