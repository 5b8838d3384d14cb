//! Terminal display layer for the skill package manager
//!
//! Renders search results, skill details, installed skills and agent
//! checklists, and relays keyboard choices back to the caller. It owns no
//! business logic: records come in, selections go out.

pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use config::DisplayConfig;
pub use error::DisplayError;
pub use tui::{DetailAction, Key, KeySource, Ui};
