//! Download progress bar

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::warn;

use super::input::KeySource;
use super::surface::Surface;
use super::Ui;

const TEMPLATE: &str =
    "{spinner} {msg:.bold.blue} {bar:40} {bytes}/{total_bytes} {bytes_per_sec}";

impl<S: Surface, K: KeySource> Ui<S, K> {
    /// A byte-counting progress bar for a download.
    ///
    /// The bar is drawn on stderr, not on the UI's surface: stdout stays
    /// free for the results a caller may pipe elsewhere, and indicatif
    /// redraws its own line. With interaction turned off in the config the
    /// bar still counts but draws nothing.
    pub fn download_progress(&self, total_bytes: u64, description: &str) -> ProgressBar {
        let style = ProgressStyle::with_template(TEMPLATE).unwrap_or_else(|e| {
            warn!("Invalid progress template: {}", e);
            ProgressStyle::default_bar()
        });
        let target = if self.config.interactive {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        };
        let bar = ProgressBar::with_draw_target(Some(total_bytes), target).with_style(style);
        bar.set_message(description.to_string());
        bar
    }
}
