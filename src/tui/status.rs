//! One-line status messages and install reporting

use colored::{Color, Colorize};

use super::input::KeySource;
use super::surface::Surface;
use super::Ui;
use crate::format::hyperlink;
use crate::model::InstallResult;

const STEP_ICON: &str = "◇";

impl<S: Surface, K: KeySource> Ui<S, K> {
    pub fn print_success(&mut self, message: &str) {
        self.emit(&format!("✅ {}", message).green().bold().to_string());
    }

    pub fn print_error(&mut self, message: &str) {
        self.emit(&format!("❌ {}", message).red().bold().to_string());
    }

    pub fn print_info(&mut self, message: &str) {
        self.emit(&format!("ℹ️  {}", message).cyan().to_string());
    }

    pub fn print_warning(&mut self, message: &str) {
        self.emit(&format!("⚠️  {}", message).yellow().to_string());
    }

    /// One step of an install, prefixed with a cyan `◇`
    pub fn install_step(&mut self, message: &str) {
        self.install_step_with(message, STEP_ICON, Color::Cyan);
    }

    pub fn install_step_with(&mut self, message: &str, icon: &str, color: Color) {
        self.emit(&format!("{} {}", icon.color(color), message));
    }

    /// Per-agent results after installing `skill_name`
    pub fn install_summary(&mut self, skill_name: &str, results: &[InstallResult]) {
        self.emit("");
        self.emit(
            &format!("Successfully installed {}!", skill_name)
                .green()
                .bold()
                .to_string(),
        );
        self.emit("");
        for result in results {
            let line = if result.success {
                format!(
                    "  {} {}: {}",
                    "✓".green(),
                    result.agent_name.bold(),
                    result.path.dimmed()
                )
            } else {
                format!(
                    "  {} {}: {}",
                    "✗".red(),
                    result.agent_name.bold(),
                    "Failed".red()
                )
            };
            self.emit(&line);
        }
        self.emit("");
    }

    /// Point users at the catalog site
    pub fn print_promotion(&mut self) {
        let url = self.config.site_url.clone();
        let link = hyperlink(&url, &url, self.links_enabled());
        self.emit(&format!(
            "{}{}",
            "🌐 Discover more agent skills: ".dimmed(),
            link.dimmed()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_ui, written, ScriptedKeys};

    #[test]
    fn should_prefix_status_lines() {
        // Given
        let mut ui = test_ui(ScriptedKeys::empty());

        // When
        ui.print_success("done");
        ui.print_error("broken");
        ui.print_info("fyi");
        ui.print_warning("careful");

        // Then
        let lines: Vec<String> = written(&ui).lines().map(str::to_string).collect();
        assert_eq!(lines, vec!["✅ done", "❌ broken", "ℹ️  fyi", "⚠️  careful"]);
    }

    #[test]
    fn should_render_install_steps() {
        // Given
        let mut ui = test_ui(ScriptedKeys::empty());

        // When
        ui.install_step("Downloading");
        ui.install_step_with("Linked", "◆", Color::Green);

        // Then
        assert_eq!(written(&ui), "◇ Downloading\n◆ Linked\n");
    }

    #[test]
    fn should_mark_failed_agents_in_summary() {
        // Given
        let mut ui = test_ui(ScriptedKeys::empty());
        let results = vec![
            InstallResult {
                agent_name: "Claude".to_string(),
                path: "~/.claude/skills/pdf".to_string(),
                success: true,
            },
            InstallResult {
                agent_name: "Codex".to_string(),
                path: "~/.codex/skills/pdf".to_string(),
                success: false,
            },
        ];

        // When
        ui.install_summary("pdf", &results);

        // Then
        let output = written(&ui);
        assert!(output.contains("Successfully installed pdf!"));
        assert!(output.contains("  ✓ Claude: ~/.claude/skills/pdf"));
        assert!(output.contains("  ✗ Codex: Failed"));
        assert!(!output.contains("~/.codex/skills/pdf"));
    }

    #[test]
    fn should_link_site_in_promotion() {
        // Given
        let mut ui = test_ui(ScriptedKeys::empty());

        // When
        ui.print_promotion();

        // Then
        assert!(written(&ui).contains("Discover more agent skills: https://skillmaster.cc"));
    }
}
