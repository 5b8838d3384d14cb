//! Skill detail panel and directory tree

use colored::Colorize;
use log::{debug, warn};

use super::input::{Key, KeySource};
use super::surface::Surface;
use super::Ui;
use crate::error::DisplayError;
use crate::format::{hyperlink, kib, rating_stars, thousands};
use crate::model::{DirectoryNode, DirectoryTree, Skill};

const RULE_WIDTH: usize = 63;

/// What the user asked for from the detail screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    Install,
    /// Return to the results list
    Back,
}

fn label(text: &str) -> String {
    text.cyan().bold().to_string()
}

fn link(url: &str, links: bool) -> String {
    hyperlink(url, url, links).blue().underline().to_string()
}

/// Render the boxed summary of a skill
pub fn detail_panel(skill: &Skill, links: bool) -> String {
    let mut lines = vec![
        format!("{}        {}", label("📦 Name:"), skill.name),
        format!(
            "{}      {} {:.1} ({} votes)",
            label("⭐ Rating:"),
            rating_stars(skill.average_rating),
            skill.average_rating,
            skill.rating_count
        ),
        format!("{}    {}", label("💬 Comments:"), skill.comment_count),
        format!("{}   {}", label("📚 Tutorials:"), skill.tutorial_count),
    ];

    if skill.github_stars > 0 {
        lines.push(format!(
            "{}      {} stars",
            label("⭐ GitHub:"),
            thousands(skill.github_stars)
        ));
    }

    if skill.file_size_mb > 0.0 {
        lines.push(format!("{}        {:.2} MB", label("📁 Size:"), skill.file_size_mb));
    }

    if !skill.tags.is_empty() {
        let tags: Vec<String> = skill.tags.iter().map(|t| format!("#{}", t.name)).collect();
        lines.push(format!("{}        {}", label("🏷️  Tags:"), tags.join(", ")));
    }

    if let Some(url) = skill.source_url.as_deref().filter(|u| !u.is_empty()) {
        lines.push(format!("{}      {}", label("🔗 Source:"), link(url, links)));
    }

    if !skill.description.is_empty() {
        lines.push(String::new());
        lines.push(label("📄 Description:"));
        lines.push(format!("   {}", skill.description));
    }

    let border = |s: &str| s.cyan().to_string();
    let mut panel = vec![format!(
        "{} {} {}",
        border("╭─"),
        skill.name.white().bold(),
        border(&"─".repeat(40))
    )];
    panel.push(border("│"));
    panel.extend(lines.iter().map(|l| format!("{}  {}", border("│"), l)));
    panel.push(border("│"));
    panel.push(border(&format!("╰{}", "─".repeat(44))));
    panel.join("\n")
}

/// Render a skill's files as an indented tree
pub fn directory_tree(tree: &DirectoryTree) -> String {
    let mut lines = vec![
        label("Skill Structure:"),
        format!("📂 {}", tree.root.bold()),
    ];
    push_children(&mut lines, &tree.children, "");
    lines.join("\n")
}

fn push_children(lines: &mut Vec<String>, nodes: &[DirectoryNode], prefix: &str) {
    for (i, node) in nodes.iter().enumerate() {
        let last = i + 1 == nodes.len();
        let branch = if last { "└── " } else { "├── " };
        let guide = format!("{}{}", prefix, branch).dimmed();

        if node.is_directory() {
            lines.push(format!("{}📁 {}", guide, node.name.bold()));
            if let Some(children) = &node.children {
                let next = format!("{}{}", prefix, if last { "    " } else { "│   " });
                push_children(lines, children, &next);
            }
        } else {
            let size = match node.size {
                Some(bytes) if bytes != 0.0 => format!(" {}", format!("({})", kib(bytes)).dimmed()),
                _ => String::new(),
            };
            lines.push(format!("{}📄 {}{}", guide, node.name, size));
        }
    }
}

impl<S: Surface, K: KeySource> Ui<S, K> {
    /// Show one skill and, when interactive, wait for an action.
    ///
    /// `Back` is only ever returned when `has_back` is set. `None` means
    /// the user quit or there was nothing to wait for.
    pub fn skill_detail(
        &mut self,
        skill: &Skill,
        interactive: bool,
        has_back: bool,
    ) -> Option<DetailAction> {
        let links = self.links_enabled();
        self.emit("");
        self.emit(&detail_panel(skill, links));

        if let Some(tree) = skill.directory_tree() {
            self.emit("");
            self.emit(&directory_tree(&tree));
        }

        self.emit("");
        self.emit(&format!(
            "{}{}",
            "💡 Install: ".dimmed(),
            format!("skill install {}", skill.id).dimmed().bold()
        ));
        self.emit(&format!(
            "{}{}",
            "   Or use: ".dimmed(),
            format!("skill install {}", skill.name).dimmed().bold()
        ));
        let detail_url = self.config.skill_url(&skill.id);
        self.emit(&format!("{} {}", "🔗 Details:".dimmed(), link(&detail_url, links)));

        if self.can_interact(interactive) {
            let rule = "─".repeat(RULE_WIDTH).cyan().bold().to_string();
            let hint = if has_back {
                "  i: Install  |  ←: Back to results  |  Esc/q: Quit"
            } else {
                "  i: Install  |  Esc/q: Quit"
            };
            self.emit("");
            self.emit(&rule);
            self.emit(&hint.dimmed().to_string());
            self.emit(&rule);

            match self.wait_for_action(has_back) {
                Ok(action) => return action,
                Err(e) => warn!("Detail view input failed: {}", e),
            }
        }

        self.emit("");
        None
    }

    fn wait_for_action(&mut self, has_back: bool) -> Result<Option<DetailAction>, DisplayError> {
        loop {
            match self.keys.read_key()? {
                Key::Char('i') => return Ok(Some(DetailAction::Install)),
                Key::Left if has_back => return Ok(Some(DetailAction::Back)),
                key if key.is_cancel() => return Ok(None),
                key => debug!("Ignoring {:?} on detail view", key),
            }
        }
    }
}
