//! Colored output helpers for the terminal client

use crate::types::{Project, ProjectStatus, Task};
use owo_colors::OwoColorize;

const BAR_WIDTH: usize = 20;

/// Output style configuration
#[derive(Debug, Clone, Copy)]
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    pub fn banner(&self) {
        if self.colored {
            println!(
                "\n   {} {}\n",
                "TeamSync".bright_cyan().bold(),
                format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
            );
        } else {
            println!("\n   TeamSync v{}\n", env!("CARGO_PKG_VERSION"));
        }
    }

    pub fn success(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "✓".green().bold(), message.green());
        } else {
            println!("  [OK] {}", message);
        }
    }

    pub fn info(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "•".blue(), message);
        } else {
            println!("  [INFO] {}", message);
        }
    }

    /// Written to stderr
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "✗".red().bold(), message.red());
        } else {
            eprintln!("  [ERROR] {}", message);
        }
    }

    /// Section title, e.g. a dashboard heading
    pub fn header(&self, title: &str) {
        if self.colored {
            println!("\n  {}", title.bright_white().bold().underline());
        } else {
            println!("\n  === {} ===", title);
        }
    }

    pub fn subheader(&self, title: &str) {
        if self.colored {
            println!("\n  {}", title.cyan().bold());
        } else {
            println!("\n  --- {} ---", title);
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if self.colored {
            println!("    {}: {}", key.dimmed(), value.bright_white());
        } else {
            println!("    {}: {}", key, value);
        }
    }

    pub fn hint(&self, message: &str) {
        if self.colored {
            println!("\n  {}", message.dimmed().italic());
        } else {
            println!("\n  [TIP] {}", message);
        }
    }

    /// Tab strip with the active tab highlighted
    pub fn tabs(&self, labels: &[&str], active: &str) {
        let strip: Vec<String> = labels
            .iter()
            .map(|label| {
                if *label == active {
                    if self.colored {
                        format!("[{}]", label.bright_cyan().bold())
                    } else {
                        format!("[{}]", label)
                    }
                } else if self.colored {
                    label.dimmed().to_string()
                } else {
                    label.to_string()
                }
            })
            .collect();
        println!("  {}", strip.join("  "));
    }

    /// One project card
    pub fn project(&self, project: &Project, client: &str) {
        let badge = status_badge(project.status);
        if self.colored {
            let badge = match project.status {
                ProjectStatus::Completed => badge.green().to_string(),
                ProjectStatus::Ongoing => badge.yellow().to_string(),
            };
            println!(
                "    {} {} {}",
                format!("#{:<4}", project.id).dimmed(),
                project.title.bright_white().bold(),
                badge
            );
        } else {
            println!("    #{:<4} {} {}", project.id, project.title, badge);
        }
        if !project.description.is_empty() {
            println!("          {}", project.description);
        }
        println!("          Client: {}", client);
    }

    /// One task line with its assignee
    pub fn task(&self, task: &Task, assignee: &str) {
        let mark = if task.completed { "[x]" } else { "[ ]" };
        if self.colored {
            let mark = if task.completed {
                mark.green().to_string()
            } else {
                mark.dimmed().to_string()
            };
            println!(
                "    {} {} {} {}",
                mark,
                format!("#{:<4}", task.id).dimmed(),
                task.title.bright_white(),
                format!("({})", assignee).dimmed()
            );
        } else {
            println!("    {} #{:<4} {} ({})", mark, task.id, task.title, assignee);
        }
    }

    pub fn progress(&self, percent: u8) {
        let bar = progress_bar(percent, BAR_WIDTH);
        if self.colored {
            println!("    {} {}", bar.bright_green(), format!("{}%", percent).bold());
        } else {
            println!("    {} {}%", bar, percent);
        }
    }

    /// Print a table header row
    pub fn table_header(&self, columns: &[&str]) {
        let header = table_line(columns);
        if self.colored {
            println!("    {}", header.bright_white().bold());
            println!("    {}", "─".repeat(columns.len() * 16).dimmed());
        } else {
            println!("    {}", header);
            println!("    {}", "-".repeat(columns.len() * 16));
        }
    }

    pub fn table_row(&self, values: &[&str]) {
        println!("    {}", table_line(values));
    }

    pub fn newline(&self) {
        println!();
    }
}

fn table_line(values: &[&str]) -> String {
    values
        .iter()
        .map(|v| format!("{:<15}", v))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn status_badge(status: ProjectStatus) -> String {
    format!("({})", status)
}

/// Fixed-width bar, e.g. `[#####-----]` for 50
pub fn progress_bar(percent: u8, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_new() {
        assert!(Output::new().colored);
        assert!(!Output::no_color().colored);
        assert!(Output::default().colored);
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0, 10), "[----------]");
        assert_eq!(progress_bar(50, 10), "[#####-----]");
        assert_eq!(progress_bar(100, 10), "[##########]");
        assert_eq!(progress_bar(200, 4), "[####]");
    }

    #[test]
    fn test_status_badge() {
        assert_eq!(status_badge(ProjectStatus::Ongoing), "(ONGOING)");
        assert_eq!(status_badge(ProjectStatus::Completed), "(COMPLETED)");
    }

    #[test]
    fn test_table_line_pads_columns() {
        let line = table_line(&["id", "name"]);
        assert!(line.starts_with("id             "));
        assert!(line.ends_with("name           "));
    }
}
