use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::models::{Category, Finding};

pub const SUMMARY_LINE: &str = "Analysis complete.";
pub const NO_ISSUES_LINE: &str = "No issues found.";

pub struct ConsoleReporter;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "OWASP")]
    owasp: String,
    #[tabled(rename = "Findings")]
    count: usize,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }

    /// Plain-text report: a summary line, then one line per finding message.
    pub fn render(&self, findings: &[Finding]) -> String {
        let mut lines = vec![SUMMARY_LINE.to_string()];
        if findings.is_empty() {
            lines.push(NO_ISSUES_LINE.to_string());
        } else {
            lines.push(format!("Issues found: {}", findings.len()));
            lines.extend(findings.iter().map(|f| f.message.clone()));
        }
        lines.join("\n")
    }

    pub fn export(&self, findings: &[Finding], path: &Path) -> Result<()> {
        let mut text = self.render(findings);
        text.push('\n');
        fs::write(path, text).with_context(|| format!("Failed to write to {}", path.display()))?;
        Ok(())
    }

    pub fn print_report(&self, findings: &[Finding]) {
        println!("{}", SUMMARY_LINE.bold());

        if findings.is_empty() {
            println!("{}", NO_ISSUES_LINE.green());
            return;
        }

        println!("{}", format!("Issues found: {}", findings.len()).red().bold());
        for finding in findings {
            let line = match finding.category {
                Category::MissingSecuritySchemes => finding.message.red().bold(),
                Category::UnauthenticatedEndpoint => finding.message.red(),
                Category::SensitiveField => finding.message.yellow(),
            };
            println!("{}", line);
        }
    }

    pub fn print_summary(&self, findings: &[Finding]) {
        if findings.is_empty() {
            return;
        }

        let rows: Vec<CategoryRow> = Category::ALL
            .iter()
            .map(|category| CategoryRow {
                category: category.title().to_string(),
                owasp: category.owasp_id().to_string(),
                count: findings.iter().filter(|f| f.category == *category).count(),
            })
            .filter(|row| row.count > 0)
            .collect();

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .to_string();

        println!("\n{}", table);
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
