use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::models::Finding;

pub const TOOL_NAME: &str = "API Security Analyzer";

/// Structured report shared by the CLI's JSON mode and the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonReport {
    pub tool: String,
    pub spec: String,
    pub issues_count: usize,
    pub issues: Vec<String>,
    pub success: bool,
}

impl JsonReport {
    pub fn from_findings(spec: impl Into<String>, findings: &[Finding]) -> Self {
        Self {
            tool: TOOL_NAME.to_string(),
            spec: spec.into(),
            issues_count: findings.len(),
            issues: findings.iter().map(|f| f.message.clone()).collect(),
            success: findings.is_empty(),
        }
    }
}

/// Body returned when loading fails before any analysis runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    pub success: bool,
    pub error: String,
}

impl ErrorReport {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

pub struct JsonExporter;

impl JsonExporter {
    pub fn render<T: Serialize>(report: &T) -> Result<String> {
        serde_json::to_string_pretty(report).context("Failed to serialize report")
    }

    pub fn export<T: Serialize>(report: &T, path: &Path) -> Result<()> {
        let json = Self::render(report)?;
        fs::write(path, json).with_context(|| format!("Failed to write to {}", path.display()))?;
        Ok(())
    }
}
