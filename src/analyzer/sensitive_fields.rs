use tracing::debug;

use super::policy::sensitive_keyword;
use crate::models::{Finding, Specification};

/// Flags schema properties whose names suggest secrets or personal data.
pub struct SensitiveFieldAnalyzer;

impl SensitiveFieldAnalyzer {
    pub fn analyze(spec: &Specification) -> Vec<Finding> {
        let mut findings = Vec::new();

        for schema in spec.schemas.values() {
            for field in schema.properties.keys() {
                if let Some(keyword) = sensitive_keyword(field) {
                    debug!(schema = %schema.name, field = %field, keyword, "Sensitive field name");
                    findings.push(Finding::sensitive_field(&schema.name, field));
                }
            }
        }

        findings
    }
}
