use tracing::debug;

use super::Rule;
use crate::models::{Finding, Specification};

/// Runs an ordered list of rules against one specification.
///
/// Findings are concatenated in rule order and never sorted, deduplicated or
/// capped. The engine holds no state between runs.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Vec<Rule>,
}

impl RuleEngine {
    pub fn new() -> Self {
        Self::with_rules(Rule::ALL.to_vec())
    }

    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn run(&self, spec: &Specification) -> Vec<Finding> {
        let mut findings = Vec::new();

        for rule in &self.rules {
            if !rule.applies_to(spec) {
                debug!(rule = %rule, "Rule precondition not met, skipping");
                continue;
            }

            let produced = rule.evaluate(spec);
            debug!(rule = %rule, findings = produced.len(), "Rule evaluated");
            findings.extend(produced);
        }

        findings
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}
