use std::fmt;

use super::endpoint_auth::EndpointAuthAnalyzer;
use super::security_schemes::SecuritySchemeAnalyzer;
use super::sensitive_fields::SensitiveFieldAnalyzer;
use crate::models::{Category, Finding, Specification};

/// The closed set of checks the engine can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    MissingSecuritySchemes,
    UnauthenticatedEndpoint,
    SensitiveField,
}

impl Rule {
    pub const ALL: [Rule; 3] = [
        Rule::MissingSecuritySchemes,
        Rule::UnauthenticatedEndpoint,
        Rule::SensitiveField,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Rule::MissingSecuritySchemes => "missing-security-schemes",
            Rule::UnauthenticatedEndpoint => "unauthenticated-endpoint",
            Rule::SensitiveField => "sensitive-field",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Rule::MissingSecuritySchemes => Category::MissingSecuritySchemes,
            Rule::UnauthenticatedEndpoint => Category::UnauthenticatedEndpoint,
            Rule::SensitiveField => Category::SensitiveField,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Rule::MissingSecuritySchemes => "Document declares no security schemes",
            Rule::UnauthenticatedEndpoint => {
                "Operation has no effective security requirement outside the public allowlist"
            }
            Rule::SensitiveField => "Schema property name suggests secret or personal data",
        }
    }

    /// Precondition checked by the engine before `evaluate`. The
    /// unauthenticated-endpoint rule requires at least one declared scheme.
    pub fn applies_to(&self, spec: &Specification) -> bool {
        match self {
            Rule::UnauthenticatedEndpoint => spec.has_security_schemes(),
            Rule::MissingSecuritySchemes | Rule::SensitiveField => true,
        }
    }

    pub fn evaluate(&self, spec: &Specification) -> Vec<Finding> {
        match self {
            Rule::MissingSecuritySchemes => SecuritySchemeAnalyzer::analyze(spec),
            Rule::UnauthenticatedEndpoint => EndpointAuthAnalyzer::analyze(spec),
            Rule::SensitiveField => SensitiveFieldAnalyzer::analyze(spec),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
