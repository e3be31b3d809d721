use tracing::debug;

use super::policy::{CONSENT_PATH_MARKERS, INTERNAL_PATH_PREFIX, is_public_path};
use crate::models::{Finding, Specification};

pub const CONSENT_EXPLANATION: &str = "Этот эндпоинт управляет согласиями — доступ без авторизации может раскрыть приватные данные пользователя.";
pub const INTERNAL_EXPLANATION: &str =
    "Внутренний эндпоинт доступен публично — возможна утечка служебной информации.";
pub const GENERIC_EXPLANATION: &str =
    "Эндпоинт не защищён, хотя в API объявлена схема безопасности.";

/// Flags operations whose effective security is empty although the document
/// declares at least one security scheme.
pub struct EndpointAuthAnalyzer;

impl EndpointAuthAnalyzer {
    pub fn analyze(spec: &Specification) -> Vec<Finding> {
        let mut findings = Vec::new();

        for item in spec.paths.values() {
            if is_public_path(&item.path) {
                debug!(path = %item.path, "Skipping public path");
                continue;
            }

            for operation in item.operations.values() {
                if !spec.effective_security(operation).is_empty() {
                    continue;
                }

                findings.push(Finding::unauthenticated_endpoint(
                    operation.method,
                    &item.path,
                    Self::explain(&item.path),
                ));
            }
        }

        findings
    }

    /// Consent endpoints take priority over internal ones.
    pub fn explain(path: &str) -> &'static str {
        if CONSENT_PATH_MARKERS.iter().any(|m| path.contains(m)) {
            CONSENT_EXPLANATION
        } else if path.starts_with(INTERNAL_PATH_PREFIX) {
            INTERNAL_EXPLANATION
        } else {
            GENERIC_EXPLANATION
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, HttpMethod, Operation, SecurityRequirement};

    fn secured_spec() -> Specification {
        Specification::new("3.0.0").with_security_scheme("bearerAuth")
    }

    fn bearer() -> Vec<SecurityRequirement> {
        vec![SecurityRequirement::new(["bearerAuth"])]
    }

    #[test]
    fn test_generic_unprotected_endpoint() {
        let spec = secured_spec().with_operation("/widgets", Operation::public(HttpMethod::Get));

        let findings = EndpointAuthAnalyzer::analyze(&spec);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].category, Category::UnauthenticatedEndpoint);
        assert_eq!(findings[0].method, Some(HttpMethod::Get));
        assert_eq!(findings[0].path.as_deref(), Some("/widgets"));
        assert_eq!(
            findings[0].message,
            format!("[API1] GET /widgets — {}", GENERIC_EXPLANATION)
        );
    }

    #[test]
    fn test_inherits_global_security() {
        let spec = secured_spec()
            .with_global_security(bearer())
            .with_operation("/widgets", Operation::inherited(HttpMethod::Get));
        assert!(EndpointAuthAnalyzer::analyze(&spec).is_empty());
    }

    #[test]
    fn test_explicit_empty_overrides_global() {
        let spec = secured_spec()
            .with_global_security(bearer())
            .with_operation("/widgets", Operation::inherited(HttpMethod::Get))
            .with_operation("/widgets", Operation::public(HttpMethod::Post));

        let findings = EndpointAuthAnalyzer::analyze(&spec);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].method, Some(HttpMethod::Post));
    }

    #[test]
    fn test_public_paths_skip_all_operations() {
        let spec = secured_spec()
            .with_operation("/health", Operation::public(HttpMethod::Get))
            .with_operation("/auth/login", Operation::public(HttpMethod::Post))
            .with_operation("/auth/login", Operation::inherited(HttpMethod::Delete))
            .with_operation("/account-consents/request", Operation::public(HttpMethod::Post));
        assert!(EndpointAuthAnalyzer::analyze(&spec).is_empty());
    }

    #[test]
    fn test_consent_explanation() {
        let spec = secured_spec()
            .with_operation("/account-consents/{id}", Operation::public(HttpMethod::Get));
        let findings = EndpointAuthAnalyzer::analyze(&spec);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.ends_with(CONSENT_EXPLANATION));
    }

    #[test]
    fn test_explanation_priority() {
        assert_eq!(
            EndpointAuthAnalyzer::explain("/internal/payment-consents/1"),
            CONSENT_EXPLANATION
        );
        assert_eq!(
            EndpointAuthAnalyzer::explain("/internal/metrics"),
            INTERNAL_EXPLANATION
        );
        assert_eq!(EndpointAuthAnalyzer::explain("/internal"), GENERIC_EXPLANATION);
        assert_eq!(EndpointAuthAnalyzer::explain("/users"), GENERIC_EXPLANATION);
    }

    #[test]
    fn test_deterministic_order() {
        let spec = secured_spec()
            .with_operation("/b", Operation::public(HttpMethod::Delete))
            .with_operation("/b", Operation::public(HttpMethod::Get))
            .with_operation("/a", Operation::public(HttpMethod::Options));

        let locations: Vec<_> = EndpointAuthAnalyzer::analyze(&spec)
            .iter()
            .filter_map(|f| f.location())
            .collect();
        assert_eq!(locations, vec!["OPTIONS /a", "GET /b", "DELETE /b"]);
    }
}
