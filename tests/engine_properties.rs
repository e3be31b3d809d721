//! Behavioural properties of the default rule engine.

use specaudit::analyzer::{
    CONSENT_EXPLANATION, GENERIC_EXPLANATION, INTERNAL_EXPLANATION, MISSING_SCHEMES_MESSAGE,
};
use specaudit::{
    Category, HttpMethod, Operation, RuleEngine, SchemaDefinition, SecurityRequirement,
    Specification,
};

fn secured() -> Specification {
    Specification::new("3.0.0").with_security_scheme("bearerAuth")
}

fn count(findings: &[specaudit::Finding], category: Category) -> usize {
    findings.iter().filter(|f| f.category == category).count()
}

#[test]
fn missing_schemes_suppresses_endpoint_findings() {
    let spec = Specification::new("3.0.0")
        .with_operation("/widgets", Operation::public(HttpMethod::Get))
        .with_operation("/internal/jobs", Operation::inherited(HttpMethod::Post));

    let findings = RuleEngine::new().run(&spec);

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].category, Category::MissingSecuritySchemes);
    assert_eq!(findings[0].message, MISSING_SCHEMES_MESSAGE);
}

#[test]
fn sensitive_fields_still_reported_without_schemes() {
    let spec = Specification::new("3.0.0")
        .with_operation("/widgets", Operation::public(HttpMethod::Get))
        .with_schema(SchemaDefinition::new("User", ["email", "password_hash"]));

    let findings = RuleEngine::new().run(&spec);

    assert_eq!(count(&findings, Category::MissingSecuritySchemes), 1);
    assert_eq!(count(&findings, Category::UnauthenticatedEndpoint), 0);
    assert_eq!(count(&findings, Category::SensitiveField), 1);
    assert_eq!(findings[0].category, Category::MissingSecuritySchemes);
}

#[test]
fn allowlisted_paths_never_flagged() {
    let spec = secured()
        .with_operation("/health", Operation::public(HttpMethod::Get))
        .with_operation("/auth/login", Operation::public(HttpMethod::Post))
        .with_operation("/.well-known/jwks.json", Operation::inherited(HttpMethod::Get))
        .with_operation("/openapi.json", Operation::public(HttpMethod::Get))
        .with_operation("/customer-leads/{id}", Operation::public(HttpMethod::Put));

    assert!(RuleEngine::new().run(&spec).is_empty());
}

#[test]
fn generic_explanation_for_plain_endpoint() {
    let spec = secured().with_operation("/widgets", Operation::public(HttpMethod::Get));

    let findings = RuleEngine::new().run(&spec);

    assert_eq!(findings.len(), 1);
    assert_eq!(
        findings[0].message,
        "[API1] GET /widgets — Эндпоинт не защищён, хотя в API объявлена схема безопасности."
    );
    assert!(findings[0].message.ends_with(GENERIC_EXPLANATION));
}

#[test]
fn consent_explanation_outside_request_prefix() {
    let spec = secured()
        .with_operation("/account-consents/{id}", Operation::public(HttpMethod::Get))
        .with_operation("/payment-consents/{id}/status", Operation::public(HttpMethod::Get))
        .with_operation("/internal/audit", Operation::public(HttpMethod::Get));

    let messages: Vec<_> = RuleEngine::new()
        .run(&spec)
        .into_iter()
        .map(|f| f.message)
        .collect();

    assert_eq!(messages.len(), 3);
    assert_eq!(
        messages[0],
        format!("[API1] GET /account-consents/{{id}} — {}", CONSENT_EXPLANATION)
    );
    assert_eq!(
        messages[1],
        format!("[API1] GET /internal/audit — {}", INTERNAL_EXPLANATION)
    );
    assert!(messages[2].ends_with(CONSENT_EXPLANATION));
}

#[test]
fn global_security_protects_inheriting_operations() {
    let spec = secured()
        .with_global_security(vec![SecurityRequirement::new(["bearerAuth"])])
        .with_operation("/orders", Operation::inherited(HttpMethod::Get))
        .with_operation("/orders", Operation::public(HttpMethod::Post));

    let findings = RuleEngine::new().run(&spec);

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].method, Some(HttpMethod::Post));
    assert_eq!(findings[0].path.as_deref(), Some("/orders"));
}

#[test]
fn one_finding_per_sensitive_property() {
    let spec = secured().with_schema(SchemaDefinition::new(
        "User",
        ["email", "password_hash", "refresh_token"],
    ));

    let fields: Vec<_> = RuleEngine::new()
        .run(&spec)
        .into_iter()
        .filter_map(|f| f.field_name)
        .collect();

    assert_eq!(fields, vec!["password_hash", "refresh_token"]);
}

#[test]
fn repeated_runs_are_identical() {
    let spec = secured()
        .with_operation("/b", Operation::public(HttpMethod::Delete))
        .with_operation("/a", Operation::public(HttpMethod::Get))
        .with_operation("/a", Operation::public(HttpMethod::Patch))
        .with_schema(SchemaDefinition::new("Token", ["value", "otp"]));

    let engine = RuleEngine::new();
    let first = engine.run(&spec);
    let second = engine.run(&spec);

    assert_eq!(first.len(), 4);
    assert_eq!(first, second);
}

#[test]
fn empty_secured_spec_has_no_findings() {
    assert!(RuleEngine::new().run(&secured()).is_empty());
}
