use crate::models::{Finding, Specification};

pub const MISSING_SCHEMES_MESSAGE: &str =
    "[API1] Не определены схемы безопасности (securitySchemes).";

/// Flags documents that declare no security schemes at all.
pub struct SecuritySchemeAnalyzer;

impl SecuritySchemeAnalyzer {
    pub fn analyze(spec: &Specification) -> Vec<Finding> {
        if spec.has_security_schemes() {
            Vec::new()
        } else {
            vec![Finding::missing_security_schemes(MISSING_SCHEMES_MESSAGE)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_missing_schemes() {
        let findings = SecuritySchemeAnalyzer::analyze(&Specification::new("3.0.0"));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].category, Category::MissingSecuritySchemes);
        assert_eq!(findings[0].message, MISSING_SCHEMES_MESSAGE);
        assert!(findings[0].location().is_none());
    }

    #[test]
    fn test_declared_schemes() {
        let spec = Specification::new("3.0.0").with_security_scheme("bearerAuth");
        assert!(SecuritySchemeAnalyzer::analyze(&spec).is_empty());
    }
}
