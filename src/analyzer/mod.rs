mod endpoint_auth;
mod engine;
pub mod policy;
mod rule;
mod security_schemes;
mod sensitive_fields;

pub use endpoint_auth::{
    CONSENT_EXPLANATION, EndpointAuthAnalyzer, GENERIC_EXPLANATION, INTERNAL_EXPLANATION,
};
pub use engine::RuleEngine;
pub use rule::Rule;
pub use security_schemes::{MISSING_SCHEMES_MESSAGE, SecuritySchemeAnalyzer};
pub use sensitive_fields::SensitiveFieldAnalyzer;
