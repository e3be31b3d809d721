use serde::{Deserialize, Serialize};
use std::fmt;

use super::HttpMethod;

/// OWASP API Top-10 mapping of every check the engine performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "API1_MissingSecuritySchemes")]
    MissingSecuritySchemes,
    #[serde(rename = "API1_UnauthenticatedEndpoint")]
    UnauthenticatedEndpoint,
    #[serde(rename = "API3_SensitiveField")]
    SensitiveField,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::MissingSecuritySchemes,
        Category::UnauthenticatedEndpoint,
        Category::SensitiveField,
    ];

    /// Short OWASP identifier used as the message prefix.
    pub fn owasp_id(&self) -> &'static str {
        match self {
            Category::MissingSecuritySchemes | Category::UnauthenticatedEndpoint => "API1",
            Category::SensitiveField => "API3",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::MissingSecuritySchemes => "Missing Security Schemes",
            Category::UnauthenticatedEndpoint => "Unauthenticated Endpoint",
            Category::SensitiveField => "Sensitive Field",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::MissingSecuritySchemes => "API1_MissingSecuritySchemes",
            Category::UnauthenticatedEndpoint => "API1_UnauthenticatedEndpoint",
            Category::SensitiveField => "API3_SensitiveField",
        };
        write!(f, "{}", s)
    }
}

/// A single reported issue. `message` is final, rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<HttpMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    pub message: String,
}

impl Finding {
    pub fn missing_security_schemes(message: impl Into<String>) -> Self {
        Self {
            category: Category::MissingSecuritySchemes,
            method: None,
            path: None,
            schema_name: None,
            field_name: None,
            message: message.into(),
        }
    }

    pub fn unauthenticated_endpoint(method: HttpMethod, path: &str, explanation: &str) -> Self {
        let message = format!(
            "[{}] {} {} — {}",
            Category::UnauthenticatedEndpoint.owasp_id(),
            method,
            path,
            explanation
        );
        Self {
            category: Category::UnauthenticatedEndpoint,
            method: Some(method),
            path: Some(path.to_string()),
            schema_name: None,
            field_name: None,
            message,
        }
    }

    pub fn sensitive_field(schema_name: &str, field_name: &str) -> Self {
        let message = format!(
            "Schema '{}' contains a potentially sensitive field: '{}'",
            schema_name, field_name
        );
        Self {
            category: Category::SensitiveField,
            method: None,
            path: None,
            schema_name: Some(schema_name.to_string()),
            field_name: Some(field_name.to_string()),
            message,
        }
    }

    /// `METHOD /path`, `Schema.field`, or nothing for document-level findings.
    pub fn location(&self) -> Option<String> {
        match (&self.method, &self.path, &self.schema_name, &self.field_name) {
            (Some(method), Some(path), _, _) => Some(format!("{} {}", method, path)),
            (_, _, Some(schema), Some(field)) => Some(format!("{}.{}", schema, field)),
            _ => None,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
