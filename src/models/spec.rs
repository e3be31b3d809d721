use std::collections::{BTreeMap, BTreeSet};

use super::HttpMethod;

/// In-memory view of an OpenAPI/Swagger document, reduced to what the rules inspect.
///
/// Paths, operations and schemas are iterated in key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Specification {
    pub version: String,
    pub security_schemes: BTreeSet<String>,
    pub global_security: Vec<SecurityRequirement>,
    pub paths: BTreeMap<String, PathItem>,
    pub schemas: BTreeMap<String, SchemaDefinition>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathItem {
    pub path: String,
    pub operations: BTreeMap<HttpMethod, Operation>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub method: HttpMethod,
    /// `None` inherits the document-level requirements; `Some(vec![])`
    /// explicitly opts the operation out of authentication.
    pub security: Option<Vec<SecurityRequirement>>,
}

/// One alternative of a `security` array. The rules only care whether the
/// enclosing sequence is empty; scheme names are kept for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityRequirement {
    pub schemes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaDefinition {
    pub name: String,
    pub properties: BTreeMap<String, PropertyDescriptor>,
}

/// Property payload. Types are not validated, only carried through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyDescriptor {
    pub type_name: Option<String>,
}

impl Specification {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Self::default()
        }
    }

    pub fn with_security_scheme(mut self, name: impl Into<String>) -> Self {
        self.security_schemes.insert(name.into());
        self
    }

    pub fn with_global_security(mut self, requirements: Vec<SecurityRequirement>) -> Self {
        self.global_security = requirements;
        self
    }

    pub fn with_operation(mut self, path: &str, operation: Operation) -> Self {
        self.paths
            .entry(path.to_string())
            .or_insert_with(|| PathItem::new(path))
            .operations
            .insert(operation.method, operation);
        self
    }

    pub fn with_schema(mut self, schema: SchemaDefinition) -> Self {
        self.schemas.insert(schema.name.clone(), schema);
        self
    }

    pub fn has_security_schemes(&self) -> bool {
        !self.security_schemes.is_empty()
    }

    /// Requirements that actually apply to `operation` after inheritance.
    pub fn effective_security<'a>(&'a self, operation: &'a Operation) -> &'a [SecurityRequirement] {
        operation
            .security
            .as_deref()
            .unwrap_or(self.global_security.as_slice())
    }

    pub fn operations(&self) -> impl Iterator<Item = (&PathItem, &Operation)> {
        self.paths
            .values()
            .flat_map(|item| item.operations.values().map(move |op| (item, op)))
    }

    pub fn operation_count(&self) -> usize {
        self.paths.values().map(|p| p.operations.len()).sum()
    }
}

impl PathItem {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            operations: BTreeMap::new(),
        }
    }
}

impl Operation {
    /// Operation that inherits the document-level security.
    pub fn inherited(method: HttpMethod) -> Self {
        Self {
            method,
            security: None,
        }
    }

    pub fn with_security(method: HttpMethod, security: Vec<SecurityRequirement>) -> Self {
        Self {
            method,
            security: Some(security),
        }
    }

    /// Operation declaring `security: []`.
    pub fn public(method: HttpMethod) -> Self {
        Self::with_security(method, Vec::new())
    }
}

impl SecurityRequirement {
    pub fn new<I, S>(schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            schemes: schemes.into_iter().map(Into::into).collect(),
        }
    }
}

impl SchemaDefinition {
    pub fn new<I, S>(name: impl Into<String>, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            properties: properties
                .into_iter()
                .map(|p| (p.into(), PropertyDescriptor::default()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bearer() -> Vec<SecurityRequirement> {
        vec![SecurityRequirement::new(["bearerAuth"])]
    }

    #[test]
    fn test_effective_security_inherits_global() {
        let spec = Specification::new("3.0.0").with_global_security(bearer());
        let op = Operation::inherited(HttpMethod::Get);
        assert_eq!(spec.effective_security(&op), bearer().as_slice());
    }

    #[test]
    fn test_effective_security_prefers_explicit_empty() {
        let spec = Specification::new("3.0.0").with_global_security(bearer());
        let op = Operation::public(HttpMethod::Get);
        assert!(spec.effective_security(&op).is_empty());
    }

    #[test]
    fn test_operations_are_ordered() {
        let spec = Specification::new("3.0.0")
            .with_operation("/b", Operation::inherited(HttpMethod::Delete))
            .with_operation("/b", Operation::inherited(HttpMethod::Get))
            .with_operation("/a", Operation::inherited(HttpMethod::Post));

        let order: Vec<_> = spec
            .operations()
            .map(|(item, op)| format!("{} {}", op.method, item.path))
            .collect();
        assert_eq!(order, vec!["POST /a", "GET /b", "DELETE /b"]);
        assert_eq!(spec.operation_count(), 3);
    }
}
