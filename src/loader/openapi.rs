use serde::Deserialize;
use serde::de::IgnoredAny;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use super::{LoadError, SpecFormat};
use crate::models::{
    HttpMethod, Operation, PathItem, PropertyDescriptor, SchemaDefinition, SecurityRequirement,
    Specification,
};

/// Builds a [`Specification`] from OpenAPI 3.x or Swagger 2.0 documents.
///
/// Loading is all-or-nothing: a document either yields a complete model or a
/// [`LoadError`]. `$ref`s are not followed.
pub struct SpecLoader;

impl SpecLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_file(&self, path: &Path, format: SpecFormat) -> Result<Specification, LoadError> {
        let bytes = fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let format = match format {
            SpecFormat::Auto => SpecFormat::from_path(path),
            explicit => explicit,
        };

        info!(file = %path.display(), %format, "Loading specification");
        self.parse(&bytes, format)
    }

    pub fn parse(&self, bytes: &[u8], format: SpecFormat) -> Result<Specification, LoadError> {
        let content = std::str::from_utf8(bytes)?;
        if content.trim().is_empty() {
            return Err(LoadError::Empty);
        }

        let document: RawDocument = match format.resolve(content) {
            SpecFormat::Json => serde_json::from_str(content)?,
            _ => serde_yaml::from_str(content)?,
        };

        let spec = match document.version() {
            Some(DocumentVersion::V3(version)) => self.build_openapi_v3(version, document),
            Some(DocumentVersion::V2(version)) => self.build_swagger_v2(version, document),
            None => return Err(LoadError::UnknownVersion),
        };

        debug!(
            version = %spec.version,
            paths = spec.paths.len(),
            operations = spec.operation_count(),
            schemas = spec.schemas.len(),
            security_schemes = spec.security_schemes.len(),
            "Specification loaded"
        );

        Ok(spec)
    }

    fn build_openapi_v3(&self, version: String, document: RawDocument) -> Specification {
        let components = document.components.unwrap_or_default();
        Specification {
            version,
            security_schemes: scheme_names(components.security_schemes),
            global_security: convert_requirements(document.security).unwrap_or_default(),
            paths: convert_paths(document.paths),
            schemas: convert_schemas(components.schemas),
        }
    }

    fn build_swagger_v2(&self, version: String, document: RawDocument) -> Specification {
        Specification {
            version,
            security_schemes: scheme_names(document.security_definitions),
            global_security: convert_requirements(document.security).unwrap_or_default(),
            paths: convert_paths(document.paths),
            schemas: convert_schemas(document.definitions),
        }
    }
}

impl Default for SpecLoader {
    fn default() -> Self {
        Self::new()
    }
}

enum DocumentVersion {
    V3(String),
    V2(String),
}

#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    openapi: Option<Value>,
    #[serde(default)]
    swagger: Option<Value>,
    #[serde(default)]
    paths: Option<BTreeMap<String, Option<RawPathItem>>>,
    #[serde(default)]
    components: Option<RawComponents>,
    #[serde(default)]
    security: Option<Vec<RawRequirement>>,
    #[serde(default, rename = "securityDefinitions")]
    security_definitions: Option<BTreeMap<String, IgnoredAny>>,
    #[serde(default)]
    definitions: Option<BTreeMap<String, Value>>,
}

impl RawDocument {
    fn version(&self) -> Option<DocumentVersion> {
        if let Some(v) = &self.openapi {
            Some(DocumentVersion::V3(version_text(v)))
        } else {
            self.swagger
                .as_ref()
                .map(|v| DocumentVersion::V2(version_text(v)))
        }
    }
}

#[derive(Deserialize, Default)]
struct RawComponents {
    #[serde(default, rename = "securitySchemes")]
    security_schemes: Option<BTreeMap<String, IgnoredAny>>,
    #[serde(default)]
    schemas: Option<BTreeMap<String, Value>>,
}

/// Only the seven supported method keys are read; `parameters`, `summary`,
/// `trace`, `$ref` and vendor extensions fall through to serde's ignore.
#[derive(Deserialize, Default)]
struct RawPathItem {
    get: Option<RawOperation>,
    post: Option<RawOperation>,
    put: Option<RawOperation>,
    patch: Option<RawOperation>,
    delete: Option<RawOperation>,
    head: Option<RawOperation>,
    options: Option<RawOperation>,
}

impl RawPathItem {
    fn into_operations(self) -> Vec<(HttpMethod, RawOperation)> {
        [
            (HttpMethod::Get, self.get),
            (HttpMethod::Post, self.post),
            (HttpMethod::Put, self.put),
            (HttpMethod::Patch, self.patch),
            (HttpMethod::Delete, self.delete),
            (HttpMethod::Head, self.head),
            (HttpMethod::Options, self.options),
        ]
        .into_iter()
        .filter_map(|(method, op)| op.map(|op| (method, op)))
        .collect()
    }
}

#[derive(Deserialize, Default)]
struct RawOperation {
    #[serde(default)]
    security: Option<Vec<RawRequirement>>,
}

type RawRequirement = BTreeMap<String, IgnoredAny>;

fn version_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn scheme_names(schemes: Option<BTreeMap<String, IgnoredAny>>) -> BTreeSet<String> {
    schemes
        .map(|s| s.into_keys().collect())
        .unwrap_or_default()
}

fn convert_requirements(raw: Option<Vec<RawRequirement>>) -> Option<Vec<SecurityRequirement>> {
    raw.map(|requirements| {
        requirements
            .into_iter()
            .map(|req| SecurityRequirement::new(req.into_keys()))
            .collect()
    })
}

fn convert_paths(
    raw: Option<BTreeMap<String, Option<RawPathItem>>>,
) -> BTreeMap<String, PathItem> {
    raw.unwrap_or_default()
        .into_iter()
        .map(|(path, item)| {
            let mut path_item = PathItem::new(path.clone());
            for (method, op) in item.unwrap_or_default().into_operations() {
                path_item.operations.insert(
                    method,
                    Operation {
                        method,
                        security: convert_requirements(op.security),
                    },
                );
            }
            (path, path_item)
        })
        .collect()
}

/// Schema values stay untyped: OpenAPI 3.1 allows boolean schemas, and
/// only object schemas carry `properties`.
fn convert_schemas(raw: Option<BTreeMap<String, Value>>) -> BTreeMap<String, SchemaDefinition> {
    raw.unwrap_or_default()
        .into_iter()
        .map(|(name, schema)| {
            let properties = schema
                .get("properties")
                .and_then(Value::as_object)
                .map(|props| {
                    props
                        .iter()
                        .map(|(prop, value)| {
                            let type_name = value
                                .get("type")
                                .and_then(Value::as_str)
                                .map(str::to_string);
                            (prop.clone(), PropertyDescriptor { type_name })
                        })
                        .collect()
                })
                .unwrap_or_default();
            let definition = SchemaDefinition {
                name: name.clone(),
                properties,
            };
            (name, definition)
        })
        .collect()
}
