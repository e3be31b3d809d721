use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecFormat {
    /// Sniff the content: JSON when it opens with `{`, YAML otherwise
    #[default]
    Auto,
    Json,
    Yaml,
}

impl SpecFormat {
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => SpecFormat::Json,
            Some("yaml") | Some("yml") => SpecFormat::Yaml,
            _ => SpecFormat::Auto,
        }
    }

    /// Resolves `Auto` against the document text.
    pub fn resolve(self, content: &str) -> Self {
        match self {
            SpecFormat::Auto if content.trim_start().starts_with('{') => SpecFormat::Json,
            SpecFormat::Auto => SpecFormat::Yaml,
            explicit => explicit,
        }
    }
}

impl fmt::Display for SpecFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SpecFormat::Auto => "auto",
            SpecFormat::Json => "json",
            SpecFormat::Yaml => "yaml",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(SpecFormat::from_path(Path::new("api.json")), SpecFormat::Json);
        assert_eq!(SpecFormat::from_path(Path::new("api.YML")), SpecFormat::Yaml);
        assert_eq!(SpecFormat::from_path(Path::new("api.yaml")), SpecFormat::Yaml);
        assert_eq!(SpecFormat::from_path(Path::new("openapi")), SpecFormat::Auto);
    }

    #[test]
    fn test_resolve_auto() {
        assert_eq!(SpecFormat::Auto.resolve("  {\"openapi\": \"3.0.0\"}"), SpecFormat::Json);
        assert_eq!(SpecFormat::Auto.resolve("openapi: 3.0.0"), SpecFormat::Yaml);
        assert_eq!(SpecFormat::Yaml.resolve("{}"), SpecFormat::Yaml);
    }
}
