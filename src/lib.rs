pub mod analyzer;
pub mod cli;
pub mod loader;
pub mod models;
pub mod reporter;
pub mod server;

pub use analyzer::{Rule, RuleEngine};
pub use loader::{LoadError, SpecFormat, SpecLoader};
pub use models::{
    Category, Finding, HttpMethod, Operation, PathItem, SchemaDefinition, SecurityRequirement,
    Specification,
};
pub use reporter::{ConsoleReporter, JsonExporter, JsonReport};
