mod finding;
mod method;
mod spec;

pub use finding::{Category, Finding};
pub use method::HttpMethod;
pub use spec::{
    Operation, PathItem, PropertyDescriptor, SchemaDefinition, SecurityRequirement, Specification,
};
