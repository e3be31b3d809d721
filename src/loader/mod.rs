mod error;
mod format;
mod openapi;

pub use error::LoadError;
pub use format::SpecFormat;
pub use openapi::SpecLoader;
