mod console;
mod export;

pub use console::{ConsoleReporter, NO_ISSUES_LINE, SUMMARY_LINE};
pub use export::{ErrorReport, JsonExporter, JsonReport, TOOL_NAME};
