use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::loader::SpecFormat;

#[derive(Parser)]
#[command(name = "specaudit")]
#[command(version, about = "OWASP API Top-10 static analyzer for OpenAPI specifications")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a specification and report findings
    Analyze {
        spec: PathBuf,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        #[arg(long, value_enum, default_value_t = SpecFormat::Auto)]
        spec_format: SpecFormat,

        /// Write the report, in the selected format, to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Exit with status 2 when any finding is reported
        #[arg(long)]
        fail_on_issues: bool,
    },

    /// Print the loaded specification model
    Parse {
        spec: PathBuf,

        #[arg(long, value_enum, default_value_t = SpecFormat::Auto)]
        spec_format: SpecFormat,
    },

    /// List the rules the engine runs, in order
    Rules,

    /// Serve the analyzer over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
