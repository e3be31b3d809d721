use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use specaudit::cli::{Cli, Commands, OutputFormat};
use specaudit::reporter::{ErrorReport, JsonExporter};
use specaudit::{ConsoleReporter, JsonReport, Rule, RuleEngine, SpecFormat, SpecLoader};

const EXIT_ISSUES: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Analyze {
            spec,
            format,
            spec_format,
            output,
            fail_on_issues,
        } => match analyze(&spec, format, spec_format, output.as_deref()) {
            Ok(issues) if fail_on_issues && issues > 0 => ExitCode::from(EXIT_ISSUES),
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                report_error(&e, format);
                ExitCode::FAILURE
            }
        },
        Commands::Parse { spec, spec_format } => finish(parse(&spec, spec_format)),
        Commands::Rules => {
            print_rules();
            ExitCode::SUCCESS
        }
        Commands::Serve { host, port } => {
            finish(specaudit::server::serve(&host, port).await)
        }
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing(verbose: bool) {
    let default = if verbose { "specaudit=debug" } else { "specaudit=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn finish(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e, OutputFormat::Text);
            ExitCode::FAILURE
        }
    }
}

fn report_error(error: &anyhow::Error, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let report = ErrorReport::new(format!("{:#}", error));
            match JsonExporter::render(&report) {
                Ok(json) => println!("{}", json),
                Err(_) => eprintln!("{}: {:#}", "Error".red().bold(), error),
            }
        }
        OutputFormat::Text => eprintln!("{}: {:#}", "Error".red().bold(), error),
    }
}

fn analyze(
    spec_path: &Path,
    format: OutputFormat,
    spec_format: SpecFormat,
    output: Option<&Path>,
) -> Result<usize> {
    let spec = SpecLoader::new().parse_file(spec_path, spec_format)?;
    let findings = RuleEngine::new().run(&spec);

    match format {
        OutputFormat::Text => {
            let reporter = ConsoleReporter::new();
            match output {
                Some(path) => {
                    reporter.export(&findings, path)?;
                    eprintln!("{} {}", "Report written to".green(), path.display());
                }
                None => {
                    reporter.print_report(&findings);
                    reporter.print_summary(&findings);
                }
            }
        }
        OutputFormat::Json => {
            let report = JsonReport::from_findings(spec_path.display().to_string(), &findings);
            match output {
                Some(path) => {
                    JsonExporter::export(&report, path)?;
                    eprintln!("{} {}", "Report written to".green(), path.display());
                }
                None => println!("{}", JsonExporter::render(&report)?),
            }
        }
    }

    Ok(findings.len())
}

fn parse(spec_path: &Path, spec_format: SpecFormat) -> Result<()> {
    let spec = SpecLoader::new().parse_file(spec_path, spec_format)?;

    println!("{} {}", "Version:".bold(), spec.version);

    let schemes: Vec<_> = spec.security_schemes.iter().cloned().collect();
    println!(
        "{} {}",
        "Security schemes:".bold(),
        if schemes.is_empty() {
            "none".red().to_string()
        } else {
            schemes.join(", ")
        }
    );

    println!(
        "\n{} ({} operations)",
        "Operations".bold().underline(),
        spec.operation_count()
    );
    for (item, operation) in spec.operations() {
        let security = spec.effective_security(operation);
        let auth = if security.is_empty() {
            "public".yellow().to_string()
        } else {
            security
                .iter()
                .map(|req| req.schemes.join("+"))
                .collect::<Vec<_>>()
                .join(" | ")
        };
        println!("  {:7} {}  [{}]", operation.method, item.path, auth);
    }

    println!("\n{} ({})", "Schemas".bold().underline(), spec.schemas.len());
    for schema in spec.schemas.values() {
        println!("  {} ({} properties)", schema.name, schema.properties.len());
        for (name, property) in &schema.properties {
            println!(
                "    {}: {}",
                name,
                property.type_name.as_deref().unwrap_or("-")
            );
        }
    }

    Ok(())
}

fn print_rules() {
    for (index, rule) in RuleEngine::new().rules().iter().enumerate() {
        print_rule(index + 1, rule);
    }
}

fn print_rule(position: usize, rule: &Rule) {
    println!(
        "{}. {} [{}] {}",
        position,
        rule.id().bold(),
        rule.category().to_string().cyan(),
        rule.description()
    );
}
