use anyhow::Result;
use clap::Parser;
use classcheck::cli::{Cli, Commands, OutputFormat};
use classcheck::config::CheckConfig;
use classcheck::core::ast::SourceUnit;
use classcheck::io::{create_writer, CheckReport};
use classcheck::run_checks;
use std::path::{Path, PathBuf};
use std::process;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            class,
            config,
            format,
            output,
        } => handle_check(&class, &config, format, output),
        Commands::PrintSpec { config } => handle_print_spec(&config),
    }
}

fn handle_check(
    class_path: &Path,
    config_path: &Path,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = CheckConfig::load(config_path)?;
    let checks = config.build_checks()?;

    let text = std::fs::read_to_string(class_path)?;
    let unit: SourceUnit = serde_json::from_str(&text)?;

    let diagnostics = run_checks(&checks, &unit);
    let report = CheckReport {
        class: unit.class.name.clone(),
        diagnostics,
    };

    let mut writer = create_writer(format.into(), output.as_deref())?;
    writer.write_report(&report)?;

    if report.has_violations() {
        process::exit(1);
    }
    Ok(())
}

fn handle_print_spec(config_path: &Path) -> Result<()> {
    let config = CheckConfig::load(config_path)?;

    if let Some(fields) = &config.fields {
        for field in classcheck::parse_fields(&fields.spec)?.values() {
            println!("field: {field}");
        }
    }
    if let Some(methods) = &config.methods {
        for overloads in classcheck::parse_methods(&methods.spec)?.values() {
            for method in overloads {
                println!("method: {method}");
            }
        }
    }
    Ok(())
}
