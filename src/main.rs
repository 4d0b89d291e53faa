mod assess;
mod cli;
mod config;
mod digest;
mod error;
mod logging;
mod report;
mod scoring;
mod types;
mod validate;

use crate::error::CadRiskError;
use crate::types::patient::PatientForm;
use clap::Parser;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const PARTIAL: i32 = 1;
    pub const INPUT_REJECTED: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn output_format(format: cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Text => report::OutputFormat::Text,
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn run(cli: cli::Cli) -> Result<i32, CadRiskError> {
    let root = std::env::current_dir()?;
    let loaded = config::load_config(&root)?;

    match cli.command {
        cli::Commands::Assess(cmd) => {
            let flags = PatientForm::from(cmd.form);
            let form = match &cmd.input {
                Some(path) => assess::read_form(path)?.overlay(flags),
                None => flags,
            };

            let report = assess::assess(&form, &loaded)?;
            let rendered = report::render(&report, output_format(cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Batch(cmd) => {
            let forms = assess::read_batch(&cmd.path)?;
            let entries = assess::assess_batch(&forms, &loaded)?;
            let rendered = report::render_batch(&entries, output_format(cmd.format))?;
            println!("{rendered}");

            let rejected = entries
                .iter()
                .filter(|entry| matches!(entry, report::BatchEntry::Rejected(_)))
                .count();
            if rejected > 0 {
                eprintln!("warning: {rejected} of {} records rejected", entries.len());
                Ok(exit_code::PARTIAL)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Rules(cmd) => {
            let rendered = report::render_rule(&loaded.rule(), output_format(cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_input_rejection() {
                exit_code::INPUT_REJECTED
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
