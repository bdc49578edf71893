mod cli;
mod config;
mod error;
mod ingest;
mod logging;
mod output;
mod report;
mod scoring;
mod shortlist;
mod types;

use crate::error::{Result, ScoutError};
use crate::output::manifest::RunManifest;
use crate::output::writer::{self, Artifact};
use chrono::Utc;
use clap::Parser;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const CONFIG_FAILURE: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run(cli: cli::Cli) -> Result<i32> {
    match cli.command {
        cli::Commands::Score(cmd) => {
            let loaded = config::load_config(&cmd.config.config, cmd.config.overlay.as_deref())?;
            let candidates = ingest::load_candidates(&cmd.candidates)?;
            let has_duplicates = !ingest::duplicate_ids(&candidates).is_empty();

            let shortlist = shortlist::assemble(&candidates, &loaded, Utc::now());

            if cmd.stdout {
                let output_format = match cmd.format {
                    cli::ReportFormat::Json => report::OutputFormat::Json,
                    cli::ReportFormat::Md => report::OutputFormat::Md,
                };
                println!("{}", report::render(&shortlist, output_format)?);
                eprintln!(
                    "Shortlist generated with {} properties.",
                    shortlist.entries.len()
                );
            } else {
                let markdown = report::render(&shortlist, report::OutputFormat::Md)?;
                let json = report::render(&shortlist, report::OutputFormat::Json)?;
                let manifest = RunManifest::new(
                    &shortlist,
                    &std::fs::read(&cmd.candidates)?,
                    &serde_json::to_vec(&loaded)?,
                    vec![
                        writer::REPORT_FILE.to_string(),
                        writer::SHORTLIST_FILE.to_string(),
                    ],
                );
                let written = writer::publish(
                    &cmd.out_dir,
                    &[
                        Artifact::new(writer::REPORT_FILE, markdown),
                        Artifact::new(writer::SHORTLIST_FILE, json),
                        Artifact::new(
                            writer::MANIFEST_FILE,
                            serde_json::to_string_pretty(&manifest)?,
                        ),
                    ],
                )?;
                tracing::info!(files = written.len(), out_dir = %cmd.out_dir.display(), "run published");
                println!(
                    "Shortlist generated with {} properties.",
                    shortlist.entries.len()
                );
                println!(
                    "report: {}",
                    cmd.out_dir.join(writer::REPORT_FILE).display()
                );
            }

            let mut code = exit_code::SUCCESS;
            if has_duplicates {
                eprintln!("warning: candidate ids are not unique");
                code = exit_code::WARNINGS;
            }
            if shortlist.entries.is_empty() {
                eprintln!(
                    "warning: no properties scored at or above {}",
                    shortlist.threshold
                );
                code = exit_code::WARNINGS;
            }
            Ok(code)
        }
        cli::Commands::Explain(cmd) => {
            let loaded = config::load_config(&cmd.config.config, cmd.config.overlay.as_deref())?;
            let candidates = ingest::load_candidates(&cmd.candidates)?;
            let candidate = candidates
                .iter()
                .find(|candidate| candidate.id == cmd.id)
                .ok_or_else(|| ScoutError::CandidateNotFound(cmd.id.clone()))?;

            let shortlist =
                shortlist::assemble(std::slice::from_ref(candidate), &loaded, Utc::now());
            for evaluation in &shortlist.evaluations {
                print!("{}", report::md::explain(evaluation, shortlist.threshold));
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Normalize(cmd) => {
            if !cmd.response.exists() {
                return Err(ScoutError::PathNotFound(cmd.response.display().to_string()));
            }
            let content = std::fs::read_to_string(&cmd.response)?;
            let response = ingest::reso::parse_response(&content)?;
            let candidates = ingest::reso::normalize_response(&response, Utc::now());
            let skipped = response.value.len() - candidates.len();

            writer::write_atomic(&cmd.out, &serde_json::to_string_pretty(&candidates)?)?;
            println!(
                "Ingested {} properties to {}",
                candidates.len(),
                cmd.out.display()
            );

            if skipped > 0 {
                eprintln!("warning: skipped {skipped} record(s) without ListingKey");
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Check(cmd) => {
            let loaded = config::load_config(&cmd.config.config, cmd.config.overlay.as_deref())?;
            print_config_summary(&cmd.config.config, &loaded);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn print_config_summary(path: &Path, loaded: &types::config::ScoringConfig) {
    println!("config ok: {}", path.display());
    for (dimension, weight) in types::scoring::Dimension::ORDER
        .iter()
        .zip(loaded.dimension_weights())
    {
        println!("- {}: weight {:.2}", dimension.as_str(), weight);
    }
    if loaded.red_flags.is_empty() {
        println!("- red_flags: none");
    } else {
        let flags = loaded
            .red_flags
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>();
        println!("- red_flags: {}", flags.join(", "));
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
            if e.is_config_error() {
                std::process::exit(exit_code::CONFIG_FAILURE);
            }
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
