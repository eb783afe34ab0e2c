//! evalguard: pre-flight checks for Amazon Bedrock evaluation jobs.
//!
//! Three independent checks, each run once per invocation.
//!
//! Usage:
//!   evalguard validate-input region us-east-1
//!   evalguard verify-dataset prompts.jsonl
//!   evalguard lint-policy role-policy.json
//!   evalguard --config evalguard.toml --json lint-policy role-policy.json

mod output;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use evalguard_contracts::{
    error::{GuardError, GuardResult},
    report::Report,
};
use evalguard_core::{GuardConfig, Inspector};
use evalguard_dataset::DatasetVerifier;
use evalguard_iam::PolicyLinter;

use crate::output::InputOutcome;

// ── CLI definition ────────────────────────────────────────────────────────────

/// evalguard: argument, dataset, and IAM policy checks for Bedrock
/// evaluation jobs.
#[derive(Parser)]
#[command(
    name = "evalguard",
    version,
    about = "Pre-flight checks for Amazon Bedrock evaluation jobs",
    long_about = "Validates AWS CLI arguments, verifies JSONL evaluation datasets,\n\
                  and lints the IAM policies attached to evaluation job roles."
)]
struct Cli {
    /// TOML file overriding the built-in markers and action lists.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print machine-readable JSON on stdout.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check one argument against its category's pattern.
    ValidateInput {
        /// region, bucket_name, role_name, job_name, account_id, or model_id.
        category: String,
        value: String,
    },
    /// Verify a JSONL evaluation dataset and print its SHA-256.
    VerifyDataset {
        path: PathBuf,
    },
    /// Lint an IAM policy document for risky grants.
    LintPolicy {
        path: PathBuf,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Logs go to stderr so stdout stays parseable. Per-finding events are
    // debug level; the findings themselves are printed below.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Command::ValidateInput { category, value } => run_validate_input(category, value, cli.json),
        Command::VerifyDataset { path } => {
            run_inspection(cli.config.as_deref(), path, cli.json, Tool::Dataset)
        }
        Command::LintPolicy { path } => {
            run_inspection(cli.config.as_deref(), path, cli.json, Tool::Policy)
        }
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn run_validate_input(category: &str, value: &str, json: bool) -> GuardResult<i32> {
    let result = evalguard_input::validate_named(category, value);

    if json {
        let outcome = InputOutcome {
            category,
            value,
            valid: result.is_ok(),
            message: result.as_ref().err().map(|e| e.to_string()),
        };
        output::print_json(&outcome).map_err(json_error)?;
        return Ok(if result.is_ok() { 0 } else { 1 });
    }

    result?;
    println!("OK: {category} '{value}' is valid");
    Ok(0)
}

#[derive(Clone, Copy)]
enum Tool {
    Dataset,
    Policy,
}

fn run_inspection(config: Option<&Path>, path: &Path, json: bool, tool: Tool) -> GuardResult<i32> {
    let config = GuardConfig::load(config)?;

    let inspector: Box<dyn Inspector> = match tool {
        Tool::Dataset => Box::new(DatasetVerifier::new(config.dataset)),
        Tool::Policy => Box::new(PolicyLinter::new(config.iam)),
    };

    let report: Report = inspector.inspect(path)?;
    tracing::info!(
        inspector = inspector.name(),
        verdict = report.verdict.label(),
        "inspection finished"
    );

    if json {
        output::print_json(&report).map_err(json_error)?;
    } else {
        output::print_findings(&report);
        match tool {
            Tool::Dataset => output::print_dataset_summary(&report),
            Tool::Policy => output::print_policy_summary(&report),
        }
    }

    Ok(report.verdict.exit_code())
}

fn json_error(e: serde_json::Error) -> GuardError {
    GuardError::Io {
        path: "<stdout>".to_string(),
        reason: e.to_string(),
    }
}
