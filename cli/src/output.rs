//! Rendering of reports and input-validation outcomes.
//!
//! Findings go to stderr, summaries to stdout. With `--json` the whole
//! report is printed to stdout instead and nothing else is.

use serde::Serialize;

use evalguard_contracts::report::{Finding, Report, Verdict};

/// JSON shape for `validate-input`.
#[derive(Debug, Serialize)]
pub struct InputOutcome<'a> {
    pub category: &'a str,
    pub value: &'a str,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub fn print_json<T: Serialize>(data: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

pub fn finding_line(finding: &Finding) -> String {
    match finding.line {
        Some(line) => format!(
            "{}: line {}: {} [{}]",
            finding.severity.tag(),
            line,
            finding.message,
            finding.rule_id
        ),
        None => format!(
            "{}: {} [{}]",
            finding.severity.tag(),
            finding.message,
            finding.rule_id
        ),
    }
}

pub fn print_findings(report: &Report) {
    for finding in &report.findings {
        eprintln!("{}", finding_line(finding));
    }
}

pub fn print_dataset_summary(report: &Report) {
    println!("Dataset: {}", report.subject);
    println!("Total lines: {}", report.total_items);
    println!("Errors: {}", report.error_count());
    println!("Warnings: {}", report.warning_count());
    if let Some(checksum) = &report.checksum {
        println!("SHA-256: {checksum}");
    }
    println!("Result: {}", report.verdict.label());
}

pub fn print_policy_summary(report: &Report) {
    println!("Policy: {}", report.subject);
    println!("Statements: {}", report.total_items);
    match report.verdict {
        Verdict::Failed => println!(
            "Result: {} ({} warning(s))",
            report.verdict.label(),
            report.warning_count()
        ),
        _ => println!("Result: {} (no risky grants found)", report.verdict.label()),
    }
}
