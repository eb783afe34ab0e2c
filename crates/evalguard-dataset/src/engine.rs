//! JSONL dataset verifier.
//!
//! `DatasetVerifier` implements the `Inspector` trait from `evalguard-core`.
//! A run walks the file once:
//!
//! 1. **Parse**: each non-blank line must be UTF-8 JSON. A line that fails
//!    gets one error and no further checks.
//! 2. **Rules**: every `LineRule` in the table is evaluated in order. All
//!    findings are collected so the caller sees the whole file in one pass.
//!
//! The checksum is taken over the raw bytes after the walk.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use evalguard_contracts::{
    error::{GuardError, GuardResult},
    report::{Finding, Report, Verdict},
};
use evalguard_core::{DatasetConfig, Inspector};

use crate::{
    checksum::sha256_hex,
    record::RecordView,
    rule::{LineRule, RULE_JSON_PARSE},
};

/// Checks evaluation datasets before they are uploaded.
pub struct DatasetVerifier {
    config: DatasetConfig,
    rules: Vec<LineRule>,
}

impl DatasetVerifier {
    /// A verifier running the standard rule table.
    pub fn new(config: DatasetConfig) -> Self {
        Self::with_rules(config, LineRule::default_table())
    }

    pub fn with_rules(config: DatasetConfig, rules: Vec<LineRule>) -> Self {
        Self { config, rules }
    }

    /// Verify an in-memory dataset. `subject` only labels the report.
    pub fn verify_bytes(&self, subject: &str, bytes: &[u8]) -> Report {
        let mut findings: Vec<Finding> = Vec::new();
        let mut total_items = 0usize;

        for (idx, raw) in bytes.split(|b| *b == b'\n').enumerate() {
            let line = idx + 1;
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);

            if raw.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            total_items += 1;

            let value = match parse_line(raw) {
                Ok(v) => v,
                Err(message) => {
                    debug!(subject, line, %message, "unparseable dataset line");
                    findings.push(Finding::error(RULE_JSON_PARSE, Some(line), message));
                    continue;
                }
            };

            let record = RecordView::new(&value);
            for rule in &self.rules {
                if let Some(finding) = rule.evaluate(&record, line, &self.config) {
                    debug!(
                        subject,
                        line,
                        rule_id = %finding.rule_id,
                        message = %finding.message,
                        "dataset rule finding"
                    );
                    findings.push(finding);
                }
            }
        }

        let checksum = sha256_hex(bytes);
        let mut report = Report {
            subject: subject.to_string(),
            total_items,
            findings,
            checksum: Some(checksum),
            verdict: Verdict::Passed,
        };
        report.verdict = Verdict::from_counts(report.error_count(), report.warning_count());

        debug!(
            subject,
            total_lines = report.total_items,
            errors = report.error_count(),
            warnings = report.warning_count(),
            verdict = report.verdict.label(),
            "dataset verification complete"
        );

        report
    }
}

impl Default for DatasetVerifier {
    fn default() -> Self {
        Self::new(DatasetConfig::default())
    }
}

impl Inspector for DatasetVerifier {
    fn name(&self) -> &'static str {
        "dataset"
    }

    /// A missing file is fatal. Everything past the read is a finding.
    fn inspect(&self, path: &Path) -> GuardResult<Report> {
        let subject = path.display().to_string();
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => GuardError::FileNotFound {
                path: subject.clone(),
            },
            _ => GuardError::Io {
                path: subject.clone(),
                reason: e.to_string(),
            },
        })?;

        info!(path = %subject, bytes = bytes.len(), "verifying dataset");
        Ok(self.verify_bytes(&subject, &bytes))
    }
}

fn parse_line(raw: &[u8]) -> Result<Value, String> {
    let text = std::str::from_utf8(raw).map_err(|e| format!("line is not valid UTF-8: {e}"))?;
    serde_json::from_str(text).map_err(|e| format!("invalid JSON: {e}"))
}
