//! Findings, verdicts, and the per-invocation report.
//!
//! Every file-based checker produces exactly one `Report`. Findings are
//! accumulated in input order; the verdict is computed once, after the whole
//! input has been examined.

use serde::{Deserialize, Serialize};

/// How much a finding matters to the overall verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks downstream use of the input.
    Error,
    /// Advisory for the dataset verifier; blocking for the policy linter.
    Warning,
    /// Purely informational. Never affects the verdict.
    Info,
}

impl Severity {
    /// The upper-case tag printed at the start of each finding line.
    pub fn tag(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        }
    }
}

/// A single problem (or notice) found in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    /// Stable identifier of the rule that produced this finding.
    pub rule_id: String,
    /// 1-indexed physical line, for line-oriented inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub message: String,
}

impl Finding {
    pub fn error(rule_id: &str, line: Option<usize>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, rule_id, line, message)
    }

    pub fn warning(rule_id: &str, line: Option<usize>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, rule_id, line, message)
    }

    pub fn info(rule_id: &str, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, rule_id, None, message)
    }

    fn new(severity: Severity, rule_id: &str, line: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            severity,
            rule_id: rule_id.to_string(),
            line,
            message: message.into(),
        }
    }
}

/// The overall outcome of one invocation.
///
/// Deliberately tri-state: a dataset with only warnings is usable, but the
/// caller must be able to tell it apart from a clean one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Passed,
    PassedWithWarnings,
    Failed,
}

impl Verdict {
    /// Errors fail; warnings alone degrade the pass.
    pub fn from_counts(errors: usize, warnings: usize) -> Self {
        match (errors, warnings) {
            (0, 0) => Verdict::Passed,
            (0, _) => Verdict::PassedWithWarnings,
            _ => Verdict::Failed,
        }
    }

    /// Any warning fails.
    pub fn strict(warnings: usize) -> Self {
        if warnings == 0 {
            Verdict::Passed
        } else {
            Verdict::Failed
        }
    }

    /// Process exit status for this verdict.
    pub fn exit_code(&self) -> i32 {
        match self {
            Verdict::Passed | Verdict::PassedWithWarnings => 0,
            Verdict::Failed => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Passed => "PASSED",
            Verdict::PassedWithWarnings => "PASSED WITH WARNINGS",
            Verdict::Failed => "FAILED",
        }
    }
}

/// Everything one checker learned about one input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// What was checked, usually the file path.
    pub subject: String,
    /// Non-blank lines for datasets, statements for policies.
    pub total_items: usize,
    pub findings: Vec<Finding>,
    /// Lowercase hex SHA-256 of the input, when the checker computes one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    pub verdict: Verdict,
}

impl Report {
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn info_count(&self) -> usize {
        self.count(Severity::Info)
    }

    fn count(&self, severity: Severity) -> usize {
        self.findings.iter().filter(|f| f.severity == severity).count()
    }
}
