//! IAM policy linter.
//!
//! `PolicyLinter` implements the `Inspector` trait from `evalguard-core`.
//!
//! Evaluation:
//!
//! 1. Parse the document as JSON; failure is fatal (`InvalidJson`).
//! 2. Read it as a policy; a wrongly shaped statement is fatal
//!    (`InvalidPolicy`).
//! 3. Run every `RiskCheck`. Checks only warn.
//! 4. Add an informational note when the policy has no `Deny` statement.
//!
//! Any warning fails the policy. Informational notes never do.

use std::path::Path;

use tracing::{debug, info};

use evalguard_contracts::{
    error::{GuardError, GuardResult},
    report::{Finding, Report, Verdict},
};
use evalguard_core::{IamConfig, Inspector};

use crate::{
    check::{RiskCheck, RULE_NO_DENY_STATEMENT},
    document::{Effect, PolicyDocument},
};

/// Lints IAM policies attached to evaluation job roles.
#[derive(Debug)]
pub struct PolicyLinter {
    config: IamConfig,
    checks: Vec<RiskCheck>,
}

impl PolicyLinter {
    /// A linter running every built-in check.
    pub fn new(config: IamConfig) -> Self {
        Self {
            config,
            checks: RiskCheck::ALL.to_vec(),
        }
    }

    /// Lint policy JSON held in memory. `subject` labels the report and any
    /// error.
    pub fn lint_str(&self, subject: &str, text: &str) -> GuardResult<Report> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| GuardError::InvalidJson {
                path: subject.to_string(),
                reason: e.to_string(),
            })?;

        let document: PolicyDocument =
            serde_json::from_value(value).map_err(|e| GuardError::InvalidPolicy {
                path: subject.to_string(),
                reason: format!(
                    "Statement, Action, and Resource must each be a single value or a list ({e})"
                ),
            })?;

        Ok(self.lint_document(subject, &document))
    }

    pub fn lint_document(&self, subject: &str, document: &PolicyDocument) -> Report {
        let statements = document.statements();
        debug!(
            subject,
            version = document.version.as_deref().unwrap_or("unspecified"),
            statements = statements.len(),
            "linting policy"
        );

        let mut findings: Vec<Finding> = Vec::new();
        for check in &self.checks {
            for finding in check.evaluate(statements, &self.config) {
                debug!(
                    subject,
                    rule_id = %finding.rule_id,
                    message = %finding.message,
                    "policy risk"
                );
                findings.push(finding);
            }
        }

        if !statements.iter().any(|s| s.effect == Effect::Deny) {
            findings.push(Finding::info(
                RULE_NO_DENY_STATEMENT,
                "policy has no Deny statements; consider explicit denies for destructive actions",
            ));
        }

        let mut report = Report {
            subject: subject.to_string(),
            total_items: statements.len(),
            findings,
            checksum: None,
            verdict: Verdict::Passed,
        };
        report.verdict = Verdict::strict(report.warning_count());
        report
    }
}

impl Default for PolicyLinter {
    fn default() -> Self {
        Self::new(IamConfig::default())
    }
}

impl Inspector for PolicyLinter {
    fn name(&self) -> &'static str {
        "policy"
    }

    fn inspect(&self, path: &Path) -> GuardResult<Report> {
        let subject = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => GuardError::FileNotFound {
                path: subject.clone(),
            },
            _ => GuardError::Io {
                path: subject.clone(),
                reason: e.to_string(),
            },
        })?;

        info!(path = %subject, "linting IAM policy");
        self.lint_str(&subject, &text)
    }
}
