//! # evalguard-contracts
//!
//! Shared types for the evalguard checkers.
//!
//! All crates in the workspace import from here. No checking logic lives in
//! this crate, only data definitions, verdict arithmetic, and error types.

pub mod error;
pub mod report;

#[cfg(test)]
mod tests {
    use super::*;
    use error::GuardError;
    use report::{Finding, Report, Severity, Verdict};

    fn report_with(findings: Vec<Finding>, verdict: Verdict) -> Report {
        Report {
            subject: "test.jsonl".to_string(),
            total_items: 3,
            findings,
            checksum: None,
            verdict,
        }
    }

    // ── Verdict arithmetic ───────────────────────────────────────────────────

    #[test]
    fn verdict_from_counts_is_tri_state() {
        assert_eq!(Verdict::from_counts(0, 0), Verdict::Passed);
        assert_eq!(Verdict::from_counts(0, 4), Verdict::PassedWithWarnings);
        assert_eq!(Verdict::from_counts(1, 0), Verdict::Failed);
        assert_eq!(Verdict::from_counts(2, 7), Verdict::Failed);
    }

    #[test]
    fn strict_verdict_fails_on_any_warning() {
        assert_eq!(Verdict::strict(0), Verdict::Passed);
        assert_eq!(Verdict::strict(1), Verdict::Failed);
    }

    #[test]
    fn only_failed_exits_nonzero() {
        assert_eq!(Verdict::Passed.exit_code(), 0);
        assert_eq!(Verdict::PassedWithWarnings.exit_code(), 0);
        assert_eq!(Verdict::Failed.exit_code(), 1);
    }

    #[test]
    fn verdict_labels() {
        assert_eq!(Verdict::Passed.label(), "PASSED");
        assert_eq!(Verdict::PassedWithWarnings.label(), "PASSED WITH WARNINGS");
        assert_eq!(Verdict::Failed.label(), "FAILED");
    }

    // ── Report counts ────────────────────────────────────────────────────────

    #[test]
    fn report_counts_by_severity() {
        let report = report_with(
            vec![
                Finding::error("required-field", Some(1), "missing prompt"),
                Finding::warning("control-character", Some(2), "control chars"),
                Finding::warning("boundary-marker", Some(2), "marker"),
                Finding::info("no-deny-statement", "no Deny"),
            ],
            Verdict::Failed,
        );

        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 2);
        assert_eq!(report.info_count(), 1);
    }

    #[test]
    fn report_json_omits_absent_line_and_checksum() {
        let report = report_with(
            vec![Finding::info("no-deny-statement", "no Deny")],
            Verdict::Passed,
        );
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["verdict"], "passed");
        assert!(json.get("checksum").is_none());
        assert!(json["findings"][0].get("line").is_none());
        assert_eq!(json["findings"][0]["severity"], "info");
    }

    #[test]
    fn severity_tags() {
        assert_eq!(Severity::Error.tag(), "ERROR");
        assert_eq!(Severity::Warning.tag(), "WARNING");
        assert_eq!(Severity::Info.tag(), "INFO");
    }

    // ── GuardError display messages ──────────────────────────────────────────

    #[test]
    fn error_pattern_mismatch_display() {
        let err = GuardError::PatternMismatch {
            category: "region".to_string(),
            value: "US-EAST-1".to_string(),
            pattern: "^[a-z]{2}-[a-z]+-[0-9]+$".to_string(),
            example: "us-east-1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("invalid region 'US-EAST-1'"));
        assert!(msg.contains("^[a-z]{2}-[a-z]+-[0-9]+$"));
        assert!(msg.contains("e.g. us-east-1"));
    }

    #[test]
    fn error_file_not_found_display() {
        let err = GuardError::FileNotFound {
            path: "missing.jsonl".to_string(),
        };
        assert_eq!(err.to_string(), "file not found: missing.jsonl");
    }

    #[test]
    fn error_unknown_category_display() {
        let err = GuardError::UnknownCategory {
            category: "colour".to_string(),
            valid: "region, bucket_name".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("colour"));
        assert!(msg.contains("region, bucket_name"));
    }

    #[test]
    fn error_config_error_display() {
        let err = GuardError::ConfigError {
            reason: "bad toml".to_string(),
        };
        assert!(err.to_string().contains("configuration error"));
    }
}
