//! The seam between the CLI and the file-based checkers.
//!
//! The dataset verifier and the policy linter both read one file and produce
//! one `Report`. The binary drives them through `Inspector` so rendering and
//! exit-status handling live in one place.

use std::path::Path;

use evalguard_contracts::{error::GuardResult, report::Report};

/// A single-pass checker over one input file.
///
/// Implementations must be deterministic: the same file contents always
/// yield the same findings, in the same order, with the same verdict.
pub trait Inspector {
    /// Short name used in log lines and summaries.
    fn name(&self) -> &'static str;

    /// Examine the file at `path` to completion.
    ///
    /// Returns `Err` only for fatal conditions (missing file, unparseable
    /// top-level document). Everything else is a finding in the report.
    fn inspect(&self, path: &Path) -> GuardResult<Report>;
}
