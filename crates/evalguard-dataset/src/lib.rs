//! # evalguard-dataset
//!
//! Verification for JSONL evaluation datasets.
//!
//! This crate provides [`engine::DatasetVerifier`], which implements the
//! [`evalguard_core::Inspector`] trait. Each non-blank line is parsed as JSON
//! and run through the [`rule::LineRule`] table:
//!
//! - **Errors**: unparseable line, missing `prompt`, missing `modelResponses`.
//! - **Warnings**: `modelResponses` count other than one, boundary markers in
//!   any text field, control characters in prompt or responses.
//!
//! The report carries the SHA-256 of the whole file and a tri-state verdict.
//!
//! ```rust,ignore
//! use evalguard_core::Inspector;
//! use evalguard_dataset::DatasetVerifier;
//!
//! let report = DatasetVerifier::default().inspect(Path::new("prompts.jsonl"))?;
//! println!("{}", report.verdict.label());
//! ```

pub mod checksum;
pub mod engine;
pub mod record;
pub mod rule;

pub use checksum::sha256_hex;
pub use engine::DatasetVerifier;

// ── Tests ─────────────────────────────────────────────────────────────────────
