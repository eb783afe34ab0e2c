//! Error types shared by every evalguard checker.
//!
//! Only fatal conditions are errors. Line- and statement-level problems are
//! reported as `Finding`s inside a `Report` and never surface here.

use thiserror::Error;

/// The unified fatal error type for evalguard.
#[derive(Debug, Error)]
pub enum GuardError {
    /// The input file does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// The input file exists but could not be read.
    #[error("failed to read '{path}': {reason}")]
    Io { path: String, reason: String },

    /// The top-level document is not valid JSON.
    #[error("invalid JSON in '{path}': {reason}")]
    InvalidJson { path: String, reason: String },

    /// The document is valid JSON but not shaped like an IAM policy.
    #[error("invalid IAM policy in '{path}': {reason}")]
    InvalidPolicy { path: String, reason: String },

    /// A CLI argument does not match its category's pattern.
    #[error("invalid {category} '{value}'. Expected pattern: {pattern} (e.g. {example})")]
    PatternMismatch {
        category: String,
        value: String,
        pattern: String,
        example: String,
    },

    /// The requested validation category does not exist.
    #[error("unknown category '{category}'. Valid categories: {valid}")]
    UnknownCategory { category: String, valid: String },

    /// The configuration file is missing, unreadable, or malformed.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

/// Convenience alias used throughout the evalguard crates.
pub type GuardResult<T> = Result<T, GuardError>;
