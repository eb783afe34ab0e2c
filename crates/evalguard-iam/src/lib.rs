//! # evalguard-iam
//!
//! A linter for the IAM policies that back Bedrock evaluation jobs.
//!
//! ## Overview
//!
//! This crate provides [`PolicyLinter`], which implements the
//! [`Inspector`](evalguard_core::Inspector) trait. Every `Allow` statement is
//! scanned for four independent risks:
//!
//! - `Resource: "*"`
//! - `Action: "*"` or a whole-service `service:*`
//! - a sensitive action (`sts:AssumeRole`, `bedrock:InvokeModel`) with no
//!   `Condition`
//! - a destructive S3 action
//!
//! Each risk is a warning and any warning fails the policy. A policy without
//! any `Deny` statement also gets an informational note, which never fails it.

pub mod check;
pub mod document;
pub mod engine;

pub use check::RiskCheck;
pub use document::{Effect, PolicyDocument, Statement};
pub use engine::PolicyLinter;

// ── Tests ─────────────────────────────────────────────────────────────────────
