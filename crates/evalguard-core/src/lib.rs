//! # evalguard-core
//!
//! What the checkers have in common:
//! - The `Inspector` trait the CLI drives file-based checkers through
//! - `GuardConfig`, the TOML configuration with built-in defaults

pub mod config;
pub mod traits;

pub use config::{DatasetConfig, GuardConfig, IamConfig};
pub use traits::Inspector;
