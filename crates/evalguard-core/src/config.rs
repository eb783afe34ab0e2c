//! TOML configuration for the checkers.
//!
//! Every field has a built-in default, so running without a config file and
//! running with an empty one behave identically. A partial file overrides
//! only the keys it names.
//!
//! Example:
//! ```toml
//! [dataset]
//! boundary_markers = ["<<<BEGIN_UNTRUSTED_CONTENT>>>", "<<<END_UNTRUSTED_CONTENT>>>"]
//! expected_model_responses = 1
//!
//! [iam]
//! sensitive_actions = ["sts:AssumeRole", "bedrock:InvokeModel"]
//! dangerous_s3_actions = ["s3:*", "s3:DeleteBucket", "s3:PutBucketPolicy", "s3:DeleteObject"]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use evalguard_contracts::error::{GuardError, GuardResult};

/// Delimiters that separate trusted instructions from untrusted content in
/// evaluation prompts. Their presence inside dataset text is suspicious.
pub const DEFAULT_BOUNDARY_MARKERS: [&str; 2] =
    ["<<<BEGIN_UNTRUSTED_CONTENT>>>", "<<<END_UNTRUSTED_CONTENT>>>"];

/// Actions that must carry a `Condition` when allowed.
pub const DEFAULT_SENSITIVE_ACTIONS: [&str; 2] = ["sts:AssumeRole", "bedrock:InvokeModel"];

pub const DEFAULT_DANGEROUS_S3_ACTIONS: [&str; 4] =
    ["s3:*", "s3:DeleteBucket", "s3:PutBucketPolicy", "s3:DeleteObject"];

/// Settings for the dataset verifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub boundary_markers: Vec<String>,
    /// How many `modelResponses` entries each record should carry.
    pub expected_model_responses: usize,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            boundary_markers: DEFAULT_BOUNDARY_MARKERS.iter().map(|s| s.to_string()).collect(),
            expected_model_responses: 1,
        }
    }
}

/// Settings for the IAM policy linter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IamConfig {
    pub sensitive_actions: Vec<String>,
    pub dangerous_s3_actions: Vec<String>,
}

impl Default for IamConfig {
    fn default() -> Self {
        Self {
            sensitive_actions: DEFAULT_SENSITIVE_ACTIONS.iter().map(|s| s.to_string()).collect(),
            dangerous_s3_actions: DEFAULT_DANGEROUS_S3_ACTIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// The top-level structure deserialized from an evalguard TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    pub dataset: DatasetConfig,
    pub iam: IamConfig,
}

impl GuardConfig {
    /// Parse `s` as TOML.
    ///
    /// Returns `GuardError::ConfigError` if the TOML is malformed or a key
    /// has the wrong type.
    pub fn from_toml_str(s: &str) -> GuardResult<Self> {
        toml::from_str(s).map_err(|e| GuardError::ConfigError {
            reason: format!("failed to parse config TOML: {}", e),
        })
    }

    /// Read and parse the file at `path`.
    pub fn from_file(path: &Path) -> GuardResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| GuardError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        let config = Self::from_toml_str(&contents)?;
        debug!(path = %path.display(), "loaded configuration");
        if config.dataset.boundary_markers.is_empty() {
            warn!(path = %path.display(), "no boundary markers configured; marker check disabled");
        }
        Ok(config)
    }

    /// Load `path` when given, otherwise fall back to the built-in defaults.
    pub fn load(path: Option<&Path>) -> GuardResult<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }
}
