//! The fixed table of argument categories and their patterns.
//!
//! Patterns are anchored and ASCII-only. They are compiled once on first use.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use evalguard_contracts::error::GuardError;

// ─── Cached regexes ─────────────────────────────────────────────────────────

static REGION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(InputCategory::Region.pattern()).unwrap());

static BUCKET_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(InputCategory::BucketName.pattern()).unwrap());

static ROLE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(InputCategory::RoleName.pattern()).unwrap());

static JOB_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(InputCategory::JobName.pattern()).unwrap());

static ACCOUNT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(InputCategory::AccountId.pattern()).unwrap());

static MODEL_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(InputCategory::ModelId.pattern()).unwrap());

/// One kind of AWS CLI argument the validator knows how to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputCategory {
    Region,
    BucketName,
    RoleName,
    JobName,
    AccountId,
    ModelId,
}

impl InputCategory {
    pub const ALL: [InputCategory; 6] = [
        InputCategory::Region,
        InputCategory::BucketName,
        InputCategory::RoleName,
        InputCategory::JobName,
        InputCategory::AccountId,
        InputCategory::ModelId,
    ];

    /// The name accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            InputCategory::Region => "region",
            InputCategory::BucketName => "bucket_name",
            InputCategory::RoleName => "role_name",
            InputCategory::JobName => "job_name",
            InputCategory::AccountId => "account_id",
            InputCategory::ModelId => "model_id",
        }
    }

    pub fn pattern(&self) -> &'static str {
        match self {
            InputCategory::Region => r"^[a-z]{2}-[a-z]+-[0-9]+$",
            // 3-63 characters in total.
            InputCategory::BucketName => r"^[a-z0-9][a-z0-9.-]{1,61}[a-z0-9]$",
            InputCategory::RoleName => r"^[A-Za-z0-9+=,.@_-]+$",
            InputCategory::JobName => r"^[a-z0-9](-*[a-z0-9]){0,62}$",
            InputCategory::AccountId => r"^[0-9]{12}$",
            InputCategory::ModelId => r"^[A-Za-z0-9.:_-]+$",
        }
    }

    pub fn example(&self) -> &'static str {
        match self {
            InputCategory::Region => "us-east-1",
            InputCategory::BucketName => "my-eval-bucket",
            InputCategory::RoleName => "BedrockEvalRole",
            InputCategory::JobName => "my-eval-20240101",
            InputCategory::AccountId => "123456789012",
            InputCategory::ModelId => "amazon.nova-pro-v1:0",
        }
    }

    pub(crate) fn regex(&self) -> &'static Regex {
        match self {
            InputCategory::Region => &*REGION_RE,
            InputCategory::BucketName => &*BUCKET_NAME_RE,
            InputCategory::RoleName => &*ROLE_NAME_RE,
            InputCategory::JobName => &*JOB_NAME_RE,
            InputCategory::AccountId => &*ACCOUNT_ID_RE,
            InputCategory::ModelId => &*MODEL_ID_RE,
        }
    }

    /// Comma-separated list of every category name, for error messages.
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for InputCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputCategory {
    type Err = GuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| GuardError::UnknownCategory {
                category: s.to_string(),
                valid: Self::valid_names(),
            })
    }
}
