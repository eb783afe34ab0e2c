//! # evalguard-input
//!
//! Checks a single AWS CLI argument against the fixed pattern for its
//! category before it is interpolated into a command.
//!
//! ```rust,ignore
//! use evalguard_input::{validate, InputCategory};
//!
//! validate(InputCategory::Region, "us-east-1")?;
//! ```

pub mod category;

pub use category::InputCategory;

use tracing::debug;

use evalguard_contracts::error::{GuardError, GuardResult};

/// Check `value` against `category`'s pattern.
///
/// Pure predicate. On mismatch the error names the expected pattern and an
/// example of a valid value.
pub fn validate(category: InputCategory, value: &str) -> GuardResult<()> {
    let ok = category.regex().is_match(value);
    debug!(category = %category, value, ok, "validated input");

    if ok {
        Ok(())
    } else {
        Err(GuardError::PatternMismatch {
            category: category.name().to_string(),
            value: value.to_string(),
            pattern: category.pattern().to_string(),
            example: category.example().to_string(),
        })
    }
}

/// Parse `category` by name, then validate `value` against it.
pub fn validate_named(category: &str, value: &str) -> GuardResult<InputCategory> {
    let category: InputCategory = category.parse()?;
    validate(category, value)?;
    Ok(category)
}

#[cfg(test)]
mod tests {
    use evalguard_contracts::error::GuardError;

    use super::{validate, validate_named, InputCategory};

    fn accepts(category: InputCategory, value: &str) -> bool {
        validate(category, value).is_ok()
    }

    // ── Rule table ───────────────────────────────────────────────────────────

    /// Every category's own example must satisfy its own pattern.
    #[test]
    fn test_examples_match_their_patterns() {
        for category in InputCategory::ALL {
            assert!(
                accepts(category, category.example()),
                "example '{}' rejected by {}",
                category.example(),
                category
            );
        }
    }

    #[test]
    fn test_names_round_trip() {
        for category in InputCategory::ALL {
            assert_eq!(category.name().parse::<InputCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_category() {
        match "colour".parse::<InputCategory>() {
            Err(GuardError::UnknownCategory { category, valid }) => {
                assert_eq!(category, "colour");
                assert!(valid.contains("bucket_name"));
                assert!(valid.contains("model_id"));
            }
            other => panic!("expected UnknownCategory, got {:?}", other),
        }
    }

    // ── region ───────────────────────────────────────────────────────────────

    #[test]
    fn test_region() {
        assert!(accepts(InputCategory::Region, "us-east-1"));
        assert!(accepts(InputCategory::Region, "ap-southeast-2"));
        assert!(accepts(InputCategory::Region, "eu-central-10"));

        assert!(!accepts(InputCategory::Region, "US-EAST-1"));
        assert!(!accepts(InputCategory::Region, "use-east-1"));
        assert!(!accepts(InputCategory::Region, "us-east"));
        assert!(!accepts(InputCategory::Region, "us-gov-west-1"));
        assert!(!accepts(InputCategory::Region, "us-east-1 "));
        assert!(!accepts(InputCategory::Region, ""));
    }

    // ── bucket_name ──────────────────────────────────────────────────────────

    #[test]
    fn test_bucket_name_length_bounds() {
        assert!(!accepts(InputCategory::BucketName, "ab"));
        assert!(accepts(InputCategory::BucketName, "abc"));
        assert!(accepts(InputCategory::BucketName, &"a".repeat(63)));
        assert!(!accepts(InputCategory::BucketName, &"a".repeat(64)));
    }

    #[test]
    fn test_bucket_name_characters() {
        assert!(accepts(InputCategory::BucketName, "my-eval-bucket"));
        assert!(accepts(InputCategory::BucketName, "eval.results.2024"));

        assert!(!accepts(InputCategory::BucketName, "-leading-hyphen"));
        assert!(!accepts(InputCategory::BucketName, "trailing-dot."));
        assert!(!accepts(InputCategory::BucketName, "My-Bucket"));
        assert!(!accepts(InputCategory::BucketName, "under_score"));
    }

    // ── role_name ────────────────────────────────────────────────────────────

    #[test]
    fn test_role_name() {
        assert!(accepts(InputCategory::RoleName, "BedrockEvalRole"));
        assert!(accepts(InputCategory::RoleName, "service+role=a,b.c@d_e-f"));

        assert!(!accepts(InputCategory::RoleName, ""));
        assert!(!accepts(InputCategory::RoleName, "role name"));
        assert!(!accepts(InputCategory::RoleName, "role/path"));
        assert!(!accepts(InputCategory::RoleName, "rôle"));
    }

    // ── job_name ─────────────────────────────────────────────────────────────

    #[test]
    fn test_job_name_length_bounds() {
        assert!(accepts(InputCategory::JobName, "a"));
        assert!(accepts(InputCategory::JobName, &"a".repeat(62)));
        // One leading character plus at most 62 more.
        assert!(accepts(InputCategory::JobName, &"a".repeat(63)));
        assert!(!accepts(InputCategory::JobName, &"a".repeat(64)));
    }

    #[test]
    fn test_job_name_hyphens() {
        assert!(accepts(InputCategory::JobName, "my-eval-20240101"));
        assert!(accepts(InputCategory::JobName, "my--eval"));

        assert!(!accepts(InputCategory::JobName, "-my-eval"));
        assert!(!accepts(InputCategory::JobName, "my-eval-"));
        assert!(!accepts(InputCategory::JobName, "My-Eval"));
        assert!(!accepts(InputCategory::JobName, "my_eval"));
    }

    // ── account_id ───────────────────────────────────────────────────────────

    #[test]
    fn test_account_id() {
        assert!(accepts(InputCategory::AccountId, "123456789012"));

        assert!(!accepts(InputCategory::AccountId, "12345678901"));
        assert!(!accepts(InputCategory::AccountId, "1234567890123"));
        assert!(!accepts(InputCategory::AccountId, "12345678901a"));
        // Non-ASCII digits are not digits here.
        assert!(!accepts(InputCategory::AccountId, "١٢٣٤٥٦٧٨٩٠١٢"));
    }

    // ── model_id ─────────────────────────────────────────────────────────────

    #[test]
    fn test_model_id() {
        assert!(accepts(InputCategory::ModelId, "amazon.nova-pro-v1:0"));
        assert!(accepts(InputCategory::ModelId, "anthropic.claude-3-haiku-20240307-v1:0"));
        assert!(accepts(InputCategory::ModelId, "us.meta.llama3_2"));

        assert!(!accepts(InputCategory::ModelId, ""));
        assert!(!accepts(InputCategory::ModelId, "arn:aws:bedrock/foo"));
        assert!(!accepts(InputCategory::ModelId, "model id"));
    }

    // ── Failure message ──────────────────────────────────────────────────────

    #[test]
    fn test_mismatch_names_pattern_and_example() {
        let err = validate(InputCategory::AccountId, "12").unwrap_err();
        let msg = err.to_string();

        assert!(msg.contains("account_id"), "{msg}");
        assert!(msg.contains("^[0-9]{12}$"), "{msg}");
        assert!(msg.contains("123456789012"), "{msg}");
    }

    #[test]
    fn test_validate_named() {
        assert_eq!(
            validate_named("region", "us-west-2").unwrap(),
            InputCategory::Region
        );
        assert!(matches!(
            validate_named("region", "nowhere"),
            Err(GuardError::PatternMismatch { .. })
        ));
        assert!(matches!(
            validate_named("zone", "us-west-2a"),
            Err(GuardError::UnknownCategory { .. })
        ));
    }
}
