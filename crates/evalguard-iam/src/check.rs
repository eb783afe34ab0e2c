//! The risk checks run over every policy.
//!
//! Checks are independent of each other and of statement order. Each one
//! looks only at `Allow` statements and only ever produces warnings.

use evalguard_contracts::report::Finding;
use evalguard_core::IamConfig;

use crate::document::Statement;

pub const RULE_WILDCARD_RESOURCE: &str = "wildcard-resource";
pub const RULE_WILDCARD_ACTION: &str = "wildcard-action";
pub const RULE_UNCONDITIONED_SENSITIVE_ACTION: &str = "unconditioned-sensitive-action";
pub const RULE_DANGEROUS_S3_ACTION: &str = "dangerous-s3-action";
pub const RULE_NO_DENY_STATEMENT: &str = "no-deny-statement";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskCheck {
    /// `Resource: "*"` anywhere. Reported once for the whole policy.
    WildcardResource,
    /// `Action: "*"` or `service:*`. Reported once, listing every offender.
    WildcardAction,
    /// A sensitive action allowed without a `Condition`. One per statement.
    UnconditionedSensitiveAction,
    /// A destructive S3 action. One per statement and action.
    DangerousS3Action,
}

impl RiskCheck {
    pub const ALL: [RiskCheck; 4] = [
        RiskCheck::WildcardResource,
        RiskCheck::WildcardAction,
        RiskCheck::UnconditionedSensitiveAction,
        RiskCheck::DangerousS3Action,
    ];

    pub fn rule_id(&self) -> &'static str {
        match self {
            RiskCheck::WildcardResource => RULE_WILDCARD_RESOURCE,
            RiskCheck::WildcardAction => RULE_WILDCARD_ACTION,
            RiskCheck::UnconditionedSensitiveAction => RULE_UNCONDITIONED_SENSITIVE_ACTION,
            RiskCheck::DangerousS3Action => RULE_DANGEROUS_S3_ACTION,
        }
    }

    pub fn evaluate(&self, statements: &[Statement], config: &IamConfig) -> Vec<Finding> {
        let allows = || statements.iter().filter(|s| s.is_allow());

        match self {
            RiskCheck::WildcardResource => {
                let count = allows()
                    .filter(|s| s.resources().iter().any(|r| r == "*"))
                    .count();
                if count == 0 {
                    return Vec::new();
                }
                vec![Finding::warning(
                    self.rule_id(),
                    None,
                    format!("{count} Allow statement(s) grant access to Resource \"*\""),
                )]
            }

            RiskCheck::WildcardAction => {
                let mut offenders: Vec<&str> = Vec::new();
                for action in allows().flat_map(|s| s.actions()) {
                    if is_wildcard_action(action) && !offenders.contains(&String::as_str(action)) {
                        offenders.push(action);
                    }
                }
                if offenders.is_empty() {
                    return Vec::new();
                }
                vec![Finding::warning(
                    self.rule_id(),
                    None,
                    format!("wildcard action(s) allowed: {}", quote_list(&offenders)),
                )]
            }

            RiskCheck::UnconditionedSensitiveAction => {
                let mut findings = Vec::new();
                for action in &config.sensitive_actions {
                    for stmt in allows().filter(|s| s.grants(action) && s.condition.is_none()) {
                        findings.push(Finding::warning(
                            self.rule_id(),
                            None,
                            format!(
                                "sensitive action '{action}' allowed without a Condition in statement '{}'",
                                stmt.label()
                            ),
                        ));
                    }
                }
                findings
            }

            RiskCheck::DangerousS3Action => {
                let mut findings = Vec::new();
                for stmt in allows() {
                    for action in stmt
                        .actions()
                        .iter()
                        .filter(|a| config.dangerous_s3_actions.contains(a))
                    {
                        findings.push(Finding::warning(
                            self.rule_id(),
                            None,
                            format!(
                                "dangerous S3 action '{action}' allowed in statement '{}'",
                                stmt.label()
                            ),
                        ));
                    }
                }
                findings
            }
        }
    }
}

/// `*` on its own, or a whole-service grant such as `s3:*`.
pub fn is_wildcard_action(action: &str) -> bool {
    action == "*" || action.ends_with(":*")
}

fn quote_list(items: &[&str]) -> String {
    items
        .iter()
        .map(|i| format!("'{i}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
