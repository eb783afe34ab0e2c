//! Per-line dataset rules.
//!
//! Rules run in table order against every line that parsed as JSON. Each
//! rule yields at most one finding per line, so a line's finding count is
//! bounded by the table length.

use serde_json::Value;

use evalguard_contracts::report::Finding;
use evalguard_core::DatasetConfig;

use crate::record::{RecordView, MODEL_RESPONSES, PROMPT};

pub const RULE_JSON_PARSE: &str = "json-parse";
pub const RULE_REQUIRED_FIELD: &str = "required-field";
pub const RULE_MODEL_RESPONSE_COUNT: &str = "model-response-count";
pub const RULE_BOUNDARY_MARKER: &str = "boundary-marker";
pub const RULE_CONTROL_CHARACTER: &str = "control-character";

/// The checks applied to each parsed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRule {
    /// The key must be present. Absence is an error.
    RequiredField { field: String },

    /// `modelResponses`, when present, must hold exactly the configured
    /// number of entries. Any other count is a warning.
    ModelResponseCount,

    /// No text field may contain a configured boundary marker.
    BoundaryMarkers,

    /// Prompt and responses must be free of C0 controls other than tab,
    /// LF, and CR.
    ControlCharacters,
}

impl LineRule {
    /// The standard table: required fields first, then advisory checks.
    pub fn default_table() -> Vec<LineRule> {
        vec![
            LineRule::RequiredField {
                field: PROMPT.to_string(),
            },
            LineRule::RequiredField {
                field: MODEL_RESPONSES.to_string(),
            },
            LineRule::ModelResponseCount,
            LineRule::BoundaryMarkers,
            LineRule::ControlCharacters,
        ]
    }

    pub fn evaluate(
        &self,
        record: &RecordView<'_>,
        line: usize,
        config: &DatasetConfig,
    ) -> Option<Finding> {
        match self {
            LineRule::RequiredField { field } => {
                if record.has_field(field) {
                    None
                } else {
                    Some(Finding::error(
                        RULE_REQUIRED_FIELD,
                        Some(line),
                        format!("missing required field '{field}'"),
                    ))
                }
            }

            // Absence is already reported by RequiredField.
            LineRule::ModelResponseCount => {
                let expected = config.expected_model_responses;
                match record.model_responses()? {
                    Value::Array(entries) if entries.len() == expected => None,
                    Value::Array(entries) => Some(Finding::warning(
                        RULE_MODEL_RESPONSE_COUNT,
                        Some(line),
                        format!(
                            "'{MODEL_RESPONSES}' has {} entries, expected {expected}",
                            entries.len()
                        ),
                    )),
                    _ => Some(Finding::warning(
                        RULE_MODEL_RESPONSE_COUNT,
                        Some(line),
                        format!("'{MODEL_RESPONSES}' is not an array, expected {expected} entries"),
                    )),
                }
            }

            LineRule::BoundaryMarkers => {
                // Newline-joined so a marker cannot straddle two fields.
                let haystack = record.all_texts().collect::<Vec<_>>().join("\n");
                let found: Vec<&str> = config
                    .boundary_markers
                    .iter()
                    .map(String::as_str)
                    .filter(|m| !m.is_empty() && haystack.contains(m))
                    .collect();

                if found.is_empty() {
                    None
                } else {
                    Some(Finding::warning(
                        RULE_BOUNDARY_MARKER,
                        Some(line),
                        format!(
                            "possible prompt injection: boundary marker(s) {} found in text",
                            found
                                .iter()
                                .map(|m| format!("'{m}'"))
                                .collect::<Vec<_>>()
                                .join(", ")
                        ),
                    ))
                }
            }

            LineRule::ControlCharacters => {
                let controls: Vec<char> = record
                    .generated_texts()
                    .flat_map(str::chars)
                    .filter(|c| is_disallowed_control(*c))
                    .collect();

                let first = controls.first()?;
                Some(Finding::warning(
                    RULE_CONTROL_CHARACTER,
                    Some(line),
                    format!(
                        "{} control character(s) found in prompt or responses (first: U+{:04X})",
                        controls.len(),
                        *first as u32
                    ),
                ))
            }
        }
    }
}

/// C0 control characters, excluding tab, line feed, and carriage return.
pub fn is_disallowed_control(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}')
}
