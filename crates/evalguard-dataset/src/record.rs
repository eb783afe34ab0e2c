//! A read-only view over one parsed dataset line.
//!
//! Expected shape:
//! ```json
//! { "prompt": "...",
//!   "referenceResponse": "...",
//!   "modelResponses": [ { "response": "...", "modelIdentifier": "..." } ] }
//! ```
//!
//! Lines are kept as `serde_json::Value` rather than deserialized into a
//! struct: presence of a key is what matters, and a line with a wrongly typed
//! field must still be scanned for everything else.

use serde_json::Value;

pub const PROMPT: &str = "prompt";
pub const REFERENCE_RESPONSE: &str = "referenceResponse";
pub const MODEL_RESPONSES: &str = "modelResponses";
pub const RESPONSE: &str = "response";

#[derive(Debug, Clone, Copy)]
pub struct RecordView<'a> {
    value: &'a Value,
}

impl<'a> RecordView<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// True when the key exists, even if its value is `null`.
    pub fn has_field(&self, name: &str) -> bool {
        self.value.get(name).is_some()
    }

    pub fn prompt(&self) -> Option<&'a str> {
        self.value.get(PROMPT).and_then(Value::as_str)
    }

    pub fn reference_response(&self) -> Option<&'a str> {
        self.value.get(REFERENCE_RESPONSE).and_then(Value::as_str)
    }

    pub fn model_responses(&self) -> Option<&'a Value> {
        self.value.get(MODEL_RESPONSES)
    }

    /// Every string `modelResponses[*].response`, in order.
    pub fn response_texts(&self) -> impl Iterator<Item = &'a str> {
        self.model_responses()
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|entry| entry.get(RESPONSE).and_then(Value::as_str))
    }

    /// Prompt followed by every response. These are the fields a model saw
    /// or produced.
    pub fn generated_texts(&self) -> impl Iterator<Item = &'a str> {
        self.prompt().into_iter().chain(self.response_texts())
    }

    /// Prompt, responses, and the reference response.
    pub fn all_texts(&self) -> impl Iterator<Item = &'a str> {
        self.generated_texts().chain(self.reference_response())
    }
}
