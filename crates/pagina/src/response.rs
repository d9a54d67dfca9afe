// File: src/response.rs
// Purpose: Turn the form endpoint's reply into a submission outcome

use serde_json::Value;

use crate::config::Messages;
use crate::transport::RawResponse;

/// How a sent form ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// 2xx with a JSON body
    Success,

    /// Non-2xx; `message` is what the endpoint reported, or a status fallback
    Rejected { status: u16, message: String },

    /// The request never completed, or a 2xx body was not JSON
    Failed { reason: String },
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success)
    }

    /// Text shown in the status region
    pub fn status_text(&self, messages: &Messages) -> String {
        match self {
            SubmissionOutcome::Success => messages.success.clone(),
            SubmissionOutcome::Rejected { message, .. } => message.clone(),
            SubmissionOutcome::Failed { reason } => messages.send_failed(reason),
        }
    }
}

/// Classify a completed response
pub fn interpret_response(response: &RawResponse, messages: &Messages) -> SubmissionOutcome {
    if response.is_success() {
        return match serde_json::from_str::<Value>(&response.body) {
            Ok(_) => SubmissionOutcome::Success,
            Err(e) => SubmissionOutcome::Failed {
                reason: e.to_string(),
            },
        };
    }

    // An unreadable error body still gets the status fallback
    let message = serde_json::from_str::<Value>(&response.body)
        .ok()
        .and_then(|body| server_message(&body, &messages.unknown_error))
        .unwrap_or_else(|| messages.status_failed(response.status));

    SubmissionOutcome::Rejected {
        status: response.status,
        message,
    }
}

/// `{errors: [...]}` first, then `{error: ...}`
fn server_message(body: &Value, unknown: &str) -> Option<String> {
    if let Some(items) = body.get("errors").and_then(Value::as_array) {
        if !items.is_empty() {
            let joined = items
                .iter()
                .map(|item| item_message(item).unwrap_or_else(|| unknown.to_string()))
                .collect::<Vec<_>>()
                .join(", ");
            return Some(joined);
        }
    }

    display_text(body.get("error"))
}

fn item_message(item: &Value) -> Option<String> {
    ["message", "field", "error"]
        .iter()
        .find_map(|key| display_text(item.get(*key)))
}

/// Text for a reported value, skipping the falsy ones (`null`, `false`, `0`, `""`)
fn display_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
