//! Common utilities shared across tool definitions.
//!
//! Validation helpers and envelope builders. Validation failures are normal
//! tool results carrying a structured `{error, details}` payload, matching
//! the upstream adapter contract; they never become protocol-level failures.

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::warn;

use super::super::error::ToolError;

/// A single field-level validation problem.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    /// Name of the offending parameter.
    pub field: String,

    /// Human-readable description of the problem.
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Envelope whose text payload is the serialized value.
pub fn json_result(value: &impl Serialize) -> Result<CallToolResult, ToolError> {
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string(value)?,
    )]))
}

/// Envelope carrying a structured validation-error payload.
pub fn validation_error_result(
    issues: &[ValidationIssue],
) -> Result<CallToolResult, ToolError> {
    warn!("Parameter validation failed ({} issue(s))", issues.len());
    json_result(&json!({
        "error": "Validation error",
        "details": issues,
    }))
}

/// Extract a required string field from raw tool arguments.
pub fn require_string(args: &JsonObject, field: &str) -> Result<String, ValidationIssue> {
    match args.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ValidationIssue::new(
            field,
            format!("Expected string, received {}", json_type_name(other)),
        )),
        None => Err(ValidationIssue::new(field, "Required")),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn test_require_string_present() {
        let args = json!({ "retailer": "target" });
        let value = require_string(args.as_object().unwrap(), "retailer").unwrap();
        assert_eq!(value, "target");
    }

    #[test]
    fn test_require_string_missing() {
        let args = json!({});
        let issue = require_string(args.as_object().unwrap(), "retailer").unwrap_err();
        assert_eq!(issue.field, "retailer");
        assert_eq!(issue.message, "Required");
    }

    #[test]
    fn test_require_string_wrong_type() {
        let args = json!({ "retailer": 123 });
        let issue = require_string(args.as_object().unwrap(), "retailer").unwrap_err();
        assert_eq!(issue.field, "retailer");
        assert!(issue.message.contains("number"));
    }

    #[test]
    fn test_validation_error_envelope_shape() {
        let issues = vec![ValidationIssue::new("retailer", "Required")];
        let result = validation_error_result(&issues).unwrap();
        assert!(!result.is_error.unwrap_or(false));

        let payload: Value = serde_json::from_str(&text_of(&result)).unwrap();
        assert_eq!(payload["error"], "Validation error");
        assert_eq!(payload["details"][0]["field"], "retailer");
    }
}
