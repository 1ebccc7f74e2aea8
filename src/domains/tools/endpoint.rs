//! Endpoint templating.
//!
//! Converts an endpoint path template plus a named-parameter mapping into a
//! concrete request path: `{name}` placeholders are substituted with
//! percent-encoded values, and every parameter not consumed by a placeholder
//! is appended as a query-string pair.

use std::collections::HashSet;

use serde_json::{Map, Value};

use super::error::ToolError;

/// Build a concrete request path from a template and parameters.
///
/// Placeholder values must be present and non-null, otherwise
/// [`ToolError::MissingParameter`] is returned. Remaining parameters become
/// query pairs: scalars as `key=value`, arrays as one pair per element in
/// order, null values skipped. Iteration order of the map is deterministic,
/// so the produced query string is too.
pub fn parameterize_endpoint(
    path: &str,
    params: &Map<String, Value>,
) -> Result<String, ToolError> {
    let mut out = String::with_capacity(path.len());
    let mut consumed: HashSet<&str> = HashSet::new();
    let mut rest = path;

    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start + 1..].find('}') else {
            // Unmatched brace, keep it literal.
            break;
        };
        let name = &rest[start + 1..start + 1 + len];
        out.push_str(&rest[..start]);

        match params.get(name).filter(|v| !v.is_null()) {
            Some(value) => out.push_str(&encode_component(&scalar_text(value))),
            None => return Err(ToolError::MissingParameter(name.to_string())),
        }

        consumed.insert(name);
        rest = &rest[start + 1 + len + 1..];
    }
    out.push_str(rest);

    let mut query = String::new();
    for (key, value) in params {
        if consumed.contains(key.as_str()) || value.is_null() {
            continue;
        }
        match value {
            Value::Array(items) => {
                for item in items {
                    push_pair(&mut query, key, &scalar_text(item));
                }
            }
            _ => push_pair(&mut query, key, &scalar_text(value)),
        }
    }

    if !query.is_empty() {
        out.push('?');
        out.push_str(&query);
    }

    Ok(out)
}

fn push_pair(query: &mut String, key: &str, value: &str) {
    if !query.is_empty() {
        query.push('&');
    }
    query.push_str(&encode_component(key));
    query.push('=');
    query.push_str(&encode_component(value));
}

/// Textual form of a scalar parameter value. Strings are used as-is (no JSON
/// quoting); numbers and booleans render with their JSON representation.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn encode_component(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("object literal")
    }

    #[test]
    fn test_substitutes_path_placeholder() {
        let result =
            parameterize_endpoint("/retailers/{id}", &params(json!({ "id": "kohls" }))).unwrap();
        assert_eq!(result, "/retailers/kohls");
    }

    #[test]
    fn test_placeholder_value_is_percent_encoded() {
        let result =
            parameterize_endpoint("/retailers/{id}", &params(json!({ "id": "a b/c" }))).unwrap();
        assert_eq!(result, "/retailers/a%20b%2Fc");
        assert!(!result.contains('{'));
    }

    #[test]
    fn test_missing_placeholder_value_fails() {
        let err = parameterize_endpoint("/retailers/{id}", &params(json!({}))).unwrap_err();
        match err {
            ToolError::MissingParameter(name) => assert_eq!(name, "id"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_null_placeholder_value_fails() {
        let err =
            parameterize_endpoint("/retailers/{id}", &params(json!({ "id": null }))).unwrap_err();
        assert!(matches!(err, ToolError::MissingParameter(name) if name == "id"));
    }

    #[test]
    fn test_remaining_params_become_query_string() {
        let result = parameterize_endpoint(
            "/",
            &params(json!({ "action": "gift_cards", "hostname": "target" })),
        )
        .unwrap();
        assert_eq!(result, "/?action=gift_cards&hostname=target");
    }

    #[test]
    fn test_placeholder_key_excluded_from_query() {
        let result = parameterize_endpoint(
            "/r/{id}",
            &params(json!({ "id": "kohls", "action": "cashback" })),
        )
        .unwrap();
        assert_eq!(result, "/r/kohls?action=cashback");
    }

    #[test]
    fn test_array_values_repeat_key_in_order() {
        let result =
            parameterize_endpoint("/", &params(json!({ "tag": ["a", "b", "c"] }))).unwrap();
        assert_eq!(result, "/?tag=a&tag=b&tag=c");
    }

    #[test]
    fn test_null_query_values_skipped() {
        let result = parameterize_endpoint(
            "/",
            &params(json!({ "action": "cashback", "extra": null })),
        )
        .unwrap();
        assert_eq!(result, "/?action=cashback");
    }

    #[test]
    fn test_query_values_percent_encoded() {
        let result =
            parameterize_endpoint("/", &params(json!({ "hostname": "a&b=c" }))).unwrap();
        assert_eq!(result, "/?hostname=a%26b%3Dc");
    }

    #[test]
    fn test_scalar_number_and_bool_values() {
        let result =
            parameterize_endpoint("/", &params(json!({ "limit": 10, "strict": true }))).unwrap();
        assert_eq!(result, "/?limit=10&strict=true");
    }

    #[test]
    fn test_no_params_no_query() {
        let result = parameterize_endpoint("/", &params(json!({}))).unwrap();
        assert_eq!(result, "/");
    }

    #[test]
    fn test_unmatched_brace_kept_literal() {
        let result = parameterize_endpoint("/odd{path", &params(json!({}))).unwrap();
        assert_eq!(result, "/odd{path");
    }
}
