//! One structured-completion call per document kind.
//!
//! Builds the request body from a prompt spec, issues it through the
//! [`CompletionClient`], and parses the completion text back into a JSON
//! document. A single attempt only; any transport, API, or parse failure
//! surfaces as an error for the caller to contain.

use serde_json::{json, Value};
use tracing::debug;

use crate::error::{PlannerError, Result};
use crate::planner::prompts::PromptSpec;
use crate::services::openrouter_client::{ChatCompletionRequest, CompletionClient};
use crate::types::plan::DocumentKind;

/// Execute one document request and return the parsed JSON payload.
pub async fn execute_document(
    client: &dyn CompletionClient,
    kind: DocumentKind,
    model: &str,
    spec: &PromptSpec,
) -> Result<Value> {
    let mut messages = Vec::new();
    if let Some(system) = spec.system {
        messages.push(json!({"role": "system", "content": system}));
    }
    messages.push(json!({"role": "user", "content": spec.prompt}));

    let body = ChatCompletionRequest::new(model, messages)
        .with_temperature(spec.temperature)
        .with_max_tokens(Some(spec.max_tokens))
        .with_response_format(json!({"type": "json_object"}))
        .into_value();

    debug!(%kind, model, "issuing completion request");
    let response = client.complete(&body).await?;

    let content = response
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .ok_or_else(|| {
            PlannerError::Decode(format!("{kind} completion carried no message content"))
        })?;

    parse_document(content)
        .ok_or_else(|| PlannerError::Decode(format!("{kind} completion was not a JSON document")))
}

/// Parse the completion text as a JSON document.
///
/// The endpoint is asked for a bare JSON object, but models occasionally wrap
/// the payload in a markdown fence or leading prose, so fall back to
/// extracting the first balanced object or array.
fn parse_document(content: &str) -> Option<Value> {
    let trimmed = content.trim();
    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        if value.is_object() || value.is_array() {
            return Some(value);
        }
    }

    if let Some(stripped) = strip_fence(trimmed) {
        if let Ok(value) = serde_json::from_str::<Value>(stripped) {
            if value.is_object() || value.is_array() {
                return Some(value);
            }
        }
    }

    extract_balanced(trimmed)
        .and_then(|candidate| serde_json::from_str::<Value>(candidate).ok())
        .filter(|value| value.is_object() || value.is_array())
}

fn strip_fence(content: &str) -> Option<&str> {
    let rest = content.strip_prefix("```")?;
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let end = rest.rfind("```")?;
    Some(rest[..end].trim())
}

/// Find the first balanced `{...}` or `[...]` span in the text.
fn extract_balanced(content: &str) -> Option<&str> {
    let start = content.find(&['{', '['][..])?;
    let open = content.as_bytes()[start];
    let close = if open == b'{' { b'}' } else { b']' };

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (i, byte) in content.bytes().enumerate().skip(start) {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b if b == open => depth += 1,
            b if b == close => {
                depth -= 1;
                if depth == 0 {
                    return Some(&content[start..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_object() {
        let value = parse_document(r#"{"description": "great city"}"#).unwrap();
        assert_eq!(value["description"], "great city");
    }

    #[test]
    fn test_parse_fenced_object() {
        let content = "```json\n{\"documents\": [\"passport\"]}\n```";
        let value = parse_document(content).unwrap();
        assert_eq!(value["documents"][0], "passport");
    }

    #[test]
    fn test_parse_object_with_leading_prose() {
        let content = "Here is your plan:\n{\"days\": [{\"day\": 1}]} hope it helps";
        let value = parse_document(content).unwrap();
        assert_eq!(value["days"][0]["day"], 1);
    }

    #[test]
    fn test_parse_bare_array() {
        let value = parse_document(r#"[{"day": 1}, {"day": 2}]"#).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_parse_rejects_non_document() {
        assert!(parse_document("forty-two").is_none());
        assert!(parse_document("42").is_none());
        assert!(parse_document("{\"unterminated\": ").is_none());
    }

    #[test]
    fn test_balanced_extraction_ignores_braces_in_strings() {
        let content = r#"note {"title": "a } in a string", "ok": true}"#;
        let value = parse_document(content).unwrap();
        assert_eq!(value["ok"], true);
    }
}
