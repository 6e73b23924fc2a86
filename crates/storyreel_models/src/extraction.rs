//! Utilities for extracting structured data from LLM responses.
//!
//! Even when a JSON response type is requested, models sometimes wrap the
//! payload in markdown code fences or surround it with prose. This module
//! recovers the JSON before deserialization so malformed-but-salvageable
//! responses do not flow downstream untyped.

use storyreel_error::{StoryreelResult, UpstreamError, UpstreamErrorKind};

/// Extract JSON from a response that may contain markdown or extra text.
///
/// Tries, in order:
/// 1. Markdown code blocks: ```json ... ```
/// 2. Balanced braces: { ... }
/// 3. Balanced brackets: [ ... ]
///
/// # Errors
///
/// Returns an `UpstreamError` if no JSON candidate is found in the response.
///
/// # Examples
///
/// ```
/// use storyreel_models::extract_json;
///
/// let response = "Here's the storyboard:\n\
///     \n\
///     ```json\n\
///     {\"scenes\": []}\n\
///     ```\n";
///
/// let json = extract_json(response).unwrap();
/// assert!(json.contains("scenes"));
/// ```
pub fn extract_json(response: &str) -> StoryreelResult<String> {
    if let Some(json) = extract_from_code_block(response, "json") {
        return Ok(json);
    }

    // Prefer whichever balanced structure appears first in the response.
    let brace_pos = response.find('{');
    let bracket_pos = response.find('[');

    let first_brace = match (brace_pos, bracket_pos) {
        (Some(c), Some(b)) => c < b,
        (Some(_), None) => true,
        _ => false,
    };

    if first_brace {
        if let Some(json) = extract_balanced(response, '{', '}') {
            return Ok(json);
        }
        if let Some(json) = extract_balanced(response, '[', ']') {
            return Ok(json);
        }
    } else {
        if let Some(json) = extract_balanced(response, '[', ']') {
            return Ok(json);
        }
        if let Some(json) = extract_balanced(response, '{', '}') {
            return Ok(json);
        }
    }

    tracing::error!(
        response_length = response.len(),
        "No JSON found in LLM response"
    );

    Err(UpstreamError::new(UpstreamErrorKind::MalformedResponse(format!(
        "No JSON found in response (length: {})",
        response.len()
    )))
    .into())
}

/// Extract content from a markdown code block with the given language tag.
///
/// Also accepts a bare ``` fence when the tagged form is absent.
fn extract_from_code_block(response: &str, language: &str) -> Option<String> {
    let tagged = format!("```{language}");
    let start = response
        .find(&tagged)
        .map(|pos| pos + tagged.len())
        .or_else(|| response.find("```").map(|pos| pos + 3))?;

    let rest = &response[start..];
    let end = rest.find("```")?;
    let content = rest[..end].trim();

    if content.is_empty() {
        None
    } else {
        Some(content.to_string())
    }
}

/// Extract a balanced `open`..`close` span, respecting JSON string escapes.
fn extract_balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in response[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(response[start..start + offset + ch.len_utf8()].to_string());
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
    fn extracts_from_tagged_code_block() {
        let response = "Sure!\n```json\n{\"scenes\": [{\"id\": 1}]}\n```\nHope that helps.";
        let json = extract_json(response).unwrap();
        assert_eq!(json, "{\"scenes\": [{\"id\": 1}]}");
    }

    #[test]
    fn extracts_from_untagged_code_block() {
        let response = "```\n{\"id\": 2}\n```";
        assert_eq!(extract_json(response).unwrap(), "{\"id\": 2}");
    }

    #[test]
    fn extracts_balanced_object_from_prose() {
        let response = "The result is {\"id\": 3, \"nested\": {\"ok\": true}} as requested.";
        let json = extract_json(response).unwrap();
        assert_eq!(json, "{\"id\": 3, \"nested\": {\"ok\": true}}");
    }

    #[test]
    fn braces_inside_strings_do_not_unbalance() {
        let response = r#"{"description": "a scene with } inside", "id": 1}"#;
        let json = extract_json(response).unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&json).is_ok());
    }

    #[test]
    fn bare_array_is_extracted() {
        let response = "here: [1, 2, 3] done";
        assert_eq!(extract_json(response).unwrap(), "[1, 2, 3]");
    }

    #[test]
    fn no_json_is_an_error() {
        assert!(extract_json("no structured data here").is_err());
    }
}
