//! JSON extraction from model output.
//!
//! Models sometimes wrap the JSON they were asked for in a markdown code
//! fence, with or without a "json" language tag. The fenced interior, when
//! present, is the candidate text; otherwise the whole input is. No repair,
//! no truncation recovery, no schema validation.

use serde_json::Value;

/// Recovers a JSON value from raw model text, tolerating an optional
/// markdown code fence. Malformed JSON surfaces the parse error unchanged.
pub fn extract_json(raw: &str) -> Result<Value, serde_json::Error> {
    let candidate = fenced_interior(raw).unwrap_or(raw);
    serde_json::from_str(candidate.trim())
}

/// The interior of the first complete fenced block anywhere in the text,
/// preferring a "json"-tagged fence over a bare one.
fn fenced_interior(text: &str) -> Option<&str> {
    for opener in ["```json", "```"] {
        if let Some(start) = text.find(opener) {
            let rest = &text[start + opener.len()..];
            if let Some(end) = rest.find("```") {
                return Some(&rest[..end]);
            }
        }
    }
    None
}
