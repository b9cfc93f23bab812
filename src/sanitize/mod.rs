//! Free-text neutralization helpers.
//!
//! `escape_html` is for the rendering boundary: call it exactly once, as
//! late as possible, since it is not idempotent (`&amp;` becomes `&amp;amp;`).
//!
//! `strip_injection_tokens` is a best-effort denylist filter and NOT a
//! security boundary.  Storage must still go through parameterized queries;
//! this only removes the obvious SQL control tokens from user text as a
//! second layer.

use std::sync::OnceLock;

use regex::Regex;

/// SQL control tokens removed by `strip_injection_tokens`, in removal order.
pub const INJECTION_TOKENS: [&str; 10] = [
    "--", ";", "/*", "*/", "xp_", "sp_", "DROP", "DELETE", "INSERT", "UPDATE",
];

/// Replace the five HTML-special characters with named entities.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn token_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        INJECTION_TOKENS
            .iter()
            .map(|token| {
                Regex::new(&format!("(?i){}", regex::escape(token)))
                    .expect("escaped token is a valid regex")
            })
            .collect()
    })
}

/// Remove every denylisted token (case-insensitive), then trim.
///
/// Tokens are removed one at a time in `INJECTION_TOKENS` order, each with a
/// single global pass.  Text exposed by one removal is only caught if its
/// token comes later in the list.
pub fn strip_injection_tokens(text: &str) -> String {
    let mut cleaned = text.to_owned();
    for pattern in token_patterns() {
        cleaned = pattern.replace_all(&cleaned, "").into_owned();
    }
    cleaned.trim().to_owned()
}
