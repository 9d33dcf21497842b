use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

pub const DEFAULT_LANGUAGE: &str = "text";

// Opening fence with optional tag, lazy body, closing fence at the start of
// a line. The body group is absent for an empty block. An unclosed fence
// never matches.
static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(\w+)?[ \t]*\r?\n(?:(.*?)\r?\n)?```").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    pub language: String,
    pub code: String,
}

pub fn extract(content: &str) -> Vec<CodeBlock> {
    FENCE_RE
        .captures_iter(content)
        .map(|caps| CodeBlock {
            language: caps
                .get(1)
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            code: caps
                .get(2)
                .map_or("", |m| m.as_str())
                .trim()
                .to_string(),
        })
        .collect()
}
