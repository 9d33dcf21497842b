use std::sync::LazyLock;

use regex::Regex;

pub const DEFAULT_TITLE: &str = "Untitled Request";

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.+)$").unwrap());

/// First level-1 heading in the document.
pub fn extract(content: &str) -> String {
    TITLE_RE
        .captures(content)
        .map(|caps| caps[1].trim_end_matches('\r').to_string())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}
