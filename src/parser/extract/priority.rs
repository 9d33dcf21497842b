use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static PRIORITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)priority:\s*(high|medium|low)\b").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Error)]
#[error("unknown priority level: {0}")]
pub struct UnknownPriority(String);

impl FromStr for Priority {
    type Err = UnknownPriority;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(UnknownPriority(s.to_string())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        };
        f.write_str(label)
    }
}

/// First `priority: <level>` marker, any case. Medium when there is none.
pub fn extract(content: &str) -> Priority {
    PRIORITY_RE
        .captures(content)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or_default()
}
