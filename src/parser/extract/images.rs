use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Payloads longer than this are cut for display.
pub const DISPLAY_LIMIT: usize = 100;

static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[([^\]]*)\]\(data:image/([^;]+);base64,([^)]+)\)").unwrap()
});

/// An inline `data:image/...;base64,...` image.
///
/// `data` is the display copy and is not decodable once truncated. The full
/// payload stays private and is what the image saver decodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRecord {
    pub alt_text: String,
    pub format: String,
    pub data: String,
    #[serde(skip)]
    payload: String,
}

impl ImageRecord {
    pub fn new(alt_text: &str, format: &str, payload: &str) -> Self {
        ImageRecord {
            alt_text: alt_text.to_string(),
            format: format.to_string(),
            data: truncate_for_display(payload),
            payload: payload.to_string(),
        }
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }
}

pub fn extract(content: &str) -> Vec<ImageRecord> {
    IMAGE_RE
        .captures_iter(content)
        .map(|caps| ImageRecord::new(&caps[1], &caps[2], &caps[3]))
        .collect()
}

fn truncate_for_display(payload: &str) -> String {
    if payload.chars().count() <= DISPLAY_LIMIT {
        payload.to_string()
    } else {
        let truncated: String = payload.chars().take(DISPLAY_LIMIT).collect();
        format!("{}...", truncated)
    }
}
