pub mod extract;

use serde::Serialize;

use extract::{code_blocks, images, priority, sections, title};
use extract::{CodeBlock, ImageRecord, Priority, Section};

/// Everything pulled out of one prompt document. Built fresh per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDocument {
    #[serde(skip)]
    pub raw_content: String,
    pub title: String,
    pub sections: Vec<Section>,
    pub images: Vec<ImageRecord>,
    pub code_blocks: Vec<CodeBlock>,
    pub priority: Priority,
}

/// Run every field extractor over the same text. Extractors are independent
/// and never fail; absent fields come back as their defaults.
pub fn parse_document(content: &str) -> ParsedDocument {
    ParsedDocument {
        raw_content: content.to_string(),
        title: title::extract(content),
        sections: sections::extract(content),
        images: images::extract(content),
        code_blocks: code_blocks::extract(content),
        priority: priority::extract(content),
    }
}
