use std::io::{self, Write};

use serde::Serialize;

use crate::parser::ParsedDocument;
use crate::suggest::Suggestion;

const RULE_WIDTH: usize = 60;

#[derive(Serialize)]
struct JsonReport<'a> {
    document: &'a ParsedDocument,
    suggestions: &'a [Suggestion],
}

/// Write the console summary for a parsed prompt.
pub fn render<W: Write>(
    out: &mut W,
    doc: &ParsedDocument,
    suggestions: &[Suggestion],
) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out, "\n{}", rule)?;
    writeln!(out, "RICH MARKDOWN INPUT PARSED")?;
    writeln!(out, "{}", rule)?;

    writeln!(out, "\nTitle:    {}", doc.title)?;
    writeln!(out, "Priority: {}", doc.priority)?;

    writeln!(out, "\nSections Found: {}", doc.sections.len())?;
    for section in &doc.sections {
        writeln!(out, "  - {}", section.name)?;
    }

    writeln!(out, "\nImages Found: {}", doc.images.len())?;
    for (i, img) in doc.images.iter().enumerate() {
        writeln!(out, "  - Image {}: {} ({})", i + 1, img.alt_text, img.format)?;
    }

    writeln!(out, "\nCode Blocks Found: {}", doc.code_blocks.len())?;
    for (i, block) in doc.code_blocks.iter().enumerate() {
        writeln!(
            out,
            "  - Block {}: {} ({} chars)",
            i + 1,
            block.language,
            block.code.chars().count()
        )?;
    }

    if !suggestions.is_empty() {
        writeln!(out, "\nPlan Update Suggestions:")?;
        for suggestion in suggestions {
            writeln!(out, "  * {}", suggestion)?;
        }
    }

    writeln!(out, "\n{}", rule)?;
    writeln!(out, "Ready for AI processing!")?;
    writeln!(out, "{}", rule)?;
    Ok(())
}

pub fn print(doc: &ParsedDocument, suggestions: &[Suggestion]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&mut out, doc, suggestions)
}

/// Parsed record plus suggestions as pretty JSON. Image payloads appear only
/// in their truncated display form.
pub fn render_json(doc: &ParsedDocument, suggestions: &[Suggestion]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        document: doc,
        suggestions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;
    use crate::suggest::suggest_plan_updates;

    fn render_to_string(md: &str) -> String {
        let doc = parse_document(md);
        let suggestions = suggest_plan_updates(&doc);
        let mut buf = Vec::new();
        render(&mut buf, &doc, &suggestions).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn renders_blocks_in_order() {
        let md = std::fs::read_to_string("tests/fixtures/full.md").unwrap();
        let out = render_to_string(&md);

        let order = [
            "RICH MARKDOWN INPUT PARSED",
            "Title:    Checkout Redesign",
            "Priority: Low",
            "Sections Found: 5",
            "Images Found: 2",
            "Code Blocks Found: 2",
            "Plan Update Suggestions:",
            "Ready for AI processing!",
        ];
        let positions: Vec<usize> = order.iter().map(|s| out.find(s).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(out.contains("  - Image 1: Checkout mockup (png)"));
        assert!(out.contains("  - Image 2: Icon (svg+xml)"));
        assert!(out.contains("  - Block 2: text (11 chars)"));
        assert!(out.contains("  * Add technical implementation tasks"));
    }

    #[test]
    fn no_suggestion_header_when_empty() {
        let out = render_to_string("# Quiet\n## Notes\nnothing to do");
        assert!(!out.contains("Plan Update Suggestions"));
        assert!(out.contains("Sections Found: 1"));
        assert!(out.contains("  - Notes"));
        assert!(out.contains("Images Found: 0"));
        assert!(out.contains("Priority: Medium"));
    }

    #[test]
    fn json_hides_full_payload() {
        let payload = "Q".repeat(150);
        let md = format!("# J\n![shot](data:image/png;base64,{})\npriority: high", payload);
        let doc = parse_document(&md);
        let json = render_json(&doc, &suggest_plan_updates(&doc)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["document"]["title"], "J");
        assert_eq!(value["document"]["priority"], "High");
        assert_eq!(
            value["document"]["images"][0]["data"],
            format!("{}...", "Q".repeat(100))
        );
        assert!(value["document"]["images"][0].get("payload").is_none());
        assert_eq!(value["suggestions"][0], "promote_to_current_goal");
        assert!(!json.contains(&payload));
    }
}
