use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

pub const TEMPLATE: &str = r#"# Development Request

## Context
Describe the current project state and what you're working on...

## Request
What specifically do you want me to help with?

## Images (Optional)
![Description](data:image/png;base64,BASE64_STRING_HERE)

## Code Reference (Optional)
```language
// Relevant code here
```

## Priority
Low | Medium | High
"#;

/// Read the prompt document. When it does not exist yet, write the template
/// in its place and return `None`.
pub fn load(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        write_template(path)?;
        info!("Created template at {:?}", path);
        return Ok(None);
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    debug!(bytes = content.len(), "Loaded {:?}", path);
    Ok(Some(content))
}

fn write_template(path: &Path) -> Result<()> {
    fs::write(path, TEMPLATE).with_context(|| format!("Failed to write template to {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract::Priority;
    use crate::parser::parse_document;

    #[test]
    fn missing_file_writes_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prompt.md");

        assert!(load(&path).unwrap().is_none());
        assert_eq!(fs::read_to_string(&path).unwrap(), TEMPLATE);

        // Second run picks up the template as input.
        assert_eq!(load(&path).unwrap().as_deref(), Some(TEMPLATE));
    }

    #[test]
    fn existing_file_is_returned_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prompt.md");
        fs::write(&path, "# Mine\n").unwrap();

        assert_eq!(load(&path).unwrap().as_deref(), Some("# Mine\n"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Mine\n");
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prompt.md");
        fs::write(&path, [0x23u8, 0x20, 0xff, 0xfe]).unwrap();

        assert!(load(&path).is_err());
    }

    #[test]
    fn template_parses_into_skeleton() {
        let doc = parse_document(TEMPLATE);
        assert_eq!(doc.title, "Development Request");
        let names: Vec<&str> = doc.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Context", "Request", "Images (Optional)", "Code Reference (Optional)", "Priority"]
        );
        assert_eq!(doc.sections[4].body, "Low | Medium | High");
        assert_eq!(doc.code_blocks.len(), 1);
        assert_eq!(doc.code_blocks[0].language, "language");
        assert_eq!(doc.priority, Priority::Medium);
    }
}
