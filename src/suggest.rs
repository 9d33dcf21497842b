use std::fmt;

use serde::Serialize;

use crate::parser::extract::Priority;
use crate::parser::ParsedDocument;

/// Advisory follow-ups for the planning document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Suggestion {
    PromoteToCurrentGoal,
    AddImplementationTasks,
    UpdateUiUxRequirements,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Suggestion::PromoteToCurrentGoal => "Move to Current Goal in plan.md",
            Suggestion::AddImplementationTasks => "Add technical implementation tasks",
            Suggestion::UpdateUiUxRequirements => "Update UI/UX requirements based on mockups",
        };
        f.write_str(text)
    }
}

/// Every rule is checked on its own; the output order is fixed.
pub fn suggest_plan_updates(doc: &ParsedDocument) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if doc.priority == Priority::High {
        suggestions.push(Suggestion::PromoteToCurrentGoal);
    }
    if !doc.code_blocks.is_empty() {
        suggestions.push(Suggestion::AddImplementationTasks);
    }
    if !doc.images.is_empty() {
        suggestions.push(Suggestion::UpdateUiUxRequirements);
    }

    suggestions
}
