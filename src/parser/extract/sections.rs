use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub name: String,
    pub body: String,
}

/// Split the document into `## ` sections, in order of first appearance.
///
/// Blank lines are dropped and anything before the first level-2 heading is
/// ignored. A heading that shows up again keeps its original slot and the new
/// lines are appended to its body. A bare `## ` heading opens an unnamed
/// section that never collects lines.
pub fn extract(content: &str) -> Vec<Section> {
    let mut collected: Vec<(String, Vec<&str>)> = Vec::new();
    let mut current: Option<usize> = None;

    for line in content.split('\n') {
        let line = line.trim_end_matches('\r');
        if let Some(rest) = line.strip_prefix("## ") {
            let name = rest.trim();
            let idx = match collected.iter().position(|(n, _)| n == name) {
                Some(idx) => idx,
                None => {
                    collected.push((name.to_string(), Vec::new()));
                    collected.len() - 1
                }
            };
            current = Some(idx);
        } else if let Some(idx) = current {
            if !collected[idx].0.is_empty() && !line.trim().is_empty() {
                collected[idx].1.push(line);
            }
        }
    }

    collected
        .into_iter()
        .map(|(name, lines)| Section {
            name,
            body: lines.join("\n"),
        })
        .collect()
}
