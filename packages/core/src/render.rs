//! Human-readable text rendering of a [`GraphContainer`].
//!
//! The output is stable plain text for terminals and logs. It is not a wire
//! format — only the JSON encoding is normative.

use crate::container::GraphContainer;
use crate::validation::prefix_declaration_count;

/// Render a container as an indented plain-text summary.
///
/// ```text
/// Graph container  2 metadata nodes
/// ─────────────────────────────────
/// Template: 214 chars, 3 prefix declarations
/// Instance: (none)
/// Use case: Erection planning [uc-17]
/// Access rights: 2
///
/// Metadata:
///   [n1] Wall
///       height: 3.0
///   [n2] Door
/// ```
pub fn render_container(container: &GraphContainer) -> String {
    let count = container.metadata().len();
    let header = format!(
        "Graph container  {} metadata node{}",
        count,
        if count == 1 { "" } else { "s" }
    );
    let rule = "─".repeat(header.chars().count());

    let mut out = format!("{}\n{}\n", header, rule);

    out.push_str(&format!("Template: {}\n", describe_graph(container.template())));
    out.push_str(&format!("Instance: {}\n", describe_graph(container.instance())));

    match container.use_case() {
        Some(uc) => out.push_str(&format!("Use case: {} [{}]\n", uc.name, uc.id)),
        None => out.push_str("Use case: (none)\n"),
    }

    match container.access_rights() {
        Some(rights) => out.push_str(&format!("Access rights: {}\n", rights.len())),
        None => out.push_str("Access rights: (none)\n"),
    }

    if !container.metadata().is_empty() {
        out.push('\n');
        out.push_str("Metadata:\n");
        for node in container.metadata() {
            out.push_str(&format!("  [{}] {}\n", node.id, node.class_type));
            for (key, value) in &node.properties {
                out.push_str(&format!("      {}: {}\n", key, truncate(value, 60)));
            }
        }
    }

    out
}

// --- helpers -----------------------------------------------------------------

fn describe_graph(text: Option<&str>) -> String {
    match text {
        None => "(none)".to_string(),
        Some(t) => {
            let prefixes = prefix_declaration_count(t);
            format!(
                "{} chars, {} prefix declaration{}",
                t.chars().count(),
                prefixes,
                if prefixes == 1 { "" } else { "s" }
            )
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    let s = s.trim();
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max - 1).collect();
        format!("{}…", truncated)
    }
}

// --- tests -------------------------------------------------------------------
