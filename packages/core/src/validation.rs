use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::container::{ContainerError, GraphSlot};
use crate::types::MetaDataNode;

/// A violation found while checking a metadata list.
///
/// The first violation in sequence order is reported; within a node,
/// properties are scanned in key order (the map is a `BTreeMap`), so the
/// reported violation is deterministic for a given list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetadataError {
    #[error("metadata must contain at least one node")]
    Empty,

    #[error("metadata node at index {0} has a blank id")]
    BlankId(usize),

    #[error("metadata node at index {0} has a blank class type")]
    BlankClassType(usize),

    #[error("metadata node at index {0} has a property with a blank key")]
    BlankPropertyKey(usize),

    #[error("metadata node at index {0} has a blank value for property {1:?}")]
    BlankPropertyValue(usize, String),
}

/// Shallow well-formedness probe for Turtle content.
///
/// Returns `false` for empty or whitespace-only text; otherwise returns
/// `true` iff the text contains at least one `@prefix` declaration of the
/// shape `@prefix ex: <http://…> .`.
///
/// This is deliberately not a Turtle parser. It can accept text a real
/// grammar would reject and reject valid Turtle that declares no prefix in
/// this exact shape. Containers written against this check exist in the
/// wild, so the probe must stay as-is rather than grow into a full parse.
pub fn is_valid_turtle(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    TURTLE_PREFIX_RE.is_match(text)
}

/// Check a metadata list for validity.
///
/// Returns `Ok(())` when the list is non-empty and every node has a
/// non-blank `id` and `class_type` and only non-blank property keys and
/// values. Otherwise returns the first [`MetadataError`] found in sequence
/// order.
pub fn validate_metadata(nodes: &[MetaDataNode]) -> Result<(), MetadataError> {
    if nodes.is_empty() {
        return Err(MetadataError::Empty);
    }

    for (i, node) in nodes.iter().enumerate() {
        if node.id.trim().is_empty() {
            return Err(MetadataError::BlankId(i));
        }
        if node.class_type.trim().is_empty() {
            return Err(MetadataError::BlankClassType(i));
        }
        for (key, value) in &node.properties {
            if key.trim().is_empty() {
                return Err(MetadataError::BlankPropertyKey(i));
            }
            if value.trim().is_empty() {
                return Err(MetadataError::BlankPropertyValue(i, key.clone()));
            }
        }
    }

    Ok(())
}

/// Re-check a whole container against the assignment-time invariants.
///
/// Deserialisation loads fields directly and never runs the validating
/// setters, so a container read from a file can hold values that direct
/// assignment would reject. Callers who want uniform guarantees run this
/// after [`GraphContainer::load`](crate::GraphContainer::load) or
/// [`GraphContainer::from_json`](crate::GraphContainer::from_json).
///
/// A complete container must carry a template graph; the instance graph is
/// optional but must pass the Turtle probe when present.
pub fn validate_container(container: &crate::GraphContainer) -> Result<(), ContainerError> {
    match container.template() {
        None => return Err(ContainerError::MissingTemplate),
        Some(t) if !is_valid_turtle(t) => {
            return Err(ContainerError::InvalidSyntax(GraphSlot::Template))
        }
        Some(_) => {}
    }

    if let Some(instance) = container.instance() {
        if !is_valid_turtle(instance) {
            return Err(ContainerError::InvalidSyntax(GraphSlot::Instance));
        }
    }

    validate_metadata(container.metadata())?;
    Ok(())
}

/// Number of `@prefix` declarations the probe's pattern finds in `text`.
///
/// Informational only (used by the renderer); validity needs just one.
pub fn prefix_declaration_count(text: &str) -> usize {
    TURTLE_PREFIX_RE.find_iter(text).count()
}

/// Report metadata ids that appear more than once, in first-seen order.
///
/// Id uniqueness is asserted by the domain but is not part of
/// [`validate_metadata`] — existing files with duplicate ids must keep
/// loading. This advisory scan lets callers surface the problem anyway.
pub fn duplicate_ids(nodes: &[MetaDataNode]) -> Vec<&str> {
    let mut seen: std::collections::HashSet<&str> = std::collections::HashSet::new();
    let mut dupes: Vec<&str> = Vec::new();
    for node in nodes {
        let id = node.id.as_str();
        if !seen.insert(id) && !dupes.contains(&id) {
            dupes.push(id);
        }
    }
    dupes
}

// --- helpers -----------------------------------------------------------------

/// `@prefix\s+\w+:\s+<.*?>\s*\.` — one namespace-prefix declaration.
static TURTLE_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@prefix\s+\w+:\s+<.*?>\s*\.").expect("invalid turtle prefix regex")
});

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn node(id: &str, class_type: &str, props: &[(&str, &str)]) -> MetaDataNode {
        MetaDataNode {
            id: id.into(),
            class_type: class_type.into(),
            properties: props
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn prefix_declaration_is_valid() {
        assert!(is_valid_turtle("@prefix ex: <http://example.org/> ."));
    }

    #[test]
    fn prefix_embedded_in_larger_document_is_valid() {
        let ttl = "# building export\n\
                   @prefix bot: <https://w3id.org/bot#> .\n\
                   <urn:wall-1> a bot:Element .";
        assert!(is_valid_turtle(ttl));
    }

    #[test]
    fn empty_and_whitespace_are_invalid() {
        assert!(!is_valid_turtle(""));
        assert!(!is_valid_turtle("   \n\t "));
    }

    #[test]
    fn text_without_prefix_is_invalid() {
        assert!(!is_valid_turtle("just some text"));
        // Valid Turtle by the real grammar, but no @prefix declaration — the
        // shallow probe rejects it.
        assert!(!is_valid_turtle("<urn:a> <urn:b> <urn:c> ."));
    }

    #[test]
    fn prefix_without_terminating_dot_is_invalid() {
        assert!(!is_valid_turtle("@prefix ex: <http://example.org/>"));
    }

    #[test]
    fn prefix_with_empty_iri_is_valid() {
        assert!(is_valid_turtle("@prefix ex: <> ."));
    }

    #[test]
    fn valid_metadata_list() {
        let nodes = vec![node("n1", "Wall", &[("height", "3.0")])];
        assert_eq!(validate_metadata(&nodes), Ok(()));
    }

    #[test]
    fn empty_list_rejected() {
        assert_eq!(validate_metadata(&[]), Err(MetadataError::Empty));
    }

    #[test]
    fn blank_id_rejected() {
        let nodes = vec![node("n1", "Wall", &[]), node("  ", "Door", &[])];
        assert_eq!(validate_metadata(&nodes), Err(MetadataError::BlankId(1)));
    }

    #[test]
    fn blank_class_type_rejected() {
        let nodes = vec![node("n1", "", &[])];
        assert_eq!(validate_metadata(&nodes), Err(MetadataError::BlankClassType(0)));
    }

    #[test]
    fn blank_property_key_rejected() {
        let nodes = vec![node("n1", "Wall", &[(" ", "3.0")])];
        assert_eq!(validate_metadata(&nodes), Err(MetadataError::BlankPropertyKey(0)));
    }

    #[test]
    fn blank_property_value_rejected() {
        let nodes = vec![node("n1", "Wall", &[("height", "")])];
        assert_eq!(
            validate_metadata(&nodes),
            Err(MetadataError::BlankPropertyValue(0, "height".into()))
        );
    }

    #[test]
    fn first_violation_in_sequence_order_wins() {
        let nodes = vec![node("n1", "Wall", &[("height", " ")]), node("", "Door", &[])];
        assert_eq!(
            validate_metadata(&nodes),
            Err(MetadataError::BlankPropertyValue(0, "height".into()))
        );
    }

    #[test]
    fn nodes_without_properties_are_valid() {
        let nodes = vec![node("n1", "Wall", &[])];
        assert_eq!(validate_metadata(&nodes), Ok(()));
    }

    #[test]
    fn duplicate_ids_reported_once_in_first_seen_order() {
        let nodes = vec![
            node("n1", "Wall", &[]),
            node("n2", "Door", &[]),
            node("n1", "Wall", &[]),
            node("n2", "Door", &[]),
            node("n1", "Wall", &[]),
        ];
        assert_eq!(duplicate_ids(&nodes), vec!["n1", "n2"]);
    }

    #[test]
    fn unique_ids_report_nothing() {
        let nodes = vec![node("n1", "Wall", &[]), node("n2", "Door", &[])];
        assert!(duplicate_ids(&nodes).is_empty());
    }
}
