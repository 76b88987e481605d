//! Wire-format types carried inside a [`GraphContainer`](crate::GraphContainer).
//!
//! This module defines [`MetaDataNode`] plus the two opaque collaborator
//! types, [`AccessRight`] and [`UseCase`]. All three serialise with the
//! PascalCase field names the portfolio tool has always written, so files
//! saved by earlier versions keep loading unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One metadata entry describing a class instance present in the graph
/// payloads.
///
/// The `id` is intended to be unique across a container's metadata list, but
/// uniqueness is the caller's responsibility — it is not part of the validity
/// check (see [`duplicate_ids`](crate::validation::duplicate_ids) for an
/// advisory scan).
///
/// Properties are held in a `BTreeMap` so a container serialises
/// deterministically; the source map's insertion order carries no meaning.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetaDataNode {
    /// Identifier for this node. Must be non-blank to pass validation.
    #[serde(rename = "Id")]
    pub id: String,

    /// The guideline class this node describes. Must be non-blank.
    #[serde(rename = "ClassType")]
    pub class_type: String,

    /// Key/value pairs for the class instance. Every key and value must be
    /// non-blank.
    #[serde(rename = "PropertiesValues")]
    pub properties: BTreeMap<String, String>,
}

impl MetaDataNode {
    /// Create a node with empty `id`, empty `class_type`, and no properties.
    ///
    /// The result does not pass metadata validation until both strings are
    /// filled in.
    pub fn new() -> Self {
        Self::default()
    }
}

/// An access-control entry associated with a container.
///
/// This core stores and forwards access rights without interpreting them;
/// enforcement lives in the access service. The fields mirror that service's
/// records, including the historical spelling of the
/// `GuidlineClassificationPropertyId` wire key, which must stay as-is for
/// file compatibility.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessRight {
    #[serde(rename = "Id")]
    pub id: String,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "GuidelineClassificationId")]
    pub guideline_classification_id: String,

    #[serde(rename = "UserGroupId")]
    pub user_group_id: String,

    #[serde(rename = "UseCaseId")]
    pub use_case_id: String,

    #[serde(rename = "GuidlineClassificationPropertyId")]
    pub guideline_classification_property_id: String,

    /// Numeric right level as defined by the access service.
    #[serde(rename = "Right")]
    pub right: i32,
}

/// The exchange scenario a container was assembled for.
///
/// Stored and forwarded as-is; this core applies no validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UseCase {
    #[serde(rename = "Id")]
    pub id: String,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Description")]
    pub description: String,
}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_empty() {
        let node = MetaDataNode::new();
        assert_eq!(node.id, "");
        assert_eq!(node.class_type, "");
        assert!(node.properties.is_empty());
    }

    #[test]
    fn node_uses_pascal_case_wire_names() {
        let node = MetaDataNode {
            id: "n1".into(),
            class_type: "Wall".into(),
            properties: BTreeMap::from([("height".to_string(), "3.0".to_string())]),
        };
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["Id"], "n1");
        assert_eq!(json["ClassType"], "Wall");
        assert_eq!(json["PropertiesValues"]["height"], "3.0");
    }

    #[test]
    fn access_right_keeps_historical_wire_key() {
        let right = AccessRight {
            id: "ar-1".into(),
            right: 2,
            ..AccessRight::default()
        };
        let json = serde_json::to_value(&right).unwrap();
        assert!(json.get("GuidlineClassificationPropertyId").is_some());
        assert_eq!(json["Right"], 2);
    }

    #[test]
    fn use_case_roundtrip() {
        let json = r#"{ "Id": "uc-17", "Name": "Erection planning", "Description": "Crane scheduling exchange." }"#;
        let uc: UseCase = serde_json::from_str(json).unwrap();
        assert_eq!(uc.id, "uc-17");
        let back: UseCase = serde_json::from_str(&serde_json::to_string(&uc).unwrap()).unwrap();
        assert_eq!(back, uc);
    }
}
