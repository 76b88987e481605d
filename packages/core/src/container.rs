//! The validated exchange container and its operational error type.
//!
//! A [`GraphContainer`] owns five things: the Turtle template graph, an
//! optional Turtle instance graph, the access-right list, the use case, and
//! the metadata node list. The graph and metadata fields are guarded by
//! validating setters; access rights and use case pass straight through.
//!
//! # Validation asymmetry
//!
//! [`GraphContainer::from_json`] and [`GraphContainer::load`] deserialise
//! fields directly and do **not** re-run the validating setters. A container
//! loaded from a file can therefore hold payloads that `set_template` or
//! `set_metadata` would reject. This is deliberate: files written by earlier
//! versions of the tool must keep loading. Run
//! [`validate_container`](crate::validation::validate_container) after
//! loading when uniform guarantees are needed.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{AccessRight, MetaDataNode, UseCase};
use crate::validation::{is_valid_turtle, validate_metadata, MetadataError};

/// Which graph payload an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphSlot {
    /// The schema/skeleton payload (`GraphTemplate`).
    Template,
    /// The populated payload matching the template (`GraphData`).
    Instance,
}

impl std::fmt::Display for GraphSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphSlot::Template => write!(f, "template graph"),
            GraphSlot::Instance => write!(f, "instance graph"),
        }
    }
}

/// Errors returned by [`GraphContainer`] operations.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// A graph payload failed the shallow Turtle probe at assignment time.
    #[error("the {0} is not valid Turtle: no `@prefix` declaration found")]
    InvalidSyntax(GraphSlot),

    /// The metadata list failed the validity check at assignment time.
    #[error("invalid metadata: {0}")]
    InvalidMetadata(#[from] MetadataError),

    /// A whole-container check found no template graph. Only returned by
    /// [`validate_container`](crate::validation::validate_container); a
    /// freshly constructed container legally has no template yet.
    #[error("no template graph has been set")]
    MissingTemplate,

    /// Deserialisation input was not valid JSON for the container shape.
    #[error("input is not a valid graph container: {0}")]
    MalformedInput(#[source] serde_json::Error),

    /// A path-based load was given a path that does not exist.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The underlying read or write failed.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A validated container for one BIM graph exchange artifact.
///
/// Constructed empty via [`GraphContainer::new`], populated through the
/// setters, and round-tripped through pretty-printed JSON with the wire
/// field names the portfolio tool has always used (`GraphTemplate`,
/// `GraphData`, `AccessRights`, `UseCase`, `GraphMetadata`).
///
/// Each container owns its fields exclusively; nothing is shared between
/// instances. Callers embedding a container in a concurrent system are
/// responsible for synchronising access to it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GraphContainer {
    #[serde(rename = "GraphTemplate")]
    template: Option<String>,

    #[serde(rename = "GraphData")]
    instance: Option<String>,

    #[serde(rename = "AccessRights")]
    access_rights: Option<Vec<AccessRight>>,

    #[serde(rename = "UseCase")]
    use_case: Option<UseCase>,

    #[serde(rename = "GraphMetadata", default)]
    metadata: Vec<MetaDataNode>,
}

impl GraphContainer {
    /// Create a container with an empty metadata list and every other field
    /// unset. No validation happens until fields are assigned.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the template graph.
    ///
    /// Rejects with [`ContainerError::InvalidSyntax`] when the text fails
    /// the shallow Turtle probe; the previous value is retained.
    pub fn set_template(&mut self, text: impl Into<String>) -> Result<(), ContainerError> {
        let text = text.into();
        if !is_valid_turtle(&text) {
            return Err(ContainerError::InvalidSyntax(GraphSlot::Template));
        }
        self.template = Some(text);
        Ok(())
    }

    /// Set the instance graph. Same contract as [`set_template`].
    ///
    /// An unset instance graph is a valid state; rejected input never clears
    /// a previously assigned value.
    ///
    /// [`set_template`]: GraphContainer::set_template
    pub fn set_instance(&mut self, text: impl Into<String>) -> Result<(), ContainerError> {
        let text = text.into();
        if !is_valid_turtle(&text) {
            return Err(ContainerError::InvalidSyntax(GraphSlot::Instance));
        }
        self.instance = Some(text);
        Ok(())
    }

    /// Replace the metadata list, preserving order.
    ///
    /// Rejects with [`ContainerError::InvalidMetadata`] carrying the first
    /// violation found; the previous list is retained.
    pub fn set_metadata(&mut self, nodes: Vec<MetaDataNode>) -> Result<(), ContainerError> {
        validate_metadata(&nodes)?;
        self.metadata = nodes;
        Ok(())
    }

    /// Replace the access-right list. No validation; always succeeds.
    pub fn set_access_rights(&mut self, rights: Vec<AccessRight>) {
        self.access_rights = Some(rights);
    }

    /// Replace the use case. No validation; always succeeds.
    pub fn set_use_case(&mut self, use_case: UseCase) {
        self.use_case = Some(use_case);
    }

    /// The template graph, if one has been set.
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    /// The instance graph, if one has been set.
    pub fn instance(&self) -> Option<&str> {
        self.instance.as_deref()
    }

    /// The metadata nodes, in assignment order.
    pub fn metadata(&self) -> &[MetaDataNode] {
        &self.metadata
    }

    /// The access rights, if any have been set.
    pub fn access_rights(&self) -> Option<&[AccessRight]> {
        self.access_rights.as_deref()
    }

    /// The use case, if one has been set.
    pub fn use_case(&self) -> Option<&UseCase> {
        self.use_case.as_ref()
    }

    /// Serialise to pretty-printed JSON.
    ///
    /// Output is deterministic for equal field values: field order is fixed
    /// by the struct and property maps iterate in key order.
    pub fn to_json(&self) -> String {
        // String keys and infallible field types only; pretty-printing this
        // shape cannot fail.
        serde_json::to_string_pretty(self).expect("container serialises to JSON")
    }

    /// Deserialise a container from JSON text.
    ///
    /// Fails with [`ContainerError::MalformedInput`] when the text is not
    /// valid JSON for the container shape. Unknown fields are ignored.
    /// Field values are loaded as-is, bypassing the validating setters (see
    /// the module docs on the validation asymmetry).
    pub fn from_json(text: &str) -> Result<Self, ContainerError> {
        serde_json::from_str(text).map_err(ContainerError::MalformedInput)
    }

    /// Serialise to JSON and write it to `path`.
    ///
    /// Fails with [`ContainerError::Io`] when the write cannot complete; the
    /// error is surfaced, never swallowed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ContainerError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()).map_err(|source| ContainerError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read all bytes from `path` and deserialise a container from them.
    ///
    /// Fails with [`ContainerError::FileNotFound`] when the path does not
    /// exist, [`ContainerError::Io`] when the read fails, and otherwise
    /// delegates to [`from_json`](GraphContainer::from_json).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContainerError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ContainerError::FileNotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path).map_err(|source| ContainerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

// --- tests -------------------------------------------------------------------
