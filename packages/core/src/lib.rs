//! Validated container for BIM graph exchange.
//!
//! This crate provides the unit of exchange used by the portfolio tool: a
//! [`GraphContainer`] holding a Turtle template graph, an optional Turtle
//! instance graph, access-control entries, a use case, and the metadata
//! nodes describing the contents. Graph and metadata fields are guarded by
//! validating setters; the whole container round-trips losslessly through
//! pretty-printed JSON.
//!
//! # Crate layout
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`types`] | Wire types: [`MetaDataNode`], [`AccessRight`], [`UseCase`] |
//! | [`validation`] | Turtle probe, metadata validity, whole-container check |
//! | [`container`] | [`GraphContainer`] with setters, JSON and file round-trip |
//! | [`render`] | Human-readable text summary of a container |
//!
//! # Quick start
//!
//! ```rust,ignore
//! use bimgraph::{GraphContainer, MetaDataNode};
//!
//! let mut container = GraphContainer::new();
//! container.set_template("@prefix ex: <http://example.org/> .")?;
//! container.set_metadata(vec![MetaDataNode {
//!     id: "n1".into(),
//!     class_type: "Wall".into(),
//!     properties: [("height".into(), "3.0".into())].into(),
//! }])?;
//!
//! container.save("exchange.json")?;
//! let loaded = GraphContainer::load("exchange.json")?;
//! assert_eq!(loaded, container);
//! ```
//!
//! # Validation notes
//!
//! The Turtle check is a deliberately shallow probe (one `@prefix`
//! declaration), not a parser — see [`validation::is_valid_turtle`].
//! Deserialisation bypasses the validating setters so previously saved
//! files keep loading; run [`validate_container`] afterwards for uniform
//! guarantees.

pub mod container;
pub mod render;
pub mod types;
pub mod validation;

pub use container::{ContainerError, GraphContainer, GraphSlot};
pub use render::render_container;
pub use types::{AccessRight, MetaDataNode, UseCase};
pub use validation::{
    duplicate_ids, is_valid_turtle, validate_container, validate_metadata, MetadataError,
};
