//! Contract layer - public API for the interaction layer
//!
//! This layer contains transport-agnostic models and the native client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::RegistryApi;
pub use error::RegistryError;
pub use model::{
    CodeFilter, Document, DocumentEdit, DocumentFilter, NewDocument, NewProject, Project,
    ReferenceKind,
};
