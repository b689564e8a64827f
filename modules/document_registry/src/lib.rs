//! Document Registry Module
//!
//! Register of engineering projects and the documents produced for each one.
//! Every document receives a generated code built from its project's
//! attributes, its discipline, its document type and a per-discipline
//! sequential number.

// Public exports
pub mod contract;
pub use contract::{
    client::RegistryApi, error::RegistryError, CodeFilter, Document, DocumentEdit,
    DocumentFilter, NewDocument, NewProject, Project, ReferenceKind,
};

pub mod module;
pub use module::RegistryModule;

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
