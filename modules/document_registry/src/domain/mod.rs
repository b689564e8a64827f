//! Domain layer - business logic and services

pub mod codegen;
pub mod reference;
pub mod repository;
pub mod service;
pub mod validation;

pub use reference::{ReferenceData, ReferenceTable};
pub use repository::{DocumentRepository, ProjectRepository};
pub use service::Service;
