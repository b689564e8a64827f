//! Repository traits for data access
//!
//! Each store is loaded and persisted as a whole collection: an operation
//! loads every row, mutates the collection in memory and saves it back.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{Document, Project};
use anyhow::Result;
use async_trait::async_trait;

/// Repository for project records
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Load every project in insertion order; a missing store is empty
    async fn load_all(&self) -> Result<Vec<Project>>;

    /// Replace the persisted store with these projects
    async fn save_all(&self, projects: &[Project]) -> Result<()>;
}

/// Repository for document records
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Load every document in insertion order; a missing store is empty
    async fn load_all(&self) -> Result<Vec<Document>>;

    /// Replace the persisted store with these documents
    async fn save_all(&self, documents: &[Document]) -> Result<()>;
}
