//! CSV repository implementations

use crate::contract::{Document, Project};
use crate::domain::repository::{DocumentRepository, ProjectRepository};
use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

use super::record::{DocumentRecord, ProjectRecord};
use super::table;

// ===== Project Repository =====

pub struct CsvProjectRepository {
    path: PathBuf,
}

impl CsvProjectRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProjectRepository for CsvProjectRepository {
    async fn load_all(&self) -> Result<Vec<Project>> {
        let records: Vec<ProjectRecord> = table::read_table(&self.path).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn save_all(&self, projects: &[Project]) -> Result<()> {
        let records: Vec<ProjectRecord> = projects.iter().map(Into::into).collect();
        table::write_table(&self.path, &records).await
    }
}

// ===== Document Repository =====

pub struct CsvDocumentRepository {
    path: PathBuf,
}

impl CsvDocumentRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentRepository for CsvDocumentRepository {
    async fn load_all(&self) -> Result<Vec<Document>> {
        let records: Vec<DocumentRecord> = table::read_table(&self.path).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn save_all(&self, documents: &[Document]) -> Result<()> {
        let records: Vec<DocumentRecord> = documents.iter().map(Into::into).collect();
        table::write_table(&self.path, &records).await
    }
}
