//! Domain service - business logic orchestration
//!
//! Every mutation follows the same contract: load the full collection,
//! mutate it in memory, persist the full collection. Nothing is written
//! unless the in-memory mutation succeeded.
//!
//! There is no locking. Two processes sharing the same files race and the
//! last writer wins; concurrent use is unsupported.

use super::codegen;
use super::reference::ReferenceData;
use super::repository::{DocumentRepository, ProjectRepository};
use super::validation;
use crate::contract::{
    Document, DocumentEdit, DocumentFilter, NewDocument, NewProject, Project, RegistryError,
};
use std::sync::Arc;

/// Domain service for projects and documents
pub struct Service {
    project_repo: Arc<dyn ProjectRepository>,
    document_repo: Arc<dyn DocumentRepository>,
    reference: Arc<ReferenceData>,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        project_repo: Arc<dyn ProjectRepository>,
        document_repo: Arc<dyn DocumentRepository>,
        reference: Arc<ReferenceData>,
    ) -> Self {
        Self {
            project_repo,
            document_repo,
            reference,
        }
    }

    /// Reference tables loaded at startup
    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    // ===== Project Operations =====

    /// List all projects in insertion order
    pub async fn list_projects(&self) -> Result<Vec<Project>, RegistryError> {
        self.load_projects().await
    }

    /// Get a project by SAP identifier
    pub async fn get_project(&self, sap_id: &str) -> Result<Project, RegistryError> {
        self.load_projects()
            .await?
            .into_iter()
            .find(|p| p.sap_id == sap_id)
            .ok_or_else(|| RegistryError::project_not_found(sap_id))
    }

    /// Create a project; a duplicate SAP identifier is rejected, never overwritten
    pub async fn create_project(&self, project: NewProject) -> Result<Project, RegistryError> {
        validation::validate_new_project(&self.reference, &project)?;

        let sap_id = project.sap_id.trim().to_string();
        let mut projects = self.load_projects().await?;
        if projects.iter().any(|p| p.sap_id == sap_id) {
            return Err(RegistryError::DuplicateKey { sap_id });
        }

        let record = Project {
            sap_id,
            name: project.name,
            branch_code: project.branch_code,
            initial_marker: project.initial_marker,
            phase_code: project.phase_code,
        };
        projects.push(record.clone());
        self.save_projects(&projects).await?;

        tracing::info!(sap_id = %record.sap_id, "Project created");
        Ok(record)
    }

    /// Delete a project and cascade to its documents.
    ///
    /// The two stores are written one after the other. A failure between
    /// the writes leaves documents pointing at a removed project.
    pub async fn delete_project(&self, sap_id: &str) -> Result<usize, RegistryError> {
        let mut projects = self.load_projects().await?;
        let before = projects.len();
        projects.retain(|p| p.sap_id != sap_id);
        if projects.len() == before {
            return Err(RegistryError::project_not_found(sap_id));
        }

        let mut documents = self.load_documents().await?;
        let total = documents.len();
        documents.retain(|d| d.sap_id != sap_id);
        let removed = total - documents.len();

        self.save_projects(&projects).await?;
        self.save_documents(&documents).await?;

        tracing::info!(sap_id, removed_documents = removed, "Project deleted");
        Ok(removed)
    }

    // ===== Document Operations =====

    /// List the documents of a project in insertion order
    pub async fn list_documents(&self, sap_id: &str) -> Result<Vec<Document>, RegistryError> {
        Ok(self
            .load_documents()
            .await?
            .into_iter()
            .filter(|d| d.sap_id == sap_id)
            .collect())
    }

    /// List the documents of a project matching the discipline/type filters
    pub async fn list_documents_filtered(
        &self,
        sap_id: &str,
        filter: &DocumentFilter,
    ) -> Result<Vec<Document>, RegistryError> {
        validation::validate_document_filter(&self.reference, filter)?;

        Ok(self
            .list_documents(sap_id)
            .await?
            .into_iter()
            .filter(|d| filter.matches(d))
            .collect())
    }

    /// Sequential the next document of (sap_id, discipline) would receive.
    ///
    /// Derived from the current row count, so a number freed by a delete
    /// can be handed out again.
    pub async fn next_sequential(
        &self,
        sap_id: &str,
        discipline_code: &str,
    ) -> Result<String, RegistryError> {
        validation::validate_code(&self.reference.disciplines, discipline_code)?;

        let documents = self.load_documents().await?;
        Ok(codegen::sequential(codegen::count_in_sequence(
            &documents,
            sap_id,
            discipline_code,
        )))
    }

    /// Create a document for an existing project
    pub async fn create_document(
        &self,
        sap_id: &str,
        document: NewDocument,
    ) -> Result<Document, RegistryError> {
        validation::validate_new_document(&self.reference, &document)?;
        let project = self.get_project(sap_id).await?;

        let mut documents = self.load_documents().await?;
        let count =
            codegen::count_in_sequence(&documents, &project.sap_id, &document.discipline_code);

        let mut record = Document {
            sap_id: project.sap_id.clone(),
            discipline_code: document.discipline_code,
            type_code: document.type_code,
            sequential: codegen::sequential(count),
            code: String::new(),
            description: document.description,
            designer_code: document.designer_code,
        };
        record.code = codegen::generated_code(&project, &record);

        if documents
            .iter()
            .any(|d| d.sap_id == record.sap_id && d.code == record.code)
        {
            tracing::warn!(
                sap_id = %record.sap_id,
                code = %record.code,
                "Generated code already in use; edit and delete by this code will be ambiguous"
            );
        }

        documents.push(record.clone());
        self.save_documents(&documents).await?;

        tracing::info!(sap_id = %record.sap_id, code = %record.code, "Document created");
        Ok(record)
    }

    /// Edit description and designer code; every other field is left untouched
    pub async fn update_document(
        &self,
        sap_id: &str,
        code: &str,
        edit: DocumentEdit,
    ) -> Result<Document, RegistryError> {
        let mut documents = self.load_documents().await?;
        let index = locate_document(&documents, sap_id, code)?;

        let record = &mut documents[index];
        record.description = edit.description;
        record.designer_code = edit.designer_code;
        let updated = record.clone();

        self.save_documents(&documents).await?;

        tracing::info!(sap_id, code, "Document updated");
        Ok(updated)
    }

    /// Delete exactly one document, returning the removed row
    pub async fn delete_document(&self, sap_id: &str, code: &str) -> Result<Document, RegistryError> {
        let mut documents = self.load_documents().await?;
        let index = locate_document(&documents, sap_id, code)?;
        let removed = documents.remove(index);

        self.save_documents(&documents).await?;

        tracing::info!(sap_id, code, "Document deleted");
        Ok(removed)
    }

    // ===== Helper Methods =====

    async fn load_projects(&self) -> Result<Vec<Project>, RegistryError> {
        self.project_repo.load_all().await.map_err(|e| {
            tracing::error!(error = ?e, "Failed to load project store");
            RegistryError::Internal
        })
    }

    async fn save_projects(&self, projects: &[Project]) -> Result<(), RegistryError> {
        self.project_repo.save_all(projects).await.map_err(|e| {
            tracing::error!(error = ?e, "Failed to persist project store");
            RegistryError::Internal
        })
    }

    async fn load_documents(&self) -> Result<Vec<Document>, RegistryError> {
        self.document_repo.load_all().await.map_err(|e| {
            tracing::error!(error = ?e, "Failed to load document store");
            RegistryError::Internal
        })
    }

    async fn save_documents(&self, documents: &[Document]) -> Result<(), RegistryError> {
        self.document_repo.save_all(documents).await.map_err(|e| {
            tracing::error!(error = ?e, "Failed to persist document store");
            RegistryError::Internal
        })
    }
}

/// Position of the single document with this (sap_id, code) pair
fn locate_document(documents: &[Document], sap_id: &str, code: &str) -> Result<usize, RegistryError> {
    let mut matches = documents
        .iter()
        .enumerate()
        .filter(|(_, d)| d.sap_id == sap_id && d.code == code)
        .map(|(index, _)| index);

    let first = matches
        .next()
        .ok_or_else(|| RegistryError::document_not_found(sap_id, code))?;

    let extra = matches.count();
    if extra > 0 {
        return Err(RegistryError::AmbiguousCode {
            sap_id: sap_id.to_string(),
            code: code.to_string(),
            matches: extra + 1,
        });
    }

    Ok(first)
}
