//! Native client trait for the interaction layer
//!
//! Forms, lists and command handlers talk to the registry through this trait.
//! NO HTTP - direct function calls.

use super::{
    error::RegistryError,
    model::{Document, DocumentEdit, DocumentFilter, NewDocument, NewProject, Project, ReferenceKind},
};
use async_trait::async_trait;

/// Document registry API
#[async_trait]
pub trait RegistryApi: Send + Sync {
    // ===== Reference Data =====

    /// Valid codes of a reference table with their descriptions, in file order
    fn reference_entries(&self, kind: ReferenceKind) -> Vec<(String, String)>;

    /// Description of a code, falling back to the code itself
    fn describe(&self, kind: ReferenceKind, code: &str) -> String;

    // ===== Project Operations =====

    /// List all projects in insertion order
    async fn list_projects(&self) -> Result<Vec<Project>, RegistryError>;

    /// Get a project by SAP identifier
    async fn get_project(&self, sap_id: &str) -> Result<Project, RegistryError>;

    /// Create a project, rejecting duplicate SAP identifiers
    async fn create_project(&self, project: NewProject) -> Result<Project, RegistryError>;

    /// Delete a project and its documents, returning the number of documents removed
    async fn delete_project(&self, sap_id: &str) -> Result<usize, RegistryError>;

    // ===== Document Operations =====

    /// List the documents of a project in insertion order
    async fn list_documents(&self, sap_id: &str) -> Result<Vec<Document>, RegistryError>;

    /// List the documents of a project matching discipline/type filters
    async fn list_documents_filtered(
        &self,
        sap_id: &str,
        filter: &DocumentFilter,
    ) -> Result<Vec<Document>, RegistryError>;

    /// Sequential the next document of (sap_id, discipline) would receive
    async fn next_sequential(
        &self,
        sap_id: &str,
        discipline_code: &str,
    ) -> Result<String, RegistryError>;

    /// Create a document, deriving its sequential and generated code
    async fn create_document(
        &self,
        sap_id: &str,
        document: NewDocument,
    ) -> Result<Document, RegistryError>;

    /// Edit description and designer code of the document with this generated code
    async fn update_document(
        &self,
        sap_id: &str,
        code: &str,
        edit: DocumentEdit,
    ) -> Result<Document, RegistryError>;

    /// Delete the document with this generated code, returning the removed row
    async fn delete_document(&self, sap_id: &str, code: &str) -> Result<Document, RegistryError>;
}
