//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    Document, DocumentEdit, DocumentFilter, NewDocument, NewProject, Project, ReferenceKind,
    RegistryApi, RegistryError,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl RegistryApi for NativeClient {
    fn reference_entries(&self, kind: ReferenceKind) -> Vec<(String, String)> {
        self.service
            .reference()
            .table(kind)
            .entries()
            .map(|(code, description)| (code.to_string(), description.to_string()))
            .collect()
    }

    fn describe(&self, kind: ReferenceKind, code: &str) -> String {
        self.service.reference().table(kind).describe(code)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, RegistryError> {
        self.service.list_projects().await
    }

    async fn get_project(&self, sap_id: &str) -> Result<Project, RegistryError> {
        self.service.get_project(sap_id).await
    }

    async fn create_project(&self, project: NewProject) -> Result<Project, RegistryError> {
        self.service.create_project(project).await
    }

    async fn delete_project(&self, sap_id: &str) -> Result<usize, RegistryError> {
        self.service.delete_project(sap_id).await
    }

    async fn list_documents(&self, sap_id: &str) -> Result<Vec<Document>, RegistryError> {
        self.service.list_documents(sap_id).await
    }

    async fn list_documents_filtered(
        &self,
        sap_id: &str,
        filter: &DocumentFilter,
    ) -> Result<Vec<Document>, RegistryError> {
        self.service.list_documents_filtered(sap_id, filter).await
    }

    async fn next_sequential(
        &self,
        sap_id: &str,
        discipline_code: &str,
    ) -> Result<String, RegistryError> {
        self.service.next_sequential(sap_id, discipline_code).await
    }

    async fn create_document(
        &self,
        sap_id: &str,
        document: NewDocument,
    ) -> Result<Document, RegistryError> {
        self.service.create_document(sap_id, document).await
    }

    async fn update_document(
        &self,
        sap_id: &str,
        code: &str,
        edit: DocumentEdit,
    ) -> Result<Document, RegistryError> {
        self.service.update_document(sap_id, code, edit).await
    }

    async fn delete_document(&self, sap_id: &str, code: &str) -> Result<Document, RegistryError> {
        self.service.delete_document(sap_id, code).await
    }
}
