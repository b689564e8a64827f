//! Module bootstrap - builds repositories, reference data and the domain service

use crate::config::Config;
use crate::contract::RegistryApi;
use crate::domain::Service;
use crate::infra::storage::reference_loader::load_reference_data;
use crate::infra::storage::repositories::{CsvDocumentRepository, CsvProjectRepository};
use anyhow::Result;
use std::sync::Arc;

/// Document registry module
pub struct RegistryModule {
    service: Arc<Service>,
}

impl RegistryModule {
    /// Load reference data and wire the CSV-backed service.
    ///
    /// Fails if any reference table is missing or lacks its required columns.
    pub async fn init(config: Config) -> Result<Self> {
        let reference = Arc::new(load_reference_data(&config).await?);

        let project_repo = Arc::new(CsvProjectRepository::new(config.projects_path()));
        let document_repo = Arc::new(CsvDocumentRepository::new(config.documents_path()));

        let service = Arc::new(Service::new(project_repo, document_repo, reference));

        tracing::info!(
            data_dir = %config.data_dir.display(),
            "Document registry initialized"
        );
        Ok(Self { service })
    }

    /// In-process client for the interaction layer
    pub fn client(&self) -> Arc<dyn RegistryApi> {
        Arc::new(crate::api::native::NativeClient::new(self.service.clone()))
    }
}
