//! Common test utilities: in-memory repositories and reference fixtures

#![allow(dead_code)]

use async_trait::async_trait;
use document_registry::contract::{Document, NewDocument, NewProject, Project, ReferenceKind};
use document_registry::domain::repository::{DocumentRepository, ProjectRepository};
use document_registry::domain::{ReferenceData, ReferenceTable, Service};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct MockProjectRepo {
    data: Arc<RwLock<Vec<Project>>>,
    saves: Arc<AtomicUsize>,
}

impl MockProjectRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<Project> {
        self.data.read().clone()
    }

    /// Number of times the store was persisted
    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProjectRepository for MockProjectRepo {
    async fn load_all(&self) -> anyhow::Result<Vec<Project>> {
        Ok(self.data.read().clone())
    }

    async fn save_all(&self, projects: &[Project]) -> anyhow::Result<()> {
        *self.data.write() = projects.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockDocumentRepo {
    data: Arc<RwLock<Vec<Document>>>,
    saves: Arc<AtomicUsize>,
}

impl MockDocumentRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<Document> {
        self.data.read().clone()
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Seed rows directly, bypassing the service
    pub fn seed(&self, documents: Vec<Document>) {
        *self.data.write() = documents;
    }
}

#[async_trait]
impl DocumentRepository for MockDocumentRepo {
    async fn load_all(&self) -> anyhow::Result<Vec<Document>> {
        Ok(self.data.read().clone())
    }

    async fn save_all(&self, documents: &[Document]) -> anyhow::Result<()> {
        *self.data.write() = documents.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Repository whose storage is unreachable
pub struct BrokenDocumentRepo;

#[async_trait]
impl DocumentRepository for BrokenDocumentRepo {
    async fn load_all(&self) -> anyhow::Result<Vec<Document>> {
        anyhow::bail!("disk unavailable")
    }

    async fn save_all(&self, _documents: &[Document]) -> anyhow::Result<()> {
        anyhow::bail!("disk unavailable")
    }
}

pub fn reference_data() -> ReferenceData {
    ReferenceData {
        branches: ReferenceTable::from_entries(
            ReferenceKind::Branch,
            [("RB", "Ramal Bauru"), ("RS", "Ramal Sul")],
        ),
        disciplines: ReferenceTable::from_entries(
            ReferenceKind::Discipline,
            [("EL", "Elétrica"), ("CV", "Civil"), ("GT", "Geotecnia")],
        ),
        document_types: ReferenceTable::from_entries(
            ReferenceKind::DocumentType,
            [("MD", "Memorial Descritivo"), ("DE", "Desenho")],
        ),
        phases: ReferenceTable::from_entries(
            ReferenceKind::Phase,
            [("PE", "Projeto Executivo"), ("PB", "Projeto Básico")],
        ),
    }
}

pub struct Harness {
    pub service: Arc<Service>,
    pub projects: MockProjectRepo,
    pub documents: MockDocumentRepo,
}

pub fn harness() -> Harness {
    let projects = MockProjectRepo::new();
    let documents = MockDocumentRepo::new();
    let service = Arc::new(Service::new(
        Arc::new(projects.clone()),
        Arc::new(documents.clone()),
        Arc::new(reference_data()),
    ));
    Harness {
        service,
        projects,
        documents,
    }
}

pub fn new_project(sap_id: &str) -> NewProject {
    NewProject {
        sap_id: sap_id.to_string(),
        name: format!("Projeto {}", sap_id),
        branch_code: "RB".to_string(),
        initial_marker: "12.5".to_string(),
        phase_code: "PE".to_string(),
    }
}

pub fn new_document(discipline: &str, doc_type: &str) -> NewDocument {
    NewDocument {
        discipline_code: discipline.to_string(),
        type_code: doc_type.to_string(),
        description: format!("{} {}", discipline, doc_type),
        designer_code: String::new(),
    }
}
