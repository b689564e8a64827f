//! Output DTOs and plain-text rendering

use anyhow::Result;
use document_registry::{Document, Project, ReferenceKind, RegistryApi};
use serde::Serialize;

/// Project as printed by the CLI, with reference descriptions resolved
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDto {
    pub sap_id: String,
    pub name: String,
    pub branch_code: String,
    pub branch_description: String,
    pub initial_marker: String,
    pub phase_code: String,
    pub phase_description: String,
}

impl ProjectDto {
    pub fn new(client: &dyn RegistryApi, project: Project) -> Self {
        Self {
            branch_description: client.describe(ReferenceKind::Branch, &project.branch_code),
            phase_description: client.describe(ReferenceKind::Phase, &project.phase_code),
            sap_id: project.sap_id,
            name: project.name,
            branch_code: project.branch_code,
            initial_marker: project.initial_marker,
            phase_code: project.phase_code,
        }
    }

    /// `<sapId> – <name> | <branch>, Km <marker>, Fase <phase>`
    pub fn summary(&self) -> String {
        format!(
            "{} – {} | {}, Km {}, Fase {}",
            self.sap_id, self.name, self.branch_description, self.initial_marker, self.phase_description
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentDto {
    pub sap_id: String,
    pub discipline_code: String,
    pub type_code: String,
    pub sequential: String,
    pub code: String,
    pub description: String,
    pub designer_code: String,
}

impl From<Document> for DocumentDto {
    fn from(document: Document) -> Self {
        Self {
            sap_id: document.sap_id,
            discipline_code: document.discipline_code,
            type_code: document.type_code,
            sequential: document.sequential,
            code: document.code,
            description: document.description,
            designer_code: document.designer_code,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReferenceEntryDto {
    pub code: String,
    pub description: String,
}

/// Outcome of a mutation
#[derive(Debug, Clone, Serialize)]
pub struct MessageDto {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed_documents: Option<usize>,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            removed_documents: None,
        }
    }
}

/// Print `value` as JSON, or the plain rendering
pub fn emit<T: Serialize>(json: bool, value: &T, plain: impl FnOnce(&T) -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        let text = plain(value);
        if !text.is_empty() {
            println!("{}", text);
        }
    }
    Ok(())
}

/// Fixed-width table of documents
pub fn document_table(documents: &[DocumentDto]) -> String {
    const HEADERS: [&str; 6] = [
        "Código",
        "Disciplina",
        "Tipo",
        "Sequencial",
        "Descrição",
        "Código Projetista",
    ];

    let rows: Vec<[&str; 6]> = documents
        .iter()
        .map(|d| {
            [
                d.code.as_str(),
                d.discipline_code.as_str(),
                d.type_code.as_str(),
                d.sequential.as_str(),
                d.description.as_str(),
                d.designer_code.as_str(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |cells: &[&str; 6]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![render(&HEADERS)];
    lines.extend(rows.iter().map(render));
    lines.join("\n")
}
