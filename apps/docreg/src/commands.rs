//! Command dispatch - thin layer that delegates to the registry client

use crate::cli::{Commands, DocumentCommand, ProjectCommand};
use crate::output::{
    document_table, emit, DocumentDto, MessageDto, ProjectDto, ReferenceEntryDto,
};
use anyhow::Result;
use document_registry::{
    CodeFilter, DocumentEdit, DocumentFilter, NewDocument, NewProject, ReferenceKind, RegistryApi,
};

pub async fn run(client: &dyn RegistryApi, command: Commands, json: bool) -> Result<()> {
    match command {
        Commands::Project { command } => run_project(client, command, json).await,
        Commands::Doc { command } => run_document(client, command, json).await,
        Commands::Reference { table } => {
            let kind = ReferenceKind::from(table);
            let entries: Vec<ReferenceEntryDto> = client
                .reference_entries(kind)
                .into_iter()
                .map(|(code, description)| ReferenceEntryDto { code, description })
                .collect();
            emit(json, &entries, |entries| {
                entries
                    .iter()
                    .map(|e| format!("{}\t{}", e.code, e.description))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
    }
}

async fn run_project(client: &dyn RegistryApi, command: ProjectCommand, json: bool) -> Result<()> {
    match command {
        ProjectCommand::Add {
            sap_id,
            name,
            branch,
            initial_marker,
            phase,
        } => {
            let project = client
                .create_project(NewProject {
                    sap_id,
                    name,
                    branch_code: branch,
                    initial_marker,
                    phase_code: phase,
                })
                .await?;
            let dto = ProjectDto::new(client, project);
            emit(json, &dto, |p| format!("Project saved: {}", p.summary()))
        }
        ProjectCommand::List => {
            let projects: Vec<ProjectDto> = client
                .list_projects()
                .await?
                .into_iter()
                .map(|p| ProjectDto::new(client, p))
                .collect();
            emit(json, &projects, |projects| {
                if projects.is_empty() {
                    return "No projects registered.".to_string();
                }
                projects
                    .iter()
                    .map(ProjectDto::summary)
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
        ProjectCommand::Show { sap_id } => {
            let dto = ProjectDto::new(client, client.get_project(&sap_id).await?);
            emit(json, &dto, ProjectDto::summary)
        }
        ProjectCommand::Delete { sap_id } => {
            let removed = client.delete_project(&sap_id).await?;
            let result = MessageDto {
                removed_documents: Some(removed),
                ..MessageDto::new(format!(
                    "Project {} and {} document(s) removed.",
                    sap_id, removed
                ))
            };
            emit(json, &result, |m| m.message.clone())
        }
    }
}

async fn run_document(client: &dyn RegistryApi, command: DocumentCommand, json: bool) -> Result<()> {
    match command {
        DocumentCommand::Add {
            project,
            discipline,
            doc_type,
            description,
            designer_code,
        } => {
            let document = client
                .create_document(
                    &project,
                    NewDocument {
                        discipline_code: discipline,
                        type_code: doc_type,
                        description,
                        designer_code,
                    },
                )
                .await?;
            let dto = DocumentDto::from(document);
            emit(json, &dto, |d| format!("Document {} saved.", d.code))
        }
        DocumentCommand::List {
            project,
            discipline,
            doc_type,
        } => {
            let active = client.get_project(&project).await?;
            let filter = DocumentFilter {
                discipline: CodeFilter::parse(&discipline),
                doc_type: CodeFilter::parse(&doc_type),
            };
            let documents: Vec<DocumentDto> = client
                .list_documents_filtered(&project, &filter)
                .await?
                .into_iter()
                .map(DocumentDto::from)
                .collect();
            emit(json, &documents, |documents| {
                let header = format!("Active project: {}", active.selector_label());
                if documents.is_empty() {
                    format!("{}\nNo documents match the filters.", header)
                } else {
                    format!("{}\n{}", header, document_table(documents))
                }
            })
        }
        DocumentCommand::Next {
            project,
            discipline,
        } => {
            let sequential = client.next_sequential(&project, &discipline).await?;
            emit(json, &sequential, String::clone)
        }
        DocumentCommand::Edit {
            project,
            code,
            description,
            designer_code,
        } => {
            let current = client
                .list_documents(&project)
                .await?
                .into_iter()
                .find(|d| d.code == code);
            let (current_description, current_designer_code) = current
                .map(|d| (d.description, d.designer_code))
                .unwrap_or_default();

            let document = client
                .update_document(
                    &project,
                    &code,
                    DocumentEdit {
                        description: description.unwrap_or(current_description),
                        designer_code: designer_code.unwrap_or(current_designer_code),
                    },
                )
                .await?;
            let dto = DocumentDto::from(document);
            emit(json, &dto, |d| format!("Document {} updated.", d.code))
        }
        DocumentCommand::Delete { project, code } => {
            let removed = client.delete_document(&project, &code).await?;
            let result = MessageDto {
                code: Some(removed.code.clone()),
                ..MessageDto::new(format!("Document {} deleted.", removed.code))
            };
            emit(json, &result, |m| m.message.clone())
        }
    }
}
