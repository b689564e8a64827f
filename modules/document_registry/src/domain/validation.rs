//! Reference code validation

use super::reference::{ReferenceData, ReferenceTable};
use crate::contract::{CodeFilter, DocumentFilter, NewDocument, NewProject, RegistryError};

/// Check that a code exists in its reference table
pub fn validate_code(table: &ReferenceTable, code: &str) -> Result<(), RegistryError> {
    if !table.contains(code) {
        return Err(RegistryError::InvalidCode {
            kind: table.kind(),
            code: code.to_string(),
        });
    }
    Ok(())
}

/// Check a filter value; the "all" filter always passes
pub fn validate_filter(table: &ReferenceTable, filter: &CodeFilter) -> Result<(), RegistryError> {
    match filter {
        CodeFilter::All => Ok(()),
        CodeFilter::Only(code) => validate_code(table, code),
    }
}

/// Validate branch and phase of a new project
pub fn validate_new_project(
    reference: &ReferenceData,
    project: &NewProject,
) -> Result<(), RegistryError> {
    validate_code(&reference.branches, &project.branch_code)?;
    validate_code(&reference.phases, &project.phase_code)
}

/// Validate discipline and type of a new document
pub fn validate_new_document(
    reference: &ReferenceData,
    document: &NewDocument,
) -> Result<(), RegistryError> {
    validate_code(&reference.disciplines, &document.discipline_code)?;
    validate_code(&reference.document_types, &document.type_code)
}

/// Validate both columns of a document filter
pub fn validate_document_filter(
    reference: &ReferenceData,
    filter: &DocumentFilter,
) -> Result<(), RegistryError> {
    validate_filter(&reference.disciplines, &filter.discipline)?;
    validate_filter(&reference.document_types, &filter.doc_type)
}
