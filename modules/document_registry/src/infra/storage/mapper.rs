//! Record to model mappers
//!
//! Conversions between CSV row records and contract models

use super::record::{DocumentRecord, ProjectRecord};
use crate::contract::{Document, Project};

// ===== Project Conversions =====

impl From<ProjectRecord> for Project {
    fn from(record: ProjectRecord) -> Self {
        Self {
            sap_id: record.sap_id,
            name: record.name,
            branch_code: record.branch_code,
            initial_marker: record.initial_marker,
            phase_code: record.phase_code,
        }
    }
}

impl From<&Project> for ProjectRecord {
    fn from(model: &Project) -> Self {
        Self {
            sap_id: model.sap_id.clone(),
            name: model.name.clone(),
            branch_code: model.branch_code.clone(),
            initial_marker: model.initial_marker.clone(),
            phase_code: model.phase_code.clone(),
        }
    }
}

// ===== Document Conversions =====

impl From<DocumentRecord> for Document {
    fn from(record: DocumentRecord) -> Self {
        Self {
            sap_id: record.sap_id,
            discipline_code: record.discipline_code,
            type_code: record.type_code,
            sequential: record.sequential,
            code: record.code,
            description: record.description,
            designer_code: record.designer_code,
        }
    }
}

impl From<&Document> for DocumentRecord {
    fn from(model: &Document) -> Self {
        Self {
            sap_id: model.sap_id.clone(),
            discipline_code: model.discipline_code.clone(),
            type_code: model.type_code.clone(),
            sequential: model.sequential.clone(),
            code: model.code.clone(),
            description: model.description.clone(),
            designer_code: model.designer_code.clone(),
        }
    }
}
