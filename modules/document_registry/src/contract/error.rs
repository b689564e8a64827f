//! Contract error types for the document registry
//!
//! These errors are transport-agnostic. Every variant except `Internal` is
//! recoverable and leaves the persisted stores unchanged.

use super::model::ReferenceKind;

/// Document registry domain errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A project with this SAP identifier already exists
    DuplicateKey {
        /// SAP identifier that was rejected
        sap_id: String,
    },
    /// Project or document not found
    NotFound {
        /// Resource type (project, document)
        resource: String,
        /// Resource identifier
        id: String,
    },
    /// More than one document carries the same generated code
    AmbiguousCode {
        /// Project SAP identifier
        sap_id: String,
        /// Generated code used for the lookup
        code: String,
        /// Number of matching rows
        matches: usize,
    },
    /// Code is not present in its reference table
    InvalidCode {
        /// Reference table the code was checked against
        kind: ReferenceKind,
        /// Rejected code
        code: String,
    },
    /// Storage failure
    Internal,
}

impl RegistryError {
    pub(crate) fn project_not_found(sap_id: &str) -> Self {
        Self::NotFound {
            resource: "project".to_string(),
            id: sap_id.to_string(),
        }
    }

    pub(crate) fn document_not_found(sap_id: &str, code: &str) -> Self {
        Self::NotFound {
            resource: "document".to_string(),
            id: format!("{}/{}", sap_id, code),
        }
    }
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateKey { sap_id } => {
                write!(f, "SAP identifier already exists: {}", sap_id)
            }
            Self::NotFound { resource, id } => {
                write!(f, "{} not found: {}", resource, id)
            }
            Self::AmbiguousCode {
                sap_id,
                code,
                matches,
            } => {
                write!(
                    f,
                    "Document code {} is ambiguous in project {} ({} matches)",
                    code, sap_id, matches
                )
            }
            Self::InvalidCode { kind, code } => {
                write!(f, "Unknown {} code: {}", kind, code)
            }
            Self::Internal => {
                write!(f, "Internal error")
            }
        }
    }
}

impl std::error::Error for RegistryError {}
