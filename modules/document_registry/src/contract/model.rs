//! Contract models for the document registry
//!
//! All values are plain strings, exactly as they are persisted.

use std::fmt;

/// Engineering project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// SAP identifier (unique primary key, e.g. "CC00001")
    pub sap_id: String,
    /// Project name
    pub name: String,
    /// Branch code (key into the branch reference table)
    pub branch_code: String,
    /// Initial distance marker, free-form (e.g. "12.5")
    pub initial_marker: String,
    /// Phase code (key into the phase reference table)
    pub phase_code: String,
}

impl Project {
    /// Label used by project selectors: `<sapId> - <name>`
    pub fn selector_label(&self) -> String {
        format!("{} - {}", self.sap_id, self.name)
    }
}

/// Project creation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub sap_id: String,
    pub name: String,
    pub branch_code: String,
    pub initial_marker: String,
    pub phase_code: String,
}

/// Engineering document attached to a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// SAP identifier of the owning project
    pub sap_id: String,
    /// Discipline code (key into the discipline reference table)
    pub discipline_code: String,
    /// Document type code (key into the document type reference table)
    pub type_code: String,
    /// Three digit sequential within (sap_id, discipline_code)
    pub sequential: String,
    /// Generated document code
    pub code: String,
    /// Free-text description
    pub description: String,
    /// Designer-supplied code, not validated
    pub designer_code: String,
}

/// Document creation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocument {
    pub discipline_code: String,
    pub type_code: String,
    pub description: String,
    pub designer_code: String,
}

/// Editable document fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEdit {
    pub description: String,
    pub designer_code: String,
}

/// Equality filter on a single code column
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CodeFilter {
    /// No filtering
    #[default]
    All,
    /// Keep rows whose code equals the value
    Only(String),
}

impl CodeFilter {
    /// Sentinel accepted by selectors to mean "no filter"
    pub const ALL_SENTINEL: &'static str = "Todos";

    /// Parse a selector value; `Todos`, `all`, `*` and blank mean no filter.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty()
            || value == "*"
            || value.eq_ignore_ascii_case(Self::ALL_SENTINEL)
            || value.eq_ignore_ascii_case("all")
        {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    pub fn matches(&self, code: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == code,
        }
    }
}

impl From<Option<String>> for CodeFilter {
    fn from(value: Option<String>) -> Self {
        value.as_deref().map(Self::parse).unwrap_or_default()
    }
}

/// Discipline and document type filters for document listings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentFilter {
    pub discipline: CodeFilter,
    pub doc_type: CodeFilter,
}

impl DocumentFilter {
    pub fn matches(&self, document: &Document) -> bool {
        self.discipline.matches(&document.discipline_code)
            && self.doc_type.matches(&document.type_code)
    }
}

/// The four static lookup tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    Branch,
    Discipline,
    DocumentType,
    Phase,
}

impl ReferenceKind {
    /// Column holding the short code
    pub fn code_column(self) -> &'static str {
        match self {
            Self::Branch => "sigla_ramal",
            Self::Discipline => "sigla_disciplina",
            Self::DocumentType => "sigla_tipo",
            Self::Phase => "sigla_fase",
        }
    }

    /// Column holding the human-readable description
    pub fn description_column(self) -> &'static str {
        match self {
            Self::Branch => "descricao_ramal",
            Self::Discipline => "nome_disciplina",
            Self::DocumentType => "nome_tipo",
            Self::Phase => "descricao_fase",
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Branch => write!(f, "branch"),
            Self::Discipline => write!(f, "discipline"),
            Self::DocumentType => write!(f, "document type"),
            Self::Phase => write!(f, "phase"),
        }
    }
}
