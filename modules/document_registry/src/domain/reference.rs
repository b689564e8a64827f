//! Reference lookup tables (branch, discipline, document type, phase)
//!
//! Loaded once at startup and never mutated afterwards.

use crate::contract::ReferenceKind;
use indexmap::IndexMap;

/// Code to description mapping, in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTable {
    kind: ReferenceKind,
    entries: IndexMap<String, String>,
}

impl ReferenceTable {
    pub fn new(kind: ReferenceKind) -> Self {
        Self {
            kind,
            entries: IndexMap::new(),
        }
    }

    /// Build a table from (code, description) pairs.
    /// A repeated code keeps its first position and its last description.
    pub fn from_entries<I, C, D>(kind: ReferenceKind, entries: I) -> Self
    where
        I: IntoIterator<Item = (C, D)>,
        C: Into<String>,
        D: Into<String>,
    {
        let mut table = Self::new(kind);
        for (code, description) in entries {
            table.insert(code, description);
        }
        table
    }

    pub(crate) fn insert(&mut self, code: impl Into<String>, description: impl Into<String>) {
        self.entries.insert(code.into(), description.into());
    }

    pub fn kind(&self) -> ReferenceKind {
        self.kind
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    pub fn description(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    /// Description for display, falling back to the code itself
    pub fn describe(&self, code: &str) -> String {
        self.description(code).unwrap_or(code).to_string()
    }

    /// Valid codes in file order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(code, description)| (code.as_str(), description.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The four lookup tables used by the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceData {
    pub branches: ReferenceTable,
    pub disciplines: ReferenceTable,
    pub document_types: ReferenceTable,
    pub phases: ReferenceTable,
}

impl ReferenceData {
    pub fn table(&self, kind: ReferenceKind) -> &ReferenceTable {
        match kind {
            ReferenceKind::Branch => &self.branches,
            ReferenceKind::Discipline => &self.disciplines,
            ReferenceKind::DocumentType => &self.document_types,
            ReferenceKind::Phase => &self.phases,
        }
    }
}
