//! Configuration for the document registry module

use crate::contract::ReferenceKind;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Document registry configuration
///
/// File names are resolved against `data_dir` unless they are absolute.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the stores and reference tables
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Project store
    #[serde(default = "default_projects_file")]
    pub projects_file: PathBuf,

    /// Document store
    #[serde(default = "default_documents_file")]
    pub documents_file: PathBuf,

    /// Branch reference table
    #[serde(default = "default_branches_file")]
    pub branches_file: PathBuf,

    /// Discipline reference table
    #[serde(default = "default_disciplines_file")]
    pub disciplines_file: PathBuf,

    /// Document type reference table
    #[serde(default = "default_document_types_file")]
    pub document_types_file: PathBuf,

    /// Phase reference table
    #[serde(default = "default_phases_file")]
    pub phases_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            projects_file: default_projects_file(),
            documents_file: default_documents_file(),
            branches_file: default_branches_file(),
            disciplines_file: default_disciplines_file(),
            document_types_file: default_document_types_file(),
            phases_file: default_phases_file(),
        }
    }
}

impl Config {
    /// Default configuration rooted at `data_dir`
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn projects_path(&self) -> PathBuf {
        self.resolve(&self.projects_file)
    }

    pub fn documents_path(&self) -> PathBuf {
        self.resolve(&self.documents_file)
    }

    pub fn reference_path(&self, kind: ReferenceKind) -> PathBuf {
        let file = match kind {
            ReferenceKind::Branch => &self.branches_file,
            ReferenceKind::Discipline => &self.disciplines_file,
            ReferenceKind::DocumentType => &self.document_types_file,
            ReferenceKind::Phase => &self.phases_file,
        };
        self.resolve(file)
    }

    fn resolve(&self, file: &Path) -> PathBuf {
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.data_dir.join(file)
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_projects_file() -> PathBuf {
    PathBuf::from("projetos.csv")
}

fn default_documents_file() -> PathBuf {
    PathBuf::from("lista_documentos.csv")
}

fn default_branches_file() -> PathBuf {
    PathBuf::from("ramais.csv")
}

fn default_disciplines_file() -> PathBuf {
    PathBuf::from("disciplinas.csv")
}

fn default_document_types_file() -> PathBuf {
    PathBuf::from("tipos_documento.csv")
}

fn default_phases_file() -> PathBuf {
    PathBuf::from("fases.csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_resolve_against_data_dir() {
        let config = Config::with_data_dir("/srv/ld");
        assert_eq!(config.projects_path(), PathBuf::from("/srv/ld/projetos.csv"));
        assert_eq!(
            config.documents_path(),
            PathBuf::from("/srv/ld/lista_documentos.csv")
        );
        assert_eq!(
            config.reference_path(ReferenceKind::DocumentType),
            PathBuf::from("/srv/ld/tipos_documento.csv")
        );
    }

    #[test]
    fn test_absolute_file_overrides_data_dir() {
        let config = Config {
            phases_file: PathBuf::from("/etc/ld/fases.csv"),
            ..Config::with_data_dir("/srv/ld")
        };
        assert_eq!(
            config.reference_path(ReferenceKind::Phase),
            PathBuf::from("/etc/ld/fases.csv")
        );
        assert_eq!(
            config.reference_path(ReferenceKind::Branch),
            PathBuf::from("/srv/ld/ramais.csv")
        );
    }
}
