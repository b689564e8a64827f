//! Reference table loader
//!
//! Reference data is all-or-nothing: a missing file or a missing required
//! column aborts startup.

use super::table::strip_bom;
use crate::config::Config;
use crate::contract::ReferenceKind;
use crate::domain::{ReferenceData, ReferenceTable};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Fatal reference data errors
#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    #[error("Reference file not found: {}", .path.display())]
    MissingFile { path: PathBuf },

    #[error("Invalid columns in reference file {}: missing {}", .path.display(), .missing.join(", "))]
    InvalidSchema { path: PathBuf, missing: Vec<String> },

    #[error("Failed to read reference file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed reference file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Load one reference table from disk
pub async fn load_reference_table(
    kind: ReferenceKind,
    path: &Path,
) -> Result<ReferenceTable, ReferenceError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            ReferenceError::MissingFile {
                path: path.to_path_buf(),
            }
        } else {
            ReferenceError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let table = parse_reference_table(kind, path, &bytes)?;
    tracing::debug!(%kind, path = %path.display(), codes = table.len(), "Reference table loaded");
    Ok(table)
}

/// Parse reference table contents; `path` is only used for error reporting
pub fn parse_reference_table(
    kind: ReferenceKind,
    path: &Path,
    bytes: &[u8],
) -> Result<ReferenceTable, ReferenceError> {
    let parse_error = |source| ReferenceError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(strip_bom(bytes));

    let headers = reader.headers().map_err(parse_error)?.clone();
    let position = |column: &str| headers.iter().position(|h| h == column);

    let (Some(code_idx), Some(desc_idx)) = (
        position(kind.code_column()),
        position(kind.description_column()),
    ) else {
        let missing = [kind.code_column(), kind.description_column()]
            .into_iter()
            .filter(|column| position(column).is_none())
            .map(str::to_string)
            .collect();
        return Err(ReferenceError::InvalidSchema {
            path: path.to_path_buf(),
            missing,
        });
    };

    let mut table = ReferenceTable::new(kind);
    for record in reader.records() {
        let record = record.map_err(parse_error)?;
        table.insert(
            record.get(code_idx).unwrap_or_default(),
            record.get(desc_idx).unwrap_or_default(),
        );
    }

    Ok(table)
}

/// Load the four reference tables named by the configuration
pub async fn load_reference_data(config: &Config) -> Result<ReferenceData, ReferenceError> {
    Ok(ReferenceData {
        branches: load_reference_table(
            ReferenceKind::Branch,
            &config.reference_path(ReferenceKind::Branch),
        )
        .await?,
        disciplines: load_reference_table(
            ReferenceKind::Discipline,
            &config.reference_path(ReferenceKind::Discipline),
        )
        .await?,
        document_types: load_reference_table(
            ReferenceKind::DocumentType,
            &config.reference_path(ReferenceKind::DocumentType),
        )
        .await?,
        phases: load_reference_table(
            ReferenceKind::Phase,
            &config.reference_path(ReferenceKind::Phase),
        )
        .await?,
    })
}
