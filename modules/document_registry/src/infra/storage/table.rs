//! Whole-file CSV tables with a header row

use super::record::TableRecord;
use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub(crate) fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}

/// Parse every row of a table.
///
/// Short rows are padded with empty cells and surplus cells are dropped, so a
/// ragged row never makes the whole store unreadable.
pub fn parse_table<R: TableRecord>(bytes: &[u8]) -> Result<Vec<R>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(strip_bom(bytes));

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();
    for record in reader.records() {
        let mut record = record?;
        record.truncate(headers.len());
        while record.len() < headers.len() {
            record.push_field("");
        }
        rows.push(record.deserialize::<R>(Some(&headers))?);
    }
    Ok(rows)
}

/// Render rows as CSV text; an empty table is the header row alone
pub fn render_table<R: TableRecord>(rows: &[R]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(R::HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush table: {}", e.error()))
}

/// Load a table; a missing file is an empty table
pub async fn read_table<R: TableRecord>(path: &Path) -> Result<Vec<R>> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Table file absent, treating as empty");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read {}", path.display()));
        }
    };

    let rows = parse_table(&bytes).with_context(|| format!("malformed table {}", path.display()))?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "Table loaded");
    Ok(rows)
}

/// Replace a table file with these rows
pub async fn write_table<R: TableRecord>(path: &Path, rows: &[R]) -> Result<()> {
    let bytes = render_table(rows)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    tokio::fs::write(path, bytes)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;

    tracing::debug!(path = %path.display(), rows = rows.len(), "Table saved");
    Ok(())
}
