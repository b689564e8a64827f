//! Row records for the CSV stores
//!
//! Column names are the historical headers of the project and document files.
//! Missing columns deserialize as empty strings; unknown columns are ignored.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Row type with a fixed header
pub trait TableRecord: Serialize + DeserializeOwned {
    /// Header row, in column order
    const HEADERS: &'static [&'static str];
}

/// Project store row (`projetos.csv`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectRecord {
    #[serde(rename = "ID SAP")]
    pub sap_id: String,
    #[serde(rename = "Projeto")]
    pub name: String,
    #[serde(rename = "Ramal")]
    pub branch_code: String,
    #[serde(rename = "Km Inicial")]
    pub initial_marker: String,
    #[serde(rename = "Fase")]
    pub phase_code: String,
}

impl TableRecord for ProjectRecord {
    const HEADERS: &'static [&'static str] = &["ID SAP", "Projeto", "Ramal", "Km Inicial", "Fase"];
}

/// Document store row (`lista_documentos.csv`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentRecord {
    #[serde(rename = "ID SAP")]
    pub sap_id: String,
    #[serde(rename = "Disciplina")]
    pub discipline_code: String,
    #[serde(rename = "Tipo")]
    pub type_code: String,
    #[serde(rename = "Sequencial")]
    pub sequential: String,
    #[serde(rename = "Código")]
    pub code: String,
    #[serde(rename = "Descrição")]
    pub description: String,
    #[serde(rename = "Código Projetista")]
    pub designer_code: String,
}

impl TableRecord for DocumentRecord {
    const HEADERS: &'static [&'static str] = &[
        "ID SAP",
        "Disciplina",
        "Tipo",
        "Sequencial",
        "Código",
        "Descrição",
        "Código Projetista",
    ];
}
