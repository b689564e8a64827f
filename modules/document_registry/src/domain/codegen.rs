//! Sequential numbering and document code generation

use crate::contract::{Document, Project};

/// Separator between the fields of a generated code. Not escaped inside fields.
pub const CODE_SEPARATOR: &str = "-";

/// Sequential for the next document given how many already share its
/// (project, discipline) pair: `count + 1`, zero-padded to three digits.
pub fn sequential(count: usize) -> String {
    format!("{:03}", count + 1)
}

/// Document code: SAP id, branch, initial marker, phase, discipline, type and sequential.
///
/// The document's own `code` field is ignored.
pub fn generated_code(project: &Project, document: &Document) -> String {
    [
        project.sap_id.as_str(),
        project.branch_code.as_str(),
        project.initial_marker.as_str(),
        project.phase_code.as_str(),
        document.discipline_code.as_str(),
        document.type_code.as_str(),
        document.sequential.as_str(),
    ]
    .join(CODE_SEPARATOR)
}

/// Number of documents sharing the (sap_id, discipline) pair
pub fn count_in_sequence(documents: &[Document], sap_id: &str, discipline_code: &str) -> usize {
    documents
        .iter()
        .filter(|d| d.sap_id == sap_id && d.discipline_code == discipline_code)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project {
            sap_id: "CC00001".to_string(),
            name: "Pátio Norte".to_string(),
            branch_code: "RB".to_string(),
            initial_marker: "12.5".to_string(),
            phase_code: "PE".to_string(),
        }
    }

    fn document(sap_id: &str, discipline: &str, sequential: &str) -> Document {
        Document {
            sap_id: sap_id.to_string(),
            discipline_code: discipline.to_string(),
            type_code: "MD".to_string(),
            sequential: sequential.to_string(),
            code: String::new(),
            description: String::new(),
            designer_code: String::new(),
        }
    }

    #[test]
    fn test_sequential_padding() {
        assert_eq!(sequential(0), "001");
        assert_eq!(sequential(9), "010");
        assert_eq!(sequential(98), "099");
        assert_eq!(sequential(998), "999");
        assert_eq!(sequential(999), "1000");
    }

    #[test]
    fn test_generated_code_field_order() {
        let doc = document("CC00001", "EL", "001");
        assert_eq!(
            generated_code(&project(), &doc),
            "CC00001-RB-12.5-PE-EL-MD-001"
        );
    }

    #[test]
    fn test_separator_inside_field_is_not_escaped() {
        let mut project = project();
        project.initial_marker = "12-500".to_string();
        let doc = document("CC00001", "EL", "001");
        assert_eq!(
            generated_code(&project, &doc),
            "CC00001-RB-12-500-PE-EL-MD-001"
        );
    }

    #[test]
    fn test_count_is_scoped_per_project_and_discipline() {
        let docs = vec![
            document("CC00001", "EL", "001"),
            document("CC00001", "EL", "002"),
            document("CC00001", "CV", "001"),
            document("CC00002", "EL", "001"),
        ];
        assert_eq!(count_in_sequence(&docs, "CC00001", "EL"), 2);
        assert_eq!(count_in_sequence(&docs, "CC00001", "CV"), 1);
        assert_eq!(count_in_sequence(&docs, "CC00002", "EL"), 1);
        assert_eq!(count_in_sequence(&docs, "CC00003", "EL"), 0);
    }
}
