//! Command-line arguments

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use document_registry::ReferenceKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docreg")]
#[command(about = "Project and engineering document register")]
pub struct Cli {
    /// YAML configuration file (defaults to ./docreg.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Directory holding the CSV stores and reference tables
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
    /// Print results as JSON
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage projects
    Project {
        #[command(subcommand)]
        command: ProjectCommand,
    },
    /// Manage the document list of a project
    Doc {
        #[command(subcommand)]
        command: DocumentCommand,
    },
    /// Show a reference table
    Reference {
        #[arg(value_enum)]
        table: ReferenceArg,
    },
}

#[derive(Subcommand)]
pub enum ProjectCommand {
    Add {
        /// SAP identifier, e.g. CC00001
        sap_id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        branch: String,
        #[arg(long = "km", default_value = "")]
        initial_marker: String,
        #[arg(long)]
        phase: String,
    },
    List,
    Show {
        sap_id: String,
    },
    /// Delete a project together with all its documents
    Delete {
        sap_id: String,
    },
}

#[derive(Subcommand)]
pub enum DocumentCommand {
    Add {
        #[arg(long)]
        project: String,
        #[arg(long)]
        discipline: String,
        #[arg(long = "type")]
        doc_type: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        designer_code: String,
    },
    List {
        #[arg(long)]
        project: String,
        /// Discipline code or "Todos"
        #[arg(long, default_value = "Todos")]
        discipline: String,
        /// Document type code or "Todos"
        #[arg(long = "type", default_value = "Todos")]
        doc_type: String,
    },
    /// Sequential the next document of a discipline would receive
    Next {
        #[arg(long)]
        project: String,
        #[arg(long)]
        discipline: String,
    },
    /// Edit description and designer code; omitted fields keep their value
    Edit {
        #[arg(long)]
        project: String,
        #[arg(long)]
        code: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        designer_code: Option<String>,
    },
    Delete {
        #[arg(long)]
        project: String,
        #[arg(long)]
        code: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReferenceArg {
    Branches,
    Disciplines,
    Types,
    Phases,
}

impl From<ReferenceArg> for ReferenceKind {
    fn from(value: ReferenceArg) -> Self {
        match value {
            ReferenceArg::Branches => ReferenceKind::Branch,
            ReferenceArg::Disciplines => ReferenceKind::Discipline,
            ReferenceArg::Types => ReferenceKind::DocumentType,
            ReferenceArg::Phases => ReferenceKind::Phase,
        }
    }
}
