//! Configuration loading: defaults, YAML file, `DOCREG_*` environment, flags

use anyhow::{bail, Context, Result};
use document_registry::Config;
use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "docreg.yaml";
pub const ENV_PREFIX: &str = "DOCREG_";

/// Configuration keys read from the environment; other `DOCREG_*` variables are ignored
const ENV_KEYS: &[&str] = &[
    "data_dir",
    "projects_file",
    "documents_file",
    "branches_file",
    "disciplines_file",
    "document_types_file",
    "phases_file",
];

pub fn load_config(config_file: Option<&Path>, data_dir: Option<&Path>) -> Result<Config> {
    let file = match config_file {
        Some(path) if !path.exists() => bail!("config file not found: {}", path.display()),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(DEFAULT_CONFIG_FILE),
    };

    let mut figment = Figment::new()
        .merge(Yaml::file(&file))
        .merge(Env::prefixed(ENV_PREFIX).only(ENV_KEYS));
    if let Some(dir) = data_dir {
        figment = figment.merge(("data_dir", dir));
    }

    figment
        .extract::<Config>()
        .with_context(|| format!("invalid configuration (file {})", file.display()))
}
