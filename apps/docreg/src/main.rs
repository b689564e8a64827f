#![forbid(unsafe_code)]

mod cli;
mod commands;
mod output;
mod settings;

use clap::Parser;
use cli::Cli;
use document_registry::{RegistryError, RegistryModule};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match settings::load_config(cli.config.as_deref(), cli.data_dir.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {:#}", e);
            return ExitCode::from(2);
        }
    };

    // Reference data problems are fatal: nothing can be done without it
    let module = match RegistryModule::init(config).await {
        Ok(module) => module,
        Err(e) => {
            tracing::error!(error = %e, "Startup aborted");
            eprintln!("error: {:#}", e);
            return ExitCode::from(2);
        }
    };
    let client = module.client();

    match commands::run(client.as_ref(), cli.command, cli.json).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<RegistryError>() {
            Some(RegistryError::Internal) | None => {
                eprintln!("error: {:#}", e);
                ExitCode::from(2)
            }
            Some(rejected) => {
                eprintln!("warning: {}", rejected);
                ExitCode::FAILURE
            }
        },
    }
}
