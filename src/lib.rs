pub mod app;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod infra;
pub mod logging;

use clap::Parser;
use commands::{dispatch, Cli};
use config::AppConfig;
use error::AppError;
use infra::{init_db, Database};
use std::path::Path;
use std::process::ExitCode;

/// Open the database at the resolved path and seed it from the config.
pub fn open_database(config: &AppConfig, db_override: Option<&Path>) -> Result<Database, AppError> {
    let db_path = config.resolve_db_path(db_override);
    log::info!("DB path: {:?}", db_path);

    let db = init_db(&db_path).map_err(|e| {
        log::error!("DB init failed: {}", e);
        e
    })?;
    if let Some(initial_data) = &config.initial_data {
        db.seed(initial_data)?;
    }
    Ok(db)
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logger(logging::level_from_verbosity(cli.verbose));

    let result = AppConfig::load(cli.config.as_deref())
        .and_then(|config| open_database(&config, cli.db.as_deref()))
        .and_then(|db| dispatch(&db, cli.command));

    match result {
        Ok(output) => match serde_json::to_string_pretty(&output) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("failed to encode output: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            let dto = serde_json::to_string_pretty(&e).unwrap_or_else(|_| e.to_string());
            eprintln!("{}", dto);
            ExitCode::FAILURE
        }
    }
}
