//! Command-line preview of the medicine list.
//!
//! `medapp-preview <medicines.json> [updates.json]` loads a JSON array of
//! medicines, upserts the optional updates by id (each change is logged), then
//! prints one `name | time | days` line per row.

use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::adapter::{ListAdapter, MedicineAdapter};
use crate::config::{ConfigError, FormatterConfig};
use crate::error::ListError;
use crate::formatter::DefaultRowFormatter;
use crate::host::LoggingHost;
use crate::models::Medicine;

pub const USAGE: &str = "usage: medapp-preview <medicines.json> [updates.json]";

#[derive(Error, Debug)]
pub enum RunError {
    #[error("{}", USAGE)]
    Usage,
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid medicine JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Output failed: {0}")]
    Output(#[source] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    List(#[from] ListError),
}

/// Load a JSON array of medicines from disk.
pub fn load_medicines(path: &Path) -> Result<Vec<Medicine>, RunError> {
    let raw = std::fs::read_to_string(path).map_err(|source| RunError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| RunError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Run the preview with already-split arguments, writing rows to `out`.
pub fn run_preview<W: Write>(args: &[String], out: &mut W) -> Result<(), RunError> {
    let config = FormatterConfig::from_env()?;
    run_preview_with(args, &config, out)
}

pub fn run_preview_with<W: Write>(
    args: &[String],
    config: &FormatterConfig,
    out: &mut W,
) -> Result<(), RunError> {
    let (medicines_path, updates_path) = match args {
        [medicines] => (Path::new(medicines), None),
        [medicines, updates] => (Path::new(medicines), Some(Path::new(updates))),
        _ => return Err(RunError::Usage),
    };

    let medicines = load_medicines(medicines_path)?;
    tracing::info!(count = medicines.len(), "Loaded medicines");

    let mut adapter = MedicineAdapter::with_formatter(
        medicines,
        DefaultRowFormatter::from_config(config),
        LoggingHost,
    );

    if let Some(path) = updates_path {
        for update in load_medicines(path)? {
            adapter.upsert(update)?;
        }
    }

    let mut row = adapter.create_row();
    for position in 0..adapter.item_count() {
        adapter.bind_row(&mut row, position)?;
        writeln!(out, "{} | {} | {}", row.name, row.time, row.days).map_err(RunError::Output)?;
    }
    Ok(())
}
