use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::info;
use mined::MiningEngine;
use mined_api::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Encoding error: {0}")]
    Encoding(#[from] bincode::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Engine error: {0}")]
    Engine(#[from] MinedError),

    #[error("No ledger found at {0}")]
    NotFound(String),
}

/// Writes a gzip-compressed bincode snapshot. The file is written next to `path` first and then
/// renamed over it, so a crash never leaves a half-written ledger behind.
pub fn save_snapshot(snapshot: &LedgerSnapshot, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = path.with_extension("tmp");
    {
        let file = File::create(&tmp_path)?;
        let mut enc = GzEncoder::new(BufWriter::new(file), Compression::default());
        bincode::serialize_into(&mut enc, snapshot)?;
        enc.finish()?;
    }
    fs::rename(&tmp_path, path)?;

    info!(
        "saved ledger at height {} to {}",
        snapshot.clock.height,
        path.display()
    );
    Ok(())
}

pub fn load_snapshot(path: impl AsRef<Path>) -> Result<LedgerSnapshot, SnapshotError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SnapshotError::NotFound(path.display().to_string()));
    }

    let file = File::open(path)?;
    let dec = GzDecoder::new(BufReader::new(file));
    let snapshot = bincode::deserialize_from(dec)?;
    Ok(snapshot)
}

/// Pretty JSON export for inspection.
pub fn export_json(snapshot: &LedgerSnapshot, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), snapshot)?;
    Ok(())
}

/// Reads a JSON config file; missing fields fall back to the defaults.
pub fn load_config(path: Option<&Path>) -> Result<TokenomicsConfig, SnapshotError> {
    let config = match path {
        Some(path) => {
            let file = File::open(path)?;
            serde_json::from_reader(BufReader::new(file))?
        }
        None => TokenomicsConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

pub fn save_engine(engine: &MiningEngine, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
    save_snapshot(&engine.snapshot(), path)
}

/// Loads and re-validates an engine. The snapshot's invariants are checked before returning.
pub fn load_engine(
    config: TokenomicsConfig,
    path: impl AsRef<Path>,
) -> Result<MiningEngine, SnapshotError> {
    let snapshot = load_snapshot(path)?;
    Ok(MiningEngine::from_snapshot(config, snapshot)?)
}
