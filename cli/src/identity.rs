use anyhow::{anyhow, Result};
use mined_api::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

fn mined_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".mined"))
        .ok_or_else(|| anyhow!("Could not find home directory"))
}

/// Creates a new random address and stores it as JSON at `path`.
pub fn create_identity(path: &Path) -> Result<Address> {
    let address = Address(rand::random());
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| anyhow!("Failed to create {}: {}", parent.display(), e))?;
    }
    let json = serde_json::to_string(&address)
        .map_err(|e| anyhow!("Failed to serialize identity to JSON: {}", e))?;
    fs::write(path, json)
        .map_err(|e| anyhow!("Failed to write identity file {}: {}", path.display(), e))?;
    Ok(address)
}

pub fn load_identity(path: &Path) -> Result<Address> {
    let data = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read identity file {}: {}", path.display(), e))?;
    serde_json::from_str(&data)
        .map_err(|e| anyhow!("Failed to parse identity JSON: {}", e))
}

/// The identity file from the command line, or ~/.mined/id.json.
pub fn get_identity_path(identity_path: Option<PathBuf>) -> Result<PathBuf> {
    match identity_path {
        Some(path) => Ok(path),
        None => Ok(mined_dir()?.join("id.json")),
    }
}

/// The ledger file from the command line, or ~/.mined/ledger.bin.
pub fn get_state_path(state_path: Option<PathBuf>) -> Result<PathBuf> {
    match state_path {
        Some(path) => Ok(path),
        None => Ok(mined_dir()?.join("ledger.bin")),
    }
}

pub fn parse_address(text: &str) -> Result<Address> {
    text.parse::<Address>().map_err(|e| anyhow!("{}", e))
}

pub fn parse_amount(text: &str) -> Result<Amount> {
    ui_to_amount(text).ok_or_else(|| anyhow!("Invalid amount: {}", text))
}
