//! JSON record files

use anyhow::{Context, Result};
use groth16_rerand_core::{ProofInput, ProofOutput};
use std::fs;
use std::path::{Path, PathBuf};

/// Read the proof input record
pub fn read_input(path: &Path) -> Result<ProofInput> {
    let data = fs::read(path).with_context(|| format!("Failed to read input file: {:?}", path))?;
    serde_json::from_slice(&data).with_context(|| format!("Invalid input JSON in {:?}", path))
}

/// Write the output record through a sibling temp file and a rename, so a
/// failed run never leaves a truncated output behind.
pub fn write_output(path: &Path, output: &ProofOutput, pretty: bool) -> Result<()> {
    let data = if pretty {
        serde_json::to_vec_pretty(output)?
    } else {
        serde_json::to_vec(output)?
    };

    let tmp = temp_path(path);
    fs::write(&tmp, &data).with_context(|| format!("Failed to write {:?}", tmp))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("Failed to write output file: {:?}", path));
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}
