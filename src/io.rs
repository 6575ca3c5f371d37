use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read the entire input file into memory.
///
/// Both directions of the conversion are whole-buffer operations, so
/// there is no streaming path here.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    let data = fs::read(path)
        .with_context(|| format!("failed to read input file '{}'", path.display()))?;

    log::debug!("read {} bytes from '{}'", data.len(), path.display());

    Ok(data)
}

/// Write the converted buffer to the output file, replacing any
/// existing content.
pub fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data)
        .with_context(|| format!("failed to write output file '{}'", path.display()))?;

    log::debug!("wrote {} bytes to '{}'", data.len(), path.display());

    Ok(())
}
