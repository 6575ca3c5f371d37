use std::path::Path;

use anyhow::Context;

use super::{CommandError, InputKind};
use crate::io;

/// Encode a UTF-8 text file into its UTF-256 expansion.
pub fn cmd_encode(input: &Path, output: &Path) -> Result<(), CommandError> {
    if !input.is_file() {
        return Err(CommandError::MissingInput {
            kind: InputKind::Utf8,
            path: input.to_path_buf(),
        });
    }

    log::info!("Encoding UTF-8 text file: {}", input.display());

    let text_bytes = io::read_input(input)?;

    // The codec takes opaque bytes; the UTF-8 requirement is this tool's
    // input contract.
    std::str::from_utf8(&text_bytes)
        .with_context(|| format!("input file '{}' is not valid UTF-8 text", input.display()))?;

    let expanded = utf256_codec::encode(&text_bytes);

    io::write_output(output, &expanded)?;

    log::debug!(
        "encoded {} source bytes into {} expanded bytes",
        text_bytes.len(),
        expanded.len()
    );

    println!("Encoded successfully to '{}'", output.display());

    Ok(())
}
