use std::path::Path;

use anyhow::Context;

use super::{CommandError, InputKind};
use crate::io;

/// Decode a UTF-256 file back into the UTF-8 text it was built from.
pub fn cmd_decode(input: &Path, output: &Path) -> Result<(), CommandError> {
    if !input.is_file() {
        return Err(CommandError::MissingInput {
            kind: InputKind::Utf256,
            path: input.to_path_buf(),
        });
    }

    log::info!("Decoding UTF-256 file: {}", input.display());

    let expanded = io::read_input(input)?;

    let source = utf256_codec::decode(&expanded)
        .with_context(|| format!("invalid UTF-256 data in '{}'", input.display()))?;

    // The codec only recovers bytes; the text contract is enforced here
    // before anything is written.
    let text = String::from_utf8(source).context("decoded bytes are not valid UTF-8 text")?;

    io::write_output(output, text.as_bytes())?;

    log::debug!(
        "decoded {} expanded bytes into {} source bytes",
        expanded.len(),
        text.len()
    );

    println!("Decoded successfully to '{}'", output.display());

    Ok(())
}
