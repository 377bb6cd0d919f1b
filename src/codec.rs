use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;

/// Read a file's full contents and return them base64-encoded.
///
/// The whole file is loaded into memory; inputs are assumed to be small
/// signature images.
pub fn encode_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(STANDARD.encode(bytes))
}

/// Base64-decode `text` and write the bytes to `path`, creating or
/// truncating the file.
pub fn decode_to_file(text: &str, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = STANDARD
        .decode(text.trim())
        .context("decoding base64 image data")?;
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Strip a `data:<mime>;base64,` prefix if one is present, returning the
/// raw base64 payload after the first comma.
pub fn data_url_payload(text: &str) -> &str {
    match text.split_once(',') {
        Some((_, payload)) => payload,
        None => text,
    }
}
