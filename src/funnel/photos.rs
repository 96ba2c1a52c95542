use std::path::Path;

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::debug;

/// Read an image file and embed it as a `data:` URL.
///
/// The mime type is guessed from the file extension, falling back to
/// `application/octet-stream`. The whole file is read before the listing
/// draft sees anything, so no partially-encoded payload ever escapes.
pub async fn encode_photo(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read photo {}", path.display()))?;

    let mime = mime_guess::from_path(path).first_or_octet_stream();
    debug!(
        "Encoding {} ({} bytes, {})",
        path.display(),
        bytes.len(),
        mime.essence_str()
    );

    Ok(format!(
        "data:{};base64,{}",
        mime.essence_str(),
        STANDARD.encode(&bytes)
    ))
}
