use std::path::Path;

use crate::dispatch::{self, Findings};
use crate::media::{Capacity, Carrier, CodecOptions, Persist, Unveiled};
use crate::Result;

/// hides `message` in the media file and writes the result to `output`
pub fn hide(
    media: &Path,
    output: &Path,
    message: &str,
    algorithm: &str,
    options: CodecOptions,
) -> Result<()> {
    let carrier = Carrier::from_file(media)?;

    dispatch::hide(&carrier, message, algorithm, &options)?.save_as(output)
}

pub fn unveil(secret_media: &Path, algorithm: &str, options: CodecOptions) -> Result<Unveiled> {
    let carrier = Carrier::from_file(secret_media)?;

    dispatch::unveil(&carrier, algorithm, &options)
}

/// tries all algorithms that fit the media file
pub fn unveil_all(secret_media: &Path, options: CodecOptions) -> Result<Findings> {
    let carrier = Carrier::from_file(secret_media)?;

    Ok(dispatch::unveil_all(&carrier, &options))
}

pub fn capacity(media: &Path, algorithm: &str) -> Result<Capacity> {
    let carrier = Carrier::from_file(media)?;

    dispatch::capacity(&carrier, algorithm)
}
