//! Output path derivation

use std::path::{Path, PathBuf};

/// Extension given to every converted file
pub const WEBP_EXTENSION: &str = "webp";

/// Path of the WebP file written for `input`
///
/// Same directory, same file stem with the last extension dropped:
/// `photos/cat.JPG` becomes `photos/cat.webp`.
pub fn webp_output_path(input: &Path) -> PathBuf {
    input.with_extension(WEBP_EXTENSION)
}
