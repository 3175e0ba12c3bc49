//! Built-in source formats

use super::registry::DecoderRegistry;
use super::traits::ImageSource;
use image::{DynamicImage, ImageError, ImageFormat, ImageReader};

mod gif;
mod jpeg;
mod png;

/// Register all built-in formats with the registry
pub(crate) fn register_all(registry: &mut DecoderRegistry) {
    registry.register(png::PngDecoder);
    registry.register(jpeg::JpegDecoder);
    registry.register(gif::GifDecoder);
}

/// Decode `source` with the `image` codec for `format`
fn decode_with(
    source: &mut dyn ImageSource,
    format: ImageFormat,
) -> Result<DynamicImage, ImageError> {
    ImageReader::with_format(source, format).decode()
}
