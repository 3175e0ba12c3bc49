//! GIF source format

use super::decode_with;
use crate::decoding::traits::{ImageSource, SourceDecoder};
use image::{DynamicImage, ImageError, ImageFormat};

pub struct GifDecoder;

impl SourceDecoder for GifDecoder {
    fn id(&self) -> &'static str {
        "gif"
    }

    fn display_name(&self) -> &'static str {
        "GIF"
    }

    fn mime_type(&self) -> &'static str {
        "image/gif"
    }

    fn matches(&self, header: &[u8]) -> bool {
        header.starts_with(b"GIF87a") || header.starts_with(b"GIF89a")
    }

    // Animated GIFs decode to their first frame.
    fn decode(&self, source: &mut dyn ImageSource) -> Result<DynamicImage, ImageError> {
        decode_with(source, ImageFormat::Gif)
    }
}
