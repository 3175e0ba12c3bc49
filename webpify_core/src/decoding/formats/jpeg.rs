//! JPEG source format

use super::decode_with;
use crate::decoding::traits::{ImageSource, SourceDecoder};
use image::{DynamicImage, ImageError, ImageFormat};

/// SOI marker followed by the first marker prefix
const SIGNATURE: &[u8] = &[0xFF, 0xD8, 0xFF];

pub struct JpegDecoder;

impl SourceDecoder for JpegDecoder {
    fn id(&self) -> &'static str {
        "jpeg"
    }

    fn display_name(&self) -> &'static str {
        "JPEG"
    }

    fn mime_type(&self) -> &'static str {
        "image/jpeg"
    }

    fn matches(&self, header: &[u8]) -> bool {
        header.starts_with(SIGNATURE)
    }

    fn decode(&self, source: &mut dyn ImageSource) -> Result<DynamicImage, ImageError> {
        decode_with(source, ImageFormat::Jpeg)
    }
}
