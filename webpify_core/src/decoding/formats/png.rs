//! PNG source format

use super::decode_with;
use crate::decoding::traits::{ImageSource, SourceDecoder};
use image::{DynamicImage, ImageError, ImageFormat};

const SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

pub struct PngDecoder;

impl SourceDecoder for PngDecoder {
    fn id(&self) -> &'static str {
        "png"
    }

    fn display_name(&self) -> &'static str {
        "PNG"
    }

    fn mime_type(&self) -> &'static str {
        "image/png"
    }

    fn matches(&self, header: &[u8]) -> bool {
        header.starts_with(SIGNATURE)
    }

    fn decode(&self, source: &mut dyn ImageSource) -> Result<DynamicImage, ImageError> {
        decode_with(source, ImageFormat::Png)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_full_signature_only() {
        assert!(PngDecoder.matches(b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR"));
        assert!(!PngDecoder.matches(b"\x89PNG"));
        assert!(!PngDecoder.matches(b"PNG image"));
    }
}
