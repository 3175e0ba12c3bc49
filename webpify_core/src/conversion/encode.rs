//! Lossy WebP encoding through libwebp

use image::DynamicImage;

/// Fixed encoder configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodeSettings {
    /// 0.0 (smallest) to 100.0 (best)
    pub quality: f32,
    pub lossless: bool,
}

impl EncodeSettings {
    pub const DEFAULT_QUALITY: f32 = 80.0;
}

impl Default for EncodeSettings {
    fn default() -> Self {
        Self {
            quality: Self::DEFAULT_QUALITY,
            lossless: false,
        }
    }
}

/// Encode `image` to WebP bytes
///
/// Images with an alpha channel are encoded as RGBA, everything else as RGB.
pub(crate) fn encode_webp(
    image: &DynamicImage,
    settings: EncodeSettings,
) -> Result<Vec<u8>, String> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(format!("image has no pixels ({width}x{height})"));
    }

    let encoded = if image.color().has_alpha() {
        let rgba = image.to_rgba8();
        webp::Encoder::from_rgba(rgba.as_raw(), width, height)
            .encode_simple(settings.lossless, settings.quality)
            .map(|memory| memory.to_vec())
    } else {
        let rgb = image.to_rgb8();
        webp::Encoder::from_rgb(rgb.as_raw(), width, height)
            .encode_simple(settings.lossless, settings.quality)
            .map(|memory| memory.to_vec())
    };

    encoded.map_err(|e| format!("libwebp rejected the image: {e:?}"))
}
