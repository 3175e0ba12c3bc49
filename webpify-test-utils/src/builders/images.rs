//! Encoded sample images

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Builder for a small gradient image encoded in a source format
#[derive(Debug, Clone, Copy)]
pub struct SampleImage {
    format: ImageFormat,
    width: u32,
    height: u32,
}

impl SampleImage {
    /// A 16x16 image in `format`
    pub fn new(format: ImageFormat) -> Self {
        Self {
            format,
            width: 16,
            height: 16,
        }
    }

    pub fn png() -> Self {
        Self::new(ImageFormat::Png)
    }

    pub fn jpeg() -> Self {
        Self::new(ImageFormat::Jpeg)
    }

    pub fn gif() -> Self {
        Self::new(ImageFormat::Gif)
    }

    /// Set pixel dimensions
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Encode the image and return the file bytes
    pub fn encode(&self) -> Vec<u8> {
        let pixels = RgbaImage::from_fn(self.width, self.height, |x, y| {
            Rgba([
                (x * 255 / self.width.max(1)) as u8,
                (y * 255 / self.height.max(1)) as u8,
                128,
                255,
            ])
        });

        // JPEG has no alpha channel.
        let image = match self.format {
            ImageFormat::Jpeg => DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(pixels).to_rgb8()),
            _ => DynamicImage::ImageRgba8(pixels),
        };

        let mut bytes = Cursor::new(Vec::new());
        image
            .write_to(&mut bytes, self.format)
            .expect("sample image should encode");
        bytes.into_inner()
    }
}
