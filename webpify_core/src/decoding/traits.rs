//! Core traits for pluggable source formats

use image::{DynamicImage, ImageError};
use std::io::{BufRead, Seek};

/// Anything an image can be decoded from
pub trait ImageSource: BufRead + Seek {}

impl<T: BufRead + Seek + ?Sized> ImageSource for T {}

/// A raster format webpify can read
pub trait SourceDecoder: Send + Sync {
    /// Stable lowercase identifier, used in error context
    fn id(&self) -> &'static str;

    /// Display name for user interfaces
    fn display_name(&self) -> &'static str;

    /// MIME type reported when this format is sniffed
    fn mime_type(&self) -> &'static str;

    /// Whether the leading bytes of a file carry this format's signature
    fn matches(&self, header: &[u8]) -> bool;

    /// Decode a full image positioned at the start of the stream
    fn decode(&self, source: &mut dyn ImageSource) -> Result<DynamicImage, ImageError>;
}
