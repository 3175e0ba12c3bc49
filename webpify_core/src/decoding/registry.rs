//! Registry of readable source formats

use super::formats;
use super::traits::SourceDecoder;
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

/// Number of leading bytes inspected when sniffing a file
pub const SNIFF_LEN: usize = 512;

/// MIME type reported for content no registered format recognises
pub const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

/// Ordered set of source formats; probes run in registration order
#[derive(Clone)]
pub struct DecoderRegistry {
    decoders: Vec<Arc<dyn SourceDecoder>>,
}

impl DecoderRegistry {
    /// Create a registry with no formats
    pub fn empty() -> Self {
        Self {
            decoders: Vec::new(),
        }
    }

    /// Create a registry holding PNG, JPEG and GIF
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        formats::register_all(&mut registry);
        registry
    }

    /// Register a format, replacing any format with the same id
    pub fn register(&mut self, decoder: impl SourceDecoder + 'static) {
        let decoder: Arc<dyn SourceDecoder> = Arc::new(decoder);
        match self.decoders.iter().position(|d| d.id() == decoder.id()) {
            Some(index) => self.decoders[index] = decoder,
            None => self.decoders.push(decoder),
        }
    }

    /// Get a format by id
    pub fn get(&self, id: &str) -> Option<Arc<dyn SourceDecoder>> {
        self.decoders.iter().find(|d| d.id() == id).cloned()
    }

    /// Ids of all registered formats, in probe order
    pub fn ids(&self) -> Vec<&'static str> {
        self.decoders.iter().map(|d| d.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// Find the first format whose signature matches `header`
    pub fn detect(&self, header: &[u8]) -> Option<Arc<dyn SourceDecoder>> {
        self.decoders.iter().find(|d| d.matches(header)).cloned()
    }

    /// Classify a file by its first [`SNIFF_LEN`] bytes
    pub fn sniff_file(&self, path: &Path) -> io::Result<Sniffed> {
        let file = File::open(path)?;
        let mut header = Vec::with_capacity(SNIFF_LEN);
        file.take(SNIFF_LEN as u64).read_to_end(&mut header)?;

        Ok(Sniffed {
            decoder: self.detect(&header),
        })
    }
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for DecoderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoderRegistry")
            .field("formats", &self.ids())
            .finish()
    }
}

/// Outcome of sniffing one file
#[derive(Clone)]
pub struct Sniffed {
    decoder: Option<Arc<dyn SourceDecoder>>,
}

impl Sniffed {
    /// Whether a registered format recognised the content
    pub fn is_supported(&self) -> bool {
        self.decoder.is_some()
    }

    /// Id of the recognised format
    pub fn format_id(&self) -> Option<&'static str> {
        self.decoder.as_ref().map(|d| d.id())
    }

    /// MIME type for reporting, [`UNKNOWN_MIME_TYPE`] when unrecognised
    pub fn mime_type(&self) -> &'static str {
        self.decoder
            .as_ref()
            .map_or(UNKNOWN_MIME_TYPE, |d| d.mime_type())
    }

    pub fn decoder(&self) -> Option<&Arc<dyn SourceDecoder>> {
        self.decoder.as_ref()
    }
}

impl fmt::Debug for Sniffed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sniffed")
            .field("format", &self.format_id())
            .field("mime_type", &self.mime_type())
            .finish()
    }
}
