//! Single-file conversion to WebP
//!
//! Decodes one input image, auto-detecting its format from content, and
//! writes it as a lossy WebP file while honouring the overwrite policy.
//!
//! The existence check and the later create are not atomic. Callers running
//! conversions concurrently must not target the same output path twice.

mod encode;

pub use encode::EncodeSettings;

use crate::decoding::DecoderRegistry;
use crate::error::ConversionError;
use image::{DynamicImage, ImageError};
use log::debug;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Converts images to WebP using the formats of a [`DecoderRegistry`]
#[derive(Debug, Clone)]
pub struct Converter<'a> {
    registry: &'a DecoderRegistry,
    settings: EncodeSettings,
}

impl<'a> Converter<'a> {
    /// Create a converter with the fixed lossy quality-80 settings
    pub fn new(registry: &'a DecoderRegistry) -> Self {
        Self {
            registry,
            settings: EncodeSettings::default(),
        }
    }

    pub fn settings(&self) -> EncodeSettings {
        self.settings
    }

    /// Convert `input` into a WebP file at `output`
    ///
    /// Fails with [`ConversionError::OutputExists`] and leaves `output`
    /// untouched when it already exists and `force` is false. On any later
    /// failure the output may be missing, empty or truncated.
    pub fn convert(&self, input: &Path, output: &Path, force: bool) -> Result<()> {
        match fs::metadata(output) {
            Ok(_) if !force => {
                return Err(ConversionError::OutputExists {
                    path: output.to_path_buf(),
                });
            }
            Ok(_) => debug!("Overwriting existing output {}", output.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(ConversionError::Stat {
                    path: output.to_path_buf(),
                    source,
                });
            }
        }

        let file = File::open(input).map_err(|source| ConversionError::Open {
            path: input.to_path_buf(),
            source,
        })?;

        let image = {
            let mut reader = BufReader::new(file);
            self.decode(input, &mut reader)?
        };
        debug!(
            "Decoded {} ({}x{}, {:?})",
            input.display(),
            image.width(),
            image.height(),
            image.color()
        );

        let output_file = File::create(output).map_err(|source| ConversionError::Create {
            path: output.to_path_buf(),
            source,
        })?;

        let encoded = encode::encode_webp(&image, self.settings).map_err(|reason| {
            ConversionError::Encode {
                path: input.to_path_buf(),
                reason,
                source: None,
            }
        })?;

        let mut writer = BufWriter::new(output_file);
        writer
            .write_all(&encoded)
            .and_then(|()| writer.flush())
            .map_err(|source| ConversionError::Encode {
                path: input.to_path_buf(),
                reason: format!("failed writing {}", output.display()),
                source: Some(source),
            })?;

        debug!(
            "Wrote {} ({} bytes, quality {})",
            output.display(),
            encoded.len(),
            self.settings.quality
        );
        Ok(())
    }

    /// Detect the format from the buffered header, then decode the stream
    fn decode(&self, input: &Path, reader: &mut BufReader<File>) -> Result<DynamicImage> {
        let header = reader.fill_buf().map_err(|e| ConversionError::Decode {
            path: input.to_path_buf(),
            format: None,
            source: Some(ImageError::IoError(e)),
        })?;

        let Some(decoder) = self.registry.detect(header) else {
            return Err(ConversionError::Decode {
                path: input.to_path_buf(),
                format: None,
                source: None,
            });
        };

        debug!("Detected {} content in {}", decoder.display_name(), input.display());
        decoder
            .decode(reader)
            .map_err(|source| ConversionError::Decode {
                path: input.to_path_buf(),
                format: Some(decoder.id().to_string()),
                source: Some(source),
            })
    }
}

/// Convert one file with a fresh [`Converter`]
pub fn convert_to_webp(
    registry: &DecoderRegistry,
    input: &Path,
    output: &Path,
    force: bool,
) -> Result<()> {
    Converter::new(registry).convert(input, output, force)
}
