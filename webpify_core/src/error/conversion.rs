//! Conversion error types

use std::path::PathBuf;
use thiserror::Error;

use super::{ErrorKind, stat_kind};

/// Failures converting one input file
#[derive(Error, Debug)]
pub enum ConversionError {
    /// Output file exists and overwriting was not requested
    #[error("output file {} already exists, use --force to overwrite", .path.display())]
    OutputExists { path: PathBuf },

    /// Checking for an existing output file failed
    #[error("failed to check output file {}: {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file could not be opened for reading
    #[error("failed to open input file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content is not a supported image, or the image data is corrupt
    #[error(
        "failed to decode image {} ({}): {}",
        .path.display(),
        format_label(.format),
        decode_cause(.source)
    )]
    Decode {
        path: PathBuf,
        /// Format id when the header was recognised before decoding failed
        format: Option<String>,
        #[source]
        source: Option<image::ImageError>,
    },

    /// Output file could not be created or truncated
    #[error("failed to create output file {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoding to WebP or writing the encoded bytes failed
    ///
    /// libwebp reports a bare status code, so only write failures carry a source.
    #[error("failed to encode image {} to WebP: {reason}", .path.display())]
    Encode {
        path: PathBuf,
        reason: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl ConversionError {
    /// Classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::OutputExists { .. } => ErrorKind::OutputExists,
            Self::Stat { source, .. } => stat_kind(source),
            Self::Open { .. } => ErrorKind::Open,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Create { .. } => ErrorKind::Create,
            Self::Encode { .. } => ErrorKind::Encode,
        }
    }

    /// Whether this failure only means the output was left alone
    pub fn is_skip(&self) -> bool {
        self.kind() == ErrorKind::OutputExists
    }
}

fn format_label(format: &Option<String>) -> String {
    match format {
        Some(id) => format!("format: {id}"),
        None => "unknown format".to_string(),
    }
}

fn decode_cause(source: &Option<image::ImageError>) -> String {
    match source {
        Some(source) => source.to_string(),
        None => "not a supported image".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_encode_write_failure_keeps_cause() {
        let error = ConversionError::Encode {
            path: PathBuf::from("in.png"),
            reason: "failed writing in.webp".to_string(),
            source: Some(io::Error::new(io::ErrorKind::StorageFull, "disk full")),
        };

        assert_eq!(error.kind(), ErrorKind::Encode);
        let cause = std::error::Error::source(&error).unwrap();
        assert_eq!(cause.to_string(), "disk full");
    }

    #[test]
    fn test_output_exists_message_names_the_flag() {
        let error = ConversionError::OutputExists {
            path: PathBuf::from("/tmp/photo.webp"),
        };

        assert!(error.is_skip());
        assert_eq!(
            error.to_string(),
            "output file /tmp/photo.webp already exists, use --force to overwrite"
        );
    }

    #[test]
    fn test_decode_error_unknown_format() {
        let error = ConversionError::Decode {
            path: PathBuf::from("notes.png"),
            format: None,
            source: None,
        };

        assert_eq!(error.kind(), ErrorKind::Decode);
        assert!(error.to_string().contains("failed to decode image notes.png"));
        assert!(error.to_string().contains("unknown format"));
    }

    #[test]
    fn test_decode_error_with_format() {
        let error = ConversionError::Decode {
            path: PathBuf::from("broken.png"),
            format: Some("png".to_string()),
            source: None,
        };

        assert!(error.to_string().contains("(format: png)"));
    }

    #[test]
    fn test_stat_error_missing_output_dir_reports_not_found() {
        let error = ConversionError::Stat {
            path: PathBuf::from("out.webp"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };

        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert!(!error.is_skip());
    }
}
