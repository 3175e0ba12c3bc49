//! Error types for the webpify core library
//!
//! Errors are grouped by the component that raises them:
//! - Discovery errors: path classification and directory traversal
//! - Conversion errors: the decode/encode pipeline for a single file
//!
//! Every error reports an [`ErrorKind`] so callers can branch on the failure
//! (for example treating [`ErrorKind::OutputExists`] as a skip) without
//! looking at message text.

use thiserror::Error;

pub mod conversion;
pub mod discovery;

pub use self::conversion::ConversionError;
pub use self::discovery::DiscoveryError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Programmatic classification of every failure the core can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Path does not exist
    NotFound,
    /// Path exists but could not be inspected, or a symlink could not be resolved
    Stat,
    /// The directory traversal itself failed
    Walk,
    /// Output file already present and overwriting was not requested
    OutputExists,
    /// Input file could not be opened
    Open,
    /// Content is not a decodable image of a supported format
    Decode,
    /// Output file could not be created
    Create,
    /// Image could not be encoded or written
    Encode,
}

/// Main error type for the webpify core library
#[derive(Error, Debug)]
pub enum Error {
    /// File discovery errors
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// Conversion errors
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

impl Error {
    /// Classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Discovery(err) => err.kind(),
            Self::Conversion(err) => err.kind(),
        }
    }
}

/// Map a failed stat call onto `NotFound` or `Stat`
pub(crate) fn stat_kind(source: &std::io::Error) -> ErrorKind {
    if source.kind() == std::io::ErrorKind::NotFound {
        ErrorKind::NotFound
    } else {
        ErrorKind::Stat
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_discovery_error_kind_passes_through() {
        let error: Error = DiscoveryError::Stat {
            path: PathBuf::from("/missing"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        }
        .into();

        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert!(error.to_string().contains("/missing"));
    }

    #[test]
    fn test_conversion_error_kind_passes_through() {
        let error: Error = ConversionError::OutputExists {
            path: PathBuf::from("out.webp"),
        }
        .into();

        assert_eq!(error.kind(), ErrorKind::OutputExists);
        assert!(matches!(
            error,
            Error::Conversion(ConversionError::OutputExists { .. })
        ));
    }

    #[test]
    fn test_stat_kind_distinguishes_not_found() {
        let missing = io::Error::new(io::ErrorKind::NotFound, "gone");
        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "nope");

        assert_eq!(stat_kind(&missing), ErrorKind::NotFound);
        assert_eq!(stat_kind(&denied), ErrorKind::Stat);
    }
}
