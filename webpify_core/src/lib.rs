//! webpify core library
//!
//! File discovery and the decode-to-WebP conversion pipeline used by the
//! `webpify` command line tool.
//!
//! ```no_run
//! use std::path::Path;
//! use webpify_core::{Converter, DecoderRegistry, find_files, webp_output_path};
//!
//! let registry = DecoderRegistry::builtin();
//! let converter = Converter::new(&registry);
//! for file in find_files(Path::new("photos"))? {
//!     if registry.sniff_file(&file)?.is_supported() {
//!         converter.convert(&file, &webp_output_path(&file), false)?;
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod conversion;
pub mod decoding;
pub mod discovery;
pub mod error;
pub mod paths;

// Re-export main types
pub use conversion::{Converter, EncodeSettings, convert_to_webp};
pub use decoding::{DecoderRegistry, SourceDecoder, Sniffed};
pub use discovery::{FileSet, find_files};
pub use error::{ConversionError, DiscoveryError, Error, ErrorKind, Result};
pub use paths::webp_output_path;
