//! Source image formats and content sniffing
//!
//! The set of readable formats is an explicit [`DecoderRegistry`] value built
//! by the caller, never ambient global state. Each format contributes a
//! magic-byte probe and a decode function through [`SourceDecoder`].

mod formats;
mod registry;
mod traits;

pub use registry::{DecoderRegistry, SNIFF_LEN, Sniffed, UNKNOWN_MIME_TYPE};
pub use traits::{ImageSource, SourceDecoder};
