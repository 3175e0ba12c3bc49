//! Fixture builders

mod images;
mod tree;

pub use images::SampleImage;
pub use tree::TestTree;
