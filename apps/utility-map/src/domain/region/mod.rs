pub mod extractor;
pub mod key;
