pub mod convert;
pub mod explain;
pub mod registry;
pub mod standard;
pub mod tokenizer;
pub mod transliterate;
pub mod unicode;

#[cfg(test)]
mod tests;

pub use convert::{convert, list_standards};
pub use registry::Registry;
pub use transliterate::Transliterate;
