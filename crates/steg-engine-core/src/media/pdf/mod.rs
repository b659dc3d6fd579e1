pub mod metadata;

pub use metadata::PdfMetadata;
