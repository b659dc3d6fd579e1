//! Structural access to the carrier file formats.
//!
//! PNG and RIFF/WAV are walked chunk by chunk, chunks that are not touched are
//! carried over byte for byte. PDF documents are loaded and saved with `lopdf`.

pub mod pdf;
pub mod png;
pub mod riff;
