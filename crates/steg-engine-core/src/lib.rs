//! # Steg Engine Core API
//!
//! Hides UTF-8 messages in PNG images, WAV audio, PDF documents and plain text,
//! and finds them again. Seven algorithms are available, addressed by id:
//!
//! | id | carrier | capacity |
//! |---|---|---|
//! | `lsb_image_png` | image | exact |
//! | `metadata_image_png` | image | estimate |
//! | `lsb_audio_wav` | audio | exact |
//! | `metadata_audio_wav` | audio | estimate |
//! | `pdf_metadata_simulated` | pdf | estimate |
//! | `whitespace_text` | text | exact |
//! | `zero_width_text` | text | exact |
//!
//! # Usage Examples
//!
//! ## Hide a message inside a text
//!
//! ```rust
//! use steg_engine_core::{dispatch, Carrier, CodecOptions, Unveiled};
//!
//! let carrier = Carrier::Text("A rather plain sentence that has room for a tiny secret.".into());
//! let options = CodecOptions::default();
//!
//! let with_secret = dispatch::hide(&carrier, "Hi", "zero_width_text", &options)
//!     .expect("Failed to hide message in text");
//!
//! assert_eq!(
//!     dispatch::unveil(&with_secret, "zero_width_text", &options).unwrap(),
//!     Unveiled::Message("Hi".to_string())
//! );
//! ```
//!
//! ## Try every algorithm on a file
//!
//! ```rust,no_run
//! let findings = steg_engine_core::api::unveil::prepare()
//!     .from_secret_file("report-with-secret.pdf")
//!     .execute()
//!     .expect("Failed to read the secret media");
//!
//! for (algorithm, message) in findings.found {
//!     println!("{algorithm}: {message}");
//! }
//! ```

#![warn(clippy::redundant_else)]

pub mod algorithm;
pub mod api;
pub mod bits;
pub mod commands;
pub mod container;
pub mod dispatch;
pub mod error;
pub mod media;
pub mod result;
pub mod universal_decoder;
pub mod universal_encoder;

pub use crate::algorithm::{Algorithm, AlgorithmDescriptor, Concealment};
pub use crate::dispatch::Findings;
pub use crate::error::StegError;
pub use crate::media::{Capacity, Carrier, CarrierClass, CodecOptions, Persist, Unveiled};
pub use crate::result::Result;
