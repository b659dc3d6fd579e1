use std::string::FromUtf8Error;
use thiserror::Error;

use crate::media::CarrierClass;

#[derive(Error, Debug)]
pub enum StegError {
    /// Represents an unsupported carrier media. For example, a Movie file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents a malformed or truncated container, for example a PNG without `IEND`
    #[error("Container format error: {0}")]
    ContainerFormat(String),

    /// Represents an algorithm identifier that is not part of the registry
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Represents an algorithm that was applied to a carrier of the wrong class
    #[error("Algorithm {algorithm} cannot be used with {carrier} carriers")]
    AlgorithmMismatch {
        algorithm: &'static str,
        carrier: CarrierClass,
    },

    /// Represents a payload that does not fit into the carrier
    #[error("Capacity Error: {required} bytes are required but the carrier can hold only {available} bytes")]
    CapacityExceeded { required: usize, available: usize },

    /// Represents invalid UTF-8 text data found inside a frame
    #[error("Invalid text data found inside a message")]
    Encoding(#[from] FromUtf8Error),

    /// Represents a Base64 or text decoding failure of a metadata field
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Represents a frame whose bit count does not line up with whole bytes
    #[error("Framing error: {0}")]
    Framing(String),

    /// Represents a length prefix announcing more data than the carrier can contain
    #[error("Length overflow: the frame announces {announced} units but only {available} are left")]
    LengthOverflow { announced: usize, available: usize },

    /// Represents an integer that does not fit into the requested bit width
    #[error("Value {value} does not fit into {width} bits")]
    Overflow { value: u64, width: u32 },

    /// Represents a text line whose trailing whitespace is neither one nor two spaces
    #[error("Text format error: {0}")]
    TextFormat(String),

    /// Represents a failure when decoding or encoding the pixels of an image
    #[error("Image media error")]
    ImageMedia(#[from] image::ImageError),

    /// Represents a failure when decoding the samples of a WAV file
    #[error("Audio media error")]
    AudioMedia(#[from] hound::Error),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Represents an unveil attempt where no algorithm found a message
    #[error("No secret data found")]
    NoSecretData,

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,

    #[error("API Error: Missing algorithm")]
    MissingAlgorithm,
}

impl StegError {
    /// True for errors that point at corrupted or foreign data rather than a caller mistake.
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            StegError::Encoding(_)
                | StegError::Decoding(_)
                | StegError::Framing(_)
                | StegError::LengthOverflow { .. }
                | StegError::TextFormat(_)
        )
    }

    pub(crate) fn container<S: Into<String>>(reason: S) -> Self {
        StegError::ContainerFormat(reason.into())
    }
}
