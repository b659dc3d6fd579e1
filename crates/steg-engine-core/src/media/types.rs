use std::fmt::{self, Display, Formatter};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use log::error;

use crate::error::StegError;
use crate::result::Result;

use super::Persist;

/// The classes of carrier media an algorithm can work on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarrierClass {
    Image,
    Audio,
    Text,
    Pdf,
}

impl Display for CarrierClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            CarrierClass::Image => "image",
            CarrierClass::Audio => "audio",
            CarrierClass::Text => "text",
            CarrierClass::Pdf => "pdf",
        };
        f.write_str(name)
    }
}

/// a media container for steganography
///
/// Binary carriers hold the complete file bytes, so container structure
/// outside the touched parts survives a hide operation unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Carrier {
    /// PNG file bytes
    Image(Vec<u8>),
    /// WAV file bytes
    Audio(Vec<u8>),
    /// PDF file bytes
    Pdf(Vec<u8>),
    Text(String),
}

impl Carrier {
    pub fn class(&self) -> CarrierClass {
        match self {
            Carrier::Image(_) => CarrierClass::Image,
            Carrier::Audio(_) => CarrierClass::Audio,
            Carrier::Pdf(_) => CarrierClass::Pdf,
            Carrier::Text(_) => CarrierClass::Text,
        }
    }

    pub fn from_file(f: &Path) -> Result<Self> {
        let Some(ext) = f.extension().and_then(|e| e.to_str()) else {
            return Err(StegError::UnsupportedMedia);
        };

        let read = |f: &Path| fs::read(f).map_err(|source| StegError::ReadError { source });
        match ext.to_lowercase().as_str() {
            "png" => Ok(Self::Image(read(f)?)),
            "wav" => Ok(Self::Audio(read(f)?)),
            "pdf" => Ok(Self::Pdf(read(f)?)),
            "txt" | "text" | "md" => Ok(Self::Text(String::from_utf8(read(f)?)?)),
            _ => Err(StegError::UnsupportedMedia),
        }
    }

    /// The error an algorithm reports when handed a carrier of the wrong class
    pub(crate) fn mismatch(&self, algorithm: &'static str) -> StegError {
        StegError::AlgorithmMismatch {
            algorithm,
            carrier: self.class(),
        }
    }

    /// The raw bytes as they would be written to disk
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Carrier::Image(b) | Carrier::Audio(b) | Carrier::Pdf(b) => b,
            Carrier::Text(t) => t.as_bytes(),
        }
    }
}

impl Persist for Carrier {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let mut f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            StegError::WriteError { source: e }
        })?;

        f.write_all(self.as_bytes()).map_err(|e| {
            error!("Error writing carrier to {file:?}: {e}");
            StegError::WriteError { source: e }
        })
    }
}

/// Outcome of an extraction that did not fail.
///
/// `Absent` means the algorithm found no frame at all, whereas a zero length
/// frame unveils as an empty `Message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unveiled {
    Absent,
    Message(String),
}

impl Unveiled {
    /// The unveiled text, empty when nothing was found
    pub fn message(&self) -> &str {
        match self {
            Unveiled::Absent => "",
            Unveiled::Message(m) => m,
        }
    }

    pub fn into_message(self) -> String {
        match self {
            Unveiled::Absent => String::new(),
            Unveiled::Message(m) => m,
        }
    }

    /// True when there is no message or the message is empty
    pub fn is_empty(&self) -> bool {
        self.message().is_empty()
    }
}
