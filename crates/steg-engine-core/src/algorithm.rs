//! The registry of hiding algorithms.
//!
//! Every algorithm is a stateless unit struct implementing [`Concealment`];
//! [`Algorithm`] is the closed sum over all of them, addressed by its external
//! id such as `lsb_image_png`.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use enum_dispatch::enum_dispatch;

use crate::media::audio::{AudioLsb, AudioMetadata};
use crate::media::image::{ImageLsb, ImageMetadata};
use crate::media::pdf::PdfMetadata;
use crate::media::text::{TextWhitespace, TextZeroWidth};
use crate::media::{Capacity, Carrier, CarrierClass, CodecOptions, Unveiled};
use crate::{Result, StegError};

/// Static facts about an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmDescriptor {
    pub id: &'static str,
    pub carrier_class: CarrierClass,
    /// metadata algorithms have an estimated rather than an exact capacity
    pub is_metadata_based: bool,
}

/// A way to hide a message in a carrier and to find it again.
///
/// Implementations never mutate their input, `hide` returns a new carrier.
/// Carriers of another class are refused with [`StegError::AlgorithmMismatch`].
#[enum_dispatch]
pub trait Concealment {
    fn descriptor(&self) -> AlgorithmDescriptor;

    /// How many message bytes fit into `carrier`
    fn capacity(&self, carrier: &Carrier) -> Result<Capacity>;

    fn hide(&self, carrier: &Carrier, message: &str, options: &CodecOptions) -> Result<Carrier>;

    /// Finds a message, [`Unveiled::Absent`] when there is none
    fn unveil(&self, carrier: &Carrier, options: &CodecOptions) -> Result<Unveiled>;
}

#[enum_dispatch(Concealment)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    ImageLsb,
    ImageMetadata,
    AudioLsb,
    AudioMetadata,
    PdfMetadata,
    TextWhitespace,
    TextZeroWidth,
}

impl Algorithm {
    /// All algorithms, in the order multi-try extraction visits them
    pub const ALL: [Algorithm; 7] = [
        Algorithm::ImageLsb(ImageLsb),
        Algorithm::ImageMetadata(ImageMetadata),
        Algorithm::AudioLsb(AudioLsb),
        Algorithm::AudioMetadata(AudioMetadata),
        Algorithm::PdfMetadata(PdfMetadata),
        Algorithm::TextWhitespace(TextWhitespace),
        Algorithm::TextZeroWidth(TextZeroWidth),
    ];

    pub fn id(&self) -> &'static str {
        self.descriptor().id
    }

    /// The algorithms that work on `class`, in registry order
    pub fn compatible_with(class: CarrierClass) -> impl Iterator<Item = Algorithm> {
        Self::ALL
            .into_iter()
            .filter(move |a| a.descriptor().carrier_class == class)
    }
}

impl FromStr for Algorithm {
    type Err = StegError;

    fn from_str(id: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.id() == id)
            .ok_or_else(|| StegError::UnsupportedAlgorithm(id.to_string()))
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
