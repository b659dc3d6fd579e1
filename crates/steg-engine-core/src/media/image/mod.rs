pub mod decoder;
pub mod encoder;
pub mod lsb_codec;
pub mod metadata;

pub use lsb_codec::{ImageLsb, LsbCodec};
pub use metadata::ImageMetadata;

/// red, green and blue carry data, alpha is left alone
pub(crate) const RGB_CHANNELS: usize = 3;
