pub mod lsb_codec;
pub mod metadata;
pub mod wav_iter;

pub use lsb_codec::{AudioLsb, LsbCodec};
pub use metadata::AudioMetadata;
