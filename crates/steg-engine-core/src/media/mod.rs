pub mod audio;
pub mod capacity;
pub mod codec_options;
pub mod image;
pub mod pdf;
mod primitives;
pub mod text;
mod types;

use std::path::Path;

pub use capacity::{Capacity, METADATA_CAPACITY_ESTIMATE};
pub use codec_options::{CodecOptions, ZeroWidthOverflow};
pub use primitives::*;
pub use types::*;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> crate::Result<()>;
}
