use crate::bits::LENGTH_PREFIX_BITS;
use crate::{Result, StegError};

/// Soft limit advertised by the metadata based algorithms
pub const METADATA_CAPACITY_ESTIMATE: usize = 2048;

/// How many message bytes a carrier can take with a given algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    pub bytes: usize,
    /// `true` when `bytes` is a soft limit rather than a structural bound
    pub is_estimate: bool,
    pub dimensions: Option<(u32, u32)>,
}

impl Capacity {
    /// Exact capacity of a carrier that offers one bit per slot
    pub fn from_slots(slots: usize) -> Self {
        Self {
            bytes: slots.saturating_sub(LENGTH_PREFIX_BITS as usize) / 8,
            is_estimate: false,
            dimensions: None,
        }
    }

    pub fn estimate(bytes: usize) -> Self {
        Self {
            bytes,
            is_estimate: true,
            dimensions: None,
        }
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.dimensions = Some((width, height));
        self
    }

    /// Rejects a message of `required` bytes when it exceeds an exact capacity.
    /// Estimates never reject, an overrun is only logged.
    pub fn ensure_fits(&self, required: usize) -> Result<()> {
        if required <= self.bytes {
            return Ok(());
        }
        if self.is_estimate {
            log::warn!(
                "message of {required} bytes exceeds the estimated capacity of {} bytes",
                self.bytes
            );
            return Ok(());
        }

        Err(StegError::CapacityExceeded {
            required,
            available: self.bytes,
        })
    }
}
