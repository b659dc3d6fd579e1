/// Options handed to every hide and unveil operation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// What the zero-width text codec does when the carrier text runs out of
    /// characters before the frame is written.
    pub zero_width_overflow: ZeroWidthOverflow,
}

impl CodecOptions {
    pub fn with_zero_width_overflow(mut self, overflow: ZeroWidthOverflow) -> Self {
        self.zero_width_overflow = overflow;
        self
    }
}

/// Overflow strategy of the zero-width text codec
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ZeroWidthOverflow {
    /// The capacity check is authoritative, oversized messages are rejected
    #[default]
    Reject,
    /// Legacy behaviour: no capacity check, surplus marks are appended after
    /// the last character of the text
    AppendTrailing,
}
