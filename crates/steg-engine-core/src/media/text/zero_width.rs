//! Invisible marks behind visible characters: U+200B is a `0`, U+200C a `1`.

use log::debug;

use crate::algorithm::{AlgorithmDescriptor, Concealment};
use crate::bits::{frame_bits, read_frame};
use crate::media::{Capacity, Carrier, CarrierClass, CodecOptions, Unveiled, ZeroWidthOverflow};
use crate::Result;

pub const ZERO_BIT: char = '\u{200B}';
pub const ONE_BIT: char = '\u{200C}';

/// `zero_width_text`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TextZeroWidth;

const DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    id: "zero_width_text",
    carrier_class: CarrierClass::Text,
    is_metadata_based: false,
};

fn is_mark(c: char) -> bool {
    c == ZERO_BIT || c == ONE_BIT
}

fn mark(bit: bool) -> char {
    if bit {
        ONE_BIT
    } else {
        ZERO_BIT
    }
}

impl Concealment for TextZeroWidth {
    fn descriptor(&self) -> AlgorithmDescriptor {
        DESCRIPTOR
    }

    /// Only visible characters count, marks already in the text offer no slot
    fn capacity(&self, carrier: &Carrier) -> Result<Capacity> {
        let Carrier::Text(text) = carrier else {
            return Err(carrier.mismatch(DESCRIPTOR.id));
        };

        Ok(Capacity::from_slots(
            text.chars().filter(|c| !is_mark(*c)).count(),
        ))
    }

    fn hide(&self, carrier: &Carrier, message: &str, options: &CodecOptions) -> Result<Carrier> {
        let Carrier::Text(text) = carrier else {
            return Err(carrier.mismatch(DESCRIPTOR.id));
        };
        if options.zero_width_overflow == ZeroWidthOverflow::Reject {
            self.capacity(carrier)?.ensure_fits(message.len())?;
        }

        let mut bits = frame_bits(message)?.into_iter();
        let mut out = String::with_capacity(text.len() + bits.len() * ONE_BIT.len_utf8());
        for c in text.chars() {
            out.push(c);
            if is_mark(c) {
                continue;
            }
            if let Some(bit) = bits.next() {
                out.push(mark(bit));
            }
        }

        let surplus = bits.len();
        if surplus > 0 {
            debug!("{}: appending {surplus} trailing marks", DESCRIPTOR.id);
            out.extend(bits.map(mark));
        }

        Ok(Carrier::Text(out))
    }

    fn unveil(&self, carrier: &Carrier, _options: &CodecOptions) -> Result<Unveiled> {
        let Carrier::Text(text) = carrier else {
            return Err(carrier.mismatch(DESCRIPTOR.id));
        };
        let available = text.chars().filter(|c| is_mark(*c)).count();
        let bits = text
            .chars()
            .filter(|c| is_mark(*c))
            .map(|c| Ok(c == ONE_BIT));

        read_frame(bits, available)
    }
}
