use std::io::{Error, ErrorKind, Result, Write};

use crate::bits::BitIterator;
use crate::media::MediaPrimitiveMut;

/// generic hiding algorithm, used for specific ones like LSB
pub trait HideAlgorithm {
    /// encodes one bit onto a carrier primitive e.g. u8 or i16
    fn encode(&self, carrier: MediaPrimitiveMut<'_>, bit: bool);
}

/// generic stegano encoder, streams bytes most significant bit first into the carrier
pub struct UniversalEncoder<'a, I, A>
where
    I: Iterator<Item = MediaPrimitiveMut<'a>>,
    A: HideAlgorithm,
{
    input: I,
    algorithm: A,
}

impl<'a, I, A> UniversalEncoder<'a, I, A>
where
    I: Iterator<Item = MediaPrimitiveMut<'a>>,
    A: HideAlgorithm,
{
    pub fn new(input: I, algorithm: A) -> Self {
        Self { input, algorithm }
    }
}

impl<'a, I, A> Write for UniversalEncoder<'a, I, A>
where
    I: Iterator<Item = MediaPrimitiveMut<'a>>,
    A: HideAlgorithm,
{
    /// Writes whole bytes only, each byte needs 8 carrier primitives
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let mut bits_written = 0;
        for (bit, primitive) in BitIterator::new(buf).zip(self.input.by_ref()) {
            self.algorithm.encode(primitive, bit);
            bits_written += 1;
        }

        if bits_written == 0 && !buf.is_empty() {
            return Err(Error::new(
                ErrorKind::WriteZero,
                "carrier has no primitives left",
            ));
        }

        Ok(bits_written >> 3)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// default 1 bit hiding strategy
pub struct OneBitHide;

impl HideAlgorithm for OneBitHide {
    fn encode(&self, carrier: MediaPrimitiveMut<'_>, bit: bool) {
        match carrier {
            MediaPrimitiveMut::ImageColorChannel(c) => {
                *c = (*c & !1) | u8::from(bit);
            }
            MediaPrimitiveMut::AudioSample(s) => {
                *s = (*s & !1) | i16::from(bit);
            }
        }
    }
}
