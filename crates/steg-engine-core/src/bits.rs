//! Bit level primitives shared by every codec.
//!
//! Bits are always produced most significant bit first, byte by byte. A frame is
//! a 32 bit length prefix (the payload size in bits) followed by the UTF-8 bytes
//! of the message.

use std::io::Read;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};
use byteorder::WriteBytesExt;

use crate::media::Unveiled;
use crate::{Result, StegError};

/// Width of the length prefix in front of every bit level frame
pub const LENGTH_PREFIX_BITS: u32 = 32;

/// Iterates the bits of a byte source, most significant bit first
pub struct BitIterator<R: Read> {
    reader: BitReader<R, BigEndian>,
}

impl<R: Read> BitIterator<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: BitReader::endian(source, BigEndian),
        }
    }
}

impl<R: Read> Iterator for BitIterator<R> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.read_bit().ok()
    }
}

/// UTF-8 encodes `text` and returns 8 bits per byte
pub fn text_to_bits(text: &str) -> Vec<bool> {
    BitIterator::new(text.as_bytes()).collect()
}

/// Regroups bits into bytes and decodes them as strict UTF-8
pub fn bits_to_text(bits: &[bool]) -> Result<String> {
    if bits.len() % 8 != 0 {
        return Err(StegError::Framing(format!(
            "{} bits do not form whole bytes",
            bits.len()
        )));
    }

    Ok(String::from_utf8(bits_to_bytes(bits)?)?)
}

/// Renders `n` as exactly `width` bits, zero padded on the left
pub fn int_to_bits(n: u64, width: u32) -> Result<Vec<bool>> {
    if width > 64 || (width < 64 && n >> width != 0) {
        return Err(StegError::Overflow { value: n, width });
    }

    Ok((0..width).rev().map(|i| (n >> i) & 1 == 1).collect())
}

/// Interprets up to 64 bits as an unsigned integer, most significant bit first
pub fn bits_to_int(bits: &[bool]) -> u64 {
    bits.iter().fold(0, |acc, bit| (acc << 1) | u64::from(*bit))
}

fn bits_to_bytes(bits: &[bool]) -> Result<Vec<u8>> {
    let mut writer = BitWriter::endian(Vec::with_capacity(bits.len() / 8), BigEndian);
    for bit in bits {
        writer.write_bit(*bit)?;
    }
    writer.byte_align()?;

    Ok(writer.into_writer())
}

fn payload_bit_length(message: &str) -> Result<u32> {
    let bits = message.len() as u64 * 8;
    u32::try_from(bits).map_err(|_| StegError::Overflow {
        value: bits,
        width: LENGTH_PREFIX_BITS,
    })
}

/// The frame as bytes: big endian bit length followed by the message bytes
pub fn frame_bytes(message: &str) -> Result<Vec<u8>> {
    let mut frame = Vec::with_capacity(4 + message.len());
    frame.write_u32::<byteorder::BigEndian>(payload_bit_length(message)?)?;
    frame.extend_from_slice(message.as_bytes());

    Ok(frame)
}

/// The frame as individual bits, identical to the bits of [`frame_bytes`]
pub fn frame_bits(message: &str) -> Result<Vec<bool>> {
    let mut bits = int_to_bits(
        u64::from(payload_bit_length(message)?),
        LENGTH_PREFIX_BITS,
    )?;
    bits.extend(text_to_bits(message));

    Ok(bits)
}

/// Bits a frame for `message` occupies in the carrier
pub fn frame_bit_count(message: &str) -> usize {
    LENGTH_PREFIX_BITS as usize + message.len() * 8
}

/// Reads a frame off a bit source that holds `available` bits in total.
///
/// Sources too small to even hold the length prefix carry no message.
pub fn read_frame<I>(mut bits: I, available: usize) -> Result<Unveiled>
where
    I: Iterator<Item = Result<bool>>,
{
    let prefix_len = LENGTH_PREFIX_BITS as usize;
    if available < prefix_len {
        return Ok(Unveiled::Absent);
    }

    let prefix = take_bits(&mut bits, prefix_len, available)?;
    let announced = bits_to_int(&prefix) as usize;
    let remaining = available - prefix_len;
    if announced > remaining {
        return Err(StegError::LengthOverflow {
            announced,
            available: remaining,
        });
    }

    let payload = take_bits(&mut bits, announced, remaining)?;

    Ok(Unveiled::Message(bits_to_text(&payload)?))
}

fn take_bits<I>(bits: &mut I, n: usize, available: usize) -> Result<Vec<bool>>
where
    I: Iterator<Item = Result<bool>>,
{
    let taken = bits.by_ref().take(n).collect::<Result<Vec<bool>>>()?;
    if taken.len() < n {
        return Err(StegError::LengthOverflow {
            announced: n,
            available: available.min(taken.len()),
        });
    }

    Ok(taken)
}
