//! One frame bit per line: a single trailing space is a `0`, two are a `1`.

use crate::algorithm::{AlgorithmDescriptor, Concealment};
use crate::bits::{frame_bits, read_frame};
use crate::media::{Capacity, Carrier, CarrierClass, CodecOptions, Unveiled};
use crate::{Result, StegError};

/// `whitespace_text`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TextWhitespace;

const DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    id: "whitespace_text",
    carrier_class: CarrierClass::Text,
    is_metadata_based: false,
};

/// Splits off the `'\r'` of a CRLF line ending
fn split_cr(line: &str) -> (&str, &str) {
    match line.strip_suffix('\r') {
        Some(body) => (body, "\r"),
        None => (line, ""),
    }
}

fn encode_line(line: &str, bit: bool) -> String {
    let (body, cr) = split_cr(line);
    let body = body.trim_end();
    let padding = if bit { "  " } else { " " };

    format!("{body}{padding}{cr}")
}

fn decode_line(number: usize, line: &str) -> Result<bool> {
    let (body, _) = split_cr(line);
    let spaces = body.len() - body.trim_end_matches(' ').len();
    match spaces {
        1 => Ok(false),
        2 => Ok(true),
        n => Err(StegError::TextFormat(format!(
            "line {} ends in {n} spaces, expected one or two",
            number + 1
        ))),
    }
}

impl Concealment for TextWhitespace {
    fn descriptor(&self) -> AlgorithmDescriptor {
        DESCRIPTOR
    }

    fn capacity(&self, carrier: &Carrier) -> Result<Capacity> {
        let Carrier::Text(text) = carrier else {
            return Err(carrier.mismatch(DESCRIPTOR.id));
        };

        Ok(Capacity::from_slots(text.split('\n').count()))
    }

    fn hide(&self, carrier: &Carrier, message: &str, _options: &CodecOptions) -> Result<Carrier> {
        let Carrier::Text(text) = carrier else {
            return Err(carrier.mismatch(DESCRIPTOR.id));
        };
        self.capacity(carrier)?.ensure_fits(message.len())?;

        let mut bits = frame_bits(message)?.into_iter();
        let lines: Vec<String> = text
            .split('\n')
            .map(|line| match bits.next() {
                Some(bit) => encode_line(line, bit),
                None => line.to_string(),
            })
            .collect();

        Ok(Carrier::Text(lines.join("\n")))
    }

    fn unveil(&self, carrier: &Carrier, _options: &CodecOptions) -> Result<Unveiled> {
        let Carrier::Text(text) = carrier else {
            return Err(carrier.mismatch(DESCRIPTOR.id));
        };
        let available = text.split('\n').count();
        let bits = text
            .split('\n')
            .enumerate()
            .map(|(number, line)| decode_line(number, line));

        read_frame(bits, available)
    }
}
