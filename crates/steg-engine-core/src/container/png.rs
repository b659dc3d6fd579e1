//! PNG chunk stream walker.
//!
//! A PNG file is the 8 byte signature followed by chunks of the form
//! `[u32 BE length][4 byte type][data][u32 BE CRC]`, where the CRC covers
//! type and data. Walking stops at `IEND`, bytes behind it are dropped.

use byteorder::{BigEndian, ByteOrder};

use crate::{Result, StegError};

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

pub const IHDR: [u8; 4] = *b"IHDR";
pub const IEND: [u8; 4] = *b"IEND";
pub const TEXT: [u8; 4] = *b"tEXt";

/// chunk header (length + type) and trailer (crc) sizes
const CHUNK_OVERHEAD: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngChunk {
    pub kind: [u8; 4],
    pub data: Vec<u8>,
}

impl PngChunk {
    pub fn new(kind: [u8; 4], data: Vec<u8>) -> Self {
        Self { kind, data }
    }

    /// A `tEXt` chunk with body `keyword\0text`
    pub fn text(keyword: &str, text: &[u8]) -> Self {
        let mut data = Vec::with_capacity(keyword.len() + 1 + text.len());
        data.extend_from_slice(keyword.as_bytes());
        data.push(0);
        data.extend_from_slice(text);

        Self::new(TEXT, data)
    }

    /// Keyword and text of a `tEXt` chunk, `None` for other chunks
    pub fn text_entry(&self) -> Option<(&[u8], &[u8])> {
        if self.kind != TEXT {
            return None;
        }
        let nul = self.data.iter().position(|b| *b == 0)?;

        Some((&self.data[..nul], &self.data[nul + 1..]))
    }

    pub fn crc(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&self.kind);
        hasher.update(&self.data);
        hasher.finalize()
    }

    fn kind_name(&self) -> String {
        String::from_utf8_lossy(&self.kind).into_owned()
    }
}

/// Dimensions read from `IHDR`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHeader {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngFile {
    chunks: Vec<PngChunk>,
}

impl PngFile {
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < PNG_SIGNATURE.len() || bytes[..PNG_SIGNATURE.len()] != PNG_SIGNATURE {
            return Err(StegError::container("PNG signature is missing"));
        }

        let mut chunks = Vec::new();
        let mut offset = PNG_SIGNATURE.len();
        loop {
            if bytes.len() < offset + CHUNK_OVERHEAD {
                return Err(StegError::container(format!(
                    "PNG truncated at offset {offset}, IEND was never reached"
                )));
            }
            let length = BigEndian::read_u32(&bytes[offset..]) as usize;
            let mut kind = [0u8; 4];
            kind.copy_from_slice(&bytes[offset + 4..offset + 8]);
            let data_start = offset + 8;
            let data_end = data_start
                .checked_add(length)
                .filter(|end| end + 4 <= bytes.len())
                .ok_or_else(|| {
                    StegError::container(format!(
                        "PNG chunk {} at offset {offset} is truncated",
                        String::from_utf8_lossy(&kind)
                    ))
                })?;

            let chunk = PngChunk::new(kind, bytes[data_start..data_end].to_vec());
            let stored_crc = BigEndian::read_u32(&bytes[data_end..]);
            if stored_crc != chunk.crc() {
                return Err(StegError::container(format!(
                    "PNG chunk {} at offset {offset} has a bad CRC",
                    chunk.kind_name()
                )));
            }

            offset = data_end + 4;
            let is_end = chunk.kind == IEND;
            chunks.push(chunk);
            if is_end {
                break;
            }
        }

        if chunks.first().map(|c| c.kind) != Some(IHDR) {
            return Err(StegError::container("PNG does not start with IHDR"));
        }

        Ok(Self { chunks })
    }

    pub fn chunks(&self) -> &[PngChunk] {
        &self.chunks
    }

    pub fn chunks_of_type(&self, kind: [u8; 4]) -> impl Iterator<Item = &PngChunk> {
        self.chunks.iter().filter(move |c| c.kind == kind)
    }

    pub fn header(&self) -> Result<ImageHeader> {
        let ihdr = &self.chunks[0].data;
        if ihdr.len() < 13 {
            return Err(StegError::container("IHDR chunk is too short"));
        }

        Ok(ImageHeader {
            width: BigEndian::read_u32(&ihdr[0..4]),
            height: BigEndian::read_u32(&ihdr[4..8]),
        })
    }

    /// The text of the first `tEXt` chunk carrying `keyword`
    pub fn find_text(&self, keyword: &str) -> Option<&[u8]> {
        self.chunks
            .iter()
            .filter_map(PngChunk::text_entry)
            .find(|(k, _)| *k == keyword.as_bytes())
            .map(|(_, text)| text)
    }

    /// Drops every `tEXt` chunk carrying `keyword`, returns how many were removed
    pub fn remove_text(&mut self, keyword: &str) -> usize {
        let before = self.chunks.len();
        self.chunks
            .retain(|c| !matches!(c.text_entry(), Some((k, _)) if k == keyword.as_bytes()));
        before - self.chunks.len()
    }

    /// Places `chunk` right in front of `IEND`
    pub fn insert_before_iend(&mut self, chunk: PngChunk) {
        let at = self.chunks.len() - 1;
        self.chunks.insert(at, chunk);
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let size = PNG_SIGNATURE.len()
            + self
                .chunks
                .iter()
                .map(|c| c.data.len() + CHUNK_OVERHEAD)
                .sum::<usize>();
        let mut out = Vec::with_capacity(size);
        out.extend_from_slice(&PNG_SIGNATURE);
        for chunk in &self.chunks {
            // lengths are bounded by the u32 field they were parsed from
            // or by the message size check in the metadata codec
            out.extend_from_slice(&(chunk.data.len() as u32).to_be_bytes());
            out.extend_from_slice(&chunk.kind);
            out.extend_from_slice(&chunk.data);
            out.extend_from_slice(&chunk.crc().to_be_bytes());
        }
        out
    }
}
