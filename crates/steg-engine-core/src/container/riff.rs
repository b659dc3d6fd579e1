//! RIFF/WAVE chunk walker.
//!
//! `RIFF <u32 LE size> WAVE` followed by chunks `[id][u32 LE size][data]`,
//! where odd sized data is followed by one pad byte. `LIST` chunks of type
//! `INFO` nest sub-chunks in the same layout.

use byteorder::{ByteOrder, LittleEndian};

use crate::{Result, StegError};

pub const FMT: [u8; 4] = *b"fmt ";
pub const DATA: [u8; 4] = *b"data";
pub const LIST: [u8; 4] = *b"LIST";
pub const INFO: [u8; 4] = *b"INFO";
pub const ICMT: [u8; 4] = *b"ICMT";

const RIFF_HEADER_LEN: usize = 12;

/// PCM as in the `audio_format` field of `fmt `
pub const WAVE_FORMAT_PCM: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiffChunk {
    pub id: [u8; 4],
    pub data: Vec<u8>,
}

impl RiffChunk {
    pub fn new(id: [u8; 4], data: Vec<u8>) -> Self {
        Self { id, data }
    }

    fn is_info_list(&self) -> bool {
        self.id == LIST && self.data.starts_with(&INFO)
    }

    fn write_to(&self, out: &mut Vec<u8>) {
        let mut size = [0u8; 4];
        LittleEndian::write_u32(&mut size, self.data.len() as u32);
        out.extend_from_slice(&self.id);
        out.extend_from_slice(&size);
        out.extend_from_slice(&self.data);
        if self.data.len() % 2 == 1 {
            out.push(0);
        }
    }
}

/// Walks a sequence of chunks, failing on any truncated body.
///
/// A missing pad byte after the very last chunk is tolerated.
fn walk_chunks(bytes: &[u8], what: &str) -> Result<Vec<RiffChunk>> {
    let mut chunks = Vec::new();
    let mut offset = 0;
    while offset < bytes.len() {
        if bytes.len() - offset < 8 {
            return Err(StegError::container(format!(
                "{what}: chunk header at offset {offset} is truncated"
            )));
        }
        let mut id = [0u8; 4];
        id.copy_from_slice(&bytes[offset..offset + 4]);
        let size = LittleEndian::read_u32(&bytes[offset + 4..offset + 8]) as usize;
        let start = offset + 8;
        let end = start
            .checked_add(size)
            .filter(|end| *end <= bytes.len())
            .ok_or_else(|| {
                StegError::container(format!(
                    "{what}: chunk {} at offset {offset} is truncated",
                    String::from_utf8_lossy(&id)
                ))
            })?;

        chunks.push(RiffChunk::new(id, bytes[start..end].to_vec()));
        offset = (end + size % 2).min(bytes.len());
    }

    Ok(chunks)
}

/// The fields of the `fmt ` chunk this crate cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    pub audio_format: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
}

impl WavFormat {
    pub fn is_pcm16(&self) -> bool {
        self.audio_format == WAVE_FORMAT_PCM && self.bits_per_sample == 16
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavFile {
    chunks: Vec<RiffChunk>,
}

impl WavFile {
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < RIFF_HEADER_LEN || &bytes[0..4] != b"RIFF" || &bytes[8..12] != b"WAVE" {
            return Err(StegError::container("RIFF/WAVE magic is missing"));
        }

        // never walk past the declared RIFF size, trailing bytes are not part of the file
        let declared = LittleEndian::read_u32(&bytes[4..8]) as usize;
        let end = declared.saturating_add(8).min(bytes.len());
        let chunks = walk_chunks(&bytes[RIFF_HEADER_LEN..end], "WAV")?;

        for required in [FMT, DATA] {
            if !chunks.iter().any(|c| c.id == required) {
                return Err(StegError::container(format!(
                    "WAV has no '{}' chunk",
                    String::from_utf8_lossy(&required)
                )));
            }
        }

        Ok(Self { chunks })
    }

    pub fn chunks(&self) -> &[RiffChunk] {
        &self.chunks
    }

    fn chunk(&self, id: [u8; 4]) -> Option<&RiffChunk> {
        self.chunks.iter().find(|c| c.id == id)
    }

    pub fn format(&self) -> Result<WavFormat> {
        let fmt = self
            .chunk(FMT)
            .map(|c| c.data.as_slice())
            .filter(|d| d.len() >= 16)
            .ok_or_else(|| StegError::container("WAV 'fmt ' chunk is too short"))?;

        Ok(WavFormat {
            audio_format: LittleEndian::read_u16(&fmt[0..2]),
            channels: LittleEndian::read_u16(&fmt[2..4]),
            sample_rate: LittleEndian::read_u32(&fmt[4..8]),
            bits_per_sample: LittleEndian::read_u16(&fmt[14..16]),
        })
    }

    pub fn data(&self) -> &[u8] {
        self.chunk(DATA).map(|c| c.data.as_slice()).unwrap_or(&[])
    }

    /// Swaps the body of the `data` chunk, size fields follow on `to_bytes`
    pub fn replace_data(&mut self, data: Vec<u8>) {
        if let Some(chunk) = self.chunks.iter_mut().find(|c| c.id == DATA) {
            chunk.data = data;
        }
    }

    /// Raw body of the `ICMT` sub-chunk inside the `LIST/INFO` chunk
    pub fn info_comment(&self) -> Result<Option<Vec<u8>>> {
        let Some(list) = self.chunks.iter().find(|c| c.is_info_list()) else {
            return Ok(None);
        };
        let sub_chunks = walk_chunks(&list.data[INFO.len()..], "LIST/INFO")?;

        Ok(sub_chunks
            .into_iter()
            .find(|c| c.id == ICMT)
            .map(|c| c.data))
    }

    /// Stores `body` as the `ICMT` sub-chunk, replacing an existing one.
    ///
    /// Without a `LIST/INFO` chunk a new one is created right in front of `data`.
    pub fn set_info_comment(&mut self, body: Vec<u8>) -> Result<()> {
        let comment = RiffChunk::new(ICMT, body);

        match self.chunks.iter().position(|c| c.is_info_list()) {
            Some(idx) => {
                let list = &mut self.chunks[idx];
                let mut sub_chunks = walk_chunks(&list.data[INFO.len()..], "LIST/INFO")?;
                sub_chunks.retain(|c| c.id != ICMT);
                sub_chunks.push(comment);
                list.data = info_list_body(&sub_chunks);
            }
            None => {
                let at = self
                    .chunks
                    .iter()
                    .position(|c| c.id == DATA)
                    .unwrap_or(self.chunks.len());
                self.chunks
                    .insert(at, RiffChunk::new(LIST, info_list_body(&[comment])));
            }
        }

        Ok(())
    }

    /// Rebuilds the file, the RIFF size is recomputed as total length - 8
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut body = Vec::new();
        for chunk in &self.chunks {
            chunk.write_to(&mut body);
        }

        let mut out = Vec::with_capacity(RIFF_HEADER_LEN + body.len());
        let mut size = [0u8; 4];
        LittleEndian::write_u32(&mut size, (body.len() + 4) as u32);
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&size);
        out.extend_from_slice(b"WAVE");
        out.extend_from_slice(&body);
        out
    }

    /// The chunk order, e.g. `["fmt ", "LIST", "data"]`
    #[cfg(test)]
    pub(crate) fn chunk_ids(&self) -> Vec<String> {
        self.chunks
            .iter()
            .map(|c| String::from_utf8_lossy(&c.id).into_owned())
            .collect()
    }
}

fn info_list_body(sub_chunks: &[RiffChunk]) -> Vec<u8> {
    let mut data = INFO.to_vec();
    for c in sub_chunks {
        c.write_to(&mut data);
    }
    data
}
