use std::io::{Cursor, Write};

use byteorder::{ByteOrder, LittleEndian};
use hound::WavReader;
use log::debug;

use super::wav_iter::{AudioWavIter, AudioWavIterMut};
use crate::algorithm::{AlgorithmDescriptor, Concealment};
use crate::bits::{frame_bytes, read_frame};
use crate::container::riff::WavFile;
use crate::media::{Capacity, Carrier, CarrierClass, CodecOptions, Unveiled};
use crate::universal_decoder::{OneBitUnveil, UniversalDecoder};
use crate::universal_encoder::{OneBitHide, UniversalEncoder};
use crate::{Result, StegError};

/// Factory for decoder and encoder
pub struct LsbCodec;

impl LsbCodec {
    /// builds a LSB Audio Decoder that yields one bit per sample
    pub fn decoder(input: &[i16]) -> impl Iterator<Item = bool> + '_ {
        UniversalDecoder::new(AudioWavIter::new(input.iter().copied()), OneBitUnveil)
    }

    /// builds a LSB Audio Encoder that implements Write
    pub fn encoder(input: &mut [i16]) -> impl Write + '_ {
        UniversalEncoder::new(AudioWavIterMut::new(input.iter_mut()), OneBitHide)
    }
}

/// `lsb_audio_wav`, one frame bit in the least significant bit of every
/// 16 bit sample, channels interleaved as stored
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AudioLsb;

const DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    id: "lsb_audio_wav",
    carrier_class: CarrierClass::Audio,
    is_metadata_based: false,
};

/// Parses the container and insists on 16 bit integer PCM
fn pcm16(wav: &[u8]) -> Result<WavFile> {
    let file = WavFile::parse(wav)?;
    let format = file.format()?;
    if !format.is_pcm16() {
        return Err(StegError::container(format!(
            "only 16 bit PCM is supported, found format {} with {} bits per sample",
            format.audio_format, format.bits_per_sample
        )));
    }

    Ok(file)
}

fn read_samples(wav: &[u8]) -> Result<Vec<i16>> {
    let mut reader = WavReader::new(Cursor::new(wav))?;
    Ok(reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<i16>, hound::Error>>()?)
}

impl Concealment for AudioLsb {
    fn descriptor(&self) -> AlgorithmDescriptor {
        DESCRIPTOR
    }

    fn capacity(&self, carrier: &Carrier) -> Result<Capacity> {
        let Carrier::Audio(wav) = carrier else {
            return Err(carrier.mismatch(DESCRIPTOR.id));
        };
        let file = pcm16(wav)?;

        Ok(Capacity::from_slots(file.data().len() / 2))
    }

    fn hide(&self, carrier: &Carrier, message: &str, _options: &CodecOptions) -> Result<Carrier> {
        let Carrier::Audio(wav) = carrier else {
            return Err(carrier.mismatch(DESCRIPTOR.id));
        };
        let mut file = pcm16(wav)?;
        Capacity::from_slots(file.data().len() / 2).ensure_fits(message.len())?;

        let mut samples = read_samples(wav)?;
        let frame = frame_bytes(message)?;
        {
            LsbCodec::encoder(&mut samples).write_all(&frame)?;
        }
        debug!(
            "{}: wrote {} frame bits into {} samples",
            DESCRIPTOR.id,
            frame.len() * 8,
            samples.len()
        );

        // an odd trailing byte of the data chunk is not a sample and stays as is
        let mut data = file.data().to_vec();
        LittleEndian::write_i16_into(&samples, &mut data[..samples.len() * 2]);
        file.replace_data(data);

        Ok(Carrier::Audio(file.to_bytes()))
    }

    fn unveil(&self, carrier: &Carrier, _options: &CodecOptions) -> Result<Unveiled> {
        let Carrier::Audio(wav) = carrier else {
            return Err(carrier.mismatch(DESCRIPTOR.id));
        };
        pcm16(wav)?;
        let samples = read_samples(wav)?;

        read_frame(LsbCodec::decoder(&samples).map(Ok), samples.len())
    }
}
