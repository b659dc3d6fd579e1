use byteorder::{ByteOrder, LittleEndian};

use crate::algorithm::{AlgorithmDescriptor, Concealment};
use crate::container::riff::WavFile;
use crate::media::{Capacity, Carrier, CarrierClass, CodecOptions, Unveiled, METADATA_CAPACITY_ESTIMATE};
use crate::{Result, StegError};

const LENGTH_PREFIX_BYTES: usize = 4;

/// `metadata_audio_wav`, the message is the `ICMT` comment of the `LIST/INFO` chunk
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AudioMetadata;

const DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    id: "metadata_audio_wav",
    carrier_class: CarrierClass::Audio,
    is_metadata_based: true,
};

/// `[u32 LE byte length][UTF-8 bytes]`
fn comment_body(message: &str) -> Result<Vec<u8>> {
    let len = u32::try_from(message.len()).map_err(|_| StegError::Overflow {
        value: message.len() as u64,
        width: 32,
    })?;
    let mut body = vec![0; LENGTH_PREFIX_BYTES];
    LittleEndian::write_u32(&mut body, len);
    body.extend_from_slice(message.as_bytes());

    Ok(body)
}

fn parse_comment(body: &[u8]) -> Result<String> {
    if body.len() < LENGTH_PREFIX_BYTES {
        return Err(StegError::Framing(format!(
            "ICMT body of {} bytes cannot hold a length prefix",
            body.len()
        )));
    }
    let announced = LittleEndian::read_u32(body) as usize;
    let text = &body[LENGTH_PREFIX_BYTES..];
    if announced > text.len() {
        return Err(StegError::LengthOverflow {
            announced,
            available: text.len(),
        });
    }

    Ok(String::from_utf8(text[..announced].to_vec())?)
}

impl Concealment for AudioMetadata {
    fn descriptor(&self) -> AlgorithmDescriptor {
        DESCRIPTOR
    }

    fn capacity(&self, carrier: &Carrier) -> Result<Capacity> {
        let Carrier::Audio(wav) = carrier else {
            return Err(carrier.mismatch(DESCRIPTOR.id));
        };
        WavFile::parse(wav)?;

        Ok(Capacity::estimate(METADATA_CAPACITY_ESTIMATE))
    }

    fn hide(&self, carrier: &Carrier, message: &str, _options: &CodecOptions) -> Result<Carrier> {
        let Carrier::Audio(wav) = carrier else {
            return Err(carrier.mismatch(DESCRIPTOR.id));
        };
        let mut file = WavFile::parse(wav)?;
        Capacity::estimate(METADATA_CAPACITY_ESTIMATE).ensure_fits(message.len())?;

        file.set_info_comment(comment_body(message)?)?;

        Ok(Carrier::Audio(file.to_bytes()))
    }

    fn unveil(&self, carrier: &Carrier, _options: &CodecOptions) -> Result<Unveiled> {
        let Carrier::Audio(wav) = carrier else {
            return Err(carrier.mismatch(DESCRIPTOR.id));
        };

        match WavFile::parse(wav)?.info_comment()? {
            Some(body) => Ok(Unveiled::Message(parse_comment(&body)?)),
            None => Ok(Unveiled::Absent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::riff::tests::minimal_wav;

    #[test]
    fn should_round_trip_through_a_new_info_list() {
        let carrier = Carrier::Audio(minimal_wav(16));
        let out = AudioMetadata
            .hide(&carrier, "odd length", &CodecOptions::default())
            .unwrap();

        let file = WavFile::parse(out.as_bytes()).unwrap();
        assert_eq!(file.chunk_ids(), vec!["fmt ", "LIST", "data"]);
        assert_eq!(file.data(), WavFile::parse(carrier.as_bytes()).unwrap().data());
        assert_eq!(
            AudioMetadata
                .unveil(&out, &CodecOptions::default())
                .unwrap(),
            Unveiled::Message("odd length".to_string())
        );
    }

    #[test]
    fn hiding_again_should_replace_the_comment() {
        let carrier = Carrier::Audio(minimal_wav(16));
        let options = CodecOptions::default();
        let once = AudioMetadata.hide(&carrier, "first", &options).unwrap();
        let twice = AudioMetadata.hide(&once, "second", &options).unwrap();

        assert_eq!(
            WavFile::parse(twice.as_bytes()).unwrap().chunk_ids(),
            vec!["fmt ", "LIST", "data"]
        );
        assert_eq!(
            AudioMetadata.unveil(&twice, &options).unwrap().into_message(),
            "second"
        );
    }

    #[test]
    fn comments_without_prefix_or_with_lying_lengths_are_corrupt() {
        assert!(matches!(parse_comment(b"ab"), Err(StegError::Framing(_))));
        assert!(matches!(
            parse_comment(&[9, 0, 0, 0, b'a']),
            Err(StegError::LengthOverflow {
                announced: 9,
                available: 1
            })
        ));
        assert_eq!(parse_comment(&[0, 0, 0, 0]).unwrap(), "");
    }

    #[test]
    fn plain_audio_unveils_nothing() {
        let carrier = Carrier::Audio(minimal_wav(4));
        assert_eq!(
            AudioMetadata
                .unveil(&carrier, &CodecOptions::default())
                .unwrap(),
            Unveiled::Absent
        );
    }
}
