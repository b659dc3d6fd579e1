use log::debug;

use crate::algorithm::{AlgorithmDescriptor, Concealment};
use crate::container::png::{PngChunk, PngFile};
use crate::media::{Capacity, Carrier, CarrierClass, CodecOptions, Unveiled, METADATA_CAPACITY_ESTIMATE};
use crate::Result;

/// keyword of the `tEXt` chunk that holds the message
pub const TEXT_KEYWORD: &str = "StegEngineMessage";

/// `metadata_image_png`, the message lives in a `tEXt` chunk in front of `IEND`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImageMetadata;

const DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    id: "metadata_image_png",
    carrier_class: CarrierClass::Image,
    is_metadata_based: true,
};

impl Concealment for ImageMetadata {
    fn descriptor(&self) -> AlgorithmDescriptor {
        DESCRIPTOR
    }

    fn capacity(&self, carrier: &Carrier) -> Result<Capacity> {
        let Carrier::Image(png) = carrier else {
            return Err(carrier.mismatch(DESCRIPTOR.id));
        };
        PngFile::parse(png)?;

        Ok(Capacity::estimate(METADATA_CAPACITY_ESTIMATE))
    }

    fn hide(&self, carrier: &Carrier, message: &str, _options: &CodecOptions) -> Result<Carrier> {
        let Carrier::Image(png) = carrier else {
            return Err(carrier.mismatch(DESCRIPTOR.id));
        };
        let mut file = PngFile::parse(png)?;
        Capacity::estimate(METADATA_CAPACITY_ESTIMATE).ensure_fits(message.len())?;

        let replaced = file.remove_text(TEXT_KEYWORD);
        if replaced > 0 {
            debug!("{}: replacing {replaced} existing tEXt chunk(s)", DESCRIPTOR.id);
        }
        file.insert_before_iend(PngChunk::text(TEXT_KEYWORD, message.as_bytes()));

        Ok(Carrier::Image(file.to_bytes()))
    }

    fn unveil(&self, carrier: &Carrier, _options: &CodecOptions) -> Result<Unveiled> {
        let Carrier::Image(png) = carrier else {
            return Err(carrier.mismatch(DESCRIPTOR.id));
        };

        match PngFile::parse(png)?.find_text(TEXT_KEYWORD) {
            Some(text) => Ok(Unveiled::Message(String::from_utf8(text.to_vec())?)),
            None => Ok(Unveiled::Absent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::png::tests::minimal_png;
    use crate::container::png::IEND;
    use crate::StegError;

    fn hide(carrier: &Carrier, message: &str) -> Carrier {
        ImageMetadata
            .hide(carrier, message, &CodecOptions::default())
            .unwrap()
    }

    #[test]
    fn should_round_trip_and_keep_iend_last() {
        let out = hide(&Carrier::Image(minimal_png(2, 2)), "Grüße aus dem PNG");

        let file = PngFile::parse(out.as_bytes()).unwrap();
        assert_eq!(file.chunks().last().unwrap().kind, IEND);
        assert_eq!(
            ImageMetadata
                .unveil(&out, &CodecOptions::default())
                .unwrap(),
            Unveiled::Message("Grüße aus dem PNG".to_string())
        );
    }

    #[test]
    fn hiding_twice_should_leave_a_single_text_chunk() {
        let once = hide(&Carrier::Image(minimal_png(2, 2)), "first");
        let twice = hide(&once, "second");

        let file = PngFile::parse(twice.as_bytes()).unwrap();
        assert_eq!(
            file.chunks()
                .iter()
                .filter_map(PngChunk::text_entry)
                .filter(|(k, _)| *k == TEXT_KEYWORD.as_bytes())
                .count(),
            1
        );
        assert_eq!(file.find_text(TEXT_KEYWORD), Some(&b"second"[..]));
    }

    #[test]
    fn should_not_reject_messages_beyond_the_estimate() {
        let long = "x".repeat(METADATA_CAPACITY_ESTIMATE + 1);
        let out = hide(&Carrier::Image(minimal_png(1, 1)), &long);

        assert_eq!(
            ImageMetadata
                .unveil(&out, &CodecOptions::default())
                .unwrap()
                .into_message(),
            long
        );
    }

    #[test]
    fn plain_images_unveil_nothing() {
        let carrier = Carrier::Image(minimal_png(2, 2));
        assert_eq!(
            ImageMetadata
                .unveil(&carrier, &CodecOptions::default())
                .unwrap(),
            Unveiled::Absent
        );
    }

    #[test]
    fn broken_containers_should_be_reported() {
        let carrier = Carrier::Image(b"not a png".to_vec());
        assert!(matches!(
            ImageMetadata.capacity(&carrier),
            Err(StegError::ContainerFormat(_))
        ));
    }
}
