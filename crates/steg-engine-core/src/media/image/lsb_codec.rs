use std::io::{Cursor, Write};

use image::{DynamicImage, ImageFormat, RgbaImage};
use log::debug;

use super::decoder::ImageRgbaColor;
use super::encoder::ImageRgbaColorMut;
use super::RGB_CHANNELS;
use crate::algorithm::{AlgorithmDescriptor, Concealment};
use crate::bits::{frame_bytes, read_frame};
use crate::container::png::PngFile;
use crate::media::{Capacity, Carrier, CarrierClass, CodecOptions, Unveiled};
use crate::universal_decoder::{OneBitUnveil, UniversalDecoder};
use crate::universal_encoder::{OneBitHide, UniversalEncoder};
use crate::Result;

/// Factory for decoder and encoder
pub struct LsbCodec;

impl LsbCodec {
    /// builds a LSB Image Decoder that yields one bit per color channel
    pub fn decoder(input: &RgbaImage) -> impl Iterator<Item = bool> + '_ {
        UniversalDecoder::new(ImageRgbaColor::new(input), OneBitUnveil)
    }

    /// builds a LSB Image Encoder that implements Write
    pub fn encoder(carrier: &mut RgbaImage) -> impl Write + '_ {
        UniversalEncoder::new(ImageRgbaColorMut::new(carrier), OneBitHide)
    }
}

/// `lsb_image_png`, one frame bit in the least significant bit of every
/// red, green and blue channel
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImageLsb;

const DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    id: "lsb_image_png",
    carrier_class: CarrierClass::Image,
    is_metadata_based: false,
};

fn decode_png(png: &[u8]) -> Result<RgbaImage> {
    Ok(image::load_from_memory_with_format(png, ImageFormat::Png)?.to_rgba8())
}

fn color_slots(width: u32, height: u32) -> usize {
    width as usize * height as usize * RGB_CHANNELS
}

impl Concealment for ImageLsb {
    fn descriptor(&self) -> AlgorithmDescriptor {
        DESCRIPTOR
    }

    fn capacity(&self, carrier: &Carrier) -> Result<Capacity> {
        let Carrier::Image(png) = carrier else {
            return Err(carrier.mismatch(DESCRIPTOR.id));
        };
        let header = PngFile::parse(png)?.header()?;

        Ok(Capacity::from_slots(color_slots(header.width, header.height))
            .with_dimensions(header.width, header.height))
    }

    fn hide(&self, carrier: &Carrier, message: &str, _options: &CodecOptions) -> Result<Carrier> {
        let Carrier::Image(png) = carrier else {
            return Err(carrier.mismatch(DESCRIPTOR.id));
        };
        self.capacity(carrier)?.ensure_fits(message.len())?;

        let mut image = decode_png(png)?;
        let frame = frame_bytes(message)?;
        {
            LsbCodec::encoder(&mut image).write_all(&frame)?;
        }
        debug!(
            "{}: wrote {} frame bits into a {}x{} image",
            DESCRIPTOR.id,
            frame.len() * 8,
            image.width(),
            image.height()
        );

        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(image).write_to(&mut out, ImageFormat::Png)?;

        Ok(Carrier::Image(out.into_inner()))
    }

    fn unveil(&self, carrier: &Carrier, _options: &CodecOptions) -> Result<Unveiled> {
        let Carrier::Image(png) = carrier else {
            return Err(carrier.mismatch(DESCRIPTOR.id));
        };
        let image = decode_png(png)?;
        let available = color_slots(image.width(), image.height());

        read_frame(LsbCodec::decoder(&image).map(Ok), available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{png_carrier, prepare_4x6_linear_growing_colors};
    use crate::StegError;

    #[test]
    fn should_encode_and_decode_through_the_codec() {
        let mut image = prepare_4x6_linear_growing_colors();
        {
            LsbCodec::encoder(&mut image)
                .write_all(b"Hi")
                .expect("Cannot write to codec");
        }

        let bits: Vec<bool> = LsbCodec::decoder(&image).take(16).collect();
        assert_eq!(bits, crate::bits::text_to_bits("Hi"));
    }

    #[test]
    fn capacity_should_follow_the_image_dimensions() {
        let capacity = ImageLsb.capacity(&png_carrier(10, 10)).unwrap();

        assert_eq!(capacity.bytes, (300 - 32) / 8);
        assert!(!capacity.is_estimate);
        assert_eq!(capacity.dimensions, Some((10, 10)));
    }

    #[test]
    fn tiny_images_have_no_capacity_and_no_message() {
        let carrier = png_carrier(3, 3);

        assert_eq!(ImageLsb.capacity(&carrier).unwrap().bytes, 0);
        assert_eq!(
            ImageLsb.unveil(&carrier, &CodecOptions::default()).unwrap(),
            Unveiled::Absent
        );
    }

    #[test]
    fn should_leave_alpha_untouched() {
        let carrier = png_carrier(8, 8);
        let Carrier::Image(out) = ImageLsb
            .hide(&carrier, "alpha", &CodecOptions::default())
            .unwrap()
        else {
            panic!("an image carrier was expected");
        };

        let image = decode_png(&out).unwrap();
        assert!(image.pixels().all(|p| p.0[3] == 255));
    }

    #[test]
    fn should_refuse_other_carriers() {
        let carrier = Carrier::Text("some text".to_string());
        assert!(matches!(
            ImageLsb.capacity(&carrier),
            Err(StegError::AlgorithmMismatch {
                algorithm: "lsb_image_png",
                carrier: CarrierClass::Text
            })
        ));
    }
}
