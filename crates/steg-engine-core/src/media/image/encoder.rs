use std::iter::Take;
use std::slice::IterMut;

use image::buffer::PixelsMut;
use image::{Rgba, RgbaImage};

use crate::media::MediaPrimitiveMut;

use super::RGB_CHANNELS;

/// stegano target for image files, based on `RgbaImage` by `image` crate
///
/// Pixels are visited in raster order, left to right and top to bottom, and
/// only the red, green and blue channel of each pixel are handed out. Alpha
/// is never touched.
///
/// ## Example of usage
/// ```rust
/// use std::io::Write;
/// use image::{Rgba, RgbaImage};
/// use steg_engine_core::media::image::encoder::ImageRgbaColorMut;
/// use steg_engine_core::universal_encoder::{OneBitHide, UniversalEncoder};
///
/// let mut image = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
/// UniversalEncoder::new(ImageRgbaColorMut::new(&mut image), OneBitHide)
///     .write_all(&[0xff])
///     .expect("Cannot write secret byte");
///
/// assert_eq!(image.get_pixel(0, 0), &Rgba([1, 1, 1, 255]));
/// assert_eq!(image.get_pixel(2, 0), &Rgba([1, 1, 0, 255]));
/// ```
pub struct ImageRgbaColorMut<'a> {
    pixels: PixelsMut<'a, Rgba<u8>>,
    colors: Option<Take<IterMut<'a, u8>>>,
}

impl<'a> ImageRgbaColorMut<'a> {
    pub fn new(input: &'a mut RgbaImage) -> Self {
        Self {
            pixels: input.pixels_mut(),
            colors: None,
        }
    }
}

impl<'a> Iterator for ImageRgbaColorMut<'a> {
    type Item = MediaPrimitiveMut<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(color) = self.colors.as_mut().and_then(Iterator::next) {
                return Some(MediaPrimitiveMut::ImageColorChannel(color));
            }
            let pixel = self.pixels.next()?;
            self.colors = Some(pixel.0.iter_mut().take(RGB_CHANNELS));
        }
    }
}
