use std::iter::Take;
use std::slice::Iter;

use image::buffer::Pixels;
use image::{Rgba, RgbaImage};

use crate::media::MediaPrimitive;

use super::RGB_CHANNELS;

/// stegano source for image files, the read only twin of `ImageRgbaColorMut`
pub struct ImageRgbaColor<'a> {
    pixels: Pixels<'a, Rgba<u8>>,
    colors: Option<Take<Iter<'a, u8>>>,
}

impl<'a> ImageRgbaColor<'a> {
    pub fn new(input: &'a RgbaImage) -> Self {
        Self {
            pixels: input.pixels(),
            colors: None,
        }
    }
}

/// iterates over the image and returns single color channels of each pixel wrapped into a `MediaPrimitive`
impl<'a> Iterator for ImageRgbaColor<'a> {
    type Item = MediaPrimitive;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(color) = self.colors.as_mut().and_then(Iterator::next) {
                return Some(MediaPrimitive::ImageColorChannel(*color));
            }
            let pixel = self.pixels.next()?;
            self.colors = Some(pixel.0.iter().take(RGB_CHANNELS));
        }
    }
}
