use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};
use std::io::Write;
use steg_engine_core::media::image::encoder::ImageRgbaColorMut;
use steg_engine_core::universal_encoder::{OneBitHide, UniversalEncoder};

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let mut plain_image = RgbaImage::from_pixel(512, 512, Rgba([90, 120, 150, 255]));
        let secret_message = b"Hello World!";

        b.iter(|| {
            UniversalEncoder::new(ImageRgbaColorMut::new(&mut plain_image), OneBitHide)
                .write_all(&secret_message[..])
                .expect("Cannot write secret message");
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
