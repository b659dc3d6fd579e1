use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};
use std::io::Write;
use steg_engine_core::bits::{frame_bytes, read_frame};
use steg_engine_core::media::image::LsbCodec;

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let mut img = RgbaImage::from_pixel(512, 512, Rgba([90, 120, 150, 255]));
        {
            LsbCodec::encoder(&mut img)
                .write_all(&frame_bytes("Hello World!").unwrap())
                .expect("Cannot write secret message");
        }
        let available = (img.width() * img.height() * 3) as usize;

        b.iter(|| {
            read_frame(LsbCodec::decoder(&img).map(Ok), available)
                .expect("Failed to read the frame");
        })
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
