use criterion::{criterion_group, criterion_main, Criterion};
use std::io::Write;
use steg_engine_core::bits::{frame_bytes, read_frame};
use steg_engine_core::media::audio::LsbCodec;

pub fn audio_decoding(c: &mut Criterion) {
    c.bench_function("Audio Decoding from memory", |b| {
        let mut samples: Vec<i16> = (0..44_100).map(|i| ((i * 7) % 2000 - 1000) as i16).collect();
        {
            LsbCodec::encoder(&mut samples)
                .write_all(&frame_bytes("Hello World!").unwrap())
                .expect("Cannot write to codec");
        }

        b.iter(|| {
            read_frame(LsbCodec::decoder(&samples).map(Ok), samples.len())
                .expect("Cannot read the frame from decoder");
        })
    });
}

criterion_group!(benches, audio_decoding);
criterion_main!(benches);
