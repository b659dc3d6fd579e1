use criterion::{criterion_group, criterion_main, Criterion};
use std::io::Write;
use steg_engine_core::media::audio::LsbCodec;

pub fn audio_encoding(c: &mut Criterion) {
    c.bench_function("Audio Encoding to memory", |b| {
        let mut samples: Vec<i16> = (0..44_100).map(|i| ((i * 7) % 2000 - 1000) as i16).collect();
        let secret_message = b"Hello World!";

        b.iter(|| {
            LsbCodec::encoder(&mut samples)
                .write_all(&secret_message[..])
                .expect("Cannot write to codec");
        })
    });
}

criterion_group!(benches, audio_encoding);
criterion_main!(benches);
