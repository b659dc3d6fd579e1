#![allow(dead_code)]

use std::io::Cursor;

use hound::{SampleFormat, WavSpec, WavWriter};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use steg_engine_core::Carrier;

/// An opaque PNG filled with one color
pub fn png_carrier(width: u32, height: u32, color: [u8; 3]) -> Carrier {
    let image = RgbaImage::from_pixel(width, height, Rgba([color[0], color[1], color[2], 255]));
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(image)
        .write_to(&mut out, ImageFormat::Png)
        .expect("Cannot encode carrier image");

    Carrier::Image(out.into_inner())
}

/// A 16 bit PCM WAV holding a saw tooth
pub fn wav_carrier(channels: u16, num_samples: usize) -> Carrier {
    let spec = WavSpec {
        channels,
        sample_rate: 8000,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut bytes = Vec::new();
    {
        let mut writer =
            WavWriter::new(Cursor::new(&mut bytes), spec).expect("Cannot create writer");
        for i in 0..num_samples {
            writer
                .write_sample(((i * 37) % 4000) as i16 - 2000)
                .expect("Cannot write sample");
        }
        writer.finalize().expect("Cannot finalize");
    }

    Carrier::Audio(bytes)
}

/// A one page PDF with a classic xref table and an optional `/Subject`
pub fn pdf_carrier(subject: Option<&str>) -> Carrier {
    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 595 842] >>".to_string(),
        match subject {
            Some(s) => format!("<< /Title (Minutes) /Subject ({s}) >>"),
            None => "<< /Title (Minutes) >>".to_string(),
        },
    ];

    let mut out = b"%PDF-1.7\n".to_vec();
    let mut offsets = Vec::new();
    for (i, o) in objects.drain(..).enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{o}\nendobj\n", i + 1).as_bytes());
    }
    let xref = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n0000000000 65535 f \n", offsets.len() + 1).as_bytes());
    for o in &offsets {
        out.extend_from_slice(format!("{o:010} 00000 n \n").as_bytes());
    }
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R /Info 4 0 R >>\nstartxref\n{xref}\n%%EOF\n",
            offsets.len() + 1
        )
        .as_bytes(),
    );

    Carrier::Pdf(out)
}

/// `n` lines of prose, separated by `'\n'`
pub fn text_lines(n: usize) -> Carrier {
    let lines: Vec<String> = (1..=n)
        .map(|i| format!("This is line {i} of a rather ordinary text."))
        .collect();

    Carrier::Text(lines.join("\n"))
}
