mod common;

use common::{pdf_carrier, png_carrier, text_lines, wav_carrier};
use steg_engine_core::bits::bits_to_int;
use steg_engine_core::{dispatch, Carrier, CodecOptions, StegError, Unveiled};

#[test]
fn hi_in_a_black_10x10_png() {
    let options = CodecOptions::default();
    let carrier = png_carrier(10, 10, [0, 0, 0]);

    let with_secret = dispatch::hide(&carrier, "Hi", "lsb_image_png", &options).unwrap();

    let image = image::load_from_memory(with_secret.as_bytes())
        .unwrap()
        .to_rgba8();
    let lsbs: Vec<bool> = image
        .pixels()
        .flat_map(|p| p.0.into_iter().take(3))
        .map(|c| c & 1 == 1)
        .collect();
    assert_eq!(bits_to_int(&lsbs[..32]), 16);
    assert_eq!(bits_to_int(&lsbs[32..40]), 0x48);
    assert_eq!(bits_to_int(&lsbs[40..48]), 0x69);
    assert!(lsbs[48..].iter().all(|bit| !bit));

    assert_eq!(
        dispatch::unveil(&with_secret, "lsb_image_png", &options).unwrap(),
        Unveiled::Message("Hi".to_string())
    );
}

#[test]
fn nine_bytes_do_not_fit_into_100_samples() {
    let carrier = wav_carrier(1, 100);

    let result = dispatch::hide(&carrier, "123456789", "lsb_audio_wav", &CodecOptions::default());

    assert!(matches!(
        result,
        Err(StegError::CapacityExceeded {
            required: 9,
            available: 8
        })
    ));
}

#[test]
fn empty_message_in_40_lines_of_text() {
    let options = CodecOptions::default();
    let carrier = text_lines(40);

    let with_secret = dispatch::hide(&carrier, "", "whitespace_text", &options).unwrap();

    let (Carrier::Text(before), Carrier::Text(after)) = (&carrier, &with_secret) else {
        panic!("text carriers were expected");
    };
    for (i, (old, new)) in before.split('\n').zip(after.split('\n')).enumerate() {
        if i < 32 {
            assert_eq!(new, format!("{old} "), "line {} should end in one space", i + 1);
        } else {
            assert_eq!(new, old, "line {} should be untouched", i + 1);
        }
    }
    assert_eq!(
        dispatch::unveil(&with_secret, "whitespace_text", &options).unwrap(),
        Unveiled::Message(String::new())
    );
}

#[test]
fn unrelated_pdf_subject_is_no_message() {
    let options = CodecOptions::default();
    let carrier = pdf_carrier(Some("Budget planning 2024"));

    assert_eq!(
        dispatch::unveil(&carrier, "pdf_metadata_simulated", &options).unwrap(),
        Unveiled::Absent
    );

    let findings = dispatch::unveil_all(&carrier, &options);
    assert!(findings.is_empty());
    assert_eq!(findings.last_error, None);
}
