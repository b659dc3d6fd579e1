use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use log::debug;

use crate::algorithm::{AlgorithmDescriptor, Concealment};
use crate::container::pdf::PdfDocument;
use crate::media::{Capacity, Carrier, CarrierClass, CodecOptions, Unveiled, METADATA_CAPACITY_ESTIMATE};
use crate::{Result, StegError};

/// Prefix that tells a hidden message apart from an ordinary subject line
pub const SUBJECT_MARKER: &str = "StegEngineMessage:";

/// `pdf_metadata_simulated`, the message is the Base64 encoded `/Subject`
/// of the document information dictionary
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PdfMetadata;

const DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
    id: "pdf_metadata_simulated",
    carrier_class: CarrierClass::Pdf,
    is_metadata_based: true,
};

fn decode_subject(encoded: &str) -> Result<String> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| StegError::Decoding(format!("subject is not valid Base64: {e}")))?;

    String::from_utf8(bytes)
        .map_err(|e| StegError::Decoding(format!("subject is not valid UTF-8: {e}")))
}

impl Concealment for PdfMetadata {
    fn descriptor(&self) -> AlgorithmDescriptor {
        DESCRIPTOR
    }

    fn capacity(&self, carrier: &Carrier) -> Result<Capacity> {
        let Carrier::Pdf(pdf) = carrier else {
            return Err(carrier.mismatch(DESCRIPTOR.id));
        };
        PdfDocument::load(pdf)?;

        Ok(Capacity::estimate(METADATA_CAPACITY_ESTIMATE))
    }

    fn hide(&self, carrier: &Carrier, message: &str, _options: &CodecOptions) -> Result<Carrier> {
        let Carrier::Pdf(pdf) = carrier else {
            return Err(carrier.mismatch(DESCRIPTOR.id));
        };
        let mut document = PdfDocument::load(pdf)?;
        Capacity::estimate(METADATA_CAPACITY_ESTIMATE).ensure_fits(message.len())?;

        let subject = format!("{SUBJECT_MARKER}{}", STANDARD.encode(message));
        document.set_subject(&subject)?;

        Ok(Carrier::Pdf(document.to_bytes()?))
    }

    fn unveil(&self, carrier: &Carrier, _options: &CodecOptions) -> Result<Unveiled> {
        let Carrier::Pdf(pdf) = carrier else {
            return Err(carrier.mismatch(DESCRIPTOR.id));
        };

        let Some(subject) = PdfDocument::load(pdf)?.subject()? else {
            return Ok(Unveiled::Absent);
        };
        match subject.strip_prefix(SUBJECT_MARKER) {
            Some(encoded) => Ok(Unveiled::Message(decode_subject(encoded)?)),
            None => {
                debug!("{}: subject carries no marker", DESCRIPTOR.id);
                Ok(Unveiled::Absent)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use lopdf::{dictionary, Object};

    use super::*;
    use crate::container::pdf::tests::minimal_pdf;

    fn pdf_with_subject(subject: &str) -> Carrier {
        Carrier::Pdf(minimal_pdf(Some(dictionary! {
            "Subject" => Object::string_literal(subject),
        })))
    }

    #[test]
    fn should_round_trip_and_keep_other_info_entries() {
        let carrier = Carrier::Pdf(minimal_pdf(Some(dictionary! {
            "Author" => Object::string_literal("Alice"),
            "Subject" => Object::string_literal("Q3"),
        })));
        let options = CodecOptions::default();
        let out = PdfMetadata.hide(&carrier, "meet at noon ☀", &options).unwrap();

        let doc = PdfDocument::load(out.as_bytes()).unwrap();
        assert_eq!(
            doc.subject().unwrap().unwrap(),
            format!("{SUBJECT_MARKER}{}", STANDARD.encode("meet at noon ☀"))
        );
        assert_eq!(
            PdfMetadata.unveil(&out, &options).unwrap(),
            Unveiled::Message("meet at noon ☀".to_string())
        );
        assert_ne!(out, carrier);
    }

    #[test]
    fn documents_without_info_carry_nothing() {
        let carrier = Carrier::Pdf(minimal_pdf(None));
        assert_eq!(
            PdfMetadata
                .unveil(&carrier, &CodecOptions::default())
                .unwrap(),
            Unveiled::Absent
        );
    }

    #[test]
    fn unrelated_subjects_unveil_nothing() {
        let carrier = pdf_with_subject("Quarterly report");
        assert_eq!(
            PdfMetadata
                .unveil(&carrier, &CodecOptions::default())
                .unwrap(),
            Unveiled::Absent
        );
    }

    #[test]
    fn broken_base64_is_a_decoding_error() {
        let carrier = pdf_with_subject("StegEngineMessage:not*base64");
        assert!(matches!(
            PdfMetadata.unveil(&carrier, &CodecOptions::default()),
            Err(StegError::Decoding(_))
        ));
    }

    #[test]
    fn base64_of_invalid_utf8_is_a_decoding_error() {
        let carrier = pdf_with_subject(&format!(
            "{SUBJECT_MARKER}{}",
            STANDARD.encode([0xffu8, 0xfe])
        ));
        assert!(matches!(
            PdfMetadata.unveil(&carrier, &CodecOptions::default()),
            Err(StegError::Decoding(_))
        ));
    }

    #[test]
    fn other_carriers_are_refused() {
        assert!(matches!(
            PdfMetadata.capacity(&Carrier::Text("x".into())),
            Err(StegError::AlgorithmMismatch { .. })
        ));
    }
}
