//! Document information access on top of `lopdf`.
//!
//! Only the `/Subject` entry of the trailer's `/Info` dictionary is read or
//! written, every other object is loaded and saved by `lopdf` as is.

use lopdf::{dictionary, Dictionary, Document, Object, StringFormat};

use crate::{Result, StegError};

const SUBJECT: &[u8] = b"Subject";
const INFO: &[u8] = b"Info";

pub struct PdfDocument {
    document: Document,
}

impl PdfDocument {
    pub fn load(bytes: &[u8]) -> Result<Self> {
        if !bytes.starts_with(b"%PDF-") {
            return Err(StegError::container("PDF header is missing"));
        }
        let document = Document::load_mem(bytes)
            .map_err(|e| StegError::container(format!("PDF cannot be loaded: {e}")))?;

        if document.trailer.has(b"Encrypt") {
            return Err(StegError::container(
                "encrypted PDF documents are not supported",
            ));
        }
        if !document.trailer.has(b"Root") {
            return Err(StegError::container("PDF trailer has no /Root"));
        }

        Ok(Self { document })
    }

    fn resolve<'a>(&'a self, object: &'a Object) -> Result<&'a Object> {
        match object {
            Object::Reference(id) => self.document.get_object(*id).map_err(|e| {
                StegError::container(format!("PDF object {} {} is missing: {e}", id.0, id.1))
            }),
            direct => Ok(direct),
        }
    }

    fn info(&self) -> Result<Option<&Dictionary>> {
        let Ok(info) = self.document.trailer.get(INFO) else {
            return Ok(None);
        };

        self.resolve(info)?
            .as_dict()
            .map(Some)
            .map_err(|_| StegError::container("PDF /Info is not a dictionary"))
    }

    /// The decoded `/Subject` text, `None` without `/Info` or `/Subject`
    pub fn subject(&self) -> Result<Option<String>> {
        let Some(info) = self.info()? else {
            return Ok(None);
        };
        let Ok(subject) = info.get(SUBJECT) else {
            return Ok(None);
        };

        match self.resolve(subject)? {
            Object::String(bytes, _) => Ok(Some(decode_text_string(bytes))),
            _ => Err(StegError::container("PDF /Subject is not a string")),
        }
    }

    /// Sets `/Subject` and keeps every other `/Info` entry, an `/Info`
    /// dictionary is created when the document has none
    pub fn set_subject(&mut self, subject: &str) -> Result<()> {
        let value = encode_text_string(subject);

        match self.document.trailer.get(INFO).ok().cloned() {
            Some(Object::Reference(id)) => {
                let info = self
                    .document
                    .get_object_mut(id)
                    .and_then(Object::as_dict_mut)
                    .map_err(|_| StegError::container("PDF /Info is not a dictionary"))?;
                info.set(SUBJECT, value);
            }
            Some(Object::Dictionary(mut info)) => {
                info.set(SUBJECT, value);
                self.document.trailer.set(INFO, info);
            }
            Some(_) => return Err(StegError::container("PDF /Info is not a dictionary")),
            None => {
                let id = self.document.add_object(dictionary! { "Subject" => value });
                self.document.trailer.set(INFO, id);
            }
        }

        Ok(())
    }

    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.document
            .save_to(&mut out)
            .map_err(|e| StegError::container(format!("PDF cannot be written: {e}")))?;

        Ok(out)
    }
}

/// `FE FF` starts UTF-16BE, `EF BB BF` starts UTF-8, anything else is Latin-1
fn decode_text_string(bytes: &[u8]) -> String {
    match bytes {
        [0xfe, 0xff, rest @ ..] => {
            let units: Vec<u16> = rest
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16_lossy(&units)
        }
        [0xef, 0xbb, 0xbf, rest @ ..] => String::from_utf8_lossy(rest).into_owned(),
        _ => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

fn encode_text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::string_literal(text);
    }

    let bytes = [0xfe, 0xff]
        .into_iter()
        .chain(text.encode_utf16().flat_map(u16::to_be_bytes))
        .collect();
    Object::String(bytes, StringFormat::Hexadecimal)
}
