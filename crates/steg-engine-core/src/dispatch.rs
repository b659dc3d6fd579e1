//! Entry points addressing algorithms by id, plus multi-try extraction.

use log::{debug, warn};

use crate::algorithm::{Algorithm, Concealment};
use crate::media::{Capacity, Carrier, CodecOptions, Unveiled};
use crate::Result;

pub fn capacity(carrier: &Carrier, algorithm: &str) -> Result<Capacity> {
    algorithm.parse::<Algorithm>()?.capacity(carrier)
}

pub fn hide(
    carrier: &Carrier,
    message: &str,
    algorithm: &str,
    options: &CodecOptions,
) -> Result<Carrier> {
    let algorithm: Algorithm = algorithm.parse()?;
    debug!(
        "hiding {} bytes in a {} carrier with {algorithm}",
        message.len(),
        carrier.class()
    );

    algorithm.hide(carrier, message, options)
}

pub fn unveil(carrier: &Carrier, algorithm: &str, options: &CodecOptions) -> Result<Unveiled> {
    algorithm.parse::<Algorithm>()?.unveil(carrier, options)
}

/// What multi-try extraction turned up
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Findings {
    /// `(algorithm id, message)` for every algorithm that found a non empty message
    pub found: Vec<(&'static str, String)>,
    /// Text of the last error, only kept when nothing was found
    pub last_error: Option<String>,
}

impl Findings {
    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }
}

/// Tries every algorithm compatible with the carrier, in registry order.
///
/// Errors of single algorithms do not stop the search, they are logged and
/// only the text of the last one survives when nothing was found.
pub fn unveil_all(carrier: &Carrier, options: &CodecOptions) -> Findings {
    let mut findings = Findings::default();
    let mut last_error = None;

    for algorithm in Algorithm::compatible_with(carrier.class()) {
        match algorithm.unveil(carrier, options) {
            Ok(Unveiled::Message(message)) if !message.is_empty() => {
                debug!("{algorithm}: found {} bytes", message.len());
                findings.found.push((algorithm.id(), message));
            }
            Ok(_) => debug!("{algorithm}: nothing found"),
            Err(e) => {
                warn!("{algorithm}: {e}");
                last_error = Some(format!("{algorithm}: {e}"));
            }
        }
    }

    if findings.found.is_empty() {
        findings.last_error = last_error;
    }
    findings
}
