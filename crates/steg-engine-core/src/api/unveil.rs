use std::path::{Path, PathBuf};

use crate::algorithm::Algorithm;
use crate::dispatch::Findings;
use crate::{commands, CodecOptions, StegError, Unveiled};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    algorithm: Option<String>,
    options: CodecOptions,
}

impl UnveilApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn from_secret_file<A: AsRef<Path>>(mut self, secret_media: A) -> Self {
        self.secret_media = Some(secret_media.as_ref().to_path_buf());
        self
    }

    /// Restricts unveiling to one algorithm.
    /// If `None` is passed every algorithm that fits the media is tried.
    pub fn using_algorithm<S: AsRef<str>>(mut self, algorithm: Option<S>) -> Self {
        self.algorithm = algorithm.map(|s| s.as_ref().to_string());
        self
    }

    /// With a single algorithm its errors are returned as is and an empty
    /// message counts as a finding.
    pub fn execute(self) -> Result<Findings, StegError> {
        let Some(secret_media) = self.secret_media else {
            return Err(StegError::CarrierNotSet);
        };

        match self.algorithm {
            None => commands::unveil_all(&secret_media, self.options),
            Some(algorithm) => {
                let id = algorithm.parse::<Algorithm>()?.id();
                let mut findings = Findings::default();
                if let Unveiled::Message(message) =
                    commands::unveil(&secret_media, id, self.options)?
                {
                    findings.found.push((id, message));
                }

                Ok(findings)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;
    use crate::api;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let media = temp_dir.path().join("lines.txt");
        let secret = temp_dir.path().join("lines-with-secret.txt");
        let text: Vec<String> = (0..100).map(|i| format!("line {i}")).collect();
        fs::write(&media, text.join("\n")).expect("Failed to write carrier text");

        api::hide::prepare()
            .with_message("Hello")
            .with_media(&media)
            .using_algorithm("whitespace_text")
            .with_output(&secret)
            .execute()
            .expect("Failed to hide message");

        let findings = api::unveil::prepare()
            .from_secret_file(&secret)
            .using_algorithm(Some("whitespace_text"))
            .execute()
            .expect("Failed to unveil message");

        assert_eq!(findings.found, vec![("whitespace_text", "Hello".to_string())]);
    }

    #[test]
    fn a_missing_file_is_reported() {
        assert!(matches!(
            prepare().execute(),
            Err(StegError::CarrierNotSet)
        ));
    }
}
