use std::path::{Path, PathBuf};

use crate::{commands, CodecOptions, StegError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    media: Option<PathBuf>,
    output: Option<PathBuf>,
    algorithm: Option<String>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn with_media<A: AsRef<Path>>(mut self, media: A) -> Self {
        self.media = Some(media.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the algorithm by its id, e.g. `lsb_image_png`
    pub fn using_algorithm(mut self, algorithm: &str) -> Self {
        self.algorithm = Some(algorithm.to_string());
        self
    }

    pub fn execute(self) -> Result<(), StegError> {
        let Some(message) = self.message else {
            return Err(StegError::MissingMessage);
        };
        let Some(media) = self.media else {
            return Err(StegError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegError::TargetNotSet);
        };
        let Some(algorithm) = self.algorithm else {
            return Err(StegError::MissingAlgorithm);
        };

        commands::hide(&media, &output, &message, &algorithm, self.options)
    }
}
