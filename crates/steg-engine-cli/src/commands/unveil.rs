use std::path::PathBuf;

use clap::Args;
use steg_engine_core::{CodecOptions, StegError};

use crate::CliResult;

/// Unveils text messages, trying every fitting algorithm unless one is given
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source media that contains a secret message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Only try this algorithm
    #[arg(short, long, value_name = "algorithm")]
    pub algorithm: Option<String>,
}

impl UnveilArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let findings = steg_engine_core::api::unveil::prepare()
            .from_secret_file(&self.media)
            .using_algorithm(self.algorithm)
            .with_options(options)
            .execute()?;

        if findings.is_empty() {
            if let Some(reason) = findings.last_error {
                eprintln!("{reason}");
            }
            return Err(StegError::NoSecretData);
        }

        for (algorithm, message) in findings.found {
            println!("{algorithm}: {message}");
        }

        Ok(())
    }
}
