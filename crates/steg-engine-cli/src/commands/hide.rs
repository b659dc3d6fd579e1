use std::path::PathBuf;

use clap::Args;
use steg_engine_core::CodecOptions;

use crate::CliResult;

/// Hides a text message in a PNG image, WAV audio, PDF document or text file
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Media file such as PNG image, WAV audio, PDF or text file, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final media will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output media file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,

    /// Algorithm id, see the `algorithms` command
    #[arg(short, long, value_name = "algorithm", required = true)]
    pub algorithm: String,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        steg_engine_core::api::hide::prepare()
            .with_media(&self.media)
            .with_output(&self.write_to_file)
            .with_message(&self.message)
            .using_algorithm(&self.algorithm)
            .with_options(options)
            .execute()
    }
}
