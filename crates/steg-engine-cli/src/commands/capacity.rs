use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Shows how many message bytes a media file can take
#[derive(Args, Debug)]
pub struct CapacityArgs {
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Algorithm id, see the `algorithms` command
    #[arg(short, long, value_name = "algorithm", required = true)]
    pub algorithm: String,
}

impl CapacityArgs {
    pub fn run(self) -> CliResult<()> {
        let capacity = steg_engine_core::commands::capacity(&self.media, &self.algorithm)?;

        let kind = if capacity.is_estimate { "estimated" } else { "exact" };
        match capacity.dimensions {
            Some((width, height)) => {
                println!("{} bytes ({kind}, {width}x{height} pixels)", capacity.bytes)
            }
            None => println!("{} bytes ({kind})", capacity.bytes),
        }

        Ok(())
    }
}
