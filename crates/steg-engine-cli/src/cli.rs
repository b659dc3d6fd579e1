use clap::{Parser, Subcommand};
use steg_engine_core::media::{CodecOptions, ZeroWidthOverflow};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Experimental: zero-width text hiding appends what does not fit behind the last character
    #[arg(long = "x-zero-width-append", global = true)]
    pub zero_width_append: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn codec_options(&self) -> CodecOptions {
        let overflow = if self.zero_width_append {
            ZeroWidthOverflow::AppendTrailing
        } else {
            ZeroWidthOverflow::Reject
        };

        CodecOptions::default().with_zero_width_overflow(overflow)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Capacity(capacity::CapacityArgs),
    Algorithms(algorithms::AlgorithmsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_hide_arguments() {
        let args = CliArgs::try_parse_from([
            "steg-engine",
            "hide",
            "-i",
            "in.png",
            "-o",
            "out.png",
            "-m",
            "Hello",
            "-a",
            "lsb_image_png",
        ])
        .unwrap();

        let Commands::Hide(ref hide) = args.command else {
            panic!("hide was expected");
        };
        assert_eq!(hide.message, "Hello");
        assert_eq!(hide.algorithm, "lsb_image_png");
        assert_eq!(args.codec_options(), CodecOptions::default());
    }

    #[test]
    fn unveil_algorithm_is_optional() {
        let args = CliArgs::try_parse_from(["steg-engine", "unveil", "-i", "notes.txt"]).unwrap();

        let Commands::Unveil(unveil) = args.command else {
            panic!("unveil was expected");
        };
        assert_eq!(unveil.algorithm, None);
    }

    #[test]
    fn experimental_flag_switches_the_overflow_strategy() {
        let args = CliArgs::try_parse_from([
            "steg-engine",
            "hide",
            "--x-zero-width-append",
            "-i",
            "a.txt",
            "-o",
            "b.txt",
            "-m",
            "x",
            "-a",
            "zero_width_text",
        ])
        .unwrap();

        assert_eq!(
            args.codec_options().zero_width_overflow,
            ZeroWidthOverflow::AppendTrailing
        );
    }

    #[test]
    fn hide_requires_a_message() {
        assert!(CliArgs::try_parse_from([
            "steg-engine",
            "hide",
            "-i",
            "a.txt",
            "-o",
            "b.txt",
            "-a",
            "whitespace_text"
        ])
        .is_err());
    }
}
