use clap::Args;
use steg_engine_core::{Algorithm, Concealment};

use crate::CliResult;

/// Lists the available algorithms
#[derive(Args, Debug)]
pub struct AlgorithmsArgs {}

impl AlgorithmsArgs {
    pub fn run(self) -> CliResult<()> {
        for algorithm in Algorithm::ALL {
            let d = algorithm.descriptor();
            let kind = if d.is_metadata_based { "metadata" } else { "bit level" };
            println!("{:<24} {:<6} {kind}", d.id, d.carrier_class.to_string());
        }

        Ok(())
    }
}
