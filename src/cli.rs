//! `rowreduce` CLI application
//!
//! The CLI application is organized in subcommands. The supported
//! subcommands can be seen by running `rowreduce`. See the modules below for
//! examples and more information about how to use each subcommand.

use clap::Parser;
use std::error::Error;

pub mod reduce;

/// Trait to run a CLI subcommand
pub trait Run {
    /// Run the CLI subcommand
    fn run(&self) -> Result<(), Box<dyn Error>>;
}

/// CLI arguments.
#[derive(Debug, Parser)]
#[command(version, name = "rowreduce", about = "Exact row reduction")]
pub enum Args {
    /// reduce subcommand
    Reduce(reduce::Args),
}

impl Run for Args {
    fn run(&self) -> Result<(), Box<dyn Error>> {
        match self {
            Args::Reduce(x) => x.run(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_reduce() {
        let args = Args::try_parse_from(["rowreduce", "reduce", "--float", "m.txt"]).unwrap();
        let Args::Reduce(args) = args;
        assert_eq!(args.input, "m.txt");
        assert!(args.float);
        assert!(!args.pivots);
    }
}
