//! Reduce CLI subcommand.
//!
//! This subcommand reads a matrix in the text format described in
//! [`text`](crate::text) and prints its reduced row-echelon form.
//!
//! # Examples
//!
//! An augmented matrix can be reduced with
//! ```shell
//! $ cat system.txt
//! 2  3  1  5
//! -1 0  1 -1
//! 2  1 -1  3
//! $ rowreduce reduce system.txt
//! 1  0  -1  1
//! 0  1   1  1
//! 0  0   0  0
//! ```
//!
//! The matrix is read from the standard input if the file name is `-`.

use crate::{cli::Run, output::OutputMode, row_reduce_rational, text};
use clap::Parser;
use std::{error::Error, io::Read};

/// Reduce CLI arguments.
#[derive(Debug, Parser)]
#[command(about = "Reduces a matrix to reduced row-echelon form")]
pub struct Args {
    /// matrix file ("-" for stdin)
    pub input: String,
    /// Print floating point values instead of fractions
    #[arg(long)]
    pub float: bool,
    /// Print the pivots used by the reduction
    #[arg(long)]
    pub pivots: bool,
}

impl Args {
    fn read_input(&self) -> std::io::Result<String> {
        if self.input == "-" {
            let mut s = String::new();
            std::io::stdin().read_to_string(&mut s)?;
            Ok(s)
        } else {
            std::fs::read_to_string(&self.input)
        }
    }
}

impl Run for Args {
    fn run(&self) -> Result<(), Box<dyn Error>> {
        let rows = text::parse_rows(&self.read_input()?)?;
        let reduction = row_reduce_rational(&rows)?;
        let mode = if self.float {
            OutputMode::FloatingArray
        } else {
            OutputMode::RationalMatrix
        };
        if self.pivots {
            for pivot in &reduction.pivots {
                println!("# pivot {pivot}");
            }
        }
        print!("{}", crate::output::convert(reduction.matrix, mode));
        Ok(())
    }
}
