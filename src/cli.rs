use clap::Parser;

use crate::array::DEFAULT_GROWTH_FACTOR;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "dynarr",
    about = "Load numbers into a growable array, apply operations and print the result"
)]
pub struct Args {
    /// Multiplicative growth factor, must be greater than 1.0
    #[arg(short = 'g', long = "growth-factor", value_name = "FACTOR", default_value_t = DEFAULT_GROWTH_FACTOR)]
    pub growth_factor: f64,

    /// Apply OP to the array (repeatable, applied in order)
    ///
    /// push_back:V, push_front:V, insert:POS:V, insert_all:POS:V,V,...,
    /// pop_back, pop_front, erase:POS:COUNT, erase_between:BEGIN:END,
    /// reserve:N, shrink, find:V, set:IDX:V
    #[arg(short = 'x', long = "exec", value_name = "OP")]
    pub ops: Vec<String>,

    /// Print the values last to first
    #[arg(short = 'r', long)]
    pub reverse: bool,

    /// Use NUL as output delimiter
    #[arg(short = 'z', long = "zero-terminated")]
    pub zero_terminated: bool,

    /// Write result to FILE instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<String>,

    /// Report length, capacity and load factor on stderr when done
    #[arg(long)]
    pub stats: bool,

    /// Trace every operation and the buffer layout on stderr
    #[arg(long)]
    pub debug: bool,

    /// Input files of whitespace-separated numbers
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}

impl Args {
    /// Get the output delimiter (newline or NUL)
    pub fn record_delimiter(&self) -> u8 {
        if self.zero_terminated {
            0u8
        } else {
            b'\n'
        }
    }
}
