use crate::array::validate_growth_factor;
use crate::cli::Args;
use crate::error::Result;
use crate::ops::Op;

/// Runtime configuration derived from CLI arguments
#[derive(Clone, Debug)]
pub struct Config {
    pub growth_factor: f64,
    pub ops: Vec<Op>,
    pub reverse: bool,
    pub stats: bool,
    pub debug: bool,
    pub record_delimiter: u8,
    pub output_file: Option<String>,
    pub input_files: Vec<String>,
}

impl Config {
    /// Build configuration from parsed CLI arguments
    ///
    /// The growth factor and every script step are validated up front, so a
    /// bad invocation fails before any input is read.
    pub fn from_args(args: &Args) -> Result<Self> {
        let ops: Result<Vec<Op>> = args.ops.iter().map(|s| Op::parse(s)).collect();

        Ok(Config {
            growth_factor: validate_growth_factor(args.growth_factor)?,
            ops: ops?,
            reverse: args.reverse,
            stats: args.stats,
            debug: args.debug,
            record_delimiter: args.record_delimiter(),
            output_file: args.output.clone(),
            input_files: args.files.clone(),
        })
    }

    /// Whether stdin is the only input
    pub fn reads_stdin(&self) -> bool {
        self.input_files.is_empty()
    }
}
