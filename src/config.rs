use crate::cli::Args;
use std::path::PathBuf;

/// Normalized configuration for a derivation run.
#[derive(Clone, Debug)]
pub struct Config {
    /// Input GTF path, plain or gzipped.
    pub input: PathBuf,
    /// Output prefix; each track lands at `{prefix}.<track>.bed`.
    pub prefix: PathBuf,
    /// Number of threads used for the track-writing pass.
    pub threads: usize,
}

impl Config {
    /// Builds a run config from CLI arguments.
    ///
    /// # Arguments
    ///
    /// * `args` - Command-line arguments to convert into a configuration
    ///
    /// # Returns
    ///
    /// Returns a new Config instance with values copied from the CLI arguments.
    ///
    /// # Example
    ///
    /// ```rust, ignore
    /// use gtf2tracks::{Args, Config};
    /// use std::path::PathBuf;
    ///
    /// let args = Args {
    ///     input: PathBuf::from("annotations.gtf"),
    ///     prefix: PathBuf::from("annotations"),
    ///     threads: 4,
    /// };
    /// let config = Config::from_args(&args);
    /// ```
    pub fn from_args(args: &Args) -> Self {
        Self {
            input: args.input.clone(),
            prefix: args.prefix.clone(),
            threads: args.threads,
        }
    }
}
