//! BED interval tracks out of a GENCODE GTF annotation
//! Alejandro Gonzales-Irribarren, 2025

use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Parser, Debug)]
#[clap(
    name = "gtf2tracks",
    version = env!("CARGO_PKG_VERSION"),
    author = "Alejandro Gonzales-Irribarren <alejandrxgzi@gmail.com>",
    about = "exon/intron/UTR/gene BED tracks out of a GENCODE GTF"
)]
pub struct Args {
    /// Derives the exon, intron, UTR and gene-body BED tracks from one
    /// GTF annotation, plus the rRNA/miRNA/lincRNA gene-body subsets.
    ///
    /// Start by providing the path to the GTF file with -i/--input
    /// file.gtf or -i/--input file.gtf.gz.
    #[clap(
        short = 'i',
        long = "input",
        help = "Path to GTF file (.gtf or .gtf.gz)",
        value_name = "GTF",
        required = true
    )]
    pub input: PathBuf,

    /// Output prefix; required argument.
    ///
    /// Seven BED files are written next to each other, named
    /// {prefix}.exons.bed, {prefix}.introns.bed and so on.
    #[clap(
        short = 'o',
        long = "output",
        help = "Prefix for the output BED files",
        value_name = "PREFIX",
        required = true
    )]
    pub prefix: PathBuf,

    /// Number of threads to use; default is the number of logical CPUs.
    #[clap(
        short = 't',
        long,
        help = "Number of threads",
        value_name = "THREADS",
        default_value_t = num_cpus::get()
    )]
    pub threads: usize,
}

impl Args {
    /// Checks all the arguments for validity using validate_args()
    pub fn check(&self) -> Result<(), ArgError> {
        self.validate_args()
    }

    /// Checks the input file for validity. The file must exist and not
    /// be empty. If the file does not exist, an error is returned.
    fn check_input(&self) -> Result<(), ArgError> {
        if !self.input.exists() {
            let err = format!("file {:?} does not exist", self.input);
            return Err(ArgError::InvalidInput(err));
        }

        let metadata = std::fs::metadata(&self.input)
            .map_err(|e| ArgError::InvalidInput(format!("file {:?}: {}", self.input, e)))?;
        if metadata.len() == 0 {
            let err = format!("file {:?} is empty", self.input);
            return Err(ArgError::InvalidInput(err));
        }

        Ok(())
    }

    /// Checks the output prefix for validity. The directory the output
    /// files would land in must exist.
    fn check_output(&self) -> Result<(), ArgError> {
        match self.prefix.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                let err = format!("directory {:?} does not exist", parent);
                Err(ArgError::InvalidOutput(err))
            }
            _ => Ok(()),
        }
    }

    /// Checks the number of threads for validity. The number of threads must be greater than 0
    /// and less than or equal to the number of logical CPUs.
    fn check_threads(&self) -> Result<(), ArgError> {
        if self.threads == 0 {
            let err = "number of threads must be greater than 0".to_string();
            Err(ArgError::InvalidThreads(err))
        } else if self.threads > num_cpus::get() {
            let err = "number of threads must be less than or equal to the number of logical CPUs"
                .to_string();
            return Err(ArgError::InvalidThreads(err));
        } else {
            Ok(())
        }
    }

    /// Validates all the arguments
    fn validate_args(&self) -> Result<(), ArgError> {
        self.check_input()?;
        self.check_output()?;
        self.check_threads()?;
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ArgError {
    /// The input file does not exist or is empty.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The output prefix points into a directory that does not exist.
    #[error("Invalid output: {0}")]
    InvalidOutput(String),

    /// The number of threads is invalid.
    #[error("Invalid number of threads: {0}")]
    InvalidThreads(String),
}
