//! # gtf2tracks
//!
//! Exon, intron, UTR and gene-body BED tracks out of a single GENCODE GTF.
//!
//! This library parses a GTF annotation into a gene -> transcript ->
//! exon/UTR model in one forward pass, then derives seven BED files from
//! the completed model: exons, introns, UTRs, gene bodies, and the
//! rRNA/miRNA/lincRNA gene-body subsets. Introns are inferred from the
//! gaps between consecutive exons of each transcript, with exon order
//! normalized per strand while the model is built.
//!
//! ## Usage
//!
//! ```rust, ignore
//! use gtf2tracks::{Config, run};
//! use std::path::PathBuf;
//!
//! let config = Config {
//!     input: PathBuf::from("gencode.v49.annotation.gtf.gz"),
//!     prefix: PathBuf::from("gencode.v49"),
//!     threads: 4,
//! };
//!
//! let stats = run(&config)?;
//! println!("Derivation completed in {:?}", stats.elapsed);
//! println!("Memory used: {:.2} MB", stats.mem_delta_mb);
//! ```
//!
//! ## Examples
//!
//! ### Working with the model directly
//!
//! ```rust, ignore
//! use gtf2tracks::{Annotation, Track};
//!
//! let mut annotation = Annotation::new();
//! for line in contents.lines() {
//!     annotation.push_line(line)?;
//! }
//!
//! let introns = Track::Introns.derive(&annotation);
//! for intron in &introns {
//!     println!("{}", intron);
//! }
//! ```
//!
//! ### Re-quoting attribute values
//!
//! ```rust, ignore
//! use gtf2tracks::requote::{requote, QuoteStyle};
//! use std::path::Path;
//!
//! let stats = requote(
//!     Path::new("gencode.v49.annotation.gtf"),
//!     Path::new("gencode.v49.fixed"),
//!     QuoteStyle::Single,
//! )?;
//! println!("{} records rewritten", stats.records);
//! ```

pub mod cli;
pub mod config;
pub mod convert;
pub mod detect;
pub mod error;
pub mod fai;
pub mod gtf;
pub mod memory;
pub mod model;
pub mod requote;
pub mod tracks;

pub use cli::Args;
pub use config::Config;
pub use convert::{run, track_path, RunStats};
pub use error::{Gtf2TracksError, Result};
pub use memory::max_mem_usage_mb;
pub use model::{Annotation, BedRecord, Gene, Transcript};
pub use requote::QuoteStyle;
pub use tracks::Track;
