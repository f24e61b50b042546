//! # gtf2tracks
//!
//! Exon, intron, UTR and gene-body BED tracks out of a single GENCODE GTF.
//!
//! ## Usage
//!
//! ```bash
//! gtf2tracks -i <GTF> -o <PREFIX> [OPTIONS]
//!
//! Required arguments:
//!   -i, --input <GTF>          Path to GTF file (.gtf or .gtf.gz)
//!   -o, --output <PREFIX>      Prefix for the output BED files
//!
//! Optional arguments:
//!   -t, --threads <THREADS>    Number of threads (default: CPU count)
//!   -h, --help                 Print help
//!   -V, --version              Print version
//! ```
//!
//! ## Outputs
//!
//! Seven BED files are written next to each other:
//!
//! ```bash
//! {PREFIX}.exons.bed      exons of every transcript
//! {PREFIX}.introns.bed    gaps between consecutive exons
//! {PREFIX}.utrs.bed       UTR records
//! {PREFIX}.rRNA.bed       gene bodies with biotype rRNA
//! {PREFIX}.miRNA.bed      gene bodies with biotype miRNA
//! {PREFIX}.lincRNA.bed    gene bodies with biotype lincRNA
//! {PREFIX}.genes.bed      every gene body
//! ```
//!
//! ## Examples
//!
//! ### Basic derivation
//!
//! ```bash
//! gtf2tracks -i gencode.v49.annotation.gtf -o gencode.v49
//! ```
//!
//! ### Gzipped input with custom threads
//!
//! ```bash
//! gtf2tracks -i gencode.v49.annotation.gtf.gz -o gencode.v49 -t 8
//! ```
use clap::Parser;
use colored::Colorize;
use gtf2tracks::{run, Args, Config};
use log::Level;

fn main() {
    simple_logger::init_with_level(Level::Info).unwrap();

    let args = Args::parse();
    args.check().unwrap_or_else(|e| {
        log::error!("{}", e);
        std::process::exit(1);
    });

    let config = Config::from_args(&args);
    log::info!("Using {} threads", config.threads);

    let stats = run(&config).unwrap_or_else(|e| {
        log::error!("{}", e);
        std::process::exit(1);
    });

    log::info!(
        "{} {} genes and {} transcripts into 7 tracks",
        "Derived".green().bold(),
        stats.genes,
        stats.transcripts
    );
    log::info!("Elapsed: {:.4?} secs", stats.elapsed.as_secs_f32());
    log::info!("Memory: {:.2} MB", stats.mem_delta_mb);
}
