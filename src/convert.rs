use crate::config::Config;
use crate::detect::open_input;
use crate::error::{Gtf2TracksError, Result};
use crate::memory::max_mem_usage_mb;
use crate::model::{Annotation, BedRecord};
use crate::tracks::Track;
use rayon::prelude::*;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Summary statistics for a derivation run.
#[derive(Debug, Clone, Copy)]
pub struct RunStats {
    /// Wall clock time spent in the run.
    pub elapsed: Duration,
    /// Delta in maximum RSS memory usage, in MB.
    pub mem_delta_mb: f64,
    /// Genes in the parsed model.
    pub genes: usize,
    /// Transcripts in the parsed model.
    pub transcripts: usize,
}

/// Runs the full GTF-to-tracks derivation with the provided configuration.
///
/// One sequential pass builds the gene model, then the seven tracks are
/// derived from the completed model and written in parallel. Nothing is
/// written until the build pass has finished, so a fatal error in the
/// input leaves no partial artifacts behind.
///
/// # Arguments
///
/// * `config` - Configuration containing input path, output prefix and threads
///
/// # Returns
///
/// Returns RunStats containing timing, memory usage and model counts.
///
/// # Errors
///
/// Returns an error if any step of the derivation fails.
///
/// # Example
///
/// ```rust, ignore
/// use gtf2tracks::{Config, run};
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("annotations.gtf"),
///     prefix: PathBuf::from("annotations"),
///     threads: 4,
/// };
/// let stats = run(&config)?;
/// println!("Derivation took: {:?}", stats.elapsed);
/// ```
pub fn run(config: &Config) -> Result<RunStats> {
    let start = Instant::now();
    let start_mem = max_mem_usage_mb();

    let annotation = build_annotation(&config.input)?;
    log::info!(
        "parsed {} genes, {} transcripts",
        annotation.num_genes(),
        annotation.num_transcripts()
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;
    pool.install(|| write_tracks(&annotation, &config.prefix))?;

    let elapsed = start.elapsed();
    let mem_delta = (max_mem_usage_mb() - start_mem).max(0.0);

    Ok(RunStats {
        elapsed,
        mem_delta_mb: mem_delta,
        genes: annotation.num_genes(),
        transcripts: annotation.num_transcripts(),
    })
}

/// Builds the annotation model with one forward pass over the input.
///
/// Every line is either a header or an annotation record; records are
/// dispatched into the model as they stream by. Errors are reported
/// with the 1-based line number they occurred on.
///
/// # Arguments
///
/// * `input` - Path to the GTF file, plain or gzipped
///
/// # Returns
///
/// Returns the completed Annotation.
///
/// # Errors
///
/// Returns an error on I/O failure, on a malformed line, or when a
/// record references a parent that has not been declared yet.
fn build_annotation(input: &Path) -> Result<Annotation> {
    let reader = open_input(input)?;
    let mut annotation = Annotation::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        annotation
            .push_line(&line)
            .map_err(|source| Gtf2TracksError::Record {
                line: idx + 1,
                source,
            })?;
    }

    Ok(annotation)
}

/// Derives and writes every track under the shared prefix.
///
/// Track sweeps only read the model, so they run in parallel on the
/// current Rayon pool; the first error aborts the pass.
fn write_tracks(annotation: &Annotation, prefix: &Path) -> Result<()> {
    Track::ALL.par_iter().try_for_each(|&track| {
        let records = track.derive(annotation);
        let path = track_path(prefix, track);
        write_track(&path, &records)?;
        log::info!("{}: {} records", path.display(), records.len());
        Ok(())
    })
}

/// Output artifact for one track, `{prefix}.{suffix}`.
///
/// # Example
///
/// ```rust, ignore
/// use gtf2tracks::convert::track_path;
/// use gtf2tracks::Track;
/// use std::path::Path;
///
/// let path = track_path(Path::new("gencode.v49"), Track::Exons);
/// assert_eq!(path.to_str(), Some("gencode.v49.exons.bed"));
/// ```
pub fn track_path(prefix: &Path, track: Track) -> PathBuf {
    PathBuf::from(format!("{}.{}", prefix.display(), track.suffix()))
}

/// Writes one record per line, in sweep order.
fn write_track(path: &Path, records: &[BedRecord]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = BufWriter::with_capacity(256 * 1024, file);
    for record in records {
        writeln!(writer, "{}", record)?;
    }
    writer.flush()?;
    Ok(())
}
