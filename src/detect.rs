use crate::error::{Gtf2TracksError, Result};
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Supported compression formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
}

impl Compression {
    /// Returns true when the input is compressed.
    ///
    /// # Example
    ///
    /// ```rust, ignore
    /// use gtf2tracks::detect::Compression;
    ///
    /// assert!(Compression::Gzip.is_compressed());
    /// assert!(!Compression::None.is_compressed());
    /// ```
    pub fn is_compressed(self) -> bool {
        !matches!(self, Compression::None)
    }
}

/// Detects the input compression from the file extension(s).
///
/// Only `.gtf` and `.gtf.gz` inputs are accepted; anything else is an
/// unsupported extension. Extension matching is case-insensitive and
/// handles the nested form of compressed files.
///
/// # Arguments
///
/// * `path` - Path to the input file
///
/// # Returns
///
/// Returns the detected Compression for a valid GTF path.
///
/// # Errors
///
/// Returns an error if the file extension is not supported.
///
/// # Example
///
/// ```rust, ignore
/// use gtf2tracks::detect::detect_input_kind;
/// use std::path::Path;
///
/// let kind = detect_input_kind(Path::new("file.gtf.gz"))?;
/// // Returns Compression::Gzip
/// ```
pub fn detect_input_kind(path: &Path) -> Result<Compression> {
    let ext = extension_lowercase(path)
        .ok_or_else(|| Gtf2TracksError::UnsupportedExtension(path.display().to_string()))?;

    if let Some(compression) = compression_from_extension(&ext) {
        let inner_ext = nested_extension(path)
            .ok_or_else(|| Gtf2TracksError::UnsupportedExtension(path.display().to_string()))?;
        if inner_ext != "gtf" {
            return Err(Gtf2TracksError::UnsupportedExtension(
                path.display().to_string(),
            ));
        }
        return Ok(compression);
    }

    if ext == "gtf" {
        Ok(Compression::None)
    } else {
        Err(Gtf2TracksError::UnsupportedExtension(
            path.display().to_string(),
        ))
    }
}

/// Opens the input as a buffered line reader, decompressing when needed.
///
/// # Arguments
///
/// * `path` - Path to the input file
///
/// # Returns
///
/// Returns a boxed BufRead over the decoded file contents.
///
/// # Errors
///
/// Returns an error if the extension is unsupported or the file cannot
/// be opened.
///
/// # Example
///
/// ```rust, ignore
/// use gtf2tracks::detect::open_input;
/// use std::io::BufRead;
/// use std::path::Path;
///
/// let reader = open_input(Path::new("annotations.gtf.gz"))?;
/// for line in reader.lines() {
///     // ...
/// }
/// ```
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    let kind = detect_input_kind(path)?;
    let file = File::open(path)?;

    match kind {
        Compression::Gzip => Ok(Box::new(BufReader::new(MultiGzDecoder::new(file)))),
        Compression::None => Ok(Box::new(BufReader::new(file))),
    }
}

/// Extracts the lowercase extension from a path.
fn extension_lowercase(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// Maps a compression extension to its Compression variant.
fn compression_from_extension(ext: &str) -> Option<Compression> {
    match ext {
        "gz" | "gzip" => Some(Compression::Gzip),
        _ => None,
    }
}

/// Returns the inner extension for compressed files (e.g., `.gtf.gz` -> `gtf`).
fn nested_extension(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    extension_lowercase(&PathBuf::from(stem))
}
