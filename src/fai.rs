//! Chromosome-length sidecar loading.
//!
//! Reads the first two columns of a samtools fasta index (.fai):
//! sequence name and sequence length. The track sweeps do not consume
//! these lengths; the loader exists for downstream tooling that clamps
//! intervals to chromosome bounds.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use hashbrown::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FaiError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line whose first two columns are not `name<TAB>length`.
    #[error("Invalid .fai line {line}: {content:?}")]
    Malformed { line: usize, content: String },
}

/// Loads a `chrom -> length` map from a tab-separated index file.
///
/// Extra columns beyond the first two are ignored, so both bare
/// two-column files and full five-column samtools indexes load.
pub fn read_chrom_lengths<P: AsRef<Path>>(path: P) -> Result<HashMap<String, u64>, FaiError> {
    let reader = BufReader::new(File::open(path)?);
    let mut lengths = HashMap::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split('\t');
        let entry = match (fields.next(), fields.next()) {
            (Some(name), Some(len)) => len.parse::<u64>().ok().map(|len| (name.to_string(), len)),
            _ => None,
        };

        match entry {
            Some((name, len)) => {
                lengths.insert(name, len);
            }
            None => {
                return Err(FaiError::Malformed {
                    line: idx + 1,
                    content: line,
                })
            }
        }
    }

    Ok(lengths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_read_full_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("genome.fa.fai");
        let fai = indoc! {"
            chr1\t248956422\t112\t70\t71
            chr2\t242193529\t252513167\t70\t71
            chrM\t16569\t494384387\t70\t71
        "};
        std::fs::write(&path, fai).unwrap();

        let lengths = read_chrom_lengths(&path).unwrap();
        assert_eq!(lengths.len(), 3);
        assert_eq!(lengths.get("chr1"), Some(&248956422));
        assert_eq!(lengths.get("chrM"), Some(&16569));
    }

    #[test]
    fn test_read_two_column_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lengths.tsv");
        std::fs::write(&path, "chrX\t156040895\n").unwrap();

        let lengths = read_chrom_lengths(&path).unwrap();
        assert_eq!(lengths.get("chrX"), Some(&156040895));
    }

    #[test]
    fn test_malformed_length() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.fai");
        std::fs::write(&path, "chr1\t248956422\nchr2\tlong\n").unwrap();

        match read_chrom_lengths(&path) {
            Err(FaiError::Malformed { line, content }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "chr2\tlong");
            }
            other => panic!("expected malformed error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = read_chrom_lengths("does/not/exist.fai").unwrap_err();
        assert!(matches!(err, FaiError::Io(_)));
    }
}
