use gtf2tracks::{run, track_path, Config, Gtf2TracksError, Track};
use indoc::indoc;
use std::path::{Path, PathBuf};

/// Writes a file to the temporary directory and returns its path.
fn write_temp_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// An exon naming an undeclared transcript aborts the run before any
/// track file is created.
#[test]
fn exon_before_transcript_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let gtf = indoc! {"
        chr1\thavana\tgene\t100\t600\t.\t+\t.\tgene_id \"G1\"; gene_type \"protein_coding\";
        chr1\thavana\texon\t100\t200\t.\t+\t.\tgene_id \"G1\"; transcript_id \"T9\";
    "};
    let input = write_temp_file(dir.path(), "input.gtf", gtf.trim());
    let prefix = dir.path().join("tracks");

    let err = run(&Config {
        input,
        prefix: prefix.clone(),
        threads: 1,
    })
    .unwrap_err();

    match err {
        Gtf2TracksError::Record { line, ref source } => {
            assert_eq!(line, 2);
            assert_eq!(source.to_string(), "Unknown transcript_id: T9");
        }
        other => panic!("expected record error, got {:?}", other),
    }

    for track in Track::ALL {
        assert!(!track_path(&prefix, track).exists());
    }
}

/// A transcript naming an undeclared gene is fatal too, with the
/// 1-based line number counting header lines.
#[test]
fn transcript_before_gene_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let gtf = indoc! {"
        ##provider: GENCODE
        chr1\thavana\ttranscript\t100\t600\t.\t+\t.\tgene_id \"G1\"; transcript_id \"T1\";
    "};
    let input = write_temp_file(dir.path(), "input.gtf", gtf.trim());
    let prefix = dir.path().join("tracks");

    let err = run(&Config {
        input,
        prefix,
        threads: 1,
    })
    .unwrap_err();

    assert_eq!(err.to_string(), "line 2: Unknown gene_id: G1");
}

/// Malformed attribute units surface with their line number.
#[test]
fn malformed_attribute_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let gtf = indoc! {"
        chr1\thavana\tgene\t100\t600\t.\t+\t.\tgene_id \"G1\"; gene_type \"protein_coding\";
        chr1\thavana\tgene\t700\t900\t.\t+\t.\tbroken
    "};
    let input = write_temp_file(dir.path(), "input.gtf", gtf.trim());
    let prefix = dir.path().join("tracks");

    let err = run(&Config {
        input,
        prefix,
        threads: 1,
    })
    .unwrap_err();

    assert_eq!(err.to_string(), "line 2: Malformed attribute: \"broken\"");
}
