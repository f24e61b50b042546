use flate2::write::GzEncoder;
use flate2::Compression as GzCompression;
use gtf2tracks::{run, track_path, Config, Track};
use indoc::indoc;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes gz-compressed contents to a file and returns its path.
fn write_gzip_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let mut encoder = GzEncoder::new(Vec::new(), GzCompression::default());
    encoder.write_all(contents.as_bytes()).unwrap();
    let gz = encoder.finish().unwrap();

    let path = dir.join(name);
    std::fs::write(&path, gz).unwrap();
    path
}

/// Derives tracks from a gzipped GTF through the streaming decoder.
#[test]
fn derive_tracks_from_gzipped_gtf() {
    let dir = tempfile::tempdir().unwrap();
    let gtf = indoc! {"
        ##provider: GENCODE
        chr1\thavana\tgene\t100\t600\t.\t+\t.\tgene_id \"G1\"; gene_type \"protein_coding\";
        chr1\thavana\ttranscript\t100\t600\t.\t+\t.\tgene_id \"G1\"; transcript_id \"T1\";
        chr1\thavana\texon\t100\t200\t.\t+\t.\tgene_id \"G1\"; transcript_id \"T1\";
        chr1\thavana\texon\t500\t600\t.\t+\t.\tgene_id \"G1\"; transcript_id \"T1\";
    "};
    let input = write_gzip_file(dir.path(), "input.gtf.gz", gtf.trim());
    let prefix = dir.path().join("tracks");

    let stats = run(&Config {
        input,
        prefix: prefix.clone(),
        threads: 2,
    })
    .unwrap();
    assert_eq!(stats.genes, 1);

    let exons = std::fs::read_to_string(track_path(&prefix, Track::Exons)).unwrap();
    assert_eq!(exons, "chr1\t99\t200\nchr1\t499\t600\n");

    let introns = std::fs::read_to_string(track_path(&prefix, Track::Introns)).unwrap();
    assert_eq!(introns, "chr1\t200\t499\n");
}
