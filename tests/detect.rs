use gtf2tracks::detect::{detect_input_kind, Compression};
use std::path::Path;

/// Ensures plain GTF input is detected correctly.
#[test]
fn detect_plain_gtf() {
    let kind = detect_input_kind(Path::new("sample.gtf")).unwrap();
    assert_eq!(kind, Compression::None);
    assert!(!kind.is_compressed());
}

/// Ensures gzipped GTF input is detected correctly.
#[test]
fn detect_gtf_gz() {
    let kind = detect_input_kind(Path::new("sample.gtf.gz")).unwrap();
    assert_eq!(kind, Compression::Gzip);
    assert!(kind.is_compressed());
}

/// Extension matching is case-insensitive.
#[test]
fn detect_uppercase_extension() {
    let kind = detect_input_kind(Path::new("SAMPLE.GTF.GZ")).unwrap();
    assert_eq!(kind, Compression::Gzip);
}

/// Rejects GFF inputs, gzipped or not.
#[test]
fn detect_rejects_gff() {
    assert!(detect_input_kind(Path::new("sample.gff3")).is_err());
    assert!(detect_input_kind(Path::new("sample.gff3.gz")).is_err());
}

/// Rejects unsupported extensions and bare archives.
#[test]
fn detect_rejects_unknown() {
    assert!(detect_input_kind(Path::new("sample.txt")).is_err());
    assert!(detect_input_kind(Path::new("sample.gz")).is_err());
    assert!(detect_input_kind(Path::new("sample")).is_err());
}
