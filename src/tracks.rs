//! The seven interval tracks derived from one annotation.

use crate::model::{Annotation, BedRecord, Gene};

/// Output categories of a derivation run, each written to its own BED
/// file under a shared prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    Exons,
    Introns,
    Utrs,
    Rrna,
    Mirna,
    Lincrna,
    Genes,
}

impl Track {
    /// Every track, in the order the files are reported.
    pub const ALL: [Track; 7] = [
        Track::Exons,
        Track::Introns,
        Track::Utrs,
        Track::Rrna,
        Track::Mirna,
        Track::Lincrna,
        Track::Genes,
    ];

    /// File suffix appended to the output prefix.
    pub fn suffix(self) -> &'static str {
        match self {
            Track::Exons => "exons.bed",
            Track::Introns => "introns.bed",
            Track::Utrs => "utrs.bed",
            Track::Rrna => "rRNA.bed",
            Track::Mirna => "miRNA.bed",
            Track::Lincrna => "lincRNA.bed",
            Track::Genes => "genes.bed",
        }
    }

    /// Runs this track's sweep over a completed annotation.
    ///
    /// Sweeps are read-only and independent of each other; genes are
    /// visited in the declaration order of the input.
    pub fn derive(self, annotation: &Annotation) -> Vec<BedRecord> {
        let genes = annotation.genes.values();
        match self {
            Track::Exons => genes.flat_map(Gene::get_exons).collect(),
            Track::Introns => genes.flat_map(Gene::get_introns).collect(),
            Track::Utrs => genes.flat_map(Gene::get_utrs).collect(),
            Track::Genes => genes.map(Gene::as_bed).collect(),
            Track::Rrna => filter_biotype(annotation, "rrna"),
            Track::Mirna => filter_biotype(annotation, "mirna"),
            Track::Lincrna => filter_biotype(annotation, "lincrna"),
        }
    }
}

/// Gene bodies of the genes whose biotype matches, case-insensitively.
fn filter_biotype(annotation: &Annotation, biotype: &str) -> Vec<BedRecord> {
    annotation
        .genes
        .values()
        .filter(|gene| gene.has_biotype(biotype))
        .map(Gene::as_bed)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Annotation;

    fn fixture() -> Annotation {
        let lines = [
            "chr1\thavana\tgene\t100\t600\t.\t+\t.\tgene_id \"G1\"; gene_type \"protein_coding\";",
            "chr1\thavana\ttranscript\t100\t600\t.\t+\t.\tgene_id \"G1\"; transcript_id \"T1\";",
            "chr1\thavana\texon\t100\t200\t.\t+\t.\tgene_id \"G1\"; transcript_id \"T1\";",
            "chr1\thavana\texon\t500\t600\t.\t+\t.\tgene_id \"G1\"; transcript_id \"T1\";",
            "chr1\thavana\tUTR\t100\t120\t.\t+\t.\tgene_id \"G1\"; transcript_id \"T1\";",
            "chr2\tensembl\tgene\t50\t90\t.\t-\t.\tgene_id \"G2\"; gene_type \"rRNA\";",
            "chr3\tensembl\tgene\t10\t40\t.\t+\t.\tgene_id \"G3\"; gene_biotype \"miRNA\";",
        ];

        let mut annotation = Annotation::new();
        for line in lines {
            annotation.push_line(line).unwrap();
        }
        annotation
    }

    #[test]
    fn test_suffixes() {
        let suffixes = Track::ALL.iter().map(|t| t.suffix()).collect::<Vec<_>>();
        assert_eq!(
            suffixes,
            vec![
                "exons.bed",
                "introns.bed",
                "utrs.bed",
                "rRNA.bed",
                "miRNA.bed",
                "lincRNA.bed",
                "genes.bed"
            ]
        );
    }

    #[test]
    fn test_derive_counts() {
        let annotation = fixture();

        assert_eq!(Track::Exons.derive(&annotation).len(), 2);
        assert_eq!(Track::Introns.derive(&annotation).len(), 1);
        assert_eq!(Track::Utrs.derive(&annotation).len(), 1);
        assert_eq!(Track::Genes.derive(&annotation).len(), 3);
    }

    #[test]
    fn test_biotype_filters_are_exact() {
        let annotation = fixture();

        let rrna = Track::Rrna.derive(&annotation);
        assert_eq!(rrna.len(), 1);
        assert_eq!(rrna[0].chrom, "chr2");
        assert_eq!((rrna[0].start, rrna[0].end), (49, 90));

        let mirna = Track::Mirna.derive(&annotation);
        assert_eq!(mirna.len(), 1);
        assert_eq!(mirna[0].chrom, "chr3");

        // protein_coding matches none of the filter tracks
        assert!(Track::Lincrna.derive(&annotation).is_empty());
    }

    #[test]
    fn test_gene_track_keeps_declaration_order() {
        let annotation = fixture();

        let chroms = Track::Genes
            .derive(&annotation)
            .into_iter()
            .map(|r| r.chrom)
            .collect::<Vec<_>>();
        assert_eq!(chroms, vec!["chr1", "chr2", "chr3"]);
    }
}
