//! In-memory annotation model and the interval math on top of it.
//!
//! The model mirrors the nesting of the input: an [`Annotation`] holds
//! genes keyed by `gene_id`, a [`Gene`] holds transcripts keyed by
//! `transcript_id`, and a [`Transcript`] holds its exon and UTR spans.
//! All maps are insertion-ordered, so every derived track lists
//! intervals in the order the file declared their parents.

use std::collections::VecDeque;
use std::fmt;

use indexmap::IndexMap;
use thiserror::Error;

use crate::gtf::{Feature, GtfRecord, ParseError, Strand};

/// A flat genomic interval ready for BED emission.
///
/// Construction is the single place where a 1-based inclusive start
/// becomes a 0-based half-open one; the end passes through unchanged.
/// Callers always hand in native GTF coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BedRecord {
    pub chrom: String,
    pub start: u64,
    pub end: u64,
    pub info: Option<Vec<String>>,
}

impl BedRecord {
    pub fn new(chrom: &str, start: u64, end: u64, info: Option<Vec<String>>) -> Self {
        Self {
            chrom: chrom.to_string(),
            start: start - 1,
            end,
            info,
        }
    }

    /// True when the converted interval is empty or inverted, as the
    /// intron candidate between two touching exons is.
    pub fn is_degenerate(&self) -> bool {
        self.start >= self.end
    }
}

impl fmt::Display for BedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.chrom, self.start, self.end)?;
        if let Some(info) = &self.info {
            for field in info {
                write!(f, "\t{}", field)?;
            }
        }
        Ok(())
    }
}

/// A transcript and the exon/UTR spans declared under it.
///
/// Exons are kept in transcription order: forward-strand records append
/// and every other strand prepends. Reverse-strand files declare exons
/// highest-coordinate first, so prepending leaves the stored sequence
/// in ascending genomic order, which the intron sweep depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub id: String,
    pub chrom: String,
    pub start: u64,
    pub end: u64,
    pub strand: Strand,
    pub exons: VecDeque<(u64, u64)>,
    pub utrs: Vec<(u64, u64)>,
}

impl Transcript {
    fn from_record(record: &GtfRecord<'_>, id: &str) -> Self {
        Self {
            id: id.to_string(),
            chrom: record.chrom.to_string(),
            start: record.start,
            end: record.end,
            strand: record.strand,
            exons: VecDeque::new(),
            utrs: Vec::new(),
        }
    }

    /// Single insertion point for the strand-aware exon ordering rule.
    pub fn add_exon(&mut self, start: u64, end: u64) {
        if self.strand.is_forward() {
            self.exons.push_back((start, end));
        } else {
            self.exons.push_front((start, end));
        }
    }

    /// UTR spans append in declaration order on both strands.
    pub fn add_utr(&mut self, start: u64, end: u64) {
        self.utrs.push((start, end));
    }

    pub fn get_exons(&self) -> Vec<BedRecord> {
        self.exons
            .iter()
            .map(|&(start, end)| BedRecord::new(&self.chrom, start, end, None))
            .collect()
    }

    /// Introns between consecutive stored exons.
    ///
    /// The gap is computed in 1-based space as `(prev.end + 1,
    /// next.start - 1)` and converted like any other interval. Exon
    /// pairs with no gap between them produce an empty or inverted
    /// candidate; those are skipped with a warning instead of being
    /// written out.
    pub fn get_introns(&self) -> Vec<BedRecord> {
        let mut introns = Vec::with_capacity(self.exons.len().saturating_sub(1));

        for (prev, next) in self.exons.iter().zip(self.exons.iter().skip(1)) {
            let intron = BedRecord::new(&self.chrom, prev.1 + 1, next.0 - 1, None);
            if intron.is_degenerate() {
                log::warn!(
                    "transcript {}: no gap between exons {}-{} and {}-{}, skipping intron",
                    self.id,
                    prev.0,
                    prev.1,
                    next.0,
                    next.1
                );
                continue;
            }
            introns.push(intron);
        }

        introns
    }

    pub fn get_utrs(&self) -> Vec<BedRecord> {
        self.utrs
            .iter()
            .map(|&(start, end)| BedRecord::new(&self.chrom, start, end, None))
            .collect()
    }
}

/// A gene record plus the transcripts declared under it.
#[derive(Debug, Clone, PartialEq)]
pub struct Gene {
    pub id: String,
    pub chrom: String,
    pub start: u64,
    pub end: u64,
    pub biotype: String,
    pub transcripts: IndexMap<String, Transcript>,
}

impl Gene {
    fn from_record(record: &GtfRecord<'_>, id: &str, biotype: &str) -> Self {
        Self {
            id: id.to_string(),
            chrom: record.chrom.to_string(),
            start: record.start,
            end: record.end,
            biotype: biotype.to_string(),
            transcripts: IndexMap::new(),
        }
    }

    pub fn add_transcript(&mut self, transcript: Transcript) {
        self.transcripts.insert(transcript.id.clone(), transcript);
    }

    /// Exons of every transcript, transcripts in insertion order.
    pub fn get_exons(&self) -> Vec<BedRecord> {
        self.transcripts
            .values()
            .flat_map(|tx| tx.get_exons())
            .collect()
    }

    pub fn get_introns(&self) -> Vec<BedRecord> {
        self.transcripts
            .values()
            .flat_map(|tx| tx.get_introns())
            .collect()
    }

    pub fn get_utrs(&self) -> Vec<BedRecord> {
        self.transcripts
            .values()
            .flat_map(|tx| tx.get_utrs())
            .collect()
    }

    /// Gene body from the declared span, never recomputed from children.
    pub fn as_bed(&self) -> BedRecord {
        BedRecord::new(&self.chrom, self.start, self.end, None)
    }

    /// Case-insensitive exact biotype match.
    pub fn has_biotype(&self, biotype: &str) -> bool {
        self.biotype.eq_ignore_ascii_case(biotype)
    }
}

/// The completed annotation: genes in file declaration order plus the
/// header lines collected on the way.
#[derive(Debug, Default)]
pub struct Annotation {
    pub genes: IndexMap<String, Gene>,
    pub headers: Vec<String>,
}

impl Annotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one raw input line into the model.
    ///
    /// Header lines go to the header collector; everything else is
    /// parsed and dispatched by feature kind. Parent records must
    /// appear before the records that reference them, so a lookup miss
    /// aborts the build.
    pub fn push_line(&mut self, line: &str) -> Result<(), BuildError> {
        if line.starts_with('#') {
            self.headers.push(line.to_string());
            return Ok(());
        }

        self.insert(GtfRecord::parse(line)?)
    }

    fn insert(&mut self, record: GtfRecord<'_>) -> Result<(), BuildError> {
        match record.feature {
            Feature::Gene => {
                let id = record.attr.require("gene_id")?;
                let biotype = record
                    .attr
                    .get("gene_type")
                    .or_else(|| record.attr.get("gene_biotype"))
                    .ok_or_else(|| ParseError::MissingAttribute("gene_type".to_string()))?;
                // a repeated gene_id silently replaces the earlier gene
                self.genes
                    .insert(id.to_string(), Gene::from_record(&record, id, biotype));
            }
            Feature::Transcript => {
                let gene_id = record.attr.require("gene_id")?;
                let id = record.attr.require("transcript_id")?;
                let transcript = Transcript::from_record(&record, id);
                self.gene_mut(gene_id)?.add_transcript(transcript);
            }
            Feature::Exon => {
                self.transcript_mut(&record)?
                    .add_exon(record.start, record.end);
            }
            Feature::Utr => {
                self.transcript_mut(&record)?
                    .add_utr(record.start, record.end);
            }
            Feature::Other(_) => {}
        }

        Ok(())
    }

    fn gene_mut(&mut self, id: &str) -> Result<&mut Gene, BuildError> {
        self.genes
            .get_mut(id)
            .ok_or_else(|| BuildError::MissingGene(id.to_string()))
    }

    fn transcript_mut(&mut self, record: &GtfRecord<'_>) -> Result<&mut Transcript, BuildError> {
        let gene_id = record.attr.require("gene_id")?;
        let transcript_id = record.attr.require("transcript_id")?;

        let gene = self.gene_mut(gene_id)?;
        gene.transcripts
            .get_mut(transcript_id)
            .ok_or_else(|| BuildError::MissingTranscript(transcript_id.to_string()))
    }

    pub fn num_genes(&self) -> usize {
        self.genes.len()
    }

    pub fn num_transcripts(&self) -> usize {
        self.genes.values().map(|gene| gene.transcripts.len()).sum()
    }
}

/// Errors raised while building the model from a line stream.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// A transcript or exon names a gene_id no gene record declared.
    #[error("Unknown gene_id: {0}")]
    MissingGene(String),

    /// An exon or UTR names a transcript_id no transcript record declared.
    #[error("Unknown transcript_id: {0}")]
    MissingTranscript(String),
}
