mod attr;
pub use attr::*;

/// One annotation line, split into the fields the gene model consumes.
///
/// Coordinates stay 1-based inclusive exactly as declared; the shift to
/// BED space happens once, when an interval is emitted. The source,
/// score and frame columns are checked for presence and dropped.
#[derive(Debug, PartialEq)]
pub struct GtfRecord<'a> {
    pub chrom: &'a str,
    pub feature: Feature<'a>,
    pub start: u64,
    pub end: u64,
    pub strand: Strand,
    pub attr: Attribute<'a>,
}

impl<'a> GtfRecord<'a> {
    /// Parses one 9-column annotation line.
    pub fn parse(line: &'a str) -> Result<Self, ParseError> {
        if line.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut fields = line.split('\t');

        let (chrom, _source, feature, start, end, _score, strand, _frame, attr) = (
            fields.next().ok_or(ParseError::MissingColumn("chrom"))?,
            fields.next().ok_or(ParseError::MissingColumn("source"))?,
            fields.next().ok_or(ParseError::MissingColumn("feature"))?,
            fields.next().ok_or(ParseError::MissingColumn("start"))?,
            fields.next().ok_or(ParseError::MissingColumn("end"))?,
            fields.next().ok_or(ParseError::MissingColumn("score"))?,
            fields.next().ok_or(ParseError::MissingColumn("strand"))?,
            fields.next().ok_or(ParseError::MissingColumn("frame"))?,
            fields.next().ok_or(ParseError::MissingColumn("attributes"))?,
        );

        Ok(Self {
            chrom,
            feature: Feature::from_column(feature),
            start: parse_coordinate("start", start)?,
            end: parse_coordinate("end", end)?,
            strand: Strand::from_column(strand),
            attr: Attribute::parse(attr)?,
        })
    }
}

/// Parses a coordinate column, rejecting zero so the later 1-based to
/// 0-based shift cannot underflow.
fn parse_coordinate(field: &'static str, value: &str) -> Result<u64, ParseError> {
    match value.parse::<u64>() {
        Ok(0) | Err(_) => Err(ParseError::InvalidCoordinate {
            field,
            value: value.to_string(),
        }),
        Ok(coord) => Ok(coord),
    }
}

/// Feature kinds the model builder dispatches on. Anything else is
/// carried through as `Other` and skipped downstream.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Feature<'a> {
    Gene,
    Transcript,
    Exon,
    Utr,
    Other(&'a str),
}

impl<'a> Feature<'a> {
    fn from_column(raw: &'a str) -> Self {
        match raw {
            "gene" => Feature::Gene,
            "transcript" => Feature::Transcript,
            "exon" => Feature::Exon,
            "UTR" => Feature::Utr,
            _ => Feature::Other(raw),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Strand {
    Forward,
    Reverse,
    Unknown,
}

impl Strand {
    /// Only `+` reads forward; every other strand column value orders
    /// exons the reverse-strand way.
    pub fn is_forward(self) -> bool {
        matches!(self, Strand::Forward)
    }

    fn from_column(raw: &str) -> Self {
        match raw {
            "+" => Strand::Forward,
            "-" => Strand::Reverse,
            _ => Strand::Unknown,
        }
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Strand::Forward => write!(f, "+"),
            Strand::Reverse => write!(f, "-"),
            Strand::Unknown => write!(f, "."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_gtf() {
        let line = "chr1\thavana\texon\t11869\t12227\t.\t+\t.\tgene_id \"ENSG00000223972\"; gene_name \"DDX11L1\"; gene_biotype \"transcribed_unprocessed_pseudogene\";";
        let record = GtfRecord::parse(line).unwrap();

        assert_eq!(record.chrom, "chr1");
        assert_eq!(record.feature, Feature::Exon);
        assert_eq!(record.start, 11869);
        assert_eq!(record.end, 12227);
        assert_eq!(record.strand, Strand::Forward);
        assert_eq!(record.attr.get("gene_id"), Some("ENSG00000223972"));
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(GtfRecord::parse(""), Err(ParseError::Empty));
    }

    #[test]
    fn test_truncated_line() {
        let line = "chr1\thavana\texon\t11869\t12227";
        assert_eq!(
            GtfRecord::parse(line),
            Err(ParseError::MissingColumn("score"))
        );
    }

    #[test]
    fn test_feature_kinds() {
        for (column, expected) in [
            ("gene", Feature::Gene),
            ("transcript", Feature::Transcript),
            ("exon", Feature::Exon),
            ("UTR", Feature::Utr),
            ("CDS", Feature::Other("CDS")),
            ("five_prime_utr", Feature::Other("five_prime_utr")),
        ] {
            let line = format!(
                "chr1\thavana\t{}\t100\t200\t.\t+\t.\tgene_id \"G1\";",
                column
            );
            assert_eq!(GtfRecord::parse(&line).unwrap().feature, expected);
        }
    }

    #[test]
    fn test_strand_column() {
        for (column, expected) in [
            ("+", Strand::Forward),
            ("-", Strand::Reverse),
            (".", Strand::Unknown),
        ] {
            let line = format!(
                "chr1\thavana\tgene\t100\t200\t.\t{}\t.\tgene_id \"G1\";",
                column
            );
            assert_eq!(GtfRecord::parse(&line).unwrap().strand, expected);
        }
        assert!(Strand::Forward.is_forward());
        assert!(!Strand::Unknown.is_forward());
        assert_eq!(Strand::Reverse.to_string(), "-");
    }

    #[test]
    fn test_invalid_coordinates() {
        let zero = "chr1\thavana\tgene\t0\t200\t.\t+\t.\tgene_id \"G1\";";
        assert_eq!(
            GtfRecord::parse(zero),
            Err(ParseError::InvalidCoordinate {
                field: "start",
                value: "0".to_string()
            })
        );

        let junk = "chr1\thavana\tgene\t100\tend\t.\t+\t.\tgene_id \"G1\";";
        assert_eq!(
            GtfRecord::parse(junk),
            Err(ParseError::InvalidCoordinate {
                field: "end",
                value: "end".to_string()
            })
        );
    }
}
