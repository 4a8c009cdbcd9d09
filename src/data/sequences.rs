// sequences.rs - Aligned sequence sets loaded from FASTA

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use bio::io::fasta;
use log::debug;

use crate::data::PositionMatrix;
use crate::error::{MitError, Result};

/// Ordered aligned sequences, one per sample.
///
/// Sample `i` of one set corresponds to sample `i` of any other set it is
/// compared with, so record order is significant.
#[derive(Debug, Clone)]
pub struct AlignedSequenceSet {
    pub source: String,
    pub ids: Vec<String>,
    pub sequences: Vec<Vec<u8>>,
}

impl AlignedSequenceSet {
    /// Load an alignment from a FASTA file
    pub fn from_fasta(path: &Path) -> Result<Self> {
        let source = path.display().to_string();
        let file = File::open(path).map_err(|e| MitError::Io {
            path: source.clone(),
            message: e.to_string(),
        })?;
        Self::from_reader(BufReader::new(file), &source)
    }

    /// Load an alignment from any FASTA stream; `source` names it in errors
    pub fn from_reader<R: Read>(reader: R, source: &str) -> Result<Self> {
        let reader = fasta::Reader::new(reader);
        let mut ids = Vec::new();
        let mut sequences = Vec::new();

        for record_result in reader.records() {
            let record = record_result.map_err(|e| MitError::Fasta {
                source: source.to_string(),
                message: e.to_string(),
            })?;
            ids.push(record.id().to_string());
            sequences.push(record.seq().to_vec());
        }

        let set = Self {
            source: source.to_string(),
            ids,
            sequences,
        };
        set.validate()?;
        debug!(
            "Loaded {} sequences of width {} from {}",
            set.len(),
            set.width(),
            source
        );
        Ok(set)
    }

    /// Build a set from in-memory sequences
    pub fn from_sequences<S: AsRef<[u8]>>(source: &str, sequences: &[S]) -> Result<Self> {
        let set = Self {
            source: source.to_string(),
            ids: (1..=sequences.len()).map(|i| format!("seq{}", i)).collect(),
            sequences: sequences.iter().map(|s| s.as_ref().to_vec()).collect(),
        };
        set.validate()?;
        Ok(set)
    }

    /// Reject empty inputs and sequences of unequal length
    fn validate(&self) -> Result<()> {
        let Some(first) = self.sequences.first() else {
            return Err(MitError::EmptyInput {
                source: self.source.clone(),
            });
        };
        let expected = first.len();
        if let Some((i, seq)) = self
            .sequences
            .iter()
            .enumerate()
            .find(|(_, seq)| seq.len() != expected)
        {
            return Err(MitError::RaggedAlignment {
                source: self.source.clone(),
                record: i + 1,
                expected,
                found: seq.len(),
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Alignment width
    pub fn width(&self) -> usize {
        self.sequences.first().map(Vec::len).unwrap_or(0)
    }

    /// Transpose into a position matrix
    pub fn position_matrix(&self) -> PositionMatrix {
        PositionMatrix::from_sequences(&self.sequences)
    }
}

/// Write sequences as FASTA records named `seq1`, `seq2`, ...
pub fn write_fasta<S: AsRef<[u8]>>(path: &Path, sequences: &[S]) -> Result<()> {
    let io_error = |e: std::io::Error| MitError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    };
    let file = File::create(path).map_err(io_error)?;
    write_fasta_to(BufWriter::new(file), sequences).map_err(io_error)
}

/// Write sequences into any stream, one FASTA record per sequence
pub fn write_fasta_to<W: Write, S: AsRef<[u8]>>(writer: W, sequences: &[S]) -> std::io::Result<()> {
    let mut writer = fasta::Writer::new(writer);
    for (i, seq) in sequences.iter().enumerate() {
        writer.write(&format!("seq{}", i + 1), None, seq.as_ref())?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiline_records() {
        let fasta = b">s1 first sample\nARN\nDC\n>s2\nQEGHI\n>s3\nLK\nMFP\n";
        let set = AlignedSequenceSet::from_reader(&fasta[..], "test").unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(set.width(), 5);
        assert_eq!(set.ids, vec!["s1", "s2", "s3"]);
        assert_eq!(set.sequences[0], b"ARNDC".to_vec());
        assert_eq!(set.sequences[2], b"LKMFP".to_vec());

        let matrix = set.position_matrix();
        assert_eq!(matrix.column(1), Some(&b"AQL"[..]));
    }

    #[test]
    fn test_empty_input() {
        let result = AlignedSequenceSet::from_reader(&b""[..], "empty.fasta");
        assert_eq!(
            result.unwrap_err(),
            MitError::EmptyInput {
                source: "empty.fasta".to_string()
            }
        );
    }

    #[test]
    fn test_ragged_alignment() {
        let fasta = b">a\nACGT\n>b\nACGT\n>c\nACG\n";
        let err = AlignedSequenceSet::from_reader(&fasta[..], "ragged").unwrap_err();
        assert_eq!(
            err,
            MitError::RaggedAlignment {
                source: "ragged".to_string(),
                record: 3,
                expected: 4,
                found: 3,
            }
        );
    }

    #[test]
    fn test_missing_file() {
        let err = AlignedSequenceSet::from_fasta(Path::new("/nonexistent/msa.fasta")).unwrap_err();
        assert!(matches!(err, MitError::Io { .. }));
    }

    #[test]
    fn test_write_then_read() {
        let mut buffer = Vec::new();
        write_fasta_to(&mut buffer, &["AC-T", "GGNA"]).unwrap();
        let set = AlignedSequenceSet::from_reader(&buffer[..], "buffer").unwrap();
        assert_eq!(set.ids, vec!["seq1", "seq2"]);
        assert_eq!(set.sequences, vec![b"AC-T".to_vec(), b"GGNA".to_vec()]);
    }

    #[test]
    fn test_from_sequences() {
        let set = AlignedSequenceSet::from_sequences("mem", &["AA", "CC"]).unwrap();
        assert_eq!(set.ids, vec!["seq1", "seq2"]);
        assert!(AlignedSequenceSet::from_sequences::<&str>("mem", &[]).is_err());
    }
}
