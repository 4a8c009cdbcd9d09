// alphabet.rs - Sequence type and symbol alphabets

use std::fmt;
use std::str::FromStr;

/// The 20 standard amino acids, in scoring order.
pub const AMINO_ACIDS: [u8; 20] = [
    b'A', b'R', b'N', b'D', b'C', b'Q', b'E', b'G', b'H', b'I', b'L', b'K', b'M', b'F', b'P',
    b'S', b'T', b'W', b'Y', b'V',
];

/// The four nucleotides, in scoring order.
pub const NUCLEIC_ACIDS: [u8; 4] = [b'A', b'C', b'G', b'T'];

const NOT_IN_ALPHABET: u8 = u8::MAX;

/// Kind of sequences contained in the alignments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceType {
    AminoAcid,
    NucleicAcid,
}

impl FromStr for SequenceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "a" | "aa" | "amino" | "protein" => Ok(SequenceType::AminoAcid),
            "n" | "nt" | "nucleic" | "dna" => Ok(SequenceType::NucleicAcid),
            _ => Err(format!(
                "Invalid sequence type: {}. Use: A (amino acid) or N (nucleic acid)",
                s
            )),
        }
    }
}

impl SequenceType {
    pub fn description(&self) -> &str {
        match self {
            SequenceType::AminoAcid => "Amino Acid",
            SequenceType::NucleicAcid => "Nucleic Acid",
        }
    }

    /// Alphabet used to score sequences of this type
    pub fn alphabet(&self) -> Alphabet {
        match self {
            SequenceType::AminoAcid => Alphabet::amino_acids(),
            SequenceType::NucleicAcid => Alphabet::nucleic_acids(),
        }
    }
}

/// Ordered set of valid symbols with a byte-indexed lookup table.
///
/// Any byte outside the alphabet is missing data. Lookups are exact and
/// case-sensitive: `a` is not `A`.
#[derive(Clone)]
pub struct Alphabet {
    symbols: Vec<u8>,
    index: [u8; 256],
}

impl Alphabet {
    /// Build an alphabet from an ordered list of distinct symbols.
    /// The order determines the summation order of the MI scorer.
    pub fn new(symbols: &[u8]) -> Result<Self, String> {
        if symbols.len() < 2 {
            return Err("An alphabet needs at least two symbols".to_string());
        }
        if symbols.len() >= NOT_IN_ALPHABET as usize {
            return Err(format!("Alphabet too large: {} symbols", symbols.len()));
        }

        let mut index = [NOT_IN_ALPHABET; 256];
        for (i, &symbol) in symbols.iter().enumerate() {
            if index[symbol as usize] != NOT_IN_ALPHABET {
                return Err(format!("Duplicate symbol '{}' in alphabet", symbol as char));
            }
            index[symbol as usize] = i as u8;
        }

        Ok(Self {
            symbols: symbols.to_vec(),
            index,
        })
    }

    pub fn amino_acids() -> Self {
        Self::from_static(&AMINO_ACIDS)
    }

    pub fn nucleic_acids() -> Self {
        Self::from_static(&NUCLEIC_ACIDS)
    }

    // Built-in alphabets are distinct and small, so construction cannot fail.
    fn from_static(symbols: &[u8]) -> Self {
        let mut index = [NOT_IN_ALPHABET; 256];
        for (i, &symbol) in symbols.iter().enumerate() {
            index[symbol as usize] = i as u8;
        }
        Self {
            symbols: symbols.to_vec(),
            index,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Index of `symbol` in the alphabet, `None` for missing data
    #[inline]
    pub fn index_of(&self, symbol: u8) -> Option<usize> {
        match self.index[symbol as usize] {
            NOT_IN_ALPHABET => None,
            i => Some(i as usize),
        }
    }

    #[inline]
    pub fn contains(&self, symbol: u8) -> bool {
        self.index[symbol as usize] != NOT_IN_ALPHABET
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Natural log of the alphabet size, the divisor turning `ln` into `log_|A|`
    #[inline]
    pub fn ln_base(&self) -> f64 {
        (self.symbols.len() as f64).ln()
    }
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl Eq for Alphabet {}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("symbols", &String::from_utf8_lossy(&self.symbols))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amino_acid_alphabet() {
        let alphabet = Alphabet::amino_acids();
        assert_eq!(alphabet.len(), 20);
        assert_eq!(alphabet.index_of(b'A'), Some(0));
        assert_eq!(alphabet.index_of(b'V'), Some(19));
        assert!(alphabet.contains(b'W'));

        for missing in [b'-', b'X', b'*', b'B', b'a', b'.'] {
            assert_eq!(alphabet.index_of(missing), None);
        }
    }

    #[test]
    fn test_nucleic_acid_alphabet() {
        let alphabet = Alphabet::nucleic_acids();
        assert_eq!(alphabet.len(), 4);
        assert_eq!(alphabet.index_of(b'T'), Some(3));
        assert!(!alphabet.contains(b'N'));
        assert!(!alphabet.contains(b'U'));
        assert!((alphabet.ln_base() - 4f64.ln()).abs() < 1e-15);
    }

    #[test]
    fn test_custom_alphabet_validation() {
        assert!(Alphabet::new(b"AC").is_ok());
        assert!(Alphabet::new(b"A").is_err());
        assert!(Alphabet::new(b"ACA").is_err());
    }

    #[test]
    fn test_sequence_type_from_str() {
        assert_eq!("A".parse::<SequenceType>(), Ok(SequenceType::AminoAcid));
        assert_eq!("N".parse::<SequenceType>(), Ok(SequenceType::NucleicAcid));
        assert_eq!("amino".parse::<SequenceType>(), Ok(SequenceType::AminoAcid));
        assert_eq!("dna".parse::<SequenceType>(), Ok(SequenceType::NucleicAcid));
        assert!("X".parse::<SequenceType>().is_err());

        assert_eq!(SequenceType::AminoAcid.alphabet(), Alphabet::amino_acids());
        assert_eq!(SequenceType::NucleicAcid.alphabet().len(), 4);
    }
}
