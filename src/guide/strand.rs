use serde::{Deserialize, Serialize};

use crate::util::dna;

use super::normalize::DnaSequence;

/// Orientation a candidate was found on. Ordering puts `Sense` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Strand {
    Sense,
    Antisense,
}

impl Strand {
    pub fn symbol(self) -> char {
        match self {
            Strand::Sense => '+',
            Strand::Antisense => '-',
        }
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strand::Sense => f.write_str("sense"),
            Strand::Antisense => f.write_str("antisense"),
        }
    }
}

/// 反向互补链，长度与字母表不变。
pub fn reverse_complement(seq: &DnaSequence) -> DnaSequence {
    DnaSequence::from_validated(dna::revcomp(seq.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_complement_preserves_length() {
        let seq = DnaSequence::from_bases(b"AAAACCCCGGGGTTTTACGTA".to_vec()).unwrap();
        let rc = reverse_complement(&seq);
        assert_eq!(rc.len(), seq.len());
        assert_eq!(rc.as_bytes(), b"TACGTAAAACCCCGGGGTTTT");
        assert_eq!(reverse_complement(&rc), seq);
    }

    #[test]
    fn sense_sorts_first() {
        assert!(Strand::Sense < Strand::Antisense);
        assert_eq!(Strand::Antisense.symbol(), '-');
        assert_eq!(Strand::Sense.to_string(), "sense");
    }
}
