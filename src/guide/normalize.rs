use crate::error::{GuideError, Result};
use crate::io::fasta;
use crate::util::dna;

use super::pam::SPACER_LEN;

/// 规范化后的 DNA 序列：仅含大写 ACGT，长度不少于一个 spacer。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnaSequence {
    bases: Vec<u8>,
}

impl DnaSequence {
    /// Validate an already framed, upper-cased body.
    pub fn from_bases(bases: Vec<u8>) -> Result<Self> {
        if let Some(i) = bases.iter().position(|&b| !dna::is_base(b)) {
            return Err(GuideError::Alphabet {
                ch: bases[i] as char,
                pos: i + 1,
            });
        }
        if bases.len() < SPACER_LEN {
            return Err(GuideError::Length {
                len: bases.len(),
                min: SPACER_LEN,
            });
        }
        Ok(Self { bases })
    }

    pub(crate) fn from_validated(bases: Vec<u8>) -> Self {
        debug_assert!(bases.iter().all(|&b| dna::is_base(b)));
        Self { bases }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bases
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

impl std::fmt::Display for DnaSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // bases are ASCII by construction
        f.write_str(&String::from_utf8_lossy(&self.bases))
    }
}

/// Raw FASTA text to canonical sequence. Pure; no partial result on failure.
pub fn normalize(raw: &str) -> Result<DnaSequence> {
    let record = fasta::parse_single(raw)?;
    DnaSequence::from_bases(record.seq)
}
