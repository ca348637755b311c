use crate::util::dna;

/// 淘汰原因。淘汰是常规行为，不是错误。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rejection {
    /// All bases identical
    Homopolymer,
    /// Strict AT/TA/GC/CG alternation over the whole spacer
    DinucleotideRepeat,
    /// GC percentage outside the accepted band
    GcOutOfRange(f64),
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::Homopolymer => f.write_str("homopolymer"),
            Rejection::DinucleotideRepeat => f.write_str("dinucleotide repeat"),
            Rejection::GcOutOfRange(gc) => write!(f, "GC {:.2}% out of range", gc),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    Accept { gc_content: f64 },
    Reject(Rejection),
}

const ALTERNATING_PAIRS: [(u8, u8); 4] = [(b'A', b'T'), (b'T', b'A'), (b'G', b'C'), (b'C', b'G')];

pub fn is_homopolymer(spacer: &[u8]) -> bool {
    match spacer.first() {
        Some(&b0) => spacer.iter().all(|&b| b == b0),
        None => false,
    }
}

/// Only the four AT/GC pairings count; other periodic repeats pass.
pub fn is_dinucleotide_repeat(spacer: &[u8]) -> bool {
    if spacer.len() < 2 {
        return false;
    }
    ALTERNATING_PAIRS.iter().any(|&(x, y)| {
        spacer
            .iter()
            .enumerate()
            .all(|(i, &b)| b == if i % 2 == 0 { x } else { y })
    })
}

/// Composition filter with an inclusive GC band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateFilter {
    pub min_gc: f64,
    pub max_gc: f64,
}

impl Default for CandidateFilter {
    fn default() -> Self {
        Self { min_gc: 40.0, max_gc: 60.0 }
    }
}

impl CandidateFilter {
    pub fn new(min_gc: f64, max_gc: f64) -> Self {
        Self { min_gc, max_gc }
    }

    pub fn check(&self, spacer: &[u8]) -> Verdict {
        if is_homopolymer(spacer) {
            return Verdict::Reject(Rejection::Homopolymer);
        }
        if is_dinucleotide_repeat(spacer) {
            return Verdict::Reject(Rejection::DinucleotideRepeat);
        }
        let gc = dna::gc_percent(spacer);
        if gc < self.min_gc || gc > self.max_gc {
            return Verdict::Reject(Rejection::GcOutOfRange(gc));
        }
        Verdict::Accept { gc_content: gc }
    }
}
