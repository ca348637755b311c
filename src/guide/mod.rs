//! 向导 RNA 位点扫描流水线：
//! 规范化 → 正义链 / 反义链 PAM 扫描 → 组成过滤 → 坐标映射 → 排序。

pub mod coords;
pub mod filter;
pub mod normalize;
pub mod observer;
pub mod pam;
pub mod rank;
pub mod strand;

use serde::{Deserialize, Serialize};

use crate::error::{GuideError, Result};

pub use filter::{CandidateFilter, Rejection, Verdict};
pub use normalize::{normalize, DnaSequence};
pub use observer::{LogObserver, NoopObserver, ScanObserver};
pub use pam::{PamHit, PamScanner, PAM_LEN, SPACER_LEN, WINDOW_LEN};
pub use strand::{reverse_complement, Strand};

/// 一个通过过滤的候选位点。坐标为正义链上的 1-based 闭区间。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideCandidate {
    pub spacer: String,
    pub pam: String,
    pub start_position: usize,
    pub end_position: usize,
    pub strand: Strand,
    /// Percentage of G+C in the spacer, two decimals.
    pub gc_content: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanOpt {
    pub min_gc: f64,
    pub max_gc: f64,
    /// Scan both strands concurrently on the rayon pool
    pub parallel: bool,
}

impl Default for ScanOpt {
    fn default() -> Self {
        let f = CandidateFilter::default();
        Self { min_gc: f.min_gc, max_gc: f.max_gc, parallel: false }
    }
}

impl ScanOpt {
    pub fn validate(&self) -> Result<()> {
        for (name, v) in [("min_gc", self.min_gc), ("max_gc", self.max_gc)] {
            if !(0.0..=100.0).contains(&v) {
                return Err(GuideError::InvalidParameter {
                    parameter: name.to_string(),
                    reason: format!("{} is not a percentage in [0, 100]", v),
                });
            }
        }
        if self.min_gc > self.max_gc {
            return Err(GuideError::InvalidParameter {
                parameter: "min_gc".to_string(),
                reason: format!("{} is greater than max_gc {}", self.min_gc, self.max_gc),
            });
        }
        Ok(())
    }

    pub fn filter(&self) -> CandidateFilter {
        CandidateFilter::new(self.min_gc, self.max_gc)
    }
}

/// Raw FASTA text to ranked candidates with default options.
pub fn find_guides(raw: &str) -> Result<Vec<GuideCandidate>> {
    find_guides_with(raw, &ScanOpt::default(), &NoopObserver)
}

pub fn find_guides_with(
    raw: &str,
    opt: &ScanOpt,
    observer: &dyn ScanObserver,
) -> Result<Vec<GuideCandidate>> {
    opt.validate()?;
    let seq = normalize(raw)?;
    observer.on_normalized(seq.len());
    Ok(scan_sequence(&seq, opt, observer))
}

/// Scan an already normalized sequence. Never fails; an empty result is valid.
pub fn scan_sequence(
    seq: &DnaSequence,
    opt: &ScanOpt,
    observer: &dyn ScanObserver,
) -> Vec<GuideCandidate> {
    let filter = opt.filter();
    let antisense = reverse_complement(seq);
    let seq_len = seq.len();

    let (mut out, anti) = if opt.parallel {
        rayon::join(
            || scan_strand(seq.as_bytes(), Strand::Sense, seq_len, &filter, observer),
            || scan_strand(antisense.as_bytes(), Strand::Antisense, seq_len, &filter, observer),
        )
    } else {
        (
            scan_strand(seq.as_bytes(), Strand::Sense, seq_len, &filter, observer),
            scan_strand(antisense.as_bytes(), Strand::Antisense, seq_len, &filter, observer),
        )
    };
    out.extend(anti);
    rank::rank(&mut out);
    out
}

fn scan_strand(
    bases: &[u8],
    strand: Strand,
    seq_len: usize,
    filter: &CandidateFilter,
    observer: &dyn ScanObserver,
) -> Vec<GuideCandidate> {
    let mut out = Vec::new();
    for hit in pam::scan(bases) {
        observer.on_hit(strand, &hit);
        let gc_content = match filter.check(hit.spacer) {
            Verdict::Accept { gc_content } => gc_content,
            Verdict::Reject(why) => {
                observer.on_reject(strand, &hit, why);
                continue;
            }
        };
        let (start_position, end_position) = coords::to_sense_coords(strand, hit.window_start, seq_len);
        let cand = GuideCandidate {
            spacer: String::from_utf8_lossy(hit.spacer).into_owned(),
            pam: String::from_utf8_lossy(hit.pam).into_owned(),
            start_position,
            end_position,
            strand,
            gc_content,
        };
        observer.on_accept(&cand);
        out.push(cand);
    }
    out
}
