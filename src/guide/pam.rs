//! NGG PAM 扫描：逐位滑动窗口（允许重叠），每个偏移独立判断。

/// Spacer length in bases.
pub const SPACER_LEN: usize = 20;
/// PAM length (N-G-G).
pub const PAM_LEN: usize = 3;
/// Reported span: `end - start + 1` on the sense sequence.
pub const WINDOW_LEN: usize = 22;

/// One raw scanner hit, borrowed from the strand it was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PamHit<'a> {
    pub spacer: &'a [u8],
    pub pam: &'a [u8],
    /// 0-based offset of the spacer's first base within the scanned strand.
    pub window_start: usize,
}

/// Lazy left-to-right scan over every offset whose spacer and full PAM fit.
pub struct PamScanner<'a> {
    strand: &'a [u8],
    pos: usize,
}

impl<'a> PamScanner<'a> {
    pub fn new(strand: &'a [u8]) -> Self {
        Self { strand, pos: 0 }
    }
}

#[inline]
fn is_pam(pam: &[u8]) -> bool {
    pam[1] == b'G' && pam[2] == b'G'
}

impl<'a> Iterator for PamScanner<'a> {
    type Item = PamHit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let strand = self.strand;
        while self.pos + SPACER_LEN + PAM_LEN <= strand.len() {
            let i = self.pos;
            self.pos += 1;
            let pam = &strand[i + SPACER_LEN..i + SPACER_LEN + PAM_LEN];
            if is_pam(pam) {
                return Some(PamHit {
                    spacer: &strand[i..i + SPACER_LEN],
                    pam,
                    window_start: i,
                });
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let last = (self.strand.len() + 1).saturating_sub(SPACER_LEN + PAM_LEN);
        (0, Some(last.saturating_sub(self.pos)))
    }
}

pub fn scan(strand: &[u8]) -> PamScanner<'_> {
    PamScanner::new(strand)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spacer(c: u8) -> Vec<u8> {
        vec![c; SPACER_LEN]
    }

    #[test]
    fn finds_pam_at_start() {
        let mut s = spacer(b'A');
        s.extend_from_slice(b"CGG");
        let hits: Vec<_> = scan(&s).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].window_start, 0);
        assert_eq!(hits[0].pam, b"CGG");
        assert_eq!(hits[0].spacer, &s[..SPACER_LEN]);
    }

    #[test]
    fn requires_full_pam() {
        // GG right after the spacer but no room for the third PAM base
        let mut s = spacer(b'A');
        s.extend_from_slice(b"GG");
        assert_eq!(scan(&s).count(), 0);
        // NGG needs positions 21 and 22 to be G, not 20 and 21
        let mut s = spacer(b'A');
        s.extend_from_slice(b"GGA");
        assert_eq!(scan(&s).count(), 0);
    }

    #[test]
    fn overlapping_windows_all_reported() {
        // GGGG after the spacer: PAMs GGG at offsets 0 and 1
        let mut s = spacer(b'T');
        s.extend_from_slice(b"GGGG");
        let starts: Vec<usize> = scan(&s).map(|h| h.window_start).collect();
        assert_eq!(starts, vec![0, 1]);
    }

    #[test]
    fn every_offset_tested_not_partitioned() {
        let s = vec![b'G'; 30];
        let starts: Vec<usize> = scan(&s).map(|h| h.window_start).collect();
        assert_eq!(starts, (0..=7).collect::<Vec<_>>());
        assert_eq!(scan(&s).size_hint(), (0, Some(8)));
    }

    #[test]
    fn short_strand_yields_nothing() {
        assert_eq!(scan(b"").count(), 0);
        assert_eq!(scan(&spacer(b'G')).count(), 0);
    }
}
