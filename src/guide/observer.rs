//! Scan events for callers that want diagnostics. The pipeline itself keeps
//! no global logging state; an observer is passed in explicitly.

use log::{debug, trace};

use super::filter::Rejection;
use super::pam::PamHit;
use super::strand::Strand;
use super::GuideCandidate;

/// Callbacks may be invoked from both strand scans concurrently.
pub trait ScanObserver: Sync {
    fn on_normalized(&self, _len: usize) {}
    fn on_hit(&self, _strand: Strand, _hit: &PamHit<'_>) {}
    fn on_reject(&self, _strand: Strand, _hit: &PamHit<'_>, _why: Rejection) {}
    fn on_accept(&self, _candidate: &GuideCandidate) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}

/// Forwards events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ScanObserver for LogObserver {
    fn on_normalized(&self, len: usize) {
        debug!("normalized sequence: {} bp", len);
    }

    fn on_hit(&self, strand: Strand, hit: &PamHit<'_>) {
        trace!(
            "{} hit at offset {}: {} {}",
            strand,
            hit.window_start,
            String::from_utf8_lossy(hit.spacer),
            String::from_utf8_lossy(hit.pam)
        );
    }

    fn on_reject(&self, strand: Strand, hit: &PamHit<'_>, why: Rejection) {
        debug!(
            "{} offset {} rejected ({}): {}",
            strand,
            hit.window_start,
            why,
            String::from_utf8_lossy(hit.spacer)
        );
    }

    fn on_accept(&self, c: &GuideCandidate) {
        trace!(
            "accepted {} {}..{} {} GC={:.2}",
            c.strand,
            c.start_position,
            c.end_position,
            c.spacer,
            c.gc_content
        );
    }
}
