use super::GuideCandidate;

/// Sense before antisense, then ascending start. Stable for ties.
pub fn rank(candidates: &mut [GuideCandidate]) {
    candidates.sort_by_key(|c| (c.strand, c.start_position));
}
