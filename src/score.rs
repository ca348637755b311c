//! Boundary for third-party on/off-target scoring.
//!
//! Scoring is done by an external tool; this module only fixes the contract:
//! one 20-nt spacer plus a species in, two scores in [0, 1] or an opaque error
//! string out. Failures are kept per candidate and never retried here.

use serde::{Deserialize, Serialize};

use crate::guide::GuideCandidate;

/// Species offered by the external design tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    HomoSapiens,
    MusMusculus,
    RattusNorvegicus,
    DanioRerio,
    DrosophilaMelanogaster,
    CaenorhabditisElegans,
}

impl Species {
    pub const ALL: [Species; 6] = [
        Species::HomoSapiens,
        Species::MusMusculus,
        Species::RattusNorvegicus,
        Species::DanioRerio,
        Species::DrosophilaMelanogaster,
        Species::CaenorhabditisElegans,
    ];

    /// Label as shown by the tool's species selector.
    pub fn label(self) -> &'static str {
        match self {
            Species::HomoSapiens => "Homo sapiens",
            Species::MusMusculus => "Mus musculus",
            Species::RattusNorvegicus => "Rattus norvegicus",
            Species::DanioRerio => "Danio rerio",
            Species::DrosophilaMelanogaster => "Drosophila melanogaster",
            Species::CaenorhabditisElegans => "Caenorhabditis elegans",
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OnOffScores {
    pub on_target: f64,
    pub off_target: f64,
}

impl OnOffScores {
    fn in_unit_range(&self) -> bool {
        (0.0..=1.0).contains(&self.on_target) && (0.0..=1.0).contains(&self.off_target)
    }
}

pub trait GuideScorer {
    fn score(&self, spacer: &str, species: Species) -> Result<OnOffScores, String>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredGuide<'a> {
    pub candidate: &'a GuideCandidate,
    pub scores: Result<OnOffScores, String>,
}

/// Score each candidate once, in order.
pub fn score_guides<'a, S: GuideScorer + ?Sized>(
    scorer: &S,
    candidates: &'a [GuideCandidate],
    species: Species,
) -> Vec<ScoredGuide<'a>> {
    candidates
        .iter()
        .map(|c| {
            let scores = scorer.score(&c.spacer, species).and_then(|s| {
                if s.in_unit_range() {
                    Ok(s)
                } else {
                    Err(format!(
                        "scores out of range: on-target {}, off-target {}",
                        s.on_target, s.off_target
                    ))
                }
            });
            ScoredGuide { candidate: c, scores }
        })
        .collect()
}
