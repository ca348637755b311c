use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::guide::GuideCandidate;

/// Guides found in one input record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordGuides {
    pub id: String,
    pub length: usize,
    pub guides: Vec<GuideCandidate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMeta {
    pub tool: String,
    pub version: String,
    pub input: Option<String>,
    pub command_line: Option<String>,
    /// RFC 3339
    pub timestamp: String,
}

impl ReportMeta {
    pub fn now(input: Option<String>, command_line: Option<String>) -> Self {
        Self {
            tool: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            input,
            command_line,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub meta: ReportMeta,
    pub records: Vec<RecordGuides>,
}

pub fn write_tsv<W: Write>(out: &mut W, records: &[RecordGuides]) -> std::io::Result<()> {
    writeln!(out, "#id\tstrand\tstart\tend\tspacer\tpam\tgc_content")?;
    for rec in records {
        for g in &rec.guides {
            writeln!(
                out,
                "{}\t{}\t{}\t{}\t{}\t{}\t{:.2}",
                rec.id, g.strand, g.start_position, g.end_position, g.spacer, g.pam, g.gc_content
            )?;
        }
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, report: &ScanReport) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
