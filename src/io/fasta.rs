use std::io::BufRead;

use crate::error::{GuideError, Result};

#[derive(Debug, Clone)]
pub struct FastaRecord {
    pub id: String,
    pub desc: Option<String>,
    /// Upper-cased body with line terminators removed; not yet alphabet-checked.
    pub seq: Vec<u8>,
}

fn split_header(header: &str) -> (String, Option<String>) {
    let mut parts = header.trim().splitn(2, char::is_whitespace);
    let id = parts.next().unwrap_or("").to_string();
    let desc = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    (id, desc)
}

/// Frame a single FASTA record held entirely in memory.
///
/// The first line (after trimming surrounding whitespace) must start with `>`
/// and at least one body line must follow it. Body lines are concatenated
/// verbatim apart from the line terminator and upper-cased.
pub fn parse_single(raw: &str) -> Result<FastaRecord> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(GuideError::Format("empty input".to_string()));
    }

    let mut lines = text.lines();
    let header = match lines.next() {
        Some(h) if h.starts_with('>') => h,
        _ => return Err(GuideError::Format("missing header".to_string())),
    };
    let (id, desc) = split_header(&header[1..]);

    let mut seq: Vec<u8> = Vec::with_capacity(text.len());
    let mut n_body = 0usize;
    for line in lines {
        n_body += 1;
        seq.extend(line.trim_end_matches('\r').bytes().map(|b| b.to_ascii_uppercase()));
    }
    if n_body == 0 {
        return Err(GuideError::Format("no sequence provided".to_string()));
    }

    Ok(FastaRecord { id, desc, seq })
}

/// Streaming multi-record reader.
pub struct FastaReader<R: BufRead> {
    reader: R,
    buf: String,
    done: bool,
    peek_header: Option<String>,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            done: false,
            peek_header: None,
        }
    }

    pub fn next_record(&mut self) -> Result<Option<FastaRecord>> {
        if self.done {
            return Ok(None);
        }

        // Find header line; only blank lines may precede it
        let header = if let Some(h) = self.peek_header.take() {
            h
        } else {
            loop {
                self.buf.clear();
                let n = self.reader.read_line(&mut self.buf)?;
                if n == 0 {
                    self.done = true;
                    return Ok(None);
                }
                if self.buf.starts_with('>') {
                    break self.buf[1..].trim().to_string();
                }
                if !self.buf.trim().is_empty() {
                    return Err(GuideError::Format("missing header".to_string()));
                }
            }
        };
        let (id, desc) = split_header(&header);

        let mut seq: Vec<u8> = Vec::new();
        let mut n_body = 0usize;
        loop {
            self.buf.clear();
            let n = self.reader.read_line(&mut self.buf)?;
            if n == 0 {
                self.done = true;
                break;
            }
            if self.buf.starts_with('>') {
                self.peek_header = Some(self.buf[1..].trim().to_string());
                break;
            }
            let line = self.buf.trim_end_matches(['\n', '\r']);
            if line.is_empty() {
                continue;
            }
            n_body += 1;
            seq.extend(line.bytes().map(|b| b.to_ascii_uppercase()));
        }

        if n_body == 0 {
            return Err(GuideError::Format(format!("no sequence provided for '{}'", id)));
        }

        Ok(Some(FastaRecord { id, desc, seq }))
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<FastaRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_record() {
            Ok(Some(rec)) => Some(Ok(rec)),
            Ok(None) => None,
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
