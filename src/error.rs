//! 错误类型。
//!
//! 规范化阶段的三类错误（格式 / 字母表 / 长度）是流水线的终止性错误；
//! 过滤阶段的淘汰不是错误。

use thiserror::Error;

/// Result type alias for guide scanning operations
pub type Result<T> = std::result::Result<T, GuideError>;

#[derive(Error, Debug)]
pub enum GuideError {
    /// Malformed FASTA framing (missing header, no body)
    #[error("FormatError: {0}")]
    Format(String),

    /// A character outside {A,C,G,T} in the concatenated sequence body
    #[error("AlphabetError: invalid character '{ch}' at position {pos} (only A, C, G, T are allowed)")]
    Alphabet {
        /// The offending character
        ch: char,
        /// 1-based position in the concatenated body
        pos: usize,
    },

    /// Sequence shorter than one spacer
    #[error("LengthError: sequence has {len} bases, at least {min} required")]
    Length { len: usize, min: usize },

    /// Invalid scan option
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter { parameter: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GuideError {
    /// Tag name used in machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            GuideError::Format(_) => "FormatError",
            GuideError::Alphabet { .. } => "AlphabetError",
            GuideError::Length { .. } => "LengthError",
            GuideError::InvalidParameter { .. } => "InvalidParameter",
            GuideError::Io(_) => "IoError",
        }
    }
}
