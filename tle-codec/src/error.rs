use std::io;

/// Element line number, 1 or 2
pub type LineNumber = u8;

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("Malformed input, {0}")]
    MalformedInput(#[from] Malformed),
    #[error("Invalid checksum in line {line}: expected {expected}, computed {computed}")]
    ChecksumMismatch {
        line: LineNumber,
        expected: u8,
        computed: u8,
    },
    #[error("Failed to read TLE input")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Malformed {
    #[error("wrong line count: expected 2 or 3 non-blank lines, found {0}")]
    LineCount(usize),
    #[error("line {line} has {found} fields, expected at least {expected}")]
    MissingTokens {
        line: LineNumber,
        found: usize,
        expected: usize,
    },
    #[error("line {line} has an invalid {field} field")]
    InvalidField {
        line: LineNumber,
        field: &'static str,
    },
    #[error("line {0} does not end with a checksum digit")]
    MissingChecksum(LineNumber),
    #[error("unrecognized catalog entry starting at {0:?}")]
    CatalogEntry(String),
}

impl CodecError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, CodecError::MalformedInput(_))
    }

    /// The element line that failed checksum validation, if any
    pub fn checksum_line(&self) -> Option<LineNumber> {
        match self {
            CodecError::ChecksumMismatch { line, .. } => Some(*line),
            _ => None,
        }
    }
}
