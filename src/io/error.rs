use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid record at line {line}: {message}")]
    InvalidRecord { line: usize, message: String },

    #[error("invalid hex digit at line {line}: {char:?}")]
    InvalidHexDigit { line: usize, char: char },

    #[error("truncated record at line {line}: expected {expected} hex digits, got {actual}")]
    Truncated {
        line: usize,
        expected: usize,
        actual: usize,
    },
}

impl DecodeError {
    pub fn line(&self) -> usize {
        match self {
            Self::InvalidRecord { line, .. }
            | Self::InvalidHexDigit { line, .. }
            | Self::Truncated { line, .. } => *line,
        }
    }
}
