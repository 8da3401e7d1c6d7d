use thiserror::Error;

/// Failures while turning raw text lines into a pixel grid.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input ends before the dimension header line.
    #[error("input ends before the dimension header (line 2)")]
    MissingHeader,
    /// Line 2 is not two space-separated non-negative integers.
    #[error("malformed dimension header {0:?}: expected \"<width> <height>\"")]
    MalformedHeader(String),
    /// A data line is not an integer representable as an 8-bit channel.
    #[error("line {line}: {value:?} is not an integer in 0..=255")]
    InvalidValue { line: usize, value: String },
    /// The value stream ran out before `width * height * 3` values.
    #[error("pixel stream exhausted: expected {expected} channel values, got {got}")]
    InsufficientData { expected: usize, got: usize },
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
