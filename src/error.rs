use thiserror::Error;

/// Fatal error type for fimo2bed operations.
///
/// Any of these aborts the run with a non-zero exit code. Per-record
/// problems are [`RecordError`] instead and never abort.
#[derive(Debug, Error)]
pub enum Fimo2BedError {
    /// Missing or invalid run configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// FIMO header line is present but unusable.
    #[error("invalid FIMO header: {0}")]
    Header(String),
    /// Wraps standard I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Recoverable per-record error.
///
/// These are logged on the diagnostic stream and the offending record
/// is skipped; the run continues and still exits 0.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Input line could not be parsed as a FIMO record.
    #[error("malformed record: {0}")]
    Malformed(String),
    /// Computed interval violates `start < end` or underflows 0.
    #[error("invalid interval: {0}")]
    InvalidInterval(String),
}

/// Result alias for fimo2bed operations.
pub type Result<T> = std::result::Result<T, Fimo2BedError>;
