/// Errors that can occur while reading a model file.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("invalid magic bytes (expected UKYO)")]
    InvalidMagic,

    #[error("unsupported model format version {0}")]
    UnsupportedVersion(u16),

    #[error("file too small ({0} bytes, minimum {1})")]
    FileTooSmall(usize, usize),

    #[error("LZ4 decompression failed: {0}")]
    DecompressError(String),

    #[error("invalid record block: expected {expected} bytes, got {actual}")]
    InvalidRecordBlock { expected: usize, actual: usize },

    #[error("invalid pulse tag {0} in record {1}")]
    InvalidPulseTag(u32, usize),

    #[error("pulse counts in header do not match records (red {red_header}/{red_actual}, green {green_header}/{green_actual})")]
    PulseCountMismatch {
        red_header: u32,
        red_actual: u32,
        green_header: u32,
        green_actual: u32,
    },
}
