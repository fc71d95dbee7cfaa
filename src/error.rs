use thiserror::Error;

/// Everything that can go wrong while deriving material or encrypting.
/// Generation is deterministic, so none of these are transient; any failure
/// aborts the current run instead of emitting a partial vector.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VectorError {
    #[error("invalid argument for {field}: {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    #[error("key must be 32 bytes (256 bits) for AES-256, got {len}")]
    InvalidKeyLength { len: usize },

    #[error("IV must be 16 bytes (128 bits) for AES CTR mode, got {len}")]
    InvalidIvLength { len: usize },

    #[error("plaintext block {index} must be 16 bytes, got {len}")]
    InvalidBlockLength { index: usize, len: usize },

    #[error("seed space exhausted after seed {seed}")]
    ArithmeticOverflow { seed: u64 },
}
