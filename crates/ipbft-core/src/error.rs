use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    // ── Address errors ───────────────────────────────────────────────────────
    #[error("invalid address length: expected {expected} characters, got {got}")]
    InvalidAddressLength { expected: usize, got: usize },

    #[error("address must start with {prefix:?}: {address}")]
    InvalidAddressPrefix { prefix: &'static str, address: String },

    #[error("address body is not base58: {0}")]
    InvalidAddressEncoding(String),

    // ── Key errors ───────────────────────────────────────────────────────────
    #[error("invalid public key length: expected {expected} bytes, got {got}")]
    InvalidPublicKeyLength { expected: usize, got: usize },
}
