use std::path::PathBuf;

use thiserror::Error;

/// Location of a field inside the genesis document, used in error messages.
pub const PATH_REWARD_SCHEME: &str = "Genesis/reward_scheme";
pub const PATH_EPOCH: &str = "Genesis/epoch";
pub const PATH_VALIDATORS: &str = "Genesis/epoch/validators";
pub const PATH_GENESIS: &str = "Genesis";

#[derive(Debug, Error)]
pub enum GenesisError {
    /// Malformed JSON syntax, wrong JSON type, or an invalid hex quantity.
    #[error("invalid genesis JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("missing required field '{field}' for {path}")]
    MissingField {
        field: &'static str,
        path: &'static str,
    },

    #[error("wrong format of required field '{field}' for {path}: {reason}")]
    Format {
        field: &'static str,
        path: &'static str,
        reason: String,
    },

    #[error("genesis file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown built-in genesis: {0}")]
    UnknownFixture(String),
}

impl GenesisError {
    pub(crate) fn missing(field: &'static str, path: &'static str) -> Self {
        Self::MissingField { field, path }
    }

    pub(crate) fn format(field: &'static str, path: &'static str, reason: impl ToString) -> Self {
        Self::Format {
            field,
            path,
            reason: reason.to_string(),
        }
    }
}

pub type GenesisResult<T> = Result<T, GenesisError>;
