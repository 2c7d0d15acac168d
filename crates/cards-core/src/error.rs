use thiserror::Error;

/// Opaque failure reported by an [`AssetLoader`](crate::AssetLoader).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct AssetError(pub String);

impl AssetError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

#[derive(Debug, Error)]
pub enum CardError {
    #[error("card {index}: failed to load `{path}`: {source}")]
    AssetLoad {
        index: usize,
        path: String,
        #[source]
        source: AssetError,
    },
    #[error("card configuration is not valid JSON: {0}")]
    Config(#[from] serde_json::Error),
    #[error("card {index}: {reason}")]
    InvalidConfig { index: usize, reason: String },
}
