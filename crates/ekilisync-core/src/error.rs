use thiserror::Error;

/// Failure reported by a `KeyValueStore` implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store file is corrupt: {0}")]
    Corrupt(String),
}

#[derive(Debug, Error)]
pub enum EkiliError {
    #[error("store access failed for key={key}")]
    Store {
        key: String,
        #[source]
        source: StoreError,
    },

    #[error("stored value under key={key} is not valid JSON for the expected shape")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode value for key={key}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl EkiliError {
    pub(crate) fn store(key: &str, source: StoreError) -> Self {
        Self::Store {
            key: key.to_string(),
            source,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Store { key, .. } | Self::Decode { key, .. } | Self::Encode { key, .. } => key,
        }
    }
}

pub type Result<T> = std::result::Result<T, EkiliError>;
