use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The underlying codec cannot represent the (already-normalized) value.
    #[error("{message}")]
    Encode {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Malformed input text, empty input, or nesting deeper than the
    /// configured maximum.
    #[error("{message}")]
    Decode {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn encode(source: serde_json::Error) -> Self {
        Error::Encode {
            message: source.to_string(),
            source: Some(source),
        }
    }

    pub(crate) fn decode(source: serde_json::Error) -> Self {
        Error::Decode {
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// The codec's classification of the failure, when the codec produced it.
    pub fn classify(&self) -> Option<serde_json::error::Category> {
        match self {
            Error::Encode { source, .. } | Error::Decode { source, .. } => {
                source.as_ref().map(serde_json::Error::classify)
            }
            Error::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
