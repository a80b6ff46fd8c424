use thiserror::Error;

/// Result type for storage client operations
pub type OssResult<T> = Result<T, OssError>;

/// Errors that can occur while talking to the storage backend
#[derive(Error, Debug)]
pub enum OssError {
    #[error("no live connection to the storage backend")]
    NotConnected,

    #[error("failed to connect to {endpoint}: {message}")]
    Connect { endpoint: String, message: String },

    #[error("invalid request: {message}")]
    Invalid { message: String },

    #[error("storage backend error: {source}")]
    Backend {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl OssError {
    /// Create a backend error from any error type
    pub fn backend<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend {
            source: Box::new(error),
        }
    }

    /// Create a connect error
    pub fn connect<S: Into<String>, M: Into<String>>(endpoint: S, message: M) -> Self {
        Self::Connect {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Create an invalid request error
    pub fn invalid<S: Into<String>>(message: S) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}
