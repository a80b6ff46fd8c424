use serde::Deserialize;

use crate::{OssError, OssResult};

/// Configuration for the storage client.
///
/// Immutable after construction; the owning application sources it from its
/// own configuration layer (file, environment, secrets manager).
#[derive(Debug, Clone, Deserialize)]
pub struct OssConfig {
    /// Access key for the storage backend
    pub access_key: String,

    /// Secret key paired with the access key
    pub secret_key: String,

    /// Network endpoint of the storage service
    pub endpoint_url: String,

    /// Backend region identifier
    pub region: String,

    /// Target bucket; a client instance is bound to exactly one bucket
    pub bucket: String,

    /// Optional key namespace prepended to every stored object
    #[serde(default)]
    pub prefix_path: Option<String>,
}

impl OssConfig {
    /// Create a new config
    pub fn new<S: Into<String>>(
        access_key: S,
        secret_key: S,
        endpoint_url: S,
        region: S,
        bucket: S,
    ) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            endpoint_url: endpoint_url.into(),
            region: region.into(),
            bucket: bucket.into(),
            prefix_path: None,
        }
    }

    /// Set the key namespace prefix
    pub fn with_prefix_path<S: Into<String>>(mut self, prefix: S) -> Self {
        self.prefix_path = Some(prefix.into());
        self
    }

    /// Load configuration from `OSS_*` environment variables.
    ///
    /// `OSS_PREFIX_PATH` is optional; everything else is required.
    pub fn from_env() -> OssResult<Self> {
        fn required(name: &str) -> OssResult<String> {
            std::env::var(name)
                .map_err(|_| OssError::invalid(format!("missing environment variable {}", name)))
        }

        Ok(Self {
            access_key: required("OSS_ACCESS_KEY")?,
            secret_key: required("OSS_SECRET_KEY")?,
            endpoint_url: required("OSS_ENDPOINT_URL")?,
            region: required("OSS_REGION")?,
            bucket: required("OSS_BUCKET")?,
            prefix_path: std::env::var("OSS_PREFIX_PATH").ok(),
        })
    }
}
