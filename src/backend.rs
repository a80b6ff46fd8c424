use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;

use crate::OssResult;

/// A live session against one (credentials, endpoint, bucket, region) tuple.
///
/// This is the seam between the client and the storage collaborator: the
/// client owns at most one handle at a time and replaces it wholesale on
/// reconnect. Implementations must be safe to call from multiple tasks.
#[async_trait]
pub trait ObjectBackend: Send + Sync {
    /// Write an object under the given physical key
    async fn put_object(&self, key: &str, data: Bytes) -> OssResult<PutReceipt>;

    /// Read the full payload of an object
    async fn get_object(&self, key: &str) -> OssResult<Bytes>;

    /// Delete an object; deleting a missing object is not an error
    async fn delete_object(&self, key: &str) -> OssResult<()>;

    /// Check whether an object exists
    async fn object_exists(&self, key: &str) -> OssResult<bool>;

    /// Generate a time-limited signed GET URL for an object
    async fn sign_get_url(&self, key: &str, expires_secs: u64) -> OssResult<String>;

    /// Check whether the bound bucket exists.
    ///
    /// A "no such bucket" condition from the backend maps to `Ok(false)`;
    /// every other failure surfaces as an error.
    async fn bucket_exists(&self) -> OssResult<bool>;

    /// Create the bound bucket
    async fn create_bucket(&self) -> OssResult<()>;
}

/// Mints fresh backend handles.
///
/// The connection manager reopens through this on every reconnect, so a
/// connector must be reusable: each call returns an independent session.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self) -> OssResult<Arc<dyn ObjectBackend>>;
}

/// Result of a successful write
#[derive(Debug, Clone)]
pub struct PutReceipt {
    pub etag: Option<String>,
    pub size_bytes: u64,
    pub version_id: Option<String>,
}

/// Minimal listing record returned by [`crate::OssClient::list`]
#[derive(Debug, Clone)]
pub struct ObjectSummary {
    pub key: String,
    pub size_bytes: Option<u64>,
    pub etag: Option<String>,
}
