use std::collections::BTreeMap;
use std::sync::Arc;
use bytes::Bytes;
use tracing::{debug, error};

use crate::{
    keys, Connection, Connector, ObjectSummary, OssConfig, OssResult, PutReceipt, RetryPolicy,
};

/// Sentinel payload the liveness probe writes
const HEALTH_PAYLOAD: &[u8] = b"_t@@@1";

/// Client for a single bucket on an object storage backend.
///
/// Holds one lazily-(re)established backend handle, decorates logical keys
/// with the configured prefix, and recovers from operation failures by
/// reconnecting. Construct one per process in your composition root and
/// share it (`Arc<OssClient>`); the crate itself enforces no singleton.
pub struct OssClient {
    config: OssConfig,
    connection: Connection,
}

impl OssClient {
    /// Connect to the backend and run bucket bootstrap.
    ///
    /// Never fails: a connect error leaves the client without a handle (the
    /// failure is logged and later operations report it), and bucket
    /// bootstrap swallows its own errors. This mirrors a control-plane
    /// client that must come up even when storage is briefly down.
    pub async fn connect<C: Connector + 'static>(connector: C, config: OssConfig) -> Self {
        let client = Self {
            config,
            connection: Connection::new(Arc::new(connector)),
        };
        client.connection.open().await;
        client.ensure_bucket().await;
        client
    }

    /// The physical key an object operation will use for this (hint, key) pair
    pub fn effective_key(&self, bucket_hint: &str, key: &str) -> String {
        keys::decorated_key(self.config.prefix_path.as_deref(), bucket_hint, key)
    }

    /// Make sure the configured bucket exists, creating it if needed.
    ///
    /// No-op without a live handle. Every failure is logged and discarded;
    /// bootstrap must never take the client down.
    pub async fn ensure_bucket(&self) {
        let Ok(handle) = self.connection.handle().await else {
            return;
        };
        match handle.bucket_exists().await {
            Ok(true) => {}
            Ok(false) => {
                if let Err(e) = handle.create_bucket().await {
                    error!(bucket = %self.config.bucket, error = %e, "failed to create bucket");
                } else {
                    debug!(bucket = %self.config.bucket, "created bucket");
                }
            }
            Err(e) => {
                error!(bucket = %self.config.bucket, error = %e, "failed to check bucket");
            }
        }
    }

    /// Strict bucket existence check.
    ///
    /// A missing bucket is `Ok(false)`; any other backend failure (or an
    /// absent handle) propagates so monitoring can tell an outage from a
    /// missing bucket.
    pub async fn bucket_exists(&self) -> OssResult<bool> {
        self.connection.handle().await?.bucket_exists().await
    }

    /// Liveness probe: write a fixed sentinel to the prefix-scoped health key.
    ///
    /// No retry, no suppression; errors propagate so a monitor sees real
    /// outages. The health key takes the prefix but never a bucket hint.
    pub async fn health(&self) -> OssResult<PutReceipt> {
        let key = keys::health_key(self.config.prefix_path.as_deref());
        self.connection
            .handle()
            .await?
            .put_object(&key, Bytes::from_static(HEALTH_PAYLOAD))
            .await
    }

    /// Store an object.
    ///
    /// One attempt; on failure the connection is reopened for the next call
    /// and this call returns `None`. A `None` always means "failed", never
    /// an empty success.
    pub async fn put(&self, bucket_hint: &str, key: &str, data: Bytes) -> Option<PutReceipt> {
        let physical = self.effective_key(bucket_hint, key);
        debug!(bucket = %self.config.bucket, key = %physical, "put object");

        let policy = RetryPolicy::single_attempt();
        for _ in 0..policy.attempts {
            match self.put_once(&physical, data.clone()).await {
                Ok(receipt) => return Some(receipt),
                Err(e) => {
                    error!(bucket = %self.config.bucket, key = %physical, error = %e, "put failed");
                    self.connection.open().await;
                    tokio::time::sleep(policy.delay).await;
                }
            }
        }
        None
    }

    /// Read an object's full payload. Same failure shape as [`OssClient::put`].
    pub async fn get(&self, bucket_hint: &str, key: &str) -> Option<Bytes> {
        let physical = self.effective_key(bucket_hint, key);

        let policy = RetryPolicy::single_attempt();
        for _ in 0..policy.attempts {
            match self.get_once(&physical).await {
                Ok(data) => return Some(data),
                Err(e) => {
                    error!(bucket = %self.config.bucket, key = %physical, error = %e, "get failed");
                    self.connection.open().await;
                    tokio::time::sleep(policy.delay).await;
                }
            }
        }
        None
    }

    /// Delete an object. Failures are logged and swallowed; no reconnect.
    pub async fn remove(&self, bucket_hint: &str, key: &str) {
        let physical = self.effective_key(bucket_hint, key);
        if let Err(e) = self.delete_once(&physical).await {
            error!(bucket = %self.config.bucket, key = %physical, error = %e, "remove failed");
        }
    }

    /// Check whether an object exists. Backend errors propagate.
    pub async fn exists(&self, bucket_hint: &str, key: &str) -> OssResult<bool> {
        let physical = self.effective_key(bucket_hint, key);
        self.connection
            .handle()
            .await?
            .object_exists(&physical)
            .await
    }

    /// Generate a presigned GET URL.
    ///
    /// Up to 10 attempts, reconnecting and pausing 1s after each failure;
    /// `None` once the budget is spent.
    pub async fn presigned_url(
        &self,
        bucket_hint: &str,
        key: &str,
        expires_secs: u64,
    ) -> Option<String> {
        let physical = self.effective_key(bucket_hint, key);

        let policy = RetryPolicy::presign();
        for _ in 0..policy.attempts {
            match self.sign_once(&physical, expires_secs).await {
                Ok(url) => return Some(url),
                Err(e) => {
                    error!(bucket = %self.config.bucket, key = %physical, error = %e, "presign failed");
                    self.connection.open().await;
                    tokio::time::sleep(policy.delay).await;
                }
            }
        }
        None
    }

    /// Listing is not implemented against the backend; always empty.
    pub async fn list(&self, _bucket_hint: &str, _dir: &str, _recursive: bool) -> Vec<ObjectSummary> {
        Vec::new()
    }

    /// Object properties are not implemented against the backend; always empty.
    pub async fn properties(&self, _bucket_hint: &str, _key: &str) -> BTreeMap<String, String> {
        BTreeMap::new()
    }

    /// Drop the backend handle. Idempotent; the next failing operation (or
    /// an explicit [`Connection::open`] via reconnect) re-establishes it.
    pub async fn close(&self) {
        self.connection.close().await;
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &OssConfig {
        &self.config
    }

    async fn put_once(&self, key: &str, data: Bytes) -> OssResult<PutReceipt> {
        self.connection.handle().await?.put_object(key, data).await
    }

    async fn get_once(&self, key: &str) -> OssResult<Bytes> {
        self.connection.handle().await?.get_object(key).await
    }

    async fn delete_once(&self, key: &str) -> OssResult<()> {
        self.connection.handle().await?.delete_object(key).await
    }

    async fn sign_once(&self, key: &str, expires_secs: u64) -> OssResult<String> {
        self.connection
            .handle()
            .await?
            .sign_get_url(key, expires_secs)
            .await
    }
}
