use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use aws_credential_types::Credentials;
use aws_sdk_s3::config::{BehaviorVersion, Region};
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;
use tracing::debug;

use crate::{Connector, ObjectBackend, OssConfig, OssError, OssResult, PutReceipt};

/// Mints [`S3Backend`] handles for S3-compatible endpoints (AWS S3, Aliyun
/// OSS, MinIO, R2). Uses path-style addressing, which every compatible
/// backend accepts.
pub struct S3Connector {
    config: OssConfig,
}

impl S3Connector {
    pub fn new(config: OssConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Connector for S3Connector {
    async fn connect(&self) -> OssResult<Arc<dyn ObjectBackend>> {
        if self.config.endpoint_url.is_empty() {
            return Err(OssError::connect(
                &self.config.endpoint_url,
                "endpoint_url is not configured",
            ));
        }
        if self.config.access_key.is_empty() || self.config.secret_key.is_empty() {
            return Err(OssError::connect(
                &self.config.endpoint_url,
                "credentials are not configured",
            ));
        }

        let credentials = Credentials::new(
            self.config.access_key.clone(),
            self.config.secret_key.clone(),
            None,
            None,
            "oss-bridge",
        );
        let sdk_config = aws_sdk_s3::config::Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(self.config.region.clone()))
            .endpoint_url(&self.config.endpoint_url)
            .credentials_provider(credentials)
            .force_path_style(true)
            .build();

        debug!(
            endpoint = %self.config.endpoint_url,
            region = %self.config.region,
            bucket = %self.config.bucket,
            "opened storage session"
        );

        Ok(Arc::new(S3Backend {
            client: Client::from_conf(sdk_config),
            bucket: self.config.bucket.clone(),
        }))
    }
}

/// One session against a single bucket
pub struct S3Backend {
    client: Client,
    bucket: String,
}

#[async_trait]
impl ObjectBackend for S3Backend {
    async fn put_object(&self, key: &str, data: Bytes) -> OssResult<PutReceipt> {
        let size_bytes = data.len() as u64;
        let output = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(OssError::backend)?;

        Ok(PutReceipt {
            etag: output.e_tag().map(str::to_string),
            size_bytes,
            version_id: output.version_id().map(str::to_string),
        })
    }

    async fn get_object(&self, key: &str) -> OssResult<Bytes> {
        let output = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(OssError::backend)?;

        let data = output.body.collect().await.map_err(OssError::backend)?;
        Ok(data.into_bytes())
    }

    async fn delete_object(&self, key: &str) -> OssResult<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(OssError::backend)?;
        Ok(())
    }

    async fn object_exists(&self, key: &str) -> OssResult<bool> {
        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(e) if e.as_service_error().map(|se| se.is_not_found()) == Some(true) => Ok(false),
            Err(e) => Err(OssError::backend(e)),
        }
    }

    async fn sign_get_url(&self, key: &str, expires_secs: u64) -> OssResult<String> {
        let presigning = PresigningConfig::expires_in(Duration::from_secs(expires_secs))
            .map_err(|e| OssError::invalid(e.to_string()))?;
        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(OssError::backend)?;
        Ok(request.uri().to_string())
    }

    async fn bucket_exists(&self) -> OssResult<bool> {
        match self.client.head_bucket().bucket(&self.bucket).send().await {
            Ok(_) => Ok(true),
            Err(e) if e.as_service_error().map(|se| se.is_not_found()) == Some(true) => Ok(false),
            Err(e) => Err(OssError::backend(e)),
        }
    }

    async fn create_bucket(&self) -> OssResult<()> {
        self.client
            .create_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .map_err(OssError::backend)?;
        Ok(())
    }
}
