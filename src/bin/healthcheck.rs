//! One-shot liveness probe: connect from `OSS_*` environment variables,
//! write the health sentinel once, exit nonzero on failure.

use oss_bridge::{OssClient, OssConfig, S3Connector};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match OssConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };

    let client = OssClient::connect(S3Connector::new(config.clone()), config).await;
    match client.health().await {
        Ok(receipt) => {
            info!(etag = ?receipt.etag, "storage backend is healthy");
        }
        Err(e) => {
            error!(error = %e, "health check failed");
            std::process::exit(1);
        }
    }
}
