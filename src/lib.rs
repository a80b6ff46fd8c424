//! # oss-bridge: reconnect-resilient object storage client
//!
//! `oss-bridge` gives an application one stable handle to a single storage
//! bucket. Callers put, get, remove, and presign objects by logical name;
//! the client takes care of connection lifecycle, key prefixing, and a
//! bounded reconnect-and-retry policy around each remote call.
//!
//! ## Key behaviors
//!
//! - **Reconnect as recovery**: a failed operation reopens the backend
//!   session before the next call. Put/get make one attempt per call;
//!   presigned URLs retry up to 10 times.
//! - **Silent degradation**: steady-state operations return `None` on
//!   failure instead of erroring, so a flaky backend never crashes the
//!   calling application. `health()` and `exists()` stay strict so
//!   monitoring sees real outages.
//! - **Key decoration**: an optional namespace prefix and the caller's
//!   bucket hint are joined in front of every object key, identically
//!   across all operations. The hint never picks the destination bucket.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use oss_bridge::prelude::*;
//! use bytes::Bytes;
//!
//! # #[tokio::main]
//! # async fn main() -> OssResult<()> {
//! let config = OssConfig::from_env()?.with_prefix_path("tenant42");
//! let client = OssClient::connect(S3Connector::new(config.clone()), config).await;
//!
//! // Stored under "tenant42/docs/a.txt" in the configured bucket
//! client.put("docs", "a.txt", Bytes::from_static(b"hello")).await;
//!
//! let data = client.get("docs", "a.txt").await;
//! assert_eq!(data.as_deref(), Some(&b"hello"[..]));
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────┐
//! │  Your service  │  ← owns one OssClient in its composition root
//! ├────────────────┤
//! │   OssClient    │  ← key decoration, retry-via-reconnect
//! ├────────────────┤
//! │  Connection    │  ← zero-or-one live handle, open/close
//! ├────────────────┤
//! │ ObjectBackend  │  ← storage primitives (aws-sdk-s3 or a mock)
//! └────────────────┘
//! ```
//!
//! The backend seam is a trait, so tests inject an in-memory backend and
//! the production path uses [`S3Connector`] against any S3-compatible
//! endpoint.

mod backend;
mod client;
mod config;
mod connection;
mod error;
pub mod keys;
mod retry;
mod s3;

pub use backend::{Connector, ObjectBackend, ObjectSummary, PutReceipt};
pub use client::OssClient;
pub use config::OssConfig;
pub use connection::Connection;
pub use error::{OssError, OssResult};
pub use retry::RetryPolicy;
pub use s3::{S3Backend, S3Connector};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Connector, ObjectBackend, OssClient, OssConfig, OssError, OssResult, PutReceipt,
        S3Connector,
    };
}
