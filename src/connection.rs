use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::error;

use crate::{Connector, ObjectBackend, OssError, OssResult};

/// Owns the zero-or-one live backend handle.
///
/// `open`/`close` take the write lock so the handle is replaced wholesale;
/// operations clone the `Arc` out under the read lock and issue their calls
/// without holding it, so a slow transfer never blocks a reconnect.
pub struct Connection {
    connector: Arc<dyn Connector>,
    handle: RwLock<Option<Arc<dyn ObjectBackend>>>,
}

impl Connection {
    /// Create a manager in the ABSENT state
    pub fn new(connector: Arc<dyn Connector>) -> Self {
        Self {
            connector,
            handle: RwLock::new(None),
        }
    }

    /// Establish a fresh handle, discarding any existing one first.
    ///
    /// A connect failure is logged and leaves the manager ABSENT; it is not
    /// an error here. Operations that need the handle observe the absence
    /// through [`Connection::handle`].
    pub async fn open(&self) {
        let mut slot = self.handle.write().await;
        // The old session is abandoned, never pooled or reused.
        slot.take();

        match self.connector.connect().await {
            Ok(handle) => *slot = Some(handle),
            Err(e) => {
                error!(error = %e, "failed to connect to storage backend");
            }
        }
    }

    /// Drop the handle. Idempotent.
    pub async fn close(&self) {
        self.handle.write().await.take();
    }

    /// Clone out the live handle, or `NotConnected` when ABSENT
    pub async fn handle(&self) -> OssResult<Arc<dyn ObjectBackend>> {
        self.handle
            .read()
            .await
            .clone()
            .ok_or(OssError::NotConnected)
    }
}
