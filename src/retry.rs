use std::time::Duration;

/// Per-operation recovery policy.
///
/// Recovery is always reconnect-then-wait; there is no backoff. An attempt
/// count of 1 means "try once, and on failure recover the connection for the
/// next call while still reporting this call as failed" — the behavior the
/// lenient object operations deliberately preserve.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub attempts: u32,

    /// Fixed pause after each failed attempt
    pub delay: Duration,
}

impl RetryPolicy {
    /// One attempt, 1s post-failure pause (put/get)
    pub const fn single_attempt() -> Self {
        Self {
            attempts: 1,
            delay: Duration::from_secs(1),
        }
    }

    /// Ten attempts, 1s between them (presigned URLs)
    pub const fn presign() -> Self {
        Self {
            attempts: 10,
            delay: Duration::from_secs(1),
        }
    }
}
