//! Physical key construction.
//!
//! Every real object operation routes its caller-supplied key through
//! [`decorated_key`] so the same (prefix, bucket hint, key) triple always
//! lands on the same physical key. The health probe uses [`health_key`],
//! which takes the prefix but never the bucket hint.

/// Key the liveness probe writes to
pub const HEALTH_KEY: &str = "health";

/// Build the physical key for an object operation.
///
/// The bucket hint is joined in front of the key when non-empty, then the
/// configured prefix in front of that. The hint never selects the
/// destination bucket; it only shapes the key.
pub fn decorated_key(prefix: Option<&str>, bucket_hint: &str, key: &str) -> String {
    let hinted = if bucket_hint.is_empty() {
        key.to_string()
    } else {
        format!("{}/{}", bucket_hint, key)
    };
    prefixed(prefix, &hinted)
}

/// Build the physical key for the health probe
pub fn health_key(prefix: Option<&str>) -> String {
    prefixed(prefix, HEALTH_KEY)
}

fn prefixed(prefix: Option<&str>, key: &str) -> String {
    match prefix {
        Some(p) if !p.is_empty() => format!("{}/{}", p, key),
        _ => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_prefix_and_bucket_hint_in_order() {
        assert_eq!(
            decorated_key(Some("tenant42"), "docs", "a.txt"),
            "tenant42/docs/a.txt"
        );
    }

    #[test]
    fn omits_empty_segments() {
        assert_eq!(decorated_key(None, "docs", "a.txt"), "docs/a.txt");
        assert_eq!(decorated_key(Some("tenant42"), "", "a.txt"), "tenant42/a.txt");
        assert_eq!(decorated_key(None, "", "a.txt"), "a.txt");
        assert_eq!(decorated_key(Some(""), "", "a.txt"), "a.txt");
    }

    #[test]
    fn health_key_ignores_bucket_hint_rule() {
        assert_eq!(health_key(Some("tenant42")), "tenant42/health");
        assert_eq!(health_key(None), "health");
    }
}
