use async_trait::async_trait;

use crate::models::ProxyError;

pub mod ssm;

pub use ssm::SsmSecretResolver;

/// Region used when the event does not name one
pub const DEFAULT_REGION: &str = "eu-west-2";

/// Trait for secret lookups, the seam used to swap Parameter Store out in tests.
#[async_trait]
pub trait SecretResolver: Send + Sync {
    /// Fetch the decrypted value stored under `name` in `region`.
    ///
    /// # Errors
    ///
    /// Returns `ProxyError::SecretLookup` if the value cannot be read.
    async fn resolve(&self, name: &str, region: &str) -> Result<String, ProxyError>;
}

/// Picks the lookup region, falling back to [`DEFAULT_REGION`] when none is given.
#[must_use]
pub fn resolve_region(region: Option<&str>) -> &str {
    region.filter(|r| !r.is_empty()).unwrap_or(DEFAULT_REGION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_region() {
        assert_eq!(resolve_region(Some("us-east-1")), "us-east-1");
        assert_eq!(resolve_region(Some("")), DEFAULT_REGION);
        assert_eq!(resolve_region(None), "eu-west-2");
    }
}
