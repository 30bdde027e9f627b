use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_ssm::Client;
use aws_sdk_ssm::config::Region;
use aws_sdk_ssm::error::DisplayErrorContext;
use lambda_runtime::tracing::{debug, error};

use super::SecretResolver;
use crate::models::ProxyError;

/// Resolves API keys from AWS SSM Parameter Store.
///
/// The base configuration (credentials, retry and timeout settings) is loaded
/// once at cold start. Every lookup builds its own client pinned to the
/// requested region, so one invocation never changes the region seen by another.
pub struct SsmSecretResolver {
    sdk_config: SdkConfig,
}

impl SsmSecretResolver {
    #[must_use]
    pub const fn new(sdk_config: SdkConfig) -> Self {
        Self { sdk_config }
    }

    fn client_for(&self, region: &str) -> Client {
        let config = aws_sdk_ssm::config::Builder::from(&self.sdk_config)
            .region(Region::new(region.to_owned()))
            .build();
        Client::from_conf(config)
    }
}

#[async_trait]
impl SecretResolver for SsmSecretResolver {
    async fn resolve(&self, name: &str, region: &str) -> Result<String, ProxyError> {
        debug!(parameter = %name, region = %region, "Fetching parameter");

        let output = self
            .client_for(region)
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                error!(parameter = %name, region = %region, error = %message, "GetParameter failed");
                ProxyError::SecretLookup(format!("failed to read parameter '{name}': {message}"))
            })?;

        output.parameter.and_then(|p| p.value).ok_or_else(|| {
            error!(parameter = %name, "Parameter has no value");
            ProxyError::SecretLookup(format!("parameter '{name}' has no value"))
        })
    }
}
