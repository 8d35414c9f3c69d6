// ABOUTME: Client configuration: endpoint, credentials, call settings, static metadata
// ABOUTME: Injected into TablesClient::connect by library callers and the admin CLI

use std::time::Duration;

use tables_grpc::{metadata_from_pairs, CallSettings, ChannelConfig, RetryPolicy};
use tonic::metadata::MetadataMap;

use crate::error::ClientError;

/// Everything needed to build a [`crate::TablesClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub channel: ChannelConfig,
    pub settings: CallSettings,
    /// Bearer token sent as `authorization` on every call.
    pub token: Option<String>,
    /// Extra metadata attached to every call.
    pub metadata: Vec<(String, String)>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            channel: ChannelConfig::default_endpoint()
                .with_user_agent(format!("tables-client/{}", crate::VERSION)),
            settings: CallSettings::default(),
            token: None,
            metadata: Vec::new(),
        }
    }
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            channel: ChannelConfig::new(endpoint)
                .with_user_agent(format!("tables-client/{}", crate::VERSION)),
            ..Self::default()
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.settings = self.settings.with_timeout(timeout);
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.settings = self.settings.with_retry(retry);
        self
    }

    pub fn with_settings(mut self, settings: CallSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push((key.into(), value.into()));
        self
    }

    /// Connect only when the first RPC is sent.
    pub fn lazy(mut self) -> Self {
        self.channel = self.channel.lazy();
        self
    }

    pub(crate) fn metadata_map(&self) -> Result<MetadataMap, ClientError> {
        let pairs: Vec<(&str, &str)> = self
            .metadata
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        Ok(metadata_from_pairs(&pairs)?)
    }
}
