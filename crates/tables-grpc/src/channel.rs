// ABOUTME: Channel construction for the Tables service endpoint.
// ABOUTME: Turns a ChannelConfig into a tonic Endpoint with TLS, keep-alive, and user agent applied.

use std::time::Duration;
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};
use tracing::debug;

use crate::error::GrpcClientError;

/// HTTP/2 keep-alive pings on an otherwise idle connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeepAliveConfig {
    pub interval: Duration,
    /// How long to wait for a ping ack before the connection is dropped.
    pub timeout: Duration,
    pub while_idle: bool,
}

impl Default for KeepAliveConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(10),
            timeout: Duration::from_secs(20),
            while_idle: true,
        }
    }
}

/// Where and how to open the channel to the service.
#[derive(Debug, Clone)]
pub struct ChannelConfig {
    /// Endpoint URI including scheme, e.g. `https://area120tables.googleapis.com:443`.
    pub address: String,
    pub keep_alive: Option<KeepAliveConfig>,
    pub connect_timeout: Option<Duration>,
    /// Follows the scheme of `address` unless set explicitly.
    pub use_tls: bool,
    /// Build the channel without dialing; the first RPC connects.
    pub lazy: bool,
    pub user_agent: Option<String>,
}

const HTTP: &str = "http://";
const HTTPS: &str = "https://";

fn has_scheme(address: &str, scheme: &str) -> bool {
    address
        .get(..scheme.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
}

impl ChannelConfig {
    pub fn new(address: impl Into<String>) -> Self {
        let address = address.into().trim().to_string();
        Self {
            use_tls: has_scheme(&address, HTTPS),
            address,
            keep_alive: Some(KeepAliveConfig::default()),
            connect_timeout: Some(Duration::from_secs(30)),
            lazy: false,
            user_agent: None,
        }
    }

    /// The public Tables endpoint over TLS.
    pub fn default_endpoint() -> Self {
        Self::new(tables_proto::DEFAULT_ENDPOINT)
    }

    pub fn without_keep_alive(mut self) -> Self {
        self.keep_alive = None;
        self
    }

    pub fn with_keep_alive(mut self, keep_alive: KeepAliveConfig) -> Self {
        self.keep_alive = Some(keep_alive);
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Force TLS on, rewriting an `http://` address to `https://`.
    pub fn with_tls(self) -> Self {
        self.with_scheme(true)
    }

    /// Force TLS off, rewriting an `https://` address to `http://`.
    pub fn without_tls(self) -> Self {
        self.with_scheme(false)
    }

    fn with_scheme(mut self, tls: bool) -> Self {
        let (from, to) = if tls { (HTTP, HTTPS) } else { (HTTPS, HTTP) };
        if has_scheme(&self.address, from) {
            self.address = format!("{}{}", to, &self.address[from.len()..]);
        }
        self.use_tls = tls;
        self
    }

    pub fn lazy(mut self) -> Self {
        self.lazy = true;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the tonic endpoint without connecting.
    pub fn endpoint(&self) -> Result<Endpoint, GrpcClientError> {
        let mut endpoint = Endpoint::from_shared(self.address.clone())
            .map_err(|e| GrpcClientError::InvalidAddress(format!("{}: {}", self.address, e)))?;

        if self.use_tls {
            endpoint = endpoint
                .tls_config(ClientTlsConfig::new().with_enabled_roots())
                .map_err(|e| GrpcClientError::ConnectionFailed(format!("TLS config error: {}", e)))?;
        }
        if let Some(ka) = &self.keep_alive {
            endpoint = endpoint
                .http2_keep_alive_interval(ka.interval)
                .keep_alive_timeout(ka.timeout)
                .keep_alive_while_idle(ka.while_idle);
        }
        if let Some(timeout) = self.connect_timeout {
            endpoint = endpoint.connect_timeout(timeout);
        }
        if let Some(user_agent) = &self.user_agent {
            endpoint = endpoint
                .user_agent(user_agent.clone())
                .map_err(|e| GrpcClientError::InvalidAddress(format!("invalid user agent: {}", e)))?;
        }
        Ok(endpoint)
    }
}

/// Open a channel for `config`. Lazy configs return without dialing.
pub async fn create_channel(config: &ChannelConfig) -> Result<Channel, GrpcClientError> {
    let endpoint = config.endpoint()?;

    if config.lazy {
        debug!(address = %config.address, "tables channel deferred until first call");
        return Ok(endpoint.connect_lazy());
    }

    let channel = endpoint.connect().await?;
    debug!(
        address = %config.address,
        use_tls = config.use_tls,
        keep_alive = config.keep_alive.is_some(),
        "tables channel connected"
    );
    Ok(channel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncWriteExt;
    use tokio::net::TcpListener;

    fn install_ring_provider() {
        let _ = rustls::crypto::ring::default_provider().install_default();
    }

    #[test]
    fn test_new_detects_tls_from_scheme() {
        assert!(!ChannelConfig::new("http://localhost:9000").use_tls);
        assert!(ChannelConfig::new("https://localhost:9000").use_tls);
        assert!(ChannelConfig::new("HTTPS://localhost:9000").use_tls);
        assert!(!ChannelConfig::new("localhost:9000").use_tls);
    }

    #[test]
    fn test_new_trims_address() {
        let config = ChannelConfig::new("  https://tables.local:443 \n");
        assert_eq!(config.address, "https://tables.local:443");
        assert!(config.use_tls);
    }

    #[test]
    fn test_defaults() {
        let config = ChannelConfig::default_endpoint();
        assert_eq!(config.address, "https://area120tables.googleapis.com:443");
        assert!(config.use_tls);
        assert!(!config.lazy);
        assert_eq!(config.keep_alive, Some(KeepAliveConfig::default()));
        assert_eq!(config.connect_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_builder_overrides() {
        let ka = KeepAliveConfig {
            interval: Duration::from_secs(5),
            timeout: Duration::from_secs(7),
            while_idle: false,
        };
        let config = ChannelConfig::new("http://localhost:9000")
            .with_keep_alive(ka.clone())
            .with_connect_timeout(Duration::from_secs(2))
            .with_user_agent("tables-client/0.1.0")
            .lazy();

        assert_eq!(config.keep_alive, Some(ka));
        assert_eq!(config.connect_timeout, Some(Duration::from_secs(2)));
        assert_eq!(config.user_agent.as_deref(), Some("tables-client/0.1.0"));
        assert!(config.lazy);
        assert!(config.without_keep_alive().keep_alive.is_none());
    }

    #[test]
    fn test_tls_toggles_rewrite_scheme() {
        let config = ChannelConfig::new("http://localhost:9000").with_tls();
        assert!(config.use_tls);
        assert_eq!(config.address, "https://localhost:9000");

        let config = config.without_tls();
        assert!(!config.use_tls);
        assert_eq!(config.address, "http://localhost:9000");
    }

    #[test]
    fn test_endpoint_rejects_bad_address() {
        let err = ChannelConfig::new("not a uri").endpoint().unwrap_err();
        assert!(matches!(err, GrpcClientError::InvalidAddress(_)));
    }

    #[test]
    fn test_endpoint_rejects_bad_user_agent() {
        let err = ChannelConfig::new("http://localhost:9000")
            .with_user_agent("bad\nagent")
            .endpoint()
            .unwrap_err();
        assert!(matches!(err, GrpcClientError::InvalidAddress(_)));
    }

    #[tokio::test]
    async fn test_lazy_channel_builds_without_server() {
        let config = ChannelConfig::new("http://127.0.0.1:1").lazy();
        assert!(create_channel(&config).await.is_ok());
    }

    #[tokio::test]
    async fn test_connect_refused() {
        let config =
            ChannelConfig::new("http://127.0.0.1:1").with_connect_timeout(Duration::from_millis(200));
        let err = create_channel(&config).await.unwrap_err();
        assert!(matches!(err, GrpcClientError::ConnectionFailed(_)), "got {:?}", err);

        let config = ChannelConfig::new("http://127.0.0.1:1")
            .without_keep_alive()
            .with_connect_timeout(Duration::from_millis(200));
        let err = create_channel(&config).await.unwrap_err();
        assert!(matches!(err, GrpcClientError::ConnectionFailed(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_tls_handshake_against_plaintext_fails() {
        install_ring_provider();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let _ = socket.write_all(b"plaintext\r\n").await;
            }
        });

        let config = ChannelConfig::new(format!("https://127.0.0.1:{}", port))
            .with_connect_timeout(Duration::from_millis(500));
        let err = create_channel(&config).await.unwrap_err();
        assert!(matches!(err, GrpcClientError::ConnectionFailed(_)), "got {:?}", err);

        server.abort();
    }
}
