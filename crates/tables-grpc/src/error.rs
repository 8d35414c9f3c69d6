// ABOUTME: Error types for the tables-grpc crate.
// ABOUTME: Structured errors for channel setup and call metadata construction.

use thiserror::Error;

/// Errors raised while setting up calls to the Tables service.
///
/// RPC failures are reported as [`tonic::Status`] and pass through
/// invokers and pagers untouched. This type covers what can go wrong
/// before a call is on the wire.
#[derive(Error, Debug)]
pub enum GrpcClientError {
    /// Invalid server address format.
    #[error("invalid server address: {0}")]
    InvalidAddress(String),

    /// Failed to connect to the server.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// A metadata key or value could not be encoded as a gRPC header.
    #[error("invalid metadata '{key}': {reason}")]
    InvalidMetadata { key: String, reason: String },
}

impl From<tonic::transport::Error> for GrpcClientError {
    fn from(err: tonic::transport::Error) -> Self {
        GrpcClientError::ConnectionFailed(err.to_string())
    }
}
