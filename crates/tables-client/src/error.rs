// ABOUTME: Error types for tables-client
// ABOUTME: Wraps transport setup failures, RPC statuses, and local validation errors

use tables_grpc::GrpcClientError;
use thiserror::Error;

/// Errors returned by the Tables clients.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Channel or metadata setup failed before any RPC was sent.
    #[error(transparent)]
    Transport(#[from] GrpcClientError),

    /// The service answered with a non-OK status.
    #[error("rpc failed: {code:?}: {message}", code = .0.code(), message = .0.message())]
    Rpc(#[from] tonic::Status),

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("invalid resource name: {0}")]
    InvalidResourceName(String),

    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// The blocking client could not start its runtime.
    #[error("runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}

impl ClientError {
    /// Status code of a failed RPC.
    pub fn code(&self) -> Option<tonic::Code> {
        match self {
            ClientError::Rpc(status) => Some(status.code()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code() == Some(tonic::Code::NotFound)
    }
}
