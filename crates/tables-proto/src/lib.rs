// ABOUTME: Re-exports generated protobuf types for the Area120 Tables API.
// ABOUTME: Single source of truth for TablesService messages and the gRPC client.

#![allow(clippy::derive_partial_eq_without_eq)]

/// Generated protobuf types for `google.area120.tables.v1alpha1`.
///
/// The files under `src/generated` are produced by `buf generate` with the
/// prost and tonic plugins (client only) and committed so that building
/// this crate does not require `protoc`.
pub mod v1alpha1 {
    include!("generated/google.area120.tables.v1alpha1.rs");
    include!("generated/google.area120.tables.v1alpha1.tonic.rs");
}

// Re-export commonly used types at crate root for convenience
pub use v1alpha1::*;

// Re-export client types under a client module
pub mod client {
    pub use super::v1alpha1::tables_service_client::TablesServiceClient;
}

/// Default public endpoint of the service.
pub const DEFAULT_ENDPOINT: &str = "https://area120tables.googleapis.com:443";
