// ABOUTME: Shared gRPC plumbing for the Area120 Tables client.
// ABOUTME: Provides channel creation, call metadata, retry/timeout settings, invokers, and pagers.

pub mod channel;
pub mod error;
pub mod invoker;
pub mod metadata;
pub mod pager;
pub mod resources;
pub mod settings;

// Channel creation
pub use channel::{create_channel, ChannelConfig, KeepAliveConfig};

// Error types
pub use error::GrpcClientError;

// Call metadata
pub use metadata::{
    client_info_value, metadata_from_pairs, routing_header, with_routing_header, API_CLIENT_HEADER,
    ROUTING_HEADER,
};

// Retry and timeout
pub use settings::{CallSettings, RetryPolicy, DEFAULT_TIMEOUT};

// Invokers
pub use invoker::{BlockOn, BlockingInvoker, Invoker, RetryingInvoker, UnaryCall};

// Pagination
pub use pager::{AsyncPager, PageFields, PagedRequest, PagedResponse, Pager, Pages};

// Re-export proto types for convenience
pub use tables_proto;
