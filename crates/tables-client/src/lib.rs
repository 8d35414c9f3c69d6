// ABOUTME: Client library for the Area120 Tables API
// ABOUTME: Async and blocking clients, resource names, row value conversion

mod auth;
pub mod blocking;
mod client;
mod config;
mod error;
pub mod path;
pub mod value;

pub use auth::HeaderInterceptor;
pub use client::{
    ListRowsPager, ListTablesPager, ListWorkspacesPager, Method, RpcInvoker, TablesChannel,
    TablesClient,
};
pub use config::ClientConfig;
pub use error::ClientError;

pub use tables_grpc::{
    AsyncPager, CallSettings, ChannelConfig, Invoker, PagedRequest, PagedResponse, Pager,
    RetryPolicy,
};
pub use tables_proto as proto;

/// Crate version reported in the client info header.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
