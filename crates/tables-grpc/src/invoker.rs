// ABOUTME: The invoker seam between pagers and the transport.
// ABOUTME: Async and blocking invoke contracts plus the retrying, deadline-bounded implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::runtime::Runtime;
use tonic::metadata::MetadataMap;
use tonic::Status;
use tracing::warn;

use crate::settings::CallSettings;

/// Performs one logical request/response exchange.
///
/// Retry and timeout behavior, if any, belongs to the implementation.
/// Errors are returned as the final `Status` observed.
#[async_trait]
pub trait Invoker<Req, Resp>: Send
where
    Req: Send + 'static,
    Resp: Send + 'static,
{
    async fn invoke(&mut self, request: Req, metadata: &MetadataMap) -> Result<Resp, Status>;
}

/// Blocking form of [`Invoker`]. Each call blocks the current thread.
pub trait BlockingInvoker<Req, Resp> {
    fn invoke(&mut self, request: Req, metadata: &MetadataMap) -> Result<Resp, Status>;
}

/// A single attempt of a unary RPC on the wire.
#[async_trait]
pub trait UnaryCall<Req, Resp>: Send
where
    Req: Send + 'static,
    Resp: Send + 'static,
{
    async fn call(
        &mut self,
        request: tonic::Request<Req>,
    ) -> Result<tonic::Response<Resp>, Status>;
}

/// Invoker applying [`CallSettings`] around a [`UnaryCall`].
///
/// Every attempt carries the caller's metadata and the per-attempt
/// deadline. Statuses the retry policy marks retryable are retried with
/// backoff until attempts run out.
#[derive(Debug, Clone)]
pub struct RetryingInvoker<C> {
    call: C,
    settings: CallSettings,
}

impl<C> RetryingInvoker<C> {
    pub fn new(call: C, settings: CallSettings) -> Self {
        Self { call, settings }
    }

    pub fn settings(&self) -> &CallSettings {
        &self.settings
    }
}

#[async_trait]
impl<Req, Resp, C> Invoker<Req, Resp> for RetryingInvoker<C>
where
    Req: Clone + Send + 'static,
    Resp: Send + 'static,
    C: UnaryCall<Req, Resp>,
{
    async fn invoke(&mut self, request: Req, metadata: &MetadataMap) -> Result<Resp, Status> {
        let max_attempts = self.settings.max_attempts();
        let mut attempt = 1;

        loop {
            let mut req = tonic::Request::new(request.clone());
            *req.metadata_mut() = metadata.clone();

            let outcome = match self.settings.timeout {
                Some(timeout) => {
                    req.set_timeout(timeout);
                    match tokio::time::timeout(timeout, self.call.call(req)).await {
                        Ok(result) => result,
                        Err(_) => Err(Status::deadline_exceeded(format!(
                            "deadline of {:?} exceeded",
                            timeout
                        ))),
                    }
                }
                None => self.call.call(req).await,
            };

            let status = match outcome {
                Ok(response) => return Ok(response.into_inner()),
                Err(status) => status,
            };

            let delay = match &self.settings.retry {
                Some(policy) if attempt < max_attempts && policy.is_retryable(status.code()) => {
                    policy.delay(attempt)
                }
                _ => return Err(status),
            };

            warn!(
                attempt,
                max_attempts,
                code = ?status.code(),
                delay_ms = delay.as_millis() as u64,
                "retrying RPC"
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}

/// Drives an async [`Invoker`] to completion on a dedicated runtime.
///
/// Must not be used from inside that runtime's worker threads.
pub struct BlockOn<I> {
    runtime: Arc<Runtime>,
    inner: I,
}

impl<I> BlockOn<I> {
    pub fn new(runtime: Arc<Runtime>, inner: I) -> Self {
        Self { runtime, inner }
    }

    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<Req, Resp, I> BlockingInvoker<Req, Resp> for BlockOn<I>
where
    Req: Send + 'static,
    Resp: Send + 'static,
    I: Invoker<Req, Resp>,
{
    fn invoke(&mut self, request: Req, metadata: &MetadataMap) -> Result<Resp, Status> {
        self.runtime.block_on(self.inner.invoke(request, metadata))
    }
}
