// ABOUTME: Pagination over list RPCs, in blocking and async flavours.
// ABOUTME: Chains pages by next_page_token and yields either items or whole pages.

use std::collections::VecDeque;
use std::sync::Arc;

use futures::stream::{self, Stream};
use tokio::runtime::Runtime;
use tonic::metadata::MetadataMap;
use tonic::Status;
use tracing::debug;

use crate::invoker::{BlockOn, BlockingInvoker, Invoker};

/// Names of the fields a list response pages over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageFields {
    /// Repeated field holding the items of one page.
    pub items: &'static str,
    /// Request field carrying the token of the page to fetch.
    pub request_token: &'static str,
    /// Response field carrying the token of the following page.
    pub response_token: &'static str,
}

impl PageFields {
    pub const fn new(items: &'static str) -> Self {
        Self {
            items,
            request_token: "page_token",
            response_token: "next_page_token",
        }
    }
}

/// A list request whose page token can be replaced.
pub trait PagedRequest: Clone + Send + 'static {
    fn page_token(&self) -> &str;
    fn set_page_token(&mut self, token: String);
}

/// A list response: one page of items plus the token of the next page.
///
/// An empty token means there are no further pages.
pub trait PagedResponse: Send + 'static {
    type Item: Send + 'static;

    const FIELDS: PageFields;

    fn next_page_token(&self) -> &str;
    fn items(&self) -> &[Self::Item];
    fn into_items(self) -> Vec<Self::Item>;
}

/// Pagination state shared by both pager flavours.
///
/// A fetched page sits in `current` until it is handed out whole or
/// unpacked into `buffered` for item iteration. Unpacking or handing out
/// a page consumes it; nothing is replayed.
struct PageState<Req, Resp: PagedResponse> {
    request: Req,
    metadata: MetadataMap,
    current: Option<Resp>,
    buffered: VecDeque<Resp::Item>,
    next_token: String,
    pages_fetched: usize,
    done: bool,
}

impl<Req: PagedRequest, Resp: PagedResponse> PageState<Req, Resp> {
    fn new(request: Req, response: Resp, metadata: MetadataMap) -> Self {
        Self {
            request,
            metadata,
            next_token: response.next_page_token().to_string(),
            current: Some(response),
            buffered: VecDeque::new(),
            pages_fetched: 1,
            done: false,
        }
    }

    fn pop_item(&mut self) -> Option<Resp::Item> {
        if let Some(item) = self.buffered.pop_front() {
            return Some(item);
        }
        let page = self.current.take()?;
        self.buffered = page.into_items().into();
        self.buffered.pop_front()
    }

    /// Take the current page whole, dropping any partially consumed one.
    fn take_page(&mut self) -> Option<Resp> {
        self.buffered.clear();
        self.current.take()
    }

    /// The request for the following page, if one exists.
    fn next_request(&mut self) -> Option<Req> {
        if self.done || self.next_token.is_empty() {
            self.done = true;
            return None;
        }
        let mut request = self.request.clone();
        request.set_page_token(self.next_token.clone());
        Some(request)
    }

    fn accept(&mut self, request: Req, response: Resp) {
        self.next_token = response.next_page_token().to_string();
        self.request = request;
        self.buffered.clear();
        self.current = Some(response);
        self.pages_fetched += 1;
    }

    fn fail(&mut self) {
        self.done = true;
        self.current = None;
        self.buffered.clear();
        self.next_token.clear();
    }

    fn log_fetch(&self, request: &Req) {
        debug!(
            items = Resp::FIELDS.items,
            page_token = %request.page_token(),
            pages_fetched = self.pages_fetched,
            "fetching next page"
        );
    }
}

/// Blocking pager over a list RPC.
///
/// Iterating yields items across page boundaries. [`Pager::next_page`]
/// and [`Pager::pages`] yield raw responses from the same state; asking
/// for a page while one is partially consumed skips the rest of it.
/// Errors end the sequence after being yielded once.
pub struct Pager<Req, Resp: PagedResponse, I> {
    state: PageState<Req, Resp>,
    invoker: I,
}

impl<Req, Resp, I> Pager<Req, Resp, I>
where
    Req: PagedRequest,
    Resp: PagedResponse,
    I: BlockingInvoker<Req, Resp>,
{
    /// Build a pager from the list call that already produced `response`.
    ///
    /// `metadata` is attached unchanged to every follow-up fetch.
    pub fn new(invoker: I, request: Req, response: Resp, metadata: MetadataMap) -> Self {
        Self {
            state: PageState::new(request, response, metadata),
            invoker,
        }
    }

    /// Next raw response, or `None` once the last page was handed out.
    pub fn next_page(&mut self) -> Option<Result<Resp, Status>> {
        if let Some(page) = self.state.take_page() {
            return Some(Ok(page));
        }
        match self.fetch()? {
            Ok(()) => self.state.take_page().map(Ok),
            Err(status) => Some(Err(status)),
        }
    }

    /// Iterate over whole pages.
    pub fn pages(&mut self) -> Pages<'_, Req, Resp, I> {
        Pages { pager: self }
    }

    /// Token of the page that would be fetched next. Empty when exhausted.
    pub fn next_page_token(&self) -> &str {
        &self.state.next_token
    }

    pub fn metadata(&self) -> &MetadataMap {
        &self.state.metadata
    }

    /// Pages received so far, including the initial response.
    pub fn pages_fetched(&self) -> usize {
        self.state.pages_fetched
    }

    fn fetch(&mut self) -> Option<Result<(), Status>> {
        let request = self.state.next_request()?;
        self.state.log_fetch(&request);
        match self.invoker.invoke(request.clone(), &self.state.metadata) {
            Ok(response) => {
                self.state.accept(request, response);
                Some(Ok(()))
            }
            Err(status) => {
                debug!(code = ?status.code(), "page fetch failed");
                self.state.fail();
                Some(Err(status))
            }
        }
    }
}

impl<Req, Resp, I> Iterator for Pager<Req, Resp, I>
where
    Req: PagedRequest,
    Resp: PagedResponse,
    I: BlockingInvoker<Req, Resp>,
{
    type Item = Result<Resp::Item, Status>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.state.pop_item() {
                return Some(Ok(item));
            }
            if let Err(status) = self.fetch()? {
                return Some(Err(status));
            }
        }
    }
}

/// Page-level view over a [`Pager`].
pub struct Pages<'a, Req, Resp: PagedResponse, I> {
    pager: &'a mut Pager<Req, Resp, I>,
}

impl<Req, Resp, I> Iterator for Pages<'_, Req, Resp, I>
where
    Req: PagedRequest,
    Resp: PagedResponse,
    I: BlockingInvoker<Req, Resp>,
{
    type Item = Result<Resp, Status>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pager.next_page()
    }
}

/// Async pager over a list RPC. Same semantics as [`Pager`], with each
/// fetch suspending the task instead of blocking the thread.
pub struct AsyncPager<Req, Resp: PagedResponse, I> {
    state: PageState<Req, Resp>,
    invoker: I,
}

impl<Req, Resp, I> AsyncPager<Req, Resp, I>
where
    Req: PagedRequest,
    Resp: PagedResponse,
    I: Invoker<Req, Resp>,
{
    pub fn new(invoker: I, request: Req, response: Resp, metadata: MetadataMap) -> Self {
        Self {
            state: PageState::new(request, response, metadata),
            invoker,
        }
    }

    pub async fn next_item(&mut self) -> Option<Result<Resp::Item, Status>> {
        loop {
            if let Some(item) = self.state.pop_item() {
                return Some(Ok(item));
            }
            if let Err(status) = self.fetch().await? {
                return Some(Err(status));
            }
        }
    }

    pub async fn next_page(&mut self) -> Option<Result<Resp, Status>> {
        if let Some(page) = self.state.take_page() {
            return Some(Ok(page));
        }
        match self.fetch().await? {
            Ok(()) => self.state.take_page().map(Ok),
            Err(status) => Some(Err(status)),
        }
    }

    /// Consume the pager as a stream of items.
    pub fn into_stream(self) -> impl Stream<Item = Result<Resp::Item, Status>> {
        stream::unfold(self, |mut pager| async move {
            pager.next_item().await.map(|item| (item, pager))
        })
    }

    /// Consume the pager as a stream of whole pages.
    pub fn into_pages(self) -> impl Stream<Item = Result<Resp, Status>> {
        stream::unfold(self, |mut pager| async move {
            pager.next_page().await.map(|page| (page, pager))
        })
    }

    /// Borrow the pager as a stream of whole pages.
    pub fn pages(&mut self) -> impl Stream<Item = Result<Resp, Status>> + '_ {
        stream::unfold(self, |pager| async move {
            pager.next_page().await.map(|page| (page, pager))
        })
    }

    /// Switch to blocking iteration, driving fetches on `runtime`.
    pub fn into_blocking(self, runtime: Arc<Runtime>) -> Pager<Req, Resp, BlockOn<I>> {
        Pager {
            state: self.state,
            invoker: BlockOn::new(runtime, self.invoker),
        }
    }

    pub fn next_page_token(&self) -> &str {
        &self.state.next_token
    }

    pub fn metadata(&self) -> &MetadataMap {
        &self.state.metadata
    }

    pub fn pages_fetched(&self) -> usize {
        self.state.pages_fetched
    }

    async fn fetch(&mut self) -> Option<Result<(), Status>> {
        let request = self.state.next_request()?;
        self.state.log_fetch(&request);
        match self.invoker.invoke(request.clone(), &self.state.metadata).await {
            Ok(response) => {
                self.state.accept(request, response);
                Some(Ok(()))
            }
            Err(status) => {
                debug!(code = ?status.code(), "page fetch failed");
                self.state.fail();
                Some(Err(status))
            }
        }
    }
}
