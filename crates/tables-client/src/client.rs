// ABOUTME: Async TablesClient covering every TablesService RPC
// ABOUTME: Adds routing headers, applies call settings, and wraps list calls in pagers

use async_trait::async_trait;
use futures::future::BoxFuture;
use tables_grpc::{
    create_channel, with_routing_header, AsyncPager, CallSettings, Invoker, PagedRequest,
    PagedResponse, RetryingInvoker, UnaryCall,
};
use tables_proto::client::TablesServiceClient;
use tables_proto::{
    BatchCreateRowsRequest, BatchCreateRowsResponse, BatchDeleteRowsRequest,
    BatchUpdateRowsRequest, BatchUpdateRowsResponse, CreateRowRequest, DeleteRowRequest,
    GetRowRequest, GetTableRequest, GetWorkspaceRequest, ListRowsRequest, ListRowsResponse,
    ListTablesRequest, ListTablesResponse, ListWorkspacesRequest, ListWorkspacesResponse, Row,
    Table, UpdateRowRequest, Workspace,
};
use tonic::metadata::MetadataMap;
use tonic::service::interceptor::InterceptedService;
use tonic::transport::Channel;
use tonic::Status;
use tracing::debug;

use crate::auth::HeaderInterceptor;
use crate::config::ClientConfig;
use crate::error::ClientError;

/// Channel type the generated stub runs over.
pub type TablesChannel = InterceptedService<Channel, HeaderInterceptor>;

type Stub = TablesServiceClient<TablesChannel>;
type RpcFuture<Resp> = BoxFuture<'static, Result<tonic::Response<Resp>, Status>>;
type Rpc<Req, Resp> = fn(Stub, tonic::Request<Req>) -> RpcFuture<Resp>;

/// One TablesService method bound to a stub.
pub struct Method<Req, Resp> {
    name: &'static str,
    stub: Stub,
    rpc: Rpc<Req, Resp>,
}

impl<Req, Resp> Clone for Method<Req, Resp> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            stub: self.stub.clone(),
            rpc: self.rpc,
        }
    }
}

impl<Req, Resp> Method<Req, Resp> {
    pub fn name(&self) -> &'static str {
        self.name
    }
}

#[async_trait]
impl<Req, Resp> UnaryCall<Req, Resp> for Method<Req, Resp>
where
    Req: Send + 'static,
    Resp: Send + 'static,
{
    async fn call(
        &mut self,
        request: tonic::Request<Req>,
    ) -> Result<tonic::Response<Resp>, Status> {
        debug!(rpc = self.name, "sending request");
        (self.rpc)(self.stub.clone(), request).await
    }
}

/// Invoker used for every client call.
pub type RpcInvoker<Req, Resp> = RetryingInvoker<Method<Req, Resp>>;

pub type ListTablesPager =
    AsyncPager<ListTablesRequest, ListTablesResponse, RpcInvoker<ListTablesRequest, ListTablesResponse>>;
pub type ListRowsPager =
    AsyncPager<ListRowsRequest, ListRowsResponse, RpcInvoker<ListRowsRequest, ListRowsResponse>>;
pub type ListWorkspacesPager = AsyncPager<
    ListWorkspacesRequest,
    ListWorkspacesResponse,
    RpcInvoker<ListWorkspacesRequest, ListWorkspacesResponse>,
>;

mod rpc {
    use super::{RpcFuture, Stub};
    use tables_proto::*;

    macro_rules! rpcs {
        ($($name:ident: $req:ty => $resp:ty;)*) => {$(
            pub(super) fn $name(mut stub: Stub, request: tonic::Request<$req>) -> RpcFuture<$resp> {
                Box::pin(async move { stub.$name(request).await })
            }
        )*};
    }

    rpcs! {
        get_table: GetTableRequest => Table;
        list_tables: ListTablesRequest => ListTablesResponse;
        get_workspace: GetWorkspaceRequest => Workspace;
        list_workspaces: ListWorkspacesRequest => ListWorkspacesResponse;
        get_row: GetRowRequest => Row;
        list_rows: ListRowsRequest => ListRowsResponse;
        create_row: CreateRowRequest => Row;
        batch_create_rows: BatchCreateRowsRequest => BatchCreateRowsResponse;
        update_row: UpdateRowRequest => Row;
        batch_update_rows: BatchUpdateRowsRequest => BatchUpdateRowsResponse;
        delete_row: DeleteRowRequest => ();
        batch_delete_rows: BatchDeleteRowsRequest => ();
    }
}

/// Async client for the Tables service.
///
/// Cloning is cheap and shares the underlying channel. Every call carries
/// the client's static metadata plus the routing header for the resource
/// it addresses, and runs under the client's [`CallSettings`].
#[derive(Clone)]
pub struct TablesClient {
    stub: Stub,
    settings: CallSettings,
    metadata: MetadataMap,
}

impl TablesClient {
    /// Open a channel per `config` and build a client over it.
    pub async fn connect(config: ClientConfig) -> Result<Self, ClientError> {
        let interceptor = HeaderInterceptor::new(config.token.as_deref())?;
        let metadata = config.metadata_map()?;
        let channel = create_channel(&config.channel).await?;
        debug!(
            address = %config.channel.address,
            authenticated = interceptor.has_token(),
            "tables client ready"
        );
        Ok(Self::new(channel, interceptor)
            .with_settings(config.settings)
            .with_metadata(metadata))
    }

    /// Build a client over an existing channel with default settings.
    pub fn new(channel: Channel, interceptor: HeaderInterceptor) -> Self {
        Self {
            stub: TablesServiceClient::with_interceptor(channel, interceptor),
            settings: CallSettings::default(),
            metadata: MetadataMap::new(),
        }
    }

    /// Replace the timeout and retry settings for calls made by this client.
    pub fn with_settings(mut self, settings: CallSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Replace the static metadata attached to every call.
    pub fn with_metadata(mut self, metadata: MetadataMap) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn settings(&self) -> &CallSettings {
        &self.settings
    }

    pub fn metadata(&self) -> &MetadataMap {
        &self.metadata
    }

    pub async fn get_table(&self, request: GetTableRequest) -> Result<Table, ClientError> {
        let metadata = self.routed(&[("name", request.name.as_str())])?;
        self.unary("GetTable", rpc::get_table, request, metadata).await
    }

    /// List tables. The returned pager already holds the first page.
    pub async fn list_tables(
        &self,
        request: ListTablesRequest,
    ) -> Result<ListTablesPager, ClientError> {
        let metadata = self.metadata.clone();
        self.list("ListTables", rpc::list_tables, request, metadata).await
    }

    pub async fn get_workspace(
        &self,
        request: GetWorkspaceRequest,
    ) -> Result<Workspace, ClientError> {
        let metadata = self.routed(&[("name", request.name.as_str())])?;
        self.unary("GetWorkspace", rpc::get_workspace, request, metadata).await
    }

    pub async fn list_workspaces(
        &self,
        request: ListWorkspacesRequest,
    ) -> Result<ListWorkspacesPager, ClientError> {
        let metadata = self.metadata.clone();
        self.list("ListWorkspaces", rpc::list_workspaces, request, metadata)
            .await
    }

    pub async fn get_row(&self, request: GetRowRequest) -> Result<Row, ClientError> {
        let metadata = self.routed(&[("name", request.name.as_str())])?;
        self.unary("GetRow", rpc::get_row, request, metadata).await
    }

    /// List rows of the table named by `request.parent`.
    pub async fn list_rows(&self, request: ListRowsRequest) -> Result<ListRowsPager, ClientError> {
        let metadata = self.routed(&[("parent", request.parent.as_str())])?;
        self.list("ListRows", rpc::list_rows, request, metadata).await
    }

    pub async fn create_row(&self, request: CreateRowRequest) -> Result<Row, ClientError> {
        let metadata = self.routed(&[("parent", request.parent.as_str())])?;
        self.unary("CreateRow", rpc::create_row, request, metadata).await
    }

    pub async fn batch_create_rows(
        &self,
        request: BatchCreateRowsRequest,
    ) -> Result<BatchCreateRowsResponse, ClientError> {
        let metadata = self.routed(&[("parent", request.parent.as_str())])?;
        self.unary("BatchCreateRows", rpc::batch_create_rows, request, metadata)
            .await
    }

    pub async fn update_row(&self, request: UpdateRowRequest) -> Result<Row, ClientError> {
        let row_name = request.row.as_ref().map(|r| r.name.as_str()).unwrap_or_default();
        let metadata = self.routed(&[("row.name", row_name)])?;
        self.unary("UpdateRow", rpc::update_row, request, metadata).await
    }

    pub async fn batch_update_rows(
        &self,
        request: BatchUpdateRowsRequest,
    ) -> Result<BatchUpdateRowsResponse, ClientError> {
        let metadata = self.routed(&[("parent", request.parent.as_str())])?;
        self.unary("BatchUpdateRows", rpc::batch_update_rows, request, metadata)
            .await
    }

    pub async fn delete_row(&self, request: DeleteRowRequest) -> Result<(), ClientError> {
        let metadata = self.routed(&[("name", request.name.as_str())])?;
        self.unary("DeleteRow", rpc::delete_row, request, metadata).await
    }

    pub async fn batch_delete_rows(
        &self,
        request: BatchDeleteRowsRequest,
    ) -> Result<(), ClientError> {
        let metadata = self.routed(&[("parent", request.parent.as_str())])?;
        self.unary("BatchDeleteRows", rpc::batch_delete_rows, request, metadata)
            .await
    }

    fn routed(&self, params: &[(&str, &str)]) -> Result<MetadataMap, ClientError> {
        Ok(with_routing_header(self.metadata.clone(), params)?)
    }

    fn invoker<Req, Resp>(&self, name: &'static str, rpc: Rpc<Req, Resp>) -> RpcInvoker<Req, Resp> {
        let method = Method {
            name,
            stub: self.stub.clone(),
            rpc,
        };
        RetryingInvoker::new(method, self.settings.clone())
    }

    async fn unary<Req, Resp>(
        &self,
        name: &'static str,
        rpc: Rpc<Req, Resp>,
        request: Req,
        metadata: MetadataMap,
    ) -> Result<Resp, ClientError>
    where
        Req: Clone + Send + 'static,
        Resp: Send + 'static,
    {
        let mut invoker = self.invoker(name, rpc);
        Ok(invoker.invoke(request, &metadata).await?)
    }

    async fn list<Req, Resp>(
        &self,
        name: &'static str,
        rpc: Rpc<Req, Resp>,
        request: Req,
        metadata: MetadataMap,
    ) -> Result<AsyncPager<Req, Resp, RpcInvoker<Req, Resp>>, ClientError>
    where
        Req: PagedRequest,
        Resp: PagedResponse,
    {
        let mut invoker = self.invoker(name, rpc);
        let response = invoker.invoke(request.clone(), &metadata).await?;
        Ok(AsyncPager::new(invoker, request, response, metadata))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tables_grpc::{ChannelConfig, RetryPolicy, ROUTING_HEADER};

    async fn unreachable_client() -> TablesClient {
        let config = ClientConfig::new("http://127.0.0.1:1")
            .with_timeout(Duration::from_millis(500))
            .lazy();
        TablesClient::connect(config).await.unwrap()
    }

    #[tokio::test]
    async fn test_connect_lazy_keeps_settings() {
        let config = ClientConfig::new("http://127.0.0.1:1")
            .with_retry(RetryPolicy::idempotent().with_max_attempts(2))
            .with_metadata("x-trace", "abc")
            .lazy();
        let client = TablesClient::connect(config).await.unwrap();

        assert_eq!(client.settings().max_attempts(), 2);
        assert_eq!(
            client.metadata().get("x-trace").unwrap().to_str().unwrap(),
            "abc"
        );
    }

    #[tokio::test]
    async fn test_connect_rejects_bad_token() {
        let config = ClientConfig::new("http://127.0.0.1:1")
            .with_token("bad\ntoken")
            .lazy();
        let result = TablesClient::connect(config).await;
        assert!(matches!(result, Err(ClientError::InvalidToken(_))));
    }

    #[tokio::test]
    async fn test_connect_eager_fails_without_server() {
        let mut config = ClientConfig::new("http://127.0.0.1:1");
        config.channel = ChannelConfig::new("http://127.0.0.1:1")
            .with_connect_timeout(Duration::from_millis(100));
        let result = TablesClient::connect(config).await;
        assert!(matches!(result, Err(ClientError::Transport(_))));
    }

    #[tokio::test]
    async fn test_routed_metadata_keeps_static_entries() {
        let client = unreachable_client().await;
        let mut base = MetadataMap::new();
        base.insert("x-trace", "abc".parse().unwrap());
        let client = client.with_metadata(base);

        let md = client.routed(&[("parent", "tables/t 1")]).unwrap();
        assert_eq!(md.get("x-trace").unwrap().to_str().unwrap(), "abc");
        assert_eq!(
            md.get(ROUTING_HEADER).unwrap().to_str().unwrap(),
            "parent=tables/t+1"
        );
        // The client's own metadata is untouched.
        assert!(client.metadata().get(ROUTING_HEADER).is_none());
    }

    #[tokio::test]
    async fn test_unreachable_server_surfaces_status() {
        let client = unreachable_client().await;
        let err = client
            .get_table(GetTableRequest {
                name: "tables/t1".to_string(),
            })
            .await
            .unwrap_err();
        assert!(err.code().is_some(), "expected an RPC status, got {:?}", err);
    }

    #[tokio::test]
    async fn test_list_failure_on_first_page() {
        let client = unreachable_client().await;
        let result = client
            .list_rows(ListRowsRequest {
                parent: "tables/t1".to_string(),
                ..Default::default()
            })
            .await;
        assert!(matches!(result, Err(ClientError::Rpc(_))));
    }
}
