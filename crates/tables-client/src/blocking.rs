// ABOUTME: Blocking TablesClient driving the async client on a private runtime
// ABOUTME: List calls return iterator pagers that block the thread per page fetch

use std::sync::Arc;

use tables_grpc::{BlockOn, CallSettings, Pager};
use tables_proto::{
    BatchCreateRowsRequest, BatchCreateRowsResponse, BatchDeleteRowsRequest,
    BatchUpdateRowsRequest, BatchUpdateRowsResponse, CreateRowRequest, DeleteRowRequest,
    GetRowRequest, GetTableRequest, GetWorkspaceRequest, ListRowsRequest, ListRowsResponse,
    ListTablesRequest, ListTablesResponse, ListWorkspacesRequest, ListWorkspacesResponse, Row,
    Table, UpdateRowRequest, Workspace,
};
use tokio::runtime::Runtime;
use tonic::metadata::MetadataMap;

use crate::client::RpcInvoker;
use crate::config::ClientConfig;
use crate::error::ClientError;

pub type ListTablesPager = Pager<
    ListTablesRequest,
    ListTablesResponse,
    BlockOn<RpcInvoker<ListTablesRequest, ListTablesResponse>>,
>;
pub type ListRowsPager =
    Pager<ListRowsRequest, ListRowsResponse, BlockOn<RpcInvoker<ListRowsRequest, ListRowsResponse>>>;
pub type ListWorkspacesPager = Pager<
    ListWorkspacesRequest,
    ListWorkspacesResponse,
    BlockOn<RpcInvoker<ListWorkspacesRequest, ListWorkspacesResponse>>,
>;

/// Blocking client for the Tables service.
///
/// Owns a multi-threaded tokio runtime. Must not be called from within
/// an async context.
#[derive(Clone)]
pub struct TablesClient {
    inner: crate::TablesClient,
    runtime: Arc<Runtime>,
}

impl TablesClient {
    pub fn connect(config: ClientConfig) -> Result<Self, ClientError> {
        let runtime = Arc::new(
            tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .thread_name("tables-client")
                .enable_all()
                .build()?,
        );
        let inner = runtime.block_on(crate::TablesClient::connect(config))?;
        Ok(Self { inner, runtime })
    }

    pub fn with_settings(mut self, settings: CallSettings) -> Self {
        self.inner = self.inner.with_settings(settings);
        self
    }

    pub fn with_metadata(mut self, metadata: MetadataMap) -> Self {
        self.inner = self.inner.with_metadata(metadata);
        self
    }

    /// The async client this one wraps.
    pub fn as_async(&self) -> &crate::TablesClient {
        &self.inner
    }

    pub fn get_table(&self, request: GetTableRequest) -> Result<Table, ClientError> {
        self.runtime.block_on(self.inner.get_table(request))
    }

    pub fn list_tables(&self, request: ListTablesRequest) -> Result<ListTablesPager, ClientError> {
        let pager = self.runtime.block_on(self.inner.list_tables(request))?;
        Ok(pager.into_blocking(self.runtime.clone()))
    }

    pub fn get_workspace(&self, request: GetWorkspaceRequest) -> Result<Workspace, ClientError> {
        self.runtime.block_on(self.inner.get_workspace(request))
    }

    pub fn list_workspaces(
        &self,
        request: ListWorkspacesRequest,
    ) -> Result<ListWorkspacesPager, ClientError> {
        let pager = self.runtime.block_on(self.inner.list_workspaces(request))?;
        Ok(pager.into_blocking(self.runtime.clone()))
    }

    pub fn get_row(&self, request: GetRowRequest) -> Result<Row, ClientError> {
        self.runtime.block_on(self.inner.get_row(request))
    }

    pub fn list_rows(&self, request: ListRowsRequest) -> Result<ListRowsPager, ClientError> {
        let pager = self.runtime.block_on(self.inner.list_rows(request))?;
        Ok(pager.into_blocking(self.runtime.clone()))
    }

    pub fn create_row(&self, request: CreateRowRequest) -> Result<Row, ClientError> {
        self.runtime.block_on(self.inner.create_row(request))
    }

    pub fn batch_create_rows(
        &self,
        request: BatchCreateRowsRequest,
    ) -> Result<BatchCreateRowsResponse, ClientError> {
        self.runtime.block_on(self.inner.batch_create_rows(request))
    }

    pub fn update_row(&self, request: UpdateRowRequest) -> Result<Row, ClientError> {
        self.runtime.block_on(self.inner.update_row(request))
    }

    pub fn batch_update_rows(
        &self,
        request: BatchUpdateRowsRequest,
    ) -> Result<BatchUpdateRowsResponse, ClientError> {
        self.runtime.block_on(self.inner.batch_update_rows(request))
    }

    pub fn delete_row(&self, request: DeleteRowRequest) -> Result<(), ClientError> {
        self.runtime.block_on(self.inner.delete_row(request))
    }

    pub fn batch_delete_rows(&self, request: BatchDeleteRowsRequest) -> Result<(), ClientError> {
        self.runtime.block_on(self.inner.batch_delete_rows(request))
    }
}
