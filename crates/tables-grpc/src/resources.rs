// ABOUTME: Pagination bindings for the Tables list RPCs.
// ABOUTME: Tells the pager where the items and page tokens live in each list message.

use tables_proto::{
    ListRowsRequest, ListRowsResponse, ListTablesRequest, ListTablesResponse,
    ListWorkspacesRequest, ListWorkspacesResponse, Row, Table, Workspace,
};

use crate::pager::{PageFields, PagedRequest, PagedResponse};

macro_rules! paged_list {
    ($request:ty, $response:ty, $item:ty, $field:ident) => {
        impl PagedRequest for $request {
            fn page_token(&self) -> &str {
                &self.page_token
            }

            fn set_page_token(&mut self, token: String) {
                self.page_token = token;
            }
        }

        impl PagedResponse for $response {
            type Item = $item;

            const FIELDS: PageFields = PageFields::new(stringify!($field));

            fn next_page_token(&self) -> &str {
                &self.next_page_token
            }

            fn items(&self) -> &[$item] {
                &self.$field
            }

            fn into_items(self) -> Vec<$item> {
                self.$field
            }
        }
    };
}

paged_list!(ListTablesRequest, ListTablesResponse, Table, tables);
paged_list!(ListRowsRequest, ListRowsResponse, Row, rows);
paged_list!(ListWorkspacesRequest, ListWorkspacesResponse, Workspace, workspaces);
