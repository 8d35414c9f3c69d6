// ABOUTME: Integration tests for paging through rows with real Tables messages
// ABOUTME: Runs the pager over a scripted wire call behind the retrying invoker

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use tables_client::path::{row_path, table_path};
use tables_client::proto::{ListRowsRequest, ListRowsResponse, Row, View};
use tables_client::value::{to_value, values_to_json};
use tables_client::{CallSettings, RetryPolicy};
use tables_grpc::{
    with_routing_header, AsyncPager, Invoker, RetryingInvoker, UnaryCall, ROUTING_HEADER,
};
use tonic::metadata::MetadataMap;
use tonic::{Code, Status};

type Seen = Arc<Mutex<Vec<(ListRowsRequest, MetadataMap)>>>;

/// Wire call answering with scripted pages and recording every attempt.
struct ScriptedRows {
    replies: VecDeque<Result<ListRowsResponse, Status>>,
    seen: Seen,
}

#[async_trait]
impl UnaryCall<ListRowsRequest, ListRowsResponse> for ScriptedRows {
    async fn call(
        &mut self,
        request: tonic::Request<ListRowsRequest>,
    ) -> Result<tonic::Response<ListRowsResponse>, Status> {
        let metadata = request.metadata().clone();
        self.seen
            .lock()
            .unwrap()
            .push((request.into_inner(), metadata));
        self.replies
            .pop_front()
            .unwrap_or_else(|| Err(Status::internal("no more pages scripted")))
            .map(tonic::Response::new)
    }
}

fn row(table: &str, id: &str) -> Row {
    let mut values = HashMap::new();
    values.insert("Name".to_string(), to_value(&serde_json::json!(id)));
    Row {
        name: row_path(table, id),
        values,
    }
}

fn rows_page(ids: &[&str], token: &str) -> ListRowsResponse {
    ListRowsResponse {
        rows: ids.iter().map(|id| row("t1", id)).collect(),
        next_page_token: token.to_string(),
    }
}

fn request() -> ListRowsRequest {
    let mut request = ListRowsRequest {
        parent: table_path("t1"),
        page_size: 3,
        filter: "values.\"Name\" != \"\"".to_string(),
        ..Default::default()
    };
    request.set_view(View::ColumnIdView);
    request
}

/// Build a pager the way the client does: first call through the invoker,
/// then hand the response to the pager.
async fn start(
    replies: Vec<Result<ListRowsResponse, Status>>,
    settings: CallSettings,
) -> (
    Result<AsyncPager<ListRowsRequest, ListRowsResponse, RetryingInvoker<ScriptedRows>>, Status>,
    Seen,
) {
    let seen = Seen::default();
    let call = ScriptedRows {
        replies: replies.into(),
        seen: seen.clone(),
    };
    let mut invoker = RetryingInvoker::new(call, settings);
    let request = request();
    let metadata =
        with_routing_header(MetadataMap::new(), &[("parent", request.parent.as_str())]).unwrap();

    let pager = match invoker.invoke(request.clone(), &metadata).await {
        Ok(first) => Ok(AsyncPager::new(invoker, request, first, metadata)),
        Err(status) => Err(status),
    };
    (pager, seen)
}

fn scenario() -> Vec<Result<ListRowsResponse, Status>> {
    vec![
        Ok(rows_page(&["T1", "T2", "T3"], "abc")),
        Ok(rows_page(&[], "def")),
        Ok(rows_page(&["T4"], "ghi")),
        Ok(rows_page(&["T5", "T6"], "")),
    ]
}

#[tokio::test]
async fn rows_stream_in_order_across_pages() {
    let (pager, seen) = start(scenario(), CallSettings::default()).await;
    let names: Vec<String> = pager
        .unwrap()
        .into_stream()
        .map(|row| row.unwrap().name)
        .collect()
        .await;

    let expected: Vec<String> = ["T1", "T2", "T3", "T4", "T5", "T6"]
        .iter()
        .map(|id| row_path("t1", id))
        .collect();
    assert_eq!(names, expected);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 4);
    let tokens: Vec<&str> = seen.iter().map(|(r, _)| r.page_token.as_str()).collect();
    assert_eq!(tokens, vec!["", "abc", "def", "ghi"]);
}

#[tokio::test]
async fn every_fetch_carries_routing_and_filters() {
    let (pager, seen) = start(scenario(), CallSettings::default()).await;
    let _: Vec<_> = pager.unwrap().into_stream().collect().await;

    let seen = seen.lock().unwrap();
    for (request, metadata) in seen.iter() {
        assert_eq!(
            metadata.get(ROUTING_HEADER).unwrap().to_str().unwrap(),
            "parent=tables/t1"
        );
        assert!(metadata.get("grpc-timeout").is_some());
        assert_eq!(request.parent, "tables/t1");
        assert_eq!(request.page_size, 3);
        assert_eq!(request.view(), View::ColumnIdView);
        assert_eq!(request.filter, "values.\"Name\" != \"\"");
    }
}

#[tokio::test]
async fn page_iteration_reports_tokens() {
    let (pager, _seen) = start(scenario(), CallSettings::default()).await;
    let tokens: Vec<String> = pager
        .unwrap()
        .into_pages()
        .map(|page| page.unwrap().next_page_token)
        .collect()
        .await;
    assert_eq!(tokens, vec!["abc", "def", "ghi", ""]);
}

#[tokio::test]
async fn transient_page_failure_is_retried_by_invoker() {
    let replies = vec![
        Ok(rows_page(&["T1"], "abc")),
        Err(Status::unavailable("blip")),
        Ok(rows_page(&["T2"], "")),
    ];
    let settings = CallSettings::default().with_retry(
        RetryPolicy::idempotent()
            .with_max_attempts(3)
            .with_backoff(Duration::from_millis(1), Duration::from_millis(1))
            .without_jitter(),
    );
    let (pager, seen) = start(replies, settings).await;

    let rows: Vec<Row> = pager
        .unwrap()
        .into_stream()
        .map(|row| row.unwrap())
        .collect()
        .await;
    assert_eq!(rows.len(), 2);

    // The retried attempt reuses the same page token.
    let seen = seen.lock().unwrap();
    let tokens: Vec<&str> = seen.iter().map(|(r, _)| r.page_token.as_str()).collect();
    assert_eq!(tokens, vec!["", "abc", "abc"]);
}

#[tokio::test]
async fn permanent_page_failure_ends_iteration() {
    let replies = vec![
        Ok(rows_page(&["T1", "T2"], "abc")),
        Ok(rows_page(&["T3"], "def")),
        Err(Status::permission_denied("table no longer shared")),
    ];
    let (pager, seen) = start(replies, CallSettings::default()).await;

    let results: Vec<Result<Row, Status>> = pager.unwrap().into_stream().collect().await;
    assert_eq!(results.len(), 4);
    assert!(results[..3].iter().all(|r| r.is_ok()));
    assert_eq!(
        results[3].as_ref().unwrap_err().code(),
        Code::PermissionDenied
    );
    assert_eq!(seen.lock().unwrap().len(), 3);
}

#[tokio::test]
async fn first_call_failure_produces_no_pager() {
    let (pager, seen) = start(
        vec![Err(Status::not_found("tables/t1"))],
        CallSettings::default(),
    )
    .await;
    assert_eq!(pager.err().unwrap().code(), Code::NotFound);
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn row_values_render_as_json() {
    let pager = tokio_test::block_on(start(scenario(), CallSettings::default())).0;
    let mut pager = pager.unwrap();
    let first = tokio_test::block_on(pager.next_item()).unwrap().unwrap();
    let json = values_to_json(&first.values).unwrap();
    assert_eq!(json, serde_json::json!({"Name": "T1"}));
}
