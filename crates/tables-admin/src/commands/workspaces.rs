// ABOUTME: Implementation of 'tables-admin workspaces' commands
// ABOUTME: Lists workspaces and shows the tables inside one

use anyhow::Result;

use tables_client::path::workspace_name;
use tables_client::proto::{GetWorkspaceRequest, ListWorkspacesRequest};
use tables_client::TablesClient;

use super::{print_listing, PageArgs, WorkspacesCommand};
use crate::output::Printer;

pub async fn run(client: &TablesClient, printer: Printer, cmd: WorkspacesCommand) -> Result<()> {
    match cmd {
        WorkspacesCommand::List { paging } => list_workspaces(client, printer, paging).await,
        WorkspacesCommand::Get { workspace } => get_workspace(client, printer, &workspace).await,
    }
}

async fn list_workspaces(client: &TablesClient, printer: Printer, paging: PageArgs) -> Result<()> {
    let request = ListWorkspacesRequest {
        page_size: paging.page_size(),
        ..Default::default()
    };
    let pager = client.list_workspaces(request).await?;
    print_listing(pager, &paging, printer, "workspaces", |workspace| {
        printer.workspace(workspace, false);
        Ok(())
    })
    .await?;
    Ok(())
}

async fn get_workspace(client: &TablesClient, printer: Printer, workspace: &str) -> Result<()> {
    let name = workspace_name(workspace)?;
    let workspace = client.get_workspace(GetWorkspaceRequest { name }).await?;
    printer.workspace(&workspace, true);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tables_client::{ClientConfig, ClientError, RetryPolicy};

    use super::*;

    /// Lazy client whose endpoint refuses connections; one attempt per call.
    async fn unreachable() -> TablesClient {
        let config = ClientConfig::new("http://127.0.0.1:1")
            .with_timeout(Duration::from_millis(500))
            .with_retry(RetryPolicy::idempotent().with_max_attempts(1))
            .lazy();
        TablesClient::connect(config).await.unwrap()
    }

    fn client_error(err: &anyhow::Error) -> &ClientError {
        err.downcast_ref::<ClientError>().unwrap()
    }

    #[tokio::test]
    async fn test_get_rejects_malformed_name_before_calling() {
        let client = unreachable().await;
        let cmd = WorkspacesCommand::Get {
            workspace: "a/b".to_string(),
        };
        let err = run(&client, Printer::new(true), cmd).await.unwrap_err();
        assert!(matches!(
            client_error(&err),
            ClientError::InvalidResourceName(name) if name == "a/b"
        ));
    }

    #[tokio::test]
    async fn test_get_surfaces_rpc_failure() {
        let client = unreachable().await;
        let cmd = WorkspacesCommand::Get {
            workspace: "t1".to_string(),
        };
        let err = run(&client, Printer::new(true), cmd).await.unwrap_err();
        assert!(client_error(&err).code().is_some(), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_list_fails_on_first_page() {
        let client = unreachable().await;
        let cmd = WorkspacesCommand::List {
            paging: PageArgs {
                limit: Some(1),
                ..Default::default()
            },
        };
        let err = run(&client, Printer::new(false), cmd).await.unwrap_err();
        assert!(matches!(client_error(&err), ClientError::Rpc(_)), "got {:?}", err);
    }
}
