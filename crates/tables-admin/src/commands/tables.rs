// ABOUTME: Implementation of 'tables-admin tables' commands
// ABOUTME: Lists tables and shows a single table's columns

use anyhow::Result;

use tables_client::path::table_name;
use tables_client::proto::{GetTableRequest, ListTablesRequest};
use tables_client::TablesClient;

use super::{print_listing, PageArgs, TablesCommand};
use crate::output::Printer;

pub async fn run(client: &TablesClient, printer: Printer, cmd: TablesCommand) -> Result<()> {
    match cmd {
        TablesCommand::List { paging } => list_tables(client, printer, paging).await,
        TablesCommand::Get { table } => get_table(client, printer, &table).await,
    }
}

async fn list_tables(client: &TablesClient, printer: Printer, paging: PageArgs) -> Result<()> {
    let request = ListTablesRequest {
        page_size: paging.page_size(),
        ..Default::default()
    };
    let pager = client.list_tables(request).await?;
    print_listing(pager, &paging, printer, "tables", |table| {
        printer.table(table, false);
        Ok(())
    })
    .await?;
    Ok(())
}

async fn get_table(client: &TablesClient, printer: Printer, table: &str) -> Result<()> {
    let name = table_name(table)?;
    let table = client.get_table(GetTableRequest { name }).await?;
    printer.table(&table, true);
    Ok(())
}
