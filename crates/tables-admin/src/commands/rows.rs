// ABOUTME: Implementation of 'tables-admin rows' commands
// ABOUTME: Lists, reads, creates, updates, and deletes rows, singly or in batches

use anyhow::{Context, Result};
use prost_types::FieldMask;

use tables_client::path::{row_name, table_name};
use tables_client::proto::{
    BatchCreateRowsRequest, BatchDeleteRowsRequest, BatchUpdateRowsRequest, CreateRowRequest,
    DeleteRowRequest, GetRowRequest, ListRowsRequest, Row, UpdateRowRequest, View,
};
use tables_client::value::{values_from_assignments, values_from_json};
use tables_client::TablesClient;
use tracing::info;

use super::{print_listing, RowsCommand};
use crate::output::Printer;

fn view(column_ids: bool) -> View {
    if column_ids {
        View::ColumnIdView
    } else {
        View::Unspecified
    }
}

pub async fn run(client: &TablesClient, printer: Printer, cmd: RowsCommand) -> Result<()> {
    match cmd {
        RowsCommand::List {
            table,
            filter,
            column_ids,
            paging,
        } => {
            let mut request = ListRowsRequest {
                parent: table_name(&table)?,
                page_size: paging.page_size(),
                filter: filter.unwrap_or_default(),
                ..Default::default()
            };
            request.set_view(view(column_ids));
            let pager = client.list_rows(request).await?;
            print_listing(pager, &paging, printer, "rows", |row| printer.row(row)).await?;
        }

        RowsCommand::Get { row, column_ids } => {
            let mut request = GetRowRequest {
                name: row_name(&row)?,
                ..Default::default()
            };
            request.set_view(view(column_ids));
            let row = client.get_row(request).await?;
            printer.row(&row)?;
        }

        RowsCommand::Create {
            table,
            values,
            column_ids,
        } => {
            let mut request = CreateRowRequest {
                parent: table_name(&table)?,
                row: Some(Row {
                    name: String::new(),
                    values: values_from_assignments(&values)?,
                }),
                ..Default::default()
            };
            request.set_view(view(column_ids));
            let row = client.create_row(request).await?;
            info!(row = %row.name, "created row");
            printer.row(&row)?;
        }

        RowsCommand::BatchCreate { table, rows } => {
            let parent = table_name(&table)?;
            let requests = rows
                .iter()
                .map(|raw| -> Result<CreateRowRequest> {
                    let json: serde_json::Value = serde_json::from_str(raw)
                        .with_context(|| format!("Invalid row JSON: {}", raw))?;
                    Ok(CreateRowRequest {
                        parent: parent.clone(),
                        row: Some(Row {
                            name: String::new(),
                            values: values_from_json(&json)?,
                        }),
                        ..Default::default()
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            let response = client
                .batch_create_rows(BatchCreateRowsRequest { parent, requests })
                .await?;
            info!(count = response.rows.len(), "created rows");
            for row in &response.rows {
                printer.row(row)?;
            }
        }

        RowsCommand::Update {
            row,
            values,
            mask,
            column_ids,
        } => {
            let update_mask = if mask.is_empty() {
                None
            } else {
                Some(FieldMask { paths: mask })
            };
            let mut request = UpdateRowRequest {
                row: Some(Row {
                    name: row_name(&row)?,
                    values: values_from_assignments(&values)?,
                }),
                update_mask,
                ..Default::default()
            };
            request.set_view(view(column_ids));
            let row = client.update_row(request).await?;
            printer.row(&row)?;
        }

        RowsCommand::BatchUpdate { table, rows } => {
            let parent = table_name(&table)?;
            let requests = rows
                .iter()
                .map(|raw| parse_row_update(raw))
                .collect::<Result<Vec<_>>>()?;
            let response = client
                .batch_update_rows(BatchUpdateRowsRequest { parent, requests })
                .await?;
            info!(count = response.rows.len(), "updated rows");
            for row in &response.rows {
                printer.row(row)?;
            }
        }

        RowsCommand::Delete { row } => {
            let name = row_name(&row)?;
            client.delete_row(DeleteRowRequest { name: name.clone() }).await?;
            printer.done(&format!("Deleted {}", name));
        }

        RowsCommand::BatchDelete { table, rows } => {
            let parent = table_name(&table)?;
            let names = rows
                .iter()
                .map(|r| row_name(r))
                .collect::<Result<Vec<_>, _>>()?;
            let count = names.len();
            client
                .batch_delete_rows(BatchDeleteRowsRequest { parent, names })
                .await?;
            printer.done(&format!("Deleted {} rows", count));
        }
    }
    Ok(())
}

/// Parse `NAME=JSON` into an update request for that row.
fn parse_row_update(raw: &str) -> Result<UpdateRowRequest> {
    let (name, json) = raw
        .split_once('=')
        .with_context(|| format!("Expected ROW_NAME=JSON, got '{}'", raw))?;
    let json: serde_json::Value =
        serde_json::from_str(json).with_context(|| format!("Invalid row JSON for {}", name))?;
    Ok(UpdateRowRequest {
        row: Some(Row {
            name: row_name(name)?,
            values: values_from_json(&json)?,
        }),
        ..Default::default()
    })
}
