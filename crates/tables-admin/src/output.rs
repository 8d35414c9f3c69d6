// ABOUTME: Terminal and JSON rendering for tables, workspaces, and rows
// ABOUTME: Text output uses colored; --json emits one object per line

use anyhow::Result;
use colored::Colorize;
use serde_json::json;
use tables_client::proto::{ColumnDescription, Row, Table, Workspace};
use tables_client::value::values_to_json;

pub fn column_json(column: &ColumnDescription) -> serde_json::Value {
    let mut value = json!({
        "name": column.name,
        "id": column.id,
        "dataType": column.data_type,
    });
    if !column.labels.is_empty() {
        value["labels"] = column
            .labels
            .iter()
            .map(|l| json!({"name": l.name, "id": l.id}))
            .collect();
    }
    if let Some(rel) = &column.relationship_details {
        value["relationshipDetails"] = json!({"linkedTable": rel.linked_table});
    }
    if let Some(lookup) = &column.lookup_details {
        value["lookupDetails"] = json!({
            "relationshipColumn": lookup.relationship_column,
            "relationshipColumnId": lookup.relationship_column_id,
        });
    }
    value
}

pub fn table_json(table: &Table) -> serde_json::Value {
    json!({
        "name": table.name,
        "displayName": table.display_name,
        "columns": table.columns.iter().map(column_json).collect::<Vec<_>>(),
    })
}

pub fn workspace_json(workspace: &Workspace) -> serde_json::Value {
    json!({
        "name": workspace.name,
        "displayName": workspace.display_name,
        "tables": workspace.tables.iter().map(table_json).collect::<Vec<_>>(),
    })
}

pub fn row_json(row: &Row) -> Result<serde_json::Value> {
    Ok(json!({
        "name": row.name,
        "values": values_to_json(&row.values)?,
    }))
}

/// Renders results in the format chosen on the command line.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    pub json: bool,
}

impl Printer {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn table(&self, table: &Table, detailed: bool) {
        if self.json {
            println!("{}", table_json(table));
            return;
        }
        println!(
            "{} {}",
            table.display_name.bold(),
            format!("({})", table.name).dimmed()
        );
        if detailed {
            for column in &table.columns {
                println!(
                    "    {} {} {}",
                    column.name,
                    column.data_type.cyan(),
                    format!("[{}]", column.id).dimmed()
                );
                if let Some(rel) = &column.relationship_details {
                    println!("        {}: {}", "Linked table".dimmed(), rel.linked_table);
                }
                if let Some(lookup) = &column.lookup_details {
                    println!(
                        "        {}: {}",
                        "Lookup via".dimmed(),
                        lookup.relationship_column
                    );
                }
            }
        }
    }

    pub fn workspace(&self, workspace: &Workspace, detailed: bool) {
        if self.json {
            println!("{}", workspace_json(workspace));
            return;
        }
        println!(
            "{} {}",
            workspace.display_name.bold(),
            format!("({})", workspace.name).dimmed()
        );
        if detailed {
            for table in &workspace.tables {
                println!(
                    "    {} {}",
                    table.display_name,
                    format!("({})", table.name).dimmed()
                );
            }
        }
    }

    pub fn row(&self, row: &Row) -> Result<()> {
        let rendered = row_json(row)?;
        if self.json {
            println!("{}", rendered);
            return Ok(());
        }
        println!("{}", row.name.bold());
        if let Some(values) = rendered["values"].as_object() {
            for (column, value) in values {
                println!("    {}: {}", column.dimmed(), value);
            }
        }
        Ok(())
    }

    /// Header printed before each page in page mode.
    pub fn page_header(&self, index: usize, items: usize, next_token: &str) {
        if self.json {
            println!(
                "{}",
                json!({"page": index, "items": items, "nextPageToken": next_token})
            );
            return;
        }
        let next = if next_token.is_empty() {
            "last page".dimmed().to_string()
        } else {
            format!("next token {}", next_token).dimmed().to_string()
        };
        println!("{} ({} items, {})", format!("Page {}", index).bold(), items, next);
    }

    pub fn empty(&self, what: &str) {
        if !self.json {
            println!("{}", format!("No {} found", what).dimmed());
        }
    }

    pub fn done(&self, message: &str) {
        if self.json {
            println!("{}", json!({"status": "ok", "message": message}));
        } else {
            println!("{} {}", "✓".green(), message);
        }
    }
}
