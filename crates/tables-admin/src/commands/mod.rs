// ABOUTME: CLI command definitions using clap
// ABOUTME: Defines subcommands for tables, workspaces, and rows

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tables_client::{AsyncPager, Invoker, PagedRequest, PagedResponse};
use tracing::debug;

use crate::output::Printer;

pub mod rows;
pub mod tables;
pub mod workspaces;

#[derive(Parser)]
#[command(name = "tables-admin", about = "Admin CLI for the Area120 Tables API", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Service endpoint (e.g., https://area120tables.googleapis.com:443)
    #[arg(long, global = true, env = "AREA120_TABLES_ENDPOINT")]
    pub endpoint: Option<String>,

    /// OAuth access token sent as a Bearer credential
    #[arg(long, global = true, env = "AREA120_TABLES_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Per-attempt deadline in seconds
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Total attempts for calls failing with UNAVAILABLE or DEADLINE_EXCEEDED (0 disables retry)
    #[arg(long, global = true)]
    pub retries: Option<u32>,

    /// Config file (default: ~/.config/area120-tables/config.toml)
    #[arg(long, global = true, env = "AREA120_TABLES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print results as JSON, one object per line
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Manage tables
    #[command(subcommand)]
    Tables(TablesCommand),

    /// Manage workspaces
    #[command(subcommand)]
    Workspaces(WorkspacesCommand),

    /// Manage rows
    #[command(subcommand)]
    Rows(RowsCommand),
}

/// Paging options shared by list commands.
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Maximum items per page requested from the server
    #[arg(long)]
    pub page_size: Option<i32>,

    /// Print page by page, with each page's next token
    #[arg(long)]
    pub pages: bool,

    /// Stop after this many items
    #[arg(long)]
    pub limit: Option<usize>,
}

impl PageArgs {
    pub fn page_size(&self) -> i32 {
        self.page_size.unwrap_or(0)
    }
}

/// Drain a pager to the terminal, item by item or page by page, stopping
/// at the limit. Returns the number of items printed.
pub(crate) async fn print_listing<Req, Resp, I, F>(
    mut pager: AsyncPager<Req, Resp, I>,
    paging: &PageArgs,
    printer: Printer,
    what: &str,
    mut print: F,
) -> Result<usize>
where
    Req: PagedRequest,
    Resp: PagedResponse,
    I: Invoker<Req, Resp>,
    F: FnMut(&Resp::Item) -> Result<()>,
{
    let limit = paging.limit.unwrap_or(usize::MAX);
    let mut shown = 0;

    if paging.pages {
        let mut index = 0;
        while shown < limit {
            let Some(page) = pager.next_page().await else {
                break;
            };
            let page = page?;
            printer.page_header(index, page.items().len(), page.next_page_token());
            for item in page.items().iter().take(limit - shown) {
                print(item)?;
                shown += 1;
            }
            index += 1;
        }
    } else {
        while shown < limit {
            let Some(item) = pager.next_item().await else {
                break;
            };
            print(&item?)?;
            shown += 1;
        }
    }

    if shown == 0 {
        printer.empty(what);
    }
    debug!(shown, pages = pager.pages_fetched(), what, "listing finished");
    Ok(shown)
}

#[derive(Subcommand)]
pub enum TablesCommand {
    /// List tables
    List {
        #[command(flatten)]
        paging: PageArgs,
    },

    /// Show a table and its columns
    Get {
        /// Table id or name (tables/{table})
        table: String,
    },
}

#[derive(Subcommand)]
pub enum WorkspacesCommand {
    /// List workspaces
    List {
        #[command(flatten)]
        paging: PageArgs,
    },

    /// Show a workspace and its tables
    Get {
        /// Workspace id or name (workspaces/{workspace})
        workspace: String,
    },
}

#[derive(Subcommand)]
pub enum RowsCommand {
    /// List rows of a table
    List {
        /// Table id or name
        table: String,

        /// Filter expression, e.g. 'values."Status" = "Open"'
        #[arg(long)]
        filter: Option<String>,

        /// Key values by column id instead of column name
        #[arg(long)]
        column_ids: bool,

        #[command(flatten)]
        paging: PageArgs,
    },

    /// Show a row
    Get {
        /// Row name (tables/{table}/rows/{row})
        row: String,

        #[arg(long)]
        column_ids: bool,
    },

    /// Create a row
    Create {
        /// Table id or name
        table: String,

        /// Cell assignment column=value; value is JSON or a plain string
        #[arg(long = "value", value_name = "COLUMN=VALUE", required = true)]
        values: Vec<String>,

        #[arg(long)]
        column_ids: bool,
    },

    /// Create several rows in one call
    BatchCreate {
        /// Table id or name
        table: String,

        /// Row values as a JSON object; repeat for each row
        #[arg(long = "row", value_name = "JSON", required = true)]
        rows: Vec<String>,
    },

    /// Update a row
    Update {
        /// Row name (tables/{table}/rows/{row})
        row: String,

        /// Cell assignment column=value; value is JSON or a plain string
        #[arg(long = "value", value_name = "COLUMN=VALUE", required = true)]
        values: Vec<String>,

        /// Field paths to update; all given values when omitted
        #[arg(long, value_delimiter = ',')]
        mask: Vec<String>,

        #[arg(long)]
        column_ids: bool,
    },

    /// Update several rows in one call
    BatchUpdate {
        /// Table id or name
        table: String,

        /// Row update as ROW_NAME=JSON_OBJECT; repeat for each row
        #[arg(long = "row", value_name = "NAME=JSON", required = true)]
        rows: Vec<String>,
    },

    /// Delete a row
    Delete {
        /// Row name (tables/{table}/rows/{row})
        row: String,
    },

    /// Delete several rows of a table in one call
    BatchDelete {
        /// Table id or name
        table: String,

        /// Row names to delete
        #[arg(required = true)]
        rows: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_rows_list() {
        let cli = Cli::try_parse_from([
            "tables-admin",
            "rows",
            "list",
            "t1",
            "--page-size",
            "50",
            "--pages",
            "--filter",
            "values.\"A\" = 1",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Rows(RowsCommand::List {
                table,
                filter,
                column_ids,
                paging,
            }) => {
                assert_eq!(table, "t1");
                assert_eq!(filter.as_deref(), Some("values.\"A\" = 1"));
                assert!(!column_ids);
                assert_eq!(paging.page_size, Some(50));
                assert!(paging.pages);
                assert!(paging.limit.is_none());
            }
            _ => panic!("expected rows list"),
        }
    }

    #[test]
    fn test_parse_update_mask_list() {
        let cli = Cli::try_parse_from([
            "tables-admin",
            "--endpoint",
            "http://localhost:9000",
            "rows",
            "update",
            "tables/t/rows/r",
            "--value",
            "A=1",
            "--mask",
            "values.A,values.B",
        ])
        .unwrap();

        assert_eq!(cli.endpoint.as_deref(), Some("http://localhost:9000"));
        match cli.command {
            Command::Rows(RowsCommand::Update { mask, values, .. }) => {
                assert_eq!(mask, vec!["values.A", "values.B"]);
                assert_eq!(values, vec!["A=1"]);
            }
            _ => panic!("expected rows update"),
        }
    }

    #[test]
    fn test_create_requires_values() {
        assert!(Cli::try_parse_from(["tables-admin", "rows", "create", "t1"]).is_err());
    }

    #[test]
    fn test_timeout_must_be_positive() {
        let err = Cli::try_parse_from(["tables-admin", "--timeout", "0", "tables", "list"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);

        let cli = Cli::try_parse_from(["tables-admin", "tables", "list", "--timeout", "5"]).unwrap();
        assert_eq!(cli.timeout, Some(5));

        let cli = Cli::try_parse_from(["tables-admin", "tables", "list"]).unwrap();
        assert!(cli.timeout.is_none());
    }
}
