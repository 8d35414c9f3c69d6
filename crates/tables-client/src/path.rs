// ABOUTME: Resource name templates for tables, rows, and workspaces
// ABOUTME: Builds and parses names like tables/{table}/rows/{row}

use crate::error::ClientError;

/// `tables/{table}`
pub fn table_path(table: &str) -> String {
    format!("tables/{}", table)
}

/// `tables/{table}/rows/{row}`
pub fn row_path(table: &str, row: &str) -> String {
    format!("tables/{}/rows/{}", table, row)
}

/// `workspaces/{workspace}`
pub fn workspace_path(workspace: &str) -> String {
    format!("workspaces/{}", workspace)
}

pub fn common_billing_account_path(billing_account: &str) -> String {
    format!("billingAccounts/{}", billing_account)
}

pub fn common_folder_path(folder: &str) -> String {
    format!("folders/{}", folder)
}

pub fn common_organization_path(organization: &str) -> String {
    format!("organizations/{}", organization)
}

pub fn common_project_path(project: &str) -> String {
    format!("projects/{}", project)
}

pub fn common_location_path(project: &str, location: &str) -> String {
    format!("projects/{}/locations/{}", project, location)
}

/// Split `path` against a template of literal collection names, returning
/// the ids in between. Each id must be a single non-empty segment.
fn match_segments<'a, const N: usize>(path: &'a str, collections: [&str; N]) -> Option<[&'a str; N]> {
    let mut parts = path.split('/');
    let mut ids = [""; N];
    for (slot, collection) in ids.iter_mut().zip(collections) {
        if parts.next()? != collection {
            return None;
        }
        let id = parts.next()?;
        if id.is_empty() {
            return None;
        }
        *slot = id;
    }
    match parts.next() {
        Some(_) => None,
        None => Some(ids),
    }
}

/// Table id from `tables/{table}`.
pub fn parse_table_path(path: &str) -> Option<&str> {
    match_segments(path, ["tables"]).map(|[table]| table)
}

/// Table and row ids from `tables/{table}/rows/{row}`.
pub fn parse_row_path(path: &str) -> Option<(&str, &str)> {
    match_segments(path, ["tables", "rows"]).map(|[table, row]| (table, row))
}

/// Workspace id from `workspaces/{workspace}`.
pub fn parse_workspace_path(path: &str) -> Option<&str> {
    match_segments(path, ["workspaces"]).map(|[workspace]| workspace)
}

pub fn parse_common_billing_account_path(path: &str) -> Option<&str> {
    match_segments(path, ["billingAccounts"]).map(|[id]| id)
}

pub fn parse_common_folder_path(path: &str) -> Option<&str> {
    match_segments(path, ["folders"]).map(|[id]| id)
}

pub fn parse_common_organization_path(path: &str) -> Option<&str> {
    match_segments(path, ["organizations"]).map(|[id]| id)
}

pub fn parse_common_project_path(path: &str) -> Option<&str> {
    match_segments(path, ["projects"]).map(|[id]| id)
}

pub fn parse_common_location_path(path: &str) -> Option<(&str, &str)> {
    match_segments(path, ["projects", "locations"]).map(|[project, location]| (project, location))
}

/// Accept either a bare table id or a full table name.
pub fn table_name(input: &str) -> Result<String, ClientError> {
    resolve(input, parse_table_path, table_path)
}

/// Accept either a bare workspace id or a full workspace name.
pub fn workspace_name(input: &str) -> Result<String, ClientError> {
    resolve(input, parse_workspace_path, workspace_path)
}

/// Validate a full row name.
pub fn row_name(input: &str) -> Result<String, ClientError> {
    let input = input.trim();
    parse_row_path(input)
        .map(|_| input.to_string())
        .ok_or_else(|| ClientError::InvalidResourceName(input.to_string()))
}

fn resolve(
    input: &str,
    parse: fn(&str) -> Option<&str>,
    build: fn(&str) -> String,
) -> Result<String, ClientError> {
    let input = input.trim();
    if parse(input).is_some() {
        return Ok(input.to_string());
    }
    if input.is_empty() || input.contains('/') {
        return Err(ClientError::InvalidResourceName(input.to_string()));
    }
    Ok(build(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_path() {
        assert_eq!(row_path("squid", "clam"), "tables/squid/rows/clam");
    }

    #[test]
    fn test_parse_row_path_reverses() {
        let path = row_path("whelk", "octopus");
        assert_eq!(parse_row_path(&path), Some(("whelk", "octopus")));
    }

    #[test]
    fn test_table_path_roundtrip() {
        assert_eq!(table_path("oyster"), "tables/oyster");
        assert_eq!(parse_table_path("tables/nudibranch"), Some("nudibranch"));
    }

    #[test]
    fn test_workspace_path_roundtrip() {
        assert_eq!(workspace_path("ws1"), "workspaces/ws1");
        assert_eq!(parse_workspace_path("workspaces/ws1"), Some("ws1"));
    }

    #[test]
    fn test_common_paths() {
        assert_eq!(common_billing_account_path("cuttlefish"), "billingAccounts/cuttlefish");
        assert_eq!(common_folder_path("mussel"), "folders/mussel");
        assert_eq!(common_organization_path("winkle"), "organizations/winkle");
        assert_eq!(common_project_path("nautilus"), "projects/nautilus");
        assert_eq!(
            common_location_path("scallop", "abalone"),
            "projects/scallop/locations/abalone"
        );

        assert_eq!(parse_common_billing_account_path("billingAccounts/x"), Some("x"));
        assert_eq!(parse_common_folder_path("folders/x"), Some("x"));
        assert_eq!(parse_common_organization_path("organizations/x"), Some("x"));
        assert_eq!(parse_common_project_path("projects/x"), Some("x"));
        assert_eq!(
            parse_common_location_path("projects/p/locations/l"),
            Some(("p", "l"))
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_table_path("tables/"), None);
        assert_eq!(parse_table_path("tables/a/b"), None);
        assert_eq!(parse_table_path("rows/a"), None);
        assert_eq!(parse_table_path(""), None);
        assert_eq!(parse_row_path("tables/a/rows"), None);
        assert_eq!(parse_row_path("tables/a/rows/"), None);
        assert_eq!(parse_row_path("tables//rows/r"), None);
        assert_eq!(parse_row_path("tables/a/cols/r"), None);
        assert_eq!(parse_workspace_path("workspaces/a/tables/b"), None);
    }

    #[test]
    fn test_table_name_accepts_id_or_name() {
        assert_eq!(table_name("abc").unwrap(), "tables/abc");
        assert_eq!(table_name("tables/abc").unwrap(), "tables/abc");
        assert_eq!(table_name(" abc ").unwrap(), "tables/abc");
        assert!(table_name("").is_err());
        assert!(table_name("tables/abc/rows/r").is_err());
    }

    #[test]
    fn test_workspace_name_accepts_id_or_name() {
        assert_eq!(workspace_name("w").unwrap(), "workspaces/w");
        assert_eq!(workspace_name("workspaces/w").unwrap(), "workspaces/w");
        assert!(workspace_name("workspaces/").is_err());
    }

    #[test]
    fn test_row_name_requires_full_name() {
        assert_eq!(row_name("tables/t/rows/r").unwrap(), "tables/t/rows/r");
        assert!(matches!(
            row_name("r"),
            Err(ClientError::InvalidResourceName(_))
        ));
    }
}
