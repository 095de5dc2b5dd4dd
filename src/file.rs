//! Configuration file loading.
//!
//! A file is named by the reserved `config` flag/key and loaded during
//! resolver construction. The format is picked by extension: `.json` parses
//! as JSON (bridged into the TOML value model over serde), everything else
//! parses as TOML.
//!
//! Keys in the file address flags by qualified name. Nested tables flatten
//! by underscore-joining, so a `[primary]` table with a `dbhost` key feeds
//! the `primary_dbhost` flag, lining file sections up with the engine's
//! prefix composition. Flat keys work unchanged.
//!
//! Three failure cases, each its own error: the file is missing, the file
//! exists but cannot be read, the file reads but does not parse.

use std::path::Path;

use toml::{Table, Value};

use crate::error::StrataError;

/// Read, parse, and flatten the configuration file at `path`.
pub(crate) fn load(path: &Path) -> Result<Table, StrataError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(StrataError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(StrataError::FileRead {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    let table = parse(path, &content)?;
    tracing::debug!(path = %path.display(), keys = table.len(), "loaded configuration file");
    Ok(flatten(table))
}

fn parse(path: &Path, content: &str) -> Result<Table, StrataError> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "json" => serde_json::from_str::<Table>(content).map_err(|e| StrataError::FileParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
        _ => toml::from_str::<Table>(content).map_err(|e| StrataError::FileParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}

/// Flatten nested tables into underscore-joined top-level keys.
fn flatten(table: Table) -> Table {
    let mut flat = Table::new();
    flatten_into(&mut flat, "", table);
    flat
}

fn flatten_into(flat: &mut Table, prefix: &str, table: Table) {
    for (key, value) in table {
        let qualified = if prefix.is_empty() {
            key
        } else {
            format!("{prefix}_{key}")
        };
        match value {
            Value::Table(nested) => flatten_into(flat, &qualified, nested),
            other => {
                flat.insert(qualified, other);
            }
        }
    }
}
