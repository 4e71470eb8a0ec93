//! Table builder wrapper around comfy-table for consistent list display.

use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};
use console::style;
use serde_json::Value;

use super::format_value;

/// Create a standard list table with the given headers.
pub fn list_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::ASCII_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).set_alignment(CellAlignment::Left)),
        );
    table
}

/// Build a list table from raw members, one row per member.
///
/// Missing attributes render as empty cells.
pub fn members_table(columns: &[&str], members: &[Value]) -> Table {
    let mut table = list_table(columns);
    for member in members {
        table.add_row(
            columns
                .iter()
                .map(|c| Cell::new(member.get(*c).map(format_value).unwrap_or_default())),
        );
    }
    table
}

/// Render the table to string with a count header.
pub fn render_list(entity_name: &str, table: &Table, total: usize) -> String {
    if total == 0 {
        return format!("No {entity_name}s found.");
    }
    let count_line = format!(
        "{} {}:",
        style(total).bold(),
        if total == 1 {
            entity_name.to_string()
        } else {
            format!("{entity_name}s")
        }
    );
    format!("{count_line}\n{table}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_members_table_fills_missing_cells() {
        let members = vec![
            json!({"id": "r1", "rule": "acl a", "admin_state_up": true}),
            json!({"id": "r2", "name": "second"}),
        ];
        let rendered = members_table(&["id", "name", "rule"], &members).to_string();
        assert!(rendered.contains("r1"));
        assert!(rendered.contains("acl a"));
        assert!(rendered.contains("second"));
    }

    #[test]
    fn test_render_list_empty() {
        let table = list_table(&["id"]);
        assert_eq!(render_list("rule", &table, 0), "No rules found.");
    }
}
