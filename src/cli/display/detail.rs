//! Field/Value view of a single resource.

use comfy_table::Table;
use serde_json::{Map, Value};

use super::{format_value, list_table};

/// Render a member as a two-column Field/Value table, fields sorted.
pub fn detail_table(member: &Value) -> Table {
    let mut table = list_table(&["Field", "Value"]);
    let empty = Map::new();
    let fields = member.as_object().unwrap_or(&empty);

    let mut keys: Vec<&String> = fields.keys().collect();
    keys.sort();
    for key in keys {
        table.add_row(vec![key.clone(), format_value(&fields[key])]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_table_sorted() {
        let rendered = detail_table(&json!({"rule": "acl a", "id": "r1", "admin_state_up": false}))
            .to_string();
        let admin = rendered.find("admin_state_up").unwrap();
        let id = rendered.find("| id").unwrap();
        let rule = rendered.find("| rule").unwrap();
        assert!(admin < id && id < rule);
        assert!(rendered.contains("false"));
    }
}
