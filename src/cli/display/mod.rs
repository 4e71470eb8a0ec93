//! Display framework for CLI output formatting.
//!
//! Provides shared primitives for tables, detail views and JSON output
//! used across all CLI command output.

pub mod detail;
pub mod table;

use serde::Serialize;
use serde_json::Value;

pub use detail::*;
pub use table::*;

/// Pretty-print any serializable value as JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render one attribute value for a table cell.
///
/// Strings are shown raw, `null` as empty, lists one element per line and
/// nested objects as compact JSON.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(items) => items
            .iter()
            .map(format_value)
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!(null)), "");
        assert_eq!(format_value(&json!("acl a")), "acl a");
        assert_eq!(format_value(&json!(true)), "true");
        assert_eq!(format_value(&json!(["a", "b"])), "a\nb");
        assert_eq!(format_value(&json!({"k": 1})), r#"{"k":1}"#);
    }
}
