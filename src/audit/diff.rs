//! Diff generation for audit logging

use serde_json::Value;

/// Generate a human-readable diff between two JSON values
///
/// Only top-level field changes are reported.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if after_val != before_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!(
                        "{}: {} -> (removed)",
                        key,
                        format_value(before_val)
                    )),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ if before != after => Some(format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )),
        _ => None,
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            if s.chars().count() > 50 {
                let head: String = s.chars().take(47).collect();
                format!("\"{}...\"", head)
            } else {
                format!("\"{}\"", s)
            }
        }
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_changes() {
        let before = json!({"name": "Milk", "amount": 2.99, "completed": false});
        let after = json!({"name": "Oat milk", "amount": 2.99, "completed": true});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("name: \"Milk\" -> \"Oat milk\""));
        assert!(diff.contains("completed: false -> true"));
        assert!(!diff.contains("amount"));
    }

    #[test]
    fn test_added_and_removed() {
        let before = json!({"a": 1, "old": "x"});
        let after = json!({"a": 1, "new": null});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("old: \"x\" -> (removed)"));
        assert!(diff.contains("new: (added) -> null"));
    }

    #[test]
    fn test_scalar_change() {
        assert_eq!(
            generate_diff(&json!(500), &json!(650)).as_deref(),
            Some("500 -> 650")
        );
        assert!(generate_diff(&json!(500), &json!(500)).is_none());
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"name": "Test", "items": [1, 2]});
        assert!(generate_diff(&value, &value).is_none());
    }

    #[test]
    fn test_long_string_truncation() {
        let before = json!({"name": "é".repeat(100)});
        let after = json!({"name": "short"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("...\""));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!(null)), "null");
        assert_eq!(format_value(&json!(12.5)), "12.5");
        assert_eq!(format_value(&json!([1, 2, 3])), "[3 items]");
        assert_eq!(format_value(&json!({"a": 1, "b": 2})), "{2 fields}");
    }
}
