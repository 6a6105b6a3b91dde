use serde_json::Value;

/// Flattens a stored genre value into plain labels
///
/// The catalog has accumulated several shapes over time: arrays of strings,
/// arrays of `{ "id": .., "name": .. }` objects, and delimited strings.
/// Labels are trimmed, empty ones dropped, and exact duplicates removed
/// keeping the first occurrence.
pub fn normalize_genres(raw: &Value) -> Vec<String> {
    let labels: Vec<&str> = match raw {
        Value::Array(items) => items.iter().filter_map(label_of).collect(),
        Value::String(s) => s.split([',', '|']).collect(),
        _ => Vec::new(),
    };

    let mut genres: Vec<String> = Vec::with_capacity(labels.len());
    for label in labels {
        let label = label.trim();
        if !label.is_empty() && !genres.iter().any(|g| g == label) {
            genres.push(label.to_string());
        }
    }
    genres
}

fn label_of(item: &Value) -> Option<&str> {
    match item {
        Value::String(s) => Some(s.as_str()),
        Value::Object(map) => map.get("name").and_then(Value::as_str),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_of_strings() {
        assert_eq!(
            normalize_genres(&json!(["Action", "Comedy"])),
            vec!["Action", "Comedy"]
        );
    }

    #[test]
    fn test_array_of_objects() {
        let raw = json!([
            {"id": 28, "name": "Action"},
            {"id": 18, "name": "Drama"},
            {"id": 99}
        ]);
        assert_eq!(normalize_genres(&raw), vec!["Action", "Drama"]);
    }

    #[test]
    fn test_mixed_array_skips_non_labels() {
        let raw = json!(["Horror", 12, null, {"name": "Thriller"}]);
        assert_eq!(normalize_genres(&raw), vec!["Horror", "Thriller"]);
    }

    #[test]
    fn test_delimited_string() {
        assert_eq!(
            normalize_genres(&json!("Drama, Romance|War")),
            vec!["Drama", "Romance", "War"]
        );
    }

    #[test]
    fn test_trims_and_dedupes_preserving_order() {
        let raw = json!([" Drama ", "Comedy", "Drama", "", "  "]);
        assert_eq!(normalize_genres(&raw), vec!["Drama", "Comedy"]);
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        assert_eq!(
            normalize_genres(&json!(["Drama", "drama"])),
            vec!["Drama", "drama"]
        );
    }

    #[test]
    fn test_null_and_other_shapes_are_empty() {
        assert!(normalize_genres(&Value::Null).is_empty());
        assert!(normalize_genres(&json!(42)).is_empty());
        assert!(normalize_genres(&json!({"name": "Action"})).is_empty());
    }
}
