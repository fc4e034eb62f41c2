pub(crate) mod metrics;
pub(crate) mod trace_root;

use once_cell::sync::Lazy;
use regex::Regex;

static OBJECT_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[0-9a-fA-F]{24}\b").expect("Invalid ObjectId regex"));

/// Collapses todo ids in a path so span and metric labels stay low-cardinality.
pub(crate) fn normalize_uri(path: &str) -> String {
    let path = path.split('?').next().unwrap_or(path);
    OBJECT_ID_REGEX.replace_all(path, "{todo_id}").to_string()
}

#[cfg(test)]
mod tests {
    use super::normalize_uri;

    #[test]
    fn normalize_uri_test() {
        let ok_str = normalize_uri("/todos/664db3bc169ce6cb3c60a3a7");
        assert_eq!(ok_str, "/todos/{todo_id}");
    }

    #[test]
    fn normalize_uri_keeps_other_paths() {
        assert_eq!(normalize_uri("/todos"), "/todos");
        assert_eq!(normalize_uri("/todos/not-an-id"), "/todos/not-an-id");
    }

    #[test]
    fn normalize_uri_drops_query() {
        assert_eq!(normalize_uri("/todos?done=true"), "/todos");
    }
}
