use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A list of strings stored as a JSON column.
///
/// Postgres could use a native text array here, but the JSON encoding keeps the
/// schema portable to SQLite, which the test suite runs against.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult, ToSchema,
)]
pub struct StringList(pub Vec<String>);

impl StringList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|s| s == value)
    }
}

impl From<Vec<String>> for StringList {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl From<Vec<&str>> for StringList {
    fn from(values: Vec<&str>) -> Self {
        Self(values.into_iter().map(String::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_list_roundtrips_through_json() {
        let list = StringList::from(vec!["Python", "SQL"]);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"["Python","SQL"]"#);
        let back: StringList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }

    #[test]
    fn string_list_contains_is_exact() {
        let list = StringList::from(vec!["Python"]);
        assert!(list.contains("Python"));
        assert!(!list.contains("python"));
    }
}
