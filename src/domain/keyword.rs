use serde::{Deserialize, Serialize};

/// One row of the "top keywords" table, as rendered by the source page.
///
/// All fields are free text; nothing is parsed or validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordRow {
    pub keyword: String,
    pub traffic: String,
    pub cpc: String,
}

impl KeywordRow {
    pub fn new(
        keyword: impl Into<String>,
        traffic: impl Into<String>,
        cpc: impl Into<String>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            traffic: traffic.into(),
            cpc: cpc.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_plain_field_names() {
        let row = KeywordRow::new("seo tools", "10K", "1.20");
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"keyword": "seo tools", "traffic": "10K", "cpc": "1.20"})
        );
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let row: KeywordRow = serde_json::from_str(r#"{"keyword": "only keyword"}"#).unwrap();
        assert_eq!(row.keyword, "only keyword");
        assert_eq!(row.traffic, "");
        assert_eq!(row.cpc, "");
    }
}
