//! URL record entity: a stored alias → destination mapping.

/// A persisted alias mapping.
///
/// `id` is assigned by the store and never reused; `alias` is unique across
/// all records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub alias: String,
    pub url: String,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: i64, alias: String, url: String) -> Self {
        Self { id, alias, url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_record_creation() {
        let record = UrlRecord::new(
            7,
            "ex1".to_string(),
            "https://example.com".to_string(),
        );

        assert_eq!(record.id, 7);
        assert_eq!(record.alias, "ex1");
        assert_eq!(record.url, "https://example.com");
    }
}
