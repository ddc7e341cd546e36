//! Cursor-based pagination shared by every list endpoint.

use serde::{Deserialize, Serialize};

/// Default page size applied by the CLI.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Options sent with a list request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Number of records per page.
    pub per_page: Option<u32>,
    /// Opaque continuation token from a previous page.
    pub cursor: Option<String>,
}

impl ListOptions {
    /// Query parameters for these options.
    ///
    /// An empty cursor is treated as unset.
    #[must_use]
    pub fn query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(per_page) = self.per_page {
            query.push(("per_page".to_string(), per_page.to_string()));
        }
        if let Some(cursor) = self.cursor.as_deref().filter(|c| !c.is_empty()) {
            query.push(("cursor".to_string(), cursor.to_string()));
        }
        query
    }
}

/// Paging metadata returned alongside list results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Total number of records across all pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// Cursors for neighbouring pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// Next/previous cursors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    /// Cursor for the next page, empty on the last page.
    #[serde(default)]
    pub next: String,
    /// Cursor for the previous page, empty on the first page.
    #[serde(default)]
    pub prev: String,
}

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Records on this page.
    pub items: Vec<T>,
    /// Paging metadata, if the endpoint returned any.
    pub meta: Option<Meta>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            meta: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_includes_per_page_and_cursor() {
        let options = ListOptions {
            per_page: Some(25),
            cursor: Some("bmV4dF9fYWJj".into()),
        };
        assert_eq!(
            options.query(),
            vec![
                ("per_page".to_string(), "25".to_string()),
                ("cursor".to_string(), "bmV4dF9fYWJj".to_string()),
            ]
        );
    }

    #[test]
    fn empty_cursor_is_omitted() {
        let options = ListOptions {
            per_page: Some(100),
            cursor: Some(String::new()),
        };
        assert_eq!(
            options.query(),
            vec![("per_page".to_string(), "100".to_string())]
        );
    }

    #[test]
    fn default_options_send_nothing() {
        assert!(ListOptions::default().query().is_empty());
    }

    #[test]
    fn meta_decodes_vultr_shape() {
        let meta: Meta = serde_json::from_str(
            r#"{"total": 3, "links": {"next": "abc", "prev": ""}}"#,
        )
        .expect("valid meta");
        assert_eq!(meta.total, Some(3));
        let links = meta.links.expect("links");
        assert_eq!(links.next, "abc");
        assert!(links.prev.is_empty());
    }

    #[test]
    fn meta_with_total_only() {
        let meta: Meta = serde_json::from_str(r#"{"total": 7}"#).expect("valid meta");
        assert_eq!(meta.total, Some(7));
        assert!(meta.links.is_none());
    }
}
