use serde::{Deserialize, Serialize};

/// Category label substituted at render time when a record carries none.
pub const DEFAULT_CATEGORY: &str = "Genel";

/// One catalog entry describing a single PDF asset and its display metadata.
///
/// `title` and `file` are required; a manifest missing either is malformed
/// and fails to parse. Records are value objects — the catalog never mutates
/// them after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    /// Relative path to the PDF asset, resolved against the hosting location.
    pub file: String,
    /// Relative path to a cover image, when one was paired with the PDF.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Calendar year the record was generated. Informational only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Reserved for future filtering; the renderer ignores these.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Book {
    /// Category used for grouping and display, falling back to the default
    /// label when the record has none (or an empty one).
    pub fn category_label(&self) -> &str {
        self.category
            .as_deref()
            .filter(|category| !category.is_empty())
            .unwrap_or(DEFAULT_CATEGORY)
    }
}
