use serde::{Deserialize, Serialize};

/// Sentinel written into a row cell when an optional media step produced nothing.
pub const FAILED_SENTINEL: &str = "FAILED";

/// Spreadsheet cell size limit; longer strings are truncated before append.
pub const MAX_CELL_LEN: usize = 49_000;

/// A group of raw queries merged under one representative title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordCluster {
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl KeywordCluster {
    /// Identity cluster used when the clustering service is unavailable.
    pub fn passthrough(query: &str) -> Self {
        Self {
            title: query.to_string(),
            tags: Vec::new(),
        }
    }
}

/// A cluster title after scoring, ready for content generation.
#[derive(Debug, Clone)]
pub struct ScoredKeyword {
    pub query: String,
    pub title: String,
    pub tags: Vec<String>,
    pub score: f64,
}

/// Everything the language model produces for one keyword in a single call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub title: String,
    pub thumbnail_text: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub script: String,
}

impl VideoMetadata {
    /// Placeholder metadata when generation fails; keeps the pipeline moving.
    pub fn placeholder(keyword: &str) -> Self {
        Self {
            title: keyword.to_string(),
            thumbnail_text: keyword.chars().take(25).collect(),
            description: String::new(),
            tags: Vec::new(),
            script: format!("Script for: {keyword}"),
        }
    }
}

/// One fully- or partially-processed keyword, appended to the sheet
/// (or the backup file) and never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub keyword: String,
    pub title: String,
    pub thumbnail_text: String,
    pub description: String,
    pub tags: String,
    pub script: String,
    pub voiceover_path: String,
    pub thumbnail_path: String,
    pub status: String,
}

impl ResultRow {
    /// Header row, including the timestamp column the sink appends.
    pub const HEADER: [&'static str; 10] = [
        "Keyword",
        "Title",
        "Thumbnail Text",
        "Description",
        "Tags",
        "Script",
        "Voiceover Path",
        "Thumbnail Path",
        "Status",
        "Timestamp",
    ];

    pub fn from_parts(
        keyword: &str,
        metadata: &VideoMetadata,
        voiceover_path: Option<String>,
        thumbnail_path: Option<String>,
    ) -> Self {
        Self {
            keyword: keyword.to_string(),
            title: metadata.title.clone(),
            thumbnail_text: metadata.thumbnail_text.clone(),
            description: metadata.description.clone(),
            tags: metadata.tags.join(", "),
            script: metadata.script.clone(),
            voiceover_path: voiceover_path.unwrap_or_else(|| FAILED_SENTINEL.to_string()),
            thumbnail_path: thumbnail_path.unwrap_or_else(|| FAILED_SENTINEL.to_string()),
            status: "Done".to_string(),
        }
    }

    /// Nine ordered cells; the sink appends the tenth (timestamp) itself.
    pub fn into_cells(self) -> Vec<String> {
        vec![
            self.keyword,
            self.title,
            self.thumbnail_text,
            self.description,
            self.tags,
            self.script,
            self.voiceover_path,
            self.thumbnail_path,
            self.status,
        ]
    }
}

/// Truncate a cell value to the spreadsheet limit, respecting char boundaries.
pub fn sanitize_cell(value: &str) -> String {
    if value.len() <= MAX_CELL_LEN {
        return value.to_string();
    }
    let mut end = MAX_CELL_LEN;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    value[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_cells_order_matches_header() {
        let md = VideoMetadata {
            title: "t".into(),
            thumbnail_text: "tt".into(),
            description: "d".into(),
            tags: vec!["a".into(), "b".into()],
            script: "s".into(),
        };
        let row = ResultRow::from_parts("kw", &md, Some("v.mp3".into()), None);
        let cells = row.into_cells();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0], "kw");
        assert_eq!(cells[4], "a, b");
        assert_eq!(cells[6], "v.mp3");
        assert_eq!(cells[7], FAILED_SENTINEL);
        assert_eq!(cells[8], "Done");
    }

    #[test]
    fn placeholder_metadata_truncates_thumbnail_text() {
        let long = "x".repeat(40);
        let md = VideoMetadata::placeholder(&long);
        assert_eq!(md.title, long);
        assert_eq!(md.thumbnail_text.chars().count(), 25);
        assert_eq!(md.script, format!("Script for: {long}"));
    }

    #[test]
    fn sanitize_cell_truncates_long_values() {
        let long = "y".repeat(MAX_CELL_LEN + 100);
        assert_eq!(sanitize_cell(&long).len(), MAX_CELL_LEN);
        assert_eq!(sanitize_cell("short"), "short");
    }
}
