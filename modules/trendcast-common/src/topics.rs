use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::error;

/// Topic configuration read from `topics.json`.
///
/// Missing file or malformed JSON degrades to an empty configuration so the
/// scrape stage runs with zero seed queries instead of crashing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicsFile {
    #[serde(default)]
    pub trending_topics: Vec<String>,
    #[serde(default)]
    pub search_prefixes: Vec<String>,
}

impl TopicsFile {
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                error!(path = %path.display(), error = %e, "topics file not found");
                return Self::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(topics) => topics,
            Err(e) => {
                error!(path = %path.display(), error = %e, "invalid JSON in topics file");
                Self::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.trending_topics.is_empty() || self.search_prefixes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_topics_and_prefixes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"trending_topics": ["TikTok", "Notion"], "search_prefixes": ["how to *"]}}"#
        )
        .unwrap();

        let topics = TopicsFile::load(file.path());
        assert_eq!(topics.trending_topics, vec!["TikTok", "Notion"]);
        assert_eq!(topics.search_prefixes, vec!["how to *"]);
        assert!(!topics.is_empty());
    }

    #[test]
    fn missing_file_yields_empty_config() {
        let topics = TopicsFile::load(Path::new("/nonexistent/topics.json"));
        assert!(topics.is_empty());
    }

    #[test]
    fn malformed_json_yields_empty_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let topics = TopicsFile::load(file.path());
        assert!(topics.is_empty());
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"trending_topics": ["TikTok"]}}"#).unwrap();
        let topics = TopicsFile::load(file.path());
        assert_eq!(topics.trending_topics.len(), 1);
        assert!(topics.search_prefixes.is_empty());
        assert!(topics.is_empty());
    }
}
