//! Study topics
//!
//! Topics group cards and exercises and carry mastery/priority metadata
//! written by the planning layer. This core reads them only; nothing here
//! mutates a topic.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::storage::{self, Result};

/// A topic with mastery and priority metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    #[serde(default)]
    pub parent: Option<String>,
    /// "technical" or "knowledge".
    pub mode: String,
    /// 0.0 to 1.0, maintained by the planning layer.
    #[serde(default)]
    pub mastery: f64,
    pub priority: u32,
    #[serde(default)]
    pub total_cards: usize,
    #[serde(default)]
    pub mature_cards: usize,
    #[serde(default)]
    pub exercises_completed: usize,
    #[serde(default)]
    pub content_source: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// On-disk shape of `topics.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicCollection {
    #[serde(default)]
    pub topics: Vec<Topic>,
}

/// Read-only store backed by one `topics.json` file.
pub struct TopicStore {
    path: PathBuf,
}

impl TopicStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the full collection. Missing file reads as empty.
    pub fn load(&self) -> Result<TopicCollection> {
        storage::read_collection(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::write_collection;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_as_empty() {
        let temp = TempDir::new().unwrap();
        let store = TopicStore::new(temp.path().join("topics.json"));
        assert!(store.load().unwrap().topics.is_empty());
    }

    #[test]
    fn loads_seeded_topics() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("topics.json");

        let collection = TopicCollection {
            topics: vec![Topic {
                name: "ownership".to_string(),
                parent: None,
                mode: "technical".to_string(),
                mastery: 0.4,
                priority: 1,
                total_cards: 12,
                mature_cards: 3,
                exercises_completed: 2,
                content_source: "curated".to_string(),
                notes: None,
            }],
        };
        write_collection(&path, &collection).unwrap();

        let loaded = TopicStore::new(path).load().unwrap();
        assert_eq!(loaded, collection);
    }
}
