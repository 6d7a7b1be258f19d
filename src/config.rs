use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SEED_POSTS: usize = 30;
const DEFAULT_ARCHIVE_POSTS: usize = 10_000;

/// Session defaults, stored in .ablog/config.json. Posts themselves are
/// never persisted; this only tunes how the next session starts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogConfig {
    /// Posts the feed is seeded with at startup.
    #[serde(default = "default_seed_posts")]
    pub seed_posts: usize,

    /// Size of the lazily generated archive batch.
    #[serde(default = "default_archive_posts")]
    pub archive_posts: usize,
}

fn default_seed_posts() -> usize {
    DEFAULT_SEED_POSTS
}

fn default_archive_posts() -> usize {
    DEFAULT_ARCHIVE_POSTS
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            seed_posts: DEFAULT_SEED_POSTS,
            archive_posts: DEFAULT_ARCHIVE_POSTS,
        }
    }
}

impl BlogConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: BlogConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_original_app() {
        let config = BlogConfig::default();
        assert_eq!(config.seed_posts, 30);
        assert_eq!(config.archive_posts, 10_000);
    }

    #[test]
    fn load_missing_config_returns_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = BlogConfig::load(temp_dir.path().join("nope")).unwrap();
        assert_eq!(config, BlogConfig::default());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = BlogConfig {
            seed_posts: 5,
            archive_posts: 100,
        };
        config.save(temp_dir.path()).unwrap();

        let loaded = BlogConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_json_falls_back_per_field() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{ "seed_posts": 12 }"#,
        )
        .unwrap();

        let loaded = BlogConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.seed_posts, 12);
        assert_eq!(loaded.archive_posts, 10_000);
    }
}
