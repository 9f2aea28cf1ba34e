use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::Result;

/// Repository configuration, stored as `config.toml` in the store directory
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RepoConfig {
    /// User information
    #[serde(default)]
    pub user: UserConfig,
}

/// Identity recorded in commit author/committer lines
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default = "default_user_name")]
    pub name: String,

    #[serde(default = "default_user_email")]
    pub email: String,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            user: UserConfig::default(),
        }
    }
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            name: default_user_name(),
            email: default_user_email(),
        }
    }
}

impl RepoConfig {
    /// Load configuration from a file, falling back to defaults when absent
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

fn default_user_name() -> String {
    "Demo User".to_string()
}

fn default_user_email() -> String {
    "demo@example.com".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = RepoConfig::load(Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.user.name, "Demo User");
        assert_eq!(config.user.email, "demo@example.com");
    }

    #[test]
    fn save_load_round_trip() {
        let dir = assert_fs::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = RepoConfig::default();
        config.user.name = "Ada".to_string();
        config.user.email = "ada@example.com".to_string();
        config.save(&path).unwrap();

        let loaded = RepoConfig::load(&path).unwrap();
        assert_eq!(loaded.user.name, "Ada");
        assert_eq!(loaded.user.email, "ada@example.com");
    }
}
