// File: ./src/config.rs
use crate::model::{Category, Filter};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_DIR_ENV: &str = "CALPAD_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Category preselected in the add form
    pub default_category: Category,
    /// Filter applied to the details list at startup
    pub default_filter: Filter,
    pub log_level: String,
    /// Extra `#tag` -> category mappings for the smart input line
    pub tag_aliases: HashMap<String, Category>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_category: Category::Work,
            default_filter: Filter::All,
            log_level: "info".to_string(),
            tag_aliases: HashMap::new(),
        }
    }
}

impl Config {
    pub fn get_dir() -> Option<PathBuf> {
        if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
            return Some(PathBuf::from(dir));
        }
        ProjectDirs::from("com", "calpad", "calpad").map(|proj| proj.config_dir().to_path_buf())
    }

    pub fn get_path() -> Option<PathBuf> {
        Self::get_dir().map(|dir| dir.join("config.toml"))
    }

    /// Loads the user config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        match Self::get_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        // Tags are matched case-insensitively.
        config.tag_aliases = config
            .tag_aliases
            .into_iter()
            .map(|(tag, cat)| (tag.trim_start_matches('#').to_lowercase(), cat))
            .collect();
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(())
    }
}
