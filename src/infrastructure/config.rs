//! Configuration management

use crate::error::{Result, VaultportError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the config file marking a vaultport directory.
pub const CONFIG_FILE: &str = "vaultport.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Vault directory containing blog post markdown files.
    pub blog_dir: PathBuf,
    /// Vault directory containing diary entry markdown files.
    pub diary_dir: PathBuf,
    /// Vault directory containing image attachments.
    pub images_dir: PathBuf,
    /// Astro content directory; `blog/` and `diary/` are created inside.
    pub content_out_dir: PathBuf,
    /// Astro assets directory for copied images.
    pub images_out_dir: PathBuf,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default vault-relative paths
    pub fn new() -> Self {
        Config {
            blog_dir: PathBuf::from("blog"),
            diary_dir: PathBuf::from("diary"),
            images_dir: PathBuf::from("images"),
            content_out_dir: PathBuf::from("out/content"),
            images_out_dir: PathBuf::from("out/assets"),
            created: Utc::now(),
        }
    }

    /// Load config from vaultport.toml in the given directory.
    ///
    /// Environment variables override file values, and relative paths are
    /// resolved against the directory the config was loaded from.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                VaultportError::NotVaultportDirectory(path.to_path_buf())
            } else {
                VaultportError::Io(e)
            }
        })?;

        let mut config: Config = toml::from_str(&contents)?;

        config.apply_env_overrides();
        config.resolve_relative_to(path);
        Ok(config)
    }

    /// Save config to vaultport.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.join(CONFIG_FILE), contents)?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        let overrides = [
            ("VAULTPORT_BLOG_DIR", &mut self.blog_dir),
            ("VAULTPORT_DIARY_DIR", &mut self.diary_dir),
            ("VAULTPORT_IMAGES_DIR", &mut self.images_dir),
            ("VAULTPORT_CONTENT_OUT_DIR", &mut self.content_out_dir),
            ("VAULTPORT_IMAGES_OUT_DIR", &mut self.images_out_dir),
        ];
        for (var, dir) in overrides {
            if let Ok(value) = std::env::var(var) {
                *dir = PathBuf::from(value);
            }
        }
    }

    fn resolve_relative_to(&mut self, root: &Path) {
        for dir in [
            &mut self.blog_dir,
            &mut self.diary_dir,
            &mut self.images_dir,
            &mut self.content_out_dir,
            &mut self.images_out_dir,
        ] {
            if dir.is_relative() {
                *dir = root.join(&dir);
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
