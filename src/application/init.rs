//! Init use case

use crate::error::{Result, VaultportError};
use crate::infrastructure::config::CONFIG_FILE;
use crate::infrastructure::Config;
use std::path::Path;

pub struct InitService;

impl InitService {
    /// Write a default vaultport.toml into the given directory
    pub fn execute(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::create_dir_all(path)?;
        }

        if path.join(CONFIG_FILE).exists() {
            return Err(VaultportError::Config(format!(
                "{} already exists in {}",
                CONFIG_FILE,
                path.display()
            )));
        }

        Config::new().save_to_dir(path)?;
        println!("Created {} in {}", CONFIG_FILE, path.display());
        println!("Edit the directory paths, then run 'vaultport migrate'.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_config() {
        let temp = TempDir::new().unwrap();
        InitService::execute(temp.path()).unwrap();
        assert!(temp.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        InitService::execute(temp.path()).unwrap();
        assert!(InitService::execute(temp.path()).is_err());
    }
}
