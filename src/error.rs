//! Error types for vaultport

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the vaultport application
#[derive(Debug, Error)]
pub enum VaultportError {
    #[error("Source directory does not exist: {0}")]
    MissingSourceDir(PathBuf),

    #[error("Not a vaultport directory: {0}")]
    NotVaultportDirectory(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl VaultportError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            VaultportError::NotVaultportDirectory(_) => 2,
            VaultportError::MissingSourceDir(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            VaultportError::NotVaultportDirectory(path) => {
                format!(
                    "Not a vaultport directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'vaultport init' in this directory to create a vaultport.toml\n\
                    • Navigate to a directory containing vaultport.toml\n\
                    • Pass --config with the path to your vaultport.toml",
                    path.display()
                )
            }
            VaultportError::MissingSourceDir(path) => {
                format!(
                    "Source directory does not exist: {}\n\n\
                    Suggestions:\n\
                    • Check the directory paths in vaultport.toml\n\
                    • Override a path with its environment variable\n\
                      (VAULTPORT_BLOG_DIR, VAULTPORT_DIARY_DIR, VAULTPORT_IMAGES_DIR)\n\
                    • Create the directory if the vault section is simply empty",
                    path.display()
                )
            }
            VaultportError::Config(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Run 'vaultport init' to generate a fresh vaultport.toml\n\
                    • Check vaultport.toml for typos in key names",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using VaultportError
pub type Result<T> = std::result::Result<T, VaultportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_vaultport_directory_suggestion() {
        let err = VaultportError::NotVaultportDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("vaultport init"));
        assert!(msg.contains("--config"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_missing_source_dir_suggestions() {
        let err = VaultportError::MissingSourceDir(PathBuf::from("/tmp/blog"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("/tmp/blog"));
        assert!(msg.contains("VAULTPORT_BLOG_DIR"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            VaultportError::NotVaultportDirectory(PathBuf::from(".")).exit_code(),
            2
        );
        assert_eq!(
            VaultportError::MissingSourceDir(PathBuf::from(".")).exit_code(),
            3
        );
        assert_eq!(VaultportError::Config("bad".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = VaultportError::Config("unknown key".to_string());
        assert!(err.display_with_suggestions().contains("unknown key"));
    }
}
