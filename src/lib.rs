//! vaultport - Obsidian vault to Astro content migrator
//!
//! Copies blog posts, diary entries, and images out of an Obsidian-style
//! vault into an Astro content directory, rewriting wiki links, tag
//! namespaces, and media-embed URLs on the way.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::VaultportError;
