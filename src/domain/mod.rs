//! Domain logic: the content transformation pipeline.

pub mod description;
pub mod document;
pub mod embeds;
pub mod links;
pub mod pipeline;
pub mod tags;

pub use document::{split_frontmatter, Document, DocumentKind, FrontmatterSplit};
pub use embeds::{convert_embeds, EmbedOutcome, Provider};
pub use pipeline::{transform, TransformedDocument};
