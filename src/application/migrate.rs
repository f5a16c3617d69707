//! Vault migration use case.
//!
//! Walks the configured vault directories, runs every markdown document
//! through the transformation pipeline, copies images, and reports what
//! happened. One document failing never stops its siblings; missing source
//! directories stop the whole run.

use crate::domain::{transform, Document, DocumentKind};
use crate::error::Result;
use crate::infrastructure::{Config, FileCollector};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct MigrateOptions {
    pub dry_run: bool,
}

/// One document or image that could not be migrated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationFailure {
    pub file: String,
    pub stage: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MigrationReport {
    pub posts: Vec<String>,
    pub entries: Vec<String>,
    pub images: Vec<String>,
    pub failures: Vec<MigrationFailure>,
    pub dry_run: bool,
}

/// Run the full migration described by the config.
pub fn migrate_vault<C: FileCollector>(
    collector: &C,
    config: &Config,
    options: MigrateOptions,
) -> Result<MigrationReport> {
    // Enumerate all sources up front so a missing directory halts the run
    // before anything is written.
    let posts = collector.list_markdown(&config.blog_dir)?;
    let entries = collector.list_markdown(&config.diary_dir)?;
    let images = collector.list_images(&config.images_dir)?;

    let blog_out = config.content_out_dir.join("blog");
    let diary_out = config.content_out_dir.join("diary");

    if !options.dry_run {
        collector.ensure_dir(&blog_out)?;
        collector.ensure_dir(&diary_out)?;
        collector.ensure_dir(&config.images_out_dir)?;
    }

    let mut report = MigrationReport {
        dry_run: options.dry_run,
        ..Default::default()
    };

    migrate_documents(
        collector,
        &posts,
        DocumentKind::Post,
        &config.blog_dir,
        &blog_out,
        options.dry_run,
        &mut report,
    );
    migrate_documents(
        collector,
        &entries,
        DocumentKind::Entry,
        &config.diary_dir,
        &diary_out,
        options.dry_run,
        &mut report,
    );

    for name in &images {
        if !options.dry_run {
            if let Err(e) = collector.copy_image(&config.images_dir, name, &config.images_out_dir)
            {
                report.failures.push(MigrationFailure {
                    file: name.clone(),
                    stage: "copy",
                    message: e.to_string(),
                });
                continue;
            }
        }
        report.images.push(name.clone());
    }

    Ok(report)
}

fn migrate_documents<C: FileCollector>(
    collector: &C,
    names: &[String],
    kind: DocumentKind,
    src_dir: &Path,
    out_dir: &Path,
    dry_run: bool,
    report: &mut MigrationReport,
) {
    for name in names {
        let text = match collector.read_document(src_dir, name) {
            Ok(text) => text,
            Err(e) => {
                report.failures.push(MigrationFailure {
                    file: name.clone(),
                    stage: "read",
                    message: e.to_string(),
                });
                continue;
            }
        };

        let output = transform(&Document::new(kind, name.clone(), text));

        if !dry_run {
            if let Err(e) = collector.write_document(out_dir, &output.file_name, &output.text) {
                report.failures.push(MigrationFailure {
                    file: name.clone(),
                    stage: "write",
                    message: e.to_string(),
                });
                continue;
            }
        }

        match kind {
            DocumentKind::Post => report.posts.push(output.file_name),
            DocumentKind::Entry => report.entries.push(output.file_name),
        }
    }
}
