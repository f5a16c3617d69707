//! Output formatting utilities

use crate::application::MigrationReport;

/// Format a migration report for display
pub fn format_migration_report(report: &MigrationReport) -> String {
    let mut output = String::new();

    if report.dry_run {
        output.push_str("Dry run: nothing was written.\n");
    }

    for name in &report.posts {
        output.push_str(&format!("  blog/{}\n", name));
    }
    for name in &report.entries {
        output.push_str(&format!("  diary/{}\n", name));
    }
    for name in &report.images {
        output.push_str(&format!("  assets/{}\n", name));
    }

    output.push_str(&format!(
        "Migrated {} post(s), {} diary entry(ies), {} image(s).\n",
        report.posts.len(),
        report.entries.len(),
        report.images.len()
    ));

    if !report.failures.is_empty() {
        output.push_str(&format!("{} file(s) failed:\n", report.failures.len()));
        for failure in &report.failures {
            output.push_str(&format!(
                "  {} ({}): {}\n",
                failure.file, failure.stage, failure.message
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::MigrationFailure;

    #[test]
    fn test_format_empty_report() {
        let report = MigrationReport::default();
        let output = format_migration_report(&report);
        assert_eq!(output, "Migrated 0 post(s), 0 diary entry(ies), 0 image(s).\n");
    }

    #[test]
    fn test_format_report_lists_files() {
        let report = MigrationReport {
            posts: vec!["a.mdx".to_string()],
            entries: vec!["b.md".to_string()],
            images: vec!["c.png".to_string()],
            ..Default::default()
        };
        let output = format_migration_report(&report);
        assert!(output.contains("  blog/a.mdx\n"));
        assert!(output.contains("  diary/b.md\n"));
        assert!(output.contains("  assets/c.png\n"));
        assert!(output.contains("Migrated 1 post(s), 1 diary entry(ies), 1 image(s)."));
    }

    #[test]
    fn test_format_dry_run_banner() {
        let report = MigrationReport {
            dry_run: true,
            ..Default::default()
        };
        let output = format_migration_report(&report);
        assert!(output.starts_with("Dry run: nothing was written.\n"));
    }

    #[test]
    fn test_format_failures() {
        let report = MigrationReport {
            failures: vec![MigrationFailure {
                file: "bad.md".to_string(),
                stage: "read",
                message: "invalid utf-8".to_string(),
            }],
            ..Default::default()
        };
        let output = format_migration_report(&report);
        assert!(output.contains("1 file(s) failed:"));
        assert!(output.contains("  bad.md (read): invalid utf-8"));
    }
}
