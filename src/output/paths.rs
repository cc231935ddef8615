// src/output/paths.rs
//! Pure functions for output paths and delivery planning.

use super::types::{DeliveryTarget, OutputPlan};
use crate::constants::DRY_RUN_PREVIEW_CHARS;
use std::path::{Path, PathBuf};

/// Where a post with `slug` lives inside the content directory.
pub fn post_path(content_dir: &Path, slug: &str) -> PathBuf {
    content_dir.join(format!("{}.md", slug))
}

/// The dry-run banner: the target path and the first characters of the
/// document.
pub fn dry_run_preview(path: &Path, content: &str) -> String {
    let head: String = content.chars().take(DRY_RUN_PREVIEW_CHARS).collect();
    format!("\n--- {} ---\n{}\n...\n", path.display(), head)
}

/// Plans the delivery of one rendered post.
///
/// A dry run only prints; otherwise the content directory is created before
/// the file is written.
pub fn plan_post_delivery(
    content_dir: &Path,
    path: PathBuf,
    content: String,
    dry_run: bool,
) -> OutputPlan {
    if dry_run {
        return OutputPlan::new().with_operation(DeliveryTarget::PrintToStdout {
            content: dry_run_preview(&path, &content),
        });
    }

    OutputPlan::new()
        .with_operation(DeliveryTarget::CreateDirectory {
            path: content_dir.to_path_buf(),
        })
        .with_operation(DeliveryTarget::WriteFile { path, content })
}
