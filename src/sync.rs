// src/sync.rs
//! The publishing run: query → per page extract, fetch, compose → deliver.
//!
//! Pages are processed one at a time in query order. A page without a
//! title is skipped; any other page failure aborts the run unless the
//! configuration asks to keep going.

use crate::api::{query_ready_posts, NotionRepository};
use crate::config::SyncConfig;
use crate::error::AppError;
use crate::formatting::{compose_document, fetch_page_markdown};
use crate::metadata::{extract_metadata, has_channel};
use crate::model::Page;
use crate::output::{deliver, plan_post_delivery, post_path};
use crate::types::PageId;
use std::path::PathBuf;

/// What a run did, page by page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncReport {
    /// Pages the query returned
    pub found: usize,
    /// Files written, in query order
    pub written: Vec<PathBuf>,
    /// Files a dry run would have written
    pub previewed: Vec<PathBuf>,
    /// Pages skipped for lack of a title
    pub skipped: Vec<PageId>,
    /// Pages that failed while the run kept going
    pub failed: Vec<(PageId, String)>,
}

impl SyncReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

enum PageOutcome {
    Written(PathBuf),
    Previewed(PathBuf),
    Skipped,
}

/// Publishes every ready post from the configured database.
pub async fn run_sync(
    repo: &dyn NotionRepository,
    config: &SyncConfig,
) -> Result<SyncReport, AppError> {
    let pages = query_ready_posts(repo, &config.database_id, &config.query).await?;
    log::info!(
        "Found {} ready {} post(s).",
        pages.len(),
        config.query.channel
    );

    let mut report = SyncReport {
        found: pages.len(),
        ..SyncReport::default()
    };

    for page in &pages {
        match publish_page(repo, config, page).await {
            Ok(PageOutcome::Written(path)) => report.written.push(path),
            Ok(PageOutcome::Previewed(path)) => report.previewed.push(path),
            Ok(PageOutcome::Skipped) => report.skipped.push(page.id.clone()),
            Err(e) if config.keep_going => {
                log::error!("FAILED: page_id={}: {}", page.id, e);
                report.failed.push((page.id.clone(), e.to_string()));
            }
            Err(e) => return Err(e),
        }
    }

    if !report.failed.is_empty() {
        log::warn!("{} page(s) failed", report.failed.len());
    }
    log::info!("Done.");
    Ok(report)
}

async fn publish_page(
    repo: &dyn NotionRepository,
    config: &SyncConfig,
    page: &Page,
) -> Result<PageOutcome, AppError> {
    let Some(metadata) = extract_metadata(page, &config.properties) else {
        log::warn!("SKIP: no title (page_id={})", page.id);
        return Ok(PageOutcome::Skipped);
    };

    if !has_channel(page, &config.properties.channels, &config.query.channel) {
        log::debug!(
            "Page {} was returned without the {} channel",
            page.id,
            config.query.channel
        );
    }

    let body = fetch_page_markdown(repo, &page.id).await?;
    let post = metadata.into_post(page.id.clone(), body);
    let document = compose_document(&post, config.author.as_deref())?;
    let path = post_path(&config.content_dir, &post.slug);

    let delivery = deliver(plan_post_delivery(
        &config.content_dir,
        path.clone(),
        document,
        config.dry_run,
    ))?;
    log::debug!(
        "Delivered {} in {} operation(s), {} bytes written",
        path.display(),
        delivery.operations_completed,
        delivery.bytes_written
    );

    match delivery.written.into_iter().next() {
        Some(written) => {
            log::info!("Wrote: {}", written.display());
            Ok(PageOutcome::Written(written))
        }
        None => Ok(PageOutcome::Previewed(path)),
    }
}

/// Process exit status for a finished run: 0 when every page was published
/// or deliberately skipped, 1 on a fatal error or any recorded page failure.
pub fn exit_status(outcome: &Result<SyncReport, AppError>) -> u8 {
    match outcome {
        Ok(report) if report.is_success() => 0,
        _ => 1,
    }
}
