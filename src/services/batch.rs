//! Batch driver: walks the upload directory and processes files one by one.
//!
//! Per file: `Discovered -> Parsed | Rejected -> Uploaded | UploadFailed ->
//! Indexed | IndexSkipped | IndexFailed`. Every terminal state is logged and
//! none of them stops the batch.

use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::db::ExamTable;
use crate::error::{AppError, AppResult};
use crate::models::parse_filename;
use crate::services::indexer::{IndexOutcome, index_exam};
use crate::services::storage::ObjectStore;
use crate::services::upload::upload_file;

/// Names starting with this marker are never parsed.
pub const HIDDEN_FILE_MARKER: char = '.';

/// Terminal state of one directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Hidden,
    Rejected,
    UploadFailed,
    Indexed,
    IndexSkipped,
    IndexFailed,
}

/// Tally of file outcomes for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub hidden: usize,
    pub rejected: usize,
    pub upload_failed: usize,
    pub indexed: usize,
    pub skipped_duplicate: usize,
    pub index_failed: usize,
}

impl BatchSummary {
    fn start() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            hidden: 0,
            rejected: 0,
            upload_failed: 0,
            indexed: 0,
            skipped_duplicate: 0,
            index_failed: 0,
        }
    }

    fn record(&mut self, outcome: FileOutcome) {
        let counter = match outcome {
            FileOutcome::Hidden => &mut self.hidden,
            FileOutcome::Rejected => &mut self.rejected,
            FileOutcome::UploadFailed => &mut self.upload_failed,
            FileOutcome::Indexed => &mut self.indexed,
            FileOutcome::IndexSkipped => &mut self.skipped_duplicate,
            FileOutcome::IndexFailed => &mut self.index_failed,
        };
        *counter += 1;
    }

    /// Entries seen, hidden ones included.
    pub fn total(&self) -> usize {
        self.hidden
            + self.rejected
            + self.upload_failed
            + self.indexed
            + self.skipped_duplicate
            + self.index_failed
    }
}

/// Process every entry of `dir` sequentially.
///
/// Only failing to open `dir` is an error; per-file failures are logged and
/// counted in the summary.
pub async fn run_batch<S, T>(
    dir: &Path,
    store: &S,
    table: &T,
    uploader: Uuid,
) -> AppResult<BatchSummary>
where
    S: ObjectStore + ?Sized,
    T: ExamTable + ?Sized,
{
    let mut entries = tokio::fs::read_dir(dir).await.map_err(|e| {
        AppError::Io(format!("Failed to read directory {}: {}", dir.display(), e))
    })?;

    info!("Scanning {}", dir.display());
    let mut summary = BatchSummary::start();

    loop {
        let entry = match entries.next_entry().await {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(e) => {
                warn!("Skipping unreadable directory entry: {}", e);
                continue;
            }
        };

        let outcome = match entry.file_name().to_str() {
            Some(name) => process_file(&entry.path(), name, store, table, uploader).await,
            None => {
                warn!("Unrecognized filename: {:?}", entry.file_name());
                FileOutcome::Rejected
            }
        };
        summary.record(outcome);
    }

    summary.finished_at = Some(Utc::now());
    info!(
        "Batch finished: {} entries, {} indexed, {} already present, {} rejected, {} upload failures, {} index failures, {} hidden",
        summary.total(),
        summary.indexed,
        summary.skipped_duplicate,
        summary.rejected,
        summary.upload_failed,
        summary.index_failed,
        summary.hidden
    );

    Ok(summary)
}

/// Run one file through parse, upload and index.
pub async fn process_file<S, T>(
    path: &Path,
    filename: &str,
    store: &S,
    table: &T,
    uploader: Uuid,
) -> FileOutcome
where
    S: ObjectStore + ?Sized,
    T: ExamTable + ?Sized,
{
    if filename.starts_with(HIDDEN_FILE_MARKER) {
        debug!("Skipping hidden file {}", filename);
        return FileOutcome::Hidden;
    }

    let meta = parse_filename(filename);
    debug!("{} -> {:?}", filename, meta);
    let Some(meta) = meta else {
        warn!("Unrecognized filename: {}", filename);
        return FileOutcome::Rejected;
    };

    info!("Uploading {} ...", filename);
    let public_url = match upload_file(store, path, filename).await {
        Ok(url) => url,
        Err(e) => {
            error!("Upload failed for {}: {}", filename, e);
            return FileOutcome::UploadFailed;
        }
    };

    match index_exam(table, &meta, &public_url, uploader).await {
        Ok(IndexOutcome::Inserted) => FileOutcome::Indexed,
        Ok(IndexOutcome::SkippedDuplicate) => FileOutcome::IndexSkipped,
        Err(e) => {
            error!(
                "Database insert failed for {} - {} - {}: {}",
                meta.course, meta.year, meta.period, e
            );
            FileOutcome::IndexFailed
        }
    }
}
