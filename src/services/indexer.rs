//! Record indexer: inserts one `exams` row per public URL.

use tracing::info;
use uuid::Uuid;

use crate::db::{ExamTable, InsertOutcome};
use crate::error::AppResult;
use crate::models::{ExamMetadata, NewExam};

/// Outcome of indexing one uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOutcome {
    Inserted,
    SkippedDuplicate,
}

/// Insert an approved record for `public_url` unless one already exists.
///
/// The existence check and the insert are separate statements. Two runs
/// racing on the same file can both pass the check; only a unique index on
/// `file_url` stops the second insert.
pub async fn index_exam<T: ExamTable + ?Sized>(
    table: &T,
    meta: &ExamMetadata,
    public_url: &str,
    uploader: Uuid,
) -> AppResult<IndexOutcome> {
    if table.exists_with_file_url(public_url).await? {
        info!("Skip: already exists in database: {}", public_url);
        return Ok(IndexOutcome::SkippedDuplicate);
    }

    let exam = NewExam::approved(meta, public_url, uploader);
    let (course, year, period) = (exam.course.clone(), exam.year, exam.period.clone());

    match table.insert_exam(exam).await? {
        InsertOutcome::Inserted(id) => {
            info!("{} {} {} -> OK (id={})", course, year, period, id);
            Ok(IndexOutcome::Inserted)
        }
        InsertOutcome::Duplicate => {
            info!("Skip: inserted concurrently by another run: {}", public_url);
            Ok(IndexOutcome::SkippedDuplicate)
        }
    }
}
