//! Database queries for exam records.
//!
//! Duplicate prevention is a lookup on `file_url` before the insert. When the
//! unique index from the migration exists, a losing concurrent insert is also
//! reported as a duplicate instead of an error.
//!
//! The table is owned by the backend and may carry extra or differently typed
//! columns, so queries only read back `id`.

use async_trait::async_trait;
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, QuerySelect, Set, SqlErr,
};

use crate::entity::exam::{self, ActiveModel, Entity as Exam};
use crate::error::{AppError, AppResult};
use crate::models::NewExam;

use super::DbPool;

/// Result of inserting an exam record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// Row created with this id
    Inserted(i64),
    /// A row with the same `file_url` already exists
    Duplicate,
}

/// Table boundary used by the indexer.
#[async_trait]
pub trait ExamTable: Send + Sync {
    /// Whether any record references `file_url`.
    async fn exists_with_file_url(&self, file_url: &str) -> AppResult<bool>;

    /// Insert a new record.
    async fn insert_exam(&self, exam: NewExam) -> AppResult<InsertOutcome>;
}

impl DbPool {
    /// Find the id of an exam record by its public file URL.
    pub async fn find_exam_id_by_file_url(&self, file_url: &str) -> AppResult<Option<i64>> {
        let result = Exam::find()
            .select_only()
            .column(exam::Column::Id)
            .filter(exam::Column::FileUrl.eq(file_url))
            .into_tuple::<i64>()
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to look up exam: {}", e)))?;

        Ok(result)
    }

    /// Insert an exam record.
    pub async fn insert_exam_record(&self, exam: NewExam) -> AppResult<InsertOutcome> {
        let model = ActiveModel {
            id: NotSet,
            course: Set(exam.course),
            year: Set(exam.year),
            period: Set(exam.period),
            uploader: Set(exam.uploader),
            file_url: Set(exam.file_url),
            approved: Set(exam.approved),
            created_at: NotSet,
        };

        match Exam::insert(model).exec(self.connection()).await {
            Ok(result) => Ok(InsertOutcome::Inserted(result.last_insert_id)),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(InsertOutcome::Duplicate)
            }
            Err(e) => Err(AppError::Database(format!("Failed to insert exam: {}", e))),
        }
    }
}

#[async_trait]
impl ExamTable for DbPool {
    async fn exists_with_file_url(&self, file_url: &str) -> AppResult<bool> {
        Ok(self.find_exam_id_by_file_url(file_url).await?.is_some())
    }

    async fn insert_exam(&self, exam: NewExam) -> AppResult<InsertOutcome> {
        self.insert_exam_record(exam).await
    }
}
