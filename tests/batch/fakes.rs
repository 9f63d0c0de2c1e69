//! In-memory storage and table fakes.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use exam_uploader_lib::db::{ExamTable, InsertOutcome};
use exam_uploader_lib::error::{AppError, AppResult};
use exam_uploader_lib::models::NewExam;
use exam_uploader_lib::services::ObjectStore;

pub const PUBLIC_BASE: &str = "https://demo.supabase.co/storage/v1/object/public/exams";

/// Storage operation recorded by [`MemoryStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    Remove(String),
    Put(String, Option<String>),
}

/// Object store keeping objects in a map.
#[derive(Default)]
pub struct MemoryStore {
    objects: Mutex<HashMap<String, Vec<u8>>>,
    ops: Mutex<Vec<StoreOp>>,
    failing_puts: HashSet<String>,
    failing_removes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject uploads of these keys.
    pub fn failing_puts(keys: &[&str]) -> Self {
        Self {
            failing_puts: keys.iter().map(|k| k.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Fail every removal.
    pub fn failing_removes() -> Self {
        Self {
            failing_removes: true,
            ..Self::default()
        }
    }

    pub fn object(&self, key: &str) -> Option<Vec<u8>> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn ops(&self) -> Vec<StoreOp> {
        self.ops.lock().unwrap().clone()
    }

    pub fn puts(&self) -> usize {
        self.ops()
            .iter()
            .filter(|op| matches!(op, StoreOp::Put(..)))
            .count()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn remove(&self, key: &str) -> AppResult<()> {
        self.ops.lock().unwrap().push(StoreOp::Remove(key.to_string()));
        if self.failing_removes {
            return Err(AppError::Storage("remove rejected".to_string()));
        }
        self.objects.lock().unwrap().remove(key);
        Ok(())
    }

    async fn put(&self, key: &str, data: Vec<u8>, content_type: Option<&str>) -> AppResult<()> {
        self.ops
            .lock()
            .unwrap()
            .push(StoreOp::Put(key.to_string(), content_type.map(String::from)));
        if self.failing_puts.contains(key) {
            return Err(AppError::Storage("quota exceeded".to_string()));
        }
        let mut objects = self.objects.lock().unwrap();
        if objects.contains_key(key) {
            return Err(AppError::Storage(format!("'{}' already exists", key)));
        }
        objects.insert(key.to_string(), data);
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", PUBLIC_BASE, key)
    }
}

/// Exam table keeping rows in a vector.
#[derive(Default)]
pub struct MemoryTable {
    rows: Mutex<Vec<NewExam>>,
    lookups: Mutex<usize>,
    fail_inserts: bool,
    fail_lookups: bool,
    /// Pretend every insert hits a unique-index violation
    unique_violation: bool,
    /// Pretend lookups never see existing rows
    blind_lookups: bool,
}

impl MemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_inserts() -> Self {
        Self {
            fail_inserts: true,
            ..Self::default()
        }
    }

    pub fn failing_lookups() -> Self {
        Self {
            fail_lookups: true,
            ..Self::default()
        }
    }

    /// Lookup misses but insert reports a duplicate, as when another run
    /// inserted between the check and the insert.
    pub fn racing() -> Self {
        Self {
            unique_violation: true,
            blind_lookups: true,
            ..Self::default()
        }
    }

    pub fn rows(&self) -> Vec<NewExam> {
        self.rows.lock().unwrap().clone()
    }

    pub fn lookups(&self) -> usize {
        *self.lookups.lock().unwrap()
    }
}

#[async_trait]
impl ExamTable for MemoryTable {
    async fn exists_with_file_url(&self, file_url: &str) -> AppResult<bool> {
        *self.lookups.lock().unwrap() += 1;
        if self.fail_lookups {
            return Err(AppError::Database("statement timeout".to_string()));
        }
        if self.blind_lookups {
            return Ok(false);
        }
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|r| r.file_url == file_url))
    }

    async fn insert_exam(&self, exam: NewExam) -> AppResult<InsertOutcome> {
        if self.fail_inserts {
            return Err(AppError::Database("connection reset".to_string()));
        }
        if self.unique_violation {
            return Ok(InsertOutcome::Duplicate);
        }
        let mut rows = self.rows.lock().unwrap();
        rows.push(exam);
        Ok(InsertOutcome::Inserted(rows.len() as i64))
    }
}

/// Create `name` inside `dir` with some contents.
pub fn write_file(dir: &Path, name: &str) {
    std::fs::write(dir.join(name), format!("contents of {}", name)).unwrap();
}
