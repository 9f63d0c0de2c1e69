//! Upload, indexing and batch services.

pub mod batch;
pub mod indexer;
pub mod storage;
pub mod upload;

pub use batch::{BatchSummary, FileOutcome, run_batch};
pub use indexer::{IndexOutcome, index_exam};
pub use storage::{ObjectStore, Storage};
pub use upload::upload_file;
