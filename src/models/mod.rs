//! Domain models for the exam uploader.

pub mod course;
pub mod exam;

pub use course::Course;
pub use exam::{ExamMetadata, NewExam, parse_filename};
