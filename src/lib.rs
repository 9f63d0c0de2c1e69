//! Exam bulk uploader library.
//!
//! Parses exam filenames, uploads the files to S3-compatible storage and
//! indexes them in the PostgreSQL `exams` table.

pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod migration;
pub mod models;
pub mod services;
