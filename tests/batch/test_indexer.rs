//! Record indexer tests.

use exam_uploader_lib::models::parse_filename;
use exam_uploader_lib::services::{IndexOutcome, index_exam};
use uuid::Uuid;

use super::fakes::*;

fn url(name: &str) -> String {
    format!("{}/{}", PUBLIC_BASE, name)
}

#[tokio::test]
async fn test_index_inserts_approved_record_with_display_name() {
    let table = MemoryTable::new();
    let uploader = Uuid::new_v4();
    let name = "MathimatikiAnalisi_2020_Epanaliptiki_Themata.pdf";
    let meta = parse_filename(name).unwrap();

    let outcome = index_exam(&table, &meta, &url(name), uploader).await.unwrap();

    assert_eq!(outcome, IndexOutcome::Inserted);
    let rows = table.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].course, "Μαθηματική Ανάλυση");
    assert_eq!(rows[0].year, 2020);
    assert_eq!(rows[0].period, "Epanaliptiki");
    assert_eq!(rows[0].uploader, uploader);
    assert_eq!(rows[0].file_url, url(name));
    assert!(rows[0].approved);
}

#[tokio::test]
async fn test_index_skips_existing_url() {
    let table = MemoryTable::new();
    let name = "Diktya1_2019_Xeimerini_Themata_A.docx";
    let meta = parse_filename(name).unwrap();

    let first = index_exam(&table, &meta, &url(name), Uuid::nil()).await.unwrap();
    let second = index_exam(&table, &meta, &url(name), Uuid::nil()).await.unwrap();

    assert_eq!(first, IndexOutcome::Inserted);
    assert_eq!(second, IndexOutcome::SkippedDuplicate);
    assert_eq!(table.rows().len(), 1);
    assert_eq!(table.lookups(), 2);
}

#[tokio::test]
async fn test_index_treats_unique_violation_as_duplicate() {
    let table = MemoryTable::racing();
    let name = "Fysiki_2020_Earini_Themata.pdf";
    let meta = parse_filename(name).unwrap();

    let outcome = index_exam(&table, &meta, &url(name), Uuid::nil()).await.unwrap();

    assert_eq!(outcome, IndexOutcome::SkippedDuplicate);
    assert!(table.rows().is_empty());
}

#[tokio::test]
async fn test_index_insert_failure_is_error() {
    let table = MemoryTable::failing_inserts();
    let name = "Fysiki_2020_Earini_Themata.pdf";
    let meta = parse_filename(name).unwrap();

    let result = index_exam(&table, &meta, &url(name), Uuid::nil()).await;

    assert!(result.is_err());
}
