//! Exam metadata derived from filenames, and the record inserted for it.

use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

/// Filename convention:
/// `<course>_<year>_<period>_Themata[_<variant>].<ext>`
static FILENAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(.*?)_(\d{4})_([A-Za-zΑ-Ωα-ω]+)_Themata(?:_[A-Za-z0-9Α-Ωα-ω]+)?\.(pdf|docx?|jpe?g|png)$",
    )
    .expect("filename pattern is valid")
});

/// Metadata extracted from an exam filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamMetadata {
    /// Course code, resolved to a display name at insert time
    pub course: String,
    pub year: i32,
    /// Exam sitting label, carried through as written
    pub period: String,
    /// Extension as written in the filename
    pub extension: String,
}

/// Parse an exam filename.
///
/// Returns `None` when the name does not follow the convention.
pub fn parse_filename(filename: &str) -> Option<ExamMetadata> {
    let caps = FILENAME_RE.captures(filename)?;

    // \d also matches non-ASCII digits, which do not parse as a year
    let year = caps.get(2)?.as_str().parse::<i32>().ok()?;

    Some(ExamMetadata {
        course: caps.get(1)?.as_str().to_string(),
        year,
        period: caps.get(3)?.as_str().to_string(),
        extension: caps.get(4)?.as_str().to_string(),
    })
}

/// Row to insert into the `exams` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExam {
    /// Course display name
    pub course: String,
    pub year: i32,
    pub period: String,
    pub uploader: Uuid,
    pub file_url: String,
    pub approved: bool,
}

impl NewExam {
    /// Build an approved record for a file uploaded by `uploader`.
    pub fn approved(meta: &ExamMetadata, file_url: &str, uploader: Uuid) -> Self {
        Self {
            course: super::course::display_name(&meta.course).to_string(),
            year: meta.year,
            period: meta.period.clone(),
            uploader,
            file_url: file_url.to_string(),
            approved: true,
        }
    }
}
