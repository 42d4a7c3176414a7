//! # quizpdf
//!
//! Quiz-paper content extraction library for Rust.
//!
//! This library extracts page text and images from fixed-layout
//! multiple-choice exam PDFs, parses the text into structured question
//! records, and writes the results as JSON.
//!
//! ## Quick Start
//!
//! ```no_run
//! use quizpdf::extract_file;
//!
//! fn main() -> quizpdf::Result<()> {
//!     let result = extract_file("sample_paper.pdf")?;
//!     println!("Found {} questions", result.question_count());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Page extraction**: Plain text and embedded images per page
//! - **Question parsing**: Line-oriented scan for numbered questions,
//!   bracketed options, and answer lines
//! - **Categorization**: Section bands and answer-distribution stats
//! - **JSON output**: Structured question list and full per-page record

pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod parser;
pub mod render;
pub mod source;
pub mod stats;

// Re-export commonly used types
pub use detect::{detect_pdf_version, detect_pdf_version_from_bytes, is_pdf_bytes};
pub use error::{Error, Result};
pub use extract::{ExtractOptions, Extractor, OutputPaths};
pub use model::{DocumentResult, ExtractionSummary, PageResult, PdfInfo, QuestionRecord};
pub use parser::QuestionParser;
pub use render::{render_report, to_json, JsonFormat};
pub use source::{PageImage, PdfSource};
pub use stats::{categorize, Categorized, Category, Statistics};

use std::path::Path;

/// Extract a PDF file with default options.
///
/// Processes every page, writes page images under
/// `extracted_content/images/`, and returns the aggregated result.
///
/// # Example
///
/// ```no_run
/// use quizpdf::extract_file;
///
/// let result = extract_file("sample_paper.pdf").unwrap();
/// println!("Questions: {}", result.question_count());
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<DocumentResult> {
    let extractor = Extractor::open(path)?;
    extractor.extract()
}

/// Extract a PDF file with custom options.
///
/// # Example
///
/// ```no_run
/// use quizpdf::{extract_file_with_options, ExtractOptions};
///
/// let options = ExtractOptions::new().with_output_dir("./out").text_only();
/// let result = extract_file_with_options("sample_paper.pdf", options).unwrap();
/// ```
pub fn extract_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ExtractOptions,
) -> Result<DocumentResult> {
    let extractor = Extractor::open_with_options(path, options)?;
    extractor.extract()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_missing_file() {
        let result = extract_file("no_such_file.pdf");
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }

    #[test]
    fn test_detect_valid_pdf_17() {
        let version = detect_pdf_version_from_bytes(b"%PDF-1.7\n%test").unwrap();
        assert_eq!(version, "1.7");
    }

    #[test]
    fn test_detect_unknown_magic() {
        let result = detect_pdf_version_from_bytes(b"<!DOCTYPE html>");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_is_pdf_bytes() {
        assert!(is_pdf_bytes(b"%PDF-1.4\ntest"));
        assert!(!is_pdf_bytes(b"Not a PDF file"));
        assert!(!is_pdf_bytes(b""));
    }
}
