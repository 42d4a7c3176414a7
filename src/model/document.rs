//! Document-level types.

use super::{PageResult, QuestionRecord};
use serde::{Deserialize, Serialize};

/// Complete extraction result for one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentResult {
    /// Source document information and run summary
    pub pdf_info: PdfInfo,

    /// Per-page results in page order
    pub pages: Vec<PageResult>,

    /// All questions, flattened across pages (page order preserved,
    /// in-page emission order preserved)
    pub questions: Vec<QuestionRecord>,
}

impl DocumentResult {
    /// Create an empty result for the named document.
    pub fn new(filename: impl Into<String>, total_pages: u32) -> Self {
        Self {
            pdf_info: PdfInfo {
                filename: filename.into(),
                total_pages,
                extraction_summary: ExtractionSummary::default(),
            },
            pages: Vec::new(),
            questions: Vec::new(),
        }
    }

    /// Fold one page's output into the document result.
    pub fn add_page(&mut self, page: PageResult, questions: Vec<QuestionRecord>) {
        let summary = &mut self.pdf_info.extraction_summary;
        summary.total_images_extracted += page.images.len();
        summary.total_questions_found += questions.len();
        summary.pages_processed += 1;

        self.pages.push(page);
        self.questions.extend(questions);
    }

    /// Total number of questions found across all pages.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

/// Source document information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfInfo {
    /// Base filename of the source document
    pub filename: String,

    /// Total page count reported by the document
    pub total_pages: u32,

    /// Aggregated run counters
    pub extraction_summary: ExtractionSummary,
}

/// Aggregated counters for one extraction run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionSummary {
    pub total_images_extracted: usize,
    pub total_questions_found: usize,
    pub pages_processed: usize,
}
