//! Data model for extracted exam content.
//!
//! These types mirror the two JSON artifacts written at the end of a
//! run: the question-only structured list and the complete per-page
//! extraction result.

mod document;
mod page;
mod question;

pub use document::{DocumentResult, ExtractionSummary, PdfInfo};
pub use page::PageResult;
pub use question::QuestionRecord;
