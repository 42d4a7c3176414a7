//! Document-level extraction.
//!
//! Drives the page sources and the question parser over every page in
//! order, persists page images, and aggregates the per-page results
//! into a [`DocumentResult`].

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::{DocumentResult, PageResult};
use crate::parser::QuestionParser;
use crate::source::PdfSource;

/// Options for an extraction run.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Directory the JSON artifacts and images are written under.
    pub output_dir: PathBuf,

    /// Whether to decode and persist page images.
    pub save_images: bool,
}

impl ExtractOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Skip image decoding and persistence.
    pub fn text_only(mut self) -> Self {
        self.save_images = false;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("extracted_content"),
            save_images: true,
        }
    }
}

/// Paths of the artifacts written by [`Extractor::save_results`].
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub structured_questions: PathBuf,
    pub complete_extraction: PathBuf,
    pub images_dir: PathBuf,
}

/// Extracts text, images, and questions from one document.
pub struct Extractor {
    source: PdfSource,
    parser: QuestionParser,
    options: ExtractOptions,
}

impl Extractor {
    /// Open a PDF file for extraction.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ExtractOptions::default())
    }

    /// Open a PDF file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ExtractOptions) -> Result<Self> {
        let source = PdfSource::open(path)?;
        Ok(Self::from_source(source, options))
    }

    /// Open a PDF from bytes with custom options.
    pub fn from_bytes_with_options(
        data: &[u8],
        filename: impl Into<String>,
        options: ExtractOptions,
    ) -> Result<Self> {
        let source = PdfSource::from_bytes(data, filename)?;
        Ok(Self::from_source(source, options))
    }

    fn from_source(source: PdfSource, options: ExtractOptions) -> Self {
        Self {
            source,
            parser: QuestionParser::new(),
            options,
        }
    }

    /// Number of pages in the open document.
    pub fn page_count(&self) -> usize {
        self.source.page_count()
    }

    /// Directory page images are written to.
    pub fn images_dir(&self) -> PathBuf {
        self.options.output_dir.join("images")
    }

    /// Process every page in order and aggregate the results.
    ///
    /// An error on any page aborts the run; images already written for
    /// earlier pages are left in place.
    pub fn extract(&self) -> Result<DocumentResult> {
        self.extract_with_progress(|_, _| {})
    }

    /// Like [`extract`](Self::extract), invoking `on_page(page_number,
    /// page_count)` after each page finishes (1-based page number).
    pub fn extract_with_progress<F>(&self, mut on_page: F) -> Result<DocumentResult>
    where
        F: FnMut(usize, usize),
    {
        if self.options.save_images {
            fs::create_dir_all(self.images_dir())?;
        }

        let page_count = self.source.page_count();
        let mut result = DocumentResult::new(self.source.filename(), page_count as u32);

        for index in 0..page_count {
            log::debug!("processing page {}", index + 1);

            let text = self.source.page_text(index)?;
            let images = if self.options.save_images {
                self.save_page_images(index)?
            } else {
                Vec::new()
            };
            let questions = self.parser.parse(&text, index);

            let page = PageResult {
                page_number: index as u32 + 1,
                text,
                images,
                questions_found: questions.len(),
            };
            result.add_page(page, questions);
            on_page(index + 1, page_count);
        }

        Ok(result)
    }

    /// Persist the PNG-encodable images of one page and return their
    /// paths.
    ///
    /// `k` in `page<N>_image<k>.png` is the 1-based encounter index on
    /// the page; an image skipped for its color space still consumes
    /// its index.
    fn save_page_images(&self, index: usize) -> Result<Vec<String>> {
        let images = self.source.page_images(index)?;
        let images_dir = self.images_dir();
        let mut paths = Vec::new();

        for (k, image) in images.iter().enumerate() {
            if !image.is_png_encodable() {
                log::debug!(
                    "skipping image {} on page {} ({} channels)",
                    k + 1,
                    index + 1,
                    image.channels
                );
                continue;
            }

            let path = images_dir.join(format!("page{}_image{}.png", index + 1, k + 1));
            fs::write(&path, image.to_png()?)?;
            paths.push(path.to_string_lossy().into_owned());
        }

        Ok(paths)
    }

    /// Write the two JSON artifacts for a finished run.
    pub fn save_results(&self, result: &DocumentResult) -> Result<OutputPaths> {
        fs::create_dir_all(&self.options.output_dir)?;

        let structured_questions = self.options.output_dir.join("structured_questions.json");
        let complete_extraction = self.options.output_dir.join("complete_extraction.json");

        let questions_json = crate::render::to_json(&result.questions, crate::render::JsonFormat::Pretty)?;
        fs::write(&structured_questions, questions_json)?;

        let complete_json = crate::render::to_json(result, crate::render::JsonFormat::Pretty)?;
        fs::write(&complete_extraction, complete_json)?;

        Ok(OutputPaths {
            structured_questions,
            complete_extraction,
            images_dir: self.images_dir(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = ExtractOptions::new()
            .with_output_dir("/tmp/out")
            .text_only();

        assert_eq!(options.output_dir, PathBuf::from("/tmp/out"));
        assert!(!options.save_images);
    }

    #[test]
    fn test_default_options() {
        let options = ExtractOptions::default();
        assert_eq!(options.output_dir, PathBuf::from("extracted_content"));
        assert!(options.save_images);
    }
}
