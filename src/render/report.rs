//! Plain-text summary report for a finished run.

use std::fmt::Write;

use crate::model::DocumentResult;
use crate::stats::{Category, Statistics};

/// Render a human-readable summary of an extraction run.
///
/// Covers the run totals, the per-section question counts, the answer
/// distribution, and a preview of the first few parsed questions.
pub fn render_report(result: &DocumentResult) -> String {
    let stats = Statistics::from_questions(&result.questions);
    let mut out = String::new();

    let _ = writeln!(out, "Extraction summary for {}", result.pdf_info.filename);
    let _ = writeln!(out, "  Pages processed:  {}", result.pdf_info.extraction_summary.pages_processed);
    let _ = writeln!(out, "  Images extracted: {}", result.pdf_info.extraction_summary.total_images_extracted);
    let _ = writeln!(out, "  Questions found:  {}", result.pdf_info.extraction_summary.total_questions_found);

    let _ = writeln!(out, "\nQuestions by section:");
    let sections = [
        (Category::LogicalReasoning, stats.logical_reasoning),
        (Category::Mathematics, stats.mathematics),
        (Category::AchieverSection, stats.achiever_section),
    ];
    for (category, count) in sections {
        let _ = writeln!(out, "  {:<18} {}", format!("{}:", category.label()), count);
    }

    if !stats.answer_distribution.is_empty() {
        let _ = writeln!(out, "\nAnswer distribution:");
        for (answer, count) in &stats.answer_distribution {
            let label = if answer.is_empty() { "(none)" } else { answer.as_str() };
            let _ = writeln!(out, "  {}: {}", label, count);
        }
    }

    if !result.questions.is_empty() {
        let _ = writeln!(out, "\nFirst questions:");
        for question in result.questions.iter().take(3) {
            let _ = writeln!(out, "  Q{}: {}", question.number, truncate(&question.prompt, 100));
            for option in &question.options {
                let _ = writeln!(out, "    {}", truncate(option, 100));
            }
            if question.has_answer() {
                let _ = writeln!(out, "    Answer: {}", question.answer);
            }
        }
    }

    out
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut shortened: String = text.chars().take(max_chars).collect();
        shortened.push_str("...");
        shortened
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PageResult, QuestionRecord};

    fn sample_result() -> DocumentResult {
        let mut result = DocumentResult::new("sample.pdf", 1);
        let questions = vec![
            QuestionRecord::new(
                1,
                "What is 2 + 2?".to_string(),
                vec!["[A] 3".to_string(), "[B] 4".to_string()],
                "B".to_string(),
                1,
            ),
            QuestionRecord::new(
                7,
                "Compute 3 x 3.".to_string(),
                vec!["[A] 6".to_string(), "[B] 9".to_string()],
                String::new(),
                1,
            ),
        ];
        let page = PageResult {
            page_number: 1,
            text: String::new(),
            images: Vec::new(),
            questions_found: questions.len(),
        };
        result.add_page(page, questions);
        result
    }

    #[test]
    fn test_report_sections() {
        let report = render_report(&sample_result());

        assert!(report.contains("sample.pdf"));
        assert!(report.contains("Questions found:  2"));
        assert!(report.contains("Logical Reasoning: 1"));
        assert!(report.contains("Mathematics:       1"));
        assert!(report.contains("Achiever Section:  0"));
        assert!(report.contains("B: 1"));
        assert!(report.contains("(none): 1"));
        assert!(report.contains("Q1: What is 2 + 2?"));
        assert!(report.contains("Answer: B"));
    }

    #[test]
    fn test_truncate_long_prompt() {
        let long = "x".repeat(150);
        assert_eq!(truncate(&long, 100).chars().count(), 103);
        assert_eq!(truncate("short", 100), "short");
    }
}
