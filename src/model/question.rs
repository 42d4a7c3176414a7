//! Question-level types.

use serde::{Deserialize, Serialize};

/// A single parsed multiple-choice question.
///
/// Field names in the serialized form follow the structured output
/// schema: `question_number`, `question`, `options`, `answer`, `page`,
/// `images`, `option_images`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// Question number as printed in the document.
    #[serde(rename = "question_number")]
    pub number: u32,

    /// Prompt text, whitespace-normalized (lines joined with a space).
    #[serde(rename = "question")]
    pub prompt: String,

    /// Options in encounter order, each of the form `"[A] text"`.
    pub options: Vec<String>,

    /// Answer letter (A-D), or empty string when unresolved.
    pub answer: String,

    /// Page the question was found on (1-based).
    pub page: u32,

    /// Synthesized filename for the question's illustration.
    ///
    /// Naming convention only: the file is not guaranteed to exist.
    /// Extracted images are saved under a parallel
    /// `page<N>_image<k>.png` scheme with no cross-reference.
    #[serde(rename = "images")]
    pub image_ref: String,

    /// Synthesized filenames for per-option illustrations, one per
    /// option index. Same caveat as [`image_ref`](Self::image_ref).
    #[serde(rename = "option_images")]
    pub option_image_refs: Vec<String>,
}

impl QuestionRecord {
    /// Build a record, synthesizing the image reference names from the
    /// page number and option count.
    pub fn new(number: u32, prompt: String, options: Vec<String>, answer: String, page: u32) -> Self {
        let image_ref = format!("page{}_question{}.png", page, number);
        let option_image_refs = (0..options.len())
            .map(|j| format!("page{}_option{}.png", page, j))
            .collect();

        Self {
            number,
            prompt,
            options,
            answer,
            page,
            image_ref,
            option_image_refs,
        }
    }

    /// Whether an answer letter was resolved for this question.
    pub fn has_answer(&self) -> bool {
        !self.answer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_synthesizes_image_refs() {
        let record = QuestionRecord::new(
            7,
            "What is 2+2?".to_string(),
            vec!["[A] 3".to_string(), "[B] 4".to_string()],
            "B".to_string(),
            2,
        );

        assert_eq!(record.image_ref, "page2_question7.png");
        assert_eq!(
            record.option_image_refs,
            vec!["page2_option0.png", "page2_option1.png"]
        );
        assert_eq!(record.option_image_refs.len(), record.options.len());
    }

    #[test]
    fn test_serde_field_names() {
        let record = QuestionRecord::new(1, "Q".to_string(), Vec::new(), String::new(), 1);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["question_number"], 1);
        assert_eq!(json["question"], "Q");
        assert_eq!(json["answer"], "");
        assert_eq!(json["images"], "page1_question1.png");
        assert!(json["option_images"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_has_answer() {
        let mut record = QuestionRecord::new(1, "Q".to_string(), Vec::new(), String::new(), 1);
        assert!(!record.has_answer());
        record.answer = "C".to_string();
        assert!(record.has_answer());
    }
}
