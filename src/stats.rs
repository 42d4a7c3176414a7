//! Question categorization and run statistics.

use std::collections::BTreeMap;

use crate::model::QuestionRecord;

/// Exam section a question number falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    LogicalReasoning,
    Mathematics,
    AchieverSection,
}

impl Category {
    /// Categorize a question number by the exam's fixed section bands.
    ///
    /// Returns `None` for numbers outside every band (zero).
    pub fn of(number: u32) -> Option<Self> {
        match number {
            1..=5 => Some(Self::LogicalReasoning),
            6..=30 => Some(Self::Mathematics),
            31.. => Some(Self::AchieverSection),
            0 => None,
        }
    }

    /// Human-readable section name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::LogicalReasoning => "Logical Reasoning",
            Self::Mathematics => "Mathematics",
            Self::AchieverSection => "Achiever Section",
        }
    }
}

/// Questions grouped by exam section.
#[derive(Debug, Default)]
pub struct Categorized<'a> {
    pub logical_reasoning: Vec<&'a QuestionRecord>,
    pub mathematics: Vec<&'a QuestionRecord>,
    pub achiever_section: Vec<&'a QuestionRecord>,
}

/// Group questions by section, preserving input order.
///
/// Questions outside every section band are dropped.
pub fn categorize(questions: &[QuestionRecord]) -> Categorized<'_> {
    let mut groups = Categorized::default();
    for question in questions {
        match Category::of(question.number) {
            Some(Category::LogicalReasoning) => groups.logical_reasoning.push(question),
            Some(Category::Mathematics) => groups.mathematics.push(question),
            Some(Category::AchieverSection) => groups.achiever_section.push(question),
            None => {}
        }
    }
    groups
}

/// Aggregate statistics over a run's questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_questions: usize,
    pub logical_reasoning: usize,
    pub mathematics: usize,
    pub achiever_section: usize,

    /// Question count per answer letter. Questions with no detected
    /// answer are counted under the empty string.
    pub answer_distribution: BTreeMap<String, usize>,

    pub questions_with_image_refs: usize,
}

impl Statistics {
    /// Compute statistics over every question in a run.
    pub fn from_questions(questions: &[QuestionRecord]) -> Self {
        let groups = categorize(questions);

        let mut answer_distribution: BTreeMap<String, usize> = BTreeMap::new();
        for question in questions {
            *answer_distribution.entry(question.answer.clone()).or_default() += 1;
        }

        let questions_with_image_refs = questions
            .iter()
            .filter(|q| !q.image_ref.is_empty())
            .count();

        Self {
            total_questions: questions.len(),
            logical_reasoning: groups.logical_reasoning.len(),
            mathematics: groups.mathematics.len(),
            achiever_section: groups.achiever_section.len(),
            answer_distribution,
            questions_with_image_refs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(number: u32, answer: &str) -> QuestionRecord {
        QuestionRecord::new(
            number,
            format!("Question {}", number),
            vec!["[A] one".to_string(), "[B] two".to_string()],
            answer.to_string(),
            1,
        )
    }

    #[test]
    fn test_category_bands() {
        assert_eq!(Category::of(1), Some(Category::LogicalReasoning));
        assert_eq!(Category::of(5), Some(Category::LogicalReasoning));
        assert_eq!(Category::of(6), Some(Category::Mathematics));
        assert_eq!(Category::of(30), Some(Category::Mathematics));
        assert_eq!(Category::of(31), Some(Category::AchieverSection));
        assert_eq!(Category::of(999), Some(Category::AchieverSection));
        assert_eq!(Category::of(0), None);
    }

    #[test]
    fn test_categorize_preserves_order() {
        let questions = vec![question(7, "A"), question(2, "B"), question(6, "C")];
        let groups = categorize(&questions);

        assert_eq!(groups.logical_reasoning.len(), 1);
        assert_eq!(groups.mathematics.len(), 2);
        assert!(groups.achiever_section.is_empty());
        assert_eq!(groups.mathematics[0].number, 7);
        assert_eq!(groups.mathematics[1].number, 6);
    }

    #[test]
    fn test_categorize_drops_zero() {
        let questions = vec![question(0, "A")];
        let groups = categorize(&questions);

        assert!(groups.logical_reasoning.is_empty());
        assert!(groups.mathematics.is_empty());
        assert!(groups.achiever_section.is_empty());
    }

    #[test]
    fn test_statistics() {
        let questions = vec![
            question(1, "A"),
            question(6, "A"),
            question(31, ""),
            question(32, "D"),
        ];
        let stats = Statistics::from_questions(&questions);

        assert_eq!(stats.total_questions, 4);
        assert_eq!(stats.logical_reasoning, 1);
        assert_eq!(stats.mathematics, 1);
        assert_eq!(stats.achiever_section, 2);
        assert_eq!(stats.answer_distribution.get("A"), Some(&2));
        assert_eq!(stats.answer_distribution.get("D"), Some(&1));
        assert_eq!(stats.answer_distribution.get(""), Some(&1));
        // every synthesized question carries an image reference
        assert_eq!(stats.questions_with_image_refs, 4);
    }

    #[test]
    fn test_statistics_empty_run() {
        let stats = Statistics::from_questions(&[]);
        assert_eq!(stats.total_questions, 0);
        assert!(stats.answer_distribution.is_empty());
    }
}
