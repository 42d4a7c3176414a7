//! Line-oriented question parser.
//!
//! Segments a page's raw text into [`QuestionRecord`]s. The page text
//! is scanned line by line; each non-empty line is classified as a
//! question marker, an option, an answer line, or prompt continuation,
//! in that precedence order, and folded into mutable accumulator state.
//! Malformed input never faults — it degrades to fewer or emptier
//! records.

use regex::Regex;

use crate::model::QuestionRecord;

/// Classification of one trimmed, non-empty line.
#[derive(Debug, PartialEq, Eq)]
enum LineClass<'a> {
    /// `<digits>.` at the start of the line opens a new question; `rest`
    /// is the trimmed text after the first period.
    QuestionStart { number: u32, rest: &'a str },

    /// `[A]`..`[D]` at the start of the line; `text` is the trimmed
    /// remainder after the bracket.
    OptionItem { letter: char, text: &'a str },

    /// A line starting with the literal `Ans`. `letter` carries the
    /// first bracketed A-D letter found anywhere in the line, if any.
    AnswerLine { letter: Option<char> },

    /// Anything else: prompt continuation (or pre-question noise).
    Continuation,
}

/// Accumulator state threaded across the line scan.
#[derive(Debug, Default)]
struct ScanState {
    number: Option<u32>,
    prompt: String,
    options: Vec<String>,
    answer: String,
}

/// Parser for numbered multiple-choice question text.
pub struct QuestionParser {
    question_start: Regex,
    option_item: Regex,
    answer_letter: Regex,
}

impl QuestionParser {
    /// Create a parser with its line patterns compiled.
    pub fn new() -> Self {
        Self {
            question_start: Regex::new(r"^(\d+)\.").unwrap(),
            option_item: Regex::new(r"^\[([A-D])\]\s*(.*)").unwrap(),
            answer_letter: Regex::new(r"\[([A-D])\]").unwrap(),
        }
    }

    /// Parse one page's text into question records.
    ///
    /// `page_index` is 0-based; emitted records carry the 1-based page
    /// number. Pure function of its inputs: identical text and index
    /// always yield identical records.
    pub fn parse(&self, page_text: &str, page_index: usize) -> Vec<QuestionRecord> {
        let page_number = page_index as u32 + 1;
        let mut questions = Vec::new();
        let mut state = ScanState::default();

        for raw_line in page_text.lines() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            match self.classify(line) {
                LineClass::QuestionStart { number, rest } => {
                    Self::finish_question(&state, page_number, &mut questions);
                    state.number = Some(number);
                    state.prompt = rest.to_string();
                    state.options.clear();
                    state.answer.clear();
                }
                LineClass::OptionItem { letter, text } => {
                    // Appended unconditionally; orphan options collected
                    // before the first marker are wiped when it opens.
                    state.options.push(format!("[{}] {}", letter, text));
                }
                LineClass::AnswerLine { letter } => {
                    // A recognizable bracket overwrites; its absence is
                    // a no-op, not a reset.
                    if let Some(letter) = letter {
                        state.answer = letter.to_string();
                    }
                }
                LineClass::Continuation => {
                    if state.number.is_some() {
                        state.prompt.push(' ');
                        state.prompt.push_str(line);
                    }
                }
            }
        }

        Self::finish_question(&state, page_number, &mut questions);
        questions
    }

    /// Classify one trimmed, non-empty line.
    fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if let Some(caps) = self.question_start.captures(line) {
            let marker = caps.get(0).unwrap();
            // A digit run too long for u32 is not a usable marker;
            // fall through to continuation.
            if let Ok(number) = caps[1].parse::<u32>() {
                return LineClass::QuestionStart {
                    number,
                    rest: line[marker.end()..].trim(),
                };
            }
        }

        if let Some(caps) = self.option_item.captures(line) {
            let letter = caps[1].chars().next().unwrap();
            let text = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");
            return LineClass::OptionItem { letter, text };
        }

        if line.starts_with("Ans") {
            let letter = self
                .answer_letter
                .captures(line)
                .map(|caps| caps[1].chars().next().unwrap());
            return LineClass::AnswerLine { letter };
        }

        LineClass::Continuation
    }

    /// Emit the open question, if any, unless its prompt stayed empty.
    fn finish_question(state: &ScanState, page_number: u32, out: &mut Vec<QuestionRecord>) {
        if let Some(number) = state.number {
            if !state.prompt.is_empty() {
                out.push(QuestionRecord::new(
                    number,
                    state.prompt.trim().to_string(),
                    state.options.clone(),
                    state.answer.clone(),
                    page_number,
                ));
            }
        }
    }
}

impl Default for QuestionParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(lines: &[&str], page_index: usize) -> Vec<QuestionRecord> {
        QuestionParser::new().parse(&lines.join("\n"), page_index)
    }

    #[test]
    fn test_single_question() {
        let records = parse(&["1. What is 2+2?", "[A] 3", "[B] 4", "Ans: [B]"], 0);

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.number, 1);
        assert_eq!(record.prompt, "What is 2+2?");
        assert_eq!(record.options, vec!["[A] 3", "[B] 4"]);
        assert_eq!(record.answer, "B");
        assert_eq!(record.page, 1);
        assert_eq!(record.image_ref, "page1_question1.png");
        assert_eq!(
            record.option_image_refs,
            vec!["page1_option0.png", "page1_option1.png"]
        );
    }

    #[test]
    fn test_multi_line_prompt_joined_with_space() {
        let records = parse(&["2. Next question", "continued text", "3. Another"], 0);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].prompt, "Next question continued text");
        assert_eq!(records[1].number, 3);
        assert_eq!(records[1].prompt, "Another");
    }

    #[test]
    fn test_empty_prompt_is_dropped() {
        // Marker with no trailing text, followed only by options and an
        // answer: the prompt stays empty, so nothing is emitted.
        let records = parse(&["4.", "[A] yes", "[B] no", "Ans: [A]"], 0);
        assert!(records.is_empty());
    }

    #[test]
    fn test_trailing_open_question_with_empty_prompt_dropped() {
        let records = parse(&["1. Real question", "[A] x", "5."], 0);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].number, 1);
    }

    #[test]
    fn test_marker_trailing_text_is_prompt() {
        let records = parse(&["6. Pick one", "[A] left", "[B] right"], 0);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].prompt, "Pick one");
        assert_eq!(records[0].options.len(), 2);
    }

    #[test]
    fn test_pre_question_lines_are_discarded() {
        let records = parse(
            &[
                "Sample Paper 2024-25",
                "[A] orphan option",
                "Ans: [C]",
                "1. First question",
                "[A] one",
            ],
            0,
        );

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.prompt, "First question");
        // The orphan option and answer never attach to question 1.
        assert_eq!(record.options, vec!["[A] one"]);
        assert_eq!(record.answer, "");
    }

    #[test]
    fn test_answer_without_bracket_is_noop() {
        let records = parse(
            &["1. Q", "[A] a", "Ans: [A]", "Answer pending review", "2. R", "x"],
            0,
        );

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].answer, "A");
        assert_eq!(records[1].answer, "");
    }

    #[test]
    fn test_last_valid_answer_wins() {
        let records = parse(&["1. Q", "Ans: [A]", "Ans: [C]", "Ans: none"], 0);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].answer, "C");
    }

    #[test]
    fn test_non_abcd_bracket_is_continuation() {
        let records = parse(&["1. Choose", "[E] not an option", "[A] real"], 0);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].prompt, "Choose [E] not an option");
        assert_eq!(records[0].options, vec!["[A] real"]);
    }

    #[test]
    fn test_duplicate_and_non_sequential_numbers_kept() {
        let records = parse(&["9. First", "3. Second", "3. Third"], 0);

        let numbers: Vec<u32> = records.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![9, 3, 3]);
    }

    #[test]
    fn test_page_number_is_one_based() {
        let records = parse(&["12. On a later page"], 4);
        assert_eq!(records[0].page, 5);
        assert_eq!(records[0].image_ref, "page5_question12.png");
    }

    #[test]
    fn test_option_image_refs_track_option_count() {
        let records = parse(
            &["1. Q", "[A] a", "[B] b", "[C] c", "[D] d", "2. R", "text"],
            0,
        );

        for record in &records {
            assert_eq!(record.option_image_refs.len(), record.options.len());
        }
        assert_eq!(records[0].options.len(), 4);
        assert_eq!(records[1].options.len(), 0);
    }

    #[test]
    fn test_duplicate_options_allowed() {
        let records = parse(&["1. Q", "[A] same", "[A] same"], 0);
        assert_eq!(records[0].options, vec!["[A] same", "[A] same"]);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let records = parse(&["1. Q", "", "   ", "more prompt", "", "[A] a"], 0);
        assert_eq!(records[0].prompt, "Q more prompt");
        assert_eq!(records[0].options.len(), 1);
    }

    #[test]
    fn test_ans_prefix_is_case_sensitive() {
        let records = parse(&["1. Q", "ans: [B]"], 0);
        // Lowercase "ans" is continuation text, not an answer line.
        assert_eq!(records[0].answer, "");
        assert_eq!(records[0].prompt, "Q ans: [B]");
    }

    #[test]
    fn test_parse_is_deterministic() {
        let text = "1. Q\n[A] a\n[B] b\nAns: [A]\n2. R\nmore\n[C] c\n";
        let parser = QuestionParser::new();
        assert_eq!(parser.parse(text, 3), parser.parse(text, 3));
    }

    #[test]
    fn test_oversized_digit_run_is_continuation() {
        let records = parse(&["1. Q", "99999999999999999999. not a marker"], 0);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].prompt, "Q 99999999999999999999. not a marker");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse(&[], 0).is_empty());
        assert!(QuestionParser::new().parse("", 0).is_empty());
    }

    #[test]
    fn test_record_count_matches_markers_with_prompts() {
        // Three markers, one of which never gains prompt text.
        let records = parse(&["1. A question", "2.", "3. Another question"], 0);
        assert_eq!(records.len(), 2);
    }
}
