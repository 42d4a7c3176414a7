//! Page-text parsing module.

mod question_parser;

pub use question_parser::QuestionParser;
