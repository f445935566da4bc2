//! Interpretation of raw model output, one parser per task.
//!
//! Every parser is total: it returns a value or an `AppError`, never panics.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::constants::prompts::JUSTIFICATION_MARKER;
use crate::errors::{AppError, AppResult};
use crate::models::domain::{QaResult, QuizItem};
use crate::services::prompt_builder::excerpt;

const MALFORMED_EXCERPT_CHARS: usize = 300;

static EMBEDDED_QUIZ_ARRAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\[\s*\{.*?\}\s*\]").expect("EMBEDDED_QUIZ_ARRAY is a valid regex pattern")
});

static ENUMERATION_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:\d+[.)]?|[-*•])\s*").expect("ENUMERATION_PREFIX is a valid regex pattern")
});

/// Stages tried, in order, when decoding a quiz response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum QuizStage {
    /// The whole trimmed response is the JSON array.
    Strict,
    /// The first bracketed array of objects inside surrounding prose.
    Embedded,
}

impl QuizStage {
    const ALL: [QuizStage; 2] = [QuizStage::Strict, QuizStage::Embedded];

    fn decode(self, content: &str) -> Result<Vec<QuizItem>, String> {
        let candidate = match self {
            QuizStage::Strict => content,
            QuizStage::Embedded => EMBEDDED_QUIZ_ARRAY
                .find(content)
                .map(|m| m.as_str())
                .ok_or_else(|| "no array of objects found".to_string())?,
        };
        serde_json::from_str(candidate).map_err(|e| e.to_string())
    }
}

/// Decodes a quiz response, falling back to the first embedded JSON array.
pub fn parse_quiz(raw: &str) -> AppResult<Vec<QuizItem>> {
    let content = raw.trim();

    let mut last_failure = String::new();
    for stage in QuizStage::ALL {
        match stage.decode(content) {
            Ok(items) => {
                log::debug!("Quiz decoded at {:?} stage ({} items)", stage, items.len());
                let inconsistent = items
                    .iter()
                    .filter(|item| !item.has_consistent_answer_key())
                    .count();
                if inconsistent > 0 {
                    log::warn!("{} quiz item(s) have no option matching their answer key", inconsistent);
                }
                return Ok(items);
            }
            Err(reason) => {
                log::debug!("Quiz {:?} decode failed: {}", stage, reason);
                last_failure = format!("{:?} stage: {}", stage, reason);
            }
        }
    }

    log::warn!("Model returned a quiz that could not be decoded ({})", last_failure);
    Err(AppError::MalformedModelOutput {
        reason: last_failure,
        excerpt: excerpt(content, MALFORMED_EXCERPT_CHARS).to_string(),
    })
}

/// Non-empty lines with enumeration stripped, at most `count` of them.
pub fn parse_subjective_questions(raw: &str, count: usize) -> Vec<String> {
    raw.lines()
        .map(|line| ENUMERATION_PREFIX.replace(line, "").trim().to_string())
        .filter(|question| !question.is_empty())
        .take(count)
        .collect()
}

/// Splits a Q&A response on the justification marker.
pub fn parse_answer(raw: &str) -> QaResult {
    let content = raw.trim();
    match content.split_once(JUSTIFICATION_MARKER) {
        Some((answer, justification)) => QaResult {
            answer: answer.trim().to_string(),
            justification: justification.trim().to_string(),
        },
        None => QaResult {
            answer: content.to_string(),
            justification: String::new(),
        },
    }
}

pub fn parse_feedback(raw: &str) -> String {
    raw.trim().to_string()
}

/// Local grading: correct iff the submitted option starts with the answer
/// letter, ignoring case.
pub fn grade_objective(user_answer: &str, correct_letter: &str) -> bool {
    let correct = correct_letter.trim().to_uppercase();
    !correct.is_empty() && user_answer.trim().to_uppercase().starts_with(&correct)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuizScore {
    pub score: usize,
    pub total: usize,
    pub results: Vec<bool>,
}

/// Grades `answers` against `items` position by position. Unanswered items
/// count as incorrect.
pub fn score_quiz(items: &[QuizItem], answers: &[String]) -> QuizScore {
    let results: Vec<bool> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            answers
                .get(i)
                .is_some_and(|answer| grade_objective(answer, &item.correct_option))
        })
        .collect();

    QuizScore {
        score: results.iter().filter(|correct| **correct).count(),
        total: items.len(),
        results,
    }
}
