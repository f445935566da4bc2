//! Task-specific instruction strings. Pure functions, no I/O.

use crate::constants::prompts::*;
use crate::models::domain::Task;

/// A task together with the parameters its template needs.
#[derive(Clone, Copy, Debug)]
pub enum TaskRequest<'a> {
    Summarize {
        document: &'a str,
    },
    Answer {
        document: &'a str,
        question: &'a str,
    },
    GenerateQuiz {
        document: &'a str,
        num_questions: usize,
    },
    GenerateSubjective {
        document: &'a str,
        num_questions: usize,
    },
    EvaluateSubjective {
        question: &'a str,
        answer: &'a str,
    },
}

impl TaskRequest<'_> {
    pub fn task(&self) -> Task {
        match self {
            TaskRequest::Summarize { .. } => Task::Summarize,
            TaskRequest::Answer { .. } => Task::Answer,
            TaskRequest::GenerateQuiz { .. } => Task::GenerateQuiz,
            TaskRequest::GenerateSubjective { .. } => Task::GenerateSubjective,
            TaskRequest::EvaluateSubjective { .. } => Task::EvaluateSubjective,
        }
    }

    /// The document text this task embeds, if any.
    pub fn document(&self) -> Option<&str> {
        match self {
            TaskRequest::Summarize { document }
            | TaskRequest::Answer { document, .. }
            | TaskRequest::GenerateQuiz { document, .. }
            | TaskRequest::GenerateSubjective { document, .. } => Some(*document),
            TaskRequest::EvaluateSubjective { .. } => None,
        }
    }

    /// The truncated document prefix this task sends to the model.
    pub fn excerpt(&self) -> Option<&str> {
        let ceiling = match self {
            TaskRequest::Summarize { .. } => SUMMARY_EXCERPT_CHARS,
            TaskRequest::Answer { .. } => QA_EXCERPT_CHARS,
            TaskRequest::GenerateQuiz { .. } => QUIZ_EXCERPT_CHARS,
            TaskRequest::GenerateSubjective { .. } => SUBJECTIVE_EXCERPT_CHARS,
            TaskRequest::EvaluateSubjective { .. } => return None,
        };
        self.document().map(|document| excerpt(document, ceiling))
    }
}

/// Builds the prompt for `request`.
pub fn build(request: &TaskRequest<'_>) -> String {
    match *request {
        TaskRequest::Summarize { document } => summary_prompt(document),
        TaskRequest::Answer { document, question } => answer_prompt(document, question),
        TaskRequest::GenerateQuiz {
            document,
            num_questions,
        } => quiz_prompt(document, num_questions),
        TaskRequest::GenerateSubjective {
            document,
            num_questions,
        } => subjective_prompt(document, num_questions),
        TaskRequest::EvaluateSubjective { question, answer } => {
            evaluation_prompt(question, answer)
        }
    }
}

pub fn summary_prompt(document: &str) -> String {
    format!(
        "Summarize the following document in no more than {SUMMARY_MAX_WORDS} words:\n\n{}",
        excerpt(document, SUMMARY_EXCERPT_CHARS)
    )
}

pub fn answer_prompt(document: &str, question: &str) -> String {
    format!(
        "{QA_PREAMBLE}\n\n\
         DOCUMENT:\n{}\n\n\
         QUESTION:\n{question}\n\n\
         Answer the question, then add a '{JUSTIFICATION_MARKER}' section quoting the supporting line.",
        excerpt(document, QA_EXCERPT_CHARS)
    )
}

pub fn quiz_prompt(document: &str, num_questions: usize) -> String {
    format!(
        "Read the following document and generate {num_questions} MCQs.\n\
         {QUIZ_OPTION_RULES}\n\
         Return output strictly in this JSON format:\n\
         {QUIZ_JSON_SHAPE}\n\n\
         Document:\n{}",
        excerpt(document, QUIZ_EXCERPT_CHARS)
    )
}

pub fn subjective_prompt(document: &str, num_questions: usize) -> String {
    format!(
        "From the document below, generate {num_questions} descriptive questions.\n\
         {SUBJECTIVE_RULES}\n\n\
         Document:\n{}",
        excerpt(document, SUBJECTIVE_EXCERPT_CHARS)
    )
}

pub fn evaluation_prompt(question: &str, answer: &str) -> String {
    format!(
        "{EVALUATOR_PREAMBLE}\n\
         {EVALUATOR_RULES}\n\n\
         Question: {question}\n\
         Answer: {answer}\n"
    )
}

/// Prefix of `text` holding at most `max_chars` characters.
pub fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
