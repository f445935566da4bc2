use std::fmt;

use serde::Serialize;

/// A unit of work delegated to the generation model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Task {
    Summarize,
    Answer,
    GenerateQuiz,
    GenerateSubjective,
    EvaluateSubjective,
}

impl Task {
    /// Label used in user-visible error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Task::Summarize => "summarization",
            Task::Answer => "Q&A",
            Task::GenerateQuiz => "quiz generation",
            Task::GenerateSubjective => "subjective question generation",
            Task::EvaluateSubjective => "evaluation",
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
