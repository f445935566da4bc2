// Excerpt ceilings, in characters. Each task keeps its own value.
pub const SUMMARY_EXCERPT_CHARS: usize = 12_000;
pub const QA_EXCERPT_CHARS: usize = 12_000;
pub const QUIZ_EXCERPT_CHARS: usize = 10_000;
pub const SUBJECTIVE_EXCERPT_CHARS: usize = 10_000;

pub const DEFAULT_QUIZ_QUESTIONS: usize = 5;
pub const DEFAULT_SUBJECTIVE_QUESTIONS: usize = 3;

pub const SUMMARY_MAX_WORDS: usize = 150;

/// Literal that introduces the supporting quote in a Q&A response.
pub const JUSTIFICATION_MARKER: &str = "Justification:";

pub const QA_PREAMBLE: &str =
    "You are a helpful assistant. Use ONLY the content in the following document.";

pub const QUIZ_JSON_SHAPE: &str = r#"[{"question": "...", "options": ["A. ...", "B. ...", "C. ...", "D. ..."], "correct_option": "A"}, ...]"#;

pub const QUIZ_OPTION_RULES: &str =
    "Each question must have 4 options and the correct answer clearly marked with a letter A/B/C/D.";

pub const SUBJECTIVE_RULES: &str = "Do NOT include answers or any extra text.";

pub const EVALUATOR_PREAMBLE: &str =
    "You are an evaluator. Read the question and the student's answer.";

pub const EVALUATOR_RULES: &str = "Provide short feedback (1-2 lines). Do not assign marks.";
