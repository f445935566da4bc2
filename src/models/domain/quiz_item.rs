use serde::{Deserialize, Serialize};
use validator::Validate;

/// One multiple-choice question as returned by the model.
///
/// Options are expected to carry their label as a prefix ("A. ...") and
/// `correct_option` to be the bare letter. Neither is enforced on decode.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct QuizItem {
    pub question: String,
    #[validate(length(equal = 4))]
    pub options: Vec<String>,
    pub correct_option: String,
}

impl QuizItem {
    /// Whether the item has four options and its answer key names one of them.
    pub fn has_consistent_answer_key(&self) -> bool {
        if self.validate().is_err() {
            return false;
        }
        let key = self.correct_option.trim();
        !key.is_empty()
            && self
                .options
                .iter()
                .any(|option| option_label(option).is_some_and(|label| label.eq_ignore_ascii_case(key)))
    }
}

/// Leading letter of an option such as "B. Paris" or "b) Paris".
fn option_label(option: &str) -> Option<&str> {
    let option = option.trim_start();
    let end = option.find(|c: char| !c.is_ascii_alphabetic())?;
    let label = &option[..end];
    let rest = option[end..].trim_start();
    if label.len() == 1 && (rest.starts_with('.') || rest.starts_with(')') || rest.starts_with(':'))
    {
        Some(label)
    } else {
        None
    }
}
