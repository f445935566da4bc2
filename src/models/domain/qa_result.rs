use serde::{Deserialize, Serialize};

/// An answer grounded in the document, with the quoted supporting text.
///
/// `justification` is empty when the model did not supply one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QaResult {
    pub answer: String,
    pub justification: String,
}

impl QaResult {
    pub fn has_justification(&self) -> bool {
        !self.justification.is_empty()
    }
}
