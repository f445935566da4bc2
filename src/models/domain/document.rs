use std::fmt;

use serde::{Deserialize, Serialize};

pub const PDF_MIME: &str = "application/pdf";
pub const TEXT_MIME: &str = "text/plain";

/// File formats accepted for upload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Text,
}

impl DocumentFormat {
    /// Resolves a declared MIME type, ignoring parameters such as `charset`.
    pub fn from_mime(declared: &str) -> Option<Self> {
        let essence = declared
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            PDF_MIME => Some(DocumentFormat::Pdf),
            TEXT_MIME => Some(DocumentFormat::Text),
            _ => None,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => PDF_MIME,
            DocumentFormat::Text => TEXT_MIME,
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_mime())
    }
}
