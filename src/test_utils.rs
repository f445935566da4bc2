#[cfg(test)]
pub mod fixtures {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    use crate::models::domain::QuizItem;

    /// A short document about European capitals.
    pub fn sample_document() -> String {
        "Paris is the capital of France. Rome is the capital of Italy. \
         Madrid is the capital of Spain and lies near the centre of the country."
            .to_string()
    }

    /// Three quiz items with answer keys B, C and D.
    pub fn sample_quiz() -> Vec<QuizItem> {
        vec![
            quiz_item(
                "What is the capital of France?",
                ["A. Berlin", "B. Paris", "C. Rome", "D. Madrid"],
                "B",
            ),
            quiz_item(
                "What is the capital of Italy?",
                ["A. Paris", "B. Madrid", "C. Rome", "D. Lisbon"],
                "C",
            ),
            quiz_item(
                "Which capital lies near the centre of its country?",
                ["A. Paris", "B. Rome", "C. Lisbon", "D. Madrid"],
                "D",
            ),
        ]
    }

    pub fn sample_quiz_json() -> String {
        serde_json::to_string_pretty(&sample_quiz()).expect("sample quiz serializes")
    }

    fn quiz_item(question: &str, options: [&str; 4], correct: &str) -> QuizItem {
        QuizItem {
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_option: correct.to_string(),
        }
    }

    /// Builds an in-memory PDF with one page per entry of `pages`.
    pub fn sample_pdf(pages: &[&str]) -> Vec<u8> {
        let pages: Vec<Option<&str>> = pages.iter().copied().map(Some).collect();
        sample_pdf_with_unreadable_pages(&pages)
    }

    /// Like `sample_pdf`, but a `None` page gets a content stream that does
    /// not decode to any text operators.
    pub fn sample_pdf_with_unreadable_pages(pages: &[Option<&str>]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for page in pages {
            let stream = match page {
                Some(text) => {
                    let content = Content {
                        operations: vec![
                            Operation::new("BT", vec![]),
                            Operation::new("Tf", vec!["F1".into(), 24.into()]),
                            Operation::new("Td", vec![100.into(), 600.into()]),
                            Operation::new("Tj", vec![Object::string_literal(*text)]),
                            Operation::new("ET", vec![]),
                        ],
                    };
                    let encoded = content.encode().expect("content stream encodes");
                    Stream::new(dictionary! {}, encoded)
                }
                None => Stream::new(
                    dictionary! { "Filter" => "FlateDecode" },
                    b"\x00\x9c\xffgarbled ((stream".to_vec(),
                ),
            };
            let content_id = doc.add_object(stream);
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).expect("pdf saves to memory");
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_sample_quiz_has_consistent_keys() {
        let quiz = sample_quiz();
        assert_eq!(quiz.len(), 3);
        assert!(quiz.iter().all(|item| item.has_consistent_answer_key()));
    }

    #[test]
    fn test_unreadable_page_fixture_keeps_page_count() {
        let pdf = sample_pdf_with_unreadable_pages(&[Some("Hello"), None]);
        let doc = lopdf::Document::load_mem(&pdf).expect("fixture loads");
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn test_sample_pdf_starts_with_header() {
        let pdf = sample_pdf(&["Hello"]);
        assert!(pdf.starts_with(b"%PDF-1.5"));
    }
}
