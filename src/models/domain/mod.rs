pub mod document;
pub mod qa_result;
pub mod quiz_item;
pub mod session;
pub mod task;
pub use document::DocumentFormat;
pub use qa_result::QaResult;
pub use quiz_item::QuizItem;
pub use session::{Challenge, Session};
pub use task::Task;
