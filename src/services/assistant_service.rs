use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{QaResult, QuizItem},
    services::{
        model_gateway::TextGenerator,
        prompt_builder::{self, TaskRequest},
        response_parser,
    },
};

/// Runs each task as build prompt -> one generation call -> parse.
pub struct AssistantService {
    generator: Arc<dyn TextGenerator>,
}

impl AssistantService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    async fn run(&self, request: TaskRequest<'_>) -> AppResult<String> {
        let task = request.task();
        if request.document().is_some_and(|doc| doc.trim().is_empty()) {
            return Err(AppError::EmptyDocument);
        }

        let prompt = prompt_builder::build(&request);
        log::info!(
            "Running {} task (excerpt {} chars, prompt {} chars)",
            task,
            request.excerpt().map_or(0, |excerpt| excerpt.chars().count()),
            prompt.chars().count()
        );

        self.generator.generate(&prompt).await.map_err(|e| {
            log::warn!("{} call to the model failed: {}", task, e);
            AppError::ServiceError {
                task,
                message: e.to_string(),
            }
        })
    }

    pub async fn summarize(&self, document: &str) -> AppResult<String> {
        let raw = self.run(TaskRequest::Summarize { document }).await?;
        Ok(raw.trim().to_string())
    }

    pub async fn answer_question(&self, document: &str, question: &str) -> AppResult<QaResult> {
        let raw = self.run(TaskRequest::Answer { document, question }).await?;
        let result = response_parser::parse_answer(&raw);
        if !result.has_justification() {
            log::warn!("Answer came back without a justification");
        }
        Ok(result)
    }

    pub async fn generate_quiz(
        &self,
        document: &str,
        num_questions: usize,
    ) -> AppResult<Vec<QuizItem>> {
        ensure_question_count(num_questions)?;
        let raw = self
            .run(TaskRequest::GenerateQuiz {
                document,
                num_questions,
            })
            .await?;
        response_parser::parse_quiz(&raw)
    }

    pub async fn generate_subjective_questions(
        &self,
        document: &str,
        num_questions: usize,
    ) -> AppResult<Vec<String>> {
        ensure_question_count(num_questions)?;
        let raw = self
            .run(TaskRequest::GenerateSubjective {
                document,
                num_questions,
            })
            .await?;
        Ok(response_parser::parse_subjective_questions(
            &raw,
            num_questions,
        ))
    }

    /// Short qualitative feedback. Never fails: an error becomes the
    /// feedback text.
    pub async fn evaluate_subjective(&self, answer: &str, question: &str) -> String {
        match self
            .run(TaskRequest::EvaluateSubjective { question, answer })
            .await
        {
            Ok(raw) => response_parser::parse_feedback(&raw),
            Err(e) => e.to_string(),
        }
    }
}

fn ensure_question_count(num_questions: usize) -> AppResult<()> {
    if num_questions == 0 {
        return Err(AppError::ValidationError(
            "num_questions must be at least 1".to_string(),
        ));
    }
    Ok(())
}
