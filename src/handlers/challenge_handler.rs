use actix_web::{post, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::Challenge,
        dto::{
            request::{ChallengeKind, GenerateChallengeRequest, SubmitAnswersRequest},
            response::{ChallengeResponse, SubjectiveFeedback, SubjectiveFeedbackResponse},
        },
    },
    services::response_parser::score_quiz,
};

/// Generates an objective quiz or a subjective question set, replacing any
/// challenge already on the session.
#[post("/api/documents/{id}/challenges")]
async fn generate_challenge(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<GenerateChallengeRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let session = state.session_service.get_session(&id).await?;
    let count = request.question_count();

    let challenge = match request.kind {
        ChallengeKind::Objective => Challenge::Objective(
            state
                .assistant_service
                .generate_quiz(&session.document, count)
                .await?,
        ),
        ChallengeKind::Subjective => Challenge::Subjective(
            state
                .assistant_service
                .generate_subjective_questions(&session.document, count)
                .await?,
        ),
    };
    log::info!(
        "Generated {} {:?} questions for session {}",
        challenge.len(),
        request.kind,
        session.id
    );

    let session = state
        .session_service
        .store_challenge(&session.id, challenge.clone())
        .await?;
    Ok(HttpResponse::Created().json(ChallengeResponse {
        session_id: session.id,
        count: challenge.len(),
        challenge,
    }))
}

#[post("/api/documents/{id}/challenges/objective/submissions")]
async fn submit_objective_answers(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<SubmitAnswersRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let session = state.session_service.get_session(&id).await?;
    let quiz = session.objective_quiz().ok_or_else(|| {
        AppError::ValidationError("No objective quiz has been generated for this document".into())
    })?;

    let score = score_quiz(quiz, &request.answers);
    Ok(HttpResponse::Ok().json(score))
}

/// Feedback for each subjective question. Evaluation problems are reported
/// inside the feedback text rather than as an error response.
#[post("/api/documents/{id}/challenges/subjective/submissions")]
async fn submit_subjective_answers(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<SubmitAnswersRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let session = state.session_service.get_session(&id).await?;
    let questions = session.subjective_questions().ok_or_else(|| {
        AppError::ValidationError(
            "No subjective questions have been generated for this document".into(),
        )
    })?;

    let mut feedback = Vec::with_capacity(questions.len());
    for (i, question) in questions.iter().enumerate() {
        let answer = request.answers.get(i).cloned().unwrap_or_default();
        let evaluation = state
            .assistant_service
            .evaluate_subjective(&answer, question)
            .await;
        feedback.push(SubjectiveFeedback {
            question: question.clone(),
            answer,
            feedback: evaluation,
        });
    }

    Ok(HttpResponse::Ok().json(SubjectiveFeedbackResponse {
        session_id: session.id,
        feedback,
    }))
}
