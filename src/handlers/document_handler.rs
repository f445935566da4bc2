use actix_web::{get, http::header, post, web, HttpRequest, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::{AppError, AppResult},
    middleware::get_request_id,
    models::{
        domain::DocumentFormat,
        dto::{
            request::AskQuestionRequest,
            response::{SummaryResponse, UploadResponse},
        },
    },
    services::text_extractor::{self, Extraction},
};

pub const FILE_NAME_HEADER: &str = "x-file-name";
const DEFAULT_FILE_NAME: &str = "document";

/// Accepts a raw PDF or TXT body. The declared type comes from `Content-Type`.
#[post("/api/documents")]
async fn upload_document(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let declared_type = header_str(&req, header::CONTENT_TYPE.as_str())
        .unwrap_or_default()
        .to_string();
    let file_name = header_str(&req, FILE_NAME_HEADER)
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(DEFAULT_FILE_NAME)
        .to_string();

    log::info!(
        "[{}] Extracting text from '{}' ({}, {} bytes)",
        get_request_id(&req).unwrap_or_default(),
        file_name,
        declared_type,
        body.len()
    );

    let declared = declared_type.clone();
    let extraction = web::block(move || text_extractor::extract(&body, &declared)).await?;
    let (format, text) = usable_text(extraction, &declared_type)?;
    log::info!(
        "Extracted {} chars of {} from '{}'",
        text.chars().count(),
        format,
        file_name
    );

    let session = state
        .session_service
        .create_session(&file_name, format, text)
        .await?;
    Ok(HttpResponse::Created().json(UploadResponse::from(&session)))
}

/// Turns an extraction into text worth keeping, or the notice to show.
fn usable_text(
    extraction: Extraction,
    declared_type: &str,
) -> AppResult<(DocumentFormat, String)> {
    if let Some(notice) = extraction.notice {
        return Err(notice.into());
    }
    let Some(format) = extraction.format else {
        return Err(AppError::UnsupportedFormat(declared_type.to_string()));
    };
    if !extraction.has_content() {
        return Err(AppError::EmptyDocument);
    }
    Ok((format, extraction.text))
}

/// Summary of the session's document, generated on first request.
#[get("/api/documents/{id}/summary")]
async fn get_summary(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session = state.session_service.get_session(&id).await?;

    let summary = match session.summary {
        Some(summary) => summary,
        None => {
            let summary = state
                .assistant_service
                .summarize(&session.document)
                .await?;
            state
                .session_service
                .store_summary(&session.id, summary.clone())
                .await?;
            summary
        }
    };

    Ok(HttpResponse::Ok().json(SummaryResponse {
        session_id: session.id,
        summary,
    }))
}

#[post("/api/documents/{id}/questions")]
async fn ask_question(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<AskQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let question = request.question.trim();
    if question.is_empty() {
        return Err(AppError::ValidationError(
            "Question must not be blank".to_string(),
        ));
    }
    let session = state.session_service.get_session(&id).await?;

    let result = state
        .assistant_service
        .answer_question(&session.document, question)
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

fn header_str<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|value| value.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::services::model_gateway::MockTextGenerator;
    use crate::services::text_extractor::ExtractError;
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Arc;

    fn state_with(mock: MockTextGenerator) -> AppState {
        AppState::with_generator(Config::test_config(), Arc::new(mock))
    }

    fn idle_state() -> AppState {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate().times(0);
        state_with(mock)
    }

    #[::core::prelude::v1::test]
    fn usable_text_prefers_the_notice() {
        let extraction = Extraction {
            format: None,
            text: String::new(),
            notice: Some(ExtractError::UnsupportedFormat("image/png".to_string())),
        };

        let result = usable_text(extraction, "image/png");
        assert!(matches!(result, Err(AppError::UnsupportedFormat(_))));
    }

    #[::core::prelude::v1::test]
    fn usable_text_rejects_blank_text() {
        let extraction = Extraction {
            format: Some(DocumentFormat::Text),
            text: "\n  ".to_string(),
            notice: None,
        };

        assert!(matches!(
            usable_text(extraction, "text/plain"),
            Err(AppError::EmptyDocument)
        ));
    }

    #[actix_web::test]
    async fn upload_text_creates_session() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(idle_state()))
                .service(upload_document),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/documents")
            .insert_header((header::CONTENT_TYPE, "text/plain"))
            .insert_header((FILE_NAME_HEADER, "notes.txt"))
            .set_payload("Paris is the capital of France.")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["file_name"], "notes.txt");
        assert_eq!(body["format"], "text");
        assert_eq!(body["char_count"], 31);
    }

    #[actix_web::test]
    async fn upload_image_is_unsupported() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(idle_state()))
                .service(upload_document),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/documents")
            .insert_header((header::CONTENT_TYPE, "image/png"))
            .set_payload(vec![0x89, b'P', b'N', b'G'])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["kind"], "UNSUPPORTED_FORMAT");
    }

    #[actix_web::test]
    async fn upload_empty_text_is_unprocessable() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(idle_state()))
                .service(upload_document),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/documents")
            .insert_header((header::CONTENT_TYPE, "text/plain"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn summary_is_generated_once_and_cached() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate()
            .times(1)
            .returning(|_| Ok("A concise summary.".to_string()));
        let state = state_with(mock);
        let session = state
            .session_service
            .create_session("a.txt", DocumentFormat::Text, "Some content.".to_string())
            .await
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(get_summary),
        )
        .await;

        for _ in 0..2 {
            let req = test::TestRequest::get()
                .uri(&format!("/api/documents/{}/summary", session.id))
                .to_request();
            let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body["summary"], "A concise summary.");
        }
    }

    #[actix_web::test]
    async fn unknown_session_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(idle_state()))
                .service(get_summary),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/documents/{}/summary", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn blank_question_is_rejected() {
        let state = idle_state();
        let session = state
            .session_service
            .create_session("a.txt", DocumentFormat::Text, "Some content.".to_string())
            .await
            .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(ask_question),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/documents/{}/questions", session.id))
            .set_json(serde_json::json!({ "question": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
