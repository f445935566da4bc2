pub mod challenge_handler;
pub mod document_handler;
pub mod health_handler;

use actix_web::web;

pub use challenge_handler::{generate_challenge, submit_objective_answers, submit_subjective_answers};
pub use document_handler::{ask_question, get_summary, upload_document};
pub use health_handler::health_check;

/// Registers every route the browser shell uses.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(upload_document)
        .service(get_summary)
        .service(ask_question)
        .service(generate_challenge)
        .service(submit_objective_answers)
        .service(submit_subjective_answers);
}
