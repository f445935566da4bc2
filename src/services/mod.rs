pub mod assistant_service;
pub mod model_gateway;
pub mod prompt_builder;
pub mod response_parser;
pub mod session_service;
pub mod text_extractor;
