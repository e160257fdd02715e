//! HTTP inbound adapter exposing the practice endpoints.

pub mod error;
pub mod health;
pub mod schemas;
pub mod sentences;
pub mod state;
pub mod summary;
pub mod words;

use actix_web::web;

pub use error::ApiResult;

/// JSON extractor configuration rejecting malformed bodies with 422.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(error::json_error_handler)
}

/// Scope mounting the practice endpoints under `/api`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use worddee_backend::inbound::http::{api_scope, state::{HttpState, HttpStatePorts}};
///
/// let app = App::new()
///     .app_data(web::Data::new(HttpState::new(HttpStatePorts::default())))
///     .service(api_scope());
/// ```
pub fn api_scope() -> actix_web::Scope {
    web::scope("/api")
        .app_data(json_config())
        .service(words::get_word)
        .service(sentences::validate_sentence)
        .service(summary::get_summary)
}
