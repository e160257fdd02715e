//! Word card HTTP handler.
//!
//! ```text
//! GET /api/word
//! ```

use actix_web::{get, web};

use crate::domain::WordCard;
use crate::inbound::http::state::HttpState;

/// Return the next vocabulary word card.
///
/// Always answers 200; the offline card stands in when the workflow service
/// is unavailable.
#[utoipa::path(
    get,
    path = "/api/word",
    responses(
        (status = 200, description = "Word card", body = crate::inbound::http::schemas::WordCardSchema)
    ),
    tags = ["practice"],
    operation_id = "getWord"
)]
#[get("/word")]
pub async fn get_word(state: web::Data<HttpState>) -> web::Json<WordCard> {
    web::Json(state.words.next_word().await)
}
