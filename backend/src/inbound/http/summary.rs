//! Practice summary HTTP handler.
//!
//! ```text
//! GET /api/summary
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::PracticeSummary;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Response payload for the practice summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SummaryResponseBody {
    /// `HH:MM` times of the most recent attempts, oldest first.
    #[schema(example = json!(["09:15", "09:20"]))]
    pub dates: Vec<String>,
    /// Scores aligned with `dates`.
    #[schema(example = json!([6.5, 8.0]))]
    pub scores: Vec<f64>,
    /// Consecutive practice days ending today or yesterday.
    pub current_streak: u32,
    /// Two minutes per recorded attempt.
    pub total_minutes: u64,
}

impl From<PracticeSummary> for SummaryResponseBody {
    fn from(value: PracticeSummary) -> Self {
        Self {
            dates: value.dates,
            scores: value.scores,
            current_streak: value.current_streak,
            total_minutes: value.total_minutes,
        }
    }
}

/// Summarise recent practice.
#[utoipa::path(
    get,
    path = "/api/summary",
    responses(
        (status = 200, description = "Practice summary", body = SummaryResponseBody),
        (status = 500, description = "History store query failed", body = ErrorBody),
        (status = 503, description = "History store unavailable", body = ErrorBody)
    ),
    tags = ["practice"],
    operation_id = "getSummary"
)]
#[get("/summary")]
pub async fn get_summary(state: web::Data<HttpState>) -> ApiResult<web::Json<SummaryResponseBody>> {
    let summary = state.summary.summary().await?;
    Ok(web::Json(SummaryResponseBody::from(summary)))
}
