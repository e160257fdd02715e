//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the practice endpoints, the health probes and the
//! schema wrappers from [`crate::inbound::http::schemas`]. Swagger UI serves
//! it in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::schemas::{VerdictSchema, WordCardSchema};
use crate::inbound::http::sentences::ValidateSentenceRequestBody;
use crate::inbound::http::summary::SummaryResponseBody;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Worddee backend API",
        description = "Vocabulary practice: word cards, sentence grading and progress summary."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::words::get_word,
        crate::inbound::http::sentences::validate_sentence,
        crate::inbound::http::summary::get_summary,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        WordCardSchema,
        VerdictSchema,
        ValidateSentenceRequestBody,
        SummaryResponseBody,
        ErrorBody
    )),
    tags(
        (name = "practice", description = "Word cards, grading and progress"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use utoipa::OpenApi;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/api/word")]
    #[case("/api/validate")]
    #[case("/api/summary")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn document_lists_every_route(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    fn summary_schema_uses_snake_case_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let summary = schemas.get("SummaryResponseBody").expect("summary schema");

        assert_object_schema_has_field(summary, "current_streak");
        assert_object_schema_has_field(summary, "total_minutes");
    }

    #[rstest]
    fn word_card_schema_exposes_type_field() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let card = schemas.get("WordCard").expect("word card schema");

        assert_object_schema_has_field(card, "type");
        assert_object_schema_has_field(card, "image");
    }
}
