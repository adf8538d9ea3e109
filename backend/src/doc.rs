//! OpenAPI document for the roster API.
//!
//! Registers the contingent and health paths, the envelope schema wrappers
//! from [`crate::inbound::http::schemas`], and the session cookie scheme
//! required by `POST /api/contingent/add`. Served by Swagger UI in debug
//! builds and printed by the `openapi-dump` binary.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::schemas::{
    ContingentEnvelopeSchema, ContingentListEnvelopeSchema, ContingentRequestSchema,
    ContingentSchema, DeletedEnvelopeSchema, ErrorCodeSchema, FailureEnvelopeSchema,
};

/// Session cookie security scheme name.
pub const SESSION_COOKIE_SCHEME: &str = "SessionCookie";

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            SESSION_COOKIE_SCHEME,
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Signed session cookie carrying the caller's user id.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Roster backend API",
        description = "Administrative CRUD over contingents (teams) plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::contingents::page_contingents,
        crate::inbound::http::contingents::list_contingents,
        crate::inbound::http::contingents::contingent_detail,
        crate::inbound::http::contingents::add_contingent,
        crate::inbound::http::contingents::edit_contingent,
        crate::inbound::http::contingents::delete_contingent,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ContingentSchema,
        ContingentRequestSchema,
        ContingentEnvelopeSchema,
        ContingentListEnvelopeSchema,
        DeletedEnvelopeSchema,
        FailureEnvelopeSchema,
        ErrorCodeSchema,
    )),
    tags(
        (name = "contingents", description = "Roster team records"),
        (name = "health", description = "Orchestration probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use utoipa::OpenApi;

    use super::*;

    #[rstest]
    #[case("/api/contingent/page")]
    #[case("/api/contingent/list")]
    #[case("/api/contingent/detail/{id}")]
    #[case("/api/contingent/add")]
    #[case("/api/contingent/edit/{id}")]
    #[case("/api/contingent/delete/{id}")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn documents_every_route(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[test]
    fn registers_session_cookie_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key(SESSION_COOKIE_SCHEME));
    }

    #[test]
    fn only_create_requires_a_session() {
        let json = ApiDoc::openapi().to_json().expect("document serialises");
        let doc: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
        let add = &doc["paths"]["/api/contingent/add"]["post"]["security"];
        assert!(add.to_string().contains(SESSION_COOKIE_SCHEME));
        let list = &doc["paths"]["/api/contingent/list"]["get"]["security"];
        assert!(list.is_null());
    }
}
