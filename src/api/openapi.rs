//! OpenAPI document for the spaces API.

use std::sync::OnceLock;

use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use tracing::error;
use utoipa::OpenApi;

use crate::space::Space;

/// Path the document is served from
pub const OPENAPI_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SpaceDB",
        description = "CRUD over an in-memory collection of spaces."
    ),
    paths(
        crate::api::spaces::list_spaces,
        crate::api::spaces::get_space,
        crate::api::spaces::search_spaces,
        crate::api::spaces::create_space,
        crate::api::spaces::update_space,
        crate::api::spaces::delete_space,
        crate::api::spaces::add_file,
        crate::api::spaces::remove_file,
    ),
    components(schemas(Space)),
    tags(
        (name = "Spaces", description = "Space records"),
        (name = "Files", description = "Uploaded file names of a space"),
    ),
)]
pub struct ApiDoc;

static OPENAPI_JSON: OnceLock<String> = OnceLock::new();

/// The document serialized as pretty JSON, built once per process.
pub fn openapi_json() -> Result<String, serde_json::Error> {
    if let Some(spec) = OPENAPI_JSON.get() {
        return Ok(spec.clone());
    }

    let spec = serde_json::to_string_pretty(&ApiDoc::openapi())?;
    let _ = OPENAPI_JSON.set(spec.clone());
    Ok(spec)
}

/// `GET /openapi.json`
pub async fn get_openapi_json() -> Response {
    match openapi_json() {
        Ok(spec) => (StatusCode::OK, [(CONTENT_TYPE, "application/json")], spec).into_response(),
        Err(e) => {
            error!("Failed to serialize OpenAPI document: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
