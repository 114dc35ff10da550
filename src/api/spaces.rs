//! `/api/spaces` endpoints.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::http::header::LOCATION;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use serde::Deserialize;
use tracing::{debug, info};
use utoipa::IntoParams;

use crate::error::ApiResult;
use crate::space::{Space, SpaceId};
use crate::store::SpaceStore;

/// Base path of the spaces collection
pub const BASE_PATH: &str = "/api/spaces";

/// Spaces route group.
pub fn routes() -> Router<Arc<SpaceStore>> {
    Router::new()
        .route(BASE_PATH, get(list_spaces).post(create_space))
        .route(&format!("{BASE_PATH}/search"), get(search_spaces))
        .route(
            &format!("{BASE_PATH}/:id"),
            get(get_space).put(update_space).delete(delete_space),
        )
        .route(
            &format!("{BASE_PATH}/:id/files"),
            post(add_file).delete(remove_file),
        )
}

/// Query string for `GET /api/spaces/search`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Substring to look for in title or description; absent means match all
    #[serde(default)]
    pub query: String,
}

/// Accept either a JSON string literal or the raw body text as a file name.
fn file_name(body: String) -> String {
    serde_json::from_str::<String>(&body).unwrap_or(body)
}

/// `GET /api/spaces`
#[utoipa::path(
    get,
    path = "/api/spaces",
    tag = "Spaces",
    responses(
        (status = 200, description = "All spaces in insertion order", body = [Space]),
    )
)]
pub async fn list_spaces(State(store): State<Arc<SpaceStore>>) -> ApiResult<Json<Vec<Space>>> {
    let spaces = store.list()?;
    debug!(count = spaces.len(), "Listing spaces");
    Ok(Json(spaces))
}

/// `GET /api/spaces/{id}`
#[utoipa::path(
    get,
    path = "/api/spaces/{id}",
    tag = "Spaces",
    params(("id" = i32, Path, description = "Space id")),
    responses(
        (status = 200, description = "The space", body = Space),
        (status = 404, description = "No space with this id"),
    )
)]
pub async fn get_space(
    State(store): State<Arc<SpaceStore>>,
    Path(id): Path<SpaceId>,
) -> ApiResult<Json<Space>> {
    debug!(id, "Fetching space");
    Ok(Json(store.find_by_id(id)?))
}

/// `GET /api/spaces/search?query=...`
#[utoipa::path(
    get,
    path = "/api/spaces/search",
    tag = "Spaces",
    params(SearchParams),
    responses(
        (status = 200, description = "Spaces whose title or description contains the query", body = [Space]),
    )
)]
pub async fn search_spaces(
    State(store): State<Arc<SpaceStore>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<Space>>> {
    let spaces = store.search(&params.query)?;
    debug!(query = %params.query, matches = spaces.len(), "Searched spaces");
    Ok(Json(spaces))
}

/// `POST /api/spaces`
#[utoipa::path(
    post,
    path = "/api/spaces",
    tag = "Spaces",
    request_body = Space,
    responses(
        (status = 201, description = "Space created", body = Space,
            headers(("Location" = String, description = "URL of the new space"))),
    )
)]
pub async fn create_space(
    State(store): State<Arc<SpaceStore>>,
    Json(space): Json<Space>,
) -> ApiResult<impl IntoResponse> {
    let created = store.create(space)?;
    info!(id = created.id, title = %created.title, "Created space");
    let location = format!("{}/{}", BASE_PATH, created.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(created)))
}

/// `PUT /api/spaces/{id}`
#[utoipa::path(
    put,
    path = "/api/spaces/{id}",
    tag = "Spaces",
    params(("id" = i32, Path, description = "Space id")),
    request_body = Space,
    responses(
        (status = 204, description = "Space updated"),
        (status = 404, description = "No space with this id"),
    )
)]
pub async fn update_space(
    State(store): State<Arc<SpaceStore>>,
    Path(id): Path<SpaceId>,
    Json(payload): Json<Space>,
) -> ApiResult<StatusCode> {
    store.update(id, payload)?;
    info!(id, "Updated space");
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/spaces/{id}`
#[utoipa::path(
    delete,
    path = "/api/spaces/{id}",
    tag = "Spaces",
    params(("id" = i32, Path, description = "Space id")),
    responses(
        (status = 204, description = "Space deleted"),
        (status = 404, description = "No space with this id"),
    )
)]
pub async fn delete_space(
    State(store): State<Arc<SpaceStore>>,
    Path(id): Path<SpaceId>,
) -> ApiResult<StatusCode> {
    store.delete(id)?;
    info!(id, "Deleted space");
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/spaces/{id}/files`
#[utoipa::path(
    post,
    path = "/api/spaces/{id}/files",
    tag = "Files",
    params(("id" = i32, Path, description = "Space id")),
    request_body(content = String, description = "File name, raw or as a JSON string", content_type = "text/plain"),
    responses(
        (status = 200, description = "Updated space", body = Space),
        (status = 404, description = "No space with this id"),
    )
)]
pub async fn add_file(
    State(store): State<Arc<SpaceStore>>,
    Path(id): Path<SpaceId>,
    body: String,
) -> ApiResult<Json<Space>> {
    let file = file_name(body);
    let space = store.append_file(id, &file)?;
    info!(id, file = %file, "Appended file to space");
    Ok(Json(space))
}

/// `DELETE /api/spaces/{id}/files`
#[utoipa::path(
    delete,
    path = "/api/spaces/{id}/files",
    tag = "Files",
    params(("id" = i32, Path, description = "Space id")),
    request_body(content = String, description = "File name, raw or as a JSON string", content_type = "text/plain"),
    responses(
        (status = 200, description = "Updated space", body = Space),
        (status = 404, description = "No space with this id"),
    )
)]
pub async fn remove_file(
    State(store): State<Arc<SpaceStore>>,
    Path(id): Path<SpaceId>,
    body: String,
) -> ApiResult<Json<Space>> {
    let file = file_name(body);
    let space = store.remove_file(id, &file)?;
    info!(id, file = %file, "Removed file from space");
    Ok(Json(space))
}
