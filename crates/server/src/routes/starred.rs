use axum::{extract::{Path, State}, http::StatusCode, Json};
use models::{CreateStarredRequest, StarredEntry, StarredView, UpdateCommentRequest};

use crate::{errors::ApiError, state::ServerState};

/// List starred restaurants joined with their names
#[utoipa::path(
    get, path = "/api/starred-restaurants", tag = "starred",
    responses(
        (status = 200, description = "Starred restaurants in insertion order", body = [crate::openapi::StarredViewDoc]),
        (status = 500, description = "A starred entry references an unknown restaurant")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<StarredView>>, ApiError> {
    let views = state.starred.list().await?;
    Ok(Json(views))
}

#[utoipa::path(
    get, path = "/api/starred-restaurants/{id}", tag = "starred",
    params(("id" = String, Path, description = "Starred entry ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::StarredEntryDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<StarredEntry>, ApiError> {
    let entry = state.starred.get_by_id(&id).await?;
    Ok(Json(entry))
}

#[utoipa::path(
    post, path = "/api/starred-restaurants", tag = "starred",
    request_body = crate::openapi::CreateStarredRequestDoc,
    responses(
        (status = 200, description = "Starred", body = crate::openapi::StarredViewDoc),
        (status = 404, description = "Unknown restaurant")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateStarredRequest>,
) -> Result<Json<StarredView>, ApiError> {
    let view = state.starred.create(&input.id).await?;
    Ok(Json(view))
}

#[utoipa::path(
    delete, path = "/api/starred-restaurants/{id}", tag = "starred",
    params(("id" = String, Path, description = "Starred entry ID")),
    responses(
        (status = 200, description = "Unstarred"),
        (status = 400, description = "Not currently starred")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    state.starred.delete(&id).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    put, path = "/api/starred-restaurants/{id}", tag = "starred",
    params(("id" = String, Path, description = "Starred entry ID")),
    request_body = crate::openapi::UpdateCommentRequestDoc,
    responses(
        (status = 200, description = "Comment updated"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_comment(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateCommentRequest>,
) -> Result<StatusCode, ApiError> {
    state.starred.update_comment(&id, input.new_comment).await?;
    Ok(StatusCode::OK)
}
