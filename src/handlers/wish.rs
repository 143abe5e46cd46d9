//! Wish CRUD handlers: list, read by id or name, create, update, delete by id or name.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{ValidJson, ValidPath, ValidQuery};
use crate::model::{ListParams, Wish, WishIn};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

fn checked(input: WishIn) -> Result<WishIn, AppError> {
    input.check().map_err(AppError::Validation)?;
    Ok(input)
}

/// List all wishes, sorted by one key.
#[utoipa::path(
    get,
    path = "/wishes",
    tag = "wish",
    params(ListParams),
    responses(
        (status = 200, description = "All wishes in the requested order", body = Vec<Wish>),
        (status = 422, description = "Unknown sort key or direction", body = ErrorBody)
    )
)]
pub async fn list_wishes(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<ListParams>,
) -> Result<Json<Vec<Wish>>, AppError> {
    let wishes = state.store.list(params.sort_by, params.order_by).await?;
    Ok(Json(wishes))
}

#[utoipa::path(
    get,
    path = "/wish/by_id/{id}",
    tag = "wish",
    params(("id" = i64, Path, description = "Wish id")),
    responses(
        (status = 200, body = Wish),
        (status = 404, body = ErrorBody)
    )
)]
pub async fn get_wish_by_id(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Json<Wish>, AppError> {
    Ok(Json(state.store.get_by_id(id).await?))
}

#[utoipa::path(
    get,
    path = "/wish/by_name/{name}",
    tag = "wish",
    params(("name" = String, Path, description = "Product name")),
    responses(
        (status = 200, body = Wish),
        (status = 404, body = ErrorBody)
    )
)]
pub async fn get_wish_by_name(
    State(state): State<AppState>,
    ValidPath(name): ValidPath<String>,
) -> Result<Json<Wish>, AppError> {
    Ok(Json(state.store.get_by_name(&name).await?))
}

/// Create a wish; the id is assigned by the database.
#[utoipa::path(
    post,
    path = "/wish",
    tag = "wish",
    request_body = WishIn,
    responses(
        (status = 201, body = Wish),
        (status = 409, description = "A wish with this product already exists", body = ErrorBody),
        (status = 422, body = ErrorBody)
    )
)]
pub async fn create_wish(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<WishIn>,
) -> Result<(StatusCode, Json<Wish>), AppError> {
    let wish = state.store.create(checked(input)?).await?;
    Ok((StatusCode::CREATED, Json(wish)))
}

/// Replace every field of an existing wish.
#[utoipa::path(
    put,
    path = "/wish/{id}",
    tag = "wish",
    params(("id" = i64, Path, description = "Wish id")),
    request_body = WishIn,
    responses(
        (status = 202, body = Wish),
        (status = 404, body = ErrorBody),
        (status = 409, body = ErrorBody),
        (status = 422, body = ErrorBody)
    )
)]
pub async fn update_wish(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i64>,
    ValidJson(input): ValidJson<WishIn>,
) -> Result<(StatusCode, Json<Wish>), AppError> {
    let wish = state.store.update(id, checked(input)?).await?;
    Ok((StatusCode::ACCEPTED, Json(wish)))
}

#[utoipa::path(
    delete,
    path = "/wish/by_id/{id}",
    tag = "wish",
    params(("id" = i64, Path, description = "Wish id")),
    responses(
        (status = 200, description = "The wish as it was before deletion", body = Wish),
        (status = 404, body = ErrorBody)
    )
)]
pub async fn delete_wish_by_id(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i64>,
) -> Result<Json<Wish>, AppError> {
    Ok(Json(state.store.delete_by_id(id).await?))
}

#[utoipa::path(
    delete,
    path = "/wish/by_name/{name}",
    tag = "wish",
    params(("name" = String, Path, description = "Product name")),
    responses(
        (status = 200, description = "The wish as it was before deletion", body = Wish),
        (status = 404, body = ErrorBody)
    )
)]
pub async fn delete_wish_by_name(
    State(state): State<AppState>,
    ValidPath(name): ValidPath<String>,
) -> Result<Json<Wish>, AppError> {
    Ok(Json(state.store.delete_by_name(&name).await?))
}
