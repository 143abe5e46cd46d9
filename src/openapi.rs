//! OpenAPI document for the wish API, served at `/openapi.json`.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers::wish;
use crate::model::{OrderBy, Priority, SortBy, Wish, WishIn};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "wishlist-backend", description = "CRUD over wishes"),
    paths(
        wish::list_wishes,
        wish::get_wish_by_id,
        wish::get_wish_by_name,
        wish::create_wish,
        wish::update_wish,
        wish::delete_wish_by_id,
        wish::delete_wish_by_name
    ),
    components(schemas(Wish, WishIn, Priority, SortBy, OrderBy, ErrorBody, ErrorDetail)),
    tags((name = "wish", description = "Manage wishes"))
)]
pub struct ApiDoc;
