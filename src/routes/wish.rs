//! Wish CRUD routes. One verb + path per store operation.

use crate::handlers::wish::{
    create_wish, delete_wish_by_id, delete_wish_by_name, get_wish_by_id, get_wish_by_name, list_wishes,
    update_wish,
};
use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn wish_routes(state: AppState) -> Router {
    Router::new()
        .route("/wishes", get(list_wishes))
        .route("/wish", post(create_wish))
        .route("/wish/:id", put(update_wish))
        .route("/wish/by_id/:id", get(get_wish_by_id).delete(delete_wish_by_id))
        .route("/wish/by_name/:name", get(get_wish_by_name).delete(delete_wish_by_name))
        .with_state(state)
}
