//! Shared application state for all routes.

use crate::store::WishStore;

#[derive(Clone)]
pub struct AppState {
    pub store: WishStore,
}

impl AppState {
    pub fn new(store: WishStore) -> Self {
        AppState { store }
    }
}
