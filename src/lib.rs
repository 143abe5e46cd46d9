//! Wishlist backend: CRUD over a single `wish` table behind an axum router.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod openapi;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::{AppConfig, DatabaseConfig, DatabaseType};
pub use error::{AppError, ConfigError};
pub use model::{ListParams, OrderBy, Priority, SortBy, Wish, WishIn};
pub use routes::{app, common_routes, wish_routes};
pub use state::AppState;
pub use store::WishStore;
