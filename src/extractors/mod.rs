//! Request extractors that report every shape error as a 422 [`AppError::Validation`](crate::error::AppError).

mod valid;
pub use valid::{ValidJson, ValidPath, ValidQuery};
