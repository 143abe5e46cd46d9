//! HTTP handlers for wish CRUD and service probes.

pub mod common;
pub mod wish;
pub use wish::*;
