//! SQL text for the `wish` table, per backend dialect.

mod builder;
mod dialect;
pub use builder::*;
pub use dialect::Dialect;
