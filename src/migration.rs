//! Create the `wish` table if it does not exist. There is no migration history; the DDL is idempotent.

use crate::error::AppError;
use crate::model::Priority;
use crate::sql::{Dialect, WISH_TABLE};
use sqlx::AnyPool;

/// CREATE TABLE IF NOT EXISTS for the dialect, with the `uix_product` unique constraint
/// and a CHECK restricting `priority` to the enum values.
pub fn create_wish_table(dialect: Dialect) -> String {
    let (id, price) = match dialect {
        Dialect::Postgres => ("id BIGSERIAL PRIMARY KEY", "price DOUBLE PRECISION NOT NULL DEFAULT 0"),
        Dialect::MySql => ("id BIGINT AUTO_INCREMENT PRIMARY KEY", "price DOUBLE NOT NULL DEFAULT 0"),
        Dialect::Sqlite => ("id INTEGER PRIMARY KEY AUTOINCREMENT", "price REAL NOT NULL DEFAULT 0"),
    };
    let allowed: Vec<String> = Priority::ALL.iter().map(|p| format!("'{}'", p.as_str())).collect();
    format!(
        r#"CREATE TABLE IF NOT EXISTS {} (
    {},
    product VARCHAR(256) NOT NULL,
    {},
    url TEXT NOT NULL,
    priority VARCHAR(16) NOT NULL,
    CONSTRAINT uix_product UNIQUE (product),
    CONSTRAINT ck_wish_priority CHECK (priority IN ({}))
)"#,
        WISH_TABLE,
        id,
        price,
        allowed.join(", ")
    )
}

pub async fn apply_migrations(pool: &AnyPool, dialect: Dialect) -> Result<(), AppError> {
    let ddl = create_wish_table(dialect);
    tracing::debug!(sql = %ddl, "ddl");
    sqlx::query(&ddl).execute(pool).await?;
    tracing::info!(table = WISH_TABLE, "schema ready");
    Ok(())
}
