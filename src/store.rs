//! WishStore: connection pool lifecycle and the CRUD operations on `wish`.
//! Every operation is a single statement except delete (read, then delete) and update (update, then read).

use crate::config::{DatabaseConfig, DatabaseType};
use crate::error::AppError;
use crate::migration::apply_migrations;
use crate::model::{OrderBy, Priority, SortBy, Wish, WishIn};
use crate::sql::{self, Dialect};
use sqlx::any::{AnyConnectOptions, AnyPoolOptions, AnyRow};
use sqlx::mysql::MySqlConnectOptions;
use sqlx::postgres::PgConnectOptions;
use sqlx::{AnyPool, ConnectOptions, Row};
use std::str::FromStr;

/// Handle to the wish table. Cheap to clone; clones share the pool.
#[derive(Clone, Debug)]
pub struct WishStore {
    pool: AnyPool,
    dialect: Dialect,
}

impl WishStore {
    /// Build the pool for the configured backend. Does not touch the schema; see [`WishStore::ensure_schema`].
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        sqlx::any::install_default_drivers();
        let options = connect_options(config)?;
        let mut pool_options = AnyPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout);
        if config.is_in_memory() {
            // Each SQLite connection to :memory: is its own database; keep exactly one alive.
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }
        let pool = pool_options.connect_with(options).await?;
        tracing::info!(
            database = %config.database_type,
            host = %config.host,
            name = %config.name,
            "database pool ready"
        );
        Ok(WishStore {
            pool,
            dialect: config.database_type.into(),
        })
    }

    /// Create the `wish` table if absent.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        apply_migrations(&self.pool, self.dialect).await
    }

    /// Round trip used by readiness checks.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    /// Close the pool, waiting for checked-out connections to return.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("database pool closed");
    }

    /// All wishes ordered by `sort_by` in `order`, ties broken by id.
    pub async fn list(&self, sort_by: SortBy, order: OrderBy) -> Result<Vec<Wish>, AppError> {
        let q = sql::select_all(self.dialect, sort_by, order);
        tracing::debug!(sql = %q, "query");
        let rows = sqlx::query(&q).fetch_all(&self.pool).await?;
        rows.iter().map(wish_from_row).collect()
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Wish, AppError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::wish_id_not_found(id))
    }

    pub async fn get_by_name(&self, product: &str) -> Result<Wish, AppError> {
        self.find_by_product(product)
            .await?
            .ok_or_else(|| AppError::wish_not_found(product))
    }

    /// Insert a new wish. A duplicate product fails with [`AppError::Conflict`].
    pub async fn create(&self, input: WishIn) -> Result<Wish, AppError> {
        let q = sql::insert(self.dialect);
        tracing::debug!(sql = %q, product = %input.product, "query");
        let query = sqlx::query(&q)
            .bind(input.product.as_str())
            .bind(input.price)
            .bind(input.url.as_str())
            .bind(input.priority.as_str());

        // MySQL has no RETURNING; the id comes from the result's last insert id.
        let id: i64 = if self.dialect.supports_returning() {
            let row = query
                .fetch_one(&self.pool)
                .await
                .map_err(|e| write_error(e, &input.product))?;
            row.try_get("id")?
        } else {
            let result = query
                .execute(&self.pool)
                .await
                .map_err(|e| write_error(e, &input.product))?;
            result
                .last_insert_id()
                .ok_or_else(|| sqlx::Error::Protocol("insert reported no generated id".into()))?
        };
        tracing::info!(id, product = %input.product, "wish created");
        Ok(Wish::from_input(id, input))
    }

    /// Replace every field of the wish with `id` and return the stored row.
    /// Affected-row counts are not used: MySQL reports 0 for an update that changes nothing.
    pub async fn update(&self, id: i64, input: WishIn) -> Result<Wish, AppError> {
        let q = sql::update_by_id(self.dialect);
        tracing::debug!(sql = %q, id, "query");
        sqlx::query(&q)
            .bind(input.product.as_str())
            .bind(input.price)
            .bind(input.url.as_str())
            .bind(input.priority.as_str())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| write_error(e, &input.product))?;
        self.get_by_id(id).await
    }

    /// Delete the wish with `id`, returning the row as read before the delete.
    pub async fn delete_by_id(&self, id: i64) -> Result<Wish, AppError> {
        let wish = self.get_by_id(id).await?;
        self.remove_by_id(wish).await
    }

    /// Delete the wish named `product`, returning the row as read before the delete.
    pub async fn delete_by_name(&self, product: &str) -> Result<Wish, AppError> {
        let wish = self.get_by_name(product).await?;
        self.remove_by_name(wish).await
    }

    /// Second half of a delete: `wish` was read earlier and may already be gone.
    async fn remove_by_id(&self, wish: Wish) -> Result<Wish, AppError> {
        let q = sql::delete_by_id(self.dialect);
        tracing::debug!(sql = %q, id = wish.id, "query");
        let result = sqlx::query(&q).bind(wish.id).execute(&self.pool).await?;
        if result.rows_affected() != 1 {
            return Err(AppError::wish_id_not_found(wish.id));
        }
        Ok(wish)
    }

    async fn remove_by_name(&self, wish: Wish) -> Result<Wish, AppError> {
        let q = sql::delete_by_product(self.dialect);
        tracing::debug!(sql = %q, product = %wish.product, "query");
        let result = sqlx::query(&q)
            .bind(wish.product.as_str())
            .execute(&self.pool)
            .await?;
        if result.rows_affected() != 1 {
            return Err(AppError::wish_not_found(&wish.product));
        }
        Ok(wish)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Wish>, AppError> {
        let q = sql::select_by_id(self.dialect);
        tracing::debug!(sql = %q, id, "query");
        let row = sqlx::query(&q).bind(id).fetch_optional(&self.pool).await?;
        row.as_ref().map(wish_from_row).transpose()
    }

    async fn find_by_product(&self, product: &str) -> Result<Option<Wish>, AppError> {
        let q = sql::select_by_product(self.dialect);
        tracing::debug!(sql = %q, product, "query");
        let row = sqlx::query(&q).bind(product).fetch_optional(&self.pool).await?;
        row.as_ref().map(wish_from_row).transpose()
    }
}

fn connect_options(config: &DatabaseConfig) -> Result<AnyConnectOptions, AppError> {
    let options = match config.database_type {
        DatabaseType::Postgres => {
            let mut pg = PgConnectOptions::new()
                .host(&config.host)
                .username(&config.user)
                .database(&config.name);
            if let Some(port) = config.port {
                pg = pg.port(port);
            }
            if let Some(password) = &config.password {
                pg = pg.password(password);
            }
            AnyConnectOptions::from_url(&pg.to_url_lossy())?
        }
        DatabaseType::MySql => {
            let mut my = MySqlConnectOptions::new()
                .host(&config.host)
                .username(&config.user)
                .database(&config.name);
            if let Some(port) = config.port {
                my = my.port(port);
            }
            if let Some(password) = &config.password {
                my = my.password(password);
            }
            AnyConnectOptions::from_url(&my.to_url_lossy())?
        }
        DatabaseType::Sqlite => {
            let url = if config.is_in_memory() {
                "sqlite::memory:".to_string()
            } else {
                format!("sqlite://{}?mode=rwc", config.name)
            };
            AnyConnectOptions::from_str(&url)?
        }
    };
    Ok(options)
}

fn wish_from_row(row: &AnyRow) -> Result<Wish, AppError> {
    let priority: String = row.try_get("priority")?;
    let priority = priority
        .parse::<Priority>()
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
    Ok(Wish {
        id: row.try_get("id")?,
        product: row.try_get("product")?,
        price: row.try_get("price")?,
        url: row.try_get("url")?,
        priority,
    })
}

/// Uniqueness violations on `uix_product` become conflicts; anything else stays a database error.
fn write_error(err: sqlx::Error, product: &str) -> AppError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            tracing::warn!(product, "duplicate product rejected");
            AppError::Conflict(format!("Wish {} already exists.", product))
        }
        _ => AppError::Db(err),
    }
}
