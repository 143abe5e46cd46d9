//! Builds the parameterized statements for the `wish` table.
//! Identifiers and literals come from constants and enums only; user values are always bound.

use crate::model::{OrderBy, Priority, SortBy};
use crate::sql::Dialect;

pub const WISH_TABLE: &str = "wish";

/// Column order every SELECT returns and every INSERT/UPDATE binds (minus `id`).
const WRITE_COLUMNS: [&str; 4] = ["product", "price", "url", "priority"];

/// SELECT list. MySQL reports TEXT as a blob type, which the `Any` driver will not decode as a string,
/// so `url` is cast there.
fn select_column_list(dialect: Dialect) -> String {
    let url = match dialect {
        Dialect::MySql => "CAST(url AS CHAR) AS url",
        Dialect::Postgres | Dialect::Sqlite => "url",
    };
    format!("id, product, price, {}, priority", url)
}

/// Ranks priorities in declaration order instead of comparing their names.
fn priority_rank_expr() -> String {
    let arms: Vec<String> = Priority::ALL
        .iter()
        .map(|p| format!("WHEN '{}' THEN {}", p.as_str(), p.rank()))
        .collect();
    format!("CASE priority {} END", arms.join(" "))
}

fn order_by_clause(sort_by: SortBy, order: OrderBy) -> String {
    let key = match sort_by {
        SortBy::Priority => priority_rank_expr(),
        other => other.column().to_string(),
    };
    let dir = match order {
        OrderBy::Ascending => "ASC",
        OrderBy::Descending => "DESC",
    };
    format!("ORDER BY {} {}, id ASC", key, dir)
}

/// SELECT all rows ordered by one key, ties broken by id.
pub fn select_all(dialect: Dialect, sort_by: SortBy, order: OrderBy) -> String {
    format!(
        "SELECT {} FROM {} {}",
        select_column_list(dialect),
        WISH_TABLE,
        order_by_clause(sort_by, order)
    )
}

/// SELECT by primary key. Binds: id.
pub fn select_by_id(dialect: Dialect) -> String {
    format!(
        "SELECT {} FROM {} WHERE id = {}",
        select_column_list(dialect),
        WISH_TABLE,
        dialect.param(1)
    )
}

/// SELECT by product. Binds: product.
pub fn select_by_product(dialect: Dialect) -> String {
    format!(
        "SELECT {} FROM {} WHERE product = {}",
        select_column_list(dialect),
        WISH_TABLE,
        dialect.param(1)
    )
}

/// INSERT one row. Binds: product, price, url, priority. Returns `id` where the dialect supports it.
pub fn insert(dialect: Dialect) -> String {
    let placeholders: Vec<String> = (1..=WRITE_COLUMNS.len()).map(|n| dialect.param(n)).collect();
    let mut sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        WISH_TABLE,
        WRITE_COLUMNS.join(", "),
        placeholders.join(", ")
    );
    if dialect.supports_returning() {
        sql.push_str(" RETURNING id");
    }
    sql
}

/// UPDATE every writable column by id. Binds: product, price, url, priority, id.
pub fn update_by_id(dialect: Dialect) -> String {
    let sets: Vec<String> = WRITE_COLUMNS
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{} = {}", c, dialect.param(i + 1)))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE id = {}",
        WISH_TABLE,
        sets.join(", "),
        dialect.param(WRITE_COLUMNS.len() + 1)
    )
}

/// DELETE by id. Binds: id.
pub fn delete_by_id(dialect: Dialect) -> String {
    format!("DELETE FROM {} WHERE id = {}", WISH_TABLE, dialect.param(1))
}

/// DELETE by product. Binds: product.
pub fn delete_by_product(dialect: Dialect) -> String {
    format!("DELETE FROM {} WHERE product = {}", WISH_TABLE, dialect.param(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postgres_uses_numbered_params_and_returning() {
        assert_eq!(
            insert(Dialect::Postgres),
            "INSERT INTO wish (product, price, url, priority) VALUES ($1, $2, $3, $4) RETURNING id"
        );
        assert_eq!(
            update_by_id(Dialect::Postgres),
            "UPDATE wish SET product = $1, price = $2, url = $3, priority = $4 WHERE id = $5"
        );
        assert_eq!(delete_by_product(Dialect::Postgres), "DELETE FROM wish WHERE product = $1");
    }

    #[test]
    fn mysql_uses_question_marks_without_returning() {
        assert_eq!(
            insert(Dialect::MySql),
            "INSERT INTO wish (product, price, url, priority) VALUES (?, ?, ?, ?)"
        );
        assert_eq!(delete_by_id(Dialect::MySql), "DELETE FROM wish WHERE id = ?");
    }

    #[test]
    fn sqlite_uses_question_marks_with_returning() {
        assert_eq!(
            insert(Dialect::Sqlite),
            "INSERT INTO wish (product, price, url, priority) VALUES (?, ?, ?, ?) RETURNING id"
        );
        assert_eq!(delete_by_id(Dialect::Sqlite), "DELETE FROM wish WHERE id = ?");
    }

    #[test]
    fn mysql_casts_url_to_char() {
        assert_eq!(
            select_by_id(Dialect::MySql),
            "SELECT id, product, price, CAST(url AS CHAR) AS url, priority FROM wish WHERE id = ?"
        );
        assert_eq!(
            select_by_product(Dialect::Sqlite),
            "SELECT id, product, price, url, priority FROM wish WHERE product = ?"
        );
    }

    #[test]
    fn list_orders_by_key_then_id() {
        assert_eq!(
            select_all(Dialect::Sqlite, SortBy::Price, OrderBy::Descending),
            "SELECT id, product, price, url, priority FROM wish ORDER BY price DESC, id ASC"
        );
        assert_eq!(
            select_all(Dialect::Postgres, SortBy::default(), OrderBy::default()),
            "SELECT id, product, price, url, priority FROM wish ORDER BY product ASC, id ASC"
        );
    }

    #[test]
    fn priority_sorts_by_rank() {
        let sql = select_all(Dialect::Postgres, SortBy::Priority, OrderBy::Ascending);
        assert!(sql.ends_with(
            "ORDER BY CASE priority WHEN 'high' THEN 0 WHEN 'middle' THEN 1 WHEN 'low' THEN 2 END ASC, id ASC"
        ));
    }
}
