//! SQL dialect differences between the supported backends.

use crate::config::DatabaseType;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    Postgres,
    MySql,
    Sqlite,
}

impl Dialect {
    /// Bind placeholder for the `n`th (1-based) parameter.
    pub fn param(self, n: usize) -> String {
        match self {
            Dialect::Postgres => format!("${}", n),
            Dialect::MySql | Dialect::Sqlite => "?".to_string(),
        }
    }

    /// Whether INSERT hands back the generated id with `RETURNING`.
    /// MySQL has no `RETURNING`; it reports the id through the query result's last insert id.
    pub fn supports_returning(self) -> bool {
        matches!(self, Dialect::Postgres | Dialect::Sqlite)
    }
}

impl From<DatabaseType> for Dialect {
    fn from(t: DatabaseType) -> Self {
        match t {
            DatabaseType::Postgres => Dialect::Postgres,
            DatabaseType::MySql => Dialect::MySql,
            DatabaseType::Sqlite => Dialect::Sqlite,
        }
    }
}
