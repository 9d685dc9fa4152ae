//! PostgreSQL access for the `db-sync` and `seed` commands.
//!
//! The CLI is synchronous, so [`Database`] owns a Tokio runtime and blocks on
//! every query. The pool is closed by [`with_database`] whether or not the
//! work succeeded.

use log::{debug, info};
use sqlx::{PgPool, postgres::PgPoolOptions};
use tokio::runtime::Runtime;

use crate::{
    CliError,
    seed::{Program, ProgramStore},
};

impl From<sqlx::Error> for CliError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(Box::new(err))
    }
}

/// A connected PostgreSQL pool with the runtime driving it.
pub struct Database {
    pool: PgPool,
    rt: Runtime,
}

impl Database {
    /// Connect to the database at `url`.
    pub fn connect(url: &str) -> Result<Self, CliError> {
        let rt = Runtime::new()?;

        info!("Connecting to database");
        let pool = rt.block_on(PgPoolOptions::new().max_connections(1).connect(url))?;

        Ok(Self { pool, rt })
    }

    /// Execute `sql` as a single, possibly multi-statement, script.
    pub fn execute_script(&self, sql: &str) -> Result<(), CliError> {
        info!("Executing SQL script");
        let result = self
            .rt
            .block_on(sqlx::raw_sql(sql).execute(&self.pool))?;
        debug!(rows_affected = result.rows_affected(); "SQL script executed");

        Ok(())
    }

    /// Close every pooled connection.
    pub fn close(self) {
        self.rt.block_on(self.pool.close());
        debug!("Database connection closed");
    }
}

impl ProgramStore for Database {
    type Error = sqlx::Error;

    fn count(&mut self) -> Result<i64, Self::Error> {
        self.rt.block_on(
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM programs").fetch_one(&self.pool),
        )
    }

    fn create(&mut self, program: &Program) -> Result<(), Self::Error> {
        self.rt.block_on(
            sqlx::query(
                "INSERT INTO programs (title, description, cover_image) VALUES ($1, $2, $3)",
            )
            .bind(program.title)
            .bind(program.description)
            .bind(program.cover_image)
            .execute(&self.pool),
        )?;

        Ok(())
    }
}

/// Connect to `url`, run `work`, and always close the connection afterwards.
pub fn with_database<T>(
    url: &str,
    work: impl FnOnce(&mut Database) -> Result<T, CliError>,
) -> Result<T, CliError> {
    let mut database = Database::connect(url)?;
    let result = work(&mut database);
    database.close();
    result
}
