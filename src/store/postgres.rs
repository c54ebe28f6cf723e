//! PostgreSQL-backed cupcake store and database bootstrap.

use super::CupcakeStore;
use crate::error::AppError;
use crate::model::{Cupcake, CupcakeInput, DEFAULT_IMAGE};
use async_trait::async_trait;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

pub const CUPCAKES_TABLE: &str = "cupcakes";

const COLUMNS: &str = "id, flavor, rating, size, image";

#[derive(Clone)]
pub struct PgCupcakeStore {
    pool: PgPool,
}

impl PgCupcakeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CupcakeStore for PgCupcakeStore {
    async fn list(&self) -> Result<Vec<Cupcake>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", COLUMNS, CUPCAKES_TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Cupcake>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<Option<Cupcake>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, CUPCAKES_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Cupcake>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, input: &CupcakeInput) -> Result<Cupcake, AppError> {
        let sql = format!(
            "INSERT INTO {} (flavor, rating, size, image) VALUES ($1, $2, $3, $4) RETURNING {}",
            CUPCAKES_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Cupcake>(&sql)
            .bind(&input.flavor)
            .bind(input.rating)
            .bind(&input.size)
            .bind(&input.image)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, input: &CupcakeInput) -> Result<Option<Cupcake>, AppError> {
        let sql = format!(
            "UPDATE {} SET flavor = $2, rating = $3, size = $4, image = $5 WHERE id = $1 RETURNING {}",
            CUPCAKES_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Cupcake>(&sql)
            .bind(id)
            .bind(&input.flavor)
            .bind(input.rating)
            .bind(&input.size)
            .bind(&input.image)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1 RETURNING id", CUPCAKES_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let deleted: Option<(i32,)> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(deleted.is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Create the `cupcakes` table if it does not exist. Safe to call on every start.
pub async fn ensure_cupcakes_table(pool: &PgPool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id SERIAL PRIMARY KEY,
            flavor TEXT NOT NULL,
            size TEXT NOT NULL,
            rating DOUBLE PRECISION NOT NULL,
            image TEXT NOT NULL DEFAULT '{}'
        )
        "#,
        CUPCAKES_TABLE,
        DEFAULT_IMAGE.replace('\'', "''")
    );
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url.rfind('/').ok_or_else(|| AppError::BadRequest("DATABASE_URL: no path".into()))? + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let (db_name, query) = match path_and_query.split_once('?') {
        Some((name, q)) => (name.trim(), Some(q)),
        None => (path_and_query.trim(), None),
    };
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = match query {
        Some(q) => format!("{}postgres?{}", base, q),
        None => format!("{}postgres", base),
    };
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_database_name_from_url() {
        let (admin, name) = parse_db_name_from_url("postgres://u:p@localhost:5432/cupcakes").unwrap();
        assert_eq!(admin, "postgres://u:p@localhost:5432/postgres");
        assert_eq!(name, "cupcakes");
    }

    #[test]
    fn keeps_query_on_admin_url() {
        let (admin, name) = parse_db_name_from_url("postgres://localhost/cupcakes?sslmode=disable").unwrap();
        assert_eq!(admin, "postgres://localhost/postgres?sslmode=disable");
        assert_eq!(name, "cupcakes");
    }

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident("cup\"cakes"), "\"cup\"\"cakes\"");
    }
}
