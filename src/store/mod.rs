//! Cupcake persistence: the store trait handlers depend on, plus Postgres bootstrap.

mod memory;
mod postgres;

pub use memory::MemoryCupcakeStore;
pub use postgres::{ensure_cupcakes_table, ensure_database_exists, PgCupcakeStore, CUPCAKES_TABLE};

use crate::error::AppError;
use crate::model::{Cupcake, CupcakeInput};
use async_trait::async_trait;

/// Single-table access used by the cupcake handlers. Every method is one round trip;
/// nothing spans more than one record.
#[async_trait]
pub trait CupcakeStore: Send + Sync {
    /// All records, ascending by id.
    async fn list(&self) -> Result<Vec<Cupcake>, AppError>;

    async fn get(&self, id: i32) -> Result<Option<Cupcake>, AppError>;

    /// Insert a record and return it with its assigned id.
    async fn insert(&self, input: &CupcakeInput) -> Result<Cupcake, AppError>;

    /// Overwrite every field of `id`. Returns None when no such record exists.
    async fn update(&self, id: i32, input: &CupcakeInput) -> Result<Option<Cupcake>, AppError>;

    /// Hard-delete `id`. Returns false when no such record exists.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;

    /// Cheap liveness check for readiness probes.
    async fn ping(&self) -> Result<(), AppError>;
}
