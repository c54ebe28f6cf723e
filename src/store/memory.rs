//! In-process cupcake store. Ids are assigned from a counter and never reused.

use super::CupcakeStore;
use crate::error::AppError;
use crate::model::{Cupcake, CupcakeInput};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryCupcakeStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: i32,
    rows: BTreeMap<i32, Cupcake>,
}

impl MemoryCupcakeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CupcakeStore for MemoryCupcakeStore {
    async fn list(&self) -> Result<Vec<Cupcake>, AppError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Cupcake>, AppError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, input: &CupcakeInput) -> Result<Cupcake, AppError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let cupcake = input.clone().into_cupcake(inner.last_id);
        inner.rows.insert(cupcake.id, cupcake.clone());
        Ok(cupcake)
    }

    async fn update(&self, id: i32, input: &CupcakeInput) -> Result<Option<Cupcake>, AppError> {
        let mut inner = self.inner.write().await;
        Ok(inner.rows.get_mut(&id).map(|row| {
            *row = input.clone().into_cupcake(id);
            row.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
