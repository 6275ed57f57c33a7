use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Options, Store};

/// In-memory store with the same replace-on-write semantics as the file
/// store. Backs tests and embedders that do not want persistence.
#[derive(Default)]
pub struct MemoryStore {
    cities: RwLock<Vec<String>>,
    options: RwLock<Options>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn cities(&self) -> Result<Vec<String>> {
        Ok(self.cities.read().await.clone())
    }

    async fn set_cities(&self, cities: Vec<String>) -> Result<()> {
        *self.cities.write().await = cities;
        Ok(())
    }

    async fn options(&self) -> Result<Options> {
        Ok(self.options.read().await.clone())
    }

    async fn set_options(&self, options: Options) -> Result<()> {
        *self.options.write().await = options;
        Ok(())
    }
}
