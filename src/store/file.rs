use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::warn;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use super::{Options, Store};

/// The whole persisted document. Both records live in one flat file, read
/// once at startup and rewritten on every change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct Records {
    cities: Vec<String>,
    options: Options,
}

/// JSON-file store. The in-memory copy is authoritative between writes;
/// nothing else is expected to touch the file while the process runs.
pub struct FileStore {
    path: PathBuf,
    records: RwLock<Records>,
}

impl FileStore {
    /// Open the store at `path`, loading the existing document if there is
    /// one. A document that no longer parses degrades to defaults rather
    /// than blocking startup.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("failed to read store file {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|err| {
                warn!(
                    "store file {} is unreadable ({err}); starting from defaults",
                    path.display()
                );
                Records::default()
            })
        } else {
            Records::default()
        };

        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    fn persist(&self, records: &Records) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create store directory {}", parent.display())
                })?;
            }
        }
        let serialized =
            serde_json::to_string_pretty(records).context("failed to serialize store")?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("failed to write store file {}", self.path.display()))
    }
}

#[async_trait]
impl Store for FileStore {
    async fn cities(&self) -> Result<Vec<String>> {
        Ok(self.records.read().await.cities.clone())
    }

    async fn set_cities(&self, cities: Vec<String>) -> Result<()> {
        let mut records = self.records.write().await;
        records.cities = cities;
        self.persist(&records)
    }

    async fn options(&self) -> Result<Options> {
        Ok(self.records.read().await.options.clone())
    }

    async fn set_options(&self, options: Options) -> Result<()> {
        let mut records = self.records.write().await;
        records.options = options;
        self.persist(&records)
    }
}
