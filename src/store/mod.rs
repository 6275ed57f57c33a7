//! Persistence for the two records every surface shares: the tracked city
//! list and the display options.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::weather::TempScale;

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Display options record. Persisted with the field names the web surfaces
/// already use, so an existing store document keeps working.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// City polled for the badge. Empty means "not configured" and disables
    /// polling entirely.
    pub home_city: String,
    pub temp_scale: TempScale,
    /// Whether the in-page overlay shows up without being asked.
    pub has_auto_overlay: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            home_city: String::new(),
            temp_scale: TempScale::Metric,
            has_auto_overlay: false,
        }
    }
}

/// Async access to the shared records.
///
/// Reads return an owned snapshot; writes replace a record wholesale. There
/// is no compare-and-swap: two writers that both read, modify, and write the
/// same record race, and the last write wins. Callers that care sequence
/// their writes through one task instead.
#[async_trait]
pub trait Store: Send + Sync {
    async fn cities(&self) -> Result<Vec<String>>;
    async fn set_cities(&self, cities: Vec<String>) -> Result<()>;
    async fn options(&self) -> Result<Options>;
    async fn set_options(&self, options: Options) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_options_describe_an_unconfigured_install() {
        let options = Options::default();
        assert_eq!(options.home_city, "");
        assert_eq!(options.temp_scale, TempScale::Metric);
        assert!(!options.has_auto_overlay);
    }

    #[test]
    fn options_keep_the_camel_case_document_shape() {
        let options = Options {
            home_city: "London".to_string(),
            temp_scale: TempScale::Imperial,
            has_auto_overlay: true,
        };
        let value = serde_json::to_value(&options).expect("serialize");
        assert_eq!(
            value,
            json!({
                "homeCity": "London",
                "tempScale": "imperial",
                "hasAutoOverlay": true,
            })
        );

        let restored: Options = serde_json::from_value(value).expect("parse");
        assert_eq!(restored, options);
    }
}
