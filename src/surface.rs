//! Store operations the popup and options surfaces perform.
//!
//! Rendering lives outside this crate; what belongs here are the mutations
//! those surfaces own, each one a read-modify-write against the shared
//! [`Store`] with the same replace-on-write caveats.

use anyhow::Result;

use crate::messages::{Message, MessageBus};
use crate::store::{Options, Store};

/// Add a city from the popup's input field. Empty input is ignored without
/// touching the store. Returns the resulting list for the caller to render.
pub async fn add_city(store: &dyn Store, input: &str) -> Result<Vec<String>> {
    if input.is_empty() {
        return store.cities().await;
    }

    let mut cities = store.cities().await?;
    cities.push(input.to_string());
    store.set_cities(cities.clone()).await?;
    Ok(cities)
}

/// Delete a city by list position. An out-of-range index deletes nothing,
/// but the list is written back either way.
pub async fn remove_city(store: &dyn Store, index: usize) -> Result<Vec<String>> {
    let mut cities = store.cities().await?;
    if index < cities.len() {
        cities.remove(index);
    }
    store.set_cities(cities.clone()).await?;
    Ok(cities)
}

/// Flip metric and imperial, leaving the rest of the options record as
/// read. Takes effect on the next poll, not immediately.
pub async fn toggle_temp_scale(store: &dyn Store) -> Result<Options> {
    let mut options = store.options().await?;
    options.temp_scale = options.temp_scale.toggled();
    store.set_options(options.clone()).await?;
    Ok(options)
}

/// The options page's save: replace the whole record with the edited copy.
pub async fn save_options(store: &dyn Store, options: Options) -> Result<()> {
    store.set_options(options).await
}

/// Ask the in-page overlay to toggle its visibility. Fire-and-forget.
pub fn request_overlay_toggle(bus: &MessageBus) {
    bus.send(Message::ToggleOverlay);
}
