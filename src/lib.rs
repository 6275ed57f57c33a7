pub mod background;
pub mod badge;
pub mod config;
pub mod messages;
pub mod store;
pub mod surface;
pub mod weather;

pub use background::{
    BackgroundController, BackgroundHandle, ContextMenuSpec, Event, ADD_CITY_MENU,
};
pub use badge::{BadgeHandle, BadgeState};
pub use config::Config;
pub use messages::{Message, MessageBus};
pub use store::{FileStore, MemoryStore, Options, Store};
pub use weather::{CurrentWeather, OpenWeatherClient, TempScale, WeatherApi};

use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;

/// Boot the daemon: open the store, seed it on a true first run, start the
/// poll loop, and run until interrupted.
pub async fn run() -> Result<()> {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("weathervane starting up...");

    let config = Config::from_env()?;

    // The store file's absence marks a true first run. Install must not fire
    // on a routine restart or it would wipe the user's configuration.
    let first_run = !config.store_path.exists();

    let store: Arc<dyn Store> = Arc::new(FileStore::new(config.store_path.clone())?);
    let weather = Arc::new(OpenWeatherClient::new(config.api_key.clone()));
    let badge = BadgeHandle::new();
    let controller = BackgroundController::new(store, weather, badge.clone());

    if first_run {
        controller.dispatch(Event::Installed).await;
        info!(
            "registered context menu '{}' for {:?} targets",
            ADD_CITY_MENU.title, ADD_CITY_MENU.contexts
        );
    }

    // Mirror badge transitions into the log; hosts that draw a real badge
    // subscribe the same way.
    let mut badge_updates = badge.subscribe();
    tokio::spawn(async move {
        while badge_updates.changed().await.is_ok() {
            let text = badge_updates.borrow_and_update().text.clone();
            info!("badge: {text}");
        }
    });

    let handle = background::spawn(controller, config.poll_interval);

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for the shutdown signal")?;
    info!("interrupt received, shutting down");
    handle.shutdown().await
}
