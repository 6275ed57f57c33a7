use std::sync::Arc;

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::badge::BadgeHandle;
use crate::store::{Options, Store};
use crate::weather::{TempScale, WeatherApi};

use super::Event;

/// Observer for absorbed tick failures. Production leaves it unset; tests
/// install one to see what the loop swallowed.
pub type TickErrorHook = Arc<dyn Fn(&anyhow::Error) + Send + Sync>;

/// Maps each [`Event`] to its handler.
///
/// Owns the badge and nothing else; everything durable lives behind the
/// [`Store`]. Cloning is cheap and clones share all state, which is how the
/// poll loop hands each tick to its own task.
#[derive(Clone)]
pub struct BackgroundController {
    store: Arc<dyn Store>,
    weather: Arc<dyn WeatherApi>,
    badge: BadgeHandle,
    on_tick_error: Option<TickErrorHook>,
}

impl BackgroundController {
    pub fn new(store: Arc<dyn Store>, weather: Arc<dyn WeatherApi>, badge: BadgeHandle) -> Self {
        Self {
            store,
            weather,
            badge,
            on_tick_error: None,
        }
    }

    /// Install an observer for absorbed tick failures.
    pub fn with_tick_error_hook(mut self, hook: TickErrorHook) -> Self {
        self.on_tick_error = Some(hook);
        self
    }

    pub fn badge(&self) -> &BadgeHandle {
        &self.badge
    }

    /// Route one event to its handler. Handler failures stop here: they are
    /// logged, reported to the tick hook where one is installed, and never
    /// propagated. The next event runs regardless.
    pub async fn dispatch(&self, event: Event) {
        match event {
            Event::Installed => {
                if let Err(err) = self.handle_install().await {
                    warn!("install failed: {err:#}");
                }
            }
            Event::MenuClicked { selection } => {
                if let Err(err) = self.handle_menu_click(&selection).await {
                    warn!("could not add city from selection: {err:#}");
                }
            }
            Event::Tick => {
                if let Err(err) = self.handle_tick().await {
                    // Polling self-heals on the next firing; failed fetches
                    // stay invisible at the default log level.
                    debug!("tick dropped: {err:#}");
                    if let Some(hook) = &self.on_tick_error {
                        hook(&err);
                    }
                }
            }
        }
    }

    /// Seed both records with their defaults, overwriting whatever is there.
    /// Running it again lands in the same state.
    pub async fn handle_install(&self) -> Result<()> {
        self.store
            .set_cities(Vec::new())
            .await
            .context("failed to seed city list")?;
        self.store
            .set_options(Options::default())
            .await
            .context("failed to seed options")?;
        info!("seeded default state");
        Ok(())
    }

    /// Append the selected text to the tracked cities, verbatim. Nothing
    /// here validates it; a bogus entry just fails to fetch later.
    pub async fn handle_menu_click(&self, selection: &str) -> Result<()> {
        let mut cities = self.store.cities().await?;
        cities.push(selection.to_string());
        self.store.set_cities(cities).await?;
        debug!("added city from selection: '{selection}'");
        Ok(())
    }

    /// One poll cycle: read the options, fetch the home city, re-derive the
    /// badge. With no home city configured this does nothing and the
    /// previous badge value stays up.
    pub async fn handle_tick(&self) -> Result<()> {
        let options = self.store.options().await?;
        if options.home_city.is_empty() {
            return Ok(());
        }

        let report = self
            .weather
            .current_weather(&options.home_city, options.temp_scale)
            .await?;

        let text = badge_text(report.main.temp, options.temp_scale);
        debug!("badge for {}: {text}", report.name);
        self.badge.set_text(text);
        Ok(())
    }
}

/// Badge rendering rule: the temperature rounded to the nearest integer,
/// halves toward positive infinity, followed by the scale's symbol.
pub fn badge_text(temp: f64, scale: TempScale) -> String {
    format!("{}{}", (temp + 0.5).floor() as i64, scale.symbol())
}
