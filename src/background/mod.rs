//! The event-driven core of the process.
//!
//! Hosts deliver [`Event`]s; the [`BackgroundController`] maps each one to
//! its handler. The loop in [`spawn`] wires a recurring timer and an event
//! intake onto that dispatch, so the whole lifecycle runs without any host
//! runtime attached.

mod controller;
mod worker;

pub use controller::{badge_text, BackgroundController, TickErrorHook};
pub use worker::{spawn, BackgroundHandle};

/// External triggers the background process reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// First-run initialization. Seeds both store records with defaults,
    /// wiping whatever was there.
    Installed,
    /// The add-city context entry was clicked with this text selected.
    MenuClicked { selection: String },
    /// One firing of the periodic poll timer.
    Tick,
}

/// Registration data for a context-menu entry. Host integrations read this
/// to create the real menu item; the crate itself only dispatches the
/// resulting clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextMenuSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub contexts: &'static [&'static str],
}

/// The one menu entry this process registers: add the selected text as a
/// tracked city.
pub const ADD_CITY_MENU: ContextMenuSpec = ContextMenuSpec {
    id: "weathervane",
    title: "add-city",
    contexts: &["selection"],
};
