use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::{BackgroundController, Event};

const EVENT_QUEUE_DEPTH: usize = 32;

/// A running background loop. Host integrations feed events in through it;
/// dropping it closes the intake, which also stops the loop.
pub struct BackgroundHandle {
    events: mpsc::Sender<Event>,
    cancel: CancellationToken,
    worker: JoinHandle<()>,
}

impl BackgroundHandle {
    /// Feed a context-menu selection into the loop.
    pub async fn add_selection(&self, selection: impl Into<String>) -> Result<()> {
        self.send(Event::MenuClicked {
            selection: selection.into(),
        })
        .await
    }

    /// Deliver an arbitrary event through the same intake the loop reads.
    pub async fn send(&self, event: Event) -> Result<()> {
        self.events
            .send(event)
            .await
            .map_err(|_| anyhow!("background loop is no longer running"))
    }

    /// Stop the loop and wait for it to finish.
    pub async fn shutdown(self) -> Result<()> {
        self.cancel.cancel();
        self.worker.await.context("background loop panicked")
    }
}

/// Start the background loop: a recurring poll timer multiplexed with the
/// host-event intake. The first poll fires one full period after startup,
/// not immediately.
///
/// `poll_interval` must be non-zero; a zero period panics the loop task,
/// which surfaces as an error from [`BackgroundHandle::shutdown`].
pub fn spawn(controller: BackgroundController, poll_interval: Duration) -> BackgroundHandle {
    let (events_tx, events_rx) = mpsc::channel(EVENT_QUEUE_DEPTH);
    let cancel = CancellationToken::new();
    let worker = tokio::spawn(event_loop(
        controller,
        events_rx,
        poll_interval,
        cancel.clone(),
    ));

    BackgroundHandle {
        events: events_tx,
        cancel,
        worker,
    }
}

async fn event_loop(
    controller: BackgroundController,
    mut events: mpsc::Receiver<Event>,
    poll_interval: Duration,
    cancel: CancellationToken,
) {
    let mut ticker = time::interval_at(Instant::now() + poll_interval, poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!("background loop started, polling every {poll_interval:?}");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                // Each tick polls in its own task: a stalled fetch delays its
                // own badge update, not the ticks after it.
                let tick_controller = controller.clone();
                tokio::spawn(async move {
                    tick_controller.dispatch(Event::Tick).await;
                });
            }
            event = events.recv() => match event {
                Some(event) => controller.dispatch(event).await,
                None => {
                    debug!("event intake closed, stopping background loop");
                    break;
                }
            },
            _ = cancel.cancelled() => {
                info!("background loop shutting down");
                break;
            }
        }
    }
}
