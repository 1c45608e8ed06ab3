use std::time::Duration;

use tokio::select;
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::events::Input;

/// Repeating auto-advance timer. Sends [`Input::Tick`] every period; whether a
/// tick advances the carousel is decided by the controller's pause state.
#[derive(Debug)]
pub struct AutoAdvance {
    period: Duration,
    handle: Option<JoinHandle<()>>,
}

impl AutoAdvance {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            handle: None,
        }
    }

    /// Spawn the ticking task. Returns `false` without doing anything if a
    /// task is already running.
    pub fn start(&mut self, to_carousel: Sender<Input>, cancel: CancellationToken) -> bool {
        if self.is_running() {
            debug!("auto-advance already running");
            return false;
        }
        let period = self.period;
        self.handle = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                select! {
                    _ = cancel.cancelled() => break,
                    _ = ticker.tick() => {
                        if to_carousel.send(Input::Tick).await.is_err() {
                            debug!("carousel input closed; stopping auto-advance");
                            break;
                        }
                    }
                }
            }
        }));
        debug!(period_ms = period.as_millis() as u64, "auto-advance started");
        true
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}
