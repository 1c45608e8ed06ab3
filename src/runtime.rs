//! Event loop that owns a carousel and feeds it inputs one at a time.

use std::time::Duration;

use anyhow::Result;
use tokio::select;
use tokio::sync::mpsc::Receiver;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::controller::Carousel;
use crate::events::{Input, Motion};
use crate::surface::Surface;

/// Drive `carousel` until `cancel` fires or the input channel closes, then hand
/// it back.
///
/// Animated moves complete `transition` later with an [`Input::TransitionEnd`];
/// a newer animated move restarts that deadline, so only the last slide of a
/// rapid burst completes. Work deferred by instant moves runs after yielding
/// once to the scheduler.
pub async fn run<S: Surface>(
    mut carousel: Carousel<S>,
    mut inputs: Receiver<Input>,
    transition: Duration,
    cancel: CancellationToken,
) -> Result<Carousel<S>> {
    let mut completes_at: Option<Instant> = None;

    if carousel.has_deferred() {
        tokio::task::yield_now().await;
        carousel.run_deferred();
    }

    loop {
        let motion = select! {
            _ = cancel.cancelled() => {
                info!("cancel received; stopping carousel");
                break;
            }
            maybe = inputs.recv() => match maybe {
                Some(input) => {
                    debug!(?input, "input");
                    carousel.handle(input)
                }
                None => {
                    debug!("input channel closed");
                    break;
                }
            },
            _ = sleep_until(completes_at.unwrap_or_else(Instant::now)), if completes_at.is_some() => {
                completes_at = None;
                carousel.handle(Input::TransitionEnd)
            }
        };

        match motion {
            Motion::Animated => completes_at = Some(Instant::now() + transition),
            Motion::Instant => completes_at = None,
            Motion::None => {}
        }

        if carousel.has_deferred() {
            tokio::task::yield_now().await;
            carousel.run_deferred();
        }
    }

    Ok(carousel)
}
