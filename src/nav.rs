//! Index state machine for the looping track.
//!
//! `current` is the track index of the slot at the viewport's leading edge.
//! Real items occupy `[visible, count + visible)`; navigation may step one slot
//! past either bound, and the completion of the slide animation re-seats the
//! index onto the matching real slot.

use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Resting on a real slot with no animation in flight.
    Settled,
    /// An animated slide was requested and has not completed yet.
    Advancing,
    /// The index was re-seated instantly and the transition restore is pending.
    Correcting,
}

/// How far past the real range the index was when the slide completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overshoot {
    None,
    /// One slot past a bound: the seamless wrap case.
    Single,
    /// More than one slot past a bound. Re-seated like a single step, so the
    /// extra steps are lost.
    Multi,
}

/// Result of a completed slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reseat {
    pub from: i64,
    pub to: i64,
    pub overshoot: Overshoot,
}

#[derive(Debug, Clone)]
pub struct Navigator {
    current: i64,
    visible: usize,
    count: usize,
    phase: Phase,
}

impl Navigator {
    /// Start at the first real slot.
    pub fn new(count: usize, visible: usize) -> Self {
        Self {
            current: visible as i64,
            visible,
            count,
            phase: Phase::Settled,
        }
    }

    #[must_use]
    pub fn current(&self) -> i64 {
        self.current
    }

    #[must_use]
    pub fn visible(&self) -> usize {
        self.visible
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index into the item sequence shown at the leading edge.
    #[must_use]
    pub fn real_index(&self) -> usize {
        real_index(self.current, self.visible, self.count)
    }

    pub fn step(&mut self, delta: i64) {
        self.current += delta;
        self.phase = Phase::Advancing;
        debug!(current = self.current, delta, "step");
    }

    /// Jump to the real slot for `display_index` (animated by the caller).
    pub fn seek(&mut self, display_index: usize) {
        self.current = (self.visible + display_index) as i64;
        self.phase = Phase::Advancing;
    }

    /// Handle completion of the slide animation. Returns the re-seat when the
    /// index was outside the real range; the caller must then move the track
    /// without animation and call [`Navigator::settle`] on the next tick.
    pub fn transition_end(&mut self) -> Option<Reseat> {
        let low = self.visible as i64;
        let high = (self.count + self.visible) as i64;
        let from = self.current;

        let (to, overshoot) = if from >= high {
            (low, classify(from - high))
        } else if from < low {
            (high - 1, classify(low - 1 - from))
        } else {
            if self.phase == Phase::Advancing {
                self.phase = Phase::Settled;
            }
            return None;
        };

        if overshoot == Overshoot::Multi {
            warn!(
                from,
                to,
                visible = self.visible,
                count = self.count,
                "index overshot by more than one slot; extra steps are dropped"
            );
        } else {
            debug!(from, to, "re-seating across wrap point");
        }
        self.current = to;
        self.phase = Phase::Correcting;
        Some(Reseat {
            from,
            to,
            overshoot,
        })
    }

    /// Finish a correction once the transition has been restored.
    pub fn settle(&mut self) {
        if self.phase == Phase::Correcting {
            self.phase = Phase::Settled;
        }
    }

    /// Rebase onto a new visible count, keeping the same real item in front.
    pub fn rebase(&mut self, visible: usize) {
        let real = self.real_index();
        self.visible = visible;
        self.current = (visible + real) as i64;
        self.phase = Phase::Correcting;
    }
}

fn classify(past_bound: i64) -> Overshoot {
    match past_bound {
        0 => Overshoot::Single,
        _ => Overshoot::Multi,
    }
}

/// `((current - visible) mod count + count) mod count`, zero for an empty sequence.
#[must_use]
pub fn real_index(current: i64, visible: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (current - visible as i64).rem_euclid(count as i64) as usize
}
