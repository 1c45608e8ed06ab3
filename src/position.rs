//! Translates the track so the slot at the current index sits flush with the
//! viewport's leading edge.

use tracing::trace;

use crate::surface::Surface;
use crate::track::slot_width_pct;

/// Offset in percent for the slot at `index` with `visible` slots per viewport.
#[must_use]
pub fn offset_pct(index: i64, visible: usize) -> f64 {
    -(index as f64 * slot_width_pct(visible))
}

/// Tracks whether an instant move left the transition effect disabled.
#[derive(Debug, Default)]
pub struct PositionUpdater {
    restore_pending: bool,
}

impl PositionUpdater {
    /// Move the track. An instant move disables the transition for this update
    /// only; [`PositionUpdater::restore`] re-enables it on the next tick.
    pub fn apply<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        index: i64,
        visible: usize,
        animate: bool,
    ) {
        if animate {
            self.restore_pending = false;
            surface.set_transition_enabled(true);
        } else {
            surface.set_transition_enabled(false);
            self.restore_pending = true;
        }
        let offset = offset_pct(index, visible);
        trace!(index, visible, animate, offset, "track position");
        surface.set_offset(offset);
    }

    /// Re-enable the transition after an instant move. Returns whether anything
    /// was restored.
    pub fn restore<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if !self.restore_pending {
            return false;
        }
        self.restore_pending = false;
        surface.set_transition_enabled(true);
        true
    }

    #[must_use]
    pub fn restore_pending(&self) -> bool {
        self.restore_pending
    }
}
