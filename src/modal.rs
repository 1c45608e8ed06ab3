//! Lightbox overlay for the item at the leading edge of the track.

use crate::item::ItemSequence;
use crate::surface::Surface;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        real_index: usize,
    },
}

impl ModalState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}

/// "3 / 10" style position text.
#[must_use]
pub fn counter_text(real_index: usize, count: usize) -> String {
    format!("{} / {}", real_index + 1, count)
}

/// Owns the overlay's visibility and keeps its image and counter in step with
/// the track.
#[derive(Debug, Default)]
pub struct ModalPresenter {
    state: ModalState,
}

impl ModalPresenter {
    #[must_use]
    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn show<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        items: &ItemSequence,
        real_index: usize,
    ) {
        surface.set_overlay_visible(true);
        self.state = ModalState::Open { real_index };
        self.refresh(surface, items, real_index);
        surface.set_scroll_locked(true);
    }

    pub fn hide<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.set_overlay_visible(false);
        surface.set_scroll_locked(false);
        self.state = ModalState::Closed;
    }

    /// Load the item at `real_index` and update the counter. No-op while closed.
    pub fn refresh<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        items: &ItemSequence,
        real_index: usize,
    ) {
        if !self.state.is_open() {
            return;
        }
        let Some(item) = items.get(real_index) else {
            return;
        };
        self.state = ModalState::Open { real_index };
        surface.set_modal_image(&item.src, &item.alt);
        surface.set_modal_counter(&counter_text(real_index, items.len()));
    }
}
