//! A surface with no display attached. Keeps the last rendered state so it can
//! be inspected, and logs every command.

use tracing::debug;

use crate::surface::{Role, Surface};
use crate::track::Slot;

#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    missing: Vec<Role>,
    pub slots: Vec<Slot>,
    pub handler_slots: Vec<Slot>,
    pub width_pct: f64,
    pub offset_pct: f64,
    pub transition_enabled: bool,
    pub overlay_visible: bool,
    pub modal_src: String,
    pub modal_alt: String,
    pub modal_counter: String,
    pub scroll_locked: bool,
    /// Number of times the track was re-rendered.
    pub renders: usize,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self {
            missing: Vec::new(),
            slots: Vec::new(),
            handler_slots: Vec::new(),
            width_pct: 0.0,
            offset_pct: 0.0,
            transition_enabled: true,
            overlay_visible: false,
            modal_src: String::new(),
            modal_alt: String::new(),
            modal_counter: String::new(),
            scroll_locked: false,
            renders: 0,
        }
    }

    /// A surface that reports `role` as absent.
    #[must_use]
    pub fn without(mut self, role: Role) -> Self {
        self.missing.push(role);
        self
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for HeadlessSurface {
    fn provides(&self, role: Role) -> bool {
        !self.missing.contains(&role)
    }

    fn render_track(&mut self, slots: &[Slot], width_pct: f64) {
        debug!(slots = slots.len(), width_pct, "render track");
        self.slots = slots.to_vec();
        self.width_pct = width_pct;
        self.renders += 1;
    }

    fn attach_item_handlers(&mut self, slots: &[Slot]) {
        self.handler_slots = slots.to_vec();
    }

    fn set_transition_enabled(&mut self, enabled: bool) {
        self.transition_enabled = enabled;
    }

    fn set_offset(&mut self, offset_pct: f64) {
        debug!(offset_pct, animated = self.transition_enabled, "translate track");
        self.offset_pct = offset_pct;
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        debug!(visible, "overlay");
        self.overlay_visible = visible;
    }

    fn set_modal_image(&mut self, src: &str, alt: &str) {
        self.modal_src = src.to_owned();
        self.modal_alt = alt.to_owned();
    }

    fn set_modal_counter(&mut self, text: &str) {
        debug!(counter = text, src = %self.modal_src, "modal");
        self.modal_counter = text.to_owned();
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }
}
