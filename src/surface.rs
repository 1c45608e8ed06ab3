//! The rendering boundary. A host environment implements [`Surface`] and the
//! controller drives it; nothing in the controller queries global state.

use std::fmt;

use crate::track::Slot;

/// Structural roles a surface must provide before a carousel will start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Track,
    InlinePrev,
    InlineNext,
    ModalPrev,
    ModalNext,
    Overlay,
    ModalImage,
    ModalCounter,
    CloseControl,
}

impl Role {
    pub const ALL: &'static [Self] = &[
        Self::Track,
        Self::InlinePrev,
        Self::InlineNext,
        Self::ModalPrev,
        Self::ModalNext,
        Self::Overlay,
        Self::ModalImage,
        Self::ModalCounter,
        Self::CloseControl,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Track => "track",
            Self::InlinePrev => "inline-prev",
            Self::InlineNext => "inline-next",
            Self::ModalPrev => "modal-prev",
            Self::ModalNext => "modal-next",
            Self::Overlay => "overlay",
            Self::ModalImage => "modal-image",
            Self::ModalCounter => "modal-counter",
            Self::CloseControl => "close-control",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering commands issued by the carousel controller.
pub trait Surface {
    /// Whether the host markup carries an element for `role`.
    fn provides(&self, role: Role) -> bool;

    /// Replace the rendered track with `slots`, each `width_pct` percent wide.
    fn render_track(&mut self, slots: &[Slot], width_pct: f64);

    /// Wire item clicks for every rendered slot. Slots carry the display
    /// index a click should report.
    fn attach_item_handlers(&mut self, slots: &[Slot]);

    fn set_transition_enabled(&mut self, enabled: bool);

    /// Translate the track; `offset_pct` is already negative for forward positions.
    fn set_offset(&mut self, offset_pct: f64);

    fn set_overlay_visible(&mut self, visible: bool);

    fn set_modal_image(&mut self, src: &str, alt: &str);

    fn set_modal_counter(&mut self, text: &str);

    fn set_scroll_locked(&mut self, locked: bool);
}
